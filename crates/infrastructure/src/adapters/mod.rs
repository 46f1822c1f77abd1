//! Adapters for the clock and randomness ports.

mod random;
mod system_clock;

pub use random::{SeededRandom, ThreadRandom};
pub use system_clock::SystemClock;
