//! Application use cases (business logic orchestration).

mod convert_backup;

pub use convert_backup::*;
