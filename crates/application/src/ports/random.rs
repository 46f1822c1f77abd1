//! Random source port.

/// Source of uniformly distributed indices.
///
/// Identifier generation draws every character through this port so that
/// tests can replay a fixed sequence and assert exact documents.
pub trait RandomSource {
    /// Returns a value in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}
