//! Random identifier generation.

use porter_domain::{ID_ALPHABET, ResourceKind};

use crate::ports::RandomSource;

/// Builds `<prefix>_<random alphanumerics>` identifiers.
#[derive(Debug)]
pub struct IdGenerator<R> {
    random: R,
}

impl<R: RandomSource> IdGenerator<R> {
    /// Creates a generator drawing from `random`.
    #[must_use]
    pub const fn new(random: R) -> Self {
        Self { random }
    }

    /// Generates an id for `kind` with `length` random characters, each drawn
    /// uniformly from the 62-symbol alphanumeric alphabet.
    ///
    /// Collisions are not checked here; the resource list rejects duplicate
    /// record ids.
    pub fn generate(&mut self, kind: ResourceKind, length: usize) -> String {
        let mut id = String::with_capacity(kind.prefix().len() + 1 + length);
        id.push_str(kind.prefix());
        id.push('_');
        id.extend((0..length).map(|_| {
            let idx = self.random.next_index(ID_ALPHABET.len());
            char::from(ID_ALPHABET[idx % ID_ALPHABET.len()])
        }));
        id
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Replays a fixed sequence of indices, wrapping around at the end.
    #[derive(Debug, Default)]
    pub(crate) struct SequenceRandom {
        values: Vec<usize>,
        pos: usize,
    }

    impl SequenceRandom {
        pub(crate) fn new(values: Vec<usize>) -> Self {
            Self { values, pos: 0 }
        }

        /// Counts up from zero: 0, 1, 2, ...
        pub(crate) fn counting() -> Self {
            Self::default()
        }
    }

    impl RandomSource for SequenceRandom {
        fn next_index(&mut self, bound: usize) -> usize {
            let value = if self.values.is_empty() {
                self.pos
            } else {
                self.values[self.pos % self.values.len()]
            };
            self.pos += 1;
            value % bound
        }
    }

    #[test]
    fn test_prefix_and_length() {
        let mut ids = IdGenerator::new(SequenceRandom::counting());
        let id = ids.generate(ResourceKind::Workspace, 20);
        assert_eq!(id, "wrk_ABCDEFGHIJKLMNOPQRST");

        let pair = ids.generate(ResourceKind::Pair, 10);
        assert_eq!(pair, "pair_UVWXYZabcd");
    }

    #[test]
    fn test_uses_whole_alphabet() {
        let mut ids = IdGenerator::new(SequenceRandom::new(vec![0, 25, 26, 51, 52, 61]));
        assert_eq!(ids.generate(ResourceKind::Request, 6), "req_AZaz09");
    }

    #[test]
    fn test_zero_length() {
        let mut ids = IdGenerator::new(SequenceRandom::counting());
        assert_eq!(ids.generate(ResourceKind::ApiSpec, 0), "spc_");
    }
}
