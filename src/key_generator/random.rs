use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator that will generate `num` keys uniformly drawn from
/// `[0, max_key)`. The sequence only depends on `seed`.
/// A small `max_key` produces plenty of duplicates
pub struct RandomKeys {
    remaining: usize,
    max_key: u32,
    rng: Pcg64,
}

impl RandomKeys {
    pub fn new(num: usize, max_key: u32, seed: u64) -> RandomKeys {
        assert!(max_key > 0, "Invalid max_key 0: empty key range");
        RandomKeys {
            remaining: num,
            max_key,
            rng: Pcg64::seed_from_u64(seed),
        }
    }
}

impl Iterator for RandomKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.rng.gen_range(0, self.max_key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl FusedIterator for RandomKeys {}

impl ExactSizeIterator for RandomKeys {}
