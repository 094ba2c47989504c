use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over the keys `0..num` taken alternately from both ends:
/// `0, num - 1, 1, num - 2, ...`.
/// Each new key falls between the two previous ones, so the tree keeps
/// hitting the zig-zag (LR and RL) shapes
pub struct ZigZagKeys {
    low: u32,
    high: u32,
    take_low: bool,
}

impl ZigZagKeys {
    pub fn new(num: usize) -> ZigZagKeys {
        assert!(num as u64 <= u32::MAX as u64, "{} keys overflow u32", num);
        ZigZagKeys {
            low: 0,
            high: num as u32,
            take_low: true,
        }
    }
}

impl Iterator for ZigZagKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.low == self.high {
            return None;
        }
        let key = if self.take_low {
            self.low += 1;
            self.low - 1
        } else {
            self.high -= 1;
            self.high
        };
        self.take_low = !self.take_low;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.high - self.low) as usize;
        (size, Some(size))
    }
}

impl FusedIterator for ZigZagKeys {}

impl ExactSizeIterator for ZigZagKeys {}
