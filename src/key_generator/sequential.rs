use std::iter::{ExactSizeIterator, FusedIterator};

/// An iterator over `num` consecutive keys starting at `start`, walked in
/// either direction. Ascending input is the worst case for an unbalanced
/// search tree and exercises the right-leaning rotations
pub struct SequentialKeys {
    start: u32,
    position: u32,
    num: u32,
    order: SequentialOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequentialOrder {
    Ascending,
    Descending,
}

impl SequentialKeys {
    pub fn new(start: u32, num: usize, order: SequentialOrder) -> SequentialKeys {
        assert!(
            num <= u32::MAX as usize && num as u64 <= u32::MAX as u64 - start as u64 + 1,
            "{} keys from {} overflow u32",
            num,
            start
        );
        SequentialKeys {
            start,
            position: 0,
            num: num as u32,
            order,
        }
    }
}

impl Iterator for SequentialKeys {
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position == self.num {
            return None;
        }
        let offset = match self.order {
            SequentialOrder::Ascending => self.position,
            SequentialOrder::Descending => self.num - 1 - self.position,
        };
        self.position += 1;
        Some(self.start + offset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = (self.num - self.position) as usize;
        (size, Some(size))
    }
}

impl FusedIterator for SequentialKeys {}

impl ExactSizeIterator for SequentialKeys {}
