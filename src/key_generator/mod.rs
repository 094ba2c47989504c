//! Deterministic key sequences used to drive the tree in tests and benches
mod random;
mod sequential;
mod zigzag;

pub use random::*;
pub use sequential::*;
pub use zigzag::*;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_sizes() {
        for num in vec![0, 1, 2, 7, 100] {
            check_len(SequentialKeys::new(0, num, SequentialOrder::Ascending), num);
            check_len(SequentialKeys::new(0, num, SequentialOrder::Descending), num);
            check_len(RandomKeys::new(num, 1000, 17), num);
            check_len(ZigZagKeys::new(num), num);
        }
    }

    fn check_len<T>(mut gen: T, num: usize)
    where
        T: ExactSizeIterator<Item = u32>,
    {
        assert_eq!(gen.len(), num);
        let mut produced = 0;
        while let Some(_) = gen.next() {
            produced += 1;
            assert_eq!(gen.len(), num - produced);
        }
        assert_eq!(produced, num);
        assert_eq!(gen.next(), None);
    }
}
