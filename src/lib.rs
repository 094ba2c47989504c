//! An ordered multiset of unsigned integer keys stored in a red-black tree.
//!
//! ```
//! use rb_keyset::RBTree;
//!
//! let mut tree = RBTree::create(10);
//! for key in vec![20, 30, 15, 25, 5] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![5, 10, 15, 20, 25, 30]);
//! assert!(tree.black_height_consistent());
//! ```
#[cfg(test)]
mod tests;

mod error;
pub mod rbtree;

#[cfg(feature = "key-generator")]
pub mod key_generator;

pub use error::AllocationError;
pub use rbtree::{Color, ColorCounts, InOrder, RBTree};

/// Upper bound on the height of a red-black tree holding `num` nodes:
/// `2 * log2(num + 1)`, rounded down
pub fn max_height(num: usize) -> usize {
    (2. * ((num as f64) + 1.).log2()).floor() as usize
}
