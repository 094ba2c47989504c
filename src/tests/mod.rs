mod scenarios;

use crate::RBTree;
use simplelog::{Config, LevelFilter, TestLogger};

/// Route the tree's log records to the test output. Safe to call many times
fn init_logger() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

/// Insert every key, checking all invariants after each insertion
fn insert_checked<I>(keys: I) -> (RBTree, Vec<u32>)
where
    I: IntoIterator<Item = u32>,
{
    let mut tree = RBTree::new();
    let mut inserted = Vec::new();
    for key in keys {
        tree.insert(key);
        inserted.push(key);
        assert!(tree.root_is_black(), "red root after inserting {}", key);
        assert!(tree.no_red_red(), "red-red edge after inserting {}", key);
        assert!(
            tree.black_height_consistent(),
            "uneven black height after inserting {}",
            key
        );
        assert!(tree.links_consistent(), "broken links after inserting {}", key);
    }
    (tree, inserted)
}
