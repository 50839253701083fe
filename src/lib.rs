//! An ordered multimap and multiset implemented with an AVL tree.
//!
//! Entries are kept sorted by key in a height-balanced binary search tree.
//! Insertion, removal and lookup take logarithmic time; iteration visits the
//! entries in key order. Equal keys are permitted: inserting an existing key
//! stores another entry instead of replacing the old one.
//!
//! ```
//! use avl_multimap::{AvlMultiMap, AvlMultiSet};
//!
//! let mut map = AvlMultiMap::new();
//! map.insert(1, "one");
//! map.insert(2, "two");
//! map.insert(2, "dos");
//! assert_eq!(map.get(&1), Some(&"one"));
//! assert_eq!(map.len(), 3);
//! map.remove(&2);
//! assert_eq!(map.len(), 2);
//!
//! let mut set = AvlMultiSet::new();
//! set.insert("a");
//! set.insert("a");
//! assert_eq!(set.len(), 2);
//! ```

pub mod map;
pub mod set;


pub use map::AvlMultiMap;
pub use set::AvlMultiSet;
