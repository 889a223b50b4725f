//! An ordered map backed by a height-balanced [AVL tree].
//!
//! [`AvlMap`] maps unique, totally ordered keys to values, providing
//! `O(log n)` insert-or-update, lookup and existence checks, and iteration in
//! ascending key order.
//!
//! ```
//! use avlmap::AvlMap;
//!
//! let mut t = AvlMap::new();
//!
//! for k in [10, 20, 30, 40, 50, 25] {
//!     t.put(k, k * 2);
//! }
//!
//! // Replacing a value does not add an entry.
//! assert_eq!(t.put(25, 0), Some(50));
//!
//! assert_eq!(t.get(&25), Some(&0));
//! assert!(!t.contains_key(&26));
//! assert_eq!(t.height(), 3);
//!
//! let keys = t.iter().map(|(k, _v)| *k).collect::<Vec<_>>();
//! assert_eq!(keys, [10, 20, 25, 30, 40, 50]);
//! ```
//!
//! The [`words`] module builds word frequency counting, top-k selection and
//! stopword filtering on top of the map.
//!
//! [AVL tree]: https://en.wikipedia.org/wiki/AVL_tree

#![deny(rustdoc::broken_intra_doc_links, rust_2018_idioms)]
#![warn(missing_debug_implementations)]

mod error;
mod iter;
mod map;
mod node;
pub mod words;

#[cfg(test)]
mod test_utils;

pub use error::*;
pub use iter::{IntoIter, Iter};
pub use map::*;
