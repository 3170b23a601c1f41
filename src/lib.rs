//! Package implement an ordered set using [red-black][wiki-rbt] tree.
//!
//! Quoting from [Wikipedia][wiki-rbt]:
//!
//! > A red-black tree is a self-balancing binary search tree, where each
//! > node has an extra bit, and that bit is often interpreted as the color
//! > (red or black). These colors are used to ensure that the tree remains
//! > balanced during insertions and deletions.
//!
//! [RBTree] is the classic, parent-linked red-black tree as described in
//! CLRS chapter 13, restricted to insertion:
//!
//! - Parametrised over `key-type`, any type implementing `Ord`.
//! - Insert, via insert(), lookup via search() and contains_key().
//! - Full table scan, via in_order_walk() and iter().
//! - Duplicate inserts are idempotent and return the existing node.
//! - Nodes live in an arena and refer to each other by [NodeId], parent
//!   links are plain indices and never own their target.
//! - Not thread safe, wrap the whole tree in a lock if it must be shared.
//!
//! Constructing a new [RBTree] instance and looking up keys:
//!
//! ```
//! use rbt::{Color, RBTree};
//!
//! let mut index: RBTree<u32> = RBTree::new();
//! assert_eq!(index.len(), 0);
//! assert_eq!(index.is_empty(), true);
//!
//! for key in [1, 2, 3].iter() {
//!     index.insert(*key);
//! }
//!
//! let root = index.root().unwrap();
//! assert_eq!(*root.key(), 2);
//! assert_eq!(root.color(), Color::Black);
//!
//! assert_eq!(index.search(&3).map(|n| *n.key()), Some(3));
//! assert!(index.search(&4).is_none());
//!
//! let mut keys = vec![];
//! index.in_order_walk(|node| keys.push(*node.key()));
//! assert_eq!(keys, vec![1, 2, 3]);
//!
//! index.validate().unwrap();
//! ```
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use std::{error, fmt, result};

// Short form to compose Error values.
//
// Here are few possible ways:
//
// ```ignore
// use crate::Error;
// err_at!(Fatal, msg: format!("bad argument"));
// ```
//
// ```ignore
// use crate::Error;
// err_at!(ConsecutiveReds, msg: "at node {}", id);
// ```
//
macro_rules! err_at {
    ($v:ident, msg: $($arg:expr),+) => {{
        let prefix = format!("{}:{}", file!(), line!());
        Err(Error::$v(prefix, format!($($arg),+)))
    }};
}

mod arena;
mod node;
mod rbt;
mod render;

pub use crate::node::{Color, NodeId, NodeRef};
pub use crate::rbt::{Iter, RBTree, Stats};

/// Error variants that are returned by this package's API.
///
/// Each variant carries a prefix, typically identifying the
/// error location.
pub enum Error {
    Fatal(String, String),
    RedRoot(String, String),
    ConsecutiveReds(String, String),
    UnbalancedBlacks(String, String),
    UnsortedKeys(String, String),
    BrokenParent(String, String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        use Error::*;

        match self {
            Fatal(p, msg) => write!(f, "{} Fatal: {}", p, msg),
            RedRoot(p, msg) => write!(f, "{} RedRoot: {}", p, msg),
            ConsecutiveReds(p, msg) => write!(f, "{} ConsecutiveReds: {}", p, msg),
            UnbalancedBlacks(p, msg) => write!(f, "{} UnbalancedBlacks: {}", p, msg),
            UnsortedKeys(p, msg) => write!(f, "{} UnsortedKeys: {}", p, msg),
            BrokenParent(p, msg) => write!(f, "{} BrokenParent: {}", p, msg),
        }
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> result::Result<(), fmt::Error> {
        write!(f, "{}", self)
    }
}

impl error::Error for Error {}

/// Type alias for Result return type, used by this package.
pub type Result<T> = result::Result<T, Error>;
