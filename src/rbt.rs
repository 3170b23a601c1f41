//! Module provide ordered-set implemented by [RBTree] type.
//!
//! RBTree is the parent-linked [red-black][wiki-rbt] tree from CLRS,
//! supporting insert, lookup and in-order scan. Deletion is not
//! supported.
//!
//! Red-black rules, held after every insert:
//!
//! * Every node is either red or black.
//! * Root is black, absent children count as black.
//! * A red node never has a red child.
//! * Every path from a node down to an absent child crosses the same
//!   number of black nodes.
//!
//! [wiki-rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree

use log::{debug, trace};

use std::{
    borrow::Borrow,
    cmp::{self, Ord, Ordering},
    fmt,
    iter::FromIterator,
};

use crate::{
    arena::Arena,
    node::{color_of, Color, Node, NodeId, NodeRef, Side},
    Error, Result,
};

/// RBTree manage a single instance of in-memory ordered-set using
/// [red-black][rbt] tree.
///
/// [rbt]: https://en.wikipedia.org/wiki/Red%E2%80%93black_tree
#[derive(Clone)]
pub struct RBTree<K> {
    arena: Arena<Node<K>>,
    root: Option<NodeId>,
}

/// Statistics gathered by [RBTree::validate].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Stats {
    /// Number of keys in the tree.
    pub entries: usize,
    /// Number of black nodes on any path from root to an absent child.
    pub black_height: usize,
    /// Number of nodes on the longest path from root to a leaf.
    pub depth: usize,
}

impl<K> Default for RBTree<K> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<K> RBTree<K> {
    /// Create an empty instance of RBTree.
    pub fn new() -> RBTree<K> {
        RBTree {
            arena: Arena::new(),
            root: None,
        }
    }

    /// Create an empty instance with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> RBTree<K> {
        RBTree {
            arena: Arena::with_capacity(capacity),
            root: None,
        }
    }
}

/// Maintenance API.
impl<K> RBTree<K> {
    /// Return number of keys in this instance.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Check whether this index is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Return number of keys this instance can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Return the root node, None if tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, K>> {
        self.root.map(|id| self.node(id))
    }

    /// Return a view of the node identified by `id`.
    ///
    /// Panics if `id` is out of range for this instance. Handles issued by
    /// another tree must not be passed in.
    pub fn node(&self, id: NodeId) -> NodeRef<'_, K> {
        // bounds check up front, so the returned view is always valid.
        self.arena.get(id);
        NodeRef {
            arena: &self.arena,
            id,
        }
    }
}

impl<K> RBTree<K> {
    /// Lookup `key` and return its node, None if key is not present.
    pub fn search<Q>(&self, key: &Q) -> Option<NodeRef<'_, K>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(id) = curr {
            let node = self.arena.get(id);
            curr = match node.key.borrow().cmp(key) {
                Ordering::Less => node.right,
                Ordering::Greater => node.left,
                Ordering::Equal => return Some(self.node(id)),
            };
        }
        None
    }

    /// Check whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Visit every node in ascending key order.
    ///
    /// Each call walks the whole tree, use [RBTree::iter] for a lazy scan.
    ///
    /// ```
    /// use rbt::RBTree;
    ///
    /// let index: RBTree<i32> = vec![30, 10, 20].into_iter().collect();
    ///
    /// let mut keys = vec![];
    /// index.in_order_walk(|node| keys.push((*node.key(), node.color())));
    /// assert_eq!(keys.len(), 3);
    /// assert_eq!(keys[1], (20, rbt::Color::Black));
    /// ```
    pub fn in_order_walk<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        self.do_walk(self.root, &mut visit)
    }

    fn do_walk<'a, F>(&'a self, id: Option<NodeId>, visit: &mut F)
    where
        F: FnMut(NodeRef<'a, K>),
    {
        if let Some(id) = id {
            let node = self.arena.get(id);
            self.do_walk(node.left, visit);
            visit(self.node(id));
            self.do_walk(node.right, visit);
        }
    }

    /// Return an iterator over all nodes in ascending key order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut paths = Vec::default();
        build_iter(&self.arena, self.root, &mut paths);
        Iter {
            arena: &self.arena,
            paths,
        }
    }
}

impl<K> RBTree<K> {
    /// Insert `key` and return the handle of its node. If `key` is
    /// already present, the tree is left untouched and the handle of the
    /// existing node is returned.
    pub fn insert(&mut self, key: K) -> NodeId
    where
        K: Ord,
    {
        let mut curr = match self.root {
            Some(root) => root,
            None => {
                let mut node = Node::new(key);
                node.set_black();
                let id = self.arena.alloc(node);
                self.root = Some(id);
                return id;
            }
        };

        let side = loop {
            let node = self.arena.get(curr);
            let side = match node.key.cmp(&key) {
                Ordering::Equal => return curr,
                Ordering::Greater => Side::Left,
                Ordering::Less => Side::Right,
            };
            match node.child(side) {
                Some(child) => curr = child,
                None => break side,
            }
        };

        let mut node = Node::new(key);
        node.parent = Some(curr);
        let id = self.arena.alloc(node);
        self.arena.get_mut(curr).set_child(side, Some(id));

        self.insert_fixup(id);
        id
    }

    // Restore red-black rules after linking the red leaf `node`. The only
    // rule that can break is red-node-with-red-parent, localised at `node`.
    fn insert_fixup(&mut self, mut node: NodeId) {
        loop {
            let parent = match self.arena.get(node).parent {
                Some(parent) if self.arena.get(parent).is_red() => parent,
                _ => break,
            };
            assert!(
                self.arena.get(node).is_red(),
                "insert_fixup(): black node {} in red violation, call the programmer",
                node
            );
            // red parent is never the root, hence grandparent exists.
            let grandparent = match self.arena.get(parent).parent {
                Some(grandparent) => grandparent,
                None => panic!("insert_fixup(): red root {}, call the programmer", parent),
            };
            let side = self.side_of(parent, grandparent);
            let uncle = self.arena.get(grandparent).child(side.opposite());

            if let (Color::Red, Some(uncle)) = (color_of(&self.arena, uncle), uncle) {
                trace!("insert_fixup: case-3 recolor at {}", grandparent);
                self.arena.get_mut(parent).set_black();
                self.arena.get_mut(uncle).set_black();
                self.arena.get_mut(grandparent).set_red();
                node = grandparent;
                continue;
            }

            if self.side_of(node, parent) != side {
                trace!("insert_fixup: case-2 zig-zag at {}", parent);
                node = parent;
                self.rotate(node, side);
            }

            trace!("insert_fixup: case-1 rotate at {}", grandparent);
            let parent = self.parent_of(node);
            let grandparent = self.parent_of(parent);
            self.arena.get_mut(parent).set_black();
            self.arena.get_mut(grandparent).set_red();
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.arena.get_mut(root).set_black();
        }
    }

    // Rotate `x` towards `side`, its child on the opposite side takes x's
    // place. Rotating towards Side::Left is the textbook left-rotate.
    //
    //              (p)                        (p)
    //               |                          |
    //               x      rotate-left         y
    //              / \     ---------->        / \
    //             a   y                      x   c
    //                / \                    / \
    //               b   c                  a   b
    //
    fn rotate(&mut self, x: NodeId, side: Side) {
        let y = match self.arena.get(x).child(side.opposite()) {
            Some(y) => y,
            None => panic!(
                "rotate(): {} has no {:?} child, call the programmer",
                x,
                side.opposite()
            ),
        };
        trace!("rotate-{:?} at {} pivot {}", side, x, y);

        let inner = self.arena.get(y).child(side);
        self.arena.get_mut(x).set_child(side.opposite(), inner);
        if let Some(inner) = inner {
            self.arena.get_mut(inner).parent = Some(x);
        }

        let parent = self.arena.get(x).parent;
        self.arena.get_mut(y).parent = parent;
        match parent {
            None => self.root = Some(y),
            Some(parent) => {
                let pside = self.side_of(x, parent);
                self.arena.get_mut(parent).set_child(pside, Some(y));
            }
        }

        self.arena.get_mut(y).set_child(side, Some(x));
        self.arena.get_mut(x).parent = Some(y);
    }

    fn side_of(&self, child: NodeId, parent: NodeId) -> Side {
        let node = self.arena.get(parent);
        if node.left == Some(child) {
            Side::Left
        } else if node.right == Some(child) {
            Side::Right
        } else {
            panic!("side_of(): {} not a child of {}, call the programmer", child, parent)
        }
    }

    fn parent_of(&self, id: NodeId) -> NodeId {
        match self.arena.get(id).parent {
            Some(parent) => parent,
            None => panic!("parent_of(): {} is root, call the programmer", id),
        }
    }
}

impl<K> RBTree<K> {
    /// Validate tree with following rules:
    ///
    /// * Root is black.
    /// * From root to any leaf, no consecutive reds allowed in its path.
    /// * Number of blacks should be same under left child and right child.
    /// * Keys are in strictly ascending order.
    /// * Every child's parent link points back to its parent.
    ///
    /// Additionally return statistics on the tree. Refer to [Stats]
    /// for more information.
    pub fn validate(&self) -> Result<Stats>
    where
        K: Ord + fmt::Debug,
    {
        let root = match self.root {
            Some(root) => root,
            None if self.arena.is_empty() => return Ok(Stats::default()),
            None => err_at!(Fatal, msg: "no root for {} entries", self.len())?,
        };

        if color_of(&self.arena, Some(root)) == Color::Red {
            err_at!(RedRoot, msg: "root {} is red", root)?;
        }

        let mut n_count = 0;
        let (black_height, depth) = self.validate_tree(Some(root), None, &mut n_count)?;
        if n_count != self.len() {
            err_at!(Fatal, msg: "mismatch in count {} != {}", n_count, self.len())?;
        }

        let mut prev: Option<&K> = None;
        for nref in self.iter() {
            match prev {
                Some(prev) if prev >= nref.key() => {
                    err_at!(UnsortedKeys, msg: "{:?} before {:?}", prev, nref.key())?
                }
                _ => prev = Some(nref.key()),
            }
        }

        let stats = Stats {
            entries: n_count,
            black_height,
            depth,
        };
        debug!("validate: {:?}", stats);
        Ok(stats)
    }

    // Return (black-height, depth) of sub-tree under `id`.
    fn validate_tree(
        &self,
        id: Option<NodeId>,
        parent: Option<NodeId>,
        n_count: &mut usize,
    ) -> Result<(usize, usize)> {
        let id = match id {
            Some(id) => id,
            None => return Ok((0, 0)),
        };
        let node = self.arena.get(id);

        if node.parent != parent {
            err_at!(BrokenParent, msg: "{} expected parent {:?}", id, parent)?;
        }
        if node.is_red() && color_of(&self.arena, parent) == Color::Red {
            err_at!(ConsecutiveReds, msg: "at {} under {:?}", id, parent)?;
        }
        *n_count += 1;

        let (lblacks, ldepth) = self.validate_tree(node.left, Some(id), n_count)?;
        let (rblacks, rdepth) = self.validate_tree(node.right, Some(id), n_count)?;
        if lblacks != rblacks {
            err_at!(UnbalancedBlacks, msg: "at {} {} {}", id, lblacks, rblacks)?;
        }

        let blacks = match node.color {
            Color::Black => lblacks + 1,
            Color::Red => lblacks,
        };
        Ok((blacks, cmp::max(ldepth, rdepth) + 1))
    }
}

impl<K> Extend<K> for RBTree<K>
where
    K: Ord,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = K>,
    {
        iter.into_iter().for_each(|key| {
            self.insert(key);
        });
    }
}

impl<K> FromIterator<K> for RBTree<K>
where
    K: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let mut index = RBTree::new();
        index.extend(iter);
        index
    }
}

/// Lazy in-order iterator over the nodes of an [RBTree].
pub struct Iter<'a, K> {
    arena: &'a Arena<Node<K>>,
    paths: Vec<NodeId>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = NodeRef<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.paths.pop()?;
        build_iter(self.arena, self.arena.get(id).right, &mut self.paths);
        Some(NodeRef {
            arena: self.arena,
            id,
        })
    }
}

// push the left spine under `id`, smallest key ends up on top.
fn build_iter<K>(arena: &Arena<Node<K>>, mut id: Option<NodeId>, paths: &mut Vec<NodeId>) {
    while let Some(nid) = id {
        paths.push(nid);
        id = arena.get(nid).left;
    }
}

#[cfg(test)]
#[path = "rbt_test.rs"]
mod rbt_test;
