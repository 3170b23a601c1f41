use std::{fmt, num::NonZeroUsize};

use crate::arena::Arena;

/// Color of a node, absent children count as [Color::Black].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "R"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// Handle to a node stored in an [RBTree](crate::RBTree).
///
/// Handles stay valid for the life time of the tree that issued them,
/// nodes are never removed once inserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(NonZeroUsize);

impl NodeId {
    #[inline]
    pub(crate) fn from_index(index: usize) -> NodeId {
        match index.checked_add(1).and_then(NonZeroUsize::new) {
            Some(n) => NodeId(n),
            None => panic!("NodeId::from_index(): index overflow {}", index),
        }
    }

    #[inline]
    pub(crate) fn to_index(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.to_index())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

// Node corresponds to a single key in RBTree instance.
#[derive(Clone)]
pub(crate) struct Node<K> {
    pub key: K,
    pub color: Color,
    pub left: Option<NodeId>,   // owning: left child
    pub right: Option<NodeId>,  // owning: right child
    pub parent: Option<NodeId>, // back-reference, never owning
}

impl<K> Node<K> {
    // fresh nodes are red, inserting a red leaf never changes black-height.
    pub fn new(key: K) -> Node<K> {
        Node {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent: None,
        }
    }

    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub fn set_child(&mut self, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    #[inline]
    pub fn set_red(&mut self) {
        self.color = Color::Red
    }

    #[inline]
    pub fn set_black(&mut self) {
        self.color = Color::Black
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Read-only view of a node, borrowed from its tree.
///
/// Consumers like renderers and validators navigate the tree shape
/// through this type; structural mutation happens only via
/// [RBTree::insert](crate::RBTree::insert).
pub struct NodeRef<'a, K> {
    pub(crate) arena: &'a Arena<Node<K>>,
    pub(crate) id: NodeId,
}

impl<'a, K> Clone for NodeRef<'a, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, K> Copy for NodeRef<'a, K> {}

impl<'a, K> NodeRef<'a, K> {
    #[inline]
    fn as_node(&self) -> &'a Node<K> {
        self.arena.get(self.id)
    }

    #[inline]
    fn to_ref(&self, id: Option<NodeId>) -> Option<NodeRef<'a, K>> {
        let arena = self.arena;
        id.map(|id| NodeRef { arena, id })
    }

    /// Return the handle of this node, stable across inserts.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn key(&self) -> &'a K {
        &self.as_node().key
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.as_node().color
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    #[inline]
    pub fn left(&self) -> Option<NodeRef<'a, K>> {
        self.to_ref(self.as_node().left)
    }

    #[inline]
    pub fn right(&self) -> Option<NodeRef<'a, K>> {
        self.to_ref(self.as_node().right)
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeRef<'a, K>> {
        self.to_ref(self.as_node().parent)
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.as_node().parent.is_none()
    }

    /// Return true if this node hangs on its parent's left link.
    pub fn is_left_child(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.as_node().left == Some(self.id),
            None => false,
        }
    }
}

impl<'a, K> fmt::Debug for NodeRef<'a, K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}:{:?}>", self.color(), self.key())
    }
}

/// Color of a possibly absent node, nil nodes are black.
#[inline]
pub(crate) fn color_of<K>(arena: &Arena<Node<K>>, id: Option<NodeId>) -> Color {
    id.map_or(Color::Black, |id| arena.get(id).color)
}

#[cfg(test)]
#[path = "node_test.rs"]
mod node_test;
