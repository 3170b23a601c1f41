use crate::node::NodeId;

// Push-only table of tree nodes. Nodes are never freed, so a handle
// issued by alloc() stays valid for as long as the arena lives.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Arena {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub(crate) fn alloc(&mut self, element: T) -> NodeId {
        let id = NodeId::from_index(self.slots.len());
        self.slots.push(element);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &T {
        match self.slots.get(id.to_index()) {
            Some(element) => element,
            None => panic!("Arena::get(): invalid handle {}", id),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut T {
        match self.slots.get_mut(id.to_index()) {
            Some(element) => element,
            None => panic!("Arena::get_mut(): invalid handle {}", id),
        }
    }
}

#[cfg(test)]
#[path = "arena_test.rs"]
mod arena_test;
