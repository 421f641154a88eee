//! Slot arena that owns every node in the list.
//!
//! Nodes reference each other in four directions, so the graph is cyclic
//! under reachability. Holding all nodes in one arena and linking them by
//! index keeps ownership flat: the four structural links are plain handles,
//! and removal vacates slots instead of dropping nested pointers.

use crate::node::Node;

/// Handle to a node slot.
pub(crate) type NodeId = usize;

#[derive(Debug)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<Node<T>>>,
    vacant: Vec<NodeId>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: Vec::new(),
        }
    }

    /// Stores a node, reusing a vacated slot when one exists.
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.vacant.pop() {
            Some(id) => {
                self.slots[id] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Vacates a slot and returns the node it held.
    pub(crate) fn free(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id].take().expect("freed a vacant slot");
        self.vacant.push(id);
        node
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        self.slots[id].as_ref().expect("stale node id")
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id].as_mut().expect("stale node id")
    }

    /// Drops every node and forgets all vacated slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant.clear();
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub(crate) fn live(&self) -> usize {
        self.slots.len() - self.vacant.len()
    }
}
