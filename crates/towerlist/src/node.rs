//! Node representation: one key occurrence at one level.

use crate::arena::NodeId;

/// What a node carries.
///
/// Sentinels head each level and carry nothing. An entry's promoted copies
/// above the base level are towers holding the key only; the payload lives
/// in the base entry, reachable through the `down` chain.
#[derive(Debug)]
pub(crate) enum NodeKind<T> {
    Sentinel,
    Tower { key: i32 },
    Entry { key: i32, value: T },
}

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) kind: NodeKind<T>,
    /// Vertical height of this instance; 0 is the base level.
    pub(crate) level: usize,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
    pub(crate) up: Option<NodeId>,
    pub(crate) down: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn sentinel(level: usize) -> Self {
        Self::with_kind(NodeKind::Sentinel, level)
    }

    pub(crate) fn tower(key: i32, level: usize) -> Self {
        Self::with_kind(NodeKind::Tower { key }, level)
    }

    pub(crate) fn entry(key: i32, value: T) -> Self {
        Self::with_kind(NodeKind::Entry { key, value }, 0)
    }

    fn with_kind(kind: NodeKind<T>, level: usize) -> Self {
        Self {
            kind,
            level,
            prev: None,
            next: None,
            up: None,
            down: None,
        }
    }

    /// The node's key, or `None` for a sentinel.
    pub(crate) fn key(&self) -> Option<i32> {
        match self.kind {
            NodeKind::Sentinel => None,
            NodeKind::Tower { key } | NodeKind::Entry { key, .. } => Some(key),
        }
    }
}
