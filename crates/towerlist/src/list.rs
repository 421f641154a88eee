//! The skip list proper: search, splice, randomized promotion, and removal.

use std::fmt;

use rand::Rng;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::arena::{Arena, NodeId};
use crate::error::SkipListError;
use crate::node::{Node, NodeKind};

/// Default promotion probability.
const DEFAULT_PROB: f64 = 0.5;

/// An ordered map from non-zero `i32` keys to values of type `T`, backed by
/// a probabilistic multi-level linked structure.
///
/// Lookup, insertion, and removal run in expected O(log n) time without any
/// rebalancing: each inserted key is promoted to additional levels while
/// successive coin flips succeed, so every level above the base is a
/// randomly thinned subsequence of the level below, and searches descend
/// from the sparse top toward the dense base.
///
/// The key `0` is reserved and rejected by every key-taking operation.
///
/// The structure is single-threaded by design: it carries no
/// synchronization and must not be mutated from multiple threads without
/// external locking.
///
/// # Example
///
/// ```
/// use towerlist::SkipList;
///
/// let mut list = SkipList::new();
/// list.add(3, "three")?;
/// list.add(1, "one")?;
///
/// assert_eq!(list.get(3)?, Some(&"three"));
/// assert_eq!(list.len(), 2);
///
/// let keys: Vec<i32> = list.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![1, 3]);
/// # Ok::<(), towerlist::SkipListError>(())
/// ```
#[derive(Debug)]
pub struct SkipList<T, R = StdRng> {
    arena: Arena<T>,
    /// Topmost sentinel of the vertically linked sentinel column.
    head: NodeId,
    prob: f64,
    len: usize,
    rng: R,
}

impl<T> SkipList<T> {
    /// Creates an empty list with the default promotion probability (0.5)
    /// and an OS-seeded random source.
    pub fn new() -> Self {
        Self::build(DEFAULT_PROB, StdRng::from_os_rng())
    }

    /// Creates an empty list with the given promotion probability.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] unless `prob` lies in the open
    /// interval (0, 1). Out-of-range values are rejected, not clamped.
    pub fn with_probability(prob: f64) -> Result<Self, SkipListError> {
        Self::with_rng(prob, StdRng::from_os_rng())
    }
}

impl<T> Default for SkipList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: RngCore> SkipList<T, R> {
    /// Creates an empty list with the given probability and random source.
    ///
    /// Each list owns its generator; supplying a seeded one makes promotion
    /// fully deterministic, which is how the test suite drives the
    /// structure into known shapes.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] unless `prob` lies in the open
    /// interval (0, 1).
    pub fn with_rng(prob: f64, rng: R) -> Result<Self, SkipListError> {
        if !(prob > 0.0 && prob < 1.0) {
            return Err(SkipListError::InvalidArgument(
                "probability must lie in (0, 1)",
            ));
        }
        Ok(Self::build(prob, rng))
    }

    fn build(prob: f64, rng: R) -> Self {
        let mut arena = Arena::new();
        let head = arena.alloc(Node::sentinel(0));
        Self {
            arena,
            head,
            prob,
            len: 0,
            rng,
        }
    }

    /// Inserts `key` with `value`, overwriting the value in place if the
    /// key is already present (no new node, no length change, no
    /// re-promotion).
    ///
    /// A fresh key is spliced into the base level right after its tightest
    /// predecessor, then promoted one level per successful coin flip: the
    /// predecessor chain is walked backward to the nearest node whose
    /// column reaches the next level, a tower copy is spliced in after it,
    /// and the copy is linked down to the one below. When a chain reaches
    /// the current top, a new sentinel level is grown first. There is no
    /// height cap beyond the stochastic process.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] if `key == 0`; the list is left
    /// unmodified.
    pub fn add(&mut self, key: i32, value: T) -> Result<(), SkipListError> {
        check_key(key)?;
        let found = self.find(key);
        if self.arena.get(found).key() == Some(key) {
            let base = self.base_of(found);
            match &mut self.arena.get_mut(base).kind {
                NodeKind::Entry { value: slot, .. } => *slot = value,
                _ => unreachable!("keyed column ends in a base entry"),
            }
            return Ok(());
        }

        // `found` is the tightest base-level predecessor.
        let mut pred = found;
        let mut below = self.arena.alloc(Node::entry(key, value));
        self.splice_after(pred, below);

        let mut level = 0;
        while self.coin_flip() {
            if level >= self.arena.get(self.head).level {
                self.grow_head();
            }
            // The nearest predecessor with a vertical link marks where a
            // column already exists one level up. The walk is bounded: the
            // level sentinel gained an up link when the head grew.
            loop {
                if let Some(above) = self.arena.get(pred).up {
                    pred = above;
                    break;
                }
                pred = self
                    .arena
                    .get(pred)
                    .prev
                    .expect("a linked sentinel bounds the predecessor walk");
            }
            level += 1;
            let copy = self.arena.alloc(Node::tower(key, level));
            self.splice_after(pred, copy);
            self.arena.get_mut(copy).down = Some(below);
            self.arena.get_mut(below).up = Some(copy);
            below = copy;
        }

        self.len += 1;
        Ok(())
    }

    /// Draws one promotion trial.
    fn coin_flip(&mut self) -> bool {
        self.rng.random::<f64>() < self.prob
    }

    /// Pushes a new sentinel level above the current head.
    fn grow_head(&mut self) {
        let level = self.arena.get(self.head).level + 1;
        let new_head = self.arena.alloc(Node::sentinel(level));
        self.arena.get_mut(new_head).down = Some(self.head);
        self.arena.get_mut(self.head).up = Some(new_head);
        self.head = new_head;
    }
}

impl<T, R> SkipList<T, R> {
    /// Number of entries. A key promoted to several levels counts once.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of levels currently present. An empty list has height 1.
    pub fn height(&self) -> usize {
        self.arena.get(self.head).level + 1
    }

    /// Returns a reference to the value for `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] if `key == 0`.
    pub fn get(&self, key: i32) -> Result<Option<&T>, SkipListError> {
        check_key(key)?;
        let found = self.find(key);
        if self.arena.get(found).key() != Some(key) {
            return Ok(None);
        }
        let base = self.base_of(found);
        match &self.arena.get(base).kind {
            NodeKind::Entry { value, .. } => Ok(Some(value)),
            _ => unreachable!("keyed column ends in a base entry"),
        }
    }

    /// Returns a mutable reference to the value for `key`, or `None` if
    /// absent.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] if `key == 0`.
    pub fn get_mut(&mut self, key: i32) -> Result<Option<&mut T>, SkipListError> {
        check_key(key)?;
        let found = self.find(key);
        if self.arena.get(found).key() != Some(key) {
            return Ok(None);
        }
        let base = self.base_of(found);
        match &mut self.arena.get_mut(base).kind {
            NodeKind::Entry { value, .. } => Ok(Some(value)),
            _ => unreachable!("keyed column ends in a base entry"),
        }
    }

    /// Whether `key` is present.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] if `key == 0`.
    pub fn contains(&self, key: i32) -> Result<bool, SkipListError> {
        Ok(self.get(key)?.is_some())
    }

    /// Removes `key` and returns its value.
    ///
    /// Every level-instance of the key is unlinked bottom-up, and empty top
    /// levels are then dropped so the height tracks actual content.
    /// Removing an absent key is an error, not a no-op; callers wanting
    /// no-op semantics should check [`contains`](Self::contains) first.
    ///
    /// # Errors
    ///
    /// [`SkipListError::InvalidArgument`] if `key == 0`,
    /// [`SkipListError::NotFound`] if the key is absent. Either way the
    /// list is left unmodified.
    pub fn remove(&mut self, key: i32) -> Result<T, SkipListError> {
        check_key(key)?;
        let found = self.find(key);
        if self.arena.get(found).key() != Some(key) {
            return Err(SkipListError::NotFound(key));
        }

        let base = self.detach(self.base_of(found));
        let NodeKind::Entry { value, .. } = base.kind else {
            unreachable!("keyed column ends in a base entry")
        };
        let mut tower = base.up;
        while let Some(id) = tower {
            tower = self.detach(id).up;
        }

        // Shed empty top levels, never dropping below the base.
        while self.arena.get(self.head).next.is_none() {
            let Some(below) = self.arena.get(self.head).down else {
                break;
            };
            self.arena.get_mut(below).up = None;
            self.arena.free(self.head);
            self.head = below;
        }

        self.len -= 1;
        Ok(value)
    }

    /// Drops every entry, resetting to a single empty level.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = self.arena.alloc(Node::sentinel(0));
        self.len = 0;
    }

    /// Iterates over `(key, value)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, T> {
        let base = self.base_of(self.head);
        Iter {
            arena: &self.arena,
            current: self.arena.get(base).next,
        }
    }

    /// Locates `key`, returning either its node at the topmost level where
    /// the search path meets the key's column, or the tightest base-level
    /// predecessor to splice a new entry after.
    ///
    /// The horizontal walk advances while the successor's key is at most
    /// the target, so an equal key stops the walk and the walk never
    /// overshoots a match. On a match the descent stops there; on a miss
    /// the landing node's down link, which leads to the same column one
    /// level lower and is therefore still a valid predecessor, is followed
    /// until the base level.
    fn find(&self, key: i32) -> NodeId {
        let mut node = self.head;
        loop {
            while let Some(next) = self.arena.get(node).next {
                match self.arena.get(next).key() {
                    Some(k) if k <= key => node = next,
                    _ => break,
                }
            }
            if self.arena.get(node).key() == Some(key) {
                break;
            }
            match self.arena.get(node).down {
                Some(down) => node = down,
                None => break,
            }
        }
        node
    }

    /// Follows the down chain from `id` to the base level.
    fn base_of(&self, mut id: NodeId) -> NodeId {
        while let Some(down) = self.arena.get(id).down {
            id = down;
        }
        id
    }

    /// Horizontally unlinks `id`, vacates its slot, and returns the node.
    fn detach(&mut self, id: NodeId) -> Node<T> {
        let node = self.arena.free(id);
        let prev = node
            .prev
            .expect("a level sentinel precedes every keyed node");
        self.arena.get_mut(prev).next = node.next;
        if let Some(next) = node.next {
            self.arena.get_mut(next).prev = Some(prev);
        }
        node
    }

    /// Splices `node` immediately after `at` on the same level.
    fn splice_after(&mut self, at: NodeId, node: NodeId) {
        let after = self.arena.get(at).next;
        {
            let n = self.arena.get_mut(node);
            n.prev = Some(at);
            n.next = after;
        }
        if let Some(after) = after {
            self.arena.get_mut(after).prev = Some(node);
        }
        self.arena.get_mut(at).next = Some(node);
    }
}

impl<T: fmt::Display, R> fmt::Display for SkipList<T, R> {
    /// Ordered diagnostic dump: one `key: value` line per entry.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{key}: {value}")?;
        }
        Ok(())
    }
}

/// Ascending iterator over the base level.
pub struct Iter<'a, T> {
    arena: &'a Arena<T>,
    current: Option<NodeId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (i32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(id) = self.current {
            let node = self.arena.get(id);
            self.current = node.next;
            if let NodeKind::Entry { key, value } = &node.kind {
                return Some((*key, value));
            }
        }
        None
    }
}

fn check_key(key: i32) -> Result<(), SkipListError> {
    if key == 0 {
        return Err(SkipListError::InvalidArgument(
            "key 0 is reserved for sentinels",
        ));
    }
    Ok(())
}
