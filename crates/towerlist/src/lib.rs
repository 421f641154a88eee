//! Ordered map built on a probabilistic multi-level skip list.
//!
//! Keys are non-zero `i32` (the key `0` is reserved for the per-level head
//! sentinels and rejected by every operation); values are any `T`. Lookup,
//! insertion, and removal run in expected O(log n) time with no
//! rebalancing: inserted keys are promoted to higher levels by repeated
//! coin flips, so each level is a randomly thinned subsequence of the one
//! below.
//!
//! All nodes live in a slot arena and link to their four neighbors
//! (previous, next, up, down) by index, which keeps the cyclic node graph
//! free of ownership knots. Each list owns its random generator; pass a
//! seeded one to [`SkipList::with_rng`] for deterministic behavior.
//!
//! The structure is single-threaded and carries no synchronization.
//!
//! ```
//! use towerlist::SkipList;
//!
//! let mut list = SkipList::new();
//! list.add(2, "two")?;
//! list.add(1, "one")?;
//!
//! assert_eq!(list.get(2)?, Some(&"two"));
//! assert_eq!(list.remove(1)?, "one");
//! assert_eq!(list.len(), 1);
//! # Ok::<(), towerlist::SkipListError>(())
//! ```

mod arena;
mod error;
mod list;
mod node;

pub use error::SkipListError;
pub use list::{Iter, SkipList};
