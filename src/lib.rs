//! An in-memory timeline mapping years to the events recorded in them,
//! stored as a skiplist so that lookups, insertions, removals and
//! chronological range scans all run in `O(log(n))` on average, without any
//! rebalancing.
//!
//! Conceptually, the structure resembles something like:
//!
//! ```text
//! <head> ---------------> [1912] ----------------------------------------> <tail>
//! <head> ---------------> [1912] ----------------> [1969] ---------------> <tail>
//! <head> --> [1879] ----> [1912] ----> [1945] ---> [1969] ----> [2005] --> <tail>
//! ```
//!
//! where each node `[y]` holds every event attached to year `y` (in the
//! order they were attached) and references nodes further along the list,
//! allowing traversals to skip ahead. How far up the levels a node reaches
//! is decided at insertion by a coin-flipping
//! [`Geometric`][level_generator::Geometric] height generator; the higher
//! levels are therefore a sparse, random subsequence of the full
//! chronological chain at the bottom.
//!
//! Two sentinels bound every traversal: the head sits before all
//! representable years and the tail after them, which is why `i64::MIN` and
//! `i64::MAX` are not usable as years.
//!
//! The list is a single-owner, single-threaded structure. Callers that need
//! to share it across threads must serialize access externally (e.g. behind
//! a mutex); the splice and unlink steps are multi-step link edits and a
//! concurrent reader could observe a torn chain.

pub mod level_generator;

mod eventlist;
mod skipnode;

pub use eventlist::{EventList, EventListError, IntoIter, Iter, Years};
pub use level_generator::geometric::Geometric;
