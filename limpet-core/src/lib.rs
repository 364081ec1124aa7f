//! Concurrent sorted set built on per-node locks and hand-over-hand traversal.
//!
//! The set is a singly linked chain kept sorted by a caller-supplied total
//! order. Instead of one global lock, every link in the chain carries its own
//! mutex, and traversals move hand-over-hand: the next link's lock is taken
//! before the current one is released, so no thread ever crosses an unlocked
//! gap. Threads working on disjoint segments of the chain proceed in
//! parallel; threads that meet serialize on the contended links only.
//!
//! Writers never expose a half-updated link. An insert builds the new node,
//! successor included, before the single store that links it; a remove moves
//! the victim's successor into the predecessor's link while holding both
//! locks, and the node is reclaimed by dropping its last handle afterwards.
//!
//! The whole crate is safe Rust: links are `Arc<Node>` handles behind
//! `parking_lot` mutexes, and the owned guards from its `arc_lock` feature
//! are what make the hand-over-hand transfer expressible without raw
//! pointers.

pub mod common_tests;
pub mod order;
pub mod set;

pub use order::{Comparator, NaturalOrder, OrderFn};
pub use set::CoupledSet;
