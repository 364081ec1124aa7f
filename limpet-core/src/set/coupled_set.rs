use std::cmp::Ordering;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::order::{Comparator, NaturalOrder};
use crate::set::node::{Link, LinkGuard, Node};

///
/// Concurrent sorted set over a singly linked chain with per-node locks and
/// hand-over-hand (lock-coupling) traversal.
///
// Chain structure (sorted ascending under the comparator):
//
// ┌──────┐    ┌──────┐    ┌──────┐    ┌──────┐
// │ HEAD │───►│  10  │───►│  20  │───►│ None │
// │(lock)│    │(lock)│    │(lock)│    │      │
// └──────┘    └──────┘    └──────┘    └──────┘
//
// Every arrow is a `Link` behind its own mutex: HEAD's lock guards the edge
// to 10, node 10's lock guards the edge to 20, and so on. HEAD is the
// sentinel — it carries no value and is exempt from comparison.
//
// INVARIANTS:
// 1. The chain is strictly increasing under the comparator; no duplicates.
// 2. Every read or write of a link used for traversal or mutation happens
//    under that link's lock.
// 3. Locks are only ever acquired in chain order (HEAD → tail). A thread
//    never acquires a lock behind one it already holds, so no wait cycle
//    can form.
// 4. At most two adjacent locks are held at any instant: the current link
//    and, during a handoff or a mutation, its successor.
// 5. A node is unlinked only by a thread holding both the predecessor's and
//    the node's own lock, and reclaimed only after the unlink.
//
// Invariant 3 is the deadlock-freedom argument; invariant 2 is why no
// traversal can cross a half-updated segment. Threads on disjoint segments
// of the chain never contend.
//
pub struct CoupledSet<T, C = NaturalOrder> {
    /// The sentinel: the first link of the chain plus the lock guarding it.
    head: Arc<Mutex<Link<T>>>,
    order: C,
}

/// Where a probe for a key ended up, with the locks still held.
///
/// The guards inside keep the segment pinned: whatever the caller does next
/// — give up, splice a node in, or unlink one — happens before any other
/// thread can touch these links.
enum Probe<T> {
    /// Key absent. The guard holds the link where the key would be spliced
    /// in: either the terminal link, or the edge pointing at the first
    /// strictly greater node.
    Vacant(LinkGuard<T>),
    /// Key present at `node`; `pred` is the locked link pointing at it.
    Occupied {
        pred: LinkGuard<T>,
        node: Arc<Node<T>>,
    },
}

impl<T: Ord> CoupledSet<T> {
    /// Create an empty set ordered by `T`'s natural order.
    pub fn new() -> Self {
        Self::with_order(NaturalOrder)
    }
}

impl<T: Ord> Default for CoupledSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> CoupledSet<T, C>
where
    C: Comparator<T>,
{
    /// Create an empty set ordered by the given comparator.
    ///
    /// The comparator must be a pure total order; `Ordering::Equal` defines
    /// which values count as the same key. It is the only code the set ever
    /// calls back into.
    pub fn with_order(order: C) -> Self {
        CoupledSet {
            head: Arc::new(Mutex::new(None)),
            order,
        }
    }

    /// The positioning primitive every operation is built on.
    ///
    /// Walks the chain from the head lock, comparing each successor against
    /// `key` while holding the lock on the edge that leads to it. Advancing
    /// is hand-over-hand: the successor's lock is acquired first, then the
    /// current one is released by the guard handoff. At most two adjacent
    /// locks are held at any instant, and the returned guards are live —
    /// releasing them is the caller's (implicit, scope-driven) job.
    fn probe(&self, key: &T) -> Probe<T> {
        let mut pred = self.head.lock_arc();
        loop {
            let succ = match &*pred {
                // Terminal link: the key belongs here. On the very first
                // iteration this is the empty-set case, detected before any
                // comparison is attempted.
                None => return Probe::Vacant(pred),
                Some(node) => Arc::clone(node),
            };

            match self.order.compare(&succ.value, key) {
                Ordering::Less => {
                    // Couple: take the successor's lock before letting go
                    // of the one we hold.
                    let next = succ.lock_next();
                    pred = next;
                }
                Ordering::Equal => return Probe::Occupied { pred, node: succ },
                Ordering::Greater => return Probe::Vacant(pred),
            }
        }
    }

    /// Whether a value equal to `key` (under the comparator) is present.
    ///
    /// Read-only: no allocation, no mutation, every lock acquired on the way
    /// is released by the time this returns. O(n) in the current size.
    pub fn contains(&self, key: &T) -> bool {
        matches!(self.probe(key), Probe::Occupied { .. })
    }

    /// Insert `value` at its sorted position.
    ///
    /// Returns `true` if it was inserted, `false` if a value with the same
    /// key was already present (the set keeps at most one value per key).
    /// The new node is fully built — successor link included — before the
    /// single store that makes it reachable, so concurrent traversals never
    /// see it half-linked.
    pub fn insert(&self, value: T) -> bool {
        match self.probe(&value) {
            Probe::Occupied { .. } => {
                tracing::trace!("insert rejected: key already present");
                false
            }
            Probe::Vacant(mut pred) => {
                let succ = pred.take();
                *pred = Some(Node::new(value, succ));
                tracing::trace!("insert linked a new node");
                true
            }
        }
    }

    /// Remove the value equal to `key`, if present.
    ///
    /// Returns `true` if a value was removed, `false` if the key was absent.
    ///
    /// The unlink happens while both the predecessor's and the victim's
    /// locks are held; teardown then follows the strict order: victim's lock
    /// released, victim reclaimed, predecessor's lock released. No thread
    /// can observe the predecessor pointing at a reclaimed node — reaching
    /// the victim requires the predecessor's lock, and the node's memory
    /// lives as long as any handle to it does.
    pub fn remove(&self, key: &T) -> bool {
        match self.probe(key) {
            Probe::Vacant(_) => {
                tracing::trace!("remove found nothing");
                false
            }
            Probe::Occupied { mut pred, node } => {
                // Forward acquisition: the victim is after `pred` in chain
                // order.
                let mut victim = node.lock_next();
                // The unlink is one ownership transfer: the victim's
                // successor moves into the predecessor's link, and the
                // chain's handle to the victim is dropped by the same store.
                *pred = victim.take();
                drop(victim);
                drop(node);
                drop(pred);
                tracing::trace!("remove unlinked a node");
                true
            }
        }
    }

    /// Run `f` against the stored value equal to `key`, while the probe's
    /// locks pin it in place. Returns `None` if the key is absent.
    pub fn find_and_apply<F, R>(&self, key: &T, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        match self.probe(key) {
            Probe::Vacant(_) => None,
            Probe::Occupied { node, .. } => Some(f(&node.value)),
        }
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.head.lock().is_none()
    }

    /// Number of values currently in the set. O(n): walks the whole chain
    /// hand-over-hand.
    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_| count += 1);
        count
    }

    /// Snapshot of the chain in sorted order.
    ///
    /// This is the observation primitive the sorted-invariant tests are
    /// built on; the set deliberately exposes no iterator. The snapshot is
    /// consistent per segment: concurrent writers may add or remove keys
    /// ahead of the walk, but can never show it an inversion.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.walk(|value| out.push(value.clone()));
        out
    }

    /// Hand-over-hand walk of the whole chain, applying `f` to each value
    /// under the lock of the edge that leads to it.
    fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&T),
    {
        let mut curr = self.head.lock_arc();
        loop {
            let succ = match &*curr {
                None => return,
                Some(node) => Arc::clone(node),
            };
            f(&succ.value);
            let next = succ.lock_next();
            curr = next;
        }
    }
}

impl<T, C> Drop for CoupledSet<T, C> {
    fn drop(&mut self) {
        // Detach the chain link by link. Letting the Arcs cascade would
        // recurse once per node and overflow the stack on a long chain.
        let mut link = self.head.lock().take();
        while let Some(node) = link {
            link = node.take_next();
        }
    }
}
