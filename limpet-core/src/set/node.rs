//! Chain nodes and their locks.
//!
//! Every link in the chain — the head sentinel's link included — is an
//! `Arc<Mutex<Link<T>>>`: the mutex is the node's lock, the `Link` inside is
//! the successor it guards. A node therefore owns its value and the lock
//! protecting its own `next` edge, which is precisely the granularity
//! hand-over-hand traversal needs.
//!
//! Guards are the owned `ArcMutexGuard` flavour rather than the borrowed
//! one: a borrowed guard could not be carried forward past the binding of
//! the node it was taken from, and the traversal has to keep the successor's
//! guard alive while the predecessor's is dropped.

use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};

/// One guarded edge of the chain: the successor node, or `None` at the end.
pub(crate) type Link<T> = Option<Arc<Node<T>>>;

/// An owned, held lock on one link of the chain.
pub(crate) type LinkGuard<T> = ArcMutexGuard<RawMutex, Link<T>>;

/// One element of the chain.
///
/// The value is immutable once the node is linked; only the `next` edge ever
/// changes, and only under this node's lock.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    next: Arc<Mutex<Link<T>>>,
}

impl<T> Node<T> {
    /// Build a node with its successor already in place. Linking it into the
    /// chain afterwards is a single store, so the chain never shows a
    /// half-initialized node.
    pub(crate) fn new(value: T, next: Link<T>) -> Arc<Self> {
        Arc::new(Node {
            value,
            next: Arc::new(Mutex::new(next)),
        })
    }

    /// Acquire this node's lock, blocking until the holder releases it.
    pub(crate) fn lock_next(&self) -> LinkGuard<T> {
        self.next.lock_arc()
    }

    /// Detach and return the successor. Used by teardown, where exclusive
    /// access to the set makes the lock uncontended.
    pub(crate) fn take_next(&self) -> Link<T> {
        self.next.lock().take()
    }
}
