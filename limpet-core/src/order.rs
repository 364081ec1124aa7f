//! The total-order seam.
//!
//! A [`CoupledSet`](crate::CoupledSet) does not require its element type to
//! implement [`Ord`]; it requires a [`Comparator`], the sole collaborator the
//! set calls back into. `NaturalOrder` bridges the common case, and
//! [`OrderFn`] lifts any `Fn(&T, &T) -> Ordering` closure into a comparator.
//!
//! The comparator must be a pure total order: deterministic, consistent
//! across calls, with `Ordering::Equal` meaning "same key". The set enforces
//! key uniqueness under exactly that equivalence.

use std::cmp::Ordering;

/// A total order over `T`, supplied by the caller.
///
/// Implementations must be side-effect-free and stable: the set invokes the
/// comparator concurrently from many threads, under fine-grained locks, and
/// its sorted invariant is only as good as the order it is given.
pub trait Comparator<T>: Send + Sync {
    /// Compare two stored values.
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering;
}

/// The natural `Ord`-derived order. Default comparator for
/// [`CoupledSet::new`](crate::CoupledSet::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct NaturalOrder;

impl<T: Ord> Comparator<T> for NaturalOrder {
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// A comparator backed by a closure or function pointer.
#[derive(Debug, Clone, Copy)]
pub struct OrderFn<F>(pub F);

impl<T, F> Comparator<T> for OrderFn<F>
where
    F: Fn(&T, &T) -> Ordering + Send + Sync,
{
    fn compare(&self, lhs: &T, rhs: &T) -> Ordering {
        (self.0)(lhs, rhs)
    }
}
