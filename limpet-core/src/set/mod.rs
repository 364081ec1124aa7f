//! The lock-coupled sorted set.

pub mod coupled_set;
pub(crate) mod node;

pub use coupled_set::CoupledSet;
