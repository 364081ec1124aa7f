//! Reusable test suites for the set, generic over the comparator.
//!
//! Unit and integration tests instantiate these for both the natural order
//! and custom comparators, so every property is checked against the
//! comparator seam and not just `Ord`.

pub mod set_core_tests;
