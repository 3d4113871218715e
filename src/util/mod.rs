//! Helper functions shared by the filters that don't belong to any single
//! filter type.

/// Convolution, energy and sizing helpers used by the filters
pub mod math;
