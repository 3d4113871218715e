//! This module provides an easy single import for those using this crate.

pub use crate::filter::fir::FirFilter;
pub use crate::filter::iir::IirFilter;
pub use crate::filter::{FilterError, Stability};
pub use crate::util::math::{convolve, next_power_of_two, sum_squares};
