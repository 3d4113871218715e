//! Filters for fully buffered discrete-time signals.
//!
//! There are two primary categories of digital filters in signal processing:
//!
//! * Finite Impulse Response (FIR) Filters
//! * Infinite Impulse Response (IIR) Filters
//!
//! FIR filters are feedforward based systems, meaning they can't become
//! unstable regardless of the input data.  This can be desireable when system
//! guaranteed behavior is important.  Here the FIR output is the full linear
//! convolution of the impulse response with the stored input.
//!
//! IIR filters are feedback based systems, and have all the caveats associated
//! with any feedback system.  If poorly designed they can be unstable and
//! unpredictable.  The IIR filter in this module evaluates the direct form
//! difference equation
//!
//! ```text
//! y[n] = sum(b[k] * x[n - k], k = 0..=M) - sum(a[k] * y[n - k], k = 1..=K)
//! ```
//!
//! with `a[0]` normalized to 1, and offers an approximate stability check
//! based on how the energy of its impulse response decays.

use std::fmt;
use thiserror::Error;

pub mod fir;
pub mod iir;

/// Errors raised when constructing or reconfiguring a filter.
///
/// A rejected call never modifies the filter.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FilterError {
    /// An empty coefficient or signal vector, or a negative output length.
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Normalization would divide by a zero leading feedback coefficient.
    #[error("Domain error: {0}")]
    Domain(&'static str),
}

/// Result of the impulse response energy heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stability {
    /// Impulse response energy decays between its two halves.
    Stable,
    /// Impulse response energy does not decay.
    Unstable,
}

impl Stability {
    /// True for [`Stability::Stable`].
    pub fn is_stable(self) -> bool {
        self == Stability::Stable
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desc = match *self {
            Stability::Stable => "stable",
            Stability::Unstable => "unstable",
        };
        write!(f, "{}", desc)
    }
}
