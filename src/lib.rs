//! FIR and IIR filters over finite, fully buffered discrete-time signals.
//!
//! # Example
//!
//! ```
//! use lti_filters::prelude::*;
//!
//! let fir = FirFilter::with_impulse_response(vec![1.0, 2.0, 3.0], vec![3.0, 2.0, 1.0]).unwrap();
//! assert_eq!(fir.out_signal().len(), 5);
//!
//! let mut iir = IirFilter::new(vec![1.0], vec![1.0]).unwrap();
//! iir.set_l(3).unwrap();
//! assert_eq!(iir.out_signal(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
//! assert_eq!(iir.stability(), Stability::Stable);
//! ```

pub mod filter;
pub mod prelude;
pub mod util;
