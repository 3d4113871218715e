//! Implementation of an infinite impulse response (IIR) filter.
//!
//! The filter evaluates the direct form difference equation over a fully
//! buffered input, starting from a zero initial state.  The feedback
//! coefficients are normalized so that `a[0] == 1`; whenever that rescales
//! `a`, the feedforward coefficients `b` are rescaled by the same divisor so
//! the transfer function `B(z) / A(z)` is preserved.
//!
//! # Output length
//!
//! The input is zero padded before filtering, and the output has the padded
//! length:
//!
//! * `L == 0`: the input length rounded up to the next power of two.
//! * `L < x.len()`: same as `L == 0`, and a warning is logged.
//! * otherwise: exactly `L`.

use crate::filter::{FilterError, Stability};
use crate::util::math;
use log::{debug, warn};
use num_traits::{Num, ToPrimitive};

/// Output length used when probing the impulse response for stability.
pub const STABILITY_PROBE_LEN: usize = 31;

/// Length of the unit impulse fed to the filter by the stability probe.
pub const STABILITY_IMPULSE_LEN: usize = 30;

/// IIR filter defined by feedforward (`b`) and feedback (`a`) coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct IirFilter<T> {
    b: Vec<T>,
    a: Vec<T>,
    l: usize,
}

macro_rules! impl_default_iir {
    ($($t:ty),*) => {
        $(
            /// First order low pass with `b = {0.1, 0.1}` and `a = {1.0, 0.1}`.
            impl Default for IirFilter<$t> {
                fn default() -> Self {
                    IirFilter {
                        b: vec![0.1, 0.1],
                        a: vec![1.0, 0.1],
                        l: 0,
                    }
                }
            }
        )*
    };
}

impl_default_iir!(f32, f64);

impl<T> IirFilter<T>
where
    T: Num + Copy + PartialOrd + ToPrimitive,
{
    /// Creates a new `IirFilter`, normalizing the coefficients so `a[0] == 1`.
    ///
    /// The output length `L` starts at 0 (automatic).
    ///
    /// # Arguments
    ///
    /// * `b` - Feedforward (numerator) coefficients, must not be empty.
    /// * `a` - Feedback (denominator) coefficients, must not be empty and
    ///   `a[0]` must not be zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lti_filters::filter::iir::IirFilter;
    ///
    /// let iir = IirFilter::new(vec![0.5, 1.0, 0.0, -0.5], vec![2.0, -1.0, 1.0]).unwrap();
    /// assert_eq!(iir.a(), &[1.0, -0.5, 0.5][..]);
    /// assert_eq!(iir.b(), &[0.25, 0.5, 0.0, -0.25][..]);
    /// ```
    pub fn new(b: Vec<T>, a: Vec<T>) -> Result<IirFilter<T>, FilterError> {
        check_b(&b)?;
        let mut filter = IirFilter {
            b,
            a: vec![T::one()],
            l: 0,
        };
        filter.set_a(a)?;
        Ok(filter)
    }

    /// Filters `x` through the difference equation.
    ///
    /// `x` is not modified; a zero padded copy is filtered instead.  See the
    /// module documentation for how the output length is chosen.
    ///
    /// # Examples
    ///
    /// ```
    /// use lti_filters::filter::iir::IirFilter;
    ///
    /// let mut iir = IirFilter::new(vec![1.0], vec![1.0]).unwrap();
    /// iir.set_l(3).unwrap();
    /// assert_eq!(iir.out_signal(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    /// ```
    pub fn out_signal(&self, x: &[T]) -> Vec<T> {
        let len = self.output_len(x.len());
        self.filter_padded(&math::zero_padded(x, len))
    }

    /// Response of the filter to a unit impulse, as used by
    /// [`stability`](IirFilter::stability).
    ///
    /// Always `STABILITY_PROBE_LEN` samples long, regardless of `L`.
    pub fn impulse_response(&self) -> Vec<T> {
        let mut impulse = vec![T::zero(); STABILITY_IMPULSE_LEN];
        impulse[0] = T::one();
        self.filter_padded(&math::zero_padded(&impulse, STABILITY_PROBE_LEN))
    }

    /// Approximate stability check based on the impulse response.
    ///
    /// The impulse response is split in two halves; the filter is deemed
    /// unstable when the second half carries at least as much energy as the
    /// first.  This can misclassify marginal or slowly decaying filters, it is
    /// not a pole location test.
    ///
    /// Energies are summed as `f64`, so integer filters whose squared samples
    /// exceed `T` are still classified.  An all-zero impulse response is
    /// stable.  A response whose first half is silent but whose second half
    /// is not, or whose energy is not finite, is unstable.
    ///
    /// # Examples
    ///
    /// ```
    /// use lti_filters::filter::Stability;
    /// use lti_filters::filter::iir::IirFilter;
    ///
    /// let iir = IirFilter::new(vec![1.0], vec![1.0, -0.5]).unwrap();
    /// assert_eq!(iir.stability(), Stability::Stable);
    ///
    /// let iir = IirFilter::new(vec![1.0], vec![1.0, -1.5]).unwrap();
    /// assert_eq!(iir.stability(), Stability::Unstable);
    /// ```
    pub fn stability(&self) -> Stability {
        let y: Vec<f64> = self
            .impulse_response()
            .iter()
            .map(|sample| sample.to_f64().unwrap_or(f64::NAN))
            .collect();
        let half = y.len() / 2;
        let energy1 = math::sum_squares(&y, 0, half);
        let energy2 = math::sum_squares(&y, half, y.len());

        let stability = if !energy1.is_finite() || !energy2.is_finite() {
            Stability::Unstable
        } else if energy1 == 0.0 {
            if energy2 == 0.0 {
                Stability::Stable
            } else {
                Stability::Unstable
            }
        } else if energy2 / energy1 >= 1.0 {
            Stability::Unstable
        } else {
            Stability::Stable
        };
        debug!(
            "impulse response energies {} / {} classified as {}",
            energy1, energy2, stability
        );
        stability
    }

    /// Replaces the feedforward coefficients as given, without normalization.
    pub fn set_b(&mut self, b: Vec<T>) -> Result<(), FilterError> {
        check_b(&b)?;
        self.b = b;
        Ok(())
    }

    /// Replaces the feedback coefficients, normalizing them so `a[0] == 1`.
    ///
    /// If `a[0]` is not 1, every element of `a` and of the current `b` is
    /// divided by it.  Fails without modifying the filter if `a` is empty or
    /// `a[0]` is zero.
    pub fn set_a(&mut self, mut a: Vec<T>) -> Result<(), FilterError> {
        let div = match a.first() {
            Some(&div) => div,
            None => {
                return Err(FilterError::InvalidArgument("vector a can't be empty"))
            }
        };
        if div == T::zero() {
            return Err(FilterError::Domain("a[0] can't be zero"));
        }

        if div != T::one() {
            debug!("normalizing IIR coefficients by leading feedback coefficient");
            for coeff in a.iter_mut().chain(self.b.iter_mut()) {
                *coeff = *coeff / div;
            }
        }
        self.a = a;
        Ok(())
    }

    /// Sets the desired output length. 0 selects the automatic length.
    pub fn set_l(&mut self, l: isize) -> Result<(), FilterError> {
        if l < 0 {
            return Err(FilterError::InvalidArgument("L can't be less than zero"));
        }
        self.l = l as usize;
        Ok(())
    }

    /// Current feedforward coefficients.
    pub fn b(&self) -> &[T] {
        &self.b
    }

    /// Current feedback coefficients, with `a[0] == 1`.
    pub fn a(&self) -> &[T] {
        &self.a
    }

    /// Current desired output length, 0 meaning automatic.
    pub fn l(&self) -> usize {
        self.l
    }

    /// Length the input of `input_len` samples is padded to before filtering.
    fn output_len(&self, input_len: usize) -> usize {
        if self.l == 0 {
            math::next_power_of_two(input_len)
        } else if self.l < input_len {
            let len = math::next_power_of_two(input_len);
            warn!(
                "L ({}) can't be smaller than the input length ({}), using {} instead",
                self.l, input_len, len
            );
            len
        } else {
            self.l
        }
    }

    /// Runs the difference equation over an already padded input.
    ///
    /// Each output sample depends on the previous `a.len() - 1` outputs, so
    /// samples are computed strictly in order.
    fn filter_padded(&self, x: &[T]) -> Vec<T> {
        let mut y = vec![T::zero(); x.len()];
        for n in 0..x.len() {
            let mut acc = T::zero();
            for (k, &b) in self.b.iter().enumerate().take(n + 1) {
                acc = acc + b * x[n - k];
            }
            for (k, &a) in self.a.iter().enumerate().take(n + 1).skip(1) {
                acc = acc - a * y[n - k];
            }
            y[n] = acc;
        }
        y
    }
}

fn check_b<T>(b: &[T]) -> Result<(), FilterError> {
    if b.is_empty() {
        return Err(FilterError::InvalidArgument("vector b can't be empty"));
    }
    Ok(())
}
