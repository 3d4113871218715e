//! Implementation of a finite impulse response (FIR) filter.
//!
//! The filter holds a stored input signal `x` and an impulse response `h`,
//! and produces the full linear convolution `h * x`, so the output has
//! `h.len() + x.len() - 1` samples.  Works for any `T: Num + Copy`, including
//! `Complex<T>`.

use crate::filter::FilterError;
use crate::util::math;
use num_traits::Num;

/// Impulse response used by [`FirFilter::new`]: `{1, 2, 1}`.
pub fn default_impulse_response<T>() -> Vec<T>
where
    T: Num + Copy,
{
    vec![T::one(), T::one() + T::one(), T::one()]
}

/// FIR filter over a stored, fully buffered input signal.
#[derive(Clone, Debug, PartialEq)]
pub struct FirFilter<T> {
    h: Vec<T>,
    x: Vec<T>,
}

impl<T> FirFilter<T>
where
    T: Num + Copy,
{
    /// Creates a new `FirFilter` using the default impulse response `{1, 2, 1}`.
    ///
    /// # Arguments
    ///
    /// * `x` - Input signal, must not be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lti_filters::filter::fir::FirFilter;
    ///
    /// let fir = FirFilter::new(vec![1.5, 2.0, 3.5]).unwrap();
    /// assert_eq!(fir.h(), &[1.0, 2.0, 1.0][..]);
    /// assert_eq!(fir.out_signal(), vec![1.5, 5.0, 9.0, 9.0, 3.5]);
    /// ```
    pub fn new(x: Vec<T>) -> Result<FirFilter<T>, FilterError> {
        FirFilter::with_impulse_response(x, default_impulse_response())
    }

    /// Creates a new `FirFilter` with a user defined impulse response.
    ///
    /// # Arguments
    ///
    /// * `x` - Input signal, must not be empty.
    /// * `h` - Impulse response (filter taps), must not be empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use lti_filters::filter::fir::FirFilter;
    ///
    /// let fir = FirFilter::with_impulse_response(vec![1, 2, 3], vec![3, 2, 1]).unwrap();
    /// assert_eq!(fir.out_signal(), vec![3, 8, 14, 8, 3]);
    /// ```
    pub fn with_impulse_response(
        x: Vec<T>,
        h: Vec<T>,
    ) -> Result<FirFilter<T>, FilterError> {
        check_x(&x)?;
        check_h(&h)?;
        Ok(FirFilter { h, x })
    }

    /// Filters the stored input, returning `h * x`.
    pub fn out_signal(&self) -> Vec<T> {
        math::convolve(&self.h, &self.x)
    }

    /// Replaces the impulse response. Fails if `h` is empty.
    pub fn set_h(&mut self, h: Vec<T>) -> Result<(), FilterError> {
        check_h(&h)?;
        self.h = h;
        Ok(())
    }

    /// Replaces the stored input signal. Fails if `x` is empty.
    pub fn set_x(&mut self, x: Vec<T>) -> Result<(), FilterError> {
        check_x(&x)?;
        self.x = x;
        Ok(())
    }

    /// Current impulse response.
    pub fn h(&self) -> &[T] {
        &self.h
    }

    /// Current stored input signal.
    pub fn x(&self) -> &[T] {
        &self.x
    }
}

fn check_h<T>(h: &[T]) -> Result<(), FilterError> {
    if h.is_empty() {
        return Err(FilterError::InvalidArgument("vector h can't be empty"));
    }
    Ok(())
}

fn check_x<T>(x: &[T]) -> Result<(), FilterError> {
    if x.is_empty() {
        return Err(FilterError::InvalidArgument("vector x can't be empty"));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::filter::fir::*;
    use num::Complex;

    #[test]
    fn test_default_impulse_response() {
        let fir = FirFilter::new(vec![1.5, 2.0, 3.5]).unwrap();
        assert_eq!(fir.h(), &[1.0, 2.0, 1.0][..]);
        assert_eq!(fir.x(), &[1.5, 2.0, 3.5][..]);
        assert_eq!(fir.out_signal(), vec![1.5, 5.0, 9.0, 9.0, 3.5]);
    }

    #[test]
    // Verifies the FirFilter against a hand-computed complex convolution.
    fn test_fir_complex() {
        let fir = FirFilter::with_impulse_response(
            vec![
                Complex::new(1, 2),
                Complex::new(3, 4),
                Complex::new(5, 6),
                Complex::new(7, 8),
                Complex::new(9, 0),
            ],
            vec![
                Complex::new(9, 0),
                Complex::new(8, 7),
                Complex::new(6, 5),
                Complex::new(4, 3),
                Complex::new(2, 1),
            ],
        )
        .unwrap();
        let output = fir.out_signal();
        assert_eq!(output.len(), 9);
        assert_eq!(output[0], Complex::new(9, 18));
        assert_eq!(output[4], Complex::new(81, 204));
        assert_eq!(output[8], Complex::new(18, 9));
    }

    #[test]
    fn test_setters() {
        let mut fir =
            FirFilter::with_impulse_response(vec![1, 2, 3], vec![3, 2, 1]).unwrap();
        assert_eq!(fir.out_signal(), vec![3, 8, 14, 8, 3]);

        fir.set_x(vec![2, 1, 3, 7]).unwrap();
        fir.set_h(vec![7, 3, 1, 2]).unwrap();
        assert_eq!(fir.x(), &[2, 1, 3, 7][..]);
        assert_eq!(fir.h(), &[7, 3, 1, 2][..]);
        assert_eq!(fir.out_signal(), vec![14, 13, 26, 63, 26, 13, 14]);
    }

    #[test]
    fn test_empty_vectors_rejected() {
        let empty: Vec<f64> = vec![];
        assert_eq!(
            FirFilter::new(empty.clone()),
            Err(FilterError::InvalidArgument("vector x can't be empty"))
        );
        assert_eq!(
            FirFilter::with_impulse_response(vec![1.0], empty.clone()),
            Err(FilterError::InvalidArgument("vector h can't be empty"))
        );
        assert!(FirFilter::with_impulse_response(empty.clone(), vec![1.0]).is_err());

        let mut fir = FirFilter::new(vec![1.0, 2.0]).unwrap();
        assert!(fir.set_h(empty.clone()).is_err());
        assert!(fir.set_x(empty).is_err());
        assert_eq!(fir.h(), &[1.0, 2.0, 1.0][..]);
        assert_eq!(fir.x(), &[1.0, 2.0][..]);
    }

    #[test]
    fn test_output_length() {
        for h_len in 1..6 {
            for x_len in 1..6 {
                let fir = FirFilter::with_impulse_response(
                    vec![1.0; x_len],
                    vec![0.5; h_len],
                )
                .unwrap();
                assert_eq!(fir.out_signal().len(), h_len + x_len - 1);
            }
        }
    }
}
