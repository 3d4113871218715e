use num_traits::Num;

/// Linear convolution of two sequences.
///
/// The output has `f.len() + g.len() - 1` samples, with `f[i] * g[j]`
/// accumulated into index `i + j`. An empty operand yields an empty output.
///
/// # Arguments
///
/// * `f` - First input sequence.
/// * `g` - Second input sequence.
///
/// # Examples
///
/// ```
/// use lti_filters::util::math::convolve;
///
/// let f = vec![1, 2, 1];
/// let g = vec![1, 1];
/// assert_eq!(convolve(&f, &g), vec![1, 3, 3, 1]);
/// ```
pub fn convolve<T>(f: &[T], g: &[T]) -> Vec<T>
where
    T: Num + Copy,
{
    if f.is_empty() || g.is_empty() {
        return Vec::new();
    }

    let mut output = vec![T::zero(); f.len() + g.len() - 1];
    for (i, &fi) in f.iter().enumerate() {
        for (j, &gj) in g.iter().enumerate() {
            output[i + j] = output[i + j] + fi * gj;
        }
    }
    output
}

/// Sum of `y[i] * y[i]` for `i` in `start..end`.
///
/// The range is trusted: panics if `start > end` or `end > y.len()`, the same
/// as slicing would.
///
/// # Examples
///
/// ```
/// use lti_filters::util::math::sum_squares;
///
/// let y = vec![1.0, -2.0, 3.0, 4.0];
/// assert_eq!(sum_squares(&y, 1, 3), 13.0);
/// ```
pub fn sum_squares<T>(y: &[T], start: usize, end: usize) -> T
where
    T: Num + Copy,
{
    y[start..end]
        .iter()
        .fold(T::zero(), |acc, &sample| acc + sample * sample)
}

/// Smallest power of two greater than or equal to `n`. Returns 1 for `n == 0`.
pub fn next_power_of_two(n: usize) -> usize {
    n.next_power_of_two()
}

/// Copy of `x` resized to `len`, zero padded at the end.
pub(crate) fn zero_padded<T>(x: &[T], len: usize) -> Vec<T>
where
    T: Num + Copy,
{
    let mut padded = x.to_vec();
    padded.resize(len, T::zero());
    padded
}

#[cfg(test)]
mod test {
    use crate::util::math;
    use num::Complex;

    #[test]
    fn test_convolve() {
        assert_eq!(math::convolve(&[1, 2, 3], &[3, 2, 1]), vec![3, 8, 14, 8, 3]);
        assert_eq!(
            math::convolve(&[7, 3, 1, 2], &[2, 1, 3, 7]),
            vec![14, 13, 26, 63, 26, 13, 14]
        );
    }

    #[test]
    fn test_convolve_complex() {
        let taps = vec![
            Complex::new(9, 0),
            Complex::new(8, 7),
            Complex::new(6, 5),
            Complex::new(4, 3),
            Complex::new(2, 1),
        ];
        let input = vec![
            Complex::new(1, 2),
            Complex::new(3, 4),
            Complex::new(5, 6),
            Complex::new(7, 8),
            Complex::new(9, 0),
        ];
        assert_eq!(
            math::convolve(&taps, &input),
            vec![
                Complex::new(9, 18),
                Complex::new(21, 59),
                Complex::new(37, 124),
                Complex::new(57, 205),
                Complex::new(81, 204),
                Complex::new(78, 196),
                Complex::new(62, 115),
                Complex::new(42, 50),
                Complex::new(18, 9),
            ]
        );
    }

    #[test]
    fn test_convolve_commutes() {
        let f = vec![0.5, -1.25, 2.0];
        let g = vec![1.5, 2.0, 3.5, -4.0];
        assert_eq!(math::convolve(&f, &g), math::convolve(&g, &f));
    }

    #[test]
    fn test_convolve_identity() {
        let x = vec![1.5, -2.0, 0.0, 3.25];
        assert_eq!(math::convolve(&[1.0], &x), x);
    }

    #[test]
    fn test_convolve_empty() {
        let empty: Vec<f64> = vec![];
        assert!(math::convolve(&empty, &[1.0, 2.0]).is_empty());
        assert!(math::convolve(&[1.0, 2.0], &empty).is_empty());
        assert!(math::convolve(&empty, &empty).is_empty());
    }

    #[test]
    fn test_sum_squares() {
        let y = vec![1, -2, 3, 4];
        assert_eq!(math::sum_squares(&y, 0, 4), 30);
        assert_eq!(math::sum_squares(&y, 0, 2), 5);
        assert_eq!(math::sum_squares(&y, 2, 2), 0);
    }

    #[test]
    #[should_panic]
    fn test_sum_squares_out_of_range() {
        math::sum_squares(&[1.0, 2.0], 1, 3);
    }

    #[test]
    fn test_next_power_of_two() {
        assert_eq!(math::next_power_of_two(0), 1);
        assert_eq!(math::next_power_of_two(1), 1);
        assert_eq!(math::next_power_of_two(3), 4);
        assert_eq!(math::next_power_of_two(4), 4);
        assert_eq!(math::next_power_of_two(5), 8);
        assert_eq!(math::next_power_of_two(1000), 1024);
    }

    #[test]
    fn test_zero_padded() {
        assert_eq!(math::zero_padded(&[1, 2, 3], 5), vec![1, 2, 3, 0, 0]);
        assert_eq!(math::zero_padded(&[1, 2, 3], 3), vec![1, 2, 3]);
    }
}
