//! Direct power series for ₂F₁ on its convergence disk.

use crate::traits::FloatScalar;

use super::Hyp2f1Settings;

/// Partial sum of the ₂F₁ power series.
#[derive(Debug, Clone, Copy)]
pub struct SeriesSum<T> {
    /// 1 + Σ term_i over the terms actually summed.
    pub value: T,
    /// Number of terms added after the leading 1.
    pub terms: usize,
    /// True if the delta tolerance fired; false if the cap stopped the sum.
    pub converged: bool,
}

/// Sum the ₂F₁ power series term by term.
///
/// Each term follows from the previous one by
///
/// ```text
/// term_i = term_{i−1} · (a+i−1)(b+i−1)/(c+i−1) · z/i
/// ```
///
/// Summation stops when two consecutive terms differ by less than
/// `settings.tol`, or once more than `settings.max_iter` terms have been
/// added. The test is on the change between terms, not on the term itself,
/// so a run of nearly equal terms ends the sum early.
///
/// Only |z| ≤ ½ is guaranteed to converge quickly; elsewhere the partial
/// sum is returned as-is with `converged == false` when the cap is hit.
///
/// # Example
///
/// ```
/// use hypergeo::hyp2f1::{series_sum, Hyp2f1Settings};
///
/// // (1−z)^(−a) = ₂F₁(a, b; b; z)
/// let s = series_sum(2.0_f64, 1.0, 1.0, 0.25, &Hyp2f1Settings::default());
/// assert!(s.converged);
/// assert!((s.value - 0.75_f64.powi(-2)).abs() < 1e-11);
/// ```
pub fn series_sum<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    z: T,
    settings: &Hyp2f1Settings<T>,
) -> SeriesSum<T> {
    let one = T::one();
    let mut term = one;
    let mut prev = T::zero();
    let mut value = one;
    let mut i = 1usize;

    loop {
        let n = T::from(i).unwrap();
        let k = n - one;
        term = term * ((a + k) * (b + k) / (c + k) * z / n);
        value = value + term;

        let converged = (term - prev).abs() < settings.tol;
        if converged || i > settings.max_iter {
            return SeriesSum {
                value,
                terms: i,
                converged,
            };
        }
        prev = term;
        i += 1;
    }
}

/// Power series for ₂F₁ with default settings, value only.
///
/// # Example
///
/// ```
/// use hypergeo::hyp2f1::hyp2f1_series;
///
/// // ₂F₁(a, b; c; 0) = 1
/// assert_eq!(hyp2f1_series(1.5_f64, -0.5, 2.0, 0.0), 1.0);
/// ```
pub fn hyp2f1_series<T: FloatScalar>(a: T, b: T, c: T, z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    series_sum(a, b, c, z, &Hyp2f1Settings::default()).value
}
