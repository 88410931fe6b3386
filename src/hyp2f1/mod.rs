//! Gauss hypergeometric function ₂F₁(a, b; c; z) for real arguments.
//!
//! ```text
//! ₂F₁(a, b; c; z) = Σ_{n=0}^∞ (a)_n (b)_n / ((c)_n n!) z^n
//! ```
//!
//! The power series only converges on |z| < 1 and is only fast on |z| ≤ ½,
//! so [`hyp2f1`] classifies z into a [`Region`] and routes:
//!
//! | Region | Condition | Method |
//! |--------|-----------|--------|
//! | [`Region::Direct`] | \|z\| ≤ ½ | power series |
//! | [`Region::Reflection`] | ½ < z ≤ 1, c−a−b not an integer | connection formula at 1−z |
//! | [`Region::Pfaff`] | z < −½ | (1−z)^(−a) ₂F₁(a, c−b; c; z/(z−1)) |
//! | [`Region::Fallback`] | anything else | power series, no convergence guarantee |
//!
//! Both transforms re-enter the dispatcher on the mapped argument. The mapped
//! arguments stay in [0, 1), so the chain is at most three levels deep for
//! real inputs.
//!
//! Nothing here raises an error. Hitting the iteration cap returns the
//! partial sum; a Gamma pole in the connection coefficients returns a
//! non-finite value; the logarithmic case (c−a−b an integer with z near 1)
//! is summed directly and may be inaccurate. [`hyp2f1_with`] reports what
//! happened, and [`try_hyp2f1`] turns it into a `Result`.
//!
//! # Example
//!
//! ```
//! use hypergeo::hyp2f1::{hyp2f1, hyp2f1_with, Hyp2f1Settings, Region};
//!
//! // asin(z)/z = ₂F₁(½, ½; 3/2; z²)
//! let z = 0.9_f64;
//! let f = hyp2f1(0.5, 0.5, 1.5, z * z);
//! assert!((f - z.asin() / z).abs() < 1e-10);
//!
//! let r = hyp2f1_with(0.5, 0.5, 1.5, z * z, &Hyp2f1Settings::default());
//! assert_eq!(r.region, Region::Reflection);
//! assert!(r.converged);
//! ```

mod connection;
mod dispatch;
mod pfaff;
mod series;


pub use dispatch::classify;
pub use series::{hyp2f1_series, series_sum, SeriesSum};

use crate::special::SpecialError;
use crate::traits::FloatScalar;

/// Settings for ₂F₁ evaluation.
///
/// The defaults reproduce the reference evaluator: delta tolerance 1e-12,
/// 200 series terms, dispatch radius ½.
#[derive(Debug, Clone, Copy)]
pub struct Hyp2f1Settings<T> {
    /// Stop summing once two consecutive terms differ by less than this.
    pub tol: T,
    /// Hard cap on series terms. Reaching it is not an error.
    pub max_iter: usize,
    /// c−a−b within this distance of an integer disables the connection formula.
    pub integer_tol: T,
    /// Radius of the direct-series region |z| ≤ r.
    pub series_radius: T,
    /// Transform chains deeper than this are summed directly.
    pub max_depth: usize,
}

impl Default for Hyp2f1Settings<f64> {
    fn default() -> Self {
        Self {
            tol: 1e-12,
            max_iter: 200,
            integer_tol: 1e-12,
            series_radius: 0.5,
            max_depth: 8,
        }
    }
}

impl Default for Hyp2f1Settings<f32> {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iter: 200,
            integer_tol: 1e-6,
            series_radius: 0.5,
            max_depth: 8,
        }
    }
}

/// Routing decision made by the dispatcher for one (a, b, c, z).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// |z| within the series radius: sum the power series.
    Direct,
    /// ½ < z ≤ 1 with non-integer c−a−b: connection formula at 1−z.
    Reflection,
    /// z < −½: Pfaff transform to z/(z−1).
    Pfaff,
    /// Outside every named region. The power series is summed as-is.
    Fallback,
}

/// Outcome of a ₂F₁ evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Hyp2f1Result<T> {
    /// Approximate ₂F₁(a, b; c; z).
    pub value: T,
    /// Region chosen for the top-level argument.
    pub region: Region,
    /// Series terms summed across every recursive evaluation.
    pub terms: usize,
    /// True when every series involved met the tolerance before the cap.
    pub converged: bool,
    /// Deepest transform nesting reached (0 for a direct evaluation).
    pub depth: usize,
}

/// Gauss hypergeometric function ₂F₁(a, b; c; z) with default settings.
///
/// Total over the reals: failures show up as an imprecise or non-finite
/// value, never as a panic.
///
/// # Example
///
/// ```
/// use hypergeo::hyp2f1;
///
/// assert_eq!(hyp2f1(0.3_f64, 1.7, 2.2, 0.0), 1.0);
///
/// // atan(z)/z = ₂F₁(½, 1; 3/2; −z²), far outside the unit disk
/// let z = 7.0_f64;
/// assert!((hyp2f1(0.5, 1.0, 1.5, -z * z) - z.atan() / z).abs() < 1e-10);
/// ```
pub fn hyp2f1<T: FloatScalar>(a: T, b: T, c: T, z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    hyp2f1_with(a, b, c, z, &Hyp2f1Settings::default()).value
}

/// ₂F₁(a, b; c; z) with explicit settings, reporting routing and convergence.
pub fn hyp2f1_with<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    z: T,
    settings: &Hyp2f1Settings<T>,
) -> Hyp2f1Result<T> {
    dispatch::evaluate(a, b, c, z, settings, 0)
}

/// Checked ₂F₁(a, b; c; z).
///
/// # Errors
///
/// Returns [`SpecialError::NotFinite`] if the value is NaN or infinite, and
/// [`SpecialError::ConvergenceFailure`] if any series in the evaluation
/// reached the iteration cap.
///
/// # Example
///
/// ```
/// use hypergeo::{try_hyp2f1, SpecialError};
///
/// assert!(try_hyp2f1(1.0_f64, 1.0, 2.0, 0.4).is_ok());
///
/// // Γ(c) has a pole at c = −1
/// assert_eq!(try_hyp2f1(0.3_f64, 0.4, -1.0, 0.8), Err(SpecialError::NotFinite));
/// ```
pub fn try_hyp2f1<T: FloatScalar>(a: T, b: T, c: T, z: T) -> Result<T, SpecialError>
where
    Hyp2f1Settings<T>: Default,
{
    let r = hyp2f1_with(a, b, c, z, &Hyp2f1Settings::default());
    if !r.value.is_finite() {
        return Err(SpecialError::NotFinite);
    }
    if !r.converged {
        return Err(SpecialError::ConvergenceFailure);
    }
    Ok(r.value)
}

/// Fractional part x − trunc(x), carrying the sign of x.
#[inline]
pub(crate) fn frac<T: FloatScalar>(x: T) -> T {
    x - x.trunc()
}

/// True when x lies within `tol` of the nearest integer.
#[inline]
pub(crate) fn is_near_integer<T: FloatScalar>(x: T, tol: T) -> bool {
    let f = frac(x).abs();
    f <= tol || T::one() - f <= tol
}
