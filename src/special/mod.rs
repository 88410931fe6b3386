//! Special-function primitives shared by the hypergeometric evaluators.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`gamma`] | Gamma function Γ(x), +∞ at the poles 0, −1, −2, … |
//! | [`is_pole`] | Whether x is a non-positive integer |
//!
//! # Example
//!
//! ```
//! use hypergeo::special::gamma;
//!
//! // Γ(5) = 4! = 24
//! assert!((gamma(5.0_f64) - 24.0).abs() < 1e-12);
//!
//! // Γ(0) is a pole
//! assert!(gamma(0.0_f64).is_infinite());
//! ```

use core::fmt;

use crate::FloatScalar;

mod gamma_fn;

#[cfg(test)]
mod tests;

pub use gamma_fn::{gamma, is_pole};

/// Errors reported by the checked evaluators.
///
/// The plain evaluators never return this; they hand back a possibly
/// imprecise or non-finite number instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialError {
    /// A series hit its iteration cap before the tolerance was met.
    ConvergenceFailure,
    /// The computed value is NaN or infinite (e.g. a Gamma pole was hit).
    NotFinite,
}

impl fmt::Display for SpecialError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceFailure => write!(f, "series did not converge within the iteration cap"),
            Self::NotFinite => write!(f, "computed value is NaN or infinity"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SpecialError {}

// ---------------------------------------------------------------------------
// Lanczos approximation constants (g = 7, n = 9)
// ---------------------------------------------------------------------------

pub(crate) const LANCZOS_G: f64 = 7.0;

pub(crate) const LANCZOS_COEFFS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Lanczos partial-fraction sum A_g(z) = c0 + Σ ck/(z+k).
#[inline]
pub(crate) fn lanczos_sum<T: FloatScalar>(z: T) -> T {
    LANCZOS_COEFFS[1..]
        .iter()
        .enumerate()
        .fold(T::from(LANCZOS_COEFFS[0]).unwrap(), |acc, (k, &c)| {
            acc + T::from(c).unwrap() / (z + T::from(k + 1).unwrap())
        })
}
