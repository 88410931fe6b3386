//! Elementary functions written as ₂F₁ identities.
//!
//! Each identity comes as a pair: the hypergeometric form evaluated through
//! [`hyp2f1`], and the `_exact` closed form built from `num_traits::Float`.
//!
//! | Function | Closed form | Identity |
//! |----------|-------------|----------|
//! | [`log1m_ratio`] | −ln(1−z)/z | ₂F₁(1, 1; 2; z) |
//! | [`asin_ratio`] | asin(z)/z | ₂F₁(½, ½; 3/2; z²) |
//! | [`atan_ratio`] | atan(z)/z | ₂F₁(½, 1; 3/2; −z²) |
//! | [`sqrt_mean`] | ½(√(√(1+z²)+z) + √(√(1+z²)−z)) | ₂F₁(−¼, ¼; ½; −z²) |
//!
//! The ratio forms are 1 at z = 0, which is also where the closed forms
//! are 0/0; the `_exact` functions return 1 there.
//!
//! # Example
//!
//! ```
//! use hypergeo::elementary::{atan_ratio, atan_ratio_exact};
//!
//! let z = 3.0_f64;
//! assert!((atan_ratio(z) - atan_ratio_exact(z)).abs() < 1e-10);
//! ```

use crate::hyp2f1::{hyp2f1, Hyp2f1Settings};
use crate::traits::FloatScalar;

/// −ln(1−z)/z via ₂F₁(1, 1; 2; z), for z < 1.
pub fn log1m_ratio<T: FloatScalar>(z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    let one = T::one();
    hyp2f1(one, one, one + one, z)
}

/// −ln(1−z)/z, closed form.
pub fn log1m_ratio_exact<T: FloatScalar>(z: T) -> T {
    if z == T::zero() {
        return T::one();
    }
    -(T::one() - z).ln() / z
}

/// asin(z)/z via ₂F₁(½, ½; 3/2; z²), for |z| ≤ 1.
pub fn asin_ratio<T: FloatScalar>(z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    let half = T::from(0.5).unwrap();
    hyp2f1(half, half, T::from(1.5).unwrap(), z * z)
}

/// asin(z)/z, closed form.
pub fn asin_ratio_exact<T: FloatScalar>(z: T) -> T {
    if z == T::zero() {
        return T::one();
    }
    z.asin() / z
}

/// atan(z)/z via ₂F₁(½, 1; 3/2; −z²), for all real z.
pub fn atan_ratio<T: FloatScalar>(z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    hyp2f1(T::from(0.5).unwrap(), T::one(), T::from(1.5).unwrap(), -z * z)
}

/// atan(z)/z, closed form.
pub fn atan_ratio_exact<T: FloatScalar>(z: T) -> T {
    if z == T::zero() {
        return T::one();
    }
    z.atan() / z
}

/// ½(√(√(1+z²)+z) + √(√(1+z²)−z)) via ₂F₁(−¼, ¼; ½; −z²).
///
/// Mean of the square roots of √(1+z²) ± z; even in z and ~ √(z/2) for large z.
pub fn sqrt_mean<T: FloatScalar>(z: T) -> T
where
    Hyp2f1Settings<T>: Default,
{
    let q = T::from(0.25).unwrap();
    hyp2f1(-q, q, T::from(0.5).unwrap(), -z * z)
}

/// ½(√(√(1+z²)+z) + √(√(1+z²)−z)), closed form.
pub fn sqrt_mean_exact<T: FloatScalar>(z: T) -> T {
    let r = (T::one() + z * z).sqrt();
    T::from(0.5).unwrap() * ((r + z).sqrt() + (r - z).sqrt())
}
