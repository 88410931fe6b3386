//! # hypergeo
//!
//! Gauss hypergeometric function ₂F₁(a, b; c; z) for real parameters and a
//! real argument, no-std compatible and stack-only.
//!
//! ## Quick start
//!
//! ```
//! use hypergeo::hyp2f1;
//!
//! // −ln(1−z)/z = ₂F₁(1, 1; 2; z)
//! let z = 0.3_f64;
//! let f = hyp2f1(1.0, 1.0, 2.0, z);
//! assert!((f - (-(1.0 - z).ln() / z)).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`hyp2f1`](mod@hyp2f1) — Region dispatcher over three evaluators: the
//!   direct power series for |z| ≤ ½, the connection formula at the reflected
//!   point 1−z for ½ < z ≤ 1, and the Pfaff transform z ↦ z/(z−1) for z < −½.
//!   Failures are silent: the plain entry point returns a possibly imprecise
//!   or non-finite number. [`hyp2f1::hyp2f1_with`] reports the routing and
//!   convergence details, [`hyp2f1::try_hyp2f1`] turns them into a `Result`.
//!
//! - [`special`] — Gamma function Γ(x) (Lanczos, g = 7, n = 9) used by the
//!   connection-formula coefficients, and the crate error type.
//!
//! - [`elementary`] — Logarithm, inverse sine, inverse tangent and the
//!   generalized square root written as ₂F₁ identities, each next to its
//!   closed form.
//!
//! - [`traits`] — [`FloatScalar`], the element bound (`f32` / `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware FPU via system libm, `std::error::Error` impl |
//! | `libm`  | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod elementary;
pub mod hyp2f1;
pub mod special;
pub mod traits;

pub use hyp2f1::{hyp2f1, hyp2f1_with, try_hyp2f1, Hyp2f1Result, Hyp2f1Settings, Region};
pub use special::SpecialError;
pub use traits::FloatScalar;
