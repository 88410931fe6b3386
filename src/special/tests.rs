use super::*;

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "approx_eq failed: {a} vs {b}, diff = {}, tol = {tol}",
        (a - b).abs()
    );
}

// =====================================================================
// gamma
// =====================================================================

#[test]
fn gamma_positive_integers() {
    // Γ(n) = (n-1)!
    approx_eq(gamma(1.0_f64), 1.0, 1e-14);
    approx_eq(gamma(2.0), 1.0, 1e-14);
    approx_eq(gamma(3.0), 2.0, 1e-14);
    approx_eq(gamma(5.0), 24.0, 1e-12);
    approx_eq(gamma(10.0), 362880.0, 1e-6);
    approx_eq(gamma(18.0), 355687428096000.0, 1e-1);
}

#[test]
fn gamma_past_factorial_table() {
    // Γ(20) = 19!, Lanczos path
    let rel = (gamma(20.0_f64) - 121645100408832000.0).abs() / 121645100408832000.0;
    assert!(rel < 1e-13, "rel = {rel}");
}

#[test]
fn gamma_half_integers() {
    let sqrt_pi = core::f64::consts::PI.sqrt();
    approx_eq(gamma(0.5), sqrt_pi, 1e-14);
    approx_eq(gamma(1.5), sqrt_pi / 2.0, 1e-14);
    approx_eq(gamma(2.5), 3.0 * sqrt_pi / 4.0, 1e-13);
}

#[test]
fn gamma_negative_values() {
    let sqrt_pi = core::f64::consts::PI.sqrt();
    approx_eq(gamma(-0.5), -2.0 * sqrt_pi, 1e-13);
    approx_eq(gamma(-1.5), 4.0 * sqrt_pi / 3.0, 1e-13);
    // Γ(−¼) = −4.9016668098607...
    approx_eq(gamma(-0.25), -4.901666809860711, 1e-12);
}

#[test]
fn gamma_quarter() {
    // Γ(¼) = 3.6256099082219083, Γ(¾) = 1.2254167024651776
    approx_eq(gamma(0.25), 3.6256099082219083, 1e-13);
    approx_eq(gamma(0.75), 1.2254167024651776, 1e-13);
}

#[test]
fn gamma_poles_are_infinite() {
    for &x in &[0.0_f64, -1.0, -2.0, -7.0] {
        assert!(is_pole(x));
        let g = gamma(x);
        assert!(g.is_infinite() && g > 0.0, "Γ({x}) = {g}");
    }
    assert!(!is_pole(1.0_f64));
    assert!(!is_pole(-0.5_f64));
}

#[test]
fn gamma_nan() {
    assert!(gamma(f64::NAN).is_nan());
}

#[test]
fn gamma_recurrence_identity() {
    // x·Γ(x) = Γ(x+1)
    for &x in &[-1.3, -0.6, 0.3, 1.7, 3.14, 5.5] {
        let lhs = x * gamma(x);
        let rhs = gamma(x + 1.0);
        approx_eq(lhs, rhs, 1e-12 * rhs.abs().max(1.0));
    }
}

#[test]
fn gamma_reflection_identity() {
    // Γ(x)Γ(1−x) = π / sin(πx)
    let pi = core::f64::consts::PI;
    for &x in &[0.1, 0.25, 0.4, 0.75] {
        approx_eq(gamma(x) * gamma(1.0 - x), pi / (pi * x).sin(), 1e-12);
    }
}

#[test]
fn gamma_f32() {
    assert!((gamma(5.0_f32) - 24.0).abs() < 1e-4);
    assert!((gamma(0.5_f32) - core::f32::consts::PI.sqrt()).abs() < 1e-5);
    assert!(gamma(-2.0_f32).is_infinite());
}

// =====================================================================
// SpecialError
// =====================================================================

#[cfg(feature = "std")]
#[test]
fn error_display() {
    use std::string::ToString;
    assert_eq!(
        SpecialError::NotFinite.to_string(),
        "computed value is NaN or infinity"
    );
    assert_eq!(
        SpecialError::ConvergenceFailure.to_string(),
        "series did not converge within the iteration cap"
    );
}
