//! Connection formula about z = 1.
//!
//! ```text
//! ₂F₁(a,b;c;z) = Γ(c)Γ(c−a−b) / (Γ(c−a)Γ(c−b)) · ₂F₁(a, b; a+b−c+1; 1−z)
//!              + (1−z)^(c−a−b) · Γ(c)Γ(a+b−c) / (Γ(a)Γ(b)) · ₂F₁(c−a, c−b; c−a−b+1; 1−z)
//! ```
//!
//! Valid when c−a−b is not an integer; the dispatcher only routes here in
//! that case. Gamma poles are not intercepted: Γ returns +∞ and the value
//! goes non-finite.

use crate::special::gamma;
use crate::traits::FloatScalar;

use super::dispatch::evaluate;
use super::{Hyp2f1Result, Hyp2f1Settings, Region};

pub(super) fn reflect<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    z: T,
    settings: &Hyp2f1Settings<T>,
    depth: usize,
) -> Hyp2f1Result<T> {
    let one = T::one();
    let s = c - a - b;
    let w = one - z;
    let gc = gamma(c);

    let near = evaluate(a, b, one - s, w, settings, depth + 1);
    let far = evaluate(c - a, c - b, s + one, w, settings, depth + 1);

    // Divides by Γ(c−a)Γ(c−b); reading Γ(c)Γ(c−a−b)/Γ(c−a)·Γ(c−b) left to
    // right would multiply by Γ(c−b) instead.
    let k_near = gc * gamma(s) / (gamma(c - a) * gamma(c - b));
    let k_far = w.powf(s) * gc * gamma(-s) / (gamma(a) * gamma(b));

    Hyp2f1Result {
        value: k_near * near.value + k_far * far.value,
        region: Region::Reflection,
        terms: near.terms + far.terms,
        converged: near.converged && far.converged,
        depth: near.depth.max(far.depth),
    }
}
