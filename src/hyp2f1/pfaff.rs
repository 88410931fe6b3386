//! Pfaff transform for negative arguments.
//!
//! ```text
//! ₂F₁(a,b;c;z) = (1−z)^(−a) · ₂F₁(a, c−b; c; z/(z−1))
//! ```
//!
//! For z < 0 the mapped argument z/(z−1) lies in (0, 1), so the inner call
//! lands in the direct or reflection region and never comes back here.

use crate::traits::FloatScalar;

use super::dispatch::evaluate;
use super::{Hyp2f1Result, Hyp2f1Settings, Region};

pub(super) fn reflect_negative<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    z: T,
    settings: &Hyp2f1Settings<T>,
    depth: usize,
) -> Hyp2f1Result<T> {
    let one = T::one();
    let inner = evaluate(a, c - b, c, z / (z - one), settings, depth + 1);

    Hyp2f1Result {
        value: (one - z).powf(-a) * inner.value,
        region: Region::Pfaff,
        ..inner
    }
}
