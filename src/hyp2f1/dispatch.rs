use crate::traits::FloatScalar;

use super::series::{series_sum, SeriesSum};
use super::{connection, is_near_integer, pfaff, Hyp2f1Result, Hyp2f1Settings, Region};

/// Classify z into the region whose method evaluates ₂F₁(a, b; c; z).
///
/// Rules apply in order: |z| ≤ r is [`Region::Direct`]; r < z ≤ 1 with
/// c−a−b away from every integer is [`Region::Reflection`]; z < −r is
/// [`Region::Pfaff`]; everything else, including NaN and z > 1, is
/// [`Region::Fallback`].
///
/// # Example
///
/// ```
/// use hypergeo::hyp2f1::{classify, Hyp2f1Settings, Region};
///
/// let s = Hyp2f1Settings::default();
/// assert_eq!(classify(1.0_f64, 1.0, 2.0, 0.5, &s), Region::Direct);
/// assert_eq!(classify(0.5_f64, 0.5, 1.5, 0.8, &s), Region::Reflection);
/// assert_eq!(classify(1.0_f64, 1.0, 2.0, -3.0, &s), Region::Pfaff);
/// // c − a − b = 0: logarithmic case
/// assert_eq!(classify(1.0_f64, 1.0, 2.0, 0.8, &s), Region::Fallback);
/// ```
pub fn classify<T: FloatScalar>(a: T, b: T, c: T, z: T, settings: &Hyp2f1Settings<T>) -> Region {
    let r = settings.series_radius;
    if z.abs() <= r {
        Region::Direct
    } else if z > r && z <= T::one() && !is_near_integer(c - a - b, settings.integer_tol) {
        Region::Reflection
    } else if z < -r {
        Region::Pfaff
    } else {
        Region::Fallback
    }
}

/// Single recursive entry point shared by the dispatcher and both transforms.
pub(super) fn evaluate<T: FloatScalar>(
    a: T,
    b: T,
    c: T,
    z: T,
    settings: &Hyp2f1Settings<T>,
    depth: usize,
) -> Hyp2f1Result<T> {
    let region = if depth > settings.max_depth {
        Region::Fallback
    } else {
        classify(a, b, c, z, settings)
    };

    match region {
        Region::Direct | Region::Fallback => {
            from_series(series_sum(a, b, c, z, settings), region, depth)
        }
        Region::Reflection => connection::reflect(a, b, c, z, settings, depth),
        Region::Pfaff => pfaff::reflect_negative(a, b, c, z, settings, depth),
    }
}

fn from_series<T>(s: SeriesSum<T>, region: Region, depth: usize) -> Hyp2f1Result<T> {
    Hyp2f1Result {
        value: s.value,
        region,
        terms: s.terms,
        converged: s.converged,
        depth,
    }
}
