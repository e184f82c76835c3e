#[cfg(test)]
use crate::geometry::{Mat3, Vec2, Vec3};

/// Performs a linear interpolation.
///
/// Maps a value between [`0.0`, `1.0`] in an interval [`min`, `max`]. Values outside [`0.0`,
/// `1.0`] are extrapolated.
/// # Examples
/// Basic usage:
/// ```
/// use geom::utility::lerp;
///
/// let res = lerp(0.2, 0.0, 10.0);
/// assert_eq!(res, 2.0);
/// ```
#[inline]
pub fn lerp(value: f64, min: f64, max: f64) -> f64 {
    (1.0 - value) * min + value * max
}

/// Returns true if two floats are the same value, considering every NaN equal to any other NaN.
///
/// Unlike `==`, this relation is reflexive also for NaN values.
#[cfg(test)]
#[inline]
pub(crate) fn float_identical(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
pub(crate) fn vec2_identical(a: &Vec2, b: &Vec2) -> bool {
    float_identical(a.x, b.x) && float_identical(a.y, b.y)
}

#[cfg(test)]
pub(crate) fn vec3_identical(a: &Vec3, b: &Vec3) -> bool {
    float_identical(a.x, b.x) && float_identical(a.y, b.y) && float_identical(a.z, b.z)
}

#[cfg(test)]
pub(crate) fn mat3_identical(a: &Mat3, b: &Mat3) -> bool {
    a.m.iter()
        .zip(b.m.iter())
        .all(|(&x, &y)| float_identical(x, y))
}
