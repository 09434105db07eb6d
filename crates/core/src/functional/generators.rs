//! Vector constructors with no in-place counterpart
//!
//! Axis shorthands, angle-based unit vectors, random directions and the
//! scalar projection of a point onto a line.
//!
//! # Angle conventions
//!
//! - `from_angle(θ)` lies in the XY plane: `(cos θ, sin θ, 0)`
//! - `from_angles(polar, azimuth)` uses the physics convention, polar angle
//!   measured from +Z and azimuth from +X toward +Y. It inverts
//!   [`Vector::heading_3d`], which returns `[azimuth, polar]`.
//!
//! # Random directions
//!
//! [`random_3d`] draws the polar and azimuth angles independently and
//! uniformly. That is NOT a uniform distribution over the sphere: directions
//! cluster toward the poles. Callers that rely on the existing distribution
//! (seeded replays, for instance) keep getting it.

use std::f64::consts::{PI, TAU};

use rand::Rng;

use super::{add, dot, mult, normalize, sub};
use crate::core_types::Vector;

/// `(1, 0, 0)`
pub fn right() -> Vector {
    Vector::new(1.0, 0.0, 0.0)
}

/// `(-1, 0, 0)`
pub fn left() -> Vector {
    Vector::new(-1.0, 0.0, 0.0)
}

/// `(0, 1, 0)`
pub fn up() -> Vector {
    Vector::new(0.0, 1.0, 0.0)
}

/// `(0, -1, 0)`
pub fn down() -> Vector {
    Vector::new(0.0, -1.0, 0.0)
}

/// `(0, 0, 1)`
pub fn forward() -> Vector {
    Vector::new(0.0, 0.0, 1.0)
}

/// `(0, 0, -1)`
pub fn back() -> Vector {
    Vector::new(0.0, 0.0, -1.0)
}

/// `(0, 0, 0)`
pub fn zero() -> Vector {
    Vector::default()
}

/// `(1, 1, 1)`
pub fn one() -> Vector {
    Vector::new(1.0, 1.0, 1.0)
}

pub fn create_vector(x: f64, y: f64, z: f64) -> Vector {
    Vector::new(x, y, z)
}

/// Unit vector in the XY plane at `angle` radians from +X.
pub fn from_angle(angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    Vector::new(cos, sin, 0.0)
}

/// Unit vector from spherical angles (radians).
pub fn from_angles(polar: f64, azimuth: f64) -> Vector {
    let (sin_p, cos_p) = polar.sin_cos();
    let (sin_a, cos_a) = azimuth.sin_cos();
    Vector::new(sin_p * cos_a, sin_p * sin_a, cos_p)
}

/// Random unit vector in the XY plane, using the thread-local RNG.
pub fn random_2d() -> Vector {
    random_2d_with(&mut rand::rng())
}

/// Random unit vector in the XY plane drawn from `rng`.
pub fn random_2d_with<R: Rng>(rng: &mut R) -> Vector {
    from_angle(rng.random_range(0.0..TAU))
}

/// Random unit vector, using the thread-local RNG. See the module docs for
/// the distribution.
pub fn random_3d() -> Vector {
    random_3d_with(&mut rand::rng())
}

/// Random unit vector drawn from `rng`, polar in `[0, π)` and azimuth in
/// `[0, 2π)`, both uniform.
pub fn random_3d_with<R: Rng>(rng: &mut R) -> Vector {
    let polar = rng.random_range(0.0..PI);
    let azimuth = rng.random_range(0.0..TAU);
    from_angles(polar, azimuth)
}

/// Project `other_point` onto the line from `vertex` through `point`.
///
/// Returns the foot of the projection in absolute coordinates. When `point`
/// coincides with `vertex` the direction normalizes to zero and the result
/// is `vertex` itself.
///
/// ```
/// use vec3_kit_core::functional::scalar_projection;
/// use vec3_kit_core::Vector;
///
/// let foot = scalar_projection(
///     &Vector::new(1.0, 1.0, 0.0),
///     &Vector::new(5.0, 1.0, 0.0),
///     &Vector::new(3.0, 4.0, 0.0),
/// );
/// assert_eq!(foot.to_array(), [3.0, 1.0, 0.0]);
/// ```
pub fn scalar_projection(vertex: &Vector, point: &Vector, other_point: &Vector) -> Vector {
    let direction = normalize(&sub(point, vertex));
    let length = dot(&sub(other_point, vertex), &direction);
    add(vertex, mult(&direction, length))
}
