//! Non-mutating counterparts of the [`Vector`] methods
//!
//! Every function here takes its vectors by reference and returns a fresh
//! value; the inputs are never modified. Internally each one copies its first
//! argument and runs the in-place method on the copy, so the numeric edge
//! policies are exactly those of [`Vector`].
//!
//! The one deliberate difference is [`angle_between`], which returns `None`
//! for a zero-length input where [`Vector::angle_between`] returns 0.
//!
//! ```
//! use vec3_kit_core::functional as vf;
//! use vec3_kit_core::Vector;
//!
//! let a = Vector::new(1.0, 0.0, 0.0);
//! let b = vf::rotate(&a, std::f64::consts::PI);
//! assert_eq!(a.to_array(), [1.0, 0.0, 0.0]);
//! assert!((b.x + 1.0).abs() < 1e-12);
//! ```

pub mod generators;

pub use generators::*;

use crate::core_types::{Basis, Operand, Vector};

/// `v + operand` as a new vector.
pub fn add(v: &Vector, operand: impl Into<Operand>) -> Vector {
    let mut out = v.copy();
    out.add(operand);
    out
}

/// `v - operand` as a new vector.
pub fn sub(v: &Vector, operand: impl Into<Operand>) -> Vector {
    let mut out = v.copy();
    out.sub(operand);
    out
}

/// `v * factor`; a non-finite factor yields an unchanged copy.
pub fn mult(v: &Vector, factor: f64) -> Vector {
    let mut out = v.copy();
    out.mult(factor);
    out
}

/// `v / divisor`; a zero or non-finite divisor yields an unchanged copy.
pub fn div(v: &Vector, divisor: f64) -> Vector {
    let mut out = v.copy();
    out.div(divisor);
    out
}

/// Unit-length copy of `v`, or `(0, 0, 0)` for the zero vector.
pub fn normalize(v: &Vector) -> Vector {
    let mut out = v.copy();
    out.normalize();
    out
}

/// Copy of `v` scaled to magnitude `mag`.
pub fn set_mag(v: &Vector, mag: f64) -> Vector {
    let mut out = v.copy();
    out.set_mag(mag);
    out
}

pub fn mag(v: &Vector) -> f64 {
    v.mag()
}

/// Copy of whichever input has the larger magnitude (ties pick `b`).
pub fn max(a: &Vector, b: &Vector) -> Vector {
    a.max(b).copy()
}

/// Copy of whichever input has the smaller magnitude (ties pick `b`).
pub fn min(a: &Vector, b: &Vector) -> Vector {
    a.min(b).copy()
}

pub fn equals(a: &Vector, b: &Vector) -> bool {
    a.equals(b)
}

pub fn dist(a: &Vector, b: &Vector) -> f64 {
    a.dist(b)
}

pub fn dist_sq(a: &Vector, b: &Vector) -> f64 {
    a.dist_sq(b)
}

pub fn cross(a: &Vector, b: &Vector) -> Vector {
    a.cross(b)
}

pub fn dot(a: &Vector, b: &Vector) -> f64 {
    a.dot(b)
}

pub fn to_array(v: &Vector) -> [f64; 3] {
    v.to_array()
}

/// Copy of `v` re-expressed in `basis`.
pub fn change_of_basis(v: &Vector, basis: &Basis) -> Vector {
    let mut out = v.copy();
    out.change_of_basis(basis);
    out
}

/// Interpolated point between `a` and `b`, `alpha` clamped into `[0, 1]`.
pub fn lerp(a: &Vector, b: &Vector, alpha: f64) -> Vector {
    let mut out = a.copy();
    out.lerp(b, alpha);
    out
}

/// Angle between `a` and `b` in radians.
///
/// Returns `None` when either vector has zero magnitude, unlike
/// [`Vector::angle_between`] which reports 0 for that case.
pub fn angle_between(a: &Vector, b: &Vector) -> Option<f64> {
    let mag_product = a.mag() * b.mag();
    if mag_product == 0.0 {
        return None;
    }
    Some((a.dot(b) / mag_product).clamp(-1.0, 1.0).acos())
}

/// Copy of `v` rotated about the Z axis.
pub fn rotate(v: &Vector, angle: f64) -> Vector {
    let mut out = v.copy();
    out.rotate(angle);
    out
}

/// Copy of `v` rotated about the X axis.
pub fn rotate_x(v: &Vector, angle: f64) -> Vector {
    let mut out = v.copy();
    out.rotate_x(angle);
    out
}

/// Copy of `v` rotated about the Y axis.
pub fn rotate_y(v: &Vector, angle: f64) -> Vector {
    let mut out = v.copy();
    out.rotate_y(angle);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inputs_untouched() {
        let a = Vector::new(1.0, 2.0, 3.0);
        let b = Vector::new(-4.0, 0.5, 2.0);

        let _ = add(&a, b);
        let _ = sub(&a, 1.0);
        let _ = mult(&a, 3.0);
        let _ = div(&a, 2.0);
        let _ = normalize(&a);
        let _ = set_mag(&a, 9.0);
        let _ = lerp(&a, &b, 0.5);
        let _ = rotate(&a, 1.0);
        let _ = rotate_x(&a, 1.0);
        let _ = rotate_y(&a, 1.0);
        let _ = change_of_basis(&a, &Basis::new(b, b, b));

        assert_eq!(a.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(b.to_array(), [-4.0, 0.5, 2.0]);
    }

    #[test]
    fn test_angle_between_zero_is_none() {
        let a = Vector::new(1.0, 0.0, 0.0);
        assert_eq!(angle_between(&a, &zero()), None);
        assert_eq!(a.angle_between(&zero()), 0.0);
    }

    #[test]
    fn test_max_min_return_copies() {
        let small = Vector::new(1.0, 0.0, 0.0);
        let big = Vector::new(0.0, 5.0, 0.0);
        assert_eq!(max(&small, &big), big);
        assert_eq!(min(&small, &big), small);
    }

    #[test]
    fn test_scalar_helpers() {
        let a = Vector::new(3.0, 4.0, 0.0);
        let b = Vector::new(0.0, 0.0, 0.0);
        assert_eq!(mag(&a), 5.0);
        assert_eq!(dist(&a, &b), 5.0);
        assert_eq!(dist_sq(&a, &b), 25.0);
        assert_eq!(dot(&a, &a), 25.0);
        assert!(equals(&a, &a.copy()));
        assert_eq!(to_array(&a), [3.0, 4.0, 0.0]);
        assert_eq!(cross(&right(), &up()), forward());
    }
}
