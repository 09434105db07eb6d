//! Mutable 3D vector with a fluent, in-place API
//!
//! [`Vector`] wraps a `nalgebra::Vector3<f64>` and exposes its `x`, `y`, `z`
//! fields through `Deref`. Every mutating method takes `&mut self` and hands
//! the same receiver back, so calls chain:
//!
//! ```
//! use vec3_kit_core::Vector;
//!
//! let mut v = Vector::new(3.0, 4.0, 0.0);
//! v.normalize().mult(10.0).add((1.0, 1.0));
//! assert_eq!(v.to_array(), [7.0, 9.0, 0.0]);
//! ```
//!
//! # Numeric policy
//!
//! Components are IEEE-754 `f64`; any triple, including NaN and infinities,
//! is a legal vector. A handful of operations guard their input instead:
//! - `mult` ignores a non-finite factor
//! - `div` ignores a zero or non-finite divisor
//! - `normalize` maps the zero vector to `(0, 0, 0)`
//! - `lerp` clamps its factor into `[0, 1]`
//! - `angle_between` returns 0 when either magnitude is zero
//!
//! `max_mag`, `min_mag` and `constrain_mag` do NOT guard: rescaling a zero
//! vector divides by zero and leaves NaN components. The `try_*` variants
//! report that case as a [`VectorError`] instead.

use std::fmt;
use std::ops::{Deref, DerefMut};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::VectorError;
use super::operand::Operand;

/// A 3-component point or direction.
///
/// Serializes as the flat sequence `[x, y, z]`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Vector(Vector3<f64>);

/// Target basis for [`Vector::change_of_basis`].
///
/// Each axis defaults to the matching standard axis, so a partial basis can
/// be written with struct update syntax:
///
/// ```
/// use vec3_kit_core::{Basis, Vector};
///
/// let basis = Basis {
///     i: Vector::new(2.0, 0.0, 0.0),
///     ..Basis::default()
/// };
/// let mut v = Vector::new(1.0, 1.0, 1.0);
/// v.change_of_basis(&basis);
/// assert_eq!(v.to_array(), [2.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub i: Vector,
    pub j: Vector,
    pub k: Vector,
}

impl Basis {
    /// Create a basis from three vectors.
    pub fn new(i: Vector, j: Vector, k: Vector) -> Self {
        Basis { i, j, k }
    }
}

impl Default for Basis {
    fn default() -> Self {
        Basis {
            i: Vector::new(1.0, 0.0, 0.0),
            j: Vector::new(0.0, 1.0, 0.0),
            k: Vector::new(0.0, 0.0, 1.0),
        }
    }
}

/// Stores +0 in place of a rotated component that came out as 0, -0 or NaN.
#[inline]
fn zero_if_falsy(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        0.0
    } else {
        value
    }
}

impl Vector {
    /// Create a new vector from components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Vector(Vector3::new(x, y, z))
    }

    /// Add another vector or up to three numeric offsets (`y`, `z` default 0).
    pub fn add(&mut self, operand: impl Into<Operand>) -> &mut Self {
        let [x, y, z] = operand.into().offsets();
        self.0.x += x;
        self.0.y += y;
        self.0.z += z;
        self
    }

    /// Subtract another vector or up to three numeric offsets (`y`, `z` default 0).
    pub fn sub(&mut self, operand: impl Into<Operand>) -> &mut Self {
        let [x, y, z] = operand.into().offsets();
        self.0.x -= x;
        self.0.y -= y;
        self.0.z -= z;
        self
    }

    /// Scale by `factor`. A NaN or infinite factor leaves the vector unchanged.
    pub fn mult(&mut self, factor: f64) -> &mut Self {
        if !factor.is_finite() {
            trace!("mult: ignoring non-finite factor {}", factor);
            return self;
        }
        self.0 *= factor;
        self
    }

    /// Scale by `1 / divisor`. A zero, NaN or infinite divisor leaves the
    /// vector unchanged.
    pub fn div(&mut self, divisor: f64) -> &mut Self {
        if !divisor.is_finite() || divisor == 0.0 {
            trace!("div: ignoring divisor {}", divisor);
            return self;
        }
        self.0 /= divisor;
        self
    }

    /// Overwrite the components.
    ///
    /// A single number is written to all three components; two or three
    /// numbers default the missing ones to 0.
    ///
    /// ```
    /// use vec3_kit_core::Vector;
    ///
    /// let mut v = Vector::default();
    /// assert_eq!(v.set(2.0).to_array(), [2.0, 2.0, 2.0]);
    /// assert_eq!(v.set((1.0, 2.0)).to_array(), [1.0, 2.0, 0.0]);
    /// ```
    pub fn set(&mut self, operand: impl Into<Operand>) -> &mut Self {
        let [x, y, z] = operand.into().assignment();
        self.0 = Vector3::new(x, y, z);
        self
    }

    /// An independent vector with the same components.
    pub fn copy(&self) -> Vector {
        Vector(self.0)
    }

    /// Squared Euclidean norm.
    #[inline]
    pub fn mag_sq(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Euclidean norm.
    #[inline]
    pub fn mag(&self) -> f64 {
        self.0.norm()
    }

    /// Scale to unit length.
    ///
    /// A vector whose magnitude is exactly zero becomes `(0, 0, 0)`. Any other
    /// magnitude goes through [`div`](Self::div), so an infinite or NaN
    /// magnitude leaves the vector as it was.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.mag();
        if len == 0.0 {
            self.0 = Vector3::zeros();
            return self;
        }
        self.div(len)
    }

    /// Normalize, then scale to `mag`.
    pub fn set_mag(&mut self, mag: f64) -> &mut Self {
        self.normalize().mult(mag)
    }

    /// Whichever of `self` and `other` has the larger magnitude.
    ///
    /// Returns a reference to one of the two inputs, not a copy. `self` only
    /// wins on a strictly larger magnitude; ties return `other`.
    pub fn max<'a>(&'a self, other: &'a Vector) -> &'a Vector {
        if self.mag() > other.mag() {
            self
        } else {
            other
        }
    }

    /// Whichever of `self` and `other` has the smaller magnitude.
    ///
    /// Same aliasing and tie rules as [`max`](Self::max).
    pub fn min<'a>(&'a self, other: &'a Vector) -> &'a Vector {
        if self.mag() < other.mag() {
            self
        } else {
            other
        }
    }

    /// Exact component-wise equality, no tolerance.
    pub fn equals(&self, other: &Vector) -> bool {
        self.0.x == other.0.x && self.0.y == other.0.y && self.0.z == other.0.z
    }

    /// Euclidean distance between the two points.
    pub fn dist(&self, other: &Vector) -> f64 {
        self.0.metric_distance(&other.0)
    }

    /// Squared distance between the two points.
    pub fn dist_sq(&self, other: &Vector) -> f64 {
        (other.0 - self.0).norm_squared()
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Vector) -> Vector {
        Vector(self.0.cross(&other.0))
    }

    /// Dot product.
    pub fn dot(&self, other: &Vector) -> f64 {
        self.0.dot(&other.0)
    }

    fn rescale(&mut self, current: f64, target: f64, operation: &str) {
        if current == 0.0 {
            debug!(
                "{}: rescaling a zero-magnitude vector to {}, components become NaN",
                operation, target
            );
        }
        self.0 *= target / current;
    }

    /// Shrink to magnitude `mag` if currently longer.
    ///
    /// Unguarded: when a rescale happens on a zero vector (only possible for a
    /// negative `mag`) the components become NaN.
    pub fn max_mag(&mut self, mag: f64) -> &mut Self {
        let current = self.mag();
        if current > mag {
            self.rescale(current, mag, "max_mag");
        }
        self
    }

    /// Grow to magnitude `mag` if currently shorter.
    ///
    /// Unguarded: a zero vector with a positive `mag` ends up with NaN
    /// components.
    pub fn min_mag(&mut self, mag: f64) -> &mut Self {
        let current = self.mag();
        if current < mag {
            self.rescale(current, mag, "min_mag");
        }
        self
    }

    /// Clamp the magnitude into `[min, max]`, with the same zero-vector hazard
    /// as [`min_mag`](Self::min_mag) and [`max_mag`](Self::max_mag).
    pub fn constrain_mag(&mut self, min: f64, max: f64) -> &mut Self {
        let current = self.mag();
        if current < min {
            self.rescale(current, min, "constrain_mag");
        } else if current > max {
            self.rescale(current, max, "constrain_mag");
        }
        self
    }

    fn checked_rescale(
        &mut self,
        current: f64,
        target: f64,
        operation: &str,
    ) -> Result<(), VectorError> {
        if current == 0.0 {
            return Err(VectorError::zero_magnitude(operation));
        }
        self.rescale(current, target, operation);
        Ok(())
    }

    /// Checked [`max_mag`](Self::max_mag).
    ///
    /// # Errors
    /// `NonFinite` if `mag` is NaN or infinite, `ZeroMagnitude` if the
    /// rescale would divide by a zero magnitude. The vector is untouched on
    /// error.
    pub fn try_max_mag(&mut self, mag: f64) -> Result<&mut Self, VectorError> {
        if !mag.is_finite() {
            return Err(VectorError::non_finite("mag", mag));
        }
        let current = self.mag();
        if current > mag {
            self.checked_rescale(current, mag, "max_mag")?;
        }
        Ok(self)
    }

    /// Checked [`min_mag`](Self::min_mag).
    ///
    /// # Errors
    /// `NonFinite` if `mag` is NaN or infinite, `ZeroMagnitude` if the
    /// vector is zero and needs to grow.
    pub fn try_min_mag(&mut self, mag: f64) -> Result<&mut Self, VectorError> {
        if !mag.is_finite() {
            return Err(VectorError::non_finite("mag", mag));
        }
        let current = self.mag();
        if current < mag {
            self.checked_rescale(current, mag, "min_mag")?;
        }
        Ok(self)
    }

    /// Checked [`constrain_mag`](Self::constrain_mag).
    ///
    /// # Errors
    /// `NonFinite` if either bound is NaN or infinite, `ZeroMagnitude` if a
    /// zero vector would need rescaling.
    pub fn try_constrain_mag(&mut self, min: f64, max: f64) -> Result<&mut Self, VectorError> {
        if !min.is_finite() {
            return Err(VectorError::non_finite("min", min));
        }
        if !max.is_finite() {
            return Err(VectorError::non_finite("max", max));
        }
        let current = self.mag();
        if current < min {
            self.checked_rescale(current, min, "constrain_mag")?;
        } else if current > max {
            self.checked_rescale(current, max, "constrain_mag")?;
        }
        Ok(self)
    }

    /// Components in `[x, y, z]` order.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.0.x, self.0.y, self.0.z]
    }

    /// Re-express the vector with `basis` as its axes: `x·i + y·j + z·k`.
    pub fn change_of_basis(&mut self, basis: &Basis) -> &mut Self {
        let [x, y, z] = self.to_array();
        self.0 = basis.i.0 * x + basis.j.0 * y + basis.k.0 * z;
        self
    }

    /// Move toward `target` by `alpha`, clamped into `[0, 1]`.
    ///
    /// Computed as `self·(1-α) + target·α` so both endpoints are exact.
    pub fn lerp(&mut self, target: &Vector, alpha: f64) -> &mut Self {
        let alpha = alpha.clamp(0.0, 1.0);
        self.0 = self.0 * (1.0 - alpha) + target.0 * alpha;
        self
    }

    /// Angle in radians between the two vectors, 0 if either is zero-length.
    pub fn angle_between(&self, other: &Vector) -> f64 {
        let mag_product = self.mag() * other.mag();
        if mag_product == 0.0 {
            return 0.0;
        }
        // Rounding can push the cosine just past ±1
        (self.dot(other) / mag_product).clamp(-1.0, 1.0).acos()
    }

    /// `[azimuth, polar]` in radians, the inverse of
    /// [`from_angles`](crate::functional::from_angles).
    pub fn heading_3d(&self) -> [f64; 2] {
        let azimuth = self.0.y.atan2(self.0.x);
        let polar = self.0.x.hypot(self.0.y).atan2(self.0.z);
        [azimuth, polar]
    }

    /// Planar heading `atan2(y, x)` in radians.
    pub fn heading(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Rotate about the Z axis (in the XY plane).
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let (x, y) = (self.0.x, self.0.y);
        self.0.x = zero_if_falsy(x * cos - y * sin);
        self.0.y = zero_if_falsy(x * sin + y * cos);
        self
    }

    /// Rotate about the X axis (in the YZ plane).
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let (y, z) = (self.0.y, self.0.z);
        self.0.y = zero_if_falsy(y * cos - z * sin);
        self.0.z = zero_if_falsy(y * sin + z * cos);
        self
    }

    /// Rotate about the Y axis (in the XZ plane).
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let (x, z) = (self.0.x, self.0.z);
        self.0.x = zero_if_falsy(x * cos + z * sin);
        self.0.z = zero_if_falsy(z * cos - x * sin);
        self
    }
}

impl Default for Vector {
    fn default() -> Self {
        Vector::new(0.0, 0.0, 0.0)
    }
}

impl Deref for Vector {
    type Target = Vector3<f64>;
    #[inline]
    fn deref(&self) -> &Vector3<f64> {
        &self.0
    }
}

impl DerefMut for Vector {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vector3<f64> {
        &mut self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("x", &self.0.x)
            .field("y", &self.0.y)
            .field("z", &self.0.z)
            .finish()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

impl From<[f64; 3]> for Vector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector::new(x, y, z)
    }
}

impl From<Vector> for [f64; 3] {
    fn from(v: Vector) -> Self {
        v.to_array()
    }
}

impl From<Vector3<f64>> for Vector {
    fn from(v: Vector3<f64>) -> Self {
        Vector(v)
    }
}

impl From<Vector> for Vector3<f64> {
    fn from(v: Vector) -> Self {
        v.0
    }
}

/// Zero to three components, missing ones default to 0.
impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        if values.len() > 3 {
            return Err(VectorError::component_count("0 to 3", values.len()));
        }
        let mut components = [0.0; 3];
        components[..values.len()].copy_from_slice(values);
        Ok(components.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_fields_through_deref() {
        let mut v = Vector::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        v.z = 7.0;
        assert_eq!(v.to_array(), [1.0, 2.0, 7.0]);
    }

    #[test]
    fn test_zero_if_falsy() {
        assert_eq!(zero_if_falsy(-0.0).to_bits(), 0.0_f64.to_bits());
        assert_eq!(zero_if_falsy(f64::NAN), 0.0);
        assert_eq!(zero_if_falsy(1.5), 1.5);
        assert_eq!(zero_if_falsy(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_rotate_stores_positive_zero() {
        let mut v = Vector::new(0.0, -0.0, 0.0);
        v.rotate(FRAC_PI_2);
        assert!(v.x.is_sign_positive());
        assert!(v.y.is_sign_positive());
    }

    #[test]
    fn test_rotate_nan_component_becomes_zero() {
        let mut v = Vector::new(f64::NAN, 1.0, 5.0);
        v.rotate(0.0);
        assert_eq!(v.to_array(), [0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_try_from_slice() {
        let one: &[f64] = &[4.0];
        assert_eq!(Vector::try_from(one).unwrap().to_array(), [4.0, 0.0, 0.0]);

        let none: &[f64] = &[];
        assert_eq!(Vector::try_from(none).unwrap(), Vector::default());

        let four: &[f64] = &[1.0, 2.0, 3.0, 4.0];
        assert!(Vector::try_from(four).is_err());
    }

    #[test]
    fn test_display_and_debug() {
        let v = Vector::new(1.0, -2.5, 0.0);
        assert_eq!(v.to_string(), "(1, -2.5, 0)");
        assert_eq!(format!("{v:?}"), "Vector { x: 1.0, y: -2.5, z: 0.0 }");
    }

    #[test]
    fn test_rescale_zero_vector_is_nan() {
        let mut v = Vector::default();
        v.min_mag(1.0);
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_rotate_y_coerces_nan_and_negative_zero() {
        let mut v = Vector::new(f64::NAN, 4.0, -0.0);
        v.rotate_y(0.0);
        assert_eq!(v.to_array(), [0.0, 4.0, 0.0]);
        assert!(v.x.is_sign_positive() && v.z.is_sign_positive());

        let mut v = Vector::new(1.0, 0.0, 0.0);
        v.rotate_y(FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.z + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_nalgebra_conversions() {
        let raw = Vector3::new(1.0, -2.0, 3.5);
        let v = Vector::from(raw);
        assert_eq!(v.to_array(), [1.0, -2.0, 3.5]);

        let back: Vector3<f64> = v.into();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_serializes_as_flat_array() {
        let v = Vector::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0]");

        let back: Vector = serde_json::from_str(&json).unwrap();
        assert!(back.equals(&v));
    }
}
