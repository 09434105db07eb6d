//! Argument type for the overloaded `add`, `sub` and `set` forms
//!
//! Each of those operations accepts either another vector or one to three
//! bare numbers. [`Operand`] captures both shapes so the receiving method
//! dispatches with a single `match`. The scalar form remembers which
//! components were actually supplied, because `set(5.0)` fills all three
//! components while `add(5.0)` only touches `x`.

use super::error::VectorError;
use super::vector::Vector;

/// A vector, or up to three numeric components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// Another vector, applied component-wise.
    Vector(Vector),

    /// Bare numbers; missing `y`/`z` default to 0 (except for the
    /// single-number form of `set`).
    Scalars {
        x: f64,
        y: Option<f64>,
        z: Option<f64>,
    },
}

impl Operand {
    /// Components as offsets: missing `y`/`z` are 0.
    pub fn offsets(&self) -> [f64; 3] {
        match *self {
            Operand::Vector(v) => v.to_array(),
            Operand::Scalars { x, y, z } => [x, y.unwrap_or(0.0), z.unwrap_or(0.0)],
        }
    }

    /// Components as an assignment: a lone number is repeated on every axis,
    /// otherwise missing `y`/`z` are 0.
    pub fn assignment(&self) -> [f64; 3] {
        match *self {
            Operand::Scalars {
                x,
                y: None,
                z: None,
            } => [x, x, x],
            _ => self.offsets(),
        }
    }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl From<&Vector> for Operand {
    fn from(v: &Vector) -> Self {
        Operand::Vector(*v)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalars {
            x,
            y: None,
            z: None,
        }
    }
}

impl From<(f64, f64)> for Operand {
    fn from((x, y): (f64, f64)) -> Self {
        Operand::Scalars {
            x,
            y: Some(y),
            z: None,
        }
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand::Scalars {
            x,
            y: Some(y),
            z: Some(z),
        }
    }
}

impl From<[f64; 3]> for Operand {
    fn from([x, y, z]: [f64; 3]) -> Self {
        (x, y, z).into()
    }
}

impl TryFrom<&[f64]> for Operand {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        match *values {
            [x] => Ok(x.into()),
            [x, y] => Ok((x, y).into()),
            [x, y, z] => Ok((x, y, z).into()),
            _ => Err(VectorError::component_count("1 to 3", values.len())),
        }
    }
}
