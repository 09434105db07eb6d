//! vec3-kit Core Library
//!
//! A small 3D vector toolkit for simulation and rendering loops.
//!
//! ## Two calling conventions
//!
//! - [`Vector`] methods mutate the receiver in place and return it, so
//!   updates chain: `velocity.add(accel).max_mag(4.0);`
//! - [`functional`] mirrors those methods as free functions that leave their
//!   inputs alone and return new vectors, plus generators (axes, random
//!   directions, angle constructors, scalar projection).
//!
//! ```
//! use vec3_kit_core::functional as vf;
//! use vec3_kit_core::Vector;
//!
//! let mut position = Vector::new(0.0, 0.0, 0.0);
//! let target = Vector::new(3.0, 4.0, 0.0);
//!
//! let step = vf::set_mag(&vf::sub(&target, position), 1.0);
//! position.add(step);
//! assert!((position.dist(&target) - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Numeric edge cases
//!
//! Invalid scale factors are ignored rather than reported, the zero vector
//! normalizes to itself, and unguarded magnitude limits propagate NaN. See
//! [`core_types::vector`] for the full policy and [`core_types::error`] for the
//! checked alternatives.

// Core types: the vector entity, its operand and error types
pub mod core_types;

// Free-function facade and generators
pub mod functional;

// Re-export core types
pub use core_types::{Basis, Operand, Vector, VectorError, VectorErrorKind};
