//! Core types: the vector entity and its argument and error types

pub mod error;
pub mod operand;
pub mod vector;

pub use error::{VectorError, VectorErrorKind};
pub use operand::Operand;
pub use vector::{Basis, Vector};
