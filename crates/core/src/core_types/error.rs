//! Errors for the checked vector API
//!
//! The fluent arithmetic never fails: invalid scale factors are silently
//! ignored and zero-magnitude rescales propagate NaN. The few entry points
//! that can refuse their input (slice conversions and the `try_*` magnitude
//! limits) report a [`VectorError`] instead.

use std::fmt;

/// Category of a [`VectorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorKind {
    /// A component slice had an unsupported length.
    ComponentCount,

    /// A rescale was requested on a vector whose magnitude is zero.
    ZeroMagnitude,

    /// A target magnitude was NaN or infinite.
    NonFinite,
}

impl fmt::Display for VectorErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VectorErrorKind::ComponentCount => "component count",
            VectorErrorKind::ZeroMagnitude => "zero magnitude",
            VectorErrorKind::NonFinite => "non-finite value",
        };
        f.write_str(name)
    }
}

/// Error returned by fallible vector conversions and checked rescales.
///
/// Wraps a [`VectorErrorKind`] together with a message naming the offending
/// input, e.g. `"expected 1 to 3 components, got 4"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorError {
    kind: VectorErrorKind,
    msg: String,
}

impl VectorError {
    /// Create error for a component slice of unsupported length.
    ///
    /// # Arguments
    /// * `expected` - Human readable accepted range (e.g. `"0 to 3"`)
    /// * `got` - The length that was supplied
    pub fn component_count(expected: &str, got: usize) -> Self {
        Self {
            kind: VectorErrorKind::ComponentCount,
            msg: format!("expected {expected} components, got {got}"),
        }
    }

    /// Create error for a rescale of a zero-magnitude vector.
    ///
    /// # Arguments
    /// * `operation` - The operation that refused to divide (e.g. `"max_mag"`)
    pub fn zero_magnitude(operation: &str) -> Self {
        Self {
            kind: VectorErrorKind::ZeroMagnitude,
            msg: format!("{operation}: cannot rescale a vector with zero magnitude"),
        }
    }

    /// Create error for a NaN or infinite parameter.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter (e.g. `"mag"`, `"min"`)
    /// * `value` - The rejected value
    pub fn non_finite(param_name: &str, value: f64) -> Self {
        Self {
            kind: VectorErrorKind::NonFinite,
            msg: format!("Parameter '{param_name}' must be finite, got {value}"),
        }
    }

    /// The error category.
    pub fn kind(&self) -> VectorErrorKind {
        self.kind
    }

    /// The human-readable error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl std::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_count_message() {
        let err = VectorError::component_count("1 to 3", 4);
        assert_eq!(err.kind(), VectorErrorKind::ComponentCount);
        assert_eq!(err.msg(), "expected 1 to 3 components, got 4");
        assert_eq!(
            err.to_string(),
            "component count: expected 1 to 3 components, got 4"
        );
    }

    #[test]
    fn test_zero_magnitude_and_non_finite() {
        let err = VectorError::zero_magnitude("min_mag");
        assert_eq!(err.kind(), VectorErrorKind::ZeroMagnitude);
        assert!(err.msg().starts_with("min_mag:"));

        let err = VectorError::non_finite("mag", f64::INFINITY);
        assert_eq!(err.kind(), VectorErrorKind::NonFinite);
        assert_eq!(err.msg(), "Parameter 'mag' must be finite, got inf");
    }
}
