//! # Error Types
//!
//! Error types for vector operations. Every failure is explicit and reaches
//! the direct caller.
//!
//! ## Error Policy
//!
//! - NO fallback mechanisms when operations fail
//! - Low-level failures are re-labelled by variant at the layer that knows
//!   what the caller asked for (`DegenerateVector` becomes `UndefinedAngle`
//!   inside `angle`, `DegenerateBasis` inside projections)
//! - Messages are never inspected to decide how to re-label

use std::fmt;

use config::constants::{ConfigError, PrecisionConfig};
use thiserror::Error;
use tracing::debug;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Operation that was asked to use a zero basis vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasisOperation {
    /// [`Vector::project_onto`](crate::Vector::project_onto)
    Projection,
    /// [`Vector::orthogonal_component`](crate::Vector::orthogonal_component)
    OrthogonalComponent,
}

impl fmt::Display for BasisOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasisOperation::Projection => {
                f.write_str("basis vector is zero and cannot be normalized")
            }
            BasisOperation::OrthogonalComponent => {
                f.write_str("basis vector is zero, no orthogonal component is defined")
            }
        }
    }
}

/// Errors that can occur during vector operations.
///
/// ## Example
///
/// ```rust
/// use exact_vector::{AngleUnit, Vector, VectorError};
///
/// let zero = Vector::new([0, 0]).unwrap();
/// let x = Vector::new([1, 0]).unwrap();
/// match zero.normalize() {
///     Err(VectorError::DegenerateVector) => {}
///     other => panic!("unexpected: {other:?}"),
/// }
/// assert!(matches!(zero.angle(&x, AngleUnit::Radians), Err(VectorError::UndefinedAngle)));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// Malformed construction input or scalar.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operands of incompatible dimension.
    ///
    /// Also raised by `cross` and the area functions for operands that are
    /// not 3-dimensional.
    #[error("Dimension mismatch in '{operation}': {message}")]
    DimensionMismatch {
        /// Name of the operation that rejected its operands
        operation: &'static str,
        /// Description of the dimensions involved
        message: String,
    },

    /// Normalization of a vector whose magnitude is exactly zero.
    #[error("cannot normalize a zero-magnitude vector")]
    DegenerateVector,

    /// Projection-derived operation against a zero basis vector.
    #[error("{operation}")]
    DegenerateBasis {
        /// Operation the caller invoked
        operation: BasisOperation,
    },

    /// Angle requested with a zero-magnitude operand.
    #[error("cannot compute an angle with the zero vector")]
    UndefinedAngle,

    /// A round trip through `f64` produced NaN or infinity.
    #[error("Non-finite intermediate value in '{operation}'")]
    NonFinite {
        /// Name of the operation that crossed into floating point
        operation: &'static str,
    },

    /// The process-wide precision was already bound to another value.
    #[error("Numeric precision already fixed at {installed}; cannot switch to {requested}")]
    PrecisionLocked {
        /// Precision in effect
        installed: PrecisionConfig,
        /// Precision the caller tried to install
        requested: PrecisionConfig,
    },

    /// Invalid precision configuration.
    #[error("Invalid precision configuration: {0}")]
    Config(#[from] ConfigError),
}

impl VectorError {
    /// Replaces a `DegenerateVector` failure with `relabelled`; every other
    /// variant passes through unchanged.
    pub(crate) fn relabel_degenerate(self, layer: &'static str, relabelled: VectorError) -> Self {
        match self {
            VectorError::DegenerateVector => {
                debug!(layer, error = %relabelled, "re-labelling degenerate vector failure");
                relabelled
            }
            other => other,
        }
    }

    /// Builds the mismatch error shared by the element-wise operations.
    pub(crate) fn dimension_mismatch(operation: &'static str, left: usize, right: usize) -> Self {
        VectorError::DimensionMismatch {
            operation,
            message: format!("dimensions {left} and {right} differ"),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for vector operations.
///
/// ## Example
///
/// ```rust
/// use exact_vector::{Vector, VectorResult};
///
/// fn diagonal(dimension: usize) -> VectorResult<Vector> {
///     Vector::new(vec![1; dimension])
/// }
/// assert!(diagonal(0).is_err());
/// ```
pub type VectorResult<T> = Result<T, VectorError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        assert_eq!(
            VectorError::DegenerateVector.to_string(),
            "cannot normalize a zero-magnitude vector"
        );
        assert_eq!(
            VectorError::UndefinedAngle.to_string(),
            "cannot compute an angle with the zero vector"
        );

        let mismatch = VectorError::dimension_mismatch("add", 2, 3);
        assert!(mismatch.to_string().contains("add"));
        assert!(mismatch.to_string().contains("2 and 3"));
    }

    #[test]
    fn test_basis_messages_depend_on_operation() {
        let projection = VectorError::DegenerateBasis {
            operation: BasisOperation::Projection,
        };
        let orthogonal = VectorError::DegenerateBasis {
            operation: BasisOperation::OrthogonalComponent,
        };
        assert_eq!(
            projection.to_string(),
            "basis vector is zero and cannot be normalized"
        );
        assert_eq!(
            orthogonal.to_string(),
            "basis vector is zero, no orthogonal component is defined"
        );
    }

    #[test]
    fn test_relabel_only_touches_degenerate_vector() {
        let relabelled = VectorError::DegenerateVector.relabel_degenerate("angle", VectorError::UndefinedAngle);
        assert_eq!(relabelled, VectorError::UndefinedAngle);

        let untouched = VectorError::dimension_mismatch("dot", 1, 2)
            .relabel_degenerate("angle", VectorError::UndefinedAngle);
        assert!(matches!(untouched, VectorError::DimensionMismatch { operation: "dot", .. }));
    }

    #[test]
    fn test_config_error_converts() {
        let err: VectorError = ConfigError::InvalidPrecision(0).into();
        assert!(matches!(err, VectorError::Config(ConfigError::InvalidPrecision(0))));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VectorError>();
    }
}
