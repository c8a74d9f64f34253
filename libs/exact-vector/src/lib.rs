//! Exact-decimal vector algebra.
//!
//! This crate provides an immutable n-dimensional [`Vector`] whose
//! coordinates are `BigDecimal` values rounded to a configurable number of
//! significant digits, plus the geometric operations built on top of three
//! primitives (element-wise arithmetic, magnitude and dot product): angles,
//! orthogonality and parallelism tests, projections, and 3D cross products
//! with the derived areas.
//!
//! ```rust
//! use exact_vector::{AngleUnit, BigDecimal, Vector};
//!
//! let a = Vector::new([3.039, 1.879, 2.0]).unwrap();
//! let b = Vector::new([0.825, 2.036, 3.0]).unwrap();
//!
//! let area = a.parallelogram_area(&b).unwrap();
//! assert_eq!(area.to_string(), "8.928001276794319");
//!
//! let degrees = a.angle(&a, AngleUnit::Degrees).unwrap();
//! assert!(degrees.abs() < "1e-5".parse::<BigDecimal>().unwrap());
//! ```
//!
//! Precision is described by [`config::constants::PrecisionConfig`] and bound
//! to arithmetic through [`NumericContext`], either per vector
//! ([`Vector::with_context`]) or once per process
//! ([`NumericContext::install`]).

pub mod error;
pub mod numeric;
pub mod vector;

pub use bigdecimal::BigDecimal;
pub use error::{BasisOperation, VectorError, VectorResult};
pub use numeric::{NumericContext, ToExact};
pub use vector::{AngleUnit, Vector};
