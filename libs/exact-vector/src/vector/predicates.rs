//! Orthogonality and parallelism tests.

use std::f64::consts::PI;

use config::constants::{DEFAULT_TOLERANCE, PARALLEL_ANGLE_TOLERANCE};

use super::Vector;
use crate::error::VectorResult;
use crate::numeric::ToExact;

impl Vector {
    /// True when `|self · other|` is below the default tolerance (`1e-10`).
    ///
    /// The zero vector is orthogonal to every vector.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([1, 0]).unwrap();
    /// let b = Vector::new([0, 5]).unwrap();
    /// assert!(a.is_orthogonal(&b).unwrap());
    /// assert!(Vector::zero(2).unwrap().is_orthogonal(&a).unwrap());
    /// ```
    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_within(other, DEFAULT_TOLERANCE)
    }

    /// True when `|self · other|` is below `tolerance`.
    pub fn is_orthogonal_within<T: ToExact>(
        &self,
        other: &Vector,
        tolerance: T,
    ) -> VectorResult<bool> {
        let tolerance = tolerance.to_exact()?;
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// True when either vector is zero, or the angle between them is 0 or
    /// pi within [`PARALLEL_ANGLE_TOLERANCE`].
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([2, 0, 0]).unwrap();
    /// let b = Vector::new([5, 0, 0]).unwrap();
    /// assert!(a.is_parallel(&b).unwrap());
    /// assert!(a.is_parallel(&-&b).unwrap());
    /// assert!(!a.is_parallel(&Vector::new([0, 1, 0]).unwrap()).unwrap());
    /// ```
    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        self.is_parallel_within(other, PARALLEL_ANGLE_TOLERANCE)
    }

    /// Like [`Vector::is_parallel`] with an explicit angular tolerance in
    /// radians.
    pub fn is_parallel_within(&self, other: &Vector, tolerance: f64) -> VectorResult<bool> {
        self.ensure_same_dimension(other, "is_parallel")?;
        // the angle is undefined for zero vectors, so they never reach it
        if self.is_zero()? || other.is_zero()? {
            return Ok(true);
        }
        let radians = self.angle_radians(other)?;
        Ok(radians < tolerance || (PI - radians).abs() < tolerance)
    }
}
