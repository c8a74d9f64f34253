//! Magnitude, zero test, normalization and angles.
//!
//! Two independent zero checks live here. [`Vector::is_zero`] compares the
//! magnitude against a tolerance and serves caller-facing predicates.
//! [`Vector::normalize`] only refuses a magnitude of exactly zero, the one
//! value it cannot divide by.

use std::fmt;

use bigdecimal::BigDecimal;
use config::constants::DEFAULT_TOLERANCE;
use num_traits::Zero;
use tracing::trace;

use super::Vector;
use crate::error::{VectorError, VectorResult};
use crate::numeric::ToExact;

/// Unit in which [`Vector::angle`] reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    /// Radians, in `[0, pi]`.
    #[default]
    Radians,
    /// Degrees, in `[0, 180]`.
    Degrees,
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AngleUnit::Radians => f.write_str("rad"),
            AngleUnit::Degrees => f.write_str("deg"),
        }
    }
}

impl Vector {
    /// Euclidean length.
    ///
    /// The sum of squares is exact; its square root is taken in `f64` and
    /// converted back, so the result carries at most `f64` precision.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let v = Vector::new([3, 4]).unwrap();
    /// assert_eq!(v.magnitude().unwrap().to_string(), "5");
    /// ```
    pub fn magnitude(&self) -> VectorResult<BigDecimal> {
        let sum_of_squares = self
            .context
            .sum_of_products(&self.coordinates, &self.coordinates);
        let squared = self.context.to_f64(&sum_of_squares, "magnitude")?;
        let root = squared.sqrt();
        trace!(dimension = self.dimension(), root, "magnitude via f64 sqrt");
        self.context.from_f64(root, "magnitude")
    }

    /// True when the magnitude is below the default tolerance (`1e-10`).
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// assert!(Vector::new([0, 0]).unwrap().is_zero().unwrap());
    /// assert!(Vector::new(["1e-11", "0"]).unwrap().is_zero().unwrap());
    /// assert!(!Vector::new([1, 0]).unwrap().is_zero().unwrap());
    /// ```
    pub fn is_zero(&self) -> VectorResult<bool> {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    /// True when the magnitude is below `tolerance`.
    pub fn is_zero_within<T: ToExact>(&self, tolerance: T) -> VectorResult<bool> {
        let tolerance = tolerance.to_exact()?;
        Ok(self.magnitude()? < tolerance)
    }

    /// Unit vector in the same direction.
    ///
    /// Fails with [`VectorError::DegenerateVector`] when the magnitude is
    /// exactly zero. Tiny but non-zero vectors are normalized.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::{Vector, VectorError};
    ///
    /// let unit = Vector::new([0, 5]).unwrap().normalize().unwrap();
    /// assert_eq!(unit, Vector::new([0, 1]).unwrap());
    /// assert_eq!(Vector::zero(2).unwrap().normalize(), Err(VectorError::DegenerateVector));
    /// ```
    pub fn normalize(&self) -> VectorResult<Vector> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            return Err(VectorError::DegenerateVector);
        }
        let inverse = self.context.div(&BigDecimal::from(1), &magnitude);
        Ok(self.scale_exact(&inverse))
    }

    /// Angle between `self` and `other`.
    ///
    /// Computed as the arc-cosine of the dot product of the two unit
    /// vectors, clamped to `[-1, 1]`. A zero-magnitude operand fails with
    /// [`VectorError::UndefinedAngle`].
    ///
    /// # Examples
    /// ```
    /// use exact_vector::{AngleUnit, Vector};
    ///
    /// let x = Vector::new([1, 0]).unwrap();
    /// let y = Vector::new([0, 3]).unwrap();
    /// let angle = x.angle(&y, AngleUnit::Degrees).unwrap();
    /// assert_eq!(angle.to_string(), "90");
    /// ```
    pub fn angle(&self, other: &Vector, unit: AngleUnit) -> VectorResult<BigDecimal> {
        let radians = self.angle_radians(other)?;
        let value = match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        };
        self.context.from_f64(value, "angle")
    }

    /// Angle in radians as `f64`, before conversion back to the exact type.
    pub(crate) fn angle_radians(&self, other: &Vector) -> VectorResult<f64> {
        self.ensure_same_dimension(other, "angle")?;
        let unit_self = self
            .normalize()
            .map_err(|err| err.relabel_degenerate("angle", VectorError::UndefinedAngle))?;
        let unit_other = other
            .normalize()
            .map_err(|err| err.relabel_degenerate("angle", VectorError::UndefinedAngle))?;
        let cosine = self.context.to_f64(&unit_self.dot(&unit_other)?, "angle")?;
        let radians = cosine.clamp(-1.0, 1.0).acos();
        trace!(cosine, radians, "angle via f64 acos");
        Ok(radians)
    }
}
