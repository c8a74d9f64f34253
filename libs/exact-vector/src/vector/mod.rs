//! The [`Vector`] value type.
//!
//! A `Vector` is an immutable, non-empty tuple of exact decimals together
//! with the [`NumericContext`] its arithmetic is rounded to. Operations are
//! split by concern:
//!
//! - `arithmetic`: add, subtract, scale, negate, dot
//! - `metric`: magnitude, zero test, normalization, angle
//! - `predicates`: orthogonality and parallelism
//! - `projection`: projection onto a basis and orthogonal component
//! - `cross`: 3D cross product and areas

mod arithmetic;
mod cross;
mod metric;
mod predicates;
mod projection;

use std::fmt;
use std::ops::Index;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::error::{VectorError, VectorResult};
use crate::numeric::{NumericContext, ToExact};

pub use metric::AngleUnit;

/// An n-dimensional vector over exact decimals.
///
/// Every operation returns a new `Vector`; coordinates are never modified
/// in place. Equality compares coordinates exactly and ignores the numeric
/// context.
///
/// # Examples
/// ```
/// use exact_vector::Vector;
///
/// let a = Vector::new([1, 2, -1]).unwrap();
/// let b = Vector::new([3, 1, 0]).unwrap();
/// assert_eq!(a.dimension(), 3);
/// assert_eq!(a.dot(&b).unwrap().to_string(), "5");
/// assert_eq!(a.to_string(), "Vector: (1, 2, -1)");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<BigDecimal>", into = "Vec<BigDecimal>")]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
    context: NumericContext,
}

impl Vector {
    /// Creates a vector using the process-wide numeric context.
    ///
    /// Every element is converted to an exact decimal up front. Fails with
    /// [`VectorError::InvalidArgument`] for an empty sequence or an element
    /// that has no exact decimal value.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::{Vector, VectorError};
    ///
    /// assert_eq!(Vector::new([7.887, 4.138]).unwrap().dimension(), 2);
    /// assert_eq!(Vector::new(["0.825", "2.036", "3"]).unwrap().dimension(), 3);
    /// assert!(matches!(Vector::new(Vec::<i32>::new()), Err(VectorError::InvalidArgument(_))));
    /// assert!(matches!(Vector::new([1.0, f64::NAN]), Err(VectorError::InvalidArgument(_))));
    /// ```
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToExact,
    {
        Self::with_context(coordinates, NumericContext::global())
    }

    /// Creates a vector whose arithmetic is rounded to `context`.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::{NumericContext, Vector};
    ///
    /// let v = Vector::with_context([1, 2], NumericContext::presentation()).unwrap();
    /// assert_eq!(v.context(), NumericContext::presentation());
    /// ```
    pub fn with_context<I>(coordinates: I, context: NumericContext) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToExact,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|value| value.to_exact())
            .collect::<VectorResult<Vec<_>>>()?;
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(
                "coordinates must be nonempty".to_string(),
            ));
        }
        Ok(Self {
            coordinates,
            context,
        })
    }

    /// Creates the zero vector of the given dimension.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let zero = Vector::zero(3).unwrap();
    /// assert_eq!(zero, Vector::new([0, 0, 0]).unwrap());
    /// assert!(Vector::zero(0).is_err());
    /// ```
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::new(vec![0_i32; dimension])
    }

    /// Builds a result vector from coordinates produced by an operation on
    /// non-empty operands.
    pub(crate) fn from_parts(coordinates: Vec<BigDecimal>, context: NumericContext) -> Self {
        debug_assert!(!coordinates.is_empty());
        Self {
            coordinates,
            context,
        }
    }

    /// Coordinates in order.
    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    /// Number of coordinates; always at least one.
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    /// Context the vector's arithmetic is rounded to.
    pub fn context(&self) -> NumericContext {
        self.context
    }

    /// Coordinates as `f64`, for handing results to floating-point code.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let v = Vector::new(["0.5", "-2"]).unwrap();
    /// assert_eq!(v.to_f64_vec().unwrap(), vec![0.5, -2.0]);
    /// ```
    pub fn to_f64_vec(&self) -> VectorResult<Vec<f64>> {
        self.coordinates
            .iter()
            .map(|value| self.context.to_f64(value, "to_f64_vec"))
            .collect()
    }

    pub(crate) fn ensure_same_dimension(
        &self,
        other: &Vector,
        operation: &'static str,
    ) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::dimension_mismatch(
                operation,
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Index<usize> for Vector {
    type Output = BigDecimal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector: (")?;
        for (i, value) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}

impl TryFrom<Vec<BigDecimal>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<BigDecimal>) -> Result<Self, Self::Error> {
        Self::new(coordinates)
    }
}

impl From<Vector> for Vec<BigDecimal> {
    fn from(vector: Vector) -> Self {
        vector.coordinates
    }
}

#[cfg(test)]
mod tests;
