//! Cross product and the areas derived from it (3D only).

use bigdecimal::BigDecimal;

use super::Vector;
use crate::error::{VectorError, VectorResult};

impl Vector {
    /// Standard 3D cross product.
    ///
    /// Both operands must be 3-dimensional, otherwise the call fails with
    /// [`VectorError::DimensionMismatch`].
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let x = Vector::new([1, 0, 0]).unwrap();
    /// let y = Vector::new([0, 1, 0]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap(), Vector::new([0, 0, 1]).unwrap());
    /// assert!(Vector::new([1, 0]).unwrap().cross(&Vector::new([0, 1]).unwrap()).is_err());
    /// ```
    pub fn cross(&self, other: &Vector) -> VectorResult<Vector> {
        let ([a1, a2, a3], [b1, b2, b3]) = (self.coordinates(), other.coordinates()) else {
            return Err(VectorError::DimensionMismatch {
                operation: "cross",
                message: format!(
                    "vectors must be 3-dimensional, got {} and {}",
                    self.dimension(),
                    other.dimension()
                ),
            });
        };
        let ctx = &self.context;
        let coordinates = vec![
            ctx.sub(&ctx.mul(a2, b3), &ctx.mul(a3, b2)),
            ctx.sub(&ctx.mul(a3, b1), &ctx.mul(a1, b3)),
            ctx.sub(&ctx.mul(a1, b2), &ctx.mul(a2, b1)),
        ];
        Ok(Vector::from_parts(coordinates, self.context))
    }

    /// Area of the parallelogram spanned by `self` and `other`:
    /// `|self × other|`.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([3, 0, 0]).unwrap();
    /// let b = Vector::new([0, 4, 0]).unwrap();
    /// assert_eq!(a.parallelogram_area(&b).unwrap().to_string(), "12");
    /// ```
    pub fn parallelogram_area(&self, other: &Vector) -> VectorResult<BigDecimal> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by `self` and `other`: half the
    /// parallelogram area.
    pub fn triangle_area(&self, other: &Vector) -> VectorResult<BigDecimal> {
        let area = self.parallelogram_area(other)?;
        Ok(self.context.div(&area, &BigDecimal::from(2)))
    }
}
