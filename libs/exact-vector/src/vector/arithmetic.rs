//! Element-wise arithmetic and the dot product.
//!
//! Binary operations require equal dimensions and use the left operand's
//! numeric context for the result.

use std::ops::Neg;

use bigdecimal::BigDecimal;

use super::Vector;
use crate::error::VectorResult;
use crate::numeric::{NumericContext, ToExact};

impl Vector {
    /// Element-wise sum.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([8.218, -9.341]).unwrap();
    /// let b = Vector::new([-1.129, 2.111]).unwrap();
    /// assert_eq!(a.add(&b).unwrap(), Vector::new(["7.089", "-7.230"]).unwrap());
    /// assert!(a.add(&Vector::new([1, 2, 3]).unwrap()).is_err());
    /// ```
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "add", NumericContext::add)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([7.119, 8.215]).unwrap();
    /// let b = Vector::new([-8.223, 0.878]).unwrap();
    /// assert_eq!(a.subtract(&b).unwrap(), Vector::new(["15.342", "7.337"]).unwrap());
    /// ```
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, "subtract", NumericContext::sub)
    }

    /// Multiplies every coordinate by `factor`, converted to an exact decimal
    /// first.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let v = Vector::new([1.671, -1.012, -0.318]).unwrap();
    /// let scaled = v.scale(7.41).unwrap();
    /// assert_eq!(scaled, Vector::new(["12.38211", "-7.49892", "-2.35638"]).unwrap());
    /// assert!(v.scale(f64::NAN).is_err());
    /// ```
    pub fn scale<T: ToExact>(&self, factor: T) -> VectorResult<Vector> {
        let factor = factor.to_exact()?;
        Ok(self.scale_exact(&factor))
    }

    /// Vector pointing the opposite way.
    pub fn negate(&self) -> Vector {
        self.scale_exact(&BigDecimal::from(-1))
    }

    /// Sum of element-wise products.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let a = Vector::new([1, 2, -1]).unwrap();
    /// let b = Vector::new([3, 1, 0]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
    /// ```
    pub fn dot(&self, other: &Vector) -> VectorResult<BigDecimal> {
        self.ensure_same_dimension(other, "dot")?;
        Ok(self
            .context
            .sum_of_products(&self.coordinates, &other.coordinates))
    }

    pub(crate) fn scale_exact(&self, factor: &BigDecimal) -> Vector {
        let coordinates = self
            .coordinates
            .iter()
            .map(|value| self.context.mul(value, factor))
            .collect();
        Vector::from_parts(coordinates, self.context)
    }

    fn zip_with(
        &self,
        other: &Vector,
        operation: &'static str,
        combine: fn(&NumericContext, &BigDecimal, &BigDecimal) -> BigDecimal,
    ) -> VectorResult<Vector> {
        self.ensure_same_dimension(other, operation)?;
        let coordinates = self
            .coordinates
            .iter()
            .zip(&other.coordinates)
            .map(|(a, b)| combine(&self.context, a, b))
            .collect();
        Ok(Vector::from_parts(coordinates, self.context))
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VectorError;

    fn vector(values: &[&str]) -> Vector {
        Vector::new(values).unwrap()
    }

    #[test]
    fn add_is_element_wise() {
        let sum = vector(&["1", "2.5"]).add(&vector(&["-3", "0.5"])).unwrap();
        assert_eq!(sum, vector(&["-2", "3"]));
    }

    #[test]
    fn subtract_returns_a_vector() {
        let a = vector(&["3", "4", "5"]);
        let diff = a.subtract(&a).unwrap();
        assert_eq!(diff, Vector::zero(3).unwrap());
        // results chain like any other vector
        assert_eq!(diff.dimension(), 3);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let a = vector(&["1", "2"]);
        let b = vector(&["1", "2", "3"]);
        for result in [a.add(&b), a.subtract(&b)] {
            assert!(matches!(
                result,
                Err(VectorError::DimensionMismatch { .. })
            ));
        }
        assert!(matches!(
            a.dot(&b),
            Err(VectorError::DimensionMismatch { operation: "dot", .. })
        ));
    }

    #[test]
    fn scale_accepts_any_exact_input() {
        let v = vector(&["1", "-2"]);
        assert_eq!(v.scale(3).unwrap(), vector(&["3", "-6"]));
        assert_eq!(v.scale("0.5").unwrap(), vector(&["0.5", "-1"]));
        assert!(matches!(
            v.scale("half"),
            Err(VectorError::InvalidArgument(_))
        ));
    }

    #[test]
    fn negation_flips_every_sign() {
        let v = vector(&["1", "-2", "0"]);
        assert_eq!(-&v, vector(&["-1", "2", "0"]));
        assert_eq!(-(-v.clone()), v);
    }

    #[test]
    fn results_keep_left_context() {
        let coarse = Vector::with_context([1, 2], NumericContext::presentation()).unwrap();
        let fine = Vector::with_context([3, 4], NumericContext::high_precision()).unwrap();
        assert_eq!(coarse.add(&fine).unwrap().context(), NumericContext::presentation());
        assert_eq!(fine.add(&coarse).unwrap().context(), NumericContext::high_precision());
    }

    #[test]
    fn presentation_context_rounds_products() {
        let v = Vector::with_context(["1.2345"], NumericContext::presentation()).unwrap();
        assert_eq!(v.scale(1).unwrap(), vector(&["1.235"]));
    }

    #[test]
    fn dot_product_worked_example() {
        let a = vector(&["1", "2", "-1"]);
        let b = vector(&["3", "1", "0"]);
        assert_eq!(a.dot(&b).unwrap(), BigDecimal::from(5));
    }
}
