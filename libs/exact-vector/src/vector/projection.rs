//! Projection onto a basis vector and the orthogonal remainder.

use tracing::debug;

use super::Vector;
use crate::error::{BasisOperation, VectorError, VectorResult};

impl Vector {
    /// Component of `self` along `basis`.
    ///
    /// Fails with [`VectorError::DegenerateBasis`] when `basis` has zero
    /// magnitude.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let v = Vector::new([3, 4]).unwrap();
    /// let basis = Vector::new([2, 0]).unwrap();
    /// assert_eq!(v.project_onto(&basis).unwrap(), Vector::new([3, 0]).unwrap());
    /// ```
    pub fn project_onto(&self, basis: &Vector) -> VectorResult<Vector> {
        self.ensure_same_dimension(basis, "project_onto")?;
        let unit = basis.normalize().map_err(|err| {
            err.relabel_degenerate(
                "project_onto",
                VectorError::DegenerateBasis {
                    operation: BasisOperation::Projection,
                },
            )
        })?;
        let length = self.dot(&unit)?;
        Ok(Vector::from_parts(unit.coordinates, self.context).scale_exact(&length))
    }

    /// Component of `self` perpendicular to `basis`: `self - project_onto(basis)`.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::{Vector, VectorError};
    ///
    /// let v = Vector::new([3, 4]).unwrap();
    /// let basis = Vector::new([2, 0]).unwrap();
    /// assert_eq!(v.orthogonal_component(&basis).unwrap(), Vector::new([0, 4]).unwrap());
    ///
    /// let err = v.orthogonal_component(&Vector::zero(2).unwrap()).unwrap_err();
    /// assert_eq!(err.to_string(), "basis vector is zero, no orthogonal component is defined");
    /// ```
    pub fn orthogonal_component(&self, basis: &Vector) -> VectorResult<Vector> {
        let projection = self.project_onto(basis).map_err(relabel_for_orthogonal)?;
        self.subtract(&projection)
    }

    /// Both components at once: `(parallel, orthogonal)`, from a single
    /// projection.
    ///
    /// # Examples
    /// ```
    /// use exact_vector::Vector;
    ///
    /// let v = Vector::new([1, 1]).unwrap();
    /// let (parallel, orthogonal) = v.decompose(&Vector::new([0, 2]).unwrap()).unwrap();
    /// assert_eq!(parallel, Vector::new([0, 1]).unwrap());
    /// assert_eq!(orthogonal, Vector::new([1, 0]).unwrap());
    /// ```
    pub fn decompose(&self, basis: &Vector) -> VectorResult<(Vector, Vector)> {
        let parallel = self.project_onto(basis)?;
        let orthogonal = self.subtract(&parallel)?;
        Ok((parallel, orthogonal))
    }
}

fn relabel_for_orthogonal(err: VectorError) -> VectorError {
    match err {
        VectorError::DegenerateBasis { .. } => {
            debug!("re-labelling degenerate basis failure for orthogonal component");
            VectorError::DegenerateBasis {
                operation: BasisOperation::OrthogonalComponent,
            }
        }
        other => other,
    }
}
