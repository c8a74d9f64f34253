use approx::assert_abs_diff_eq;
use exact_vector::{AngleUnit, BigDecimal, Vector, VectorError};

fn as_f64(value: &BigDecimal) -> f64 {
    value.to_string().parse().unwrap()
}

#[test]
fn construction_contract() {
    assert!(matches!(
        Vector::new(Vec::<i32>::new()),
        Err(VectorError::InvalidArgument(_))
    ));
    assert_eq!(Vector::new([1, 2, 3]).unwrap().dimension(), 3);
}

#[test]
fn dot_product_example() {
    let a = Vector::new([1, 2, -1]).unwrap();
    let b = Vector::new([3, 1, 0]).unwrap();
    assert_eq!(a.dot(&b).unwrap(), BigDecimal::from(5));
}

#[test]
fn angle_in_degrees_example() {
    let a = Vector::new([7.887, 4.138]).unwrap();
    let b = Vector::new([-8.802, 6.776]).unwrap();
    let degrees = as_f64(&b.angle(&a, AngleUnit::Degrees).unwrap());
    assert_abs_diff_eq!(degrees, 114.7258, epsilon = 0.01);
}

#[test]
fn angle_in_radians_example() {
    let a = Vector::new([3.183, -7.627]).unwrap();
    let b = Vector::new([-2.668, 5.319]).unwrap();
    let radians = as_f64(&a.angle(&b, AngleUnit::Radians).unwrap());
    assert_abs_diff_eq!(radians, 3.072, epsilon = 0.001);
}

#[test]
fn zero_vector_angle_fails() {
    let zero = Vector::zero(2).unwrap();
    let a = Vector::new([7.887, 4.138]).unwrap();
    assert_eq!(
        zero.angle(&a, AngleUnit::Radians),
        Err(VectorError::UndefinedAngle)
    );
}

#[test]
fn orthogonality_example() {
    let a = Vector::new([1, 0]).unwrap();
    let b = Vector::new([0, 5]).unwrap();
    assert!(a.is_orthogonal(&b).unwrap());
    assert!(!a.is_parallel(&b).unwrap());
}

#[test]
fn parallel_example() {
    let a = Vector::new([2, 0, 0]).unwrap();
    let b = Vector::new([5, 0, 0]).unwrap();
    assert!(a.is_parallel(&b).unwrap());
}

#[test]
fn area_examples() {
    let a = Vector::new([3.039, 1.879, 2.0]).unwrap();
    let b = Vector::new([0.825, 2.036, 3.0]).unwrap();
    let cross = a.cross(&b).unwrap();
    assert_eq!(cross.to_string(), "Vector: (1.565, -7.467, 4.637229)");
    assert_abs_diff_eq!(
        as_f64(&a.parallelogram_area(&b).unwrap()),
        8.928001276794319,
        epsilon = 1e-12
    );
    assert_abs_diff_eq!(
        as_f64(&a.triangle_area(&b).unwrap()),
        4.464000638397160,
        epsilon = 1e-12
    );
}

#[test]
fn dimension_contracts() {
    let a2 = Vector::new([1, 2]).unwrap();
    let b2 = Vector::new([3, 4]).unwrap();
    let a3 = Vector::new([1, 2, 3]).unwrap();
    assert!(matches!(
        a2.cross(&b2),
        Err(VectorError::DimensionMismatch { .. })
    ));
    assert!(matches!(
        a2.add(&a3),
        Err(VectorError::DimensionMismatch { .. })
    ));
}

/// Every operation result is a `Vector`, so calls chain.
#[test]
fn results_compose() {
    let a = Vector::new([1, 2, 3]).unwrap();
    let b = Vector::new([4, 5, 6]).unwrap();
    let chained = a
        .subtract(&b)
        .unwrap()
        .scale(-1)
        .unwrap()
        .normalize()
        .unwrap();
    assert!(chained.is_parallel(&Vector::new([1, 1, 1]).unwrap()).unwrap());
}
