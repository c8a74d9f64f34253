//! Tests for vector construction, accessors and trait impls.

use super::*;
use std::str::FromStr;

fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

#[test]
fn new_sets_dimension() {
    let v = Vector::new([1, 2, 3]).unwrap();
    assert_eq!(v.dimension(), 3);
    assert_eq!(v.coordinates().len(), v.dimension());
}

#[test]
fn new_rejects_empty_input() {
    let err = Vector::new(Vec::<i64>::new()).unwrap_err();
    assert_eq!(
        err,
        VectorError::InvalidArgument("coordinates must be nonempty".to_string())
    );
}

#[test]
fn new_rejects_unconvertible_elements() {
    assert!(matches!(
        Vector::new(["1", "x"]),
        Err(VectorError::InvalidArgument(_))
    ));
    assert!(matches!(
        Vector::new([f64::INFINITY]),
        Err(VectorError::InvalidArgument(_))
    ));
}

#[test]
fn construction_is_eager_and_exact() {
    let v = Vector::new([7.887, 4.138]).unwrap();
    assert_eq!(v[0], dec("7.887"));
    assert_eq!(v[1], dec("4.138"));

    // no rounding at construction, even in a coarse context
    let coarse = Vector::with_context(["1.23456789"], NumericContext::presentation()).unwrap();
    assert_eq!(coarse[0], dec("1.23456789"));
}

#[test]
fn zero_builds_requested_dimension() {
    let zero = Vector::zero(4).unwrap();
    assert_eq!(zero.dimension(), 4);
    assert!(zero.coordinates().iter().all(|c| *c == dec("0")));
    assert!(matches!(Vector::zero(0), Err(VectorError::InvalidArgument(_))));
}

#[test]
fn equality_is_exact_and_ignores_context() {
    let a = Vector::new(["1.0", "2"]).unwrap();
    let b = Vector::with_context([1, 2], NumericContext::presentation()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, Vector::new(["1.0000000001", "2"]).unwrap());
    assert_ne!(a, Vector::new([1, 2, 0]).unwrap());
}

#[test]
fn display_lists_coordinates() {
    let v = Vector::new(["1", "-2.5", "0"]).unwrap();
    assert_eq!(v.to_string(), "Vector: (1, -2.5, 0)");
    assert_eq!(Vector::new([4]).unwrap().to_string(), "Vector: (4)");
}

#[test]
fn f64_export_round_trips() {
    let v = Vector::new([3.039, -1.879]).unwrap();
    assert_eq!(v.to_f64_vec().unwrap(), vec![3.039, -1.879]);
}

#[test]
fn vectors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Vector>();
}

// =============================================================================
// SERDE
// =============================================================================

#[test]
fn serializes_as_coordinate_list() {
    let v = Vector::new(["1.5", "-2"]).unwrap();
    let json = serde_json::to_string(&v).unwrap();
    let back: Vector = serde_json::from_str(&json).unwrap();
    assert_eq!(back, v);
    assert!(json.starts_with('['));
}

#[test]
fn deserialization_validates_input() {
    assert!(serde_json::from_str::<Vector>("[]").is_err());
    let v: Vector = serde_json::from_str(r#"["3", "4"]"#).unwrap();
    assert_eq!(v.magnitude().unwrap(), dec("5"));
}

#[test]
fn try_from_coordinates() {
    let v = Vector::try_from(vec![dec("1"), dec("2")]).unwrap();
    assert_eq!(v.dimension(), 2);
    assert!(Vector::try_from(Vec::<BigDecimal>::new()).is_err());
    let coordinates: Vec<BigDecimal> = v.into();
    assert_eq!(coordinates, vec![dec("1"), dec("2")]);
}
