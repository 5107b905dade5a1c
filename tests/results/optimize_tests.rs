//! Integration tests for OptimizeResult

use crate::test_helpers::least_squares_fit;
use approx::assert_relative_eq;
use fitbroom_rs::results::{Fun, OptimizeResult};
use fitbroom_rs::{augment, glance, tidy, BroomError, FitTree, Options, Value};
use ndarray::array;

#[test]
fn test_glance_least_squares_fields() {
    let fit = least_squares_fit(array![1.5, -0.3], array![0.2, -0.1, 0.1]);
    let table = glance(&FitTree::leaf(fit), &Options::new()).unwrap();

    assert_eq!(table.num_rows(), 1);
    assert_eq!(
        table.column_names(),
        vec!["success", "cost", "optimality", "nfev", "njev", "status", "message"]
    );
    let cost = table.get(0, "cost").unwrap().as_f64().unwrap();
    assert_relative_eq!(cost, 0.03, epsilon = 1e-12);
    assert_eq!(table.get(0, "njev").unwrap(), Value::Int(10));
}

#[test]
fn test_glance_scalar_fun() {
    let fit = OptimizeResult::new(array![0.0, 1.0])
        .with_status(true, 0, "Optimization terminated successfully.")
        .with_fun(Fun::Scalar(4.2e-9))
        .with_evaluations(60, None, Some(31));
    let table = glance(&FitTree::leaf(fit), &Options::new()).unwrap();

    assert_eq!(
        table.column_names(),
        vec!["success", "nfev", "nit", "status", "message", "fun"]
    );
    assert_eq!(table.get(0, "fun").unwrap(), Value::Float(4.2e-9));
}

#[test]
fn test_tidy_requires_param_names() {
    let tree = FitTree::leaf(least_squares_fit(array![1.5, -0.3], array![0.2, -0.1]));

    assert!(matches!(
        tidy(&tree, &Options::new()),
        Err(BroomError::MissingCapability { .. })
    ));

    let table = tidy(&tree, &Options::new().param_names(["x", "y"])).unwrap();
    assert_eq!(table.num_rows(), 2);
    assert_eq!(table.get(0, "name").unwrap(), Value::from("x"));
    assert_eq!(table.get(1, "name").unwrap(), Value::from("y"));
    assert_eq!(table.get(1, "value").unwrap(), Value::Float(-0.3));
    assert!(table.contains("grad"));

    assert!(matches!(
        tidy(&tree, &Options::new().param_names_str("x y z")),
        Err(BroomError::InvalidInput(_))
    ));
}

#[test]
fn test_augment_residual_vector() {
    let tree = FitTree::leaf(least_squares_fit(array![1.0], array![0.2, -0.1, 0.1, 0.0]));
    let table = augment(&tree, &Options::new()).unwrap();
    assert_eq!(table.column_names(), vec!["index", "residual"]);
    assert_eq!(table.num_rows(), 4);
    assert_eq!(table.get(3, "index").unwrap(), Value::Int(3));

    let scalar = FitTree::leaf(OptimizeResult::new(array![1.0]).with_fun(Fun::Scalar(0.5)));
    assert!(matches!(
        augment(&scalar, &Options::new()),
        Err(BroomError::MissingCapability { .. })
    ));
}
