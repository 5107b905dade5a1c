//! Integration tests for the union of columns across results

use crate::test_helpers::{gaussian, gaussian_fit, least_squares_fit, line_regression, minimizer_fit};
use fitbroom_rs::results::{Component, Fun, OptimizeResult};
use fitbroom_rs::table::ColumnKind;
use fitbroom_rs::{augment, glance, tidy, BroomError, FitTree, Options, Value};
use ndarray::array;

#[test]
fn test_different_component_sets() {
    let first = gaussian_fit(1, 10, 0.0);
    let second = gaussian_fit(2, 10, 0.0);
    let peak = |fit: &fitbroom_rs::results::ModelResult, name: &str| {
        Component::new(name, gaussian(&fit.x, 1.0, 0.0, 1.0))
    };
    let first_components = vec![peak(&first, "a"), peak(&first, "b")];
    let second_components = vec![peak(&second, "a"), peak(&second, "c")];
    let fits = FitTree::leaves([
        first.with_components(first_components),
        second.with_components(second_components),
    ]);

    let table = augment(&fits, &Options::new()).unwrap();
    assert_eq!(table.num_rows(), 20);
    for column in ["a", "b", "c"] {
        assert!(table.contains(column), "missing column {}", column);
    }
    let b = table.column("b").unwrap();
    let c = table.column("c").unwrap();
    for row in 0..10 {
        assert_eq!(c.data().get(row), Some(Value::Missing));
        assert_ne!(b.data().get(row), Some(Value::Missing));
    }
    for row in 10..20 {
        assert_eq!(b.data().get(row), Some(Value::Missing));
        assert_ne!(c.data().get(row), Some(Value::Missing));
    }
}

#[test]
fn test_different_parameter_sets() {
    let fits = FitTree::leaves([
        minimizer_fit(&[("a", 1.0), ("b", 2.0)], array![0.1, 0.2, 0.3]),
        minimizer_fit(&[("a", 1.5), ("c", 3.0)], array![0.1, 0.2, 0.3]),
    ]);

    let table = tidy(&fits, &Options::new()).unwrap();
    let names: Vec<Value> = table.column("name").unwrap().values().collect();
    assert_eq!(
        names,
        vec![
            Value::from("a"),
            Value::from("b"),
            Value::from("a"),
            Value::from("c")
        ]
    );
    assert_eq!(table.get(3, "value").unwrap(), Value::Float(3.0));
}

#[test]
fn test_union_of_glance_columns() {
    let first = OptimizeResult::new(array![1.0])
        .with_status(true, 0, "ok")
        .with_fun(Fun::Scalar(0.25));
    let second = least_squares_fit(array![1.0], array![0.1, 0.2]);
    let fits = FitTree::leaves([first, second]);

    let table = glance(&fits, &Options::new()).unwrap();
    assert_eq!(table.num_rows(), 2);
    for column in ["success", "status", "message", "fun", "cost", "optimality", "nfev", "njev"] {
        assert!(table.contains(column), "missing column {}", column);
    }
    assert_eq!(table.get(0, "cost").unwrap(), Value::Missing);
    assert_eq!(table.get(1, "fun").unwrap(), Value::Missing);
    assert_eq!(table.get(0, "fun").unwrap(), Value::Float(0.25));
}

#[test]
fn test_mixed_variants() {
    let fits = FitTree::mapping([
        ("lmfit", FitTree::leaf(minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]))),
        ("ols", FitTree::leaf(line_regression())),
    ]);

    // both name their parameters, and both tidy tables share name/value
    let table = tidy(&fits, &Options::new().var_names(["source"])).unwrap();
    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.get(0, "p_value").unwrap(), Value::Missing);
    assert_eq!(table.get(1, "vary").unwrap(), Value::Missing);
    assert_eq!(table.get(2, "source").unwrap(), Value::from("ols"));
}

#[test]
fn test_incompatible_column_kinds() {
    // shared columns of the same kind combine across variants
    let first = minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]);
    let mut second = OptimizeResult::new(array![1.0]);
    second.message = Some("done".to_string());
    second.success = Some(true);

    let fits = FitTree::sequence([FitTree::leaf(first), FitTree::leaf(second)]);
    assert!(glance(&fits, &Options::new()).is_ok());

    let bad = FitTree::sequence([
        FitTree::leaf(minimizer_fit(&[("a", 1.0)], array![0.1, 0.2])),
        FitTree::leaf(minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]).with_kw("x", "text")),
        FitTree::leaf(minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]).with_kw("x", true)),
    ]);
    assert!(matches!(
        glance(&bad, &Options::new()),
        Err(BroomError::ColumnTypeMismatch { .. })
    ));
}

#[test]
fn test_missing_keyword_joins_text_keyword() {
    let fits = FitTree::leaves([
        minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]).with_kw("loss", Value::Missing),
        minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]).with_kw("loss", "soft_l1"),
        minimizer_fit(&[("a", 1.0)], array![0.1, 0.2]).with_kw("loss", Value::Missing),
    ]);

    let table = glance(&fits, &Options::new()).unwrap();
    assert_eq!(table.num_rows(), 3);
    let loss = table.column("leastsq_loss").unwrap();
    assert_eq!(loss.kind(), ColumnKind::Str);
    let values: Vec<Value> = loss.values().collect();
    assert_eq!(
        values,
        vec![Value::Missing, Value::from("soft_l1"), Value::Missing]
    );
}
