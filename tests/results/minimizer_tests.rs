//! Integration tests for MinimizerResult and ModelResult

use crate::test_helpers::{gaussian, gaussian_fit, minimizer_fit};
use approx::assert_relative_eq;
use fitbroom_rs::results::{Component, FitResult};
use fitbroom_rs::{augment, glance, tidy, FitTree, Options, Value};
use ndarray::array;

#[test]
fn test_glance_single_row() {
    let fit = gaussian_fit(7, 41, 0.0);
    let table = glance(&FitTree::leaf(fit.clone()), &Options::new()).unwrap();

    assert_eq!(table.num_rows(), 1);
    assert_eq!(
        table.column_names(),
        vec![
            "model",
            "method",
            "num_params",
            "num_data_points",
            "chisqr",
            "redchi",
            "AIC",
            "BIC",
            "num_func_eval",
            "success",
            "message"
        ]
    );
    assert_eq!(table.get(0, "model").unwrap(), Value::from("gaussian"));
    assert_eq!(table.get(0, "num_params").unwrap(), Value::Int(3));
    assert_eq!(table.get(0, "num_data_points").unwrap(), Value::Int(41));
    assert_eq!(table.get(0, "num_func_eval").unwrap(), Value::Int(27));

    let chisqr = table.get(0, "chisqr").unwrap().as_f64().unwrap();
    assert_relative_eq!(chisqr, fit.fit.chisqr);
    let redchi = table.get(0, "redchi").unwrap().as_f64().unwrap();
    assert_relative_eq!(redchi, chisqr / 38.0, epsilon = 1e-12);
}

#[test]
fn test_method_keywords_become_columns() {
    let fit = minimizer_fit(&[("a", 1.0)], array![0.1, 0.2])
        .with_kw("xtol", 1e-8)
        .with_kw("max_nfev", 200i64);
    let table = fit.glance().unwrap();

    let names = table.column_names();
    assert_eq!(names[names.len() - 2..], ["leastsq_xtol", "leastsq_max_nfev"]);
    assert_eq!(table.get(0, "leastsq_max_nfev").unwrap(), Value::Int(200));
}

#[test]
fn test_tidy_parameter_order() {
    let table = tidy(&FitTree::leaf(gaussian_fit(7, 41, 0.5)), &Options::new()).unwrap();

    assert_eq!(
        table.column_names(),
        vec!["name", "value", "min", "max", "vary", "expr", "stderr", "init_value"]
    );
    let names: Vec<Value> = table.column("name").unwrap().values().collect();
    assert_eq!(
        names,
        vec![
            Value::from("amplitude"),
            Value::from("center"),
            Value::from("sigma")
        ]
    );
    assert_eq!(table.get(1, "value").unwrap(), Value::Float(0.5));
    assert_eq!(table.get(2, "min").unwrap(), Value::Float(0.0));
    // infinite bounds are reported as missing
    assert_eq!(table.get(2, "max").unwrap(), Value::Missing);
    assert_eq!(table.get(0, "min").unwrap(), Value::Missing);
    assert_eq!(table.get(0, "expr").unwrap(), Value::Missing);
    assert_eq!(table.get(0, "vary").unwrap(), Value::Bool(true));
}

#[test]
fn test_augment_rows_and_residual() {
    let fit = gaussian_fit(11, 25, 0.0);
    let table = augment(&FitTree::leaf(fit.clone()), &Options::new()).unwrap();

    assert_eq!(table.num_rows(), 25);
    assert_eq!(
        table.column_names(),
        vec!["index", "x", "data", "best_fit", "residual"]
    );
    let index: Vec<Value> = table.column("index").unwrap().values().collect();
    assert_eq!(index, (0..25).map(Value::Int).collect::<Vec<_>>());

    for row in 0..25 {
        let data = table.get(row, "data").unwrap().as_f64().unwrap();
        let best_fit = table.get(row, "best_fit").unwrap().as_f64().unwrap();
        let residual = table.get(row, "residual").unwrap().as_f64().unwrap();
        assert_relative_eq!(residual, data - best_fit, epsilon = 1e-12);
    }
}

#[test]
fn test_augment_composite_components() {
    let fit = gaussian_fit(3, 15, 0.0);
    let x = fit.x.clone();
    let half = gaussian(&x, 1.0, 0.0, 1.0);

    let single = fit
        .clone()
        .with_components(vec![Component::new("peak", half.clone())]);
    assert_eq!(single.augment().unwrap().num_columns(), 5);

    let composite = fit.with_components(vec![
        Component::new("peak_a", half.clone()),
        Component::new("peak_b", half),
    ]);
    let table = composite.augment().unwrap();
    assert_eq!(table.num_columns(), 7);
    assert!(table.contains("peak_a"));
    assert!(table.contains("peak_b"));
}

#[test]
fn test_augment_requires_residual() {
    let mut fit = minimizer_fit(&[("a", 1.0)], array![0.1, 0.2, 0.3]);
    assert_eq!(fit.augment().unwrap().num_rows(), 3);

    fit.residual = None;
    assert!(matches!(
        fit.augment(),
        Err(fitbroom_rs::BroomError::MissingCapability { .. })
    ));
}
