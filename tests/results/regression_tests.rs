//! Integration tests for OlsResult

use crate::test_helpers::line_regression;
use fitbroom_rs::{augment, glance, tidy, FitTree, Options, Value};

#[test]
fn test_glance_columns() {
    let table = glance(&FitTree::leaf(line_regression()), &Options::new()).unwrap();
    assert_eq!(
        table.column_names(),
        vec![
            "r_squared",
            "adj_r_squared",
            "statistic",
            "p_value",
            "df",
            "df_residual",
            "aic",
            "bic"
        ]
    );
    assert_eq!(table.get(0, "df_residual").unwrap(), Value::Float(2.0));
}

#[test]
fn test_tidy_coefficients() {
    let table = tidy(&FitTree::leaf(line_regression()), &Options::new()).unwrap();
    assert_eq!(
        table.column_names(),
        vec!["name", "value", "stderr", "statistic", "p_value"]
    );
    assert_eq!(table.get(0, "name").unwrap(), Value::from("Intercept"));
    assert_eq!(table.get(1, "statistic").unwrap(), Value::Float(100.0));
}

#[test]
fn test_augment_observations() {
    let table = augment(&FitTree::leaf(line_regression()), &Options::new()).unwrap();
    assert_eq!(table.num_rows(), 4);
    assert_eq!(
        table.column_names(),
        vec!["index", "y", "x", "_fitted", "_se_fit", "_resid"]
    );
    assert_eq!(table.get(1, "y").unwrap(), Value::Float(2.9));
    assert_eq!(table.get(1, "_fitted").unwrap(), Value::Float(3.0));
    assert_eq!(table.get(1, "_se_fit").unwrap(), Value::Missing);
}

#[test]
fn test_augment_regressor_named_like_model_column() {
    let mut result = line_regression();
    result.exog_names = vec!["Intercept".to_string(), "resid".to_string()];

    let table = augment(&FitTree::leaf(result), &Options::new()).unwrap();
    assert_eq!(
        table.column_names(),
        vec!["index", "y", "resid", "_fitted", "_se_fit", "_resid"]
    );
    assert_eq!(table.get(3, "resid").unwrap(), Value::Float(3.0));
    assert_eq!(table.get(0, "_resid").unwrap(), Value::Float(0.1));
}
