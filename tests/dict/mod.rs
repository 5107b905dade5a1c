//! Integration tests for converting between parameter tables and maps

use crate::test_helpers::{gaussian_fit, minimizer_fit};
use approx::assert_relative_eq;
use fitbroom_rs::dict::{dict_to_table_with, DictOptions};
use fitbroom_rs::{dict_to_table, table_to_dict, tidy, BroomError, FitTree, Options, Value};
use ndarray::array;
use std::collections::HashMap;

#[test]
fn test_round_trip() {
    let values: HashMap<String, f64> = [("amplitude", 2.5), ("center", -0.25), ("sigma", 0.8)]
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect();

    let table = dict_to_table(values.clone()).unwrap();
    assert_eq!(table.num_rows(), 3);
    let back = table_to_dict(&table, &DictOptions::default()).unwrap();
    assert_eq!(back, values);
}

#[test]
fn test_tidy_rows_to_function_arguments() {
    let fit = gaussian_fit(4, 20, 0.3);
    let table = tidy(&FitTree::leaf(fit), &Options::new()).unwrap();

    let values = table_to_dict(&table, &DictOptions::new().exclude(["sigma"])).unwrap();
    assert_eq!(values.len(), 2);
    assert_relative_eq!(values["center"], 0.3);
    assert_relative_eq!(values["amplitude"], 2.0);
}

#[test]
fn test_flattened_table_needs_filtering() {
    let fits = FitTree::leaf_map([
        ("a", minimizer_fit(&[("k", 1.0)], array![0.1, 0.2])),
        ("b", minimizer_fit(&[("k", 2.0)], array![0.1, 0.2])),
    ]);
    let table = tidy(&fits, &Options::new().var_names(["run"])).unwrap();

    assert!(matches!(
        table_to_dict(&table, &DictOptions::default()),
        Err(BroomError::NameConflict(name)) if name == "k"
    ));

    let run_b = table.filter_eq("run", &Value::from("b")).unwrap();
    let values = table_to_dict(&run_b, &DictOptions::default()).unwrap();
    assert_relative_eq!(values["k"], 2.0);
}

#[test]
fn test_custom_column_names() {
    let options = DictOptions::new().key("param").value("estimate").exclude(["offset"]);
    let table = dict_to_table_with([("slope", 1.5), ("offset", 0.2)], &options).unwrap();

    assert_eq!(table.num_rows(), 1);
    assert_eq!(table.get(0, "param").unwrap(), Value::from("slope"));
    assert_eq!(table.get(0, "stderr").unwrap(), Value::Missing);
}
