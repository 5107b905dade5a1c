//! Integration tests for the Parameters collection and its tidy rows

use fitbroom_rs::parameters::{Parameter, Parameters};
use fitbroom_rs::results::{FitResult, MinimizerResult};
use fitbroom_rs::Value;
use ndarray::array;

#[test]
fn test_parameters_basic_operations() {
    let mut params = Parameters::new();
    assert!(params.is_empty());

    params.add(Parameter::new("amplitude", 10.0)).unwrap();
    params.add_param("center", 5.0).unwrap();
    params
        .add_param_with_bounds("sigma", 2.0, 0.1, 10.0)
        .unwrap();
    params
        .add_param_with_expr("fwhm", 4.71, "2.3548*sigma")
        .unwrap();
    assert_eq!(params.len(), 4);

    // Names come back in insertion order
    assert_eq!(params.names(), vec!["amplitude", "center", "sigma", "fwhm"]);
    assert_eq!(params.varying().len(), 3);
    assert_eq!(params.fixed().len(), 1);

    // Duplicate names are rejected
    assert!(params.add_param("center", 1.0).is_err());

    let param = params.get_mut("center").unwrap();
    param.set_value(7.5).unwrap();
    assert_eq!(params.get("center").unwrap().value(), 7.5);
    assert_eq!(params.get("center").unwrap().init_value(), 5.0);

    let removed = params.remove("amplitude").unwrap();
    assert_eq!(removed.value(), 10.0);
    assert_eq!(params.names(), vec!["center", "sigma", "fwhm"]);
}

#[test]
fn test_derived_parameter_row() {
    let mut params = Parameters::new();
    params.add_param("sigma", 2.0).unwrap();
    params
        .add_param_with_expr("fwhm", 4.7096, "2.3548*sigma")
        .unwrap();
    params.get_mut("sigma").unwrap().set_stderr(Some(0.1));

    let result = MinimizerResult::from_residual("leastsq", params, array![0.1, 0.1, 0.1]);
    let table = result.tidy(None).unwrap();

    assert_eq!(table.get(1, "expr").unwrap(), Value::from("2.3548*sigma"));
    assert_eq!(table.get(1, "vary").unwrap(), Value::Bool(false));
    // derived parameters have no starting value
    assert_eq!(table.get(1, "init_value").unwrap(), Value::Missing);
    assert_eq!(table.get(0, "init_value").unwrap(), Value::Float(2.0));
    assert_eq!(table.get(0, "stderr").unwrap(), Value::Float(0.1));
    assert_eq!(table.get(1, "stderr").unwrap(), Value::Missing);
}

#[test]
fn test_parameters_json_round_trip() {
    let mut params = Parameters::new();
    params.add_param_with_bounds("k", 0.3, 0.0, f64::INFINITY).unwrap();
    params.add_param("offset", -1.0).unwrap();

    let json = params.to_json().unwrap();
    let restored = Parameters::from_json(&json).unwrap();
    assert_eq!(restored.names(), params.names());
    assert_eq!(restored.get("k").unwrap().max(), None);
    assert_eq!(restored.get("k").unwrap().min(), Some(0.0));
}
