//! Integration tests for leaf recognition

use crate::test_helpers::{gaussian_fit, least_squares_fit};
use fitbroom_rs::dispatch::Variant;
use fitbroom_rs::results::FitResult;
use fitbroom_rs::table::{Column, Table, Value};
use fitbroom_rs::{augment, glance, tidy, BroomError, Dispatcher, FitTree, Options};
use ndarray::array;

/// Result of a one-dimensional grid scan, unknown to the default dispatcher.
struct GridScan {
    best: f64,
    grid: Vec<f64>,
    scores: Vec<f64>,
}

impl FitResult for GridScan {
    fn variant_name(&self) -> &'static str {
        "GridScan"
    }

    fn glance(&self) -> fitbroom_rs::Result<Table> {
        Table::from_row([
            ("best", Value::Float(self.best)),
            ("num_points", Value::from(self.grid.len())),
        ])
    }

    fn augment(&self) -> fitbroom_rs::Result<Table> {
        Table::new()
            .with_column(Column::index("index", self.grid.len()))?
            .with_column(Column::float("grid", self.grid.iter().copied()))?
            .with_column(Column::float("score", self.scores.iter().copied()))
    }
}

fn scan() -> GridScan {
    GridScan {
        best: 0.5,
        grid: vec![0.0, 0.5, 1.0],
        scores: vec![2.0, 0.1, 1.8],
    }
}

#[test]
fn test_plain_number_is_unsupported() {
    for result in [
        glance(&FitTree::leaf(3.0f64), &Options::new()),
        tidy(&FitTree::leaf(3.0f64), &Options::new()),
        augment(&FitTree::leaf(3.0f64), &Options::new()),
    ] {
        match result {
            Err(BroomError::UnsupportedType { type_name }) => assert_eq!(type_name, "f64"),
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
    }
}

#[test]
fn test_unsupported_leaf_inside_collection() {
    let fits = FitTree::mapping([
        ("good", FitTree::leaf(gaussian_fit(1, 10, 0.0))),
        ("bad", FitTree::leaf(String::from("not a fit"))),
    ]);
    let err = glance(&fits, &Options::new()).unwrap_err();
    assert!(err.to_string().contains("String"));
}

#[test]
fn test_registered_variant() {
    let tree = FitTree::leaves([scan(), scan()]);
    assert!(glance(&tree, &Options::new()).is_err());

    let mut dispatcher = Dispatcher::default();
    dispatcher.register(Variant::of::<GridScan>("GridScan"));

    let table = dispatcher.glance(&tree, &Options::new()).unwrap();
    assert_eq!(table.column_names(), vec!["best", "num_points", "var1"]);
    assert_eq!(table.get(1, "num_points").unwrap(), Value::Int(3));

    let table = dispatcher.augment(&tree, &Options::new()).unwrap();
    assert_eq!(table.num_rows(), 6);

    // no parameters: the default tidy declines
    assert!(matches!(
        dispatcher.tidy(&tree, &Options::new()),
        Err(BroomError::MissingCapability { .. })
    ));
}

#[test]
fn test_hint_restricts_tidy() {
    let tree = FitTree::leaf(least_squares_fit(array![1.0, 2.0], array![0.1, 0.2]));
    let options = Options::new().param_names(["x", "y"]);

    let table = tidy(&tree, &options.clone().hint("OptimizeResult")).unwrap();
    assert_eq!(table.num_rows(), 2);

    assert!(matches!(
        tidy(&tree, &options.clone().hint("OlsResult")),
        Err(BroomError::UnsupportedType { .. })
    ));
    assert!(matches!(
        tidy(&tree, &options.hint("NoSuchVariant")),
        Err(BroomError::UnsupportedType { .. })
    ));
}

#[test]
fn test_options_from_json() {
    let options = Options::from_json(r#"{"var_names": ["peak"], "param_names": ["x", "y"]}"#).unwrap();
    let tree = FitTree::leaves([least_squares_fit(array![1.0, 2.0], array![0.1, 0.2])]);
    let table = tidy(&tree, &options).unwrap();
    assert!(table.contains("peak"));
    assert_eq!(table.get(1, "name").unwrap(), Value::from("y"));
}
