//! Conversion between parameter tables and plain name-to-value maps.
//!
//! [`table_to_dict`] turns the `tidy` rows of one fit into a map that can be
//! fed back into ordinary function calls; [`dict_to_table`] goes the other way.
//!
//! ```
//! use fitbroom_rs::dict::{dict_to_table, table_to_dict, DictOptions};
//! use std::collections::HashMap;
//!
//! let values = HashMap::from([("center".to_string(), 0.5), ("sigma".to_string(), 1.2)]);
//! let table = dict_to_table(values.clone()).unwrap();
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(table_to_dict(&table, &DictOptions::default()).unwrap(), values);
//! ```

use crate::error::{BroomError, Result};
use crate::table::{Column, ColumnData, ColumnKind, Table, Value};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// Parameter-table columns other than name and value; left missing by
/// [`dict_to_table`].
const RECORD_COLUMNS: [(&str, ColumnKind); 5] = [
    ("stderr", ColumnKind::Float),
    ("init_value", ColumnKind::Float),
    ("min", ColumnKind::Float),
    ("max", ColumnKind::Float),
    ("vary", ColumnKind::Bool),
];

/// Column names and exclusions used by the conversions.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DictOptions {
    /// Column holding the keys. Default: "name"
    pub key: String,

    /// Column holding the values. Default: "value"
    pub value: String,

    /// Keys left out of the conversion. Default: empty
    pub keys_exclude: HashSet<String>,
}

impl Default for DictOptions {
    fn default() -> Self {
        Self {
            key: "name".to_string(),
            value: "value".to_string(),
            keys_exclude: HashSet::new(),
        }
    }
}

impl DictOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, column: &str) -> Self {
        self.key = column.to_string();
        self
    }

    pub fn value(mut self, column: &str) -> Self {
        self.value = column.to_string();
        self
    }

    pub fn exclude<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys_exclude.extend(keys.into_iter().map(Into::into));
        self
    }
}

/// Map each row's key to its value.
///
/// `table` should hold the parameters of a single fit; filter a flattened
/// table first (see [`Table::filter_eq`]).
///
/// # Errors
///
/// - [`BroomError::ColumnNotFound`] if the key or value column is absent
/// - [`BroomError::ColumnTypeMismatch`] if the value column is not numeric
/// - [`BroomError::InvalidInput`] for a missing key or value cell
/// - [`BroomError::NameConflict`] if a key that is not excluded appears twice
pub fn table_to_dict(table: &Table, options: &DictOptions) -> Result<HashMap<String, f64>> {
    let keys = table.try_column(&options.key)?;
    let values = table.try_column(&options.value)?;
    if !matches!(values.kind(), ColumnKind::Float | ColumnKind::Int) {
        return Err(BroomError::ColumnTypeMismatch {
            name: options.value.clone(),
            detail: format!("expected numeric values, found {} column", values.kind()),
        });
    }

    let mut dict = HashMap::with_capacity(table.num_rows());
    for (row, (key, value)) in keys.values().zip(values.values()).enumerate() {
        let key = match key {
            Value::Missing => {
                return Err(BroomError::InvalidInput(format!(
                    "missing key in column '{}' at row {}",
                    options.key, row
                )))
            }
            other => other.to_string(),
        };
        if options.keys_exclude.contains(&key) {
            continue;
        }
        let value = value.as_f64().ok_or_else(|| {
            BroomError::InvalidInput(format!("missing value for '{}' at row {}", key, row))
        })?;
        if dict.insert(key.clone(), value).is_some() {
            return Err(BroomError::NameConflict(key));
        }
    }
    Ok(dict)
}

/// Build a parameter table from `(name, value)` pairs, with the default
/// column names.
///
/// Rows are sorted by name. Columns are `name`, `value`, then the remaining
/// parameter-table columns (`stderr`, `init_value`, `min`, `max`, `vary`), all
/// missing.
pub fn dict_to_table<I, K>(values: I) -> Result<Table>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    dict_to_table_with(values, &DictOptions::default())
}

/// [`dict_to_table`] with custom column names; keys in
/// `options.keys_exclude` are skipped.
///
/// # Errors
///
/// [`BroomError::NameConflict`] when a name is given twice, and
/// [`BroomError::DuplicateColumn`] when the key and value columns share a name.
pub fn dict_to_table_with<I, K>(values: I, options: &DictOptions) -> Result<Table>
where
    I: IntoIterator<Item = (K, f64)>,
    K: Into<String>,
{
    let mut pairs: Vec<(String, f64)> = values
        .into_iter()
        .map(|(k, v)| (k.into(), v))
        .filter(|(k, _)| !options.keys_exclude.contains(k))
        .collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    if let Some(pair) = pairs.windows(2).find(|w| w[0].0 == w[1].0) {
        return Err(BroomError::NameConflict(pair[0].0.clone()));
    }

    let n = pairs.len();
    let mut table = Table::new()
        .with_column(Column::str(
            options.key.as_str(),
            pairs.iter().map(|(k, _)| k.as_str()),
        ))?
        .with_column(Column::float(
            options.value.as_str(),
            pairs.iter().map(|(_, v)| *v),
        ))?;
    for (name, kind) in RECORD_COLUMNS {
        if !table.contains(name) {
            table.push_column(Column::new(name, ColumnData::missing(kind, n)))?;
        }
    }
    Ok(table)
}
