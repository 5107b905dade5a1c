//! # Tidy Tables
//!
//! A small in-memory table with named, typed columns. Every cell is optional so
//! that values which do not apply to a row can be represented explicitly as
//! missing instead of being replaced with a default.
//!
//! ## Core Components
//!
//! - [`Table`]: an ordered set of uniquely named columns of equal length
//! - [`Column`] and [`ColumnData`]: one named column and its typed storage
//! - [`ColumnKind`]: the column-level type tag, including the unordered
//!   categorical kind used for mapping keys
//! - [`Value`]: a single cell, with [`Value::Missing`] as the missing marker
//!
//! ## Example Usage
//!
//! ```rust
//! use fitbroom_rs::table::{Column, Table, Value};
//!
//! let mut table = Table::new();
//! table.push_column(Column::str("name", ["a", "b"])).unwrap();
//! table.push_column(Column::float("value", [1.0, 2.5])).unwrap();
//!
//! assert_eq!(table.num_rows(), 2);
//! assert_eq!(table.get(1, "value").unwrap(), Value::Float(2.5));
//! ```

mod concat;
mod value;

pub use concat::concat;
pub use value::Value;

use crate::error::{BroomError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Type tag of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ColumnKind {
    /// 64-bit floating point values
    Float,
    /// Signed integers; sequence positions use this ordered numeric kind
    Int,
    /// Boolean flags
    Bool,
    /// Free-form text
    Str,
    /// Unordered categories; mapping keys use this kind
    Categorical,
}

impl ColumnKind {
    /// Whether values of this kind carry a meaningful order.
    ///
    /// Categorical columns hold labels whose order is an artifact of how they
    /// were collected, so comparisons between them are not meaningful.
    pub fn is_ordered(&self) -> bool {
        !matches!(self, ColumnKind::Categorical)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnKind::Float => "float",
            ColumnKind::Int => "int",
            ColumnKind::Bool => "bool",
            ColumnKind::Str => "str",
            ColumnKind::Categorical => "categorical",
        };
        f.write_str(name)
    }
}

/// Typed storage of one column. `None` cells are missing.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Float(Vec<Option<f64>>),
    Int(Vec<Option<i64>>),
    Bool(Vec<Option<bool>>),
    Str(Vec<Option<String>>),
    /// Codes index into `categories`.
    Categorical {
        categories: Vec<String>,
        codes: Vec<Option<usize>>,
    },
}

impl ColumnData {
    /// An all-missing column of the given kind.
    pub fn missing(kind: ColumnKind, len: usize) -> Self {
        match kind {
            ColumnKind::Float => ColumnData::Float(vec![None; len]),
            ColumnKind::Int => ColumnData::Int(vec![None; len]),
            ColumnKind::Bool => ColumnData::Bool(vec![None; len]),
            ColumnKind::Str => ColumnData::Str(vec![None; len]),
            ColumnKind::Categorical => ColumnData::Categorical {
                categories: Vec::new(),
                codes: vec![None; len],
            },
        }
    }

    /// Build categorical storage from labels, collecting categories in order of
    /// first appearance.
    pub fn categorical<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut categories: Vec<String> = Vec::new();
        let mut lookup: HashMap<String, usize> = HashMap::new();
        let codes = labels
            .into_iter()
            .map(|label| {
                label.map(|label| {
                    let label = label.into();
                    *lookup.entry(label.clone()).or_insert_with(|| {
                        categories.push(label);
                        categories.len() - 1
                    })
                })
            })
            .collect();
        ColumnData::Categorical { categories, codes }
    }

    /// Repeat one value `len` times in storage matching the value's kind.
    pub fn repeat(value: &Value, len: usize) -> Self {
        match value {
            Value::Missing => ColumnData::Float(vec![None; len]),
            Value::Float(v) => ColumnData::Float(vec![Some(*v); len]),
            Value::Int(v) => ColumnData::Int(vec![Some(*v); len]),
            Value::Bool(v) => ColumnData::Bool(vec![Some(*v); len]),
            Value::Str(v) => ColumnData::Str(vec![Some(v.clone()); len]),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.len(),
            ColumnData::Int(v) => v.len(),
            ColumnData::Bool(v) => v.len(),
            ColumnData::Str(v) => v.len(),
            ColumnData::Categorical { codes, .. } => codes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Float(_) => ColumnKind::Float,
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Bool(_) => ColumnKind::Bool,
            ColumnData::Str(_) => ColumnKind::Str,
            ColumnData::Categorical { .. } => ColumnKind::Categorical,
        }
    }

    /// Value of the cell at `row`, or `None` when `row` is out of range.
    pub fn get(&self, row: usize) -> Option<Value> {
        if row >= self.len() {
            return None;
        }
        let value = match self {
            ColumnData::Float(v) => v[row].map(Value::Float),
            ColumnData::Int(v) => v[row].map(Value::Int),
            ColumnData::Bool(v) => v[row].map(Value::Bool),
            ColumnData::Str(v) => v[row].clone().map(Value::Str),
            ColumnData::Categorical { categories, codes } => {
                codes[row].map(|code| Value::Str(categories[code].clone()))
            }
        };
        Some(value.unwrap_or(Value::Missing))
    }

    /// Number of missing cells.
    pub fn null_count(&self) -> usize {
        match self {
            ColumnData::Float(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Int(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Bool(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Str(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnData::Categorical { codes, .. } => codes.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Keep only the rows at `indices`, in that order.
    fn take(&self, indices: &[usize]) -> Self {
        match self {
            ColumnData::Float(v) => ColumnData::Float(indices.iter().map(|&i| v[i]).collect()),
            ColumnData::Int(v) => ColumnData::Int(indices.iter().map(|&i| v[i]).collect()),
            ColumnData::Bool(v) => ColumnData::Bool(indices.iter().map(|&i| v[i]).collect()),
            ColumnData::Str(v) => {
                ColumnData::Str(indices.iter().map(|&i| v[i].clone()).collect())
            }
            ColumnData::Categorical { categories, codes } => ColumnData::Categorical {
                categories: categories.clone(),
                codes: indices.iter().map(|&i| codes[i]).collect(),
            },
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// A float column without missing cells.
    pub fn float<I: IntoIterator<Item = f64>>(name: impl Into<String>, values: I) -> Self {
        Self::new(name, ColumnData::Float(values.into_iter().map(Some).collect()))
    }

    /// An integer column without missing cells.
    pub fn int<I: IntoIterator<Item = i64>>(name: impl Into<String>, values: I) -> Self {
        Self::new(name, ColumnData::Int(values.into_iter().map(Some).collect()))
    }

    /// A text column without missing cells.
    pub fn str<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            name,
            ColumnData::Str(values.into_iter().map(|s| Some(s.into())).collect()),
        )
    }

    /// The row index column `0..len`.
    pub fn index(name: impl Into<String>, len: usize) -> Self {
        Self::int(name, 0..len as i64)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn kind(&self) -> ColumnKind {
        self.data.kind()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the cells of the column.
    pub fn values(&self) -> impl Iterator<Item = Value> + '_ {
        (0..self.len()).map(move |i| self.data.get(i).unwrap_or(Value::Missing))
    }
}

/// A table of equal-length, uniquely named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    nrows: usize,
}

impl Table {
    /// Create an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a single-row table from `(name, value)` cells, in order.
    ///
    /// The kind of each column follows the kind of its value; a missing value
    /// yields a float column holding one missing cell. Without cells the result
    /// is one row with no columns.
    pub fn from_row<I, S>(cells: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Value)>,
        S: Into<String>,
    {
        let mut table = Table {
            columns: Vec::new(),
            nrows: 1,
        };
        for (name, value) in cells {
            table.push_column(Column::new(name, ColumnData::repeat(&value, 1)))?;
        }
        Ok(table)
    }

    /// Append a column.
    ///
    /// Fails when the name is already taken or when the column length differs
    /// from the current number of rows.
    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.contains(column.name()) {
            return Err(BroomError::DuplicateColumn(column.name().to_string()));
        }
        if self.columns.is_empty() && self.nrows == 0 {
            self.nrows = column.len();
        } else if column.len() != self.nrows {
            return Err(BroomError::DimensionMismatch(format!(
                "column '{}' has {} rows, table has {}",
                column.name(),
                column.len(),
                self.num_rows()
            )));
        }
        self.columns.push(column);
        Ok(())
    }

    /// Builder form of [`Table::push_column`].
    pub fn with_column(mut self, column: Column) -> Result<Self> {
        self.push_column(column)?;
        Ok(self)
    }

    /// Append `value` as a new column repeated over every row.
    pub fn push_constant(&mut self, name: &str, value: &Value) -> Result<()> {
        let column = Column::new(name, ColumnData::repeat(value, self.num_rows()));
        self.push_column(column)
    }

    pub fn num_rows(&self) -> usize {
        self.nrows
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.num_rows() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name() == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Look up a column, failing with [`BroomError::ColumnNotFound`].
    pub fn try_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| BroomError::ColumnNotFound(name.to_string()))
    }

    /// Value of one cell.
    pub fn get(&self, row: usize, name: &str) -> Result<Value> {
        let column = self.try_column(name)?;
        column.data().get(row).ok_or_else(|| {
            BroomError::InvalidInput(format!(
                "row {} out of range for table with {} rows",
                row,
                self.num_rows()
            ))
        })
    }

    /// All cells of one row as `(column name, value)` pairs.
    pub fn row(&self, row: usize) -> Option<Vec<(&str, Value)>> {
        if row >= self.num_rows() {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| (c.name(), c.data().get(row).unwrap_or(Value::Missing)))
                .collect(),
        )
    }

    /// Rows whose `name` cell equals `value`, in their original order.
    pub fn filter_eq(&self, name: &str, value: &Value) -> Result<Table> {
        let column = self.try_column(name)?;
        let indices: Vec<usize> = column
            .values()
            .enumerate()
            .filter(|(_, cell)| cell == value)
            .map(|(i, _)| i)
            .collect();
        Ok(Table {
            columns: self
                .columns
                .iter()
                .map(|c| Column::new(c.name(), c.data().take(&indices)))
                .collect(),
            nrows: indices.len(),
        })
    }

    /// Concatenate tables row-wise over the union of their columns.
    ///
    /// See [`concat`].
    pub fn concat<I: IntoIterator<Item = Table>>(tables: I) -> Result<Table> {
        concat(tables)
    }

    /// Convert to plain key-value records, one JSON object per row.
    ///
    /// Missing cells (and non-finite floats) become `null`.
    pub fn to_records(&self) -> serde_json::Value {
        let rows = (0..self.num_rows())
            .map(|i| {
                let record: serde_json::Map<String, serde_json::Value> = self
                    .columns
                    .iter()
                    .map(|c| {
                        let cell = c.data().get(i).unwrap_or(Value::Missing);
                        (c.name().to_string(), cell.to_json())
                    })
                    .collect();
                serde_json::Value::Object(record)
            })
            .collect();
        serde_json::Value::Array(rows)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| c.values().map(|v| v.to_string()).collect())
            .collect();
        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells
                    .iter()
                    .map(String::len)
                    .chain(std::iter::once(c.name().len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let index_width = self.num_rows().saturating_sub(1).to_string().len();
        write!(f, "{:>w$}", "", w = index_width)?;
        for (column, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>w$}", column.name(), w = width)?;
        }
        writeln!(f)?;
        for row in 0..self.num_rows() {
            write!(f, "{:>w$}", row, w = index_width)?;
            for (cells, width) in rendered.iter().zip(&widths) {
                write!(f, "  {:>w$}", cells[row], w = width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
