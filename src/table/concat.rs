//! Row-wise concatenation over the union of columns.

use super::{Column, ColumnData, ColumnKind, Table};
use crate::error::{BroomError, Result};
use std::collections::HashMap;

/// Concatenate tables row-wise.
///
/// The output holds the union of all input columns, ordered by first
/// appearance. Rows coming from a table that lacks a column are missing in that
/// column. Rows keep their input order.
///
/// Same-named columns must agree on kind, except that integer and float columns
/// combine into a float column, and text or integer columns join categorical
/// columns as categories. A column whose cells are all missing takes the kind
/// of the others. Any other combination fails with
/// [`BroomError::ColumnTypeMismatch`].
pub fn concat<I: IntoIterator<Item = Table>>(tables: I) -> Result<Table> {
    let tables: Vec<Table> = tables.into_iter().collect();

    // (name, kind, kind seen on a column with at least one value)
    let mut order: Vec<(String, ColumnKind, bool)> = Vec::new();
    for table in &tables {
        for column in table.columns() {
            let has_values = column.data().null_count() < column.len();
            match order.iter_mut().find(|(name, ..)| name == column.name()) {
                Some(_) if !has_values => {}
                Some((_, kind, settled @ false)) => {
                    *kind = column.kind();
                    *settled = true;
                }
                Some((name, kind, true)) => *kind = merge_kind(name, *kind, column.kind())?,
                None => order.push((column.name().to_string(), column.kind(), has_values)),
            }
        }
    }

    let total: usize = tables.iter().map(Table::num_rows).sum();
    let mut out = Table {
        columns: Vec::new(),
        nrows: total,
    };
    for (name, kind, _) in order {
        let mut builder = ColumnBuilder::new(kind);
        for table in &tables {
            match table.column(&name) {
                Some(column) => builder.append(column.data()),
                None => builder.append_missing(table.num_rows()),
            }
        }
        out.push_column(Column::new(name, builder.finish()))?;
    }
    Ok(out)
}

fn merge_kind(name: &str, a: ColumnKind, b: ColumnKind) -> Result<ColumnKind> {
    use ColumnKind::*;
    match (a, b) {
        (a, b) if a == b => Ok(a),
        (Int, Float) | (Float, Int) => Ok(Float),
        (Str | Int, Categorical) | (Categorical, Str | Int) => Ok(Categorical),
        (a, b) => Err(BroomError::ColumnTypeMismatch {
            name: name.to_string(),
            detail: format!("cannot combine {} and {} columns", a, b),
        }),
    }
}

/// Accumulates cells of one output column.
enum ColumnBuilder {
    Float(Vec<Option<f64>>),
    Int(Vec<Option<i64>>),
    Bool(Vec<Option<bool>>),
    Str(Vec<Option<String>>),
    Categorical {
        categories: Vec<String>,
        lookup: HashMap<String, usize>,
        codes: Vec<Option<usize>>,
    },
}

impl ColumnBuilder {
    fn new(kind: ColumnKind) -> Self {
        match kind {
            ColumnKind::Float => ColumnBuilder::Float(Vec::new()),
            ColumnKind::Int => ColumnBuilder::Int(Vec::new()),
            ColumnKind::Bool => ColumnBuilder::Bool(Vec::new()),
            ColumnKind::Str => ColumnBuilder::Str(Vec::new()),
            ColumnKind::Categorical => ColumnBuilder::Categorical {
                categories: Vec::new(),
                lookup: HashMap::new(),
                codes: Vec::new(),
            },
        }
    }

    fn append_missing(&mut self, n: usize) {
        match self {
            ColumnBuilder::Float(v) => v.extend(std::iter::repeat(None).take(n)),
            ColumnBuilder::Int(v) => v.extend(std::iter::repeat(None).take(n)),
            ColumnBuilder::Bool(v) => v.extend(std::iter::repeat(None).take(n)),
            ColumnBuilder::Str(v) => v.extend(std::iter::repeat(None).take(n)),
            ColumnBuilder::Categorical { codes, .. } => {
                codes.extend(std::iter::repeat(None).take(n))
            }
        }
    }

    // Kinds were reconciled by `merge_kind`, so only the promotions it allows
    // and all-missing columns can reach the conversion arms.
    fn append(&mut self, data: &ColumnData) {
        match (self, data) {
            (ColumnBuilder::Float(out), ColumnData::Float(v)) => out.extend_from_slice(v),
            (ColumnBuilder::Float(out), ColumnData::Int(v)) => {
                out.extend(v.iter().map(|c| c.map(|i| i as f64)))
            }
            (ColumnBuilder::Int(out), ColumnData::Int(v)) => out.extend_from_slice(v),
            (ColumnBuilder::Bool(out), ColumnData::Bool(v)) => out.extend_from_slice(v),
            (ColumnBuilder::Str(out), ColumnData::Str(v)) => out.extend_from_slice(v),
            (
                ColumnBuilder::Categorical {
                    categories,
                    lookup,
                    codes,
                },
                data,
            ) => {
                for i in 0..data.len() {
                    let label = data
                        .get(i)
                        .filter(|v| !v.is_missing())
                        .map(|v| v.to_string());
                    codes.push(label.map(|label| {
                        *lookup.entry(label.clone()).or_insert_with(|| {
                            categories.push(label);
                            categories.len() - 1
                        })
                    }));
                }
            }
            (builder, data) => builder.append_missing(data.len()),
        }
    }

    fn finish(self) -> ColumnData {
        match self {
            ColumnBuilder::Float(v) => ColumnData::Float(v),
            ColumnBuilder::Int(v) => ColumnData::Int(v),
            ColumnBuilder::Bool(v) => ColumnData::Bool(v),
            ColumnBuilder::Str(v) => ColumnData::Str(v),
            ColumnBuilder::Categorical {
                categories, codes, ..
            } => ColumnData::Categorical { categories, codes },
        }
    }
}
