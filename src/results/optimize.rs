//! Results that carry raw arrays instead of named parameters.
//!
//! [`OptimizeResult`] mirrors scipy's `OptimizeResult`: the solution is a plain
//! array, and which of the remaining attributes are present depends on the
//! routine that produced it (`minimize`, `least_squares`, ...).

use super::{check_len, FitResult};
use crate::error::{BroomError, Result};
use crate::table::{Column, ColumnData, Table, Value};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Objective value at the solution: a scalar for minimizers, the residual
/// vector for least-squares routines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Fun {
    Scalar(f64),
    Array(Array1<f64>),
}

impl Fun {
    /// The objective as a scalar, when it holds exactly one value.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Fun::Scalar(v) => Some(*v),
            Fun::Array(a) if a.len() == 1 => Some(a[0]),
            Fun::Array(_) => None,
        }
    }
}

/// Result of an optimization routine that reports positional parameter values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizeResult {
    /// The solution, one value per parameter
    pub x: Array1<f64>,

    /// Whether the optimizer exited successfully
    pub success: Option<bool>,

    /// Termination status code of the optimizer
    pub status: Option<i64>,

    /// Description of the cause of termination
    pub message: Option<String>,

    /// Objective value (or residual vector) at the solution
    pub fun: Option<Fun>,

    /// Value of the cost function at the solution
    pub cost: Option<f64>,

    /// First-order optimality measure
    pub optimality: Option<f64>,

    /// Number of objective function evaluations
    pub nfev: Option<i64>,

    /// Number of Jacobian evaluations
    pub njev: Option<i64>,

    /// Number of iterations
    pub nit: Option<i64>,

    /// Gradient of the cost function at the solution
    pub grad: Option<Array1<f64>>,

    /// Which bounds are active at the solution (0 = none, -1 = lower, 1 = upper)
    pub active_mask: Option<Array1<i64>>,
}

impl OptimizeResult {
    /// Create a result holding only the solution array.
    pub fn new(x: Array1<f64>) -> Self {
        Self {
            x,
            ..Default::default()
        }
    }

    /// Set the exit flag, status code, and message.
    pub fn with_status(mut self, success: bool, status: i64, message: &str) -> Self {
        self.success = Some(success);
        self.status = Some(status);
        self.message = Some(message.to_string());
        self
    }

    pub fn with_fun(mut self, fun: Fun) -> Self {
        self.fun = Some(fun);
        self
    }

    /// Attach the fields a least-squares routine reports: the residual vector,
    /// the cost `0.5 * sum(fun^2)`, and the gradient.
    pub fn with_least_squares(mut self, residual: Array1<f64>, grad: Array1<f64>) -> Self {
        self.cost = Some(0.5 * residual.iter().map(|r| r * r).sum::<f64>());
        self.optimality = Some(grad.iter().fold(0.0f64, |acc, g| acc.max(g.abs())));
        self.fun = Some(Fun::Array(residual));
        self.grad = Some(grad);
        self
    }

    pub fn with_evaluations(mut self, nfev: i64, njev: Option<i64>, nit: Option<i64>) -> Self {
        self.nfev = Some(nfev);
        self.njev = njev;
        self.nit = nit;
        self
    }
}

impl FitResult for OptimizeResult {
    fn variant_name(&self) -> &'static str {
        "OptimizeResult"
    }

    fn names_parameters(&self) -> bool {
        false
    }

    fn glance(&self) -> Result<Table> {
        let candidates: [(&str, Value); 8] = [
            ("success", self.success.into()),
            ("cost", self.cost.into()),
            ("optimality", self.optimality.into()),
            ("nfev", self.nfev.into()),
            ("njev", self.njev.into()),
            ("nit", self.nit.into()),
            ("status", self.status.into()),
            ("message", self.message.clone().into()),
        ];
        let mut cells: Vec<(&str, Value)> = candidates
            .into_iter()
            .filter(|(_, value)| !value.is_missing())
            .collect();
        if let Some(fun) = self.fun.as_ref().and_then(Fun::as_scalar) {
            cells.push(("fun", Value::Float(fun)));
        }
        Table::from_row(cells)
    }

    fn tidy(&self, param_names: Option<&[String]>) -> Result<Table> {
        let names = param_names.ok_or_else(|| {
            BroomError::missing(
                "tidy",
                self.variant_name(),
                "no parameters available (pass `param_names`)",
            )
        })?;
        if names.len() != self.x.len() {
            return Err(BroomError::InvalidInput(format!(
                "{} parameter names given for {} fitted values",
                names.len(),
                self.x.len()
            )));
        }

        let mut table = Table::new()
            .with_column(Column::str("name", names.iter().map(String::as_str)))?
            .with_column(Column::float("value", self.x.iter().copied()))?;
        if let Some(grad) = &self.grad {
            check_len("grad", grad, self.x.len())?;
            table.push_column(Column::float("grad", grad.iter().copied()))?;
        }
        if let Some(mask) = &self.active_mask {
            if mask.len() != self.x.len() {
                return Err(BroomError::DimensionMismatch(format!(
                    "expected {} values in 'active_mask', got {}",
                    self.x.len(),
                    mask.len()
                )));
            }
            table.push_column(Column::new(
                "active_mask",
                ColumnData::Int(mask.iter().map(|&m| Some(m)).collect()),
            ))?;
        }
        Ok(table)
    }

    fn augment(&self) -> Result<Table> {
        match &self.fun {
            Some(Fun::Array(residual)) if residual.len() > 1 => Table::new()
                .with_column(Column::index("index", residual.len()))?
                .with_column(Column::float("residual", residual.iter().copied())),
            _ => Err(BroomError::missing(
                "augment",
                self.variant_name(),
                "no per-observation data available",
            )),
        }
    }
}

impl fmt::Display for OptimizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimize Result:")?;
        if let Some(success) = self.success {
            writeln!(f, "  Success: {}", success)?;
        }
        if let Some(message) = &self.message {
            writeln!(f, "  Message: {}", message)?;
        }
        if let Some(cost) = self.cost {
            writeln!(f, "  Cost: {:.6e}", cost)?;
        }
        if let Some(nfev) = self.nfev {
            writeln!(f, "  Function evaluations: {}", nfev)?;
        }
        writeln!(f, "  x: {}", self.x)?;
        Ok(())
    }
}
