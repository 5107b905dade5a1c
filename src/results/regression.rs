//! Ordinary least-squares regression results.

use super::{check_len, FitResult};
use crate::error::{BroomError, Result};
use crate::table::{Column, ColumnData, Table, Value};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the constant regressor, which `augment` leaves out of its output.
const INTERCEPT: &str = "Intercept";

/// Result of an ordinary least-squares regression, laid out like statsmodels'
/// `RegressionResults`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OlsResult {
    /// Estimated coefficients, one per column of `exog`
    pub params: Array1<f64>,

    /// Standard errors of the coefficients
    pub bse: Option<Array1<f64>>,

    /// t statistics of the coefficients
    pub tvalues: Option<Array1<f64>>,

    /// Two-sided p-values of the t statistics
    pub pvalues: Option<Array1<f64>>,

    /// Design matrix, one row per observation
    pub exog: Array2<f64>,

    /// Column names of the design matrix
    pub exog_names: Vec<String>,

    /// Response variable
    pub endog: Array1<f64>,

    /// Name of the response variable
    pub endog_name: String,

    /// Fitted values
    pub fittedvalues: Array1<f64>,

    /// Residuals
    pub resid: Array1<f64>,

    pub rsquared: f64,
    pub rsquared_adj: f64,

    /// F statistic of the regression and its p-value
    pub fvalue: f64,
    pub f_pvalue: f64,

    /// Model and residual degrees of freedom
    pub df_model: f64,
    pub df_resid: f64,

    pub aic: f64,
    pub bic: f64,
}

impl OlsResult {
    fn nobs(&self) -> usize {
        self.endog.len()
    }

    fn check_shapes(&self) -> Result<()> {
        let n = self.nobs();
        if self.exog.nrows() != n {
            return Err(BroomError::DimensionMismatch(format!(
                "expected {} rows in 'exog', got {}",
                n,
                self.exog.nrows()
            )));
        }
        if self.exog.ncols() != self.exog_names.len() {
            return Err(BroomError::DimensionMismatch(format!(
                "'exog' has {} columns but {} names",
                self.exog.ncols(),
                self.exog_names.len()
            )));
        }
        check_len("fittedvalues", &self.fittedvalues, n)?;
        check_len("resid", &self.resid, n)
    }
}

impl FitResult for OlsResult {
    fn variant_name(&self) -> &'static str {
        "OlsResult"
    }

    fn glance(&self) -> Result<Table> {
        Table::from_row([
            ("r_squared", Value::Float(self.rsquared)),
            ("adj_r_squared", Value::Float(self.rsquared_adj)),
            ("statistic", Value::Float(self.fvalue)),
            ("p_value", Value::Float(self.f_pvalue)),
            ("df", Value::Float(self.df_model)),
            ("df_residual", Value::Float(self.df_resid)),
            ("aic", Value::Float(self.aic)),
            ("bic", Value::Float(self.bic)),
        ])
    }

    fn tidy(&self, _param_names: Option<&[String]>) -> Result<Table> {
        let k = self.exog_names.len();
        check_len("params", &self.params, k)?;

        let mut table = Table::new()
            .with_column(Column::str("name", self.exog_names.iter().map(String::as_str)))?
            .with_column(Column::float("value", self.params.iter().copied()))?;
        for (column, values) in [
            ("stderr", &self.bse),
            ("statistic", &self.tvalues),
            ("p_value", &self.pvalues),
        ] {
            if let Some(values) = values {
                check_len(column, values, k)?;
                table.push_column(Column::float(column, values.iter().copied()))?;
            }
        }
        Ok(table)
    }

    fn augment(&self) -> Result<Table> {
        self.check_shapes()?;
        let n = self.nobs();

        let mut table = Table::new()
            .with_column(Column::index("index", n))?
            .with_column(Column::float(self.endog_name.as_str(), self.endog.iter().copied()))?;
        for (name, column) in self.exog_names.iter().zip(self.exog.columns()) {
            if name == INTERCEPT {
                continue;
            }
            table.push_column(Column::float(name.as_str(), column.iter().copied()))?;
        }
        // underscored so they stay distinct from regressor names
        table.push_column(Column::float("_fitted", self.fittedvalues.iter().copied()))?;
        table.push_column(Column::new("_se_fit", ColumnData::Float(vec![None; n])))?;
        table.push_column(Column::float("_resid", self.resid.iter().copied()))?;
        Ok(table)
    }
}

impl fmt::Display for OlsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OLS Regression Result ({}):", self.endog_name)?;
        writeln!(f, "  Observations: {}", self.nobs())?;
        writeln!(f, "  R-squared: {:.4}", self.rsquared)?;
        writeln!(f, "  F-statistic: {:.4e} (p = {:.4e})", self.fvalue, self.f_pvalue)?;
        for (name, value) in self.exog_names.iter().zip(self.params.iter()) {
            writeln!(f, "  {}: {:.6}", name, value)?;
        }
        Ok(())
    }
}
