//! Results that carry named parameter objects.
//!
//! [`MinimizerResult`] describes a minimization over a [`Parameters`]
//! collection, the way lmfit-py's `MinimizerResult` does. [`ModelResult`] adds
//! the model name, the fitted data, and the model evaluated at the best-fit
//! parameters.

use super::{check_len, FitResult};
use crate::error::Result;
use crate::parameters::Parameters;
use crate::table::{Column, ColumnData, Table, Value};
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// Floor applied to chi-square before taking its logarithm.
const TINY_CHISQR: f64 = 1.0e-250;

/// Result of minimizing an objective over named parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimizerResult {
    /// Name of the minimization method (e.g. "leastsq")
    pub method: String,

    /// Best-fit parameters, in the order they were defined
    pub params: Parameters,

    /// Starting values of the parameters that were not derived from expressions
    pub init_values: HashMap<String, f64>,

    /// Number of varied parameters
    pub nvarys: usize,

    /// Number of data points
    pub ndata: usize,

    /// Number of objective function evaluations
    pub nfev: usize,

    /// Chi-square statistic
    pub chisqr: f64,

    /// Reduced chi-square statistic
    pub redchi: f64,

    /// Akaike information criterion
    pub aic: f64,

    /// Bayesian information criterion
    pub bic: f64,

    /// Whether the minimization succeeded
    pub success: bool,

    /// A message describing the result
    pub message: String,

    /// Residual array at the solution
    pub residual: Option<Array1<f64>>,

    /// Keyword arguments that were passed to the minimization method
    pub kws: Vec<(String, Value)>,
}

impl MinimizerResult {
    /// Create a result from the best-fit parameters and the residual at the
    /// solution.
    ///
    /// Fit statistics are derived from the residual: `chisqr` is the sum of
    /// squared residuals, `redchi` divides it by the degrees of freedom, and
    /// `aic`/`bic` follow from the Gaussian log-likelihood.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::Parameters;
    /// use fitbroom_rs::results::MinimizerResult;
    /// use ndarray::array;
    ///
    /// let mut params = Parameters::new();
    /// params.add_param("slope", 2.0).unwrap();
    ///
    /// let result = MinimizerResult::from_residual("leastsq", params, array![0.1, -0.2, 0.1]);
    /// assert_eq!(result.ndata, 3);
    /// assert_eq!(result.nvarys, 1);
    /// assert!((result.chisqr - 0.06).abs() < 1e-12);
    /// ```
    pub fn from_residual(method: &str, params: Parameters, residual: Array1<f64>) -> Self {
        let init_values = params
            .iter()
            .filter(|p| p.expr().is_none())
            .map(|p| (p.name().to_string(), p.init_value()))
            .collect();
        let nvarys = params.varying().len();
        let ndata = residual.len();
        let chisqr = residual.iter().map(|r| r * r).sum::<f64>();
        let nfree = if ndata > nvarys { ndata - nvarys } else { 1 };

        let neg2_log_likel = ndata as f64 * (chisqr.max(TINY_CHISQR) / ndata as f64).ln();
        let aic = neg2_log_likel + 2.0 * nvarys as f64;
        let bic = neg2_log_likel + (ndata as f64).ln() * nvarys as f64;

        Self {
            method: method.to_string(),
            params,
            init_values,
            nvarys,
            ndata,
            nfev: 0,
            chisqr,
            redchi: chisqr / nfree as f64,
            aic,
            bic,
            success: true,
            message: String::new(),
            residual: Some(residual),
            kws: Vec::new(),
        }
    }

    /// Set the number of function evaluations.
    pub fn with_nfev(mut self, nfev: usize) -> Self {
        self.nfev = nfev;
        self
    }

    /// Set the convergence flag and message.
    pub fn with_status(mut self, success: bool, message: &str) -> Self {
        self.success = success;
        self.message = message.to_string();
        self
    }

    /// Record a keyword argument of the minimization method.
    pub fn with_kw(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.kws.push((name.to_string(), value.into()));
        self
    }

    fn summary_cells(&self) -> Vec<(String, Value)> {
        let mut cells: Vec<(String, Value)> = vec![
            ("method".into(), self.method.as_str().into()),
            ("num_params".into(), self.nvarys.into()),
            ("num_data_points".into(), self.ndata.into()),
            ("chisqr".into(), self.chisqr.into()),
            ("redchi".into(), self.redchi.into()),
            ("AIC".into(), self.aic.into()),
            ("BIC".into(), self.bic.into()),
            ("num_func_eval".into(), self.nfev.into()),
            ("success".into(), self.success.into()),
            ("message".into(), self.message.as_str().into()),
        ];
        cells.extend(
            self.kws
                .iter()
                .map(|(key, value)| (format!("{}_{}", self.method, key), value.clone())),
        );
        cells
    }

    fn parameter_table(&self) -> Result<Table> {
        let params: Vec<_> = self.params.iter().collect();
        Table::new()
            .with_column(Column::str("name", params.iter().map(|p| p.name())))?
            .with_column(Column::float("value", params.iter().map(|p| p.value())))?
            .with_column(Column::new(
                "min",
                ColumnData::Float(params.iter().map(|p| p.min()).collect()),
            ))?
            .with_column(Column::new(
                "max",
                ColumnData::Float(params.iter().map(|p| p.max()).collect()),
            ))?
            .with_column(Column::new(
                "vary",
                ColumnData::Bool(params.iter().map(|p| Some(p.vary())).collect()),
            ))?
            .with_column(Column::new(
                "expr",
                ColumnData::Str(params.iter().map(|p| p.expr().map(String::from)).collect()),
            ))?
            .with_column(Column::new(
                "stderr",
                ColumnData::Float(params.iter().map(|p| p.stderr()).collect()),
            ))?
            .with_column(Column::new(
                "init_value",
                ColumnData::Float(
                    params
                        .iter()
                        .map(|p| self.init_values.get(p.name()).copied())
                        .collect(),
                ),
            ))
    }
}

impl FitResult for MinimizerResult {
    fn variant_name(&self) -> &'static str {
        "MinimizerResult"
    }

    fn glance(&self) -> Result<Table> {
        Table::from_row(self.summary_cells())
    }

    fn tidy(&self, _param_names: Option<&[String]>) -> Result<Table> {
        self.parameter_table()
    }

    fn augment(&self) -> Result<Table> {
        match &self.residual {
            Some(residual) => Table::new()
                .with_column(Column::index("index", residual.len()))?
                .with_column(Column::float("residual", residual.iter().copied())),
            None => Err(crate::error::BroomError::missing(
                "augment",
                self.variant_name(),
                "no per-observation data available",
            )),
        }
    }
}

impl fmt::Display for MinimizerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Minimizer Result ({}):", self.method)?;
        writeln!(f, "  Success: {}", self.success)?;
        writeln!(f, "  Message: {}", self.message)?;
        writeln!(f, "  Data points: {}", self.ndata)?;
        writeln!(f, "  Varied parameters: {}", self.nvarys)?;
        writeln!(f, "  Chi-square: {:.6e}", self.chisqr)?;
        writeln!(f, "  Reduced chi-square: {:.6e}", self.redchi)?;
        writeln!(f, "  Function evaluations: {}", self.nfev)?;
        for param in &self.params {
            match param.stderr() {
                Some(stderr) => writeln!(f, "  {}: {:.6} +/- {:.6}", param.name(), param.value(), stderr)?,
                None => writeln!(f, "  {}: {:.6}", param.name(), param.value())?,
            }
        }
        Ok(())
    }
}

/// One named component of a composite model, evaluated at the best fit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    pub values: Array1<f64>,
}

impl Component {
    pub fn new(name: &str, values: Array1<f64>) -> Self {
        Self {
            name: name.to_string(),
            values,
        }
    }
}

/// Result of fitting a model to data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelResult {
    /// Name of the fitted model (e.g. "gaussian")
    pub model_name: String,

    /// Minimization outcome
    pub fit: MinimizerResult,

    /// Independent variable
    pub x: Array1<f64>,

    /// Fitted data
    pub data: Array1<f64>,

    /// Model evaluated at the best-fit parameters
    pub best_fit: Array1<f64>,

    /// Components of a composite model; empty for simple models
    pub components: Vec<Component>,
}

impl ModelResult {
    /// Create a model result from the data and the best-fit curve.
    ///
    /// The residual is `data - best_fit` and the fit statistics follow from it
    /// as in [`MinimizerResult::from_residual`].
    pub fn new(
        model_name: &str,
        method: &str,
        params: Parameters,
        x: Array1<f64>,
        data: Array1<f64>,
        best_fit: Array1<f64>,
    ) -> Result<Self> {
        check_len("x", &x, data.len())?;
        check_len("best_fit", &best_fit, data.len())?;

        let residual = &data - &best_fit;
        Ok(Self {
            model_name: model_name.to_string(),
            fit: MinimizerResult::from_residual(method, params, residual),
            x,
            data,
            best_fit,
            components: Vec::new(),
        })
    }

    /// Attach the evaluated components of a composite model.
    pub fn with_components(mut self, components: Vec<Component>) -> Self {
        self.components = components;
        self
    }
}

impl FitResult for ModelResult {
    fn variant_name(&self) -> &'static str {
        "ModelResult"
    }

    fn glance(&self) -> Result<Table> {
        let mut cells = vec![("model".to_string(), Value::from(self.model_name.as_str()))];
        cells.extend(self.fit.summary_cells());
        Table::from_row(cells)
    }

    fn tidy(&self, _param_names: Option<&[String]>) -> Result<Table> {
        self.fit.parameter_table()
    }

    fn augment(&self) -> Result<Table> {
        let n = self.data.len();
        check_len("x", &self.x, n)?;
        check_len("best_fit", &self.best_fit, n)?;

        let mut table = Table::new()
            .with_column(Column::index("index", n))?
            .with_column(Column::float("x", self.x.iter().copied()))?
            .with_column(Column::float("data", self.data.iter().copied()))?
            .with_column(Column::float("best_fit", self.best_fit.iter().copied()))?;
        if let Some(residual) = &self.fit.residual {
            check_len("residual", residual, n)?;
            table.push_column(Column::float("residual", residual.iter().copied()))?;
        }

        // A single component is the model itself.
        if self.components.len() > 1 {
            for component in &self.components {
                check_len(&component.name, &component.values, n)?;
                table.push_column(Column::float(
                    component.name.as_str(),
                    component.values.iter().copied(),
                ))?;
            }
        }
        Ok(table)
    }
}

impl fmt::Display for ModelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model: {}", self.model_name)?;
        write!(f, "{}", self.fit)
    }
}
