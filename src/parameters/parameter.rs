//! Parameter definition and implementation
//!
//! This module provides the Parameter struct: one named fitted quantity as a
//! fitting routine reports it, with its value, bounds, vary flag, optional
//! constraint expression, and optional standard error.

use crate::parameters::bounds::{Bounds, BoundsError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("Parameter '{name}' cannot have both an expression and be varied")]
    ExpressionAndVary { name: String },

    #[error("Bounds error: {0}")]
    BoundsError(#[from] BoundsError),

    #[error("Parameter '{name}' not found")]
    ParameterNotFound { name: String },

    #[error("Parameter '{name}' already exists")]
    DuplicateName { name: String },
}

/// A fitted parameter
///
/// This mirrors the parameter objects that fitting libraries attach to their
/// results: the fitting code fills it in, and the tidying functions only read it.
///
/// The name is fixed at construction, so a parameter reached through
/// [`Parameters::get_mut`](crate::parameters::Parameters::get_mut) cannot be
/// renamed onto another entry of its collection:
///
/// ```compile_fail
/// use fitbroom_rs::parameters::Parameters;
///
/// let mut params = Parameters::new();
/// params.add_param("a", 1.0).unwrap();
/// params.add_param("b", 2.0).unwrap();
/// params.get_mut("b").unwrap().name = "a".to_string();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// Name of the parameter
    name: String,

    /// Current (fitted) value of the parameter
    value: f64,

    /// Value the parameter had when it was created
    init_value: f64,

    /// Whether this parameter was varied during the fit
    vary: bool,

    /// Minimum and maximum bounds for the parameter value
    #[serde(default)]
    bounds: Bounds,

    /// The constraint expression used to compute this parameter (if any)
    #[serde(default)]
    expr: Option<String>,

    /// Standard error of the parameter (set after fitting)
    #[serde(default)]
    stderr: Option<f64>,
}

impl Parameter {
    /// Create a new parameter with the given name and value
    ///
    /// The parameter is varied and unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::new("amplitude", 10.0);
    /// assert_eq!(param.name(), "amplitude");
    /// assert_eq!(param.value(), 10.0);
    /// assert!(param.vary());
    /// ```
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
            init_value: value,
            vary: true,
            bounds: Bounds::default(),
            expr: None,
            stderr: None,
        }
    }

    /// Create a new parameter with the given name, value, and bounds
    ///
    /// The value is clamped into the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::with_bounds("amplitude", 10.0, 0.0, 20.0).unwrap();
    /// assert_eq!(param.min(), Some(0.0));
    /// assert_eq!(param.max(), Some(20.0));
    /// ```
    pub fn with_bounds(name: &str, value: f64, min: f64, max: f64) -> Result<Self, ParameterError> {
        let bounds = Bounds::new(min, max)?;
        let value = bounds.clamp(value);

        Ok(Self {
            bounds,
            ..Self::new(name, value)
        })
    }

    /// Create a new parameter whose value is derived from an expression
    ///
    /// Derived parameters are never varied.
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::parameter::Parameter;
    ///
    /// let param = Parameter::with_expr("fwhm", 2.35, "2.3548 * sigma");
    /// assert!(!param.vary());
    /// assert_eq!(param.expr(), Some("2.3548 * sigma"));
    /// ```
    pub fn with_expr(name: &str, value: f64, expr: &str) -> Self {
        Self {
            vary: false,
            expr: Some(expr.to_string()),
            ..Self::new(name, value)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Set the value of the parameter
    ///
    /// # Returns
    ///
    /// `Ok(())` if the value was set successfully, or an error if the value is outside bounds
    pub fn set_value(&mut self, value: f64) -> Result<(), ParameterError> {
        if !self.bounds.is_within_bounds(value) {
            return Err(ParameterError::BoundsError(BoundsError::ValueOutsideBounds {
                value,
                min: self.bounds.min,
                max: self.bounds.max,
            }));
        }

        self.value = value;
        Ok(())
    }

    /// The value the parameter had when it was created
    pub fn init_value(&self) -> f64 {
        self.init_value
    }

    pub fn vary(&self) -> bool {
        self.vary
    }

    /// Set whether the parameter is varied
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or an error if the parameter has an expression
    pub fn set_vary(&mut self, vary: bool) -> Result<(), ParameterError> {
        if vary && self.expr.is_some() {
            return Err(ParameterError::ExpressionAndVary {
                name: self.name.clone(),
            });
        }

        self.vary = vary;
        Ok(())
    }

    /// The lower bound, or `None` when unbounded from below
    pub fn min(&self) -> Option<f64> {
        self.bounds.lower()
    }

    /// The upper bound, or `None` when unbounded from above
    pub fn max(&self) -> Option<f64> {
        self.bounds.upper()
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Set the bounds for the parameter, clamping the current value into them
    pub fn set_bounds(&mut self, min: f64, max: f64) -> Result<(), ParameterError> {
        let bounds = Bounds::new(min, max)?;
        self.bounds = bounds;
        self.value = bounds.clamp(self.value);

        Ok(())
    }

    pub fn expr(&self) -> Option<&str> {
        self.expr.as_deref()
    }

    /// Set the constraint expression; an expression implies the parameter is not varied
    pub fn set_expr(&mut self, expr: Option<&str>) {
        if let Some(expr) = expr {
            self.vary = false;
            self.expr = Some(expr.to_string());
        } else {
            self.expr = None;
        }
    }

    pub fn stderr(&self) -> Option<f64> {
        self.stderr
    }

    pub fn set_stderr(&mut self, stderr: Option<f64>) {
        self.stderr = stderr;
    }
}
