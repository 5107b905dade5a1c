//! Parameters collection implementation
//!
//! This module provides the Parameters struct, an ordered collection of
//! Parameter objects. Iteration follows insertion order, which is the order in
//! which the tidying functions emit one row per parameter.

use crate::parameters::parameter::{Parameter, ParameterError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// An ordered collection of named parameters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Parameters {
    params: Vec<Parameter>,
}

impl Parameters {
    /// Create a new empty parameters collection
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::Parameters;
    ///
    /// let params = Parameters::new();
    /// assert_eq!(params.len(), 0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter to the end of the collection
    ///
    /// # Returns
    ///
    /// `Ok(())` if the parameter was added, or an error if a parameter with the
    /// same name already exists
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::{Parameter, Parameters};
    ///
    /// let mut params = Parameters::new();
    /// params.add(Parameter::new("amplitude", 10.0)).unwrap();
    /// assert!(params.add(Parameter::new("amplitude", 1.0)).is_err());
    /// ```
    pub fn add(&mut self, param: Parameter) -> Result<(), ParameterError> {
        if self.contains(param.name()) {
            return Err(ParameterError::DuplicateName {
                name: param.name().to_string(),
            });
        }
        self.params.push(param);
        Ok(())
    }

    /// Add a new varied, unbounded parameter with the given name and value
    pub fn add_param(&mut self, name: &str, value: f64) -> Result<(), ParameterError> {
        self.add(Parameter::new(name, value))
    }

    /// Add a new parameter with bounds
    pub fn add_param_with_bounds(
        &mut self,
        name: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<(), ParameterError> {
        self.add(Parameter::with_bounds(name, value, min, max)?)
    }

    /// Add a new derived parameter defined by an expression
    pub fn add_param_with_expr(
        &mut self,
        name: &str,
        value: f64,
        expr: &str,
    ) -> Result<(), ParameterError> {
        self.add(Parameter::with_expr(name, value, expr))
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Parameter> {
        self.params.iter_mut().find(|p| p.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Remove a parameter, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<Parameter> {
        let index = self.params.iter().position(|p| p.name() == name)?;
        Some(self.params.remove(index))
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names in insertion order
    pub fn names(&self) -> Vec<String> {
        self.params.iter().map(|p| p.name().to_string()).collect()
    }

    /// Iterate over the parameters in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.params.iter()
    }

    /// Parameter values in the same order as returned by `names()`
    pub fn values(&self) -> Vec<f64> {
        self.params.iter().map(Parameter::value).collect()
    }

    /// Parameters that were varied during the fit
    pub fn varying(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| p.vary()).collect()
    }

    /// Parameters that were held fixed or derived from expressions
    pub fn fixed(&self) -> Vec<&Parameter> {
        self.params.iter().filter(|p| !p.vary()).collect()
    }

    /// Map from parameter name to value, ready to pass to a model function
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::Parameters;
    ///
    /// let mut params = Parameters::new();
    /// params.add_param("amplitude", 10.0).unwrap();
    /// params.add_param("center", 5.0).unwrap();
    ///
    /// let values = params.values_dict();
    /// assert_eq!(values["center"], 5.0);
    /// ```
    pub fn values_dict(&self) -> HashMap<String, f64> {
        self.params
            .iter()
            .map(|p| (p.name().to_string(), p.value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

/// Error type for parameter serialization
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid parameters: {0}")]
    Invalid(#[from] ParameterError),
}

impl Parameters {
    /// Save parameters to a JSON string
    pub fn to_json(&self) -> Result<String, SerializationError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }

    /// Load parameters from a JSON string
    ///
    /// Duplicate names are rejected, as they are by [`Parameters::add`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fitbroom_rs::parameters::Parameters;
    ///
    /// let json = r#"{
    ///   "params": [
    ///     {
    ///       "name": "amplitude",
    ///       "value": 10.0,
    ///       "init_value": 8.0,
    ///       "vary": true,
    ///       "bounds": { "min": 0.0, "max": null },
    ///       "stderr": 0.2
    ///     }
    ///   ]
    /// }"#;
    ///
    /// let params = Parameters::from_json(json).unwrap();
    /// assert_eq!(params.len(), 1);
    /// assert_eq!(params.get("amplitude").unwrap().stderr(), Some(0.2));
    /// ```
    pub fn from_json(json: &str) -> Result<Self, SerializationError> {
        let raw: Parameters = serde_json::from_str(json)?;

        let mut params = Parameters::new();
        for param in raw.params {
            params.add(param)?;
        }
        Ok(params)
    }
}
