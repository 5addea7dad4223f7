//! Prop validators.
//!
//! A component registers one validator per prop. When a selector tests a
//! prop, say `[size=3]`, the validator for `size` is run against a prop bag
//! holding only the value the selector implies (`{ "size": 3 }`), which
//! catches selectors that can never match.
//!
//! # Built-in Validators
//!
//! - [`bool()`]: the prop must be a boolean
//! - [`number()`]: the prop must be a number
//! - [`string()`]: the prop must be a string
//! - [`one_of()`]: the prop must equal one of a fixed set of values
//!
//! Every built-in validator accepts a missing prop.
//!
//! # Example
//!
//! ```
//! use seamstress::validate::prop_types::{self, PropValidator};
//! use serde_json::json;
//!
//! let validator = prop_types::one_of([json!("small"), json!("large")]);
//! let props = json!({ "size": "huge" });
//!
//! let err = validator
//!     .validate(props.as_object().unwrap(), "size", "Button", "prop")
//!     .unwrap_err();
//! assert!(err.to_string().contains("expected one of"));
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::types::{Props, loosely_equal};

/// A prop validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PropTypeError {
    /// What was wrong with the prop.
    pub message: String,
}

impl PropTypeError {
    /// Create a validation failure.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Trait for prop validators.
///
/// The arguments follow the conventional prop-checker shape: the prop bag,
/// the name of the prop to check, the component name and where the prop
/// came from (`"prop"`).
///
/// # Thread Safety
///
/// Validators must be `Send + Sync` so schemas can be shared between threads.
pub trait PropValidator: Send + Sync {
    /// Validate `props[prop_name]`.
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError>;
}

// Allow using Arc<dyn PropValidator> as a PropValidator
impl<V: PropValidator + ?Sized> PropValidator for Arc<V> {
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        (**self).validate(props, prop_name, component_name, location)
    }
}

// Allow using Box<dyn PropValidator> as a PropValidator
impl<V: PropValidator + ?Sized> PropValidator for Box<V> {
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        (**self).validate(props, prop_name, component_name, location)
    }
}

/// A validator backed by a closure.
///
/// # Example
///
/// ```
/// use seamstress::validate::{CustomValidator, PropTypeError, PropValidator};
/// use serde_json::json;
///
/// let even = CustomValidator::new(|props, name, _component, _location| {
///     match props.get(name).and_then(|v| v.as_u64()) {
///         Some(n) if n % 2 == 1 => Err(PropTypeError::new(format!("`{name}` must be even"))),
///         _ => Ok(()),
///     }
/// });
///
/// let props = json!({ "columns": 3 });
/// assert!(even.validate(props.as_object().unwrap(), "columns", "Grid", "prop").is_err());
/// ```
pub struct CustomValidator<F>
where
    F: Fn(&Props, &str, &str, &str) -> Result<(), PropTypeError> + Send + Sync,
{
    validate_fn: F,
}

impl<F> CustomValidator<F>
where
    F: Fn(&Props, &str, &str, &str) -> Result<(), PropTypeError> + Send + Sync,
{
    /// Create a validator from a closure.
    pub fn new(validate_fn: F) -> Self {
        Self { validate_fn }
    }
}

impl<F> PropValidator for CustomValidator<F>
where
    F: Fn(&Props, &str, &str, &str) -> Result<(), PropTypeError> + Send + Sync,
{
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        (self.validate_fn)(props, prop_name, component_name, location)
    }
}

impl<F> fmt::Debug for CustomValidator<F>
where
    F: Fn(&Props, &str, &str, &str) -> Result<(), PropTypeError> + Send + Sync,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomValidator").finish_non_exhaustive()
    }
}

/// The JSON type a [`TypeValidator`] expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedType {
    /// `true` or `false`.
    Bool,
    /// Any number.
    Number,
    /// Any string.
    String,
}

impl ExpectedType {
    fn matches(self, value: &Value) -> bool {
        match self {
            ExpectedType::Bool => value.is_boolean(),
            ExpectedType::Number => value.is_number(),
            ExpectedType::String => value.is_string(),
        }
    }
}

impl fmt::Display for ExpectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedType::Bool => write!(f, "boolean"),
            ExpectedType::Number => write!(f, "number"),
            ExpectedType::String => write!(f, "string"),
        }
    }
}

/// Checks that a prop has a given JSON type.
#[derive(Debug, Clone, Copy)]
pub struct TypeValidator {
    expected: ExpectedType,
}

impl TypeValidator {
    /// Create a validator for a type.
    pub fn new(expected: ExpectedType) -> Self {
        Self { expected }
    }
}

impl PropValidator for TypeValidator {
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        match props.get(prop_name) {
            None | Some(Value::Null) => Ok(()),
            Some(value) if self.expected.matches(value) => Ok(()),
            Some(value) => Err(PropTypeError::new(format!(
                "Invalid {} `{}` of type `{}` supplied to `{}`, expected `{}`.",
                location,
                prop_name,
                type_name(value),
                component_name,
                self.expected
            ))),
        }
    }
}

/// Checks that a prop equals one of a fixed set of values.
#[derive(Debug, Clone)]
pub struct OneOfValidator {
    values: Vec<Value>,
}

impl OneOfValidator {
    /// Create a validator accepting the given values.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl PropValidator for OneOfValidator {
    fn validate(
        &self,
        props: &Props,
        prop_name: &str,
        component_name: &str,
        location: &str,
    ) -> Result<(), PropTypeError> {
        match props.get(prop_name) {
            None | Some(Value::Null) => Ok(()),
            Some(value) if self.values.iter().any(|v| loosely_equal(v, value)) => Ok(()),
            Some(value) => Err(PropTypeError::new(format!(
                "Invalid {} `{}` of value `{}` supplied to `{}`, expected one of {}.",
                location,
                prop_name,
                value,
                component_name,
                Value::Array(self.values.clone())
            ))),
        }
    }
}

/// The prop must be a boolean.
pub fn bool() -> TypeValidator {
    TypeValidator::new(ExpectedType::Bool)
}

/// The prop must be a number.
pub fn number() -> TypeValidator {
    TypeValidator::new(ExpectedType::Number)
}

/// The prop must be a string.
pub fn string() -> TypeValidator {
    TypeValidator::new(ExpectedType::String)
}

/// The prop must equal one of `values`.
pub fn one_of(values: impl IntoIterator<Item = Value>) -> OneOfValidator {
    OneOfValidator::new(values)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validators keyed by prop name.
#[derive(Clone, Default)]
pub struct PropTypes {
    validators: HashMap<String, Arc<dyn PropValidator>>,
}

impl PropTypes {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a validator.
    pub fn with(mut self, prop: impl Into<String>, validator: impl PropValidator + 'static) -> Self {
        self.insert(prop, Arc::new(validator));
        self
    }

    /// Register or replace a validator.
    pub fn insert(&mut self, prop: impl Into<String>, validator: Arc<dyn PropValidator>) {
        self.validators.insert(prop.into(), validator);
    }

    /// Look up the validator for a prop.
    pub fn get(&self, prop: &str) -> Option<&Arc<dyn PropValidator>> {
        self.validators.get(prop)
    }

    /// Get the number of registered validators.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Check if no validators are registered.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for PropTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut props: Vec<_> = self.validators.keys().collect();
        props.sort();
        f.debug_struct("PropTypes").field("props", &props).finish()
    }
}
