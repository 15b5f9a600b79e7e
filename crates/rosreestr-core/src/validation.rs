//! Validation errors raised when constructing core value objects.

use std::fmt;

use thiserror::Error;

/// Error returned when a value object is constructed from inconsistent input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error for '{field}': {message}")]
pub struct ValidationError {
    /// The field (or group of alternative fields) that failed validation.
    pub field: String,
    /// A human-readable description of the validation failure.
    pub message: String,
    /// The kind of validation that failed.
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    /// Creates a new validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rosreestr_core::validation::{ValidationError, ValidationErrorKind};
    ///
    /// let error = ValidationError::new(
    ///     "region_id | region_name",
    ///     "either a region id or a region name must be provided",
    ///     ValidationErrorKind::Required,
    /// );
    /// assert_eq!(error.kind, ValidationErrorKind::Required);
    /// ```
    pub fn new(
        field: impl Into<String>,
        message: impl Into<String>,
        kind: ValidationErrorKind,
    ) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            kind,
        }
    }

    /// Creates an error for a group of alternative fields where none was provided.
    pub fn one_of_required(fields: &[&str]) -> Self {
        let field = fields.join(" | ");
        Self {
            message: format!("one of '{field}' must be provided"),
            field,
            kind: ValidationErrorKind::Required,
        }
    }
}

/// The category of validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// A required value (or every alternative for it) was missing.
    Required,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "required"),
        }
    }
}
