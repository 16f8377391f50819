//! Configuration validation error types.

use std::fmt;
use thiserror::Error;

/// Reasons a client configuration can be rejected.
///
/// ```rust
/// use voxel_core::error::ConfigValidationError;
///
/// let err = ConfigValidationError::invalid("base_url", "scheme must be http or https");
/// assert_eq!(err.field_name(), "base_url");
/// assert!(err.to_string().contains("scheme"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigValidationError {
    /// Field value exceeds the maximum allowed value.
    #[error("Field '{field}' value {value} exceeds maximum {max}")]
    ValueTooHigh {
        /// The name of the configuration field
        field: &'static str,
        /// The actual value that was provided
        value: String,
        /// The maximum allowed value
        max: String,
    },

    /// Field value is invalid for reasons other than range.
    #[error("Field '{field}' has invalid value: {reason}")]
    ValueInvalid {
        /// The name of the configuration field
        field: &'static str,
        /// The reason why the value is invalid
        reason: String,
    },

    /// Required field is missing.
    #[error("Required field '{field}' is missing")]
    ValueMissing {
        /// The name of the missing configuration field
        field: &'static str,
    },
}

impl ConfigValidationError {
    /// Returns the field name associated with this error.
    #[must_use]
    pub fn field_name(&self) -> &'static str {
        match self {
            ConfigValidationError::ValueTooHigh { field, .. }
            | ConfigValidationError::ValueInvalid { field, .. }
            | ConfigValidationError::ValueMissing { field } => field,
        }
    }

    /// Creates a new `ValueTooHigh` error.
    pub fn too_high<V: fmt::Display, M: fmt::Display>(
        field: &'static str,
        value: V,
        max: M,
    ) -> Self {
        ConfigValidationError::ValueTooHigh {
            field,
            value: value.to_string(),
            max: max.to_string(),
        }
    }

    /// Creates a new `ValueInvalid` error.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigValidationError::ValueInvalid {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a new `ValueMissing` error.
    pub fn missing(field: &'static str) -> Self {
        ConfigValidationError::ValueMissing { field }
    }
}

/// Warnings collected while validating a configuration that is still usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    /// Human-readable warnings
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a warning.
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Returns true if no warnings were recorded.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Returns true if at least one warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_too_high_display() {
        let err = ConfigValidationError::too_high("timeout", "600s", "5 minutes");
        let msg = err.to_string();
        assert!(msg.contains("timeout"));
        assert!(msg.contains("600s"));
        assert!(msg.contains("5 minutes"));
    }

    #[test]
    fn test_value_missing_display() {
        let err = ConfigValidationError::missing("base_url");
        assert_eq!(err.field_name(), "base_url");
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_result_warnings() {
        let mut result = ValidationResult::new();
        assert!(result.is_ok());
        result.add_warning("plain http base URL");
        assert!(result.has_warnings());
        assert_eq!(result.warnings, vec!["plain http base URL".to_string()]);
    }
}
