//! Validation error types

use std::fmt;

/// A single rule violation found while checking a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is absent, empty, or whitespace-only
    Missing { field: &'static str },

    /// Numeric field is below its lower bound
    BelowMinimum {
        field: &'static str,
        min: i64,
        value: i64,
    },

    /// String doesn't match required format (e.g., timestamp)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },

    /// Invalid enum variant
    InvalidVariant { field: &'static str, value: String },

    /// Two flags that may not both be set
    MutuallyExclusive {
        first: &'static str,
        second: &'static str,
    },

    /// Field becomes required because another field is set
    RequiredWhen {
        field: &'static str,
        condition: &'static str,
    },
}

impl ValidationError {
    /// Name of the field the violation is reported against.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::BelowMinimum { field, .. }
            | Self::InvalidFormat { field, .. }
            | Self::InvalidVariant { field, .. }
            | Self::RequiredWhen { field, .. } => *field,
            Self::MutuallyExclusive { first, .. } => *first,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::BelowMinimum { field, min, value } => {
                write!(f, "{} must be at least {} (got {})", field, min, value)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidVariant { field, value } => {
                write!(f, "invalid {} value: '{}'", field, value)
            }
            Self::MutuallyExclusive { first, second } => {
                write!(f, "{} and {} cannot both be true", first, second)
            }
            Self::RequiredWhen { field, condition } => {
                write!(f, "{} is required when {}", field, condition)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Every violation found in one candidate document, in the order the
/// rules ran: required text, dates, team sizes, then cross-field rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self(errors)
    }

    /// Wrap a single violation.
    pub fn single(error: ValidationError) -> Self {
        Self(vec![error])
    }

    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Offending field names, one per violation.
    pub fn fields(&self) -> Vec<&'static str> {
        self.0.iter().map(ValidationError::field).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation failed: ")?;
        f.write_str(&self.messages().join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self::single(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::MutuallyExclusive {
            first: "inhouse",
            second: "outhouse",
        };
        assert_eq!(err.to_string(), "inhouse and outhouse cannot both be true");

        let err = ValidationError::BelowMinimum {
            field: "minTeamSize",
            min: 1,
            value: 0,
        };
        assert_eq!(err.to_string(), "minTeamSize must be at least 1 (got 0)");
    }

    #[test]
    fn collected_errors_join_messages() {
        let errors = ValidationErrors::new(vec![
            ValidationError::Missing { field: "name" },
            ValidationError::Missing { field: "location" },
        ]);
        assert_eq!(errors.fields(), ["name", "location"]);
        assert_eq!(
            errors.to_string(),
            "validation failed: name is required; location is required"
        );
    }

    #[test]
    fn field_reports_first_flag_for_exclusive_pairs() {
        let err = ValidationError::MutuallyExclusive {
            first: "inhouse",
            second: "outhouse",
        };
        assert_eq!(err.field(), "inhouse");
    }
}
