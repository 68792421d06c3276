//! Error types.

use std::fmt;

use crate::validation::ValidationError;

/// Errors reported by the scheduling core.
#[derive(Debug, Clone, PartialEq)]
pub enum SchedError {
    /// The workload or quantum was rejected before any simulation ran.
    InvalidInput(Vec<ValidationError>),
    /// No policy matches the given name.
    UnknownPolicy(String),
    /// Metrics are undefined (no completed processes or zero elapsed time).
    DegenerateMetrics(String),
    /// A policy broke one of its own invariants. Indicates a defect.
    Internal(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchedError>;

impl fmt::Display for SchedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedError::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}", e.message)?;
                }
                Ok(())
            }
            SchedError::UnknownPolicy(name) => write!(f, "unknown scheduling policy '{name}'"),
            SchedError::DegenerateMetrics(msg) => write!(f, "degenerate metrics: {msg}"),
            SchedError::Internal(msg) => write!(f, "internal scheduler error: {msg}"),
        }
    }
}

impl std::error::Error for SchedError {}

impl From<Vec<ValidationError>> for SchedError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedError::InvalidInput(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_lists_all_messages() {
        let err = SchedError::InvalidInput(vec![
            ValidationError::new(ValidationErrorKind::EmptyWorkload, "no processes"),
            ValidationError::new(ValidationErrorKind::InvalidQuantum, "quantum is 0"),
        ]);
        assert_eq!(err.to_string(), "invalid input: no processes; quantum is 0");
    }

    #[test]
    fn test_display_variants() {
        assert_eq!(
            SchedError::UnknownPolicy("x".into()).to_string(),
            "unknown scheduling policy 'x'"
        );
        assert!(SchedError::DegenerateMetrics("empty".into())
            .to_string()
            .contains("empty"));
    }
}
