//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Numeric field is below zero (or not a finite number)
    Negative { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
        }
    }
}

impl std::error::Error for ValidationError {}
