//! Validation error types

use thiserror::Error;

/// Rejected user input. Display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is missing or blank
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field is not decimal text
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            ValidationError::Required { field: "Name" }.to_string(),
            "Name is required"
        );
        assert_eq!(
            ValidationError::NotANumber { field: "Price" }.to_string(),
            "Price must be a number"
        );
        assert_eq!(
            ValidationError::Negative { field: "Price" }.to_string(),
            "Price must not be negative"
        );
    }
}
