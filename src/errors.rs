use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid input: {field} {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    #[error("calculation overflow: {message}")]
    CalculationOverflow {
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no result available: submit loan terms first")]
    NoResult,
}

impl LoanError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        LoanError::InvalidInput {
            field,
            message: message.into(),
        }
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, LoanError::InvalidInput { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
