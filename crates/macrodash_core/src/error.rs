use std::fmt;

/// Errors raised when a resolver is called outside its valid input space
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The LM curve divides the money supply by the price level, which must be positive
    NonPositivePriceLevel(f64),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::NonPositivePriceLevel(p) => {
                write!(f, "price level must be positive and finite, got {p}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type ModelResult<T> = std::result::Result<T, ModelError>;
