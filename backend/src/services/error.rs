//! Errors raised while resolving marks for a calculation.

/// Result type for calculation services
pub type CalculationResult<T> = Result<T, CalculationError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalculationError {
    /// A referenced mark id is not in the mark list.
    #[error("Mark not found: {0}")]
    MarkNotFound(String),

    /// A course needs at least two marks to form a leg.
    #[error("At least two marks must be provided, got {0}")]
    TooFewMarks(usize),
}

impl CalculationError {
    /// Id of the offending mark, when the error is about one.
    pub fn mark_id(&self) -> Option<&str> {
        match self {
            CalculationError::MarkNotFound(id) => Some(id),
            CalculationError::TooFewMarks(_) => None,
        }
    }
}
