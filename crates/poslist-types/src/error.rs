use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypeError {
    #[error("inverted span: left {left} is greater than right {right}")]
    InvertedSpan { left: f64, right: f64 },

    #[error("span endpoint is not a number")]
    NotANumber,
}

/// Convenience alias for type results.
pub type TypeResult<T> = Result<T, TypeError>;
