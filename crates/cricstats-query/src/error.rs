use thiserror::Error;

/// Outcomes a query reports instead of a result.
///
/// Empty results are not errors; callers get an empty `Vec`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("player not found: {name}")]
    PlayerNotFound { name: String },
    #[error("cannot compare {name} with themselves")]
    SamePlayer { name: String },
    #[error("invalid parameter {parameter}: {message}")]
    InvalidParameter {
        parameter: &'static str,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, QueryError>;
