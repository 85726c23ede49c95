use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("required column '{column}' not found")]
    MissingColumn { column: &'static str },
    #[error("column '{column}' appears more than once")]
    DuplicateColumn { column: &'static str },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
