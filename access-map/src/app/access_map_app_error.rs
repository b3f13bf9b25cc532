use access_map_core::model::AccessMapError;
use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum AccessMapAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error("Error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("Error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("Error creating a runtime to handle async code: {0}")]
    TokioError(String),
    #[error(transparent)]
    CalculationError(#[from] AccessMapError),
}
