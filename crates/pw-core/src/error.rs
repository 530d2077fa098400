use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Insufficient points: need at least {required}, found {found}")]
    InsufficientPoints { required: usize, found: usize },

    #[error("Index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Store is empty")]
    Empty,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Invariant violated: {0}")]
    Invariant(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PathError>;
