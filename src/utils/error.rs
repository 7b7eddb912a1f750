use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Incorrect number of arguments for {operation}. Expecting {expected}, got {got}")]
    ArgumentCountError {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Could not locate watch: {key}")]
    NotFoundError { key: String },

    #[error("Failed to record watch: {key}")]
    WriteError { key: String },

    #[error("Invalid smart contract function name: {name}")]
    InvalidOperationError { name: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ContractError>;
