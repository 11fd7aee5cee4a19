use thiserror::Error;

/// VM byte-layer errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VmError {
    #[error("Malformed script: {0}")]
    MalformedScript(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for VM byte-layer operations
pub type VmResult<T> = Result<T, VmError>;
