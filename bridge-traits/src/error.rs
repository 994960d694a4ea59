use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    /// Returned by host implementations when a bridge call cannot complete.
    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("Unknown deinterlace method: {0}")]
    UnknownInterlaceMethod(String),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
