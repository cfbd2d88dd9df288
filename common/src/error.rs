//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Receipt processor error type
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Request body could not be decoded into a receipt.
    ///
    /// The message is the raw decoder output and is returned to the client as is.
    #[error("{0}")]
    InvalidReceipt(String),

    /// Missing or mismatched bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Listener could not be bound
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// Requested bind address
        addr: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Server loop terminated with an I/O error
    #[error("Server error: {0}")]
    Server(#[source] std::io::Error),
}

/// Result alias for the receipt processor
pub type ProcessorResult<T> = Result<T, ProcessorError>;
