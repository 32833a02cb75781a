use thiserror::Error;

use crate::granule::Granule;

/// Failure of a single host property write.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NodeWriteError {
    #[error("node does not expose {0}")]
    Unsupported(Granule),

    #[error("host rejected {granule}: {reason}")]
    Rejected { granule: Granule, reason: String },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResizeError {
    #[error("node cannot be resized")]
    NotResizable,

    #[error("host rejected resize to {width}x{height}: {reason}")]
    Rejected {
        width: f64,
        height: f64,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum KeyValueStoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage data is not valid json: {0}")]
    Serde(#[from] serde_json::Error),
}
