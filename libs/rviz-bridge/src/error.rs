//! # Bridge Errors
//!
//! Failures reported by the engine side of the bridge. Rejected footprints
//! are not errors here; see [`UpdateOutcome::Rejected`](crate::UpdateOutcome).

use thiserror::Error;

/// Errors raised while handing a mesh to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The sink refused the mesh.
    #[error("Mesh upload failed: {message}")]
    UploadFailed { message: String },

    /// The sink's engine resource no longer exists.
    #[error("Mesh sink is closed")]
    SinkClosed,
}

impl BridgeError {
    /// Creates an upload failure error.
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::UploadFailed {
            message: message.into(),
        }
    }
}

/// Result type alias for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;
