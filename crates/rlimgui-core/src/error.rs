//! Error types for rlimgui-rs.

use thiserror::Error;

/// The main error type for bridge operations outside the per-frame path.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Renderer options could not be parsed.
    #[error("invalid renderer options: {0}")]
    Options(#[from] serde_json::Error),

    /// Raw vertex bytes handed over by the GUI library do not match [`crate::DrawVert`].
    #[error("vertex buffer layout mismatch: {0}")]
    VertexLayout(String),

    /// A draw command references indices outside its list's buffers.
    #[error("draw command index range {offset}..{end} exceeds index buffer of length {len}")]
    IndexRange { offset: usize, end: usize, len: usize },
}

/// A specialized Result type for rlimgui-rs operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
