//! Render error types

use thiserror::Error;

/// Errors surfaced at the edge of a render pass
///
/// Nothing inside a pass fails; only the entry point and the output sink can.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("View not found: {name}")]
    UnknownView { name: String },

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
