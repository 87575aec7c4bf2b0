use std::path::{Path, PathBuf};

/// Result alias used across the crate.
pub type OverlayResult<T> = Result<T, OverlayError>;

/// Errors produced while building overlay assets.
#[derive(thiserror::Error, Debug)]
pub enum OverlayError {
    /// Configuration or layout data is inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failed (canvas too large, buffer mismatch).
    #[error("render error: {0}")]
    Render(String),

    /// Settings could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem failure while writing an output.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path being created or written.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Anything else.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlayError {
    /// Build a [`OverlayError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`OverlayError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`OverlayError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`OverlayError::Io`] tagged with the path that failed.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
