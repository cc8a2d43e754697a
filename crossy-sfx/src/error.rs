use std::path::PathBuf;
use thiserror::Error;

/// Error returned when a sound cannot be written to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create WAV file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
    #[error("Failed to write WAV data to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },
}

impl ExportError {
    /// Path of the file that could not be written
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Create { path, .. } | Self::Write { path, .. } => path.as_path(),
        }
    }
}
