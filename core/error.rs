use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not read {}: {}", .path.display(), .source)]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Write Error: Path '{}', Error: {}", .path.display(), .source)]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// True for failures that originate in the filesystem rather than in how the run was set up.
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::FileRead { .. } | AppError::FileWrite { .. }
        )
    }
}
