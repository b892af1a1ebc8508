use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IoError {
    #[error("{path}: root not found")]
    RootNotFound { path: PathBuf },

    #[error("{path}: not a directory")]
    NotADirectory { path: PathBuf },

    #[error("{path}: read failed: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{from}: failed to copy to '{to}': {source}")]
    CopyError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: destination directory is not writable: {source}")]
    DestinationNotWritable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write output: {source}")]
    Output { source: std::io::Error },
}

impl IoError {
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RootNotFound { path: path.into() }
    }

    pub fn not_a_directory(path: impl Into<PathBuf>) -> Self {
        Self::NotADirectory { path: path.into() }
    }

    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn copy_error(
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::CopyError {
            from: from.into(),
            to: to.into(),
            source,
        }
    }

    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}
