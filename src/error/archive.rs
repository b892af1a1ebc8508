use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("{path}: cannot open archive: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{path}: invalid zip archive: {source}")]
    Zip {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("{path}: invalid tar archive: {source}")]
    Tar {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ArchiveError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn zip(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Zip {
            path: path.into(),
            source,
        }
    }

    pub fn tar(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Tar {
            path: path.into(),
            source,
        }
    }
}
