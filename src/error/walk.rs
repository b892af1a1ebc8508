use std::path::{Path, PathBuf};
use thiserror::Error;

/// An entry the walker could not visit (permissions, dangling links, loops).
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("{path}: {source}")]
    Parallel {
        path: PathBuf,
        source: ignore::Error,
    },

    #[error("{path}: {}", ordered_cause(.source))]
    Ordered {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl WalkError {
    /// `ignore` nests the path and depth around the real cause; peel them off
    /// so the message names the path once.
    pub fn parallel(root: &Path, err: ignore::Error) -> Self {
        let (path, source) = split_ignore(err);
        Self::Parallel {
            path: path.unwrap_or_else(|| root.to_path_buf()),
            source,
        }
    }

    pub fn ordered(root: &Path, err: walkdir::Error) -> Self {
        let path = err.path().unwrap_or(root).to_path_buf();
        Self::Ordered { path, source: err }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Parallel { path, .. } | Self::Ordered { path, .. } => path,
        }
    }
}

fn split_ignore(err: ignore::Error) -> (Option<PathBuf>, ignore::Error) {
    match err {
        ignore::Error::WithPath { path, err } => {
            let (inner, source) = split_ignore(*err);
            (inner.or(Some(path)), source)
        }
        ignore::Error::WithDepth { err, .. } => split_ignore(*err),
        other => (None, other),
    }
}

/// walkdir's own message repeats the path around the I/O cause.
fn ordered_cause(err: &walkdir::Error) -> String {
    match err.io_error() {
        Some(io) => io.to_string(),
        None => err.to_string(),
    }
}
