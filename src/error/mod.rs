mod archive;
mod io;
mod pattern;
mod walk;

pub use archive::ArchiveError;
pub use io::IoError;
pub use pattern::PatternError;
pub use walk::WalkError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Archive(#[from] ArchiveError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Walk(#[from] WalkError),
}

impl Error {
    /// Errors writing results out can't be skipped like a bad entry can.
    pub fn is_output(&self) -> bool {
        matches!(self, Error::Io(IoError::Output { .. }))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
