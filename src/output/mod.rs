mod color;
mod formatter;

pub use color::Palette;
pub use formatter::Formatter;

use chrono::{DateTime, Utc};
use std::io::Write;
use std::path::Path;

use crate::error::IoError;
use crate::find::Find;
use crate::tracker::{Extreme, Match};

/// Result writer plus the running count of one invocation.
///
/// The count is bumped and the line written in the same call so that, behind
/// a lock, every printed count belongs to exactly one line.
pub struct Sink<'a, W: Write> {
    out: &'a mut W,
    count: usize,
    formatter: Formatter,
}

impl<'a, W: Write> Sink<'a, W> {
    pub fn new(out: &'a mut W, count: usize, formatter: Formatter) -> Self {
        Self {
            out,
            count,
            formatter,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// A file or directory matched by name.
    pub fn plain(
        &mut self,
        path: &Path,
        modified: Option<&DateTime<Utc>>,
    ) -> Result<usize, IoError> {
        self.count += 1;
        self.formatter
            .plain(&mut *self.out, self.count, path, modified)
            .map_err(IoError::output)?;
        Ok(self.count)
    }

    /// An entry matched inside `archive`.
    pub fn archived(&mut self, archive: &Path, find: &Find) -> Result<usize, IoError> {
        self.count += 1;
        self.formatter
            .archived(&mut *self.out, self.count, archive, find)
            .map_err(IoError::output)?;
        Ok(self.count)
    }

    pub fn summary(&mut self, extreme: Extreme, best: &Match) -> Result<(), IoError> {
        self.formatter
            .summary(&mut *self.out, extreme, best)
            .map_err(IoError::output)
    }

    pub fn flush(&mut self) -> Result<(), IoError> {
        self.out.flush().map_err(IoError::output)
    }
}
