use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::borrow::Cow;
use std::fs::{self, FileType};
use std::io::Write;
use std::path::PathBuf;
use tracing::trace;

use super::Finder;
use crate::archive;
use crate::error::{Error, Result, WalkError};
use crate::find::Find;
use crate::output::Sink;
use crate::tracker::Extremes;

/// Whether the walk should keep going after an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// One entry handed over by either walk back-end.
#[derive(Debug)]
pub(crate) struct Visited {
    path: PathBuf,
    file_type: Option<FileType>,
    follow: bool,
}

impl Visited {
    pub(crate) fn new(file_type: Option<FileType>, path: PathBuf, follow: bool) -> Self {
        Self {
            path,
            file_type,
            follow,
        }
    }

    fn is_dir(&self) -> bool {
        self.file_type.is_some_and(|t| t.is_dir())
    }

    fn is_file(&self) -> bool {
        self.file_type.is_some_and(|t| t.is_file())
    }

    /// Regular files, plus links to them when links are not followed.
    fn is_archive_candidate(&self) -> bool {
        match self.file_type {
            Some(t) if t.is_file() => true,
            Some(t) if t.is_symlink() => fs::metadata(&self.path).is_ok_and(|m| m.is_file()),
            _ => false,
        }
    }

    fn name(&self) -> Option<Cow<'_, str>> {
        self.path.file_name().map(|name| name.to_string_lossy())
    }

    fn modified(&self) -> Option<DateTime<Utc>> {
        let metadata = if self.follow {
            fs::metadata(&self.path)
        } else {
            fs::symlink_metadata(&self.path)
        }
        .ok()?;
        metadata.modified().ok().map(DateTime::<Utc>::from)
    }
}

/// State shared by every callback of one root's walk.
pub(crate) struct Session<'s, 'o, W: Write> {
    finder: &'s Finder,
    sink: Mutex<&'s mut Sink<'o, W>>,
    extremes: &'s Extremes,
    failure: Mutex<Option<Error>>,
}

impl<'s, 'o, W: Write + Send> Session<'s, 'o, W> {
    pub(crate) fn new(finder: &'s Finder, sink: &'s mut Sink<'o, W>, extremes: &'s Extremes) -> Self {
        Self {
            finder,
            sink: Mutex::new(sink),
            extremes,
            failure: Mutex::new(None),
        }
    }

    pub(crate) fn visit(&self, entry: std::result::Result<Visited, WalkError>) -> Flow {
        let handled = match entry {
            Ok(entry) => self.handle(&entry),
            Err(err) => Err(err.into()),
        };
        match handled {
            Ok(()) => Flow::Continue,
            Err(err) => self.fault(err),
        }
    }

    /// The first error that stopped the walk, if any.
    pub(crate) fn finish(self) -> Result<()> {
        match self.failure.into_inner() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn handle(&self, entry: &Visited) -> Result<()> {
        let finder = self.finder;
        let config = &finder.config;

        if config.archive && entry.is_archive_candidate() {
            let finds = archive::list_entries(config, &finder.matcher, &entry.path)?;
            if !finds.is_empty() {
                for find in &finds {
                    let count = self.sink.lock().archived(&entry.path, find)?;
                    finder.track(self.extremes, count, &entry.path, find);
                }
                return Ok(());
            }
        }

        let Some(name) = entry.name() else {
            return Ok(());
        };
        if !finder.matcher.is_match(&name, entry.is_dir()) {
            return Ok(());
        }
        if entry.is_file() {
            finder.copy_match(&entry.path);
        }

        let modified = if config.last_modified || config.oldest || config.newest {
            entry.modified()
        } else {
            None
        };
        let count = self.sink.lock().plain(&entry.path, modified.as_ref())?;
        let parent = entry.path.parent().unwrap_or(&entry.path);
        finder.track(self.extremes, count, parent, &Find::new(name, modified));
        Ok(())
    }

    fn fault(&self, err: Error) -> Flow {
        let config = &self.finder.config;
        if config.panic || err.is_output() {
            let mut failure = self.failure.lock();
            if failure.is_none() {
                *failure = Some(err);
            }
            return Flow::Quit;
        }
        if config.report_errors {
            self.finder.report(&err);
        } else {
            trace!(error = %err, "skipped");
        }
        Flow::Continue
    }
}
