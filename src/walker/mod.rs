//! Traversal driver.
//!
//! A [`Finder`] walks one or more roots, matching every entry by name (and,
//! in archive mode, by the names inside ZIP and TAR files), printing each
//! match and feeding the oldest/newest trackers.
//!
//! Unsorted walks run on the `ignore` crate's parallel walker, so the entry
//! callback runs on several threads at once. Counting and writing share one
//! lock; the trackers carry their own.

mod ordered;
mod parallel;
mod visit;

use parking_lot::Mutex;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::{Config, SortMode};
use crate::copy;
use crate::error::{Error, IoError, Result};
use crate::find::Find;
use crate::matcher::Matcher;
use crate::output::{Formatter, Sink};
use crate::tracker::{Extreme, Extremes};
use visit::Session;

pub struct Finder {
    config: Config,
    matcher: Matcher,
    errors: Mutex<Box<dyn Write + Send>>,
}

impl Finder {
    /// Fails when `pattern` is not a valid glob.
    pub fn new(config: Config, pattern: &str) -> Result<Self> {
        let matcher = Matcher::new(pattern, &config)?;
        Ok(Self {
            config,
            matcher,
            errors: Mutex::new(Box::new(io::stderr())),
        })
    }

    /// Send reported errors somewhere other than stderr.
    pub fn with_error_writer(self, writer: impl Write + Send + 'static) -> Self {
        Self {
            errors: Mutex::new(Box::new(writer)),
            ..self
        }
    }

    /// Walk every root in order with one running count, then print the
    /// oldest/newest summary once. Returns the final count.
    ///
    /// When a root fails, `panic` aborts the remaining roots, `report_errors`
    /// reports it and moves on, and otherwise the error is returned.
    pub fn walk_all<W, P>(&self, out: &mut W, roots: &[P]) -> Result<usize>
    where
        W: Write + Send,
        P: AsRef<Path>,
    {
        let extremes = Extremes::new();
        let mut sink = Sink::new(out, 0, Formatter::new(&self.config));

        let mut walked = Ok(());
        for root in roots {
            let root = root.as_ref();
            if let Err(err) = self.walk_root(&mut sink, &extremes, root) {
                if self.config.report_errors && !self.config.panic && !err.is_output() {
                    self.report(&err);
                    continue;
                }
                walked = Err(err);
                break;
            }
        }

        let summarized = self.summarize(&mut sink, &extremes);
        walked?;
        summarized?;
        sink.flush()?;
        Ok(sink.count())
    }

    /// Walk a single root, continuing the running count from `count`, and
    /// print the summary for this root alone. Returns the new count.
    pub fn walk<W: Write + Send>(
        &self,
        out: &mut W,
        count: usize,
        root: impl AsRef<Path>,
    ) -> Result<usize> {
        let extremes = Extremes::new();
        let mut sink = Sink::new(out, count, Formatter::new(&self.config));

        let walked = self.walk_root(&mut sink, &extremes, root.as_ref());
        let summarized = self.summarize(&mut sink, &extremes);
        walked?;
        summarized?;
        sink.flush()?;
        Ok(sink.count())
    }

    fn walk_root<W: Write + Send>(
        &self,
        sink: &mut Sink<'_, W>,
        extremes: &Extremes,
        root: &Path,
    ) -> Result<()> {
        check_root(root)?;
        debug!(
            root = %root.display(),
            pattern = self.matcher.as_str(),
            sort = self.config.sort.as_str(),
            "walking"
        );

        if workers_ignored(&self.config) {
            warn!(
                workers = self.config.workers,
                sort = self.config.sort.as_str(),
                "sorted walks are single-threaded, ignoring workers"
            );
        }

        let session = Session::new(self, sink, extremes);
        match self.config.sort {
            SortMode::None => parallel::walk(root, &self.config, |entry| session.visit(entry)),
            SortMode::Name | SortMode::DirsFirst => {
                ordered::walk(root, &self.config, |entry| session.visit(entry))
            }
        }
        session.finish()
    }

    fn summarize<W: Write>(&self, sink: &mut Sink<'_, W>, extremes: &Extremes) -> Result<()> {
        for tracker in [&extremes.oldest, &extremes.newest] {
            let wanted = match tracker.extreme() {
                Extreme::Oldest => self.config.oldest,
                Extreme::Newest => self.config.newest,
            };
            if !wanted {
                continue;
            }
            if let Some(best) = tracker.get() {
                sink.summary(tracker.extreme(), &best)?;
            }
        }
        Ok(())
    }

    fn track(&self, extremes: &Extremes, count: usize, path: &Path, find: &Find) {
        if self.config.oldest {
            extremes.oldest.update(count, path, find);
        }
        if self.config.newest {
            extremes.newest.update(count, path, find);
        }
    }

    /// Best effort: failures are only ever reported, never fatal.
    fn copy_match(&self, path: &Path) {
        let Some(dir) = self.config.destination.as_deref() else {
            return;
        };
        let Some(name) = path.file_name() else {
            return;
        };
        if self.config.archive {
            return;
        }
        if let Err(err) = copy::copy(path, &dir.join(name)) {
            debug!(path = %path.display(), error = %err, "copy failed");
            if self.config.report_errors {
                self.report(&err.into());
            }
        }
    }

    fn report(&self, err: &Error) {
        let mut errors = self.errors.lock();
        if let Err(e) = writeln!(errors, "{err}") {
            warn!(error = %e, "failed to report error");
        }
    }
}

fn workers_ignored(config: &Config) -> bool {
    config.workers != 0 && config.sort != SortMode::None
}

fn check_root(root: &Path) -> std::result::Result<(), IoError> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(IoError::not_a_directory(root)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(IoError::root_not_found(root)),
        Err(e) => Err(IoError::read_error(root, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    /// Shared buffer standing in for stderr.
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().clone()).unwrap()
        }
    }

    fn tree() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("docs/notes")).unwrap();
        fs::write(temp_dir.path().join("README.md"), "readme").unwrap();
        fs::write(temp_dir.path().join("docs/guide.md"), "guide").unwrap();
        fs::write(temp_dir.path().join("docs/notes/todo.txt"), "todo").unwrap();
        temp_dir
    }

    fn run(config: Config, pattern: &str, roots: &[&Path]) -> (Result<usize>, String) {
        let finder = Finder::new(config, pattern).unwrap();
        let mut out = Vec::new();
        let result = finder.walk_all(&mut out, roots);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_invalid_pattern_fails_up_front() {
        let err = Finder::new(Config::default(), "[md").err().unwrap();
        assert!(matches!(err, Error::Pattern(_)));
    }

    #[test]
    fn test_root_itself_is_not_reported() {
        let temp_dir = tree();
        let config = Config {
            directory: true,
            ..Config::default()
        };
        let (result, output) = run(config, "*", &[temp_dir.path()]);

        assert_eq!(result.unwrap(), 5);
        assert!(!output
            .lines()
            .any(|line| Path::new(line) == temp_dir.path()));
    }

    #[test]
    fn test_sorted_walk_is_deterministic() {
        let temp_dir = tree();
        let config = Config {
            directory: true,
            sort: SortMode::DirsFirst,
            count: true,
            ..Config::default()
        };
        let (result, output) = run(config, "*", &[temp_dir.path()]);
        assert_eq!(result.unwrap(), 5);

        let root = temp_dir.path();
        let expected = [
            root.join("docs"),
            root.join("docs/notes"),
            root.join("docs/notes/todo.txt"),
            root.join("docs/guide.md"),
            root.join("README.md"),
        ];
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), expected.len());
        for (index, (line, path)) in lines.iter().zip(expected.iter()).enumerate() {
            assert_eq!(*line, format!("{}\t{}", index + 1, path.display()));
        }
    }

    #[test]
    fn test_count_continues_across_roots() {
        let first = tree();
        let second = tree();
        let config = Config {
            count: true,
            ..Config::default()
        };
        let (result, output) = run(config, "*.md", &[first.path(), second.path()]);

        assert_eq!(result.unwrap(), 4);
        assert!(output.contains("4\t"));
    }

    #[test]
    fn test_missing_root_is_returned_by_default() {
        let temp_dir = tree();
        let missing = temp_dir.path().join("missing");
        let (result, _) = run(Config::default(), "*", &[missing.as_path(), temp_dir.path()]);

        let err = result.unwrap_err();
        assert!(matches!(err, Error::Io(IoError::RootNotFound { .. })));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_missing_root_reported_then_skipped() {
        let temp_dir = tree();
        let missing = temp_dir.path().join("missing");
        let errors = Captured::default();
        let config = Config {
            report_errors: true,
            ..Config::default()
        };
        let finder = Finder::new(config, "*.md")
            .unwrap()
            .with_error_writer(errors.clone());

        let mut out = Vec::new();
        let count = finder
            .walk_all(&mut out, &[missing.as_path(), temp_dir.path()])
            .unwrap();

        assert_eq!(count, 2);
        let expected = format!("{}: root not found\n", missing.display());
        assert_eq!(errors.text(), expected);
    }

    #[test]
    fn test_workers_only_ignored_for_sorted_walks() {
        let sorted = Config {
            workers: 4,
            sort: SortMode::Name,
            ..Config::default()
        };
        assert!(workers_ignored(&sorted));
        assert!(!workers_ignored(&Config {
            sort: SortMode::None,
            ..sorted.clone()
        }));
        assert!(!workers_ignored(&Config {
            workers: 0,
            ..sorted
        }));
    }

    #[test]
    fn test_panic_aborts_remaining_roots() {
        let temp_dir = tree();
        let missing = temp_dir.path().join("missing");
        let config = Config {
            panic: true,
            report_errors: true,
            ..Config::default()
        };
        let (result, output) = run(config, "*.md", &[missing.as_path(), temp_dir.path()]);

        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_file_root_is_rejected() {
        let temp_dir = tree();
        let file = temp_dir.path().join("README.md");
        let (result, _) = run(Config::default(), "*", &[file.as_path()]);
        assert!(matches!(
            result.unwrap_err(),
            Error::Io(IoError::NotADirectory { .. })
        ));
    }

    #[test]
    fn test_walk_continues_count_and_summarizes() {
        let temp_dir = tree();
        let config = Config {
            count: true,
            newest: true,
            ..Config::default()
        };
        let finder = Finder::new(config, "*.txt").unwrap();

        let mut out = Vec::new();
        let count = finder.walk(&mut out, 10, temp_dir.path()).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(count, 11);
        assert!(output.starts_with("11\t"));
        assert!(output.contains("Newest found match:\n11\ttodo.txt ("));
    }

    #[test]
    fn test_copies_matches_to_destination() {
        let temp_dir = tree();
        let destination = TempDir::new().unwrap();
        let config = Config {
            destination: Some(destination.path().to_path_buf()),
            ..Config::default()
        };
        let (result, _) = run(config, "*.md", &[temp_dir.path()]);

        assert_eq!(result.unwrap(), 2);
        assert_eq!(
            fs::read_to_string(destination.path().join("guide.md")).unwrap(),
            "guide"
        );
        assert!(destination.path().join("README.md").exists());
    }

    #[test]
    fn test_copy_failure_is_not_fatal() {
        let temp_dir = tree();
        let destination = temp_dir.path().join("gone");
        let errors = Captured::default();
        let config = Config {
            destination: Some(destination),
            report_errors: true,
            ..Config::default()
        };
        let finder = Finder::new(config, "*.md")
            .unwrap()
            .with_error_writer(errors.clone());

        let mut out = Vec::new();
        assert_eq!(finder.walk_all(&mut out, &[temp_dir.path()]).unwrap(), 2);
        assert!(errors.text().contains("failed to copy"));
    }
}
