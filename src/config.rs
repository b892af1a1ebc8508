//! Per-run behaviour flags shared by every walk.

use clap::ValueEnum;
use std::path::PathBuf;

/// Order in which directory entries are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortMode {
    /// Unordered, visited by a pool of worker threads.
    #[default]
    None,
    /// Entries of each directory sorted by file name.
    Name,
    /// Directories before files, then by file name.
    DirsFirst,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Immutable for the duration of a walk.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Also look for matches inside ZIP and TAR files.
    pub archive: bool,
    pub case_sensitive: bool,
    /// Prefix each result with its running count.
    pub count: bool,
    /// Allow directories to match.
    pub directory: bool,
    pub follow: bool,
    /// Show the `(yyyy-mm-dd)` modification date of each result.
    pub last_modified: bool,
    pub oldest: bool,
    pub newest: bool,
    /// Abort on the first error of any kind.
    pub panic: bool,
    /// Write skipped errors to the error stream instead of dropping them.
    pub report_errors: bool,
    /// Copy every matched file into this directory.
    pub destination: Option<PathBuf>,
    /// Worker threads for the parallel walk, 0 lets the walker decide.
    pub workers: usize,
    pub sort: SortMode,
    pub format: OutputFormat,
    pub color: bool,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Name => "name",
            SortMode::DirsFirst => "dirs-first",
        }
    }
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}
