use anyhow::{Context as AnyhowContext, Result};
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

use crate::config::{Config, OutputFormat, SortMode};

const AFTER_HELP: &str = "\
A <MATCH> query is a filename, extension or pattern.
These are case-insensitive by default and should be quoted:

    'readme'   matches README, Readme, readme, etc.
    'file.txt' matches file.txt, File.txt, file.TXT, etc.
    '*.txt'    matches readme.txt, File.txt, DOC.TXT, etc.
    '*.tar*'   matches files.tar.gz, FILE.tarball, files.tar, files.tar.xz, etc.
    '*.tar.??' matches files.tar.gz, files.tar.xz, etc.

EXAMPLES:
    namzd 'readme' .
    namzd '*.go' /path/to/code
    namzd 'config' /etc --case-sensitive
    namzd '*.txt' /documents --count
    namzd 'backup*' /archives --archive --oldest

--archive and --destination cannot be used together.";

#[derive(Parser, Debug)]
#[command(name = "namzd", version)]
#[command(about = "Quickly find files by name or extension", long_about = None)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Filename, extension or pattern to match
    #[arg(value_name = "MATCH")]
    pub pattern: String,

    /// Paths to look up
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Also search within ZIP and TAR archives (not archives within archives)
    #[arg(short, long, conflicts_with = "destination")]
    pub archive: bool,

    /// Destination directory to copy matched files into
    #[arg(short = 'x', long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Case sensitive match
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Count the number of matches
    #[arg(short = 'n', long)]
    pub count: bool,

    /// Show the last modified time of the match (yyyy-mm-dd)
    #[arg(short = 'm', long)]
    pub last_modified: bool,

    /// Show the oldest file match
    #[arg(short, long)]
    pub oldest: bool,

    /// Show the newest file match
    #[arg(short = 'N', long)]
    pub newest: bool,

    /// Include directory matches
    #[arg(short, long, default_value_t = true, action = ArgAction::Set, value_name = "BOOL")]
    pub directory: bool,

    /// Display file and directory read or access errors
    #[arg(short, long)]
    pub errors: bool,

    /// Exit on any error, including file and directory read or access errors
    #[arg(short, long)]
    pub panic: bool,

    /// Follow symbolic links
    #[arg(short, long)]
    pub follow: bool,

    /// No color output
    #[arg(short = 'C', long)]
    pub no_color: bool,

    /// Number of walker threads, 0 leaves it to the app; ignored with --sort
    #[arg(short, long, default_value_t = 0, hide = true)]
    pub workers: usize,

    /// Visit order; sorted walks run on a single thread and ignore --workers
    #[arg(long, value_enum, default_value = "none")]
    pub sort: SortMode,

    /// Output format (text, json)
    #[arg(short = 'F', long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        if self.pattern.is_empty() {
            anyhow::bail!("Match pattern is required");
        }
        for path in &self.paths {
            validate_path(path)?;
        }
        Ok(())
    }

    pub fn config(&self, color: bool) -> Config {
        Config {
            archive: self.archive,
            case_sensitive: self.case_sensitive,
            count: self.count,
            directory: self.directory,
            follow: self.follow,
            last_modified: self.last_modified,
            oldest: self.oldest,
            newest: self.newest,
            panic: self.panic,
            report_errors: self.errors,
            destination: self.destination.clone(),
            workers: self.workers,
            sort: self.sort,
            format: self.format,
            color,
        }
    }
}

pub fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Path does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Path is not a directory: {}", path.display());
    }
    std::fs::read_dir(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}
