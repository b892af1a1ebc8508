use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use super::Palette;
use crate::config::{Config, OutputFormat};
use crate::find::{format_date, Find};
use crate::tracker::{Extreme, Match};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Kind {
    Match,
    Archive,
    Oldest,
    Newest,
}

/// One JSON line.
#[derive(Debug, Serialize)]
struct Record<'a> {
    kind: Kind,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
    name: &'a str,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    modified: Option<String>,
}

/// Renders result lines.
///
/// Text lines:
///
/// ```text
/// [count\t][(yyyy-mm-dd) ]path                 file or directory match
/// [count\t]name[ (yyyy-mm-dd)] > archive      archive entry or summary
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    format: OutputFormat,
    palette: Palette,
    count: bool,
    last_modified: bool,
}

impl Formatter {
    pub fn new(config: &Config) -> Self {
        Self {
            format: config.format,
            palette: Palette::new(config.color),
            count: config.count,
            last_modified: config.last_modified,
        }
    }

    pub fn plain(
        &self,
        out: &mut impl Write,
        count: usize,
        path: &Path,
        modified: Option<&DateTime<Utc>>,
    ) -> io::Result<()> {
        let date = modified.filter(|_| self.last_modified).map(format_date);
        match self.format {
            OutputFormat::Json => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy())
                    .unwrap_or_default();
                self.record(
                    out,
                    Record {
                        kind: Kind::Match,
                        count: self.count.then_some(count),
                        name: &name,
                        path: path.display().to_string(),
                        modified: date,
                    },
                )
            }
            OutputFormat::Text => {
                let mut line = self.prefix(count);
                if let Some(date) = date {
                    line.push_str(&format!("({}) ", self.palette.date(date)));
                }
                line.push_str(&self.palette.path(path.display()));
                writeln!(out, "{line}")
            }
        }
    }

    pub fn archived(
        &self,
        out: &mut impl Write,
        count: usize,
        archive: &Path,
        find: &Find,
    ) -> io::Result<()> {
        self.entry(out, Kind::Archive, count, archive, find, self.last_modified)
    }

    /// The labelled oldest or newest line, always dated.
    pub fn summary(&self, out: &mut impl Write, extreme: Extreme, best: &Match) -> io::Result<()> {
        let kind = match extreme {
            Extreme::Oldest => Kind::Oldest,
            Extreme::Newest => Kind::Newest,
        };
        if self.format == OutputFormat::Text {
            writeln!(out, "{}", self.palette.header(extreme.label()))?;
        }
        self.entry(out, kind, best.count, &best.path, &best.find, true)
    }

    fn entry(
        &self,
        out: &mut impl Write,
        kind: Kind,
        count: usize,
        path: &Path,
        find: &Find,
        dated: bool,
    ) -> io::Result<()> {
        let date = find.date().filter(|_| dated);
        match self.format {
            OutputFormat::Json => self.record(
                out,
                Record {
                    kind,
                    count: self.count.then_some(count),
                    name: &find.name,
                    path: path.display().to_string(),
                    modified: date,
                },
            ),
            OutputFormat::Text => {
                let mut line = self.prefix(count);
                line.push_str(&self.palette.name(&find.name));
                if let Some(date) = date {
                    line.push_str(&format!(" ({})", self.palette.date(date)));
                }
                line.push_str(" > ");
                line.push_str(&self.palette.path(path.display()));
                writeln!(out, "{line}")
            }
        }
    }

    fn prefix(&self, count: usize) -> String {
        if self.count && count > 0 {
            format!("{}\t", self.palette.count(count))
        } else {
            String::new()
        }
    }

    fn record(&self, out: &mut impl Write, record: Record<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut *out, &record)?;
        out.write_all(b"\n")
    }
}
