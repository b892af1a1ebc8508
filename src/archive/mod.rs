//! Name matching inside ZIP and TAR files without extracting them.
//!
//! Archives are recognised by their magic bytes, never by extension, so a
//! compressed `.tar.gz` or `.tar.xz` is not an archive here.

mod sniff;
mod tar_index;
mod zip_index;

pub use sniff::{is_tar, is_zip, ArchiveKind};
pub use tar_index::list_tar_entries;
pub use zip_index::list_zip_entries;

use std::path::Path;
use tracing::trace;

use crate::config::Config;
use crate::error::ArchiveError;
use crate::find::Find;
use crate::matcher::Matcher;

/// The matching entries of `path` when archive mode is on and it is a ZIP or
/// TAR file. Anything else yields no entries.
pub fn list_entries(
    config: &Config,
    matcher: &Matcher,
    path: &Path,
) -> Result<Vec<Find>, ArchiveError> {
    if !config.archive {
        return Ok(Vec::new());
    }
    match ArchiveKind::detect(path) {
        Some(ArchiveKind::Zip) => {
            trace!(path = %path.display(), "indexing zip");
            list_zip_entries(matcher, path)
        }
        Some(ArchiveKind::Tar) => {
            trace!(path = %path.display(), "indexing tar");
            list_tar_entries(matcher, path)
        }
        None => Ok(Vec::new()),
    }
}

/// Last component of an in-archive name; both formats use `/` separators and
/// directories carry a trailing one.
fn base_name(name: &str) -> &str {
    let trimmed = name.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_base_name() {
        assert_eq!(base_name("file.txt"), "file.txt");
        assert_eq!(base_name("docs/notes/file.txt"), "file.txt");
        assert_eq!(base_name("docs/notes/"), "notes");
    }

    #[test]
    fn test_disabled_archive_mode_is_a_no_op() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.zip");
        fs::write(&path, [0x50, 0x4B, 0x03, 0x04, 0xFF]).unwrap();

        let config = Config::default();
        let matcher = Matcher::new("*", &config).unwrap();
        assert!(list_entries(&config, &matcher, &path).unwrap().is_empty());
    }

    #[test]
    fn test_plain_file_has_no_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        fs::write(&path, "just text").unwrap();

        let config = Config {
            archive: true,
            ..Config::default()
        };
        let matcher = Matcher::new("*", &config).unwrap();
        assert!(list_entries(&config, &matcher, &path).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_zip_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.zip");
        fs::write(&path, [0x50, 0x4B, 0x03, 0x04, 0xFF, 0xFF]).unwrap();

        let config = Config {
            archive: true,
            ..Config::default()
        };
        let matcher = Matcher::new("*", &config).unwrap();
        let err = list_entries(&config, &matcher, &path).unwrap_err();
        assert!(err.to_string().contains("broken.zip"));
    }
}
