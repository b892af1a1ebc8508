use chrono::DateTime;
use std::fs::File;
use std::path::Path;
use tar::Archive;
use tracing::debug;

use super::base_name;
use crate::error::ArchiveError;
use crate::find::Find;
use crate::matcher::Matcher;

/// Read the header stream of an uncompressed TAR file, seeking over entry
/// bodies, and keep entries whose base name matches.
///
/// An entry with an unreadable name is skipped; a broken header stream fails
/// the whole listing.
pub fn list_tar_entries(matcher: &Matcher, path: &Path) -> Result<Vec<Find>, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::open(path, e))?;
    let mut archive = Archive::new(file);
    let entries = archive
        .entries_with_seek()
        .map_err(|e| ArchiveError::tar(path, e))?;

    let mut finds = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ArchiveError::tar(path, e))?;
        let name = match entry.path() {
            Ok(name) => name.to_string_lossy().into_owned(),
            Err(e) => {
                debug!(archive = %path.display(), error = %e, "skipping tar entry");
                continue;
            }
        };
        let header = entry.header();
        if !matcher.is_match(base_name(&name), header.entry_type().is_dir()) {
            continue;
        }
        let modified = header
            .mtime()
            .ok()
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
        finds.push(Find::new(name, modified));
    }
    Ok(finds)
}
