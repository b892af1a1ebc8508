use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

use super::base_name;
use crate::error::ArchiveError;
use crate::find::Find;
use crate::matcher::Matcher;

/// Walk the central directory of a ZIP file, keeping entries whose base name
/// matches. Entry bodies are never decompressed.
pub fn list_zip_entries(matcher: &Matcher, path: &Path) -> Result<Vec<Find>, ArchiveError> {
    let file = File::open(path).map_err(|e| ArchiveError::open(path, e))?;
    let mut archive =
        ZipArchive::new(BufReader::new(file)).map_err(|e| ArchiveError::zip(path, e))?;

    let mut finds = Vec::new();
    for index in 0..archive.len() {
        let entry = archive
            .by_index_raw(index)
            .map_err(|e| ArchiveError::zip(path, e))?;
        if !matcher.is_match(base_name(entry.name()), entry.is_dir()) {
            continue;
        }
        let modified = entry.last_modified().and_then(dos_time);
        finds.push(Find::new(entry.name(), modified));
    }
    Ok(finds)
}

/// ZIP stores zone-less MS-DOS times; they are read as UTC.
fn dos_time(time: zip::DateTime) -> Option<DateTime<Utc>> {
    let naive = NaiveDate::from_ymd_opt(
        i32::from(time.year()),
        u32::from(time.month()),
        u32::from(time.day()),
    )?
    .and_hms_opt(
        u32::from(time.hour()),
        u32::from(time.minute()),
        u32::from(time.second()),
    )?;
    Some(Utc.from_utc_datetime(&naive))
}
