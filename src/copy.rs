//! Copying matched files to a destination directory.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::error::IoError;

/// Check that `dir` exists, is a directory and is writable, by creating and
/// removing a uniquely named probe file inside it.
pub fn check_destination(dir: &Path) -> Result<(), IoError> {
    let metadata = fs::metadata(dir).map_err(|e| IoError::read_error(dir, e))?;
    if !metadata.is_dir() {
        return Err(IoError::not_a_directory(dir));
    }
    tempfile::Builder::new()
        .prefix(".namzd-probe")
        .tempfile_in(dir)
        .map_err(|source| IoError::DestinationNotWritable {
            path: dir.to_path_buf(),
            source,
        })?;
    Ok(())
}

/// Copy `source` to `destination`, then give the copy the source's
/// permissions. A partially written destination is removed.
pub fn copy(source: &Path, destination: &Path) -> Result<u64, IoError> {
    let permissions = fs::metadata(source)
        .map_err(|e| IoError::read_error(source, e))?
        .permissions();
    let mut reader = File::open(source).map_err(|e| IoError::read_error(source, e))?;
    let mut writer =
        File::create(destination).map_err(|e| IoError::copy_error(source, destination, e))?;

    let written = match io::copy(&mut reader, &mut writer) {
        Ok(written) => written,
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(destination);
            return Err(IoError::copy_error(source, destination, e));
        }
    };
    fs::set_permissions(destination, permissions)
        .map_err(|e| IoError::copy_error(source, destination, e))?;
    Ok(written)
}
