#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;

pub const PLAIN_FILES: [(&str, i32); 3] = [
    ("file_1996", 1996),
    ("file_1997.xyz", 1997),
    ("file_2002.zyx", 2002),
];

/// Entry names inside `archive.tar` and `archive.zip`.
pub const TAR_MATCH: &str = "file_1995";
pub const ZIP_MATCH: &str = "file_1994";

pub fn noon(year: i32) -> SystemTime {
    SystemTime::from(Utc.with_ymd_and_hms(year, 6, 1, 12, 0, 0).unwrap())
}

pub fn set_modified(path: &Path, time: SystemTime) {
    File::options()
        .write(true)
        .open(path)
        .unwrap()
        .set_modified(time)
        .unwrap();
}

/// A directory holding three dated plain files, an uncompressed TAR, a ZIP
/// and a compressed TAR whose magic bytes are hidden:
///
/// ```text
/// file_1996  file_1997.xyz  file_2002.zyx  archive.tar  archive.zip  archive.tar.xz
/// ```
pub fn scenario() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for (name, year) in PLAIN_FILES {
        let path = root.join(name);
        fs::write(&path, name).unwrap();
        set_modified(&path, noon(year));
    }

    write_tar(
        &root.join("archive.tar"),
        &[(TAR_MATCH, 1995), ("readme.txt", 2001)],
    );
    write_zip(
        &root.join("archive.zip"),
        &[(ZIP_MATCH, 1994), ("readme.txt", 2001)],
    );

    let mut compressed = vec![0xAAu8; 600];
    compressed[..6].copy_from_slice(&[0xFD, b'7', b'z', b'X', b'Z', 0x00]);
    fs::write(root.join("archive.tar.xz"), compressed).unwrap();

    temp_dir
}

pub fn write_tar(path: &Path, entries: &[(&str, i32)]) {
    let mut builder = tar::Builder::new(File::create(path).unwrap());
    for (name, year) in entries {
        let data = name.as_bytes();
        let mtime = Utc.with_ymd_and_hms(*year, 6, 1, 12, 0, 0).unwrap().timestamp();
        let mut header = tar::Header::new_ustar();
        header.set_path(name).unwrap();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_mtime(mtime as u64);
        header.set_cksum();
        builder.append(&header, data).unwrap();
    }
    builder.finish().unwrap();
}

pub fn write_zip(path: &Path, entries: &[(&str, i32)]) {
    let mut writer = zip::ZipWriter::new(File::create(path).unwrap());
    for (name, year) in entries {
        let stamp = zip::DateTime::from_date_and_time(*year as u16, 6, 1, 12, 0, 0).unwrap();
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored)
            .last_modified_time(stamp);
        writer.start_file(*name, options).unwrap();
        writer.write_all(name.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}
