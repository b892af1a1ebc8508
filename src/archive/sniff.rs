use std::fs::File;
use std::io::Read;
use std::path::Path;

const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// `usta` of the USTAR `ustar` magic, found 257 bytes into the first header.
const TAR_MAGIC: [u8; 4] = *b"usta";
const TAR_MAGIC_OFFSET: usize = 257;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Zip,
    Tar,
}

impl ArchiveKind {
    /// ZIP is tried before TAR.
    pub fn detect(path: &Path) -> Option<Self> {
        if is_zip(path) {
            Some(Self::Zip)
        } else if is_tar(path) {
            Some(Self::Tar)
        } else {
            None
        }
    }
}

pub fn is_zip(path: &Path) -> bool {
    read_prefix::<4>(path, 0).is_some_and(|magic| magic == ZIP_MAGIC)
}

pub fn is_tar(path: &Path) -> bool {
    read_prefix::<4>(path, TAR_MAGIC_OFFSET).is_some_and(|magic| magic == TAR_MAGIC)
}

/// `N` bytes at `offset`, or `None` when the file can't be opened or is too
/// short.
fn read_prefix<const N: usize>(path: &Path, offset: usize) -> Option<[u8; N]> {
    let file = File::open(path).ok()?;
    let mut head = vec![0u8; offset + N];
    file.take((offset + N) as u64).read_exact(&mut head).ok()?;
    let mut magic = [0u8; N];
    magic.copy_from_slice(&head[offset..]);
    Some(magic)
}
