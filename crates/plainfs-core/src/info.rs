//! File metadata snapshots.

use std::fs::Metadata;

use serde::{Deserialize, Serialize};

use crate::error::FileResult;
use crate::permissions::FilePermissions;

const S_IFMT: u32 = 0o170_000;
const S_IFREG: u32 = 0o100_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;

/// Metadata of one filesystem entry, taken from a single stat call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Size in bytes.
    pub size: u64,
    /// Raw `st_mode`: file type bits plus permission bits.
    pub mode: u32,
    pub nlinks: u64,
    pub inode: u64,
    pub user_id: u32,
    pub group_id: u32,
    pub dev: u64,
    pub atime_seconds: i64,
    pub mtime_seconds: i64,
    pub ctime_seconds: i64,
}

/// Kind of entry described by a [`FileInfo`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Directory,
    Symlink,
    /// Sockets, fifos and device nodes.
    Other,
}

impl FileInfo {
    pub fn file_type(&self) -> FileType {
        match self.mode & S_IFMT {
            S_IFREG => FileType::File,
            S_IFDIR => FileType::Directory,
            S_IFLNK => FileType::Symlink,
            _ => FileType::Other,
        }
    }

    pub fn permissions(&self) -> FilePermissions {
        FilePermissions::from_octal(self.permissions_octal())
    }

    /// The nine permission bits of `mode`.
    pub fn permissions_octal(&self) -> u32 {
        self.mode & 0o777
    }
}

/// Build a [`FileInfo`] from stat metadata of `path`.
#[cfg(unix)]
pub(crate) fn from_metadata(_path: &str, metadata: &Metadata) -> FileResult<FileInfo> {
    use std::os::unix::fs::MetadataExt;

    Ok(FileInfo {
        size: metadata.size(),
        mode: metadata.mode(),
        nlinks: metadata.nlink(),
        inode: metadata.ino(),
        user_id: metadata.uid(),
        group_id: metadata.gid(),
        dev: metadata.dev(),
        atime_seconds: metadata.atime(),
        mtime_seconds: metadata.mtime(),
        ctime_seconds: metadata.ctime(),
    })
}

#[cfg(not(unix))]
pub(crate) fn from_metadata(path: &str, _metadata: &Metadata) -> FileResult<FileInfo> {
    Err(crate::error::FileError::Unknown(format!(
        "file '{path}': platform metadata has no inode, owner or device fields"
    )))
}
