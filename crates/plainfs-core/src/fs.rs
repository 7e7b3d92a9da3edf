//! Host filesystem operations.
//!
//! Each method cleans its path arguments, performs one native action through
//! [`attempt`], and returns a [`FileResult`]. Nothing is cached between calls
//! and every handle opened here is closed before the method returns.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};

use tracing::trace;

use crate::attempt::attempt;
use crate::config::FsConfig;
use crate::error::{FileError, FileResult};
use crate::info::{self, FileInfo};
use crate::path::{clean, join};
use crate::permissions::FilePermissions;

/// Filesystem operations against the host OS.
#[derive(Clone, Debug, Default)]
pub struct LocalFs {
    config: FsConfig,
}

impl LocalFs {
    /// Create with the default creation modes (0o666 files, 0o777 directories).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FsConfig {
        &self.config
    }

    fn open_options(&self) -> OpenOptions {
        #[allow(unused_mut)]
        let mut options = OpenOptions::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(self.config.file_mode);
        }
        options
    }

    fn dir_builder(&self, recursive: bool) -> fs::DirBuilder {
        let mut builder = fs::DirBuilder::new();
        builder.recursive(recursive);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(self.config.dir_mode);
        }
        builder
    }

    // Contents

    pub fn read_bits(&self, path: &str) -> FileResult<Vec<u8>> {
        let path = clean(path);
        attempt("read_bits", &path, || fs::read(&path))
    }

    /// Read a file as UTF-8 text; `NotUtf8` if the contents are not valid UTF-8.
    pub fn read(&self, path: &str) -> FileResult<String> {
        let bits = self.read_bits(path)?;
        attempt("read", path, || String::from_utf8(bits).map_err(|_| FileError::NotUtf8))
    }

    /// Write `bits` to `path`, creating the file or truncating existing contents.
    pub fn write_bits(&self, path: &str, bits: &[u8]) -> FileResult<()> {
        let path = clean(path);
        attempt("write_bits", &path, || {
            let mut file = self
                .open_options()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&path)?;
            file.write_all(bits)
        })
    }

    pub fn write(&self, path: &str, contents: &str) -> FileResult<()> {
        self.write_bits(path, contents.as_bytes())
    }

    /// Append `bits` to `path`, creating the file if it does not exist.
    pub fn append_bits(&self, path: &str, bits: &[u8]) -> FileResult<()> {
        let path = clean(path);
        attempt("append_bits", &path, || {
            let mut file = self.open_options().create(true).append(true).open(&path)?;
            file.write_all(bits)
        })
    }

    pub fn append(&self, path: &str, contents: &str) -> FileResult<()> {
        self.append_bits(path, contents.as_bytes())
    }

    /// Create an empty file. Fails with `AlreadyExists` if anything is at `path`.
    pub fn create_file(&self, path: &str) -> FileResult<()> {
        let path = clean(path);
        attempt("create_file", &path, || {
            self.open_options().write(true).create_new(true).open(&path).map(drop)
        })
    }

    // Existence checks. A missing path is `Ok(false)`, not an error.

    pub fn is_file(&self, path: &str) -> FileResult<bool> {
        let path = clean(path);
        attempt("is_file", &path, || exists_as(fs::metadata(&path), |m| m.is_file()))
    }

    /// Whether `path` itself is a symlink. The link is not followed.
    pub fn is_symlink(&self, path: &str) -> FileResult<bool> {
        let path = clean(path);
        attempt("is_symlink", &path, || {
            exists_as(fs::symlink_metadata(&path), |m| m.file_type().is_symlink())
        })
    }

    pub fn is_directory(&self, path: &str) -> FileResult<bool> {
        let path = clean(path);
        attempt("is_directory", &path, || exists_as(fs::metadata(&path), |m| m.is_dir()))
    }

    // Links and directories

    /// Create a symlink at `link` pointing to `target`. Neither path is
    /// cleaned, so relative targets are kept verbatim.
    pub fn create_symlink(&self, target: &str, link: &str) -> FileResult<()> {
        attempt("create_symlink", link, || symlink(target, link))
    }

    pub fn create_directory(&self, path: &str) -> FileResult<()> {
        let path = clean(path);
        attempt("create_directory", &path, || self.dir_builder(false).create(&path))
    }

    /// Create a directory and any missing parents. Succeeds if it already exists.
    pub fn create_directory_all(&self, path: &str) -> FileResult<()> {
        let path = clean(path);
        attempt("create_directory_all", &path, || self.dir_builder(true).create(&path))
    }

    /// Remove a file, a symlink, or a directory with everything beneath it.
    pub fn delete(&self, path: &str) -> FileResult<()> {
        let is_dir = matches!(self.is_directory(path), Ok(true));
        let path = clean(path);
        attempt("delete", &path, || {
            if is_dir {
                // removes only the link when `path` is a symlink to a directory
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            }
        })
    }

    /// Delete each path in order, stopping at the first failure.
    pub fn delete_all<S: AsRef<str>>(&self, paths: &[S]) -> FileResult<()> {
        for path in paths {
            self.delete(path.as_ref())?;
        }
        Ok(())
    }

    /// Delete every entry inside `path`, leaving the directory itself.
    pub fn clear_directory(&self, path: &str) -> FileResult<()> {
        for entry in self.read_directory(path)? {
            self.delete(&entry)?;
        }
        Ok(())
    }

    fn entry_names(&self, path: &str) -> FileResult<Vec<String>> {
        attempt("read_directory", path, || -> FileResult<Vec<String>> {
            let mut names = Vec::new();
            for entry in fs::read_dir(path)? {
                let name = entry?.file_name().into_string().map_err(|_| FileError::NotUtf8)?;
                names.push(name);
            }
            Ok(names)
        })
    }

    /// List the children of a directory as full paths, in the order the OS
    /// returns them.
    pub fn read_directory(&self, path: &str) -> FileResult<Vec<String>> {
        let path = clean(path);
        let names = self.entry_names(&path)?;
        Ok(names.iter().map(|name| join(&path, name)).collect())
    }

    /// Every non-directory entry beneath `path`, recursively. Directory checks
    /// follow symlinks.
    pub fn get_files(&self, path: &str) -> FileResult<Vec<String>> {
        trace!("collecting files under {}", path);
        let mut files = Vec::new();
        for entry in self.read_directory(path)? {
            if self.is_directory(&entry)? {
                files.extend(self.get_files(&entry)?);
            } else {
                files.push(entry);
            }
        }
        Ok(files)
    }

    // Copy and move

    /// Copy the contents of `src` to `dest`, creating or truncating `dest`.
    /// Returns the number of bytes copied.
    pub fn copy_file(&self, src: &str, dest: &str) -> FileResult<u64> {
        let src = clean(src);
        let dest = clean(dest);
        attempt("copy_file", &src, || {
            let mut reader = File::open(&src)?;
            let mut writer = self
                .open_options()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&dest)?;
            io::copy(&mut reader, &mut writer)
        })
    }

    /// Recursively copy the tree at `src` into `dest`, creating `dest` and any
    /// missing parents.
    pub fn copy_directory(&self, src: &str, dest: &str) -> FileResult<()> {
        let src = clean(src);
        let dest = clean(dest);
        trace!("copying directory {} to {}", src, dest);
        self.create_directory_all(&dest)?;
        for name in self.entry_names(&src)? {
            let from = join(&src, &name);
            let to = join(&dest, &name);
            if self.is_directory(&from)? {
                self.copy_directory(&from, &to)?;
            } else {
                self.copy_file(&from, &to)?;
            }
        }
        Ok(())
    }

    pub fn rename(&self, src: &str, dest: &str) -> FileResult<()> {
        let src = clean(src);
        let dest = clean(dest);
        attempt("rename", &src, || fs::rename(&src, &dest))
    }

    pub fn rename_directory(&self, src: &str, dest: &str) -> FileResult<()> {
        self.rename(src, dest)
    }

    // Permissions

    /// Set the mode of `path` from an octal value such as `0o755`.
    pub fn set_permissions_octal(&self, path: &str, mode: u32) -> FileResult<()> {
        let path = clean(path);
        attempt("set_permissions", &path, || chmod(&path, mode))
    }

    pub fn set_permissions(&self, path: &str, permissions: &FilePermissions) -> FileResult<()> {
        self.set_permissions_octal(path, permissions.to_octal())
    }

    // Process and metadata

    pub fn current_directory(&self) -> FileResult<String> {
        attempt("current_directory", ".", || -> FileResult<String> {
            let dir = std::env::current_dir()?;
            dir.into_os_string().into_string().map_err(|_| FileError::NotUtf8)
        })
    }

    /// Metadata of `path`, following symlinks.
    pub fn file_info(&self, path: &str) -> FileResult<FileInfo> {
        let path = clean(path);
        attempt("file_info", &path, || -> FileResult<FileInfo> {
            let metadata = fs::metadata(&path)?;
            info::from_metadata(&path, &metadata)
        })
    }

    /// Metadata of `path` itself; a symlink is not followed.
    pub fn link_info(&self, path: &str) -> FileResult<FileInfo> {
        let path = clean(path);
        attempt("link_info", &path, || -> FileResult<FileInfo> {
            let metadata = fs::symlink_metadata(&path)?;
            info::from_metadata(&path, &metadata)
        })
    }
}

fn exists_as(stat: io::Result<fs::Metadata>, check: impl FnOnce(&fs::Metadata) -> bool) -> io::Result<bool> {
    match stat {
        Ok(metadata) => Ok(check(&metadata)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

#[cfg(unix)]
fn symlink(target: &str, link: &str) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn symlink(_target: &str, _link: &str) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "symbolic links are not supported on this platform",
    ))
}

#[cfg(unix)]
fn chmod(path: &str, mode: u32) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn chmod(_path: &str, _mode: u32) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "octal permissions are not supported on this platform",
    ))
}
