//! plainfs core — filesystem operations with a closed error taxonomy
//!
//! Every operation on [`LocalFs`] returns a [`FileResult`]: either its success
//! value or exactly one [`FileError`] variant. Raw OS error codes are mapped
//! through a single static table (see [`FileError::from_raw_os_error`]), so
//! callers match on failure kinds instead of platform codes or message text.

pub mod attempt;
pub mod config;
mod errno;
pub mod error;
pub mod fs;
pub mod info;
pub mod path;
pub mod permissions;

// Re-export key types for convenience
pub use attempt::attempt;
pub use config::{FsConfig, DEFAULT_DIR_MODE, DEFAULT_FILE_MODE};
pub use error::{FileError, FileResult};
pub use fs::LocalFs;
pub use info::{FileInfo, FileType};
pub use permissions::{FilePermissions, Permission};
