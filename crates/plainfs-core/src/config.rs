//! Configuration types for plainfs

use serde::{Deserialize, Serialize};

/// Mode for newly created files, before the umask is applied.
pub const DEFAULT_FILE_MODE: u32 = 0o666;
/// Mode for newly created directories, before the umask is applied.
pub const DEFAULT_DIR_MODE: u32 = 0o777;

fn default_file_mode() -> u32 {
    DEFAULT_FILE_MODE
}

fn default_dir_mode() -> u32 {
    DEFAULT_DIR_MODE
}

/// Settings applied by [`crate::LocalFs`] when it creates entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsConfig {
    #[serde(default = "default_file_mode")]
    pub file_mode: u32,
    #[serde(default = "default_dir_mode")]
    pub dir_mode: u32,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
        }
    }
}
