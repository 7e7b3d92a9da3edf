//! plainfs CLI library

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plainfs_core::{FileInfo, FileType, FsConfig, LocalFs};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Re-export CLI types for testing
pub use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plainfs")]
#[command(about = "Filesystem operations with portable error reporting")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the contents of a file
    Read { path: String },

    /// Replace the contents of a file with --data, or stdin if absent
    Write {
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Append --data, or stdin if absent, to a file
    Append {
        path: String,
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Create an empty file, failing if it exists
    Touch { path: String },

    /// Print whether the path is a regular file
    IsFile { path: String },

    /// Print whether the path is a directory
    IsDir { path: String },

    /// Print whether the path is a symbolic link
    IsSymlink { path: String },

    /// Create a symbolic link at LINK pointing to TARGET
    Symlink { target: String, link: String },

    /// Create a directory
    Mkdir {
        path: String,
        /// Create missing parents as well
        #[arg(short, long)]
        parents: bool,
    },

    /// Delete files or directory trees
    Rm {
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// List the entries of a directory
    Ls { path: String },

    /// Recursively list every file under a directory
    Files { path: String },

    /// Copy a file
    Cp { src: String, dest: String },

    /// Recursively copy a directory
    CpDir { src: String, dest: String },

    /// Rename a file or directory
    Mv { src: String, dest: String },

    /// Set permissions from an octal mode such as 755
    Chmod {
        #[arg(value_parser = parse_octal)]
        mode: u32,
        path: String,
    },

    /// Print the current working directory
    Pwd,

    /// Print metadata as JSON
    Stat {
        path: String,
        /// Describe a symlink itself rather than its target
        #[arg(long)]
        no_follow: bool,
    },

    /// Delete everything inside a directory
    Clear { path: String },
}

fn parse_octal(value: &str) -> std::result::Result<u32, String> {
    let digits = value.strip_prefix("0o").unwrap_or(value);
    u32::from_str_radix(digits, 8).map_err(|e| format!("invalid octal mode '{}': {}", value, e))
}

#[derive(Serialize)]
struct StatReport {
    #[serde(flatten)]
    info: FileInfo,
    file_type: FileType,
    permissions: String,
}

impl From<FileInfo> for StatReport {
    fn from(info: FileInfo) -> Self {
        Self {
            file_type: info.file_type(),
            permissions: format!("{:03o}", info.permissions_octal()),
            info,
        }
    }
}

fn input_bytes(data: Option<String>) -> Result<Vec<u8>> {
    match data {
        Some(data) => Ok(data.into_bytes()),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

impl Commands {
    pub fn run<W: Write>(self, fs: &LocalFs, out: &mut W) -> Result<()> {
        match self {
            Commands::Read { path } => {
                let bits = fs.read_bits(&path).with_context(|| format!("failed to read {}", path))?;
                out.write_all(&bits)?;
            }
            Commands::Write { path, data } => {
                let bits = input_bytes(data)?;
                fs.write_bits(&path, &bits)
                    .with_context(|| format!("failed to write {}", path))?;
            }
            Commands::Append { path, data } => {
                let bits = input_bytes(data)?;
                fs.append_bits(&path, &bits)
                    .with_context(|| format!("failed to append to {}", path))?;
            }
            Commands::Touch { path } => {
                fs.create_file(&path).with_context(|| format!("failed to create {}", path))?;
            }
            Commands::IsFile { path } => {
                let answer = fs.is_file(&path).with_context(|| format!("failed to check {}", path))?;
                writeln!(out, "{}", answer)?;
            }
            Commands::IsDir { path } => {
                let answer = fs
                    .is_directory(&path)
                    .with_context(|| format!("failed to check {}", path))?;
                writeln!(out, "{}", answer)?;
            }
            Commands::IsSymlink { path } => {
                let answer = fs
                    .is_symlink(&path)
                    .with_context(|| format!("failed to check {}", path))?;
                writeln!(out, "{}", answer)?;
            }
            Commands::Symlink { target, link } => {
                fs.create_symlink(&target, &link)
                    .with_context(|| format!("failed to link {} -> {}", link, target))?;
            }
            Commands::Mkdir { path, parents } => {
                let result = if parents {
                    fs.create_directory_all(&path)
                } else {
                    fs.create_directory(&path)
                };
                result.with_context(|| format!("failed to create directory {}", path))?;
            }
            Commands::Rm { paths } => {
                fs.delete_all(paths.as_slice()).context("failed to delete")?;
            }
            Commands::Ls { path } => {
                let entries = fs
                    .read_directory(&path)
                    .with_context(|| format!("failed to list {}", path))?;
                for entry in entries {
                    writeln!(out, "{}", entry)?;
                }
            }
            Commands::Files { path } => {
                let files = fs
                    .get_files(&path)
                    .with_context(|| format!("failed to list files under {}", path))?;
                for file in files {
                    writeln!(out, "{}", file)?;
                }
            }
            Commands::Cp { src, dest } => {
                let copied = fs
                    .copy_file(&src, &dest)
                    .with_context(|| format!("failed to copy {} to {}", src, dest))?;
                writeln!(out, "{}", copied)?;
            }
            Commands::CpDir { src, dest } => {
                fs.copy_directory(&src, &dest)
                    .with_context(|| format!("failed to copy {} to {}", src, dest))?;
            }
            Commands::Mv { src, dest } => {
                fs.rename(&src, &dest)
                    .with_context(|| format!("failed to rename {} to {}", src, dest))?;
            }
            Commands::Chmod { mode, path } => {
                fs.set_permissions_octal(&path, mode)
                    .with_context(|| format!("failed to chmod {}", path))?;
            }
            Commands::Pwd => {
                let cwd = fs.current_directory().context("failed to get current directory")?;
                writeln!(out, "{}", cwd)?;
            }
            Commands::Stat { path, no_follow } => {
                let info = if no_follow {
                    fs.link_info(&path)
                } else {
                    fs.file_info(&path)
                }
                .with_context(|| format!("failed to stat {}", path))?;
                serde_json::to_writer_pretty(&mut *out, &StatReport::from(info))?;
                writeln!(out)?;
            }
            Commands::Clear { path } => {
                fs.clear_directory(&path)
                    .with_context(|| format!("failed to clear {}", path))?;
            }
        }
        Ok(())
    }
}

/// Load configuration from a JSON file, or the defaults when no file is given.
pub fn load_config(config_path: Option<&Path>) -> Result<FsConfig> {
    match config_path {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            let config: FsConfig = serde_json::from_str(&content)?;
            info!("Configuration loaded from {}: {:?}", path.display(), config);
            Ok(config)
        }
        None => Ok(FsConfig::default()),
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
