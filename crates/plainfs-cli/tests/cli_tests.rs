use std::io::Write;

use plainfs_cli::{load_config, Cli, Commands, Parser};
use plainfs_core::{FileError, FsConfig, LocalFs};
use tempfile::{NamedTempFile, TempDir};

fn run(args: &[&str], fs: &LocalFs) -> anyhow::Result<String> {
    let cli = Cli::try_parse_from(args)?;
    let mut out = Vec::new();
    cli.command.run(fs, &mut out)?;
    Ok(String::from_utf8(out)?)
}

fn p(dir: &TempDir, rel: &str) -> String {
    dir.path().join(rel).to_str().unwrap().to_string()
}

#[test]
fn test_cli_parsing_mkdir_parents() {
    let args = vec!["plainfs", "mkdir", "-p", "/tmp/a/b"];

    let cli = Cli::try_parse_from(args).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Mkdir { parents: true, .. }
    ));
}

#[test]
fn test_cli_parsing_chmod_octal() {
    let cli = Cli::try_parse_from(vec!["plainfs", "chmod", "755", "/tmp/x"]).unwrap();
    assert!(matches!(cli.command, Commands::Chmod { mode: 0o755, .. }));

    let cli = Cli::try_parse_from(vec!["plainfs", "chmod", "0o640", "/tmp/x"]).unwrap();
    assert!(matches!(cli.command, Commands::Chmod { mode: 0o640, .. }));

    assert!(Cli::try_parse_from(vec!["plainfs", "chmod", "999", "/tmp/x"]).is_err());
}

#[test]
fn test_cli_parsing_global_config() {
    let cli = Cli::try_parse_from(vec!["plainfs", "pwd", "--config", "/etc/plainfs.json"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/etc/plainfs.json")));
    assert!(matches!(cli.command, Commands::Pwd));
}

#[test]
fn test_cli_parsing_rm_requires_paths() {
    assert!(Cli::try_parse_from(vec!["plainfs", "rm"]).is_err());
}

#[test]
fn test_write_read_and_checks() {
    let dir = TempDir::new().unwrap();
    let fs = LocalFs::new();
    let file = p(&dir, "x");

    run(&["plainfs", "write", &file, "--data", "hello"], &fs).unwrap();
    run(&["plainfs", "append", &file, "-d", " world"], &fs).unwrap();
    assert_eq!(run(&["plainfs", "read", &file], &fs).unwrap(), "hello world");
    assert_eq!(run(&["plainfs", "is-file", &file], &fs).unwrap(), "true\n");
    assert_eq!(run(&["plainfs", "is-dir", &file], &fs).unwrap(), "false\n");

    run(&["plainfs", "rm", &file], &fs).unwrap();
    assert_eq!(run(&["plainfs", "is-file", &file], &fs).unwrap(), "false\n");
}

#[test]
fn test_errors_carry_the_file_error() {
    let dir = TempDir::new().unwrap();
    let fs = LocalFs::new();

    let err = run(&["plainfs", "read", &p(&dir, "missing")], &fs).unwrap_err();
    assert_eq!(err.downcast_ref::<FileError>(), Some(&FileError::NotFound));
}

#[test]
fn test_copy_reports_byte_count() {
    let dir = TempDir::new().unwrap();
    let fs = LocalFs::new();
    let src = p(&dir, "src");
    let dest = p(&dir, "dest");
    fs.write(&src, "twelve bytes").unwrap();

    assert_eq!(run(&["plainfs", "cp", &src, &dest], &fs).unwrap(), "12\n");
    assert_eq!(fs.read(&dest), Ok("twelve bytes".to_string()));
}

#[test]
fn test_tree_commands() {
    let dir = TempDir::new().unwrap();
    let fs = LocalFs::new();
    let tree = p(&dir, "tree");

    run(&["plainfs", "mkdir", "--parents", &p(&dir, "tree/sub")], &fs).unwrap();
    run(&["plainfs", "touch", &p(&dir, "tree/sub/file")], &fs).unwrap();
    assert_eq!(run(&["plainfs", "ls", &tree], &fs).unwrap(), format!("{}\n", p(&dir, "tree/sub")));
    assert_eq!(
        run(&["plainfs", "files", &tree], &fs).unwrap(),
        format!("{}\n", p(&dir, "tree/sub/file"))
    );

    run(&["plainfs", "cp-dir", &tree, &p(&dir, "copy")], &fs).unwrap();
    assert_eq!(fs.is_file(&p(&dir, "copy/sub/file")), Ok(true));

    run(&["plainfs", "mv", &p(&dir, "copy"), &p(&dir, "moved")], &fs).unwrap();
    assert_eq!(fs.is_directory(&p(&dir, "moved/sub")), Ok(true));

    run(&["plainfs", "clear", &tree], &fs).unwrap();
    assert_eq!(run(&["plainfs", "ls", &tree], &fs).unwrap(), "");
}

#[cfg(unix)]
#[test]
fn test_stat_outputs_json() {
    let dir = TempDir::new().unwrap();
    let fs = LocalFs::new();
    let file = p(&dir, "file");
    let link = p(&dir, "link");
    fs.write(&file, "abc").unwrap();
    run(&["plainfs", "chmod", "640", &file], &fs).unwrap();
    run(&["plainfs", "symlink", &file, &link], &fs).unwrap();

    let stat: serde_json::Value = serde_json::from_str(&run(&["plainfs", "stat", &link], &fs).unwrap()).unwrap();
    assert_eq!(stat["size"], 3);
    assert_eq!(stat["file_type"], "file");
    assert_eq!(stat["permissions"], "640");

    let lstat: serde_json::Value =
        serde_json::from_str(&run(&["plainfs", "stat", "--no-follow", &link], &fs).unwrap()).unwrap();
    assert_eq!(lstat["file_type"], "symlink");
}

#[test]
fn test_config_loading_default() {
    let config = load_config(None).unwrap();
    assert_eq!(config, FsConfig::default());
}

#[test]
fn test_config_loading_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"{{"file_mode": 384, "dir_mode": 448}}"#).unwrap();

    let config = load_config(Some(temp_file.path())).unwrap();
    assert_eq!(config.file_mode, 0o600);
    assert_eq!(config.dir_mode, 0o700);
}

#[test]
fn test_config_loading_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "not json").unwrap();
    assert!(load_config(Some(temp_file.path())).is_err());
}
