use std::io;

use anyhow::Result;
use plainfs_cli::{init_tracing, load_config, Cli, Parser};
use plainfs_core::LocalFs;
use tracing::debug;

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    debug!("Running {:?} with {:?}", cli.command, config);

    let fs = LocalFs::with_config(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    cli.command.run(&fs, &mut out)
}
