use clap::Parser;
use tracing::debug;

use regime_cli::{cli::Cli, logging};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    debug!(command = ?cli.command, "starting");
    regime_cli::run(&cli)
}
