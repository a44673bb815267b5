pub mod cli;
pub mod commands;
pub mod logging;
pub mod report;
pub mod scenarios;

use std::io::{self, Write};

use anyhow::Result;
use regime_core::DeductionCatalog;

use crate::cli::{Cli, Command};

/// Runs one parsed invocation against the FY 2025-26 catalog, writing to stdout.
pub fn run(cli: &Cli) -> Result<()> {
    let catalog = DeductionCatalog::fy2025_26();
    catalog.validate()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&catalog, &cli.command, &mut out)?;
    out.flush()?;
    Ok(())
}

pub fn dispatch<W: Write>(
    catalog: &DeductionCatalog,
    command: &Command,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Compare(args) => commands::compare(catalog, args, out),
        Command::Catalog(args) => commands::catalog(catalog, args, out),
        Command::Slabs => commands::slabs(out),
        Command::Batch(args) => commands::batch(catalog, args, out),
    }
}
