use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use regime_core::Regime;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compare income tax under the old and new regimes (FY 2025-26).
///
/// Amounts are plain numbers in rupees; comma grouping is accepted and
/// anything non-numeric is read as zero.
#[derive(Debug, Parser)]
#[command(name = "regime-compare", version, about)]
pub struct Cli {
    /// Log filter, e.g. `debug` or `regime_core=trace`. Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute tax under both regimes and recommend the cheaper one.
    Compare(CompareArgs),

    /// List the deductions each regime accepts.
    Catalog(CatalogArgs),

    /// Print the slab tables of both regimes.
    Slabs,

    /// Compare every scenario in a CSV file.
    Batch(BatchArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Gross annual income.
    #[arg(long, allow_hyphen_values = true)]
    pub income: String,

    /// Apply senior-citizen deduction caps.
    #[arg(long)]
    pub senior: bool,

    /// Old-regime deduction as `id=amount`. Repeatable.
    #[arg(long = "old", value_name = "ID=AMOUNT", value_parser = parse_claim_arg)]
    pub old_claims: Vec<ClaimArg>,

    /// New-regime deduction as `id=amount`. Repeatable.
    #[arg(long = "new", value_name = "ID=AMOUNT", value_parser = parse_claim_arg)]
    pub new_claims: Vec<ClaimArg>,

    /// Also print the per-slab tax breakdown.
    #[arg(long)]
    pub breakdown: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Only list this regime.
    #[arg(long, value_enum)]
    pub regime: Option<RegimeArg>,

    /// Show caps as they apply to a senior citizen.
    #[arg(long)]
    pub senior: bool,
}

#[derive(Debug, Args)]
pub struct BatchArgs {
    /// CSV file with `name,income,senior,old_deductions,new_deductions` columns.
    #[arg(short, long)]
    pub file: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegimeArg {
    Old,
    New,
}

impl From<RegimeArg> for Regime {
    fn from(arg: RegimeArg) -> Self {
        match arg {
            RegimeArg::Old => Regime::Old,
            RegimeArg::New => Regime::New,
        }
    }
}

/// A raw `id=amount` pair. The amount stays text until it reaches the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimArg {
    pub id: String,
    pub amount: String,
}

pub fn parse_claim_arg(s: &str) -> Result<ClaimArg, String> {
    let (id, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=AMOUNT, got '{s}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing deduction id in '{s}'"));
    }
    Ok(ClaimArg {
        id: id.to_string(),
        amount: amount.trim().to_string(),
    })
}
