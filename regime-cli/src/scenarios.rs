//! CSV loader for batches of comparison scenarios.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter.
//!
//! | Column | Required | Notes |
//! |------------------|----------|------------------------------------------------|
//! | `name` | yes | Free text label for the scenario |
//! | `income` | yes | Gross income; non-numeric text reads as 0 |
//! | `senior` | no | `true` / `false`; empty means `false` |
//! | `old_deductions` | no | `id=amount` pairs separated by `;` |
//! | `new_deductions` | no | `id=amount` pairs separated by `;` |
//!
//! Every scenario starts from the regime's fixed deductions (the standard
//! deduction); listed pairs are clamped against the catalog and added on top.
//!
//! ### Example
//!
//! ```csv
//! name,income,senior,old_deductions,new_deductions
//! salaried,1500000,false,,
//! investor,3000000,false,section80C=150000;hra=2000000,employerNPS=100000
//! ```

use std::{fs::File, io::Read, path::Path};

use regime_core::{CatalogError, ClaimedDeductions, DeductionCatalog, Regime, parse_amount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    income: String,
    senior: Option<bool>,
    old_deductions: Option<String>,
    new_deductions: Option<String>,
}

/// One fully resolved comparison input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub gross_income: Decimal,
    pub is_senior_citizen: bool,
    pub old_claims: ClaimedDeductions,
    pub new_claims: ClaimedDeductions,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    #[error("cannot open scenario file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Bad structure, missing required column, or a malformed `senior` cell.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A deduction cell entry without an `=`. `row` is 1-based (header = row 0).
    #[error("malformed deduction '{entry}' on row {row}; expected ID=AMOUNT")]
    MalformedDeduction { entry: String, row: usize },

    #[error("row {row}: {source}")]
    Deduction {
        row: usize,
        #[source]
        source: CatalogError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parses a `;`-separated list of `id=amount` pairs and claims each one.
fn build_claims(
    catalog: &DeductionCatalog,
    regime: Regime,
    cell: Option<&str>,
    is_senior_citizen: bool,
    row_number: usize,
) -> Result<ClaimedDeductions, ScenarioLoadError> {
    let regime_catalog = catalog.for_regime(regime);
    let mut claims = regime_catalog.default_claims();

    let entries = cell
        .unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|e| !e.is_empty());

    for entry in entries {
        let (id, amount) =
            entry
                .split_once('=')
                .ok_or_else(|| ScenarioLoadError::MalformedDeduction {
                    entry: entry.to_string(),
                    row: row_number,
                })?;

        regime_catalog
            .claim(&mut claims, id.trim(), is_senior_citizen, parse_amount(amount))
            .map_err(|source| ScenarioLoadError::Deduction {
                row: row_number,
                source,
            })?;
    }

    Ok(claims)
}

fn convert_row(
    catalog: &DeductionCatalog,
    row: CsvRow,
    row_number: usize,
) -> Result<Scenario, ScenarioLoadError> {
    let is_senior_citizen = row.senior.unwrap_or(false);
    let old_claims = build_claims(
        catalog,
        Regime::Old,
        row.old_deductions.as_deref(),
        is_senior_citizen,
        row_number,
    )?;
    let new_claims = build_claims(
        catalog,
        Regime::New,
        row.new_deductions.as_deref(),
        is_senior_citizen,
        row_number,
    )?;

    Ok(Scenario {
        name: row.name,
        gross_income: parse_amount(&row.income),
        is_senior_citizen,
        old_claims,
        new_claims,
    })
}

/// Reads scenarios from any [`Read`] source.
pub fn load_from_reader<R: Read>(
    catalog: &DeductionCatalog,
    reader: R,
) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut scenarios = Vec::new();
    for (idx, result) in csv_reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        scenarios.push(convert_row(catalog, row, idx + 1)?);
    }

    debug!(count = scenarios.len(), "loaded scenarios");
    Ok(scenarios)
}

pub fn load_from_file(
    catalog: &DeductionCatalog,
    path: &Path,
) -> Result<Vec<Scenario>, ScenarioLoadError> {
    let file = File::open(path).map_err(|source| ScenarioLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_reader(catalog, file)
}
