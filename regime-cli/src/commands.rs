//! Subcommand handlers. Each writes its report to the given writer.

use std::io::Write;

use anyhow::{Context, Result};
use regime_core::{ClaimedDeductions, DeductionCatalog, Regime, TaxEngine, TaxSchedule, parse_amount};
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    cli::{BatchArgs, CatalogArgs, ClaimArg, CompareArgs, OutputFormat},
    report, scenarios,
};

/// Starts from the regime's fixed deductions and claims each pair on top.
fn claims_from_args(
    engine: &TaxEngine<'_>,
    regime: Regime,
    is_senior_citizen: bool,
    args: &[ClaimArg],
) -> Result<ClaimedDeductions> {
    let catalog = engine.catalog(regime);
    let mut claims = catalog.default_claims();
    for arg in args {
        let stored = catalog
            .claim(&mut claims, &arg.id, is_senior_citizen, parse_amount(&arg.amount))
            .with_context(|| format!("cannot claim '{}={}'", arg.id, arg.amount))?;
        debug!(regime = regime.as_str(), deduction = %arg.id, %stored, "claimed deduction");
    }
    Ok(claims)
}

fn write_json<W: Write, T: Serialize + ?Sized>(
    out: &mut W,
    value: &T,
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("failed to serialize report")?;
    writeln!(out)?;
    Ok(())
}

pub fn compare<W: Write>(
    catalog: &DeductionCatalog,
    args: &CompareArgs,
    out: &mut W,
) -> Result<()> {
    let engine = TaxEngine::new(catalog);
    let gross_income = parse_amount(&args.income);
    let old_claims = claims_from_args(&engine, Regime::Old, args.senior, &args.old_claims)?;
    let new_claims = claims_from_args(&engine, Regime::New, args.senior, &args.new_claims)?;

    let result = engine.compare_regimes(gross_income, &old_claims, &new_claims);
    info!(
        recommended = result.recommended_regime.as_str(),
        savings = %result.savings_amount,
        "comparison complete"
    );

    let breakdowns: Vec<_> = if args.breakdown {
        [(Regime::New, &new_claims), (Regime::Old, &old_claims)]
            .into_iter()
            .map(|(regime, claims)| {
                let taxable = engine.compute_taxable_income(gross_income, claims);
                engine.compute_breakdown(regime, taxable)
            })
            .collect()
    } else {
        Vec::new()
    };

    match args.format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct CompareReport<'a> {
                gross_income: rust_decimal::Decimal,
                is_senior_citizen: bool,
                old_claims: &'a ClaimedDeductions,
                new_claims: &'a ClaimedDeductions,
                #[serde(flatten)]
                result: regime_core::TaxComparisonResult,
                #[serde(skip_serializing_if = "Vec::is_empty")]
                breakdowns: Vec<regime_core::TaxBreakdown>,
            }

            write_json(
                out,
                &CompareReport {
                    gross_income,
                    is_senior_citizen: args.senior,
                    old_claims: &old_claims,
                    new_claims: &new_claims,
                    result,
                    breakdowns,
                },
            )
        }
        OutputFormat::Text => {
            report::write_comparison(out, &result)?;
            for breakdown in &breakdowns {
                writeln!(out)?;
                report::write_breakdown(out, breakdown)?;
            }
            Ok(())
        }
    }
}

pub fn catalog<W: Write>(
    catalog: &DeductionCatalog,
    args: &CatalogArgs,
    out: &mut W,
) -> Result<()> {
    let regimes: Vec<Regime> = match args.regime {
        Some(regime) => vec![regime.into()],
        None => Regime::ALL.to_vec(),
    };

    for (i, regime) in regimes.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        report::write_catalog(out, &catalog.for_regime(regime), args.senior)?;
    }
    Ok(())
}

pub fn slabs<W: Write>(out: &mut W) -> Result<()> {
    for regime in Regime::ALL {
        report::write_slabs(out, TaxSchedule::for_regime(regime))?;
        writeln!(out)?;
    }
    report::write_notes(out)?;
    Ok(())
}

pub fn batch<W: Write>(
    catalog: &DeductionCatalog,
    args: &BatchArgs,
    out: &mut W,
) -> Result<()> {
    let scenarios = scenarios::load_from_file(catalog, &args.file)
        .with_context(|| format!("failed to load scenarios from {}", args.file.display()))?;
    info!(count = scenarios.len(), file = %args.file.display(), "running batch");

    let engine = TaxEngine::new(catalog);
    let results: Vec<_> = scenarios
        .iter()
        .map(|s| engine.compare_regimes(s.gross_income, &s.old_claims, &s.new_claims))
        .collect();

    match args.format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct BatchEntry<'a> {
                #[serde(flatten)]
                scenario: &'a scenarios::Scenario,
                #[serde(flatten)]
                result: &'a regime_core::TaxComparisonResult,
            }

            let entries: Vec<_> = scenarios
                .iter()
                .zip(&results)
                .map(|(scenario, result)| BatchEntry { scenario, result })
                .collect();
            write_json(out, &entries)
        }
        OutputFormat::Text => {
            for (i, (scenario, result)) in scenarios.iter().zip(&results).enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                report::write_scenario(out, scenario, result)?;
            }
            Ok(())
        }
    }
}
