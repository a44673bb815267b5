//! Loads the on-disk scenario fixture and runs it through the batch command.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use regime_cli::{
    cli::{BatchArgs, OutputFormat},
    commands,
    scenarios::{self, ScenarioLoadError},
};
use regime_core::{DeductionCatalog, Regime, TaxEngine};
use rust_decimal_macros::dec;

const CATALOG: DeductionCatalog = DeductionCatalog::fy2025_26();

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("scenarios.csv")
}

#[test]
fn fixture_loads_every_row() {
    let scenarios = scenarios::load_from_file(&CATALOG, &fixture_path()).unwrap();

    let names: Vec<_> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["salaried", "investor", "retiree", "break-even"]);
}

#[test]
fn fixture_rows_are_clamped_against_catalog() {
    let scenarios = scenarios::load_from_file(&CATALOG, &fixture_path()).unwrap();
    let retiree = &scenarios[2];

    assert!(retiree.is_senior_citizen);
    assert_eq!(retiree.old_claims.get("section80D"), dec!(50000));
    assert_eq!(retiree.old_claims.get("section80TTA"), dec!(10000));
    assert_eq!(retiree.old_claims.total(), dec!(110000));
    assert_eq!(retiree.new_claims.total(), dec!(50000));
}

#[test]
fn fixture_recommendations() {
    let scenarios = scenarios::load_from_file(&CATALOG, &fixture_path()).unwrap();
    let engine = TaxEngine::new(&CATALOG);

    let recommended: Vec<_> = scenarios
        .iter()
        .map(|s| {
            engine
                .compare_regimes(s.gross_income, &s.old_claims, &s.new_claims)
                .recommended_regime
        })
        .collect();

    // investor: old taxable 800,000 -> 72,500; new taxable 2,850,000 -> 375,000
    assert_eq!(
        recommended,
        vec![Regime::New, Regime::Old, Regime::New, Regime::New]
    );
}

#[test]
fn batch_text_report_has_one_section_per_scenario() {
    let args = BatchArgs {
        file: fixture_path(),
        format: OutputFormat::Text,
    };
    let mut buf = Vec::new();

    commands::batch(&CATALOG, &args, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();

    assert_eq!(text.matches("== ").count(), 4);
    assert!(text.contains("== retiree (income ₹900,000, senior citizen)"));
}

#[test]
fn batch_json_report_is_an_array() {
    let args = BatchArgs {
        file: fixture_path(),
        format: OutputFormat::Json,
    };
    let mut buf = Vec::new();

    commands::batch(&CATALOG, &args, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 4);
    assert_eq!(entries[1]["name"], "investor");
    assert_eq!(entries[1]["recommended_regime"], "old");
}

#[test]
fn missing_file_is_io_error() {
    let result = scenarios::load_from_file(&CATALOG, Path::new("/this/path/does/not/exist.csv"));

    assert!(matches!(result, Err(ScenarioLoadError::Io { .. })));
}
