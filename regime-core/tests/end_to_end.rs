//! End-to-end flow as a front end drives it: raw text in, recommendation out.

use pretty_assertions::assert_eq;
use regime_core::{
    CatalogError, ClaimedDeductions, DeductionCap, DeductionCatalog, Regime, TaxEngine,
    parse_amount,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

static CATALOG: DeductionCatalog = DeductionCatalog::fy2025_26();

/// Applies each raw `(id, text)` entry the way a form would: parse, clamp, store.
fn claim_all(
    engine: &TaxEngine<'_>,
    regime: Regime,
    is_senior_citizen: bool,
    entries: &[(&str, &str)],
) -> Result<ClaimedDeductions, CatalogError> {
    let catalog = engine.catalog(regime);
    let mut claims = catalog.default_claims();
    for (id, text) in entries {
        catalog.claim(&mut claims, id, is_senior_citizen, parse_amount(text))?;
    }
    Ok(claims)
}

#[test]
fn standard_deduction_only_recommends_new_regime() {
    let engine = TaxEngine::new(&CATALOG);
    let gross = parse_amount("15,00,000");
    let old = claim_all(&engine, Regime::Old, false, &[]).unwrap();
    let new = claim_all(&engine, Regime::New, false, &[]).unwrap();

    assert_eq!(engine.compute_taxable_income(gross, &old), dec!(1450000));
    assert_eq!(engine.compute_taxable_income(gross, &new), dec!(1450000));

    let result = engine.compare_regimes(gross, &old, &new);

    assert_eq!(result.old_regime_tax, dec!(202500));
    assert_eq!(result.new_regime_tax, dec!(37500));
    assert_eq!(result.recommended_regime, Regime::New);
    assert_eq!(result.savings_amount, dec!(165000));
}

#[test]
fn over_cap_and_malformed_entries_are_tamed_before_comparison() {
    let engine = TaxEngine::new(&CATALOG);
    let gross = parse_amount("900000");
    let old = claim_all(
        &engine,
        Regime::Old,
        true,
        &[
            ("section80C", "2,00,000"),
            ("section80D", "75000"),
            ("section80TTA", "not a number"),
            ("lta", "-5000"),
        ],
    )
    .unwrap();

    assert_eq!(old.get("section80C"), dec!(150000));
    assert_eq!(old.get("section80D"), dec!(50000));
    assert_eq!(old.get("section80TTA"), dec!(0));
    assert_eq!(old.get("lta"), dec!(0));

    let new = claim_all(&engine, Regime::New, true, &[]).unwrap();
    let result = engine.compare_regimes(gross, &old, &new);

    // old taxable 650,000: 12,500 + 20% of 150,000 = 42,500; new taxable 850,000 is tax free
    assert_eq!(result.old_regime_tax, dec!(42500));
    assert_eq!(result.new_regime_tax, dec!(0));
    assert_eq!(result.recommended_regime, Regime::New);
    assert_eq!(result.savings_amount, dec!(42500));
}

#[test]
fn claiming_an_old_only_deduction_under_new_regime_fails_loudly() {
    let engine = TaxEngine::new(&CATALOG);

    let result = claim_all(&engine, Regime::New, false, &[("hra", "100000")]);

    assert_eq!(
        result,
        Err(CatalogError::UnknownDeduction {
            regime: Regime::New,
            id: "hra".to_string(),
        })
    );
}

#[test]
fn senior_flag_only_changes_health_insurance_cap() {
    let engine = TaxEngine::new(&CATALOG);
    let old = engine.catalog(Regime::Old);

    for definition in old.iter() {
        let regular = old.resolve_cap(definition.id, false).unwrap();
        let senior = old.resolve_cap(definition.id, true).unwrap();
        if definition.id == "section80D" {
            assert_eq!(regular, DeductionCap::Limited(dec!(25000)));
            assert_eq!(senior, DeductionCap::Limited(dec!(50000)));
        } else {
            assert_eq!(regular, senior);
        }
    }
}

#[test]
fn comparison_result_serializes_for_callers() {
    let engine = TaxEngine::new(&CATALOG);
    let claims = engine.catalog(Regime::New).default_claims();

    let result = engine.compare_regimes(dec!(1500000), &claims, &claims);
    let json = serde_json::to_value(result).unwrap();

    assert_eq!(json["recommended_regime"], "new");
    let savings: Decimal = json["savings_amount"].as_str().unwrap().parse().unwrap();
    assert_eq!(savings, dec!(165000));
}
