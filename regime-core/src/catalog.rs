//! Deduction catalogs for both regimes.
//!
//! Each regime has an ordered, closed list of deduction categories. The
//! catalog resolves the cap that applies to a filer and clamps claimed
//! amounts against it. Looking up an id that is not in a regime's list is a
//! caller error and is reported as [`CatalogError::UnknownDeduction`].
//!
//! # FY 2025-26 catalog
//!
//! | Regime | Id | Cap | Senior cap |
//! |--------|----|-----|------------|
//! | Old | `standardDeduction` | 50,000 (fixed) | |
//! | Old | `section80C` | 150,000 | |
//! | Old | `section80D` | 25,000 | 50,000 |
//! | Old | `section80E` | No Limit | |
//! | Old | `hra` | No Limit | |
//! | Old | `lta` | No Limit | |
//! | Old | `section80TTA` | 10,000 | |
//! | New | `standardDeduction` | 50,000 (fixed) | |
//! | New | `section80E` | No Limit | |
//! | New | `employerNPS` | No Limit | |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{DeductionCap, DeductionCatalog, Regime};
//!
//! let catalog = DeductionCatalog::fy2025_26();
//! let old = catalog.for_regime(Regime::Old);
//!
//! assert_eq!(
//!     old.resolve_cap("section80D", true).unwrap(),
//!     DeductionCap::Limited(dec!(50000))
//! );
//! assert_eq!(old.clamp_amount("section80C", false, dec!(200000)).unwrap(), dec!(150000));
//! ```

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::models::{ClaimedDeductions, DeductionCap, DeductionDefinition, Regime};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("unknown deduction '{id}' for the {regime}")]
    UnknownDeduction { regime: Regime, id: String },

    #[error("duplicate deduction '{id}' in the {regime} catalog")]
    DuplicateDeduction { regime: Regime, id: &'static str },
}

const STANDARD_DEDUCTION: DeductionDefinition = DeductionDefinition {
    id: "standardDeduction",
    label: "Standard Deduction",
    max_cap: DeductionCap::Limited(dec!(50000)),
    senior_max_cap: None,
    is_default: true,
    info: None,
};

const EDUCATION_LOAN_INTEREST: DeductionDefinition = DeductionDefinition {
    id: "section80E",
    label: "80E (Education Loan Interest)",
    max_cap: DeductionCap::Unlimited,
    senior_max_cap: None,
    is_default: false,
    info: None,
};

static OLD_REGIME_DEDUCTIONS: [DeductionDefinition; 7] = [
    STANDARD_DEDUCTION,
    DeductionDefinition {
        id: "section80C",
        label: "80C (PPF, EPF, LIC, ELSS, etc.)",
        max_cap: DeductionCap::Limited(dec!(150000)),
        senior_max_cap: None,
        is_default: false,
        info: None,
    },
    DeductionDefinition {
        id: "section80D",
        label: "80D (Health Insurance)",
        max_cap: DeductionCap::Limited(dec!(25000)),
        senior_max_cap: Some(dec!(50000)),
        is_default: false,
        info: None,
    },
    EDUCATION_LOAN_INTEREST,
    DeductionDefinition {
        id: "hra",
        label: "HRA (House Rent Allowance)",
        max_cap: DeductionCap::Unlimited,
        senior_max_cap: None,
        is_default: false,
        info: None,
    },
    DeductionDefinition {
        id: "lta",
        label: "LTA (Leave Travel Allowance)",
        max_cap: DeductionCap::Unlimited,
        senior_max_cap: None,
        is_default: false,
        info: None,
    },
    DeductionDefinition {
        id: "section80TTA",
        label: "80TTA (Savings Account Interest)",
        max_cap: DeductionCap::Limited(dec!(10000)),
        senior_max_cap: None,
        is_default: false,
        info: None,
    },
];

static NEW_REGIME_DEDUCTIONS: [DeductionDefinition; 3] = [
    STANDARD_DEDUCTION,
    EDUCATION_LOAN_INTEREST,
    DeductionDefinition {
        id: "employerNPS",
        label: "Employer's NPS Contribution (80CCD(2))",
        max_cap: DeductionCap::Unlimited,
        senior_max_cap: None,
        is_default: false,
        info: Some("10% of Basic Salary"),
    },
];

/// Deduction lists for both regimes. Immutable once built.
#[derive(Debug, Clone, Copy)]
pub struct DeductionCatalog {
    old: &'static [DeductionDefinition],
    new: &'static [DeductionDefinition],
}

impl DeductionCatalog {
    pub const fn new(
        old: &'static [DeductionDefinition],
        new: &'static [DeductionDefinition],
    ) -> Self {
        Self { old, new }
    }

    /// The fixed catalog for fiscal year 2025-26.
    pub const fn fy2025_26() -> Self {
        Self::new(&OLD_REGIME_DEDUCTIONS, &NEW_REGIME_DEDUCTIONS)
    }

    pub fn for_regime(
        &self,
        regime: Regime,
    ) -> RegimeCatalog<'static> {
        let entries = match regime {
            Regime::Old => self.old,
            Regime::New => self.new,
        };
        RegimeCatalog { regime, entries }
    }

    /// Checks that ids are unique within each regime's list.
    pub fn validate(&self) -> Result<(), CatalogError> {
        Regime::ALL
            .iter()
            .try_for_each(|regime| self.for_regime(*regime).validate())
    }
}

impl Default for DeductionCatalog {
    fn default() -> Self {
        Self::fy2025_26()
    }
}

/// One regime's ordered deduction list.
#[derive(Debug, Clone, Copy)]
pub struct RegimeCatalog<'a> {
    regime: Regime,
    entries: &'a [DeductionDefinition],
}

impl<'a> RegimeCatalog<'a> {
    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn entries(&self) -> &'a [DeductionDefinition] {
        self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a DeductionDefinition> {
        self.entries.iter()
    }

    /// Looks up a definition by id.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownDeduction`] if the id is not in this regime's list.
    pub fn get(
        &self,
        deduction_id: &str,
    ) -> Result<&'a DeductionDefinition, CatalogError> {
        self.entries
            .iter()
            .find(|d| d.id == deduction_id)
            .ok_or_else(|| CatalogError::UnknownDeduction {
                regime: self.regime,
                id: deduction_id.to_string(),
            })
    }

    /// Returns the cap that applies to this filer for `deduction_id`.
    ///
    /// The senior-citizen cap replaces the regular cap only when the flag is
    /// set and the category defines one.
    pub fn resolve_cap(
        &self,
        deduction_id: &str,
        is_senior_citizen: bool,
    ) -> Result<DeductionCap, CatalogError> {
        Ok(self.get(deduction_id)?.effective_cap(is_senior_citizen))
    }

    /// Clamps `raw_amount` into `[0, cap]`.
    pub fn clamp_amount(
        &self,
        deduction_id: &str,
        is_senior_citizen: bool,
        raw_amount: Decimal,
    ) -> Result<Decimal, CatalogError> {
        let cap = self.resolve_cap(deduction_id, is_senior_citizen)?;
        Ok(cap.clamp(raw_amount))
    }

    /// Claims with every fixed (default) deduction pre-populated at its cap.
    pub fn default_claims(&self) -> ClaimedDeductions {
        self.entries
            .iter()
            .filter(|d| d.is_default)
            .filter_map(|d| d.max_cap.limit().map(|cap| (d.id.to_string(), cap)))
            .collect()
    }

    /// Clamps `raw_amount` and records it in `claims`, returning the stored value.
    ///
    /// Fixed deductions cannot be edited: the request is ignored and the
    /// current value (the cap, if absent) is kept.
    pub fn claim(
        &self,
        claims: &mut ClaimedDeductions,
        deduction_id: &str,
        is_senior_citizen: bool,
        raw_amount: Decimal,
    ) -> Result<Decimal, CatalogError> {
        let definition = self.get(deduction_id)?;

        if definition.is_default {
            let fixed = if claims.contains(deduction_id) {
                claims.get(deduction_id)
            } else {
                let value = definition.max_cap.limit().unwrap_or(Decimal::ZERO);
                claims.insert(deduction_id, value);
                value
            };
            debug!(
                regime = %self.regime.as_str(),
                deduction = deduction_id,
                requested = %raw_amount,
                kept = %fixed,
                "ignoring edit of fixed deduction"
            );
            return Ok(fixed);
        }

        let amount = definition
            .effective_cap(is_senior_citizen)
            .clamp(raw_amount);
        claims.insert(deduction_id, amount);
        Ok(amount)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for definition in self.entries {
            if !seen.insert(definition.id) {
                return Err(CatalogError::DuplicateDeduction {
                    regime: self.regime,
                    id: definition.id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::{prop_assert, proptest};

    use super::*;

    fn old() -> RegimeCatalog<'static> {
        DeductionCatalog::fy2025_26().for_regime(Regime::Old)
    }

    fn new() -> RegimeCatalog<'static> {
        DeductionCatalog::fy2025_26().for_regime(Regime::New)
    }

    // =========================================================================
    // catalog contents
    // =========================================================================

    #[test]
    fn builtin_catalog_has_unique_ids() {
        assert_eq!(DeductionCatalog::fy2025_26().validate(), Ok(()));
    }

    #[test]
    fn old_regime_lists_categories_in_order() {
        let ids: Vec<_> = old().iter().map(|d| d.id).collect();

        assert_eq!(
            ids,
            vec![
                "standardDeduction",
                "section80C",
                "section80D",
                "section80E",
                "hra",
                "lta",
                "section80TTA",
            ]
        );
    }

    #[test]
    fn new_regime_lists_categories_in_order() {
        let ids: Vec<_> = new().iter().map(|d| d.id).collect();

        assert_eq!(ids, vec!["standardDeduction", "section80E", "employerNPS"]);
    }

    #[test]
    fn employer_nps_carries_hint() {
        let nps = new().get("employerNPS").unwrap();

        assert_eq!(nps.info, Some("10% of Basic Salary"));
        assert_eq!(nps.max_cap, DeductionCap::Unlimited);
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        static DUPLICATED: [DeductionDefinition; 2] = [STANDARD_DEDUCTION, STANDARD_DEDUCTION];
        let catalog = DeductionCatalog::new(&OLD_REGIME_DEDUCTIONS, &DUPLICATED);

        assert_eq!(
            catalog.validate(),
            Err(CatalogError::DuplicateDeduction {
                regime: Regime::New,
                id: "standardDeduction",
            })
        );
    }

    // =========================================================================
    // resolve_cap tests
    // =========================================================================

    #[test]
    fn resolve_cap_senior_override_for_health_insurance() {
        assert_eq!(
            old().resolve_cap("section80D", true),
            Ok(DeductionCap::Limited(dec!(50000)))
        );
        assert_eq!(
            old().resolve_cap("section80D", false),
            Ok(DeductionCap::Limited(dec!(25000)))
        );
    }

    #[test]
    fn resolve_cap_returns_unlimited_sentinel() {
        assert_eq!(old().resolve_cap("hra", false), Ok(DeductionCap::Unlimited));
    }

    #[test]
    fn resolve_cap_unknown_id_fails() {
        let result = new().resolve_cap("section80C", false);

        assert_eq!(
            result,
            Err(CatalogError::UnknownDeduction {
                regime: Regime::New,
                id: "section80C".to_string(),
            })
        );
    }

    // =========================================================================
    // clamp_amount tests
    // =========================================================================

    #[test]
    fn clamp_amount_caps_at_limit() {
        assert_eq!(old().clamp_amount("section80C", false, dec!(200000)), Ok(dec!(150000)));
    }

    #[test]
    fn clamp_amount_keeps_amount_within_limit() {
        assert_eq!(old().clamp_amount("section80TTA", false, dec!(4200)), Ok(dec!(4200)));
    }

    #[test]
    fn clamp_amount_floors_negative_input() {
        assert_eq!(old().clamp_amount("section80C", false, dec!(-10)), Ok(dec!(0)));
        assert_eq!(new().clamp_amount("employerNPS", false, dec!(-10)), Ok(dec!(0)));
    }

    #[test]
    fn clamp_amount_unlimited_passes_large_values() {
        assert_eq!(new().clamp_amount("section80E", false, dec!(900000)), Ok(dec!(900000)));
    }

    #[test]
    fn clamp_amount_senior_uses_elevated_cap() {
        assert_eq!(old().clamp_amount("section80D", true, dec!(60000)), Ok(dec!(50000)));
        assert_eq!(old().clamp_amount("section80D", false, dec!(60000)), Ok(dec!(25000)));
    }

    #[test]
    fn clamp_amount_unknown_id_fails() {
        assert!(old().clamp_amount("employerNPS", false, dec!(1)).is_err());
    }

    // =========================================================================
    // default_claims / claim tests
    // =========================================================================

    #[test]
    fn default_claims_prepopulate_standard_deduction() {
        for catalog in [old(), new()] {
            let claims = catalog.default_claims();

            assert_eq!(claims.len(), 1);
            assert_eq!(claims.get("standardDeduction"), dec!(50000));
        }
    }

    #[test]
    fn claim_stores_clamped_amount() {
        let mut claims = old().default_claims();

        let stored = old().claim(&mut claims, "section80C", false, dec!(175000)).unwrap();

        assert_eq!(stored, dec!(150000));
        assert_eq!(claims.get("section80C"), dec!(150000));
        assert_eq!(claims.total(), dec!(200000));
    }

    #[test]
    fn claim_ignores_edits_to_fixed_deduction() {
        let mut claims = new().default_claims();

        let stored = new().claim(&mut claims, "standardDeduction", false, dec!(10)).unwrap();

        assert_eq!(stored, dec!(50000));
        assert_eq!(claims.get("standardDeduction"), dec!(50000));
    }

    #[test]
    fn claim_fixed_deduction_inserts_cap_when_missing() {
        let mut claims = ClaimedDeductions::new();

        let stored = old().claim(&mut claims, "standardDeduction", false, dec!(0)).unwrap();

        assert_eq!(stored, dec!(50000));
        assert_eq!(claims.get("standardDeduction"), dec!(50000));
    }

    #[test]
    fn claim_unknown_id_leaves_claims_untouched() {
        let mut claims = new().default_claims();

        let result = new().claim(&mut claims, "hra", false, dec!(1000));

        assert!(result.is_err());
        assert_eq!(claims, new().default_claims());
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_clamp_amount_stays_within_cap(
            raw in -5_000_000i64..5_000_000,
            senior in proptest::bool::ANY,
            index in 0usize..7
        ) {
            let catalog = old();
            let definition = &catalog.entries()[index];
            let raw = Decimal::from(raw);

            let clamped = catalog.clamp_amount(definition.id, senior, raw).unwrap();

            prop_assert!(clamped >= Decimal::ZERO);
            match definition.effective_cap(senior) {
                DeductionCap::Limited(cap) => {
                    prop_assert!(clamped <= cap);
                }
                DeductionCap::Unlimited => {
                    prop_assert!(clamped == raw.max(Decimal::ZERO));
                }
            }
        }
    }
}
