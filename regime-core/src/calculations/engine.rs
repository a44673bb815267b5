//! Regime comparison engine.
//!
//! The engine borrows a [`DeductionCatalog`] and exposes the caller-facing
//! operations: catalog lookup, amount clamping, per-regime tax and the
//! two-regime comparison. It holds no mutable state.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{DeductionCatalog, Regime, TaxEngine};
//!
//! let catalog = DeductionCatalog::fy2025_26();
//! let engine = TaxEngine::new(&catalog);
//!
//! let old_claims = engine.catalog(Regime::Old).default_claims();
//! let new_claims = engine.catalog(Regime::New).default_claims();
//! let result = engine.compare_regimes(dec!(1500000), &old_claims, &new_claims);
//!
//! assert_eq!(result.old_regime_tax, dec!(202500));
//! assert_eq!(result.new_regime_tax, dec!(37500));
//! assert_eq!(result.recommended_regime, Regime::New);
//! assert_eq!(result.savings_amount, dec!(165000));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::schedule::{TaxBreakdown, TaxSchedule};
use crate::catalog::{CatalogError, DeductionCatalog, RegimeCatalog};
use crate::models::{ClaimedDeductions, Regime, TaxComparisonResult};

/// Stateless tax calculator over a borrowed deduction catalog.
#[derive(Debug, Clone, Copy)]
pub struct TaxEngine<'a> {
    catalog: &'a DeductionCatalog,
}

impl<'a> TaxEngine<'a> {
    pub fn new(catalog: &'a DeductionCatalog) -> Self {
        Self { catalog }
    }

    /// The ordered deduction list for `regime`.
    pub fn catalog(
        &self,
        regime: Regime,
    ) -> RegimeCatalog<'static> {
        self.catalog.for_regime(regime)
    }

    /// Clamps a claimed amount against the regime's cap for this filer.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownDeduction`] if `deduction_id` is not in the
    /// regime's catalog.
    pub fn clamp_amount(
        &self,
        regime: Regime,
        deduction_id: &str,
        is_senior_citizen: bool,
        raw_amount: Decimal,
    ) -> Result<Decimal, CatalogError> {
        self.catalog(regime)
            .clamp_amount(deduction_id, is_senior_citizen, raw_amount)
    }

    /// Gross income minus every claimed amount. Not floored at zero.
    ///
    /// Saturates at `Decimal::MIN`/`Decimal::MAX` rather than overflowing.
    pub fn compute_taxable_income(
        &self,
        gross_income: Decimal,
        claimed_deductions: &ClaimedDeductions,
    ) -> Decimal {
        gross_income.saturating_sub(claimed_deductions.total())
    }

    pub fn compute_tax(
        &self,
        regime: Regime,
        taxable_income: Decimal,
    ) -> Decimal {
        TaxSchedule::for_regime(regime).compute_tax(taxable_income)
    }

    pub fn compute_breakdown(
        &self,
        regime: Regime,
        taxable_income: Decimal,
    ) -> TaxBreakdown {
        TaxSchedule::for_regime(regime).breakdown(taxable_income)
    }

    /// Runs both regimes over `gross_income` and recommends the cheaper one.
    ///
    /// Old is recommended only when its tax is strictly lower; equal taxes
    /// recommend New. Both taxes are exact, so a difference smaller than a
    /// paisa still decides the recommendation.
    pub fn compare_regimes(
        &self,
        gross_income: Decimal,
        old_claimed_deductions: &ClaimedDeductions,
        new_claimed_deductions: &ClaimedDeductions,
    ) -> TaxComparisonResult {
        let old_taxable = self.compute_taxable_income(gross_income, old_claimed_deductions);
        let new_taxable = self.compute_taxable_income(gross_income, new_claimed_deductions);

        let old_tax = self.compute_tax(Regime::Old, old_taxable);
        let new_tax = self.compute_tax(Regime::New, new_taxable);

        let result = TaxComparisonResult::from_taxes(old_tax, new_tax);
        debug!(
            %gross_income,
            %old_taxable,
            %new_taxable,
            %old_tax,
            %new_tax,
            recommended = result.recommended_regime.as_str(),
            "compared regimes"
        );
        result
    }
}
