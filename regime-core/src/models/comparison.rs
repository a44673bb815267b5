use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Regime;

/// Outcome of running both regimes over the same gross income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparisonResult {
    pub new_regime_tax: Decimal,
    pub old_regime_tax: Decimal,
    pub recommended_regime: Regime,
    pub savings_amount: Decimal,
}

impl TaxComparisonResult {
    /// Old is recommended only when strictly cheaper; a tie goes to New.
    pub fn from_taxes(
        old_regime_tax: Decimal,
        new_regime_tax: Decimal,
    ) -> Self {
        let recommended_regime = if old_regime_tax < new_regime_tax {
            Regime::Old
        } else {
            Regime::New
        };

        Self {
            new_regime_tax,
            old_regime_tax,
            recommended_regime,
            savings_amount: (old_regime_tax - new_regime_tax).abs(),
        }
    }

    pub fn tax_for(
        &self,
        regime: Regime,
    ) -> Decimal {
        match regime {
            Regime::Old => self.old_regime_tax,
            Regime::New => self.new_regime_tax,
        }
    }
}
