//! Progressive bracket schedules for FY 2025-26.
//!
//! Each schedule is an ascending list of bracket floors with marginal rates.
//! The lowest floor is the tax-free threshold: income at or below it is not
//! taxed. Tax is computed from the top down: the excess over the highest
//! floor is charged at the top rate, the remainder is clamped to that floor,
//! and the walk continues with the next floor down.
//!
//! | Regime | Tax-free up to | Brackets above |
//! |--------|----------------|----------------|
//! | New | 12,00,000 | 15% to 16L, 20% to 20L, 25% to 24L, 30% above |
//! | Old | 2,50,000 | 5% to 5L, 20% to 10L, 30% above |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{Regime, TaxSchedule};
//!
//! let schedule = TaxSchedule::for_regime(Regime::New);
//!
//! assert_eq!(schedule.tax_free_threshold(), dec!(1200000));
//! assert_eq!(schedule.compute_tax(dec!(1600000)), dec!(60000));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::calculations::common::non_negative;
use crate::models::{Regime, TaxBracket};

static NEW_REGIME_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(1200000), dec!(0.15)),
    TaxBracket::new(dec!(1600000), dec!(0.20)),
    TaxBracket::new(dec!(2000000), dec!(0.25)),
    TaxBracket::new(dec!(2400000), dec!(0.30)),
];

static OLD_REGIME_BRACKETS: [TaxBracket; 3] = [
    TaxBracket::new(dec!(250000), dec!(0.05)),
    TaxBracket::new(dec!(500000), dec!(0.20)),
    TaxBracket::new(dec!(1000000), dec!(0.30)),
];

static NEW_REGIME_SCHEDULE: TaxSchedule = TaxSchedule {
    regime: Regime::New,
    brackets: &NEW_REGIME_BRACKETS,
};

static OLD_REGIME_SCHEDULE: TaxSchedule = TaxSchedule {
    regime: Regime::Old,
    brackets: &OLD_REGIME_BRACKETS,
};

/// One regime's bracket table, sorted by ascending floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSchedule {
    regime: Regime,
    brackets: &'static [TaxBracket],
}

/// The charge contributed by a single bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlabCharge {
    pub floor: Decimal,

    /// Next bracket's floor; `None` for the top bracket.
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,

    /// Portion of taxable income that fell inside this bracket.
    pub taxed_amount: Decimal,
    pub charge: Decimal,
}

/// Per-bracket charges for one taxable income, lowest bracket first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub regime: Regime,
    pub taxable_income: Decimal,
    pub slabs: Vec<SlabCharge>,

    /// Sum of the charges, floored at zero. Exact, not rounded to paise.
    pub total: Decimal,
}

impl TaxSchedule {
    pub fn for_regime(regime: Regime) -> &'static TaxSchedule {
        match regime {
            Regime::Old => &OLD_REGIME_SCHEDULE,
            Regime::New => &NEW_REGIME_SCHEDULE,
        }
    }

    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn brackets(&self) -> &'static [TaxBracket] {
        self.brackets
    }

    pub fn tax_free_threshold(&self) -> Decimal {
        self.brackets
            .first()
            .map(|b| b.floor)
            .unwrap_or(Decimal::ZERO)
    }

    /// Each bracket paired with the floor of the bracket above it.
    pub fn bands(&self) -> impl DoubleEndedIterator<Item = (&'static TaxBracket, Option<Decimal>)> {
        let brackets = self.brackets;
        (0..brackets.len()).map(move |i| (&brackets[i], brackets.get(i + 1).map(|b| b.floor)))
    }

    /// Walks the brackets from the top down and records what each one charges.
    ///
    /// Negative taxable income passes through the walk untouched (it sits below
    /// every floor) and yields a zero total.
    pub fn breakdown(
        &self,
        taxable_income: Decimal,
    ) -> TaxBreakdown {
        let mut remaining = taxable_income;
        let mut slabs = Vec::with_capacity(self.brackets.len());

        for (bracket, ceiling) in self.bands().rev() {
            let taxed_amount = if remaining > bracket.floor {
                let excess = remaining - bracket.floor;
                remaining = bracket.floor;
                excess
            } else {
                Decimal::ZERO
            };

            slabs.push(SlabCharge {
                floor: bracket.floor,
                ceiling,
                rate: bracket.rate,
                taxed_amount,
                charge: taxed_amount * bracket.rate,
            });
        }
        slabs.reverse();

        let total = non_negative(slabs.iter().map(|s| s.charge).sum());

        TaxBreakdown {
            regime: self.regime,
            taxable_income,
            slabs,
            total,
        }
    }

    pub fn compute_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.breakdown(taxable_income).total
    }
}
