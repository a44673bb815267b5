use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Upper bound on the amount claimable under one deduction category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum DeductionCap {
    Limited(Decimal),
    Unlimited,
}

impl DeductionCap {
    /// Clamps `amount` into `[0, cap]`. An unlimited cap only applies the floor.
    pub fn clamp(
        &self,
        amount: Decimal,
    ) -> Decimal {
        let floored = amount.max(Decimal::ZERO);
        match self {
            Self::Limited(cap) => floored.min(*cap),
            Self::Unlimited => floored,
        }
    }

    pub fn limit(&self) -> Option<Decimal> {
        match self {
            Self::Limited(cap) => Some(*cap),
            Self::Unlimited => None,
        }
    }
}

impl fmt::Display for DeductionCap {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Limited(cap) => write!(f, "{cap}"),
            Self::Unlimited => f.write_str("No Limit"),
        }
    }
}

/// One entry of a regime's deduction catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeductionDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub max_cap: DeductionCap,

    /// Replaces `max_cap` for filers flagged as senior citizens.
    pub senior_max_cap: Option<Decimal>,

    /// Fixed amount, pre-populated at the cap and not editable.
    pub is_default: bool,

    pub info: Option<&'static str>,
}

impl DeductionDefinition {
    pub fn effective_cap(
        &self,
        is_senior_citizen: bool,
    ) -> DeductionCap {
        match (is_senior_citizen, self.senior_max_cap) {
            (true, Some(senior_cap)) => DeductionCap::Limited(senior_cap),
            _ => self.max_cap,
        }
    }
}
