use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::input::parse_amount;

/// Amounts a filer claims, keyed by deduction id.
///
/// Absent ids count as zero. Values are stored as given: [`Self::insert`]
/// and [`Self::from_raw`] do not clamp, so go through
/// [`crate::RegimeCatalog::claim`] when amounts come from a filer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ClaimedDeductions(BTreeMap<String, Decimal>);

impl ClaimedDeductions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds claims from raw text pairs, coercing unparseable amounts to 0.
    pub fn from_raw<'s, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'s str, &'s str)>,
    {
        pairs
            .into_iter()
            .map(|(id, text)| (id.to_string(), parse_amount(text)))
            .collect()
    }

    pub fn insert(
        &mut self,
        id: impl Into<String>,
        amount: Decimal,
    ) -> Option<Decimal> {
        self.0.insert(id.into(), amount)
    }

    pub fn get(
        &self,
        id: &str,
    ) -> Decimal {
        self.0.get(id).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn contains(
        &self,
        id: &str,
    ) -> bool {
        self.0.contains_key(id)
    }

    /// Sum of every amount, saturating at the `Decimal` range limits.
    pub fn total(&self) -> Decimal {
        self.0
            .values()
            .fold(Decimal::ZERO, |acc, amount| acc.saturating_add(*amount))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(id, amount)| (id.as_str(), *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Decimal)> for ClaimedDeductions {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
