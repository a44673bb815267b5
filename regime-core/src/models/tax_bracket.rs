use rust_decimal::Decimal;
use serde::Serialize;

/// A marginal rate applied to income above `floor`, up to the next bracket's floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBracket {
    pub floor: Decimal,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        floor: Decimal,
        rate: Decimal,
    ) -> Self {
        Self { floor, rate }
    }
}
