mod claimed_deductions;
mod comparison;
mod deduction;
mod regime;
mod tax_bracket;

pub use claimed_deductions::ClaimedDeductions;
pub use comparison::TaxComparisonResult;
pub use deduction::{DeductionCap, DeductionDefinition};
pub use regime::Regime;
pub use tax_bracket::TaxBracket;
