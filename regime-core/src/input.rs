//! Coercion of user-entered amounts.
//!
//! Amounts reach the engine as text from whatever front end collected them.
//! Malformed text is never an error here: it is logged and read as zero.

use rust_decimal::Decimal;
use tracing::warn;

/// Trims whitespace and drops comma grouping (`1,50,000` and `150,000` alike).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a user-entered amount.
///
/// Empty or whitespace-only input reads as 0. Non-numeric input also reads
/// as 0, with a warning.
pub fn parse_amount(s: &str) -> Decimal {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }
    normalized.parse().unwrap_or_else(|e| {
        warn!(input = %s, "non-numeric amount treated as zero: {}", e);
        Decimal::ZERO
    })
}
