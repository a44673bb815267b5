//! Plain-text rendering of engine output.

use std::io::{self, Write};

use regime_core::{
    DeductionCap, RegimeCatalog, TaxBreakdown, TaxComparisonResult, TaxSchedule,
    calculations::common::round_half_up,
};
use rust_decimal::Decimal;

use crate::scenarios::Scenario;

pub const NOTES: [&str; 5] = [
    "The new tax regime is the default option from FY 2025-26",
    "Standard deduction of ₹50,000 is available in both regimes",
    "Education loan interest deduction (80E) is allowed in both regimes",
    "HRA, LTA, and most other deductions are only available in the old regime",
    "Choose the old regime if you have significant investments and deductions",
];

/// Formats a rupee amount with comma thousands grouping (`₹165,000`).
/// Rounds half-up to paise; paise are shown only when non-zero.
pub fn format_rupees(amount: Decimal) -> String {
    let rounded = round_half_up(amount).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(f) => format!("{sign}₹{grouped}.{f:0<2}"),
        None => format!("{sign}₹{grouped}"),
    }
}

fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

fn format_cap(cap: DeductionCap) -> String {
    match cap {
        DeductionCap::Limited(amount) => format_rupees(amount),
        DeductionCap::Unlimited => cap.to_string(),
    }
}

pub fn write_comparison<W: Write>(
    out: &mut W,
    result: &TaxComparisonResult,
) -> io::Result<()> {
    writeln!(out, "New Regime tax: {}", format_rupees(result.new_regime_tax))?;
    writeln!(out, "Old Regime tax: {}", format_rupees(result.old_regime_tax))?;
    writeln!(out, "Recommended: {}", result.recommended_regime)?;
    if !result.savings_amount.is_zero() {
        writeln!(
            out,
            "You can save {} with this regime",
            format_rupees(result.savings_amount)
        )?;
    }
    Ok(())
}

pub fn write_breakdown<W: Write>(
    out: &mut W,
    breakdown: &TaxBreakdown,
) -> io::Result<()> {
    writeln!(
        out,
        "{} on taxable income {}:",
        breakdown.regime,
        format_rupees(breakdown.taxable_income)
    )?;
    for slab in &breakdown.slabs {
        let band = match slab.ceiling {
            Some(ceiling) => format!("{} - {}", format_rupees(slab.floor), format_rupees(ceiling)),
            None => format!("above {}", format_rupees(slab.floor)),
        };
        writeln!(
            out,
            "  {band:<28} @ {:>4}  on {:>12}  = {}",
            format_rate(slab.rate),
            format_rupees(slab.taxed_amount),
            format_rupees(slab.charge)
        )?;
    }
    writeln!(out, "  total {}", format_rupees(breakdown.total))
}

pub fn write_catalog<W: Write>(
    out: &mut W,
    catalog: &RegimeCatalog<'_>,
    is_senior_citizen: bool,
) -> io::Result<()> {
    writeln!(out, "{} deductions:", catalog.regime())?;
    for definition in catalog.iter() {
        write!(
            out,
            "  {:<14} {:<40} max {}",
            definition.id,
            definition.label,
            format_cap(definition.effective_cap(is_senior_citizen))
        )?;
        if definition.is_default {
            write!(out, " (fixed)")?;
        }
        if let Some(info) = definition.info {
            write!(out, " [{info}]")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_slabs<W: Write>(
    out: &mut W,
    schedule: &TaxSchedule,
) -> io::Result<()> {
    writeln!(out, "{} slabs:", schedule.regime())?;
    writeln!(
        out,
        "  up to {:<22} Nil",
        format_rupees(schedule.tax_free_threshold())
    )?;
    for (bracket, ceiling) in schedule.bands() {
        let band = match ceiling {
            Some(ceiling) => format!(
                "{} - {}",
                format_rupees(bracket.floor + Decimal::ONE),
                format_rupees(ceiling)
            ),
            None => format!("above {}", format_rupees(bracket.floor)),
        };
        writeln!(out, "  {band:<28} {}", format_rate(bracket.rate))?;
    }
    Ok(())
}

pub fn write_notes<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Notes:")?;
    for note in NOTES {
        writeln!(out, "  • {note}")?;
    }
    Ok(())
}

pub fn write_scenario<W: Write>(
    out: &mut W,
    scenario: &Scenario,
    result: &TaxComparisonResult,
) -> io::Result<()> {
    writeln!(
        out,
        "== {} (income {}{})",
        scenario.name,
        format_rupees(scenario.gross_income),
        if scenario.is_senior_citizen {
            ", senior citizen"
        } else {
            ""
        }
    )?;
    write_comparison(out, result)
}
