//! Plain-text reports for calculator results.

use std::fmt::Write;

use filing_core::tables;
use filing_core::{
    CalculationRecord, RebateInput, RebateResult, TaxCalculationInput, TaxCalculationResult,
};
use rust_decimal::Decimal;

/// Formats a dollar amount as `$1,234.56` (cents always shown, thousands
/// separated).
pub fn format_currency(value: Decimal) -> String {
    let rounded =
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    let digits = int_part.len();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// Formats a percentage to two decimal places, e.g. `11.18%`.
pub fn format_percent(value: Decimal) -> String {
    format!(
        "{:.2}%",
        value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Full tax calculation report: summary lines plus the per-bracket table.
pub fn tax_report(input: &TaxCalculationInput, result: &TaxCalculationResult) -> String {
    let mut out = String::new();

    writeln!(out, "Filing status:       {}", input.filing_status.display_name()).unwrap();
    writeln!(out, "Gross income:        {}", format_currency(input.gross_income)).unwrap();
    writeln!(
        out,
        "Adjusted income:     {}",
        format_currency(result.adjusted_gross_income)
    )
    .unwrap();
    writeln!(out, "Dependents:          {}", input.dependents).unwrap();
    writeln!(
        out,
        "Taxable income:      {}",
        format_currency(result.taxable_income)
    )
    .unwrap();
    writeln!(
        out,
        "Tax liability:       {}",
        format_currency(result.tax_liability)
    )
    .unwrap();
    writeln!(
        out,
        "Effective tax rate:  {}",
        format_percent(result.effective_rate)
    )
    .unwrap();

    if !result.bracket_breakdown.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "Bracket breakdown:").unwrap();
        writeln!(out, "  {:>5}  {:>15}  {:>15}", "Rate", "Income", "Tax").unwrap();
        for portion in &result.bracket_breakdown {
            writeln!(
                out,
                "  {:>5}  {:>15}  {:>15}",
                format_percent(portion.rate * Decimal::ONE_HUNDRED),
                format_currency(portion.income_in_bracket),
                format_currency(portion.tax_in_bracket),
            )
            .unwrap();
        }
    }

    out
}

/// Rebate report: the credit amount, the reason, and a step-by-step
/// explanation of how it was derived.
pub fn rebate_report(input: &RebateInput, result: &RebateResult) -> String {
    let (start, max_income) = tables::phase_out_thresholds(input.filing_status);
    let mut out = String::new();

    writeln!(
        out,
        "Recovery Rebate Credit: {}",
        format_currency(result.credit_amount)
    )
    .unwrap();
    writeln!(out, "{}", result.reason.description()).unwrap();
    writeln!(out).unwrap();

    writeln!(out, "Step 1: Maximum payment").unwrap();
    writeln!(
        out,
        "  {} x $1,400 ({} taxpayer(s), {} dependent(s)) = {}",
        input.filing_status.taxpayer_count() + input.dependents,
        input.filing_status.taxpayer_count(),
        input.dependents,
        format_currency(result.max_payment),
    )
    .unwrap();

    writeln!(out, "Step 2: Income phase-out").unwrap();
    writeln!(
        out,
        "  Adjusted gross income {} against a phase-out window of {} to {}",
        format_currency(input.adjusted_gross_income),
        format_currency(start),
        format_currency(max_income),
    )
    .unwrap();
    writeln!(
        out,
        "  Eligible amount: {}",
        format_currency(result.eligible_amount)
    )
    .unwrap();

    writeln!(out, "Step 3: Subtract payment already received").unwrap();
    writeln!(
        out,
        "  {} - {} = {}",
        format_currency(result.eligible_amount),
        format_currency(result.received_amount),
        format_currency(result.credit_amount),
    )
    .unwrap();

    out
}

/// History listing, one line per stored calculation.
pub fn history_report(records: &[CalculationRecord]) -> String {
    if records.is_empty() {
        return "No calculations in history.\n".to_string();
    }

    let mut out = String::new();
    writeln!(
        out,
        "{:<20}  {:<6}  {:>15}  {:>15}  {:>8}",
        "When", "Status", "Gross income", "Tax liability", "Rate"
    )
    .unwrap();
    for record in records {
        writeln!(
            out,
            "{:<20}  {:<6}  {:>15}  {:>15}  {:>8}",
            record.created_at.format("%Y-%m-%d %H:%M:%S"),
            record.filing_status.as_str(),
            format_currency(record.gross_income),
            format_currency(record.tax_liability),
            format_percent(record.effective_rate),
        )
        .unwrap();
    }

    out
}
