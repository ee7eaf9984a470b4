//! Parsing of raw form-field strings into the types the calculators
//! expect. Validation happens here, at the user-facing boundary; the
//! calculators themselves never reject input.

use anyhow::{Context, Result, bail};
use filing_core::FilingStatus;
use rust_decimal::Decimal;

/// Parse a currency amount from user input. Accepts `$` signs, thousands
/// separators, and surrounding whitespace. Negative amounts and anything
/// that is not a number are rejected.
pub fn parse_currency(raw: &str) -> Result<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect();

    if cleaned.is_empty() {
        bail!("empty amount");
    }

    let value: Decimal = cleaned
        .parse()
        .with_context(|| format!("'{raw}' is not a valid amount"))?;

    if value < Decimal::ZERO {
        bail!("amount '{raw}' must not be negative");
    }

    Ok(value)
}

/// Parse a filing status from either its short code (`S`, `MFJ`, ...) or
/// a spelled-out name.
pub fn parse_filing_status(raw: &str) -> Result<FilingStatus> {
    let trimmed = raw.trim();
    if let Some(status) = FilingStatus::parse(&trimmed.to_uppercase()) {
        return Ok(status);
    }

    match trimmed.to_lowercase().as_str() {
        "single" => Ok(FilingStatus::Single),
        "joint" | "married" | "married-joint" => Ok(FilingStatus::MarriedFilingJointly),
        "separate" | "married-separate" => Ok(FilingStatus::MarriedFilingSeparately),
        "head" | "head-of-household" => Ok(FilingStatus::HeadOfHousehold),
        "widow" | "widower" => Ok(FilingStatus::QualifyingWidow),
        _ => bail!(
            "unknown filing status '{raw}'; expected one of: single, joint, separate, head, widow"
        ),
    }
}
