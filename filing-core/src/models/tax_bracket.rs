use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal tax bracket. Ranges are `[lower_bound, upper_bound)`;
/// the final bracket of a table has `upper_bound` of `None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub rate: Decimal,
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
}

/// A bracket's contribution to a specific taxable income, as reported in
/// the per-bracket breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketPortion {
    pub rate: Decimal,
    pub income_in_bracket: Decimal,
    pub tax_in_bracket: Decimal,
}
