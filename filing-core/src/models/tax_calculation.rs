use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{BracketPortion, FilingStatus};

/// Inputs to a bracket tax calculation, as collected from the filing form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationInput {
    pub gross_income: Decimal,
    pub filing_status: FilingStatus,
    pub dependents: u32,
    pub itemized_deductions: Decimal,
}

/// Derived output of a bracket tax calculation. Recomputed fresh on every
/// call; nothing here is mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    /// Gross income minus the dependent exemption.
    pub adjusted_gross_income: Decimal,

    /// Income remaining after the larger of the standard or itemized
    /// deduction, floored at zero.
    pub taxable_income: Decimal,

    /// Total liability across all contributing brackets.
    pub tax_liability: Decimal,

    /// Liability as a percentage of gross income; zero when gross income
    /// is zero.
    pub effective_rate: Decimal,

    /// Per-bracket contributions, ascending by rate. Their taxes sum to
    /// `tax_liability` exactly.
    pub bracket_breakdown: Vec<BracketPortion>,
}
