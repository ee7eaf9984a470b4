use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// A persisted tax calculation: the form inputs plus the derived outputs,
/// keyed by insertion order. The history store keeps the 10 most recent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub id: i64,
    pub filing_status: FilingStatus,
    pub gross_income: Decimal,
    pub dependents: u32,
    pub itemized_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_liability: Decimal,
    pub effective_rate: Decimal,
    pub created_at: DateTime<Utc>,
}

/// For appending new records (no id or timestamp yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCalculationRecord {
    pub filing_status: FilingStatus,
    pub gross_income: Decimal,
    pub dependents: u32,
    pub itemized_deductions: Decimal,
    pub taxable_income: Decimal,
    pub tax_liability: Decimal,
    pub effective_rate: Decimal,
}
