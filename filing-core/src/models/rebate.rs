use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::FilingStatus;

/// Inputs to a Recovery Rebate Credit calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateInput {
    pub filing_status: FilingStatus,
    pub adjusted_gross_income: Decimal,
    pub dependents: u32,
    pub received_payment: bool,
    pub received_amount: Decimal,
}

/// Why a rebate calculation ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RebateReason {
    /// No payment was received; the full eligible amount is owed.
    NoPaymentReceived,
    /// A partial payment was received; the remainder is owed.
    PartialPaymentReceived,
    /// Income at or above the phase-out ceiling.
    IncomeTooHigh,
    /// The payment already received covers the eligible amount.
    AlreadyReceivedFull,
}

impl RebateReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoPaymentReceived => "no_payment_received",
            Self::PartialPaymentReceived => "partial_payment_received",
            Self::IncomeTooHigh => "income_too_high",
            Self::AlreadyReceivedFull => "already_received_full",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "no_payment_received" => Some(Self::NoPaymentReceived),
            "partial_payment_received" => Some(Self::PartialPaymentReceived),
            "income_too_high" => Some(Self::IncomeTooHigh),
            "already_received_full" => Some(Self::AlreadyReceivedFull),
            _ => None,
        }
    }

    /// User-facing explanation shown alongside the credit amount.
    pub fn description(&self) -> &'static str {
        match self {
            Self::NoPaymentReceived => {
                "You did not receive a payment but are eligible based on your information."
            }
            Self::PartialPaymentReceived => {
                "You received a partial payment and are eligible for the remaining amount."
            }
            Self::IncomeTooHigh => {
                "Your income exceeds the eligibility threshold for the Recovery Rebate Credit."
            }
            Self::AlreadyReceivedFull => {
                "You already received the full payment you were eligible for."
            }
        }
    }
}

/// Outcome of a Recovery Rebate Credit calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebateResult {
    /// Ceiling before the income phase-out is applied.
    pub max_payment: Decimal,

    /// `max_payment` scaled by the phase-out fraction, rounded to the
    /// whole dollar.
    pub eligible_amount: Decimal,

    /// Payment counted against the credit (zero when none was received).
    pub received_amount: Decimal,

    /// Residual credit owed: `max(0, eligible_amount - received_amount)`.
    pub credit_amount: Decimal,

    /// True exactly when `credit_amount > 0`.
    pub eligible: bool,

    pub reason: RebateReason,
}
