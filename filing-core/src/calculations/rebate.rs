//! Recovery Rebate Credit calculations.
//!
//! The credit reconciles a stimulus-payment shortfall: the maximum payment
//! ($1,400 per taxpayer and per dependent) is scaled down linearly between
//! the filing status's phase-out start and ceiling, and whatever was
//! already received is subtracted from the result.
//!
//! Everything here is a stateless function over the inputs; the phase-out
//! schedule lives in [`crate::tables`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use filing_core::{FilingStatus, RebateInput, compute_rebate};
//!
//! let result = compute_rebate(&RebateInput {
//!     filing_status: FilingStatus::MarriedFilingJointly,
//!     adjusted_gross_income: dec!(140000),
//!     dependents: 0,
//!     received_payment: false,
//!     received_amount: dec!(0),
//! });
//!
//! assert_eq!(result.credit_amount, dec!(2800));
//! assert!(result.eligible);
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, round_whole_dollar};
use crate::models::{FilingStatus, RebateInput, RebateReason, RebateResult};
use crate::tables;

/// Maximum possible payment before the income phase-out: $1,400 for each
/// taxpayer (two for joint and widow filers) and each dependent.
pub fn max_payment(status: FilingStatus, dependents: u32) -> Decimal {
    tables::REBATE_PAYMENT_AMOUNT * Decimal::from(status.taxpayer_count() + dependents)
}

/// Fraction of the maximum payment the income still qualifies for, in
/// `[0, 1]`. Full payment at or below the phase-out start, nothing at or
/// above the ceiling, linear in between. Non-increasing in income.
pub fn phase_out_fraction(income: Decimal, status: FilingStatus) -> Decimal {
    let (start, max_income) = tables::phase_out_thresholds(status);

    if income <= start {
        Decimal::ONE
    } else if income >= max_income {
        Decimal::ZERO
    } else {
        Decimal::ONE - (income - start) / (max_income - start)
    }
}

/// Entry point for a full Recovery Rebate Credit calculation.
pub fn compute_rebate(input: &RebateInput) -> RebateResult {
    debug!(
        status = input.filing_status.as_str(),
        dependents = input.dependents,
        "computing rebate credit"
    );

    let max = max_payment(input.filing_status, input.dependents);

    // A payment at or above the maximum settles the credit outright,
    // whatever the income.
    if input.received_payment && input.received_amount >= max {
        return RebateResult {
            max_payment: max,
            eligible_amount: Decimal::ZERO,
            received_amount: input.received_amount,
            credit_amount: Decimal::ZERO,
            eligible: false,
            reason: RebateReason::AlreadyReceivedFull,
        };
    }

    let fraction = phase_out_fraction(input.adjusted_gross_income, input.filing_status);
    let eligible_amount = round_whole_dollar(max * fraction);
    let received_amount = if input.received_payment {
        input.received_amount
    } else {
        Decimal::ZERO
    };
    let credit_amount = clamp_non_negative(eligible_amount - received_amount);

    let reason = if credit_amount > Decimal::ZERO {
        if input.received_payment {
            RebateReason::PartialPaymentReceived
        } else {
            RebateReason::NoPaymentReceived
        }
    } else if fraction.is_zero() {
        RebateReason::IncomeTooHigh
    } else {
        RebateReason::AlreadyReceivedFull
    };

    RebateResult {
        max_payment: max,
        eligible_amount,
        received_amount,
        credit_amount,
        eligible: credit_amount > Decimal::ZERO,
        reason,
    }
}
