//! Fixed lookup tables keyed by filing status: standard deductions,
//! marginal bracket schedules, the per-dependent exemption, and the rebate
//! phase-out thresholds.
//!
//! Bracket tables are ordered ascending, non-overlapping, and tile
//! `[0, ∞)`: each bracket's lower bound equals the previous bracket's
//! upper bound, and the final bracket is unbounded.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{FilingStatus, TaxBracket};

/// Per-person Recovery Rebate payment amount.
pub const REBATE_PAYMENT_AMOUNT: Decimal = dec!(1400);

/// Exemption amount per dependent.
pub const DEPENDENT_EXEMPTION_AMOUNT: Decimal = dec!(2000);

/// Standard deduction for the given filing status.
pub fn standard_deduction(status: FilingStatus) -> Decimal {
    match status {
        FilingStatus::Single | FilingStatus::MarriedFilingSeparately => dec!(12950),
        FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingWidow => dec!(25900),
        FilingStatus::HeadOfHousehold => dec!(19400),
    }
}

/// Total dependent exemption: `n × 2000`. Unsigned count, no upper cap.
pub fn dependent_exemption(dependents: u32) -> Decimal {
    DEPENDENT_EXEMPTION_AMOUNT * Decimal::from(dependents)
}

/// Rebate phase-out window for the given filing status:
/// `(phase_out_start, max_income)`. Full payment at or below the start,
/// nothing at or above the max.
pub fn phase_out_thresholds(status: FilingStatus) -> (Decimal, Decimal) {
    match status {
        FilingStatus::Single | FilingStatus::MarriedFilingSeparately => {
            (dec!(75000), dec!(80000))
        }
        FilingStatus::HeadOfHousehold => (dec!(112500), dec!(120000)),
        FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingWidow => {
            (dec!(150000), dec!(160000))
        }
    }
}

fn build_brackets(bounds: [(Decimal, Decimal, Option<Decimal>); 7]) -> Vec<TaxBracket> {
    bounds
        .into_iter()
        .map(|(rate, lower_bound, upper_bound)| TaxBracket {
            rate,
            lower_bound,
            upper_bound,
        })
        .collect()
}

// Single and married-filing-separately share everything below the top
// bracket; head of household diverges in the lower brackets; joint and
// widow share one schedule.

static SINGLE: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    build_brackets([
        (dec!(0.10), dec!(0), Some(dec!(10275))),
        (dec!(0.12), dec!(10275), Some(dec!(41775))),
        (dec!(0.22), dec!(41775), Some(dec!(89075))),
        (dec!(0.24), dec!(89075), Some(dec!(170050))),
        (dec!(0.32), dec!(170050), Some(dec!(215950))),
        (dec!(0.35), dec!(215950), Some(dec!(539900))),
        (dec!(0.37), dec!(539900), None),
    ])
});

static MARRIED_JOINT: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    build_brackets([
        (dec!(0.10), dec!(0), Some(dec!(20550))),
        (dec!(0.12), dec!(20550), Some(dec!(83550))),
        (dec!(0.22), dec!(83550), Some(dec!(178150))),
        (dec!(0.24), dec!(178150), Some(dec!(340100))),
        (dec!(0.32), dec!(340100), Some(dec!(431900))),
        (dec!(0.35), dec!(431900), Some(dec!(647850))),
        (dec!(0.37), dec!(647850), None),
    ])
});

static MARRIED_SEPARATE: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    build_brackets([
        (dec!(0.10), dec!(0), Some(dec!(10275))),
        (dec!(0.12), dec!(10275), Some(dec!(41775))),
        (dec!(0.22), dec!(41775), Some(dec!(89075))),
        (dec!(0.24), dec!(89075), Some(dec!(170050))),
        (dec!(0.32), dec!(170050), Some(dec!(215950))),
        (dec!(0.35), dec!(215950), Some(dec!(323925))),
        (dec!(0.37), dec!(323925), None),
    ])
});

static HEAD_OF_HOUSEHOLD: LazyLock<Vec<TaxBracket>> = LazyLock::new(|| {
    build_brackets([
        (dec!(0.10), dec!(0), Some(dec!(14650))),
        (dec!(0.12), dec!(14650), Some(dec!(55900))),
        (dec!(0.22), dec!(55900), Some(dec!(89050))),
        (dec!(0.24), dec!(89050), Some(dec!(170050))),
        (dec!(0.32), dec!(170050), Some(dec!(215950))),
        (dec!(0.35), dec!(215950), Some(dec!(539900))),
        (dec!(0.37), dec!(539900), None),
    ])
});

/// Marginal bracket schedule for the given filing status, ascending by
/// lower bound. Joint and widow filers use the same table.
pub fn brackets(status: FilingStatus) -> &'static [TaxBracket] {
    match status {
        FilingStatus::Single => &SINGLE,
        FilingStatus::MarriedFilingJointly | FilingStatus::QualifyingWidow => &MARRIED_JOINT,
        FilingStatus::MarriedFilingSeparately => &MARRIED_SEPARATE,
        FilingStatus::HeadOfHousehold => &HEAD_OF_HOUSEHOLD,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_status_has_seven_brackets() {
        for status in FilingStatus::ALL {
            assert_eq!(brackets(status).len(), 7, "{status:?}");
        }
    }

    #[test]
    fn bracket_tables_tile_from_zero_to_unbounded() {
        for status in FilingStatus::ALL {
            let table = brackets(status);

            assert_eq!(table[0].lower_bound, Decimal::ZERO, "{status:?}");
            assert!(table.last().unwrap().upper_bound.is_none(), "{status:?}");

            for pair in table.windows(2) {
                // No gaps and no overlaps: each upper bound is the next
                // bracket's lower bound.
                assert_eq!(
                    pair[0].upper_bound,
                    Some(pair[1].lower_bound),
                    "{status:?}"
                );
            }
        }
    }

    #[test]
    fn bracket_rates_are_strictly_increasing() {
        for status in FilingStatus::ALL {
            let table = brackets(status);
            for pair in table.windows(2) {
                assert!(pair[0].rate < pair[1].rate, "{status:?}");
            }
        }
    }

    #[test]
    fn standard_deduction_matches_schedule() {
        assert_eq!(standard_deduction(FilingStatus::Single), dec!(12950));
        assert_eq!(
            standard_deduction(FilingStatus::MarriedFilingJointly),
            dec!(25900)
        );
        assert_eq!(
            standard_deduction(FilingStatus::MarriedFilingSeparately),
            dec!(12950)
        );
        assert_eq!(standard_deduction(FilingStatus::HeadOfHousehold), dec!(19400));
        assert_eq!(standard_deduction(FilingStatus::QualifyingWidow), dec!(25900));
    }

    #[test]
    fn dependent_exemption_scales_linearly() {
        assert_eq!(dependent_exemption(0), dec!(0));
        assert_eq!(dependent_exemption(1), dec!(2000));
        assert_eq!(dependent_exemption(3), dec!(6000));
    }

    #[test]
    fn phase_out_windows_match_schedule() {
        assert_eq!(
            phase_out_thresholds(FilingStatus::Single),
            (dec!(75000), dec!(80000))
        );
        assert_eq!(
            phase_out_thresholds(FilingStatus::MarriedFilingSeparately),
            (dec!(75000), dec!(80000))
        );
        assert_eq!(
            phase_out_thresholds(FilingStatus::HeadOfHousehold),
            (dec!(112500), dec!(120000))
        );
        assert_eq!(
            phase_out_thresholds(FilingStatus::MarriedFilingJointly),
            (dec!(150000), dec!(160000))
        );
        assert_eq!(
            phase_out_thresholds(FilingStatus::QualifyingWidow),
            (dec!(150000), dec!(160000))
        );
    }

    #[test]
    fn phase_out_start_is_below_max_for_every_status() {
        for status in FilingStatus::ALL {
            let (start, max) = phase_out_thresholds(status);
            assert!(start < max, "{status:?}");
        }
    }
}
