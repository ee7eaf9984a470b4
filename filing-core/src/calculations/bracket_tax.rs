//! Marginal bracket tax calculations.
//!
//! The calculator walks the bracket schedule in ascending order. For every
//! bracket the taxable income reaches past, the slice of income inside the
//! bracket is taxed at that bracket's marginal rate; the liability is the
//! sum of those slices. The per-bracket breakdown reports the same slices
//! individually, so its taxes always sum to the liability exactly.
//!
//! No operation here fails. Inputs that would go negative are clamped at
//! zero and a zero gross income yields a zero effective rate. Input
//! validation belongs to the caller-facing layer, not the calculator.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use filing_core::FilingStatus;
//! use filing_core::calculations::TaxCalculator;
//!
//! let calc = TaxCalculator::for_status(FilingStatus::Single);
//!
//! // $75,000 gross, two dependents, $10,000 itemized (standard wins).
//! let taxable = calc.taxable_income(dec!(75000), 2, dec!(10000));
//! assert_eq!(taxable, dec!(58050));
//! assert_eq!(calc.tax_liability(taxable), dec!(8388.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{clamp_non_negative, round_currency};
use crate::models::{
    BracketPortion, FilingStatus, TaxBracket, TaxCalculationInput, TaxCalculationResult,
};
use crate::tables;

/// Entry point for a full tax calculation: selects the tables for the
/// input's filing status and computes every derived value.
pub fn compute_tax(input: &TaxCalculationInput) -> TaxCalculationResult {
    debug!(
        status = input.filing_status.as_str(),
        dependents = input.dependents,
        "computing bracket tax"
    );
    TaxCalculator::for_status(input.filing_status).calculate(input)
}

/// Bracket tax calculator bound to one bracket schedule and standard
/// deduction. Stateless beyond the borrowed tables.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    brackets: &'a [TaxBracket],
    standard_deduction: Decimal,
}

impl TaxCalculator<'static> {
    /// Calculator backed by the built-in tables for `status`.
    pub fn for_status(status: FilingStatus) -> Self {
        Self {
            brackets: tables::brackets(status),
            standard_deduction: tables::standard_deduction(status),
        }
    }
}

impl<'a> TaxCalculator<'a> {
    /// Calculator over an explicit bracket schedule. Brackets must be
    /// sorted ascending by `lower_bound` and tile `[0, ∞)`.
    pub fn new(brackets: &'a [TaxBracket], standard_deduction: Decimal) -> Self {
        Self {
            brackets,
            standard_deduction,
        }
    }

    /// Runs the whole calculation for one set of form inputs. The filing
    /// status tables are the ones this calculator was built with.
    pub fn calculate(&self, input: &TaxCalculationInput) -> TaxCalculationResult {
        let adjusted_gross_income =
            input.gross_income - tables::dependent_exemption(input.dependents);
        let taxable_income = self.taxable_income(
            input.gross_income,
            input.dependents,
            input.itemized_deductions,
        );
        let bracket_breakdown = self.bracket_breakdown(taxable_income);
        let tax_liability = self.tax_liability(taxable_income);
        let effective_rate = self.effective_rate(input.gross_income, tax_liability);

        TaxCalculationResult {
            adjusted_gross_income,
            taxable_income,
            tax_liability,
            effective_rate,
            bracket_breakdown,
        }
    }

    /// Income subject to tax: gross income less the dependent exemption,
    /// less the larger of the standard and itemized deductions, floored
    /// at zero.
    ///
    /// The dependent exemption comes off gross income before the
    /// deduction is applied. That mirrors the filing tool's arithmetic;
    /// it is a simplification, not any real tax year's rule.
    pub fn taxable_income(
        &self,
        gross_income: Decimal,
        dependents: u32,
        itemized_deductions: Decimal,
    ) -> Decimal {
        let adjusted_gross_income = gross_income - tables::dependent_exemption(dependents);
        let deduction = self.standard_deduction.max(itemized_deductions);
        clamp_non_negative(adjusted_gross_income - deduction)
    }

    /// Total liability for the given taxable income: the sum of every
    /// contributing bracket's tax, each rounded to cents.
    pub fn tax_liability(&self, taxable_income: Decimal) -> Decimal {
        self.bracket_breakdown(taxable_income)
            .iter()
            .map(|portion| portion.tax_in_bracket)
            .sum()
    }

    /// Liability as a percentage of gross income. Zero gross income is an
    /// explicit zero, never a division error.
    pub fn effective_rate(&self, gross_income: Decimal, tax_liability: Decimal) -> Decimal {
        if gross_income.is_zero() {
            return Decimal::ZERO;
        }
        tax_liability / gross_income * Decimal::ONE_HUNDRED
    }

    /// Per-bracket contributions for the given taxable income, ascending.
    /// Brackets the income never reaches are omitted.
    pub fn bracket_breakdown(&self, taxable_income: Decimal) -> Vec<BracketPortion> {
        let mut breakdown = Vec::new();

        for bracket in self.brackets {
            if taxable_income <= bracket.lower_bound {
                break;
            }
            let ceiling = match bracket.upper_bound {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            let income_in_bracket = ceiling - bracket.lower_bound;
            breakdown.push(BracketPortion {
                rate: bracket.rate,
                income_in_bracket,
                tax_in_bracket: round_currency(income_in_bracket * bracket.rate),
            });
        }

        breakdown
    }
}
