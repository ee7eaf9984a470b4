//! Calculation logic for the two filing-tool calculators: the marginal
//! bracket tax calculator and the Recovery Rebate Credit calculator.
//!
//! Both are pure and synchronous. They share no state, never fail, and are
//! safe to call concurrently from any number of handlers.

pub mod bracket_tax;
pub mod common;
pub mod rebate;

pub use bracket_tax::{TaxCalculator, compute_tax};
pub use rebate::compute_rebate;
