mod calculation_record;
mod filing_status;
mod rebate;
mod tax_bracket;
mod tax_calculation;

pub use calculation_record::{CalculationRecord, NewCalculationRecord};
pub use filing_status::FilingStatus;
pub use rebate::{RebateInput, RebateReason, RebateResult};
pub use tax_bracket::{BracketPortion, TaxBracket};
pub use tax_calculation::{TaxCalculationInput, TaxCalculationResult};
