use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Regime;

/// A named allowance a taxpayer may claim against gross income.
///
/// Definitions are static per financial year and are only ever read at
/// calculation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionDefinition {
    /// Stable identifier, unique within a financial year.
    pub id: String,

    pub display_name: String,
    pub description: String,

    /// Maximum claimable value. `None` means the amount has no enforced cap
    /// in this model (e.g. HRA, whose real limit depends on salary, rent
    /// paid, and city, and is computed outside the engine).
    pub cap_amount: Option<Decimal>,

    /// The single regime this deduction is valid under. A deduction is never
    /// simultaneously valid in both regimes in a given year.
    pub regime: Regime,

    /// Fixed deductions are not user-editable; the engine pins their claimed
    /// amount to `cap_amount` before aggregation.
    pub is_fixed: bool,
}
