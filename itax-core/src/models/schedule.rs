use serde::{Deserialize, Serialize};

use crate::models::{DeductionDefinition, Regime, TaxSlab};

/// One financial year's reference data: both regimes' slab schedules and the
/// year's deduction catalogue.
///
/// Schedules are built once at registry construction and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearlyTaxSchedule {
    pub financial_year: i32,
    pub old_regime_slabs: Vec<TaxSlab>,
    pub new_regime_slabs: Vec<TaxSlab>,
    pub deductions: Vec<DeductionDefinition>,
}

impl YearlyTaxSchedule {
    pub fn slabs_for(&self, regime: Regime) -> &[TaxSlab] {
        match regime {
            Regime::Old => &self.old_regime_slabs,
            Regime::New => &self.new_regime_slabs,
        }
    }

    pub fn deductions_for(&self, regime: Regime) -> impl Iterator<Item = &DeductionDefinition> {
        self.deductions.iter().filter(move |d| d.regime == regime)
    }
}
