//! Regime comparison.
//!
//! Runs the slab allocator once per regime over one year's schedule and
//! applies the statutory health-and-education cess, producing both totals
//! side by side. The comparator never judges which regime is better; that
//! call belongs to whoever renders the result.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::ScheduleRegistry;
//! use itax_core::calculations::RegimeComparator;
//!
//! let registry = ScheduleRegistry::builtin().unwrap();
//! let schedule = registry.schedule_for_year(2024).unwrap();
//!
//! let result = RegimeComparator::new(schedule).compare(
//!     dec!(1250000), // gross income
//!     dec!(50000),   // old-regime deduction total
//!     dec!(50000),   // new-regime deduction total
//! );
//!
//! assert_eq!(result.old_regime.total_payable, dec!(179400.00));
//! assert_eq!(result.new_regime.total_payable, dec!(83200.00));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::slabs::{self, SlabTax};
use crate::models::{TaxSlab, YearlyTaxSchedule};

/// Health and education cess: a flat 4% surcharge on the pre-cess tax, not
/// itself slabbed.
pub const CESS_RATE: Decimal = dec!(0.04);

/// One regime's half of a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeComputation {
    /// Gross income minus this regime's deduction total; may be negative.
    pub taxable_income: Decimal,

    /// Per-slab breakdown, in schedule order.
    pub slabs: Vec<SlabTax>,

    pub tax_before_cess: Decimal,
    pub cess: Decimal,
    pub total_payable: Decimal,
}

/// Output of one comparison. Owned by the caller and discarded after
/// display; nothing is retained by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub financial_year: i32,
    pub gross_income: Decimal,
    pub old_regime: RegimeComputation,
    pub new_regime: RegimeComputation,
}

/// Calculator comparing both regimes over one year's schedule.
#[derive(Debug, Clone)]
pub struct RegimeComparator<'a> {
    schedule: &'a YearlyTaxSchedule,
}

impl<'a> RegimeComparator<'a> {
    pub fn new(schedule: &'a YearlyTaxSchedule) -> Self {
        Self { schedule }
    }

    /// Computes both regimes' liability for `gross_income`, given each
    /// regime's already-aggregated deduction total.
    ///
    /// Taxable amounts may come out negative when deductions exceed income;
    /// they pass through to the allocator unchanged and yield zero tax.
    pub fn compare(
        &self,
        gross_income: Decimal,
        old_deduction_total: Decimal,
        new_deduction_total: Decimal,
    ) -> CalculationResult {
        CalculationResult {
            financial_year: self.schedule.financial_year,
            gross_income,
            old_regime: compute_regime(
                gross_income - old_deduction_total,
                &self.schedule.old_regime_slabs,
            ),
            new_regime: compute_regime(
                gross_income - new_deduction_total,
                &self.schedule.new_regime_slabs,
            ),
        }
    }
}

fn compute_regime(taxable_income: Decimal, schedule_slabs: &[TaxSlab]) -> RegimeComputation {
    let slabs = slabs::allocate(taxable_income, schedule_slabs);
    let tax_before_cess = slabs::total_tax(&slabs);
    let cess = tax_before_cess * CESS_RATE;

    RegimeComputation {
        taxable_income,
        tax_before_cess,
        cess,
        total_payable: tax_before_cess + cess,
        slabs,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::tables::builtin_schedules;

    fn fy_2024() -> YearlyTaxSchedule {
        builtin_schedules()
            .into_iter()
            .find(|s| s.financial_year == 2024)
            .unwrap()
    }

    #[test]
    fn compare_reproduces_the_old_regime_breakdown() {
        let schedule = fy_2024();

        let result =
            RegimeComparator::new(&schedule).compare(dec!(1200000), dec!(0), dec!(0));

        let old = &result.old_regime;
        assert_eq!(old.taxable_income, dec!(1200000));
        assert_eq!(
            old.slabs.iter().map(|s| s.tax).collect::<Vec<_>>(),
            vec![dec!(0), dec!(12500.00), dec!(100000.00), dec!(60000.00)]
        );
        assert_eq!(old.tax_before_cess, dec!(172500.00));
        assert_eq!(old.cess, dec!(6900.00));
        assert_eq!(old.total_payable, dec!(179400.00));
    }

    #[test]
    fn compare_reproduces_the_new_regime_breakdown() {
        let schedule = fy_2024();

        let result =
            RegimeComparator::new(&schedule).compare(dec!(1200000), dec!(0), dec!(0));

        let new = &result.new_regime;
        assert_eq!(new.tax_before_cess, dec!(80000.00));
        assert_eq!(new.cess, dec!(3200.00));
        assert_eq!(new.total_payable, dec!(83200.00));
    }

    #[test]
    fn compare_subtracts_each_regimes_own_deduction_total() {
        let schedule = fy_2024();

        let result =
            RegimeComparator::new(&schedule).compare(dec!(1000000), dec!(250000), dec!(50000));

        assert_eq!(result.old_regime.taxable_income, dec!(750000));
        assert_eq!(result.new_regime.taxable_income, dec!(950000));
    }

    #[test]
    fn compare_passes_negative_taxable_income_through_as_zero_tax() {
        let schedule = fy_2024();

        let result =
            RegimeComparator::new(&schedule).compare(dec!(300000), dec!(450000), dec!(0));

        assert_eq!(result.old_regime.taxable_income, dec!(-150000));
        assert_eq!(result.old_regime.tax_before_cess, dec!(0));
        assert_eq!(result.old_regime.cess, dec!(0));
        assert_eq!(result.old_regime.total_payable, dec!(0));
    }

    #[test]
    fn compare_carries_the_schedule_year_into_the_result() {
        let schedule = fy_2024();

        let result = RegimeComparator::new(&schedule).compare(dec!(0), dec!(0), dec!(0));

        assert_eq!(result.financial_year, 2024);
    }

    #[test]
    fn cess_is_four_percent_of_pre_cess_tax() {
        let schedule = fy_2024();

        let result =
            RegimeComparator::new(&schedule).compare(dec!(800000), dec!(0), dec!(0));

        let old = &result.old_regime;
        assert_eq!(old.cess, old.tax_before_cess * CESS_RATE);
        assert_eq!(old.total_payable, old.tax_before_cess + old.cess);
    }
}
