//! Built-in rate tables.
//!
//! Static configuration for the financial years the crate ships with:
//! FY 2024-25 and FY 2025-26. The old-regime schedule is unchanged between
//! the two years; the new-regime schedule and the deduction catalogue are
//! revised in 2025.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{DeductionDefinition, Regime, TaxSlab, YearlyTaxSchedule};
use crate::registry::{RegistryError, ScheduleRegistry};

impl ScheduleRegistry {
    /// Registry preloaded with the built-in schedules.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(builtin_schedules())
    }
}

/// The schedules shipped with the crate, one per supported financial year.
pub fn builtin_schedules() -> Vec<YearlyTaxSchedule> {
    vec![fy_2024(), fy_2025()]
}

fn slab(range_label: &str, capacity: Decimal, rate: Decimal) -> TaxSlab {
    TaxSlab {
        range_label: range_label.to_string(),
        capacity: Some(capacity),
        rate,
    }
}

fn top_slab(range_label: &str, rate: Decimal) -> TaxSlab {
    TaxSlab {
        range_label: range_label.to_string(),
        capacity: None,
        rate,
    }
}

fn deduction(
    id: &str,
    display_name: &str,
    description: &str,
    cap_amount: Option<Decimal>,
    regime: Regime,
) -> DeductionDefinition {
    DeductionDefinition {
        id: id.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        cap_amount,
        regime,
        is_fixed: false,
    }
}

fn fixed_deduction(
    id: &str,
    display_name: &str,
    description: &str,
    cap_amount: Decimal,
    regime: Regime,
) -> DeductionDefinition {
    DeductionDefinition {
        id: id.to_string(),
        display_name: display_name.to_string(),
        description: description.to_string(),
        cap_amount: Some(cap_amount),
        regime,
        is_fixed: true,
    }
}

/// The old-regime slab schedule, identical in both shipped years.
fn old_regime_slabs() -> Vec<TaxSlab> {
    vec![
        slab("0-250000", dec!(250000), dec!(0)),
        slab("250000-500000", dec!(250000), dec!(0.05)),
        slab("500000-1000000", dec!(500000), dec!(0.20)),
        top_slab("1000000+", dec!(0.30)),
    ]
}

fn fy_2024() -> YearlyTaxSchedule {
    YearlyTaxSchedule {
        financial_year: 2024,
        old_regime_slabs: old_regime_slabs(),
        new_regime_slabs: vec![
            slab("0-300000", dec!(300000), dec!(0)),
            slab("300000-700000", dec!(400000), dec!(0.05)),
            slab("700000-1000000", dec!(300000), dec!(0.10)),
            slab("1000000-1200000", dec!(200000), dec!(0.15)),
            slab("1200000-1500000", dec!(300000), dec!(0.20)),
            top_slab("1500000+", dec!(0.30)),
        ],
        deductions: vec![
            fixed_deduction(
                "standard-deduction",
                "Standard Deduction",
                "Standard deduction for salaried employees",
                dec!(50000),
                Regime::Old,
            ),
            deduction(
                "hra",
                "HRA Exemption",
                "House Rent Allowance exemption",
                None,
                Regime::Old,
            ),
            deduction(
                "section80c",
                "Section 80C",
                "Investments in specified instruments",
                Some(dec!(150000)),
                Regime::Old,
            ),
            deduction(
                "section80d",
                "Section 80D",
                "Health insurance premium",
                Some(dec!(25000)),
                Regime::Old,
            ),
            deduction(
                "section24b",
                "Section 24(b)",
                "Interest paid on housing loan",
                Some(dec!(200000)),
                Regime::Old,
            ),
            deduction(
                "section80ccd",
                "Section 80CCD",
                "Employee contribution to NPS",
                Some(dec!(50000)),
                Regime::Old,
            ),
            deduction(
                "section80ccd1b",
                "Section 80CCD(1B)",
                "Additional contribution to NPS",
                Some(dec!(50000)),
                Regime::Old,
            ),
            deduction(
                "section80eea",
                "Section 80EEA",
                "Interest paid on home loan for affordable housing",
                Some(dec!(150000)),
                Regime::Old,
            ),
            deduction(
                "section80eeb",
                "Section 80EEB",
                "Interest paid on loan for purchase of electrical vehicle",
                Some(dec!(150000)),
                Regime::Old,
            ),
            fixed_deduction(
                "standard-deduction-new",
                "Standard Deduction",
                "Standard deduction for new regime",
                dec!(50000),
                Regime::New,
            ),
        ],
    }
}

fn fy_2025() -> YearlyTaxSchedule {
    YearlyTaxSchedule {
        financial_year: 2025,
        old_regime_slabs: old_regime_slabs(),
        new_regime_slabs: vec![
            slab("0-400000", dec!(400000), dec!(0)),
            slab("400000-800000", dec!(400000), dec!(0.05)),
            slab("800000-1200000", dec!(400000), dec!(0.10)),
            slab("1200000-1600000", dec!(400000), dec!(0.15)),
            slab("1600000-2000000", dec!(400000), dec!(0.20)),
            slab("2000000-2400000", dec!(400000), dec!(0.25)),
            top_slab("2400000+", dec!(0.30)),
        ],
        deductions: vec![
            fixed_deduction(
                "standard-deduction",
                "Standard Deduction",
                "Standard deduction for salaried employees",
                dec!(50000),
                Regime::Old,
            ),
            deduction(
                "hra",
                "HRA Exemption",
                "House Rent Allowance exemption",
                None,
                Regime::Old,
            ),
            deduction(
                "section80c",
                "Section 80C",
                "Investments in specified instruments",
                Some(dec!(150000)),
                Regime::Old,
            ),
            deduction(
                "section80d",
                "Section 80D",
                "Health insurance premium",
                Some(dec!(50000)),
                Regime::Old,
            ),
            deduction(
                "section24b",
                "Section 24(b)",
                "Interest paid on housing loan",
                Some(dec!(200000)),
                Regime::Old,
            ),
            deduction(
                "section80ccd",
                "Section 80CCD",
                "Employee contribution to NPS",
                Some(dec!(50000)),
                Regime::Old,
            ),
            deduction(
                "section80ccd1b",
                "Section 80CCD(1B)",
                "Additional contribution to NPS",
                Some(dec!(50000)),
                Regime::Old,
            ),
            deduction(
                "section80eea",
                "Section 80EEA",
                "Interest paid on home loan for affordable housing",
                Some(dec!(150000)),
                Regime::Old,
            ),
            deduction(
                "section80eeb",
                "Section 80EEB",
                "Interest paid on loan for purchase of electrical vehicle",
                Some(dec!(150000)),
                Regime::Old,
            ),
            deduction(
                "section80e",
                "Section 80E",
                "Education loan interest",
                None,
                Regime::Old,
            ),
            deduction(
                "section80g",
                "Section 80G",
                "Charitable donations",
                None,
                Regime::Old,
            ),
            fixed_deduction(
                "standard-deduction-new",
                "Standard Deduction",
                "Standard deduction for new regime",
                dec!(75000),
                Regime::New,
            ),
            deduction(
                "section80ccd2-old",
                "80CCD(2)",
                "Employer investment in NPS",
                None,
                Regime::Old,
            ),
            deduction(
                "section80ccd2-new",
                "80CCD(2)",
                "Employer investment in NPS",
                None,
                Regime::New,
            ),
            deduction(
                "epf-employer-new",
                "EPF Employer Contribution",
                "EPF employer contribution is deductible in the new regime (max 10% of basic + DA)",
                None,
                Regime::New,
            ),
            deduction(
                "other-old",
                "Other Deductions",
                "Other deductions under the old regime",
                None,
                Regime::Old,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn builtin_schedules_pass_validation() {
        let registry = ScheduleRegistry::builtin().unwrap();

        assert_eq!(registry.years(), vec![2024, 2025]);
    }

    #[test]
    fn fy_2024_catalogue_has_ten_deductions() {
        assert_eq!(fy_2024().deductions.len(), 10);
    }

    #[test]
    fn fy_2025_catalogue_has_sixteen_deductions() {
        assert_eq!(fy_2025().deductions.len(), 16);
    }

    #[test]
    fn fy_2025_new_regime_standard_deduction_is_raised() {
        let schedule = fy_2025();

        let standard = schedule
            .deductions
            .iter()
            .find(|d| d.id == "standard-deduction-new")
            .unwrap();

        assert_eq!(standard.cap_amount, Some(dec!(75000)));
        assert!(standard.is_fixed);
        assert_eq!(standard.regime, Regime::New);
    }

    #[test]
    fn uncapped_deductions_have_no_cap_amount() {
        for schedule in builtin_schedules() {
            let hra = schedule.deductions.iter().find(|d| d.id == "hra").unwrap();
            assert_eq!(hra.cap_amount, None);
        }
    }

    #[test]
    fn old_regime_slabs_are_shared_between_years() {
        assert_eq!(fy_2024().old_regime_slabs, fy_2025().old_regime_slabs);
    }
}
