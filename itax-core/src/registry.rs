//! Year-keyed registry of tax schedules.
//!
//! The registry is built once at process start from static configuration and
//! is read-only afterwards. Every schedule invariant is checked at
//! construction time, so lookups and calculations can rely on them without
//! re-validating.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{DeductionDefinition, Regime, TaxSlab, YearlyTaxSchedule};

/// Configuration errors detected while building a [`ScheduleRegistry`].
///
/// These are startup-time failures: a process handed an invalid schedule set
/// should refuse to start rather than compute from bad reference data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("no tax schedules registered")]
    NoSchedules,

    #[error("duplicate schedule for financial year {0}")]
    DuplicateYear(i32),

    #[error("financial year {year}, {regime} regime: slab list is empty")]
    EmptySlabs { year: i32, regime: Regime },

    #[error("financial year {year}, {regime} regime: the last slab must be unbounded")]
    MissingUnboundedSlab { year: i32, regime: Regime },

    #[error(
        "financial year {year}, {regime} regime, slab '{label}': only the last slab may be unbounded"
    )]
    UnboundedSlabNotLast {
        year: i32,
        regime: Regime,
        label: String,
    },

    #[error("financial year {year}, {regime} regime, slab '{label}': rate {rate} is outside [0, 1]")]
    RateOutOfRange {
        year: i32,
        regime: Regime,
        label: String,
        rate: Decimal,
    },

    #[error(
        "financial year {year}, {regime} regime, slab '{label}': capacity {capacity} is negative"
    )]
    NegativeCapacity {
        year: i32,
        regime: Regime,
        label: String,
        capacity: Decimal,
    },

    #[error("financial year {year}: duplicate deduction id '{id}'")]
    DuplicateDeductionId { year: i32, id: String },

    #[error("financial year {year}: fixed deduction '{id}' has no cap amount")]
    FixedDeductionWithoutCap { year: i32, id: String },
}

/// Immutable collection of per-year schedules, looked up by exact year.
///
/// There is no fuzzy matching: a year is either registered or it is not, and
/// callers must treat an absent year as "unsupported" rather than fall back
/// to a neighbouring schedule.
#[derive(Debug, Clone)]
pub struct ScheduleRegistry {
    schedules: BTreeMap<i32, YearlyTaxSchedule>,
}

impl ScheduleRegistry {
    /// Builds a registry, validating every schedule.
    pub fn new(schedules: Vec<YearlyTaxSchedule>) -> Result<Self, RegistryError> {
        if schedules.is_empty() {
            return Err(RegistryError::NoSchedules);
        }

        let mut by_year = BTreeMap::new();
        for schedule in schedules {
            validate_schedule(&schedule)?;
            let year = schedule.financial_year;
            if by_year.insert(year, schedule).is_some() {
                return Err(RegistryError::DuplicateYear(year));
            }
        }

        Ok(Self { schedules: by_year })
    }

    /// Exact-match lookup; `None` when no schedule is registered for `year`.
    pub fn schedule_for_year(&self, year: i32) -> Option<&YearlyTaxSchedule> {
        self.schedules.get(&year)
    }

    /// The year's deduction catalogue, or an empty slice for unknown years.
    pub fn deductions_for_year(&self, year: i32) -> &[DeductionDefinition] {
        self.schedule_for_year(year)
            .map(|s| s.deductions.as_slice())
            .unwrap_or(&[])
    }

    /// The most recent registered financial year.
    pub fn latest_year(&self) -> i32 {
        // Non-emptiness is established in `new`.
        *self
            .schedules
            .keys()
            .next_back()
            .expect("registry holds at least one schedule")
    }

    /// All registered financial years, ascending.
    pub fn years(&self) -> Vec<i32> {
        self.schedules.keys().copied().collect()
    }
}

fn validate_schedule(schedule: &YearlyTaxSchedule) -> Result<(), RegistryError> {
    let year = schedule.financial_year;
    for regime in Regime::ALL {
        validate_slabs(year, regime, schedule.slabs_for(regime))?;
    }
    validate_deductions(year, &schedule.deductions)
}

fn validate_slabs(year: i32, regime: Regime, slabs: &[TaxSlab]) -> Result<(), RegistryError> {
    let Some((last, rest)) = slabs.split_last() else {
        return Err(RegistryError::EmptySlabs { year, regime });
    };

    if last.capacity.is_some() {
        return Err(RegistryError::MissingUnboundedSlab { year, regime });
    }

    for slab in rest {
        let Some(capacity) = slab.capacity else {
            return Err(RegistryError::UnboundedSlabNotLast {
                year,
                regime,
                label: slab.range_label.clone(),
            });
        };
        if capacity < Decimal::ZERO {
            return Err(RegistryError::NegativeCapacity {
                year,
                regime,
                label: slab.range_label.clone(),
                capacity,
            });
        }
    }

    for slab in slabs {
        if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
            return Err(RegistryError::RateOutOfRange {
                year,
                regime,
                label: slab.range_label.clone(),
                rate: slab.rate,
            });
        }
    }

    Ok(())
}

fn validate_deductions(
    year: i32,
    deductions: &[DeductionDefinition],
) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for deduction in deductions {
        if !seen.insert(deduction.id.as_str()) {
            return Err(RegistryError::DuplicateDeductionId {
                year,
                id: deduction.id.clone(),
            });
        }
        if deduction.is_fixed && deduction.cap_amount.is_none() {
            return Err(RegistryError::FixedDeductionWithoutCap {
                year,
                id: deduction.id.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn slab(label: &str, capacity: Option<Decimal>, rate: Decimal) -> TaxSlab {
        TaxSlab {
            range_label: label.to_string(),
            capacity,
            rate,
        }
    }

    fn minimal_schedule(year: i32) -> YearlyTaxSchedule {
        YearlyTaxSchedule {
            financial_year: year,
            old_regime_slabs: vec![
                slab("0-250000", Some(dec!(250000)), dec!(0)),
                slab("250000+", None, dec!(0.30)),
            ],
            new_regime_slabs: vec![
                slab("0-300000", Some(dec!(300000)), dec!(0)),
                slab("300000+", None, dec!(0.30)),
            ],
            deductions: vec![],
        }
    }

    // =========================================================================
    // lookup tests
    // =========================================================================

    #[test]
    fn schedule_for_year_finds_exact_match() {
        let registry =
            ScheduleRegistry::new(vec![minimal_schedule(2024), minimal_schedule(2025)]).unwrap();

        let schedule = registry.schedule_for_year(2024);

        assert_eq!(schedule.map(|s| s.financial_year), Some(2024));
    }

    #[test]
    fn schedule_for_year_returns_none_for_unknown_year() {
        let registry = ScheduleRegistry::new(vec![minimal_schedule(2024)]).unwrap();

        assert_eq!(registry.schedule_for_year(2099), None);
    }

    #[test]
    fn deductions_for_year_is_empty_for_unknown_year() {
        let registry = ScheduleRegistry::new(vec![minimal_schedule(2024)]).unwrap();

        assert!(registry.deductions_for_year(2099).is_empty());
    }

    #[test]
    fn latest_year_returns_maximum() {
        let registry =
            ScheduleRegistry::new(vec![minimal_schedule(2025), minimal_schedule(2024)]).unwrap();

        assert_eq!(registry.latest_year(), 2025);
    }

    #[test]
    fn years_are_ascending() {
        let registry =
            ScheduleRegistry::new(vec![minimal_schedule(2025), minimal_schedule(2024)]).unwrap();

        assert_eq!(registry.years(), vec![2024, 2025]);
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn empty_registry_is_a_configuration_error() {
        let result = ScheduleRegistry::new(vec![]);

        assert_eq!(result.unwrap_err(), RegistryError::NoSchedules);
    }

    #[test]
    fn duplicate_year_is_rejected() {
        let result = ScheduleRegistry::new(vec![minimal_schedule(2024), minimal_schedule(2024)]);

        assert_eq!(result.unwrap_err(), RegistryError::DuplicateYear(2024));
    }

    #[test]
    fn empty_slab_list_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.new_regime_slabs.clear();

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::EmptySlabs {
                year: 2024,
                regime: Regime::New,
            }
        );
    }

    #[test]
    fn bounded_final_slab_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.old_regime_slabs = vec![
            slab("0-250000", Some(dec!(250000)), dec!(0)),
            slab("250000-500000", Some(dec!(250000)), dec!(0.05)),
        ];

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingUnboundedSlab {
                year: 2024,
                regime: Regime::Old,
            }
        );
    }

    #[test]
    fn unbounded_slab_in_the_middle_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.old_regime_slabs = vec![
            slab("0-250000", None, dec!(0)),
            slab("250000+", None, dec!(0.30)),
        ];

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::UnboundedSlabNotLast {
                year: 2024,
                regime: Regime::Old,
                label: "0-250000".to_string(),
            }
        );
    }

    #[test]
    fn rate_above_one_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.old_regime_slabs[1].rate = dec!(1.5);

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::RateOutOfRange {
                year: 2024,
                regime: Regime::Old,
                label: "250000+".to_string(),
                rate: dec!(1.5),
            }
        );
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.old_regime_slabs[0].capacity = Some(dec!(-1));

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::NegativeCapacity {
                year: 2024,
                regime: Regime::Old,
                label: "0-250000".to_string(),
                capacity: dec!(-1),
            }
        );
    }

    #[test]
    fn duplicate_deduction_id_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        let deduction = DeductionDefinition {
            id: "section80c".to_string(),
            display_name: "Section 80C".to_string(),
            description: String::new(),
            cap_amount: Some(dec!(150000)),
            regime: Regime::Old,
            is_fixed: false,
        };
        schedule.deductions = vec![deduction.clone(), deduction];

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateDeductionId {
                year: 2024,
                id: "section80c".to_string(),
            }
        );
    }

    #[test]
    fn fixed_deduction_without_cap_is_rejected() {
        let mut schedule = minimal_schedule(2024);
        schedule.deductions = vec![DeductionDefinition {
            id: "standard-deduction".to_string(),
            display_name: "Standard Deduction".to_string(),
            description: String::new(),
            cap_amount: None,
            regime: Regime::Old,
            is_fixed: true,
        }];

        let result = ScheduleRegistry::new(vec![schedule]);

        assert_eq!(
            result.unwrap_err(),
            RegistryError::FixedDeductionWithoutCap {
                year: 2024,
                id: "standard-deduction".to_string(),
            }
        );
    }
}
