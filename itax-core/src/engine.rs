//! The engine's external boundary.
//!
//! Collaborators (a form front-end, a chat assistant, the bundled CLI) hand
//! over a financial year, a gross income, and raw deduction claims; the
//! engine resolves the year's schedule, pins fixed deductions, aggregates
//! per-regime totals, and returns both regimes' liability.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::deductions::{self, DeductionClaims};
use crate::calculations::regimes::{CalculationResult, RegimeComparator};
use crate::models::Regime;
use crate::registry::{RegistryError, ScheduleRegistry};

/// Errors surfaced to collaborators at calculation time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The requested year has no registered schedule. Callers must refuse to
    /// compute and report the year as unsupported; the engine never falls
    /// back to another year.
    #[error("no tax schedule registered for financial year {0}")]
    UnsupportedYear(i32),
}

/// Front door of the computation engine: owns the registry and turns a
/// collaborator's raw inputs into a [`CalculationResult`].
#[derive(Debug, Clone)]
pub struct TaxEngine {
    registry: ScheduleRegistry,
}

impl TaxEngine {
    pub fn new(registry: ScheduleRegistry) -> Self {
        Self { registry }
    }

    /// Engine over the built-in schedules.
    pub fn builtin() -> Result<Self, RegistryError> {
        Ok(Self::new(ScheduleRegistry::builtin()?))
    }

    pub fn registry(&self) -> &ScheduleRegistry {
        &self.registry
    }

    /// Computes both regimes' liability for one taxpayer.
    ///
    /// Fixed deductions are pinned to their cap amounts before aggregation,
    /// regardless of what `claims` contains for their ids.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedYear`] when `year` has no
    /// registered schedule.
    pub fn calculate(
        &self,
        year: i32,
        gross_income: Decimal,
        claims: &DeductionClaims,
    ) -> Result<CalculationResult, EngineError> {
        let schedule = self
            .registry
            .schedule_for_year(year)
            .ok_or(EngineError::UnsupportedYear(year))?;

        let mut claims = claims.clone();
        deductions::apply_fixed_claims(&mut claims, &schedule.deductions);

        let old_total = deductions::total_deductions(&claims, &schedule.deductions, Regime::Old);
        let new_total = deductions::total_deductions(&claims, &schedule.deductions, Regime::New);

        debug!(
            year,
            gross_income = %gross_income,
            old_deductions = %old_total,
            new_deductions = %new_total,
            "comparing regimes"
        );

        Ok(RegimeComparator::new(schedule).compare(gross_income, old_total, new_total))
    }
}
