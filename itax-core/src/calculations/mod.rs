//! Tax calculation modules for the two-regime slab model.
//!
//! Calculations are pure functions over borrowed reference data: the slab
//! allocator distributes a taxable amount across a schedule, the deduction
//! aggregator sums a collaborator's claims per regime, and the regime
//! comparator runs both schedules side by side and applies the cess.

pub mod deductions;
pub mod regimes;
pub mod slabs;

pub use deductions::{DeductionClaims, apply_fixed_claims, parse_or_zero, total_deductions};
pub use regimes::{CESS_RATE, CalculationResult, RegimeComparator, RegimeComputation};
pub use slabs::{SlabTax, allocate, total_tax};
