mod deduction;
mod regime;
mod schedule;
mod slab;

pub use deduction::DeductionDefinition;
pub use regime::Regime;
pub use schedule::YearlyTaxSchedule;
pub use slab::TaxSlab;
