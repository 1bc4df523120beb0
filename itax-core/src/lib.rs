pub mod calculations;
pub mod engine;
pub mod models;
pub mod registry;
pub mod tables;

pub use calculations::{CalculationResult, DeductionClaims, RegimeComputation, SlabTax};
pub use engine::{EngineError, TaxEngine};
pub use models::*;
pub use registry::{RegistryError, ScheduleRegistry};
