use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of a progressive rate schedule.
///
/// Slabs are immutable reference data. Allocation results are kept in a
/// parallel [`SlabTax`](crate::calculations::SlabTax) vector, so computing a
/// tax never touches schedule-owned values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    /// Display-only label for the bracket bounds, e.g. "250000-500000".
    pub range_label: String,

    /// Maximum income this bracket can absorb. `None` marks the unbounded
    /// top bracket, which must be last in its schedule.
    pub capacity: Option<Decimal>,

    /// Fractional marginal rate applied to income inside this bracket.
    pub rate: Decimal,
}
