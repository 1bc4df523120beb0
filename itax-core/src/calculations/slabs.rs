//! Progressive slab allocation.
//!
//! Distributes a taxable amount across an ordered slab schedule and computes
//! the tax owed inside each bracket. Each bounded slab absorbs income up to
//! its capacity; the final unbounded slab absorbs whatever remains.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use itax_core::TaxSlab;
//! use itax_core::calculations::{allocate, total_tax};
//!
//! let slabs = vec![
//!     TaxSlab {
//!         range_label: "0-250000".to_string(),
//!         capacity: Some(dec!(250000)),
//!         rate: dec!(0),
//!     },
//!     TaxSlab {
//!         range_label: "250000-500000".to_string(),
//!         capacity: Some(dec!(250000)),
//!         rate: dec!(0.05),
//!     },
//!     TaxSlab {
//!         range_label: "500000+".to_string(),
//!         capacity: None,
//!         rate: dec!(0.20),
//!     },
//! ];
//!
//! let allocation = allocate(dec!(600000), &slabs);
//!
//! assert_eq!(allocation[1].tax, dec!(12500.00));
//! assert_eq!(allocation[2].tax, dec!(20000.00));
//! assert_eq!(total_tax(&allocation), dec!(32500.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxSlab;

/// Per-slab output of one allocation.
///
/// Carries the slab's display fields alongside the computed tax so a result
/// can be rendered without referring back to the schedule. One allocation's
/// rows are aligned index-for-index with the schedule that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTax {
    pub range_label: String,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Distributes `taxable_amount` across `slabs` in schedule order.
///
/// A zero or negative taxable amount produces an all-zero allocation:
/// deductions exceeding income is valid input, not an error. The allocator
/// never fails; out-of-range input saturates at zero tax.
///
/// The schedule is borrowed read-only. Results come back in a fresh vector,
/// so two calculations can share one schedule without contaminating each
/// other.
pub fn allocate(taxable_amount: Decimal, slabs: &[TaxSlab]) -> Vec<SlabTax> {
    let mut remaining = taxable_amount;
    let mut allocation = Vec::with_capacity(slabs.len());

    for slab in slabs {
        let absorbed = if remaining <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            match slab.capacity {
                Some(capacity) if remaining >= capacity => capacity,
                // A bounded slab with room to spare, or the unbounded top
                // slab: either way it takes everything left.
                _ => remaining,
            }
        };
        remaining -= absorbed;

        allocation.push(SlabTax {
            range_label: slab.range_label.clone(),
            rate: slab.rate,
            tax: absorbed * slab.rate,
        });
    }

    allocation
}

/// Sum of per-slab taxes: the pre-cess liability.
pub fn total_tax(allocation: &[SlabTax]) -> Decimal {
    allocation.iter().map(|row| row.tax).sum()
}
