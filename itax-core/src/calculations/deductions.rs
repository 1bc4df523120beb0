//! Deduction claim aggregation.
//!
//! Claims arrive exactly as a collaborator captured them: raw strings keyed
//! by deduction id, possibly blank. Parsing is deliberately lenient — a
//! blank or malformed entry means "nothing claimed", never an error.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{DeductionDefinition, Regime};

/// Raw deduction claims supplied by a collaborator: deduction id to the
/// amount exactly as entered.
pub type DeductionClaims = BTreeMap<String, String>;

/// Parses a claimed amount, treating anything unparsable as zero.
pub fn parse_or_zero(raw: &str) -> Decimal {
    raw.trim().parse().unwrap_or(Decimal::ZERO)
}

/// Sums the claims applicable to `regime` against the year's definitions.
///
/// A claim counts only when its id resolves to a definition for the
/// requested regime and its value is non-empty. Caps are not enforced here:
/// `cap_amount` is advisory, except for fixed deductions, which the caller
/// pins via [`apply_fixed_claims`] before aggregating.
pub fn total_deductions(
    claims: &DeductionClaims,
    definitions: &[DeductionDefinition],
    regime: Regime,
) -> Decimal {
    let mut total = Decimal::ZERO;

    for (id, raw) in claims {
        let Some(definition) = definitions.iter().find(|d| d.id == *id) else {
            warn!(id = %id, "claim does not match any deduction for this year");
            continue;
        };
        if definition.regime != regime || raw.trim().is_empty() {
            continue;
        }
        total += parse_or_zero(raw);
    }

    total
}

/// Overwrites the claim for every fixed deduction with its cap amount.
///
/// Fixed deductions (e.g. the standard deduction) are not user-editable;
/// whatever a collaborator supplied for their ids is discarded.
pub fn apply_fixed_claims(claims: &mut DeductionClaims, definitions: &[DeductionDefinition]) {
    for definition in definitions {
        if !definition.is_fixed {
            continue;
        }
        // Validation guarantees fixed deductions carry a cap.
        if let Some(cap) = definition.cap_amount {
            claims.insert(definition.id.clone(), cap.to_string());
        }
    }
}
