//! Plain-text rendering of calculation results.
//!
//! Amounts are shown in whole rupees with Indian digit grouping
//! (e.g. ₹12,34,567): the last three digits form one group, every group
//! above them holds two.

use std::fmt::Write;

use itax_core::{CalculationResult, DeductionDefinition, Regime, RegimeComputation};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole rupees with Indian digit grouping.
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&rounded.abs().to_string()))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn format_rate(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

pub fn render_result(result: &CalculationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Financial year {}, gross income {}",
        result.financial_year,
        format_inr(result.gross_income)
    );

    render_regime(&mut out, "Old regime", result.gross_income, &result.old_regime);
    render_regime(&mut out, "New regime", result.gross_income, &result.new_regime);

    out
}

fn render_regime(
    out: &mut String,
    title: &str,
    gross_income: Decimal,
    regime: &RegimeComputation,
) {
    let deduction_total = gross_income - regime.taxable_income;
    let label_width = regime
        .slabs
        .iter()
        .map(|s| s.range_label.len())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out);
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "  Total deductions:  {}", format_inr(deduction_total));
    let _ = writeln!(
        out,
        "  Taxable income:    {}",
        format_inr(regime.taxable_income)
    );
    for slab in &regime.slabs {
        let _ = writeln!(
            out,
            "    {:<label_width$}  @ {:>4}  {}",
            slab.range_label,
            format_rate(slab.rate),
            format_inr(slab.tax)
        );
    }
    let _ = writeln!(
        out,
        "  Tax before cess:   {}",
        format_inr(regime.tax_before_cess)
    );
    let _ = writeln!(
        out,
        "  Health & education cess (4%): {}",
        format_inr(regime.cess)
    );
    let _ = writeln!(
        out,
        "  Total tax payable: {}",
        format_inr(regime.total_payable)
    );
}

pub fn render_deductions(year: i32, deductions: &[DeductionDefinition]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Deductions for financial year {year}");

    let id_width = deductions.iter().map(|d| d.id.len()).max().unwrap_or(0);
    let name_width = deductions
        .iter()
        .map(|d| d.display_name.len())
        .max()
        .unwrap_or(0);

    for regime in Regime::ALL {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} regime", capitalize(regime.as_str()));

        for deduction in deductions.iter().filter(|d| d.regime == regime) {
            let cap = match deduction.cap_amount {
                Some(cap) => format!("cap {}", format_inr(cap)),
                None => "no cap".to_string(),
            };
            let fixed = if deduction.is_fixed { " (fixed)" } else { "" };
            let _ = writeln!(
                out,
                "  {:<id_width$}  {:<name_width$}  {cap}{fixed}",
                deduction.id, deduction.display_name
            );
        }
    }

    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
