//! Cross-field consistency checks run over a completed scan.
//!
//! Each check reads the report and records its findings in a fresh
//! [`Diagnostics`], so the scanned facts are never mutated here.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use indexmap::IndexMap;

use super::{Diagnostics, Report, WeightEntry};

/// Runs the full check battery in its fixed order.
#[must_use]
pub fn run(report: &Report) -> Diagnostics {
    let mut out = Diagnostics::new();
    let max_found = report.max_found_variable().unwrap_or(0);

    check_problem_line(report, &mut out);
    check_clause_count(report, &mut out);
    check_file_type(report, &mut out);
    check_variable_count(report, max_found, &mut out);
    check_consecutive(report, max_found, &mut out);
    check_projection(report, max_found, &mut out);
    check_duplicate_weight_flag(report, &mut out);
    if let Some(weights) = &report.weights {
        check_weights(weights, max_found, &mut out);
        check_duplicate_weights(weights, &mut out);
    }
    check_file_name_present(report, &mut out);

    out
}

fn check_problem_line(report: &Report, out: &mut Diagnostics) {
    if !report.has_problem_line {
        out.error("Problem line is missing.");
    }
}

fn check_clause_count(report: &Report, out: &mut Diagnostics) {
    let (found, declared) = (report.found_clauses, report.declared_clauses);
    if found == declared {
        return;
    }

    let message = format!(
        "Number of clauses does not match with the header. \
         Found clauses {found}. Header announced {declared}."
    );
    if found > declared {
        out.error(message);
        out.error("More clauses than announced.");
    } else {
        out.warn(message);
    }
}

fn check_file_type(report: &Report, out: &mut Diagnostics) {
    let inferred = report.inferred_file_type;
    match report.declared_file_type.as_deref() {
        None => out.warn("File type is missing."),
        Some(declared) if declared != inferred.as_str() => out.error(format!(
            "Wrong file type. Expected {inferred}. Announced was {declared}."
        )),
        Some(_) => {}
    }
}

fn check_variable_count(report: &Report, max_found: u64, out: &mut Diagnostics) {
    let declared = report.declared_vars as u64;
    if max_found == declared {
        return;
    }

    out.warn(format!(
        "Number of variables does not match with the header. \
         Found variables {max_found}. Header announced {declared}."
    ));

    if max_found > declared {
        out.error("More variables than announced.");
    } else {
        let unused = absent_ranges(&report.found_variables, declared);
        out.warn(format!(
            "Found some unused variables. Variables: {}",
            format_ranges(&unused)
        ));
    }
}

fn check_consecutive(report: &Report, max_found: u64, out: &mut Diagnostics) {
    let missing = absent_ranges(&report.found_variables, max_found);
    if !missing.is_empty() {
        out.warn(format!(
            "Variables are not consecutive. Missing ids: {}",
            format_ranges(&missing)
        ));
    }
}

/// Ids in `1..=upto` absent from `found`, as inclusive runs.
///
/// Walks the found set instead of the id range, so the cost does not depend on
/// how large `upto` is.
fn absent_ranges(found: &BTreeSet<u64>, upto: u64) -> Vec<RangeInclusive<u64>> {
    let mut ranges = Vec::new();
    if upto == 0 {
        return ranges;
    }

    let mut next = 1;
    for &id in found.range(1..=upto) {
        if id > next {
            ranges.push(next..=id - 1);
        }
        match id.checked_add(1) {
            Some(after) => next = after,
            None => return ranges,
        }
    }
    if next <= upto {
        ranges.push(next..=upto);
    }
    ranges
}

/// Renders runs as `[2, 4, 6..=9]`; runs of one or two ids are spelled out.
fn format_ranges(ranges: &[RangeInclusive<u64>]) -> String {
    let parts: Vec<String> = ranges
        .iter()
        .map(|range| {
            let (start, end) = (*range.start(), *range.end());
            match end - start {
                0 => start.to_string(),
                1 => format!("{start}, {end}"),
                _ => format!("{start}..={end}"),
            }
        })
        .collect();
    format!("[{}]", parts.join(", "))
}

fn check_projection(report: &Report, max_found: u64, out: &mut Diagnostics) {
    let Some(highest) = report.projection.as_ref().and_then(|ids| ids.last()) else {
        return;
    };
    if i128::from(*highest) > i128::from(max_found) {
        out.error("Some projected variables are unknown.");
    }
}

fn check_duplicate_weight_flag(report: &Report, out: &mut Diagnostics) {
    if report.has_duplicate_weight {
        out.error("Instance contains duplicate weight entries for the same literal.");
    }
}

/// Per-entry checks: variable exists, weight in (0, 1], complement present and
/// the pair does not exceed 1 unless both weights are exactly 1.
#[allow(clippy::float_cmp)]
fn check_weights(weights: &[WeightEntry], max_found: u64, out: &mut Diagnostics) {
    for entry in weights {
        let (literal, value) = (entry.literal, entry.weight);
        let variable = literal.unsigned_abs();

        if variable > max_found {
            out.error(format!("Weights: Variable {variable} does not exist."));
        }
        if value <= 0.0 || value > 1.0 {
            out.warn(format!(
                "Weight for literal {literal} is {value}, expected 0 < weight <= 1."
            ));
        }

        let Some(complement) = literal.checked_neg() else {
            out.error(format!("Weight for literal {literal} has no complement literal."));
            continue;
        };
        match weights.iter().find(|other| other.literal == complement) {
            None => out.error(format!(
                "Weight for literal {complement} missing while there is one for {literal}."
            )),
            Some(other) => {
                let sum = value + other.weight;
                if sum > 1.0 && !(value == 1.0 && other.weight == 1.0) {
                    out.warn(format!(
                        "Weights of literals {literal}/{complement} do not add to 1 \
                         ({sum}={value}+{})",
                        other.weight
                    ));
                }
            }
        }
    }
}

fn check_duplicate_weights(weights: &[WeightEntry], out: &mut Diagnostics) {
    let mut ordered: Vec<i64> = weights.iter().map(|entry| entry.literal).collect();
    ordered.sort_by_key(|literal| literal.unsigned_abs());

    let mut occurrences: IndexMap<i64, usize> = IndexMap::new();
    for literal in ordered {
        *occurrences.entry(literal).or_insert(0) += 1;
    }

    for (literal, count) in occurrences.into_iter().filter(|(_, count)| *count > 1) {
        out.error(format!(
            "Duplicate weight for {literal}. Occurred {count} times."
        ));
    }
}

fn check_file_name_present(report: &Report, out: &mut Diagnostics) {
    if report.declared_file_name.is_none() {
        out.warn("Filename in header is missing.");
    }
}

#[cfg(test)]
#[path = "checks_tests.rs"]
mod tests;
