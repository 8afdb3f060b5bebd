use std::fs;
use std::path::Path;

use crate::error::{CheckerError, Result};

use super::checks;
use super::line::{Line, classify};
use super::Report;

/// Validates the text of one instance file.
///
/// Lines are scanned in order. The first malformed line is recorded as an error,
/// tagged with its 0-based index in the file, and ends the scan. The post-scan
/// consistency checks only run when the scan recorded no error.
#[must_use]
pub fn validate(path: &Path, content: &str) -> Report {
    let _span = tracing::info_span!("validate", instance = %path.display()).entered();

    let mut report = Report::new(path);
    report
        .diagnostics
        .info(format!("Checking file: {}", path.display()));

    scan(&mut report, content);

    if report.has_errors() {
        report
            .diagnostics
            .info("Error lines are present. Aborting further analysis.");
        return report;
    }

    let findings = checks::run(&report);
    report.diagnostics.append(findings);
    report
}

/// Reads and validates an instance file.
///
/// # Errors
/// Returns an error if the file cannot be read as UTF-8 text.
pub fn validate_file(path: &Path) -> Result<Report> {
    let content = fs::read_to_string(path).map_err(|source| CheckerError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(validate(path, &content))
}

fn scan(report: &mut Report, content: &str) {
    for (index, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        match classify(line) {
            Ok(kind) => apply(report, kind),
            Err(reason) => {
                report
                    .diagnostics
                    .error(format!("{reason} (index {index}): '{line}'"));
                break;
            }
        }
    }
}

fn apply(report: &mut Report, line: Line<'_>) {
    match line {
        Line::HeaderType(file_type) => {
            report.declared_file_type = Some(file_type.to_string());
        }
        Line::Problem { vars, clauses } => {
            report.declared_vars = vars;
            report.declared_clauses = clauses;
            report.has_problem_line = true;
        }
        Line::FileName(name) => {
            let expected = report.expected_file_name();
            if name != expected {
                report
                    .diagnostics
                    .error(format!("Filename in header was {name}, expected: {expected}"));
            }
            report.declared_file_name = Some(name.to_string());
        }
        Line::Weight(_) => {
            report.inferred_file_type = report.inferred_file_type.with_weights();
            report
                .diagnostics
                .info("Instance is a weighted model counting instance");
        }
        Line::Projection(ids) => {
            report.inferred_file_type = report.inferred_file_type.with_projection();
            report
                .diagnostics
                .info("Instance is a projected model counting instance");
            report.projection = Some(ids);
        }
        Line::Comment => {}
        Line::Clause(literals) => {
            report
                .found_variables
                .extend(literals.iter().map(|literal| literal.unsigned_abs()));
            report.found_clauses += 1;
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
