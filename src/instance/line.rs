use std::collections::BTreeSet;

use thiserror::Error;

const HEADER_TYPE_PREFIX: &str = "c t ";
const PROBLEM_PREFIX: &str = "p";
const FILE_NAME_PREFIX: &str = "c file ";
const WEIGHT_PREFIX: &str = "c p weight ";
const PROJECTION_PREFIX: &str = "c p show ";
const COMMENT_PREFIX: &str = "c";
const TERMINATOR: &str = "0";

/// Number of leading fields of a projection line before the variable ids.
const PROJECTION_ID_OFFSET: usize = 3;

/// One classified, non-empty line of an instance file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `c t <type>`: the declared file type.
    HeaderType(&'a str),
    /// `p <format> <vars> <clauses>`.
    Problem { vars: usize, clauses: usize },
    /// `c file <name>`: the declared file name.
    FileName(&'a str),
    /// `c p weight ... 0`. The content is kept raw.
    Weight(&'a str),
    /// `c p show <ids> 0`: the projected variables.
    Projection(BTreeSet<i64>),
    Comment,
    /// Literals of a clause, without the terminating `0`.
    Clause(Vec<i64>),
}

/// Reason a line could not be classified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedLine {
    #[error("File type line has unexpected format")]
    HeaderType,

    #[error("Problem line has unexpected format")]
    Problem,

    #[error("File name line has unexpected format")]
    FileName,

    #[error("Weight line is not terminated by 0")]
    UnterminatedWeight,

    #[error("Projection line is not terminated by 0")]
    UnterminatedProjection,

    #[error("Projection line has an unknown format")]
    Projection,

    #[error("Clause line has an unknown format")]
    Clause,

    #[error("Clause line is not terminated by 0")]
    UnterminatedClause,
}

/// Classifies a trimmed, non-empty line and extracts its fields.
///
/// Prefixes are tried in a fixed order: file type, problem line, file name,
/// weights, projection, plain comment. Anything else is a clause.
///
/// # Errors
/// Returns the [`MalformedLine`] reason when the line matches a kind but its
/// fields do not have the expected shape.
pub fn classify(line: &str) -> Result<Line<'_>, MalformedLine> {
    if line.starts_with(HEADER_TYPE_PREFIX) {
        return nth_field(line, 2)
            .map(Line::HeaderType)
            .ok_or(MalformedLine::HeaderType);
    }
    if line.starts_with(PROBLEM_PREFIX) {
        return parse_problem(line);
    }
    if line.starts_with(FILE_NAME_PREFIX) {
        return nth_field(line, 2)
            .map(Line::FileName)
            .ok_or(MalformedLine::FileName);
    }
    if line.starts_with(WEIGHT_PREFIX) {
        return if is_terminated(line) {
            Ok(Line::Weight(line))
        } else {
            Err(MalformedLine::UnterminatedWeight)
        };
    }
    if line.starts_with(PROJECTION_PREFIX) {
        return parse_projection(line);
    }
    if line.starts_with(COMMENT_PREFIX) {
        return Ok(Line::Comment);
    }
    parse_clause(line)
}

fn nth_field(line: &str, n: usize) -> Option<&str> {
    line.split_whitespace().nth(n)
}

fn is_terminated(line: &str) -> bool {
    line.split_whitespace().last() == Some(TERMINATOR)
}

fn parse_problem(line: &str) -> Result<Line<'_>, MalformedLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(MalformedLine::Problem);
    }
    let vars = fields[2].parse().map_err(|_| MalformedLine::Problem)?;
    let clauses = fields[3].parse().map_err(|_| MalformedLine::Problem)?;
    Ok(Line::Problem { vars, clauses })
}

fn parse_projection(line: &str) -> Result<Line<'_>, MalformedLine> {
    if !is_terminated(line) {
        return Err(MalformedLine::UnterminatedProjection);
    }
    let fields: Vec<&str> = line.split_whitespace().collect();
    let ids = fields
        .get(PROJECTION_ID_OFFSET..fields.len() - 1)
        .unwrap_or_default()
        .iter()
        .map(|field| field.parse::<i64>())
        .collect::<Result<BTreeSet<_>, _>>()
        .map_err(|_| MalformedLine::Projection)?;
    Ok(Line::Projection(ids))
}

fn parse_clause(line: &str) -> Result<Line<'_>, MalformedLine> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let Some((last, literals)) = fields.split_last() else {
        return Err(MalformedLine::UnterminatedClause);
    };
    let literals = literals
        .iter()
        .map(|field| field.parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| MalformedLine::Clause)?;
    if *last != TERMINATOR {
        return Err(MalformedLine::UnterminatedClause);
    }
    Ok(Line::Clause(literals))
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
