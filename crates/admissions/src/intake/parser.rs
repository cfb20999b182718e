use std::io::BufRead;

use tracing::warn;

use super::{IntakeError, IntakeOptions, MalformedLinePolicy};
use crate::allocation::{Applicant, Department, Person};

/// Malformed applicant record, identified by its 1-based line number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected} fields (first name, last name, GPA, departments), found {actual}")]
    FieldCount { expected: usize, actual: usize },
    #[error("GPA '{value}' is not a finite number")]
    InvalidGpa { value: String },
    #[error("field {column} is empty")]
    EmptyField { column: usize },
    #[error("record is not valid UTF-8")]
    InvalidUtf8,
}

/// Reads `first last gpa dept...` records, one per line, separated by any whitespace.
pub(crate) fn parse_lines<R: BufRead>(
    reader: R,
    options: &IntakeOptions,
) -> Result<Vec<Applicant>, IntakeError> {
    let mut applicants = Vec::new();

    for (index, chunk) in reader.split(b'\n').enumerate() {
        let chunk = chunk?;
        let record = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
        let line = match std::str::from_utf8(record) {
            Ok(line) => line,
            Err(_) => {
                handle_malformed(index + 1, ParseErrorKind::InvalidUtf8, options)?;
                continue;
            }
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        match parse_fields(&fields, options.preferences_per_applicant) {
            Ok(applicant) => applicants.push(applicant),
            Err(kind) => handle_malformed(index + 1, kind, options)?,
        }
    }

    Ok(applicants)
}

/// Builds an applicant from already-split fields.
pub(crate) fn parse_fields(
    fields: &[&str],
    preferences_per_applicant: usize,
) -> Result<Applicant, ParseErrorKind> {
    let expected = 3 + preferences_per_applicant;
    if fields.len() != expected {
        return Err(ParseErrorKind::FieldCount {
            expected,
            actual: fields.len(),
        });
    }

    if let Some(position) = fields.iter().position(|field| field.is_empty()) {
        return Err(ParseErrorKind::EmptyField {
            column: position + 1,
        });
    }

    let gpa = parse_gpa(fields[2])?;
    let preferences = fields[3..].iter().map(|&id| Department::new(id)).collect();

    Ok(Applicant::new(
        Person::new(fields[0], fields[1]),
        gpa,
        preferences,
    ))
}

fn parse_gpa(raw: &str) -> Result<f64, ParseErrorKind> {
    raw.parse::<f64>()
        .ok()
        .filter(|gpa| gpa.is_finite())
        .ok_or_else(|| ParseErrorKind::InvalidGpa {
            value: raw.to_string(),
        })
}

pub(crate) fn handle_malformed(
    line: usize,
    kind: ParseErrorKind,
    options: &IntakeOptions,
) -> Result<(), IntakeError> {
    let error = ParseError { line, kind };
    match options.malformed_lines {
        MalformedLinePolicy::Reject => Err(IntakeError::Parse(error)),
        MalformedLinePolicy::Skip => {
            warn!(%error, "skipping malformed applicant record");
            Ok(())
        }
    }
}
