//! Applicant record intake from whitespace-separated text or CSV exports.

pub mod capacity;
mod csv_import;
mod parser;

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::info;

use crate::allocation::{Applicant, DEFAULT_PREFERENCES_PER_APPLICANT};

pub use capacity::{parse_capacity, read_capacity, CapacityError};
pub use parser::{ParseError, ParseErrorKind};

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("failed to read applicant records: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid applicant CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed applicant record at {0}")]
    Parse(#[from] ParseError),
}

/// What to do with a record that has the wrong shape or an unreadable GPA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Abort intake at the first malformed record.
    #[default]
    Reject,
    /// Log and drop malformed records, keeping the rest.
    Skip,
}

impl MalformedLinePolicy {
    pub const fn label(self) -> &'static str {
        match self {
            MalformedLinePolicy::Reject => "reject",
            MalformedLinePolicy::Skip => "skip",
        }
    }
}

impl FromStr for MalformedLinePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unknown malformed line policy '{other}'")),
        }
    }
}

impl fmt::Display for MalformedLinePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntakeOptions {
    pub preferences_per_applicant: usize,
    pub malformed_lines: MalformedLinePolicy,
}

impl Default for IntakeOptions {
    fn default() -> Self {
        Self {
            preferences_per_applicant: DEFAULT_PREFERENCES_PER_APPLICANT,
            malformed_lines: MalformedLinePolicy::Reject,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// One applicant per line, fields separated by whitespace.
    Text,
    /// Comma-separated with a header row.
    Csv,
}

impl InputFormat {
    /// Picks CSV for `.csv` files and plain text for everything else.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Text,
        }
    }
}

pub struct ApplicantImporter;

impl ApplicantImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: InputFormat,
        options: &IntakeOptions,
    ) -> Result<Vec<Applicant>, IntakeError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let applicants = Self::from_reader(file, format, options)?;
        info!(
            path = %path.display(),
            applicants = applicants.len(),
            "applicant records loaded"
        );
        Ok(applicants)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: InputFormat,
        options: &IntakeOptions,
    ) -> Result<Vec<Applicant>, IntakeError> {
        match format {
            InputFormat::Text => parser::parse_lines(BufReader::new(reader), options),
            InputFormat::Csv => csv_import::parse_records(reader, options),
        }
    }
}
