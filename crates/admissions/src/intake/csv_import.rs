use std::io::Read;

use super::parser::{handle_malformed, parse_fields, ParseErrorKind};
use super::{IntakeError, IntakeOptions};
use crate::allocation::Applicant;

/// Reads applicant rows from a CSV export with a header row.
///
/// Columns are positional: first name, last name, GPA, then one column per ranked
/// department. Header names are not interpreted.
pub(crate) fn parse_records<R: Read>(
    reader: R,
    options: &IntakeOptions,
) -> Result<Vec<Applicant>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let mut applicants = Vec::new();

    for (index, record) in csv_reader.byte_records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|position| position.line() as usize)
            .unwrap_or(index + 2);
        let record = match csv::StringRecord::from_byte_record(record) {
            Ok(record) => record,
            Err(_) => {
                handle_malformed(line, ParseErrorKind::InvalidUtf8, options)?;
                continue;
            }
        };
        let fields: Vec<&str> = record.iter().collect();

        match parse_fields(&fields, options.preferences_per_applicant) {
            Ok(applicant) => applicants.push(applicant),
            Err(kind) => handle_malformed(line, kind, options)?,
        }
    }

    Ok(applicants)
}
