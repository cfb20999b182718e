//! Rendering of allocation results for stdout.

mod views;

pub use views::{ApplicantView, DepartmentRosterEntry, RoundView};

use std::io::{self, Write};

use serde::Serialize;

use crate::allocation::{AllocationOutcome, Roster};
use views::format_gpa;

/// Serializable snapshot of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterReport {
    pub capacity: usize,
    pub departments: Vec<DepartmentRosterEntry>,
    pub unplaced: Vec<ApplicantView>,
    pub rounds: Vec<RoundView>,
}

impl RosterReport {
    pub fn new(outcome: &AllocationOutcome, capacity: usize) -> Self {
        let departments = outcome
            .roster
            .iter()
            .map(|(department, admitted)| DepartmentRosterEntry {
                department: department.to_string(),
                admitted: admitted.iter().map(ApplicantView::from).collect(),
            })
            .collect();

        let rounds = outcome
            .rounds
            .iter()
            .map(|round| RoundView {
                preference: round.rank + 1,
                placed: round.placed,
                remaining: round.remaining,
            })
            .collect();

        Self {
            capacity,
            departments,
            unplaced: outcome.unplaced.iter().map(ApplicantView::from).collect(),
            rounds,
        }
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), serde_json::Error> {
        serde_json::to_writer_pretty(writer, self)
    }
}

/// Writes each department name followed by `name gpa` lines and a blank separator line.
pub fn render_text<W: Write>(roster: &Roster, mut writer: W) -> io::Result<()> {
    for (department, admitted) in roster.iter() {
        writeln!(writer, "{department}")?;
        for applicant in admitted {
            writeln!(
                writer,
                "{} {}",
                applicant.full_name(),
                format_gpa(applicant.gpa)
            )?;
        }
        writeln!(writer)?;
    }
    Ok(())
}
