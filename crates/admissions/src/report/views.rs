use serde::Serialize;

use crate::allocation::Applicant;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantView {
    pub name: String,
    pub gpa: f64,
    /// GPA rendered with two decimals, as printed in the text report.
    pub gpa_display: String,
}

impl From<&Applicant> for ApplicantView {
    fn from(applicant: &Applicant) -> Self {
        Self {
            name: applicant.full_name(),
            gpa: applicant.gpa,
            gpa_display: format_gpa(applicant.gpa),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRosterEntry {
    pub department: String,
    pub admitted: Vec<ApplicantView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundView {
    /// One-based preference rank, as applicants number their choices.
    pub preference: usize,
    pub placed: usize,
    pub remaining: usize,
}

pub(crate) fn format_gpa(gpa: f64) -> String {
    format!("{gpa:.2}")
}
