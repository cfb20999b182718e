use crate::allocation::domain::{Applicant, Department, Person};
use crate::allocation::roster::Roster;

pub(super) fn applicant(first: &str, last: &str, gpa: f64, preferences: [&str; 3]) -> Applicant {
    Applicant::new(
        Person::new(first, last),
        gpa,
        preferences.iter().map(|&id| Department::new(id)).collect(),
    )
}

/// Three applicants competing for the same ranked departments.
pub(super) fn engineering_pool() -> Vec<Applicant> {
    vec![
        applicant("A", "X", 3.9, ["Eng", "Math", "CS"]),
        applicant("B", "Y", 3.5, ["Eng", "Math", "CS"]),
        applicant("C", "Z", 3.8, ["Eng", "Math", "CS"]),
    ]
}

/// A mixed cohort with overlapping choices, GPA ties, and departments listed in
/// non-alphabetical order.
pub(super) fn mixed_cohort() -> Vec<Applicant> {
    vec![
        applicant("Willie", "Kraus", 3.21, ["Physics", "Chemistry", "Biotech"]),
        applicant("Evelyn", "Moss", 3.88, ["Mathematics", "Physics", "Engineering"]),
        applicant("Jermaine", "Hodge", 3.88, ["Engineering", "Mathematics", "Physics"]),
        applicant("Laura", "Norris", 2.74, ["Chemistry", "Biotech", "Physics"]),
        applicant("Tobias", "Beck", 3.55, ["Physics", "Engineering", "Mathematics"]),
        applicant("Amy", "Aldridge", 3.55, ["Physics", "Mathematics", "Chemistry"]),
        applicant("Ruth", "Gill", 3.02, ["Biotech", "Chemistry", "Mathematics"]),
        applicant("Omar", "Fitch", 2.95, ["Engineering", "Physics", "Biotech"]),
        applicant("Sana", "Iqbal", 3.67, ["Mathematics", "Engineering", "Physics"]),
        applicant("Hugo", "Park", 2.41, ["Physics", "Mathematics", "Engineering"]),
        applicant("Nia", "Cole", 3.10, ["Chemistry", "Physics", "Biotech"]),
        applicant("Ivan", "Duarte", 3.33, ["Physics", "Biotech", "Chemistry"]),
    ]
}

pub(super) fn names_in(roster: &Roster, department: &str) -> Vec<String> {
    roster
        .get(&Department::new(department))
        .map(|admitted| admitted.iter().map(Applicant::full_name).collect())
        .unwrap_or_default()
}
