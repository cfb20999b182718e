use std::cmp::Ordering;
use std::fmt;
use std::iter;

/// Number of ranked department choices each applicant submits unless configured otherwise.
pub const DEFAULT_PREFERENCES_PER_APPLICANT: usize = 3;

/// Opaque department identifier taken verbatim from applicant records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Department(pub String);

impl Department {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Department {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Display name of an applicant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Compares `"first last"` renderings byte-wise without allocating them.
    pub fn cmp_full_name(&self, other: &Person) -> Ordering {
        full_name_bytes(self).cmp(full_name_bytes(other))
    }
}

fn full_name_bytes(person: &Person) -> impl Iterator<Item = u8> + '_ {
    person
        .first_name
        .bytes()
        .chain(iter::once(b' '))
        .chain(person.last_name.bytes())
}

/// Immutable applicant record produced by intake and read during allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub person: Person,
    pub gpa: f64,
    /// Ranked choices, index 0 is the most preferred.
    pub preferences: Vec<Department>,
}

impl Applicant {
    pub fn new(person: Person, gpa: f64, preferences: Vec<Department>) -> Self {
        Self {
            person,
            gpa,
            preferences,
        }
    }

    pub fn full_name(&self) -> String {
        self.person.full_name()
    }

    pub fn preference(&self, rank: usize) -> Option<&Department> {
        self.preferences.get(rank)
    }

    pub fn prefers(&self, department: &Department) -> bool {
        self.preferences.contains(department)
    }
}

/// Merit order: GPA descending, then full name ascending.
pub fn merit_order(a: &Applicant, b: &Applicant) -> Ordering {
    gpa_descending(a.gpa, b.gpa).then_with(|| a.person.cmp_full_name(&b.person))
}

/// Total order over GPAs, highest first. `-0.0` ties with `0.0` and NaN ranks below
/// every number.
fn gpa_descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
