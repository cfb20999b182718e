use std::collections::BTreeMap;

use super::domain::{merit_order, Applicant, Department};

/// Accepted applicants per department, enumerated in lexicographic department order.
///
/// A department only exists here once it has admitted at least one applicant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    departments: BTreeMap<Department, Vec<Applicant>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Number of departments that admitted anyone.
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn admitted_count(&self) -> usize {
        self.departments.values().map(Vec::len).sum()
    }

    pub fn seats_taken(&self, department: &Department) -> usize {
        self.departments.get(department).map_or(0, Vec::len)
    }

    pub fn has_seat(&self, department: &Department, capacity: usize) -> bool {
        self.seats_taken(department) < capacity
    }

    pub fn get(&self, department: &Department) -> Option<&[Applicant]> {
        self.departments.get(department).map(Vec::as_slice)
    }

    pub fn departments(&self) -> impl Iterator<Item = &Department> {
        self.departments.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Department, &[Applicant])> {
        self.departments
            .iter()
            .map(|(department, admitted)| (department, admitted.as_slice()))
    }

    /// Department holding a record equal to `applicant`, if any.
    pub fn department_of(&self, applicant: &Applicant) -> Option<&Department> {
        self.iter()
            .find(|(_, admitted)| admitted.iter().any(|entry| entry == applicant))
            .map(|(department, _)| department)
    }

    pub(crate) fn admit(&mut self, department: Department, applicant: Applicant) {
        self.departments
            .entry(department)
            .or_default()
            .push(applicant);
    }

    pub(crate) fn sort_by_merit(&mut self) {
        for admitted in self.departments.values_mut() {
            admitted.sort_by(merit_order);
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = (&'a Department, &'a Vec<Applicant>);
    type IntoIter = std::collections::btree_map::Iter<'a, Department, Vec<Applicant>>;

    fn into_iter(self) -> Self::IntoIter {
        self.departments.iter()
    }
}
