//! Merit-ordered, preference-ranked allocation of applicants to department seats.
//!
//! Every department shares one seat limit. Allocation runs one round per preference
//! rank: all unplaced applicants are offered their first choice before anyone is offered
//! a second choice, and within a round higher GPAs go first.

pub mod allocator;
pub mod domain;
pub mod roster;

#[cfg(test)]
mod tests;

pub use allocator::{allocate, AllocationOutcome, Allocator, RoundSummary};
pub use domain::{merit_order, Applicant, Department, Person, DEFAULT_PREFERENCES_PER_APPLICANT};
pub use roster::Roster;
