use tracing::{debug, info};

use super::domain::{merit_order, Applicant, DEFAULT_PREFERENCES_PER_APPLICANT};
use super::roster::Roster;

/// Round-based greedy allocator applying a uniform seat limit to every department.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocator {
    capacity: usize,
    preferences_per_applicant: usize,
}

impl Allocator {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            preferences_per_applicant: DEFAULT_PREFERENCES_PER_APPLICANT,
        }
    }

    /// Sets how many preference rounds run.
    pub fn with_preferences(mut self, preferences_per_applicant: usize) -> Self {
        self.preferences_per_applicant = preferences_per_applicant;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn preferences_per_applicant(&self) -> usize {
        self.preferences_per_applicant
    }

    /// Places applicants round by round, one preference rank per round.
    ///
    /// The pool is sorted into merit order once. Each round walks the still-unplaced
    /// applicants in that order and either admits them to their choice for the round or
    /// carries them forward, so relative order never changes between rounds. Placed
    /// applicants are never reconsidered.
    pub fn run(&self, applicants: &[Applicant]) -> AllocationOutcome {
        let mut pool: Vec<&Applicant> = applicants.iter().collect();
        pool.sort_by(|a, b| merit_order(a, b));

        let mut roster = Roster::new();
        let mut rounds = Vec::with_capacity(self.preferences_per_applicant);

        for rank in 0..self.preferences_per_applicant {
            let mut carried = Vec::with_capacity(pool.len());
            let mut placed = 0;

            for applicant in pool {
                match applicant.preference(rank) {
                    Some(department) if roster.has_seat(department, self.capacity) => {
                        roster.admit(department.clone(), applicant.clone());
                        placed += 1;
                    }
                    _ => carried.push(applicant),
                }
            }

            debug!(rank, placed, remaining = carried.len(), "allocation round finished");
            rounds.push(RoundSummary {
                rank,
                placed,
                remaining: carried.len(),
            });
            pool = carried;
        }

        roster.sort_by_merit();
        let unplaced: Vec<Applicant> = pool.into_iter().cloned().collect();

        info!(
            capacity = self.capacity,
            departments = roster.len(),
            placed = roster.admitted_count(),
            unplaced = unplaced.len(),
            "allocation complete"
        );

        AllocationOutcome {
            roster,
            unplaced,
            rounds,
        }
    }
}

/// Seats filled during a single preference round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    /// Zero-based preference rank examined in this round.
    pub rank: usize,
    pub placed: usize,
    /// Applicants still without a seat once the round finished.
    pub remaining: usize,
}

/// Full allocation result: the roster plus whoever was left without a seat.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationOutcome {
    pub roster: Roster,
    /// Applicants whose every choice was full when considered, in merit order.
    pub unplaced: Vec<Applicant>,
    pub rounds: Vec<RoundSummary>,
}

/// Allocates with the default number of preference rounds and returns only the roster.
pub fn allocate(applicants: &[Applicant], capacity: usize) -> Roster {
    Allocator::new(capacity).run(applicants).roster
}
