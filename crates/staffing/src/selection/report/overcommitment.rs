use std::collections::HashSet;

use super::super::directory::{identity_email, selection_counts};
use super::super::domain::{Candidate, SelectionRecord};

/// A candidate is overcommitted once their selection count strictly exceeds
/// this. The portal fixes the value; it is deliberately not configurable.
pub const OVERCOMMITMENT_THRESHOLD: usize = 3;

/// Finds every candidate selected strictly more than
/// [`OVERCOMMITMENT_THRESHOLD`] times.
///
/// The counting unit is the raw selection record per e-mail: two records for
/// the same course both count. Output order is first qualifying appearance in
/// the input, with display names taken from that first record.
pub fn find_overcommitted_candidates(records: &[SelectionRecord]) -> Vec<Candidate> {
    let counts = selection_counts(records);

    let mut flagged = Vec::new();
    let mut emitted: HashSet<&str> = HashSet::new();

    for record in records {
        let Some(email) = identity_email(&record.email) else {
            continue;
        };
        let count = counts.get(email).copied().unwrap_or(0);
        if count > OVERCOMMITMENT_THRESHOLD && emitted.insert(email) {
            flagged.push(record.candidate());
        }
    }

    flagged
}
