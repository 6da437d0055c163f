use std::collections::BTreeMap;

use serde::Serialize;

use super::super::domain::Candidate;

/// Selected applicants for one course, deduplicated by e-mail in first-seen
/// order. The course name comes from the first record seen for the code.
#[derive(Debug, Clone, Serialize)]
pub struct CourseGroup {
    pub course_name: String,
    pub applicants: Vec<Candidate>,
}

/// Coverage statistics over the full applicant population.
///
/// The name lists hold display names and include every candidate tied at the
/// extreme; `unselected` keeps full identities so callers can key follow-ups
/// by e-mail. With no selection records at all, both counts are zero, both
/// name lists are empty, and `unselected` is the whole population.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionStats {
    pub most_selected_names: Vec<String>,
    pub most_selected_count: usize,
    pub least_selected_names: Vec<String>,
    pub least_selected_count: usize,
    pub unselected: Vec<Candidate>,
}

/// The composite admin report: all three derived views plus the sizes of the
/// input collections they were computed from.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionReport {
    pub applications_considered: usize,
    pub selections_considered: usize,
    pub course_groups: BTreeMap<String, CourseGroup>,
    pub overcommitted: Vec<Candidate>,
    pub stats: SelectionStats,
}
