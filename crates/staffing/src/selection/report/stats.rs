use super::super::directory::{selection_counts, CandidateDirectory};
use super::super::domain::{Application, SelectionRecord};
use super::views::SelectionStats;

/// Computes most-, least-, and never-selected candidates over the full
/// applicant population.
///
/// The population is the application list deduplicated by e-mail (first
/// occurrence wins for the display name); counts are raw selection records
/// per e-mail. A single pass tracks the running maximum and the running
/// minimum among positive counts: a strictly better count starts a fresh
/// name list, a tie appends, and zero counts feed `unselected` instead of
/// competing for "least".
pub fn compute_selection_stats(
    applications: &[Application],
    records: &[SelectionRecord],
) -> SelectionStats {
    let directory = CandidateDirectory::from_applications(applications);
    let counts = selection_counts(records);

    let mut most_selected_names: Vec<String> = Vec::new();
    let mut most_selected_count: usize = 0;
    let mut least_selected_names: Vec<String> = Vec::new();
    let mut least_selected_count: Option<usize> = None;
    let mut unselected = Vec::new();

    for candidate in directory.iter() {
        let count = counts.get(&candidate.email).copied().unwrap_or(0);

        if count > most_selected_count {
            most_selected_count = count;
            most_selected_names = vec![candidate.display_name()];
        } else if count == most_selected_count && count > 0 {
            most_selected_names.push(candidate.display_name());
        }

        if count > 0 {
            if least_selected_count.map_or(true, |current| count < current) {
                least_selected_count = Some(count);
                least_selected_names = vec![candidate.display_name()];
            } else if least_selected_count == Some(count) {
                least_selected_names.push(candidate.display_name());
            }
        } else {
            unselected.push(candidate.clone());
        }
    }

    SelectionStats {
        most_selected_names,
        most_selected_count,
        least_selected_names,
        least_selected_count: least_selected_count.unwrap_or(0),
        unselected,
    }
}
