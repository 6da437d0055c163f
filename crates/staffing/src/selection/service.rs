use std::collections::BTreeMap;
use std::sync::Arc;

use super::domain::{Application, Candidate, SelectionRecord};
use super::report::views::{CourseGroup, SelectionReport, SelectionStats};
use super::report::{
    compute_selection_stats, find_overcommitted_candidates, group_selections_by_course,
};
use super::store::{SelectionStore, StoreError};

/// Facade composing the storage boundary with the pure report functions.
///
/// Every method re-derives its view from a fresh fetch; nothing is cached, so
/// repeated calls are idempotent and concurrent callers cannot observe stale
/// state.
pub struct SelectionReportService<S> {
    store: Arc<S>,
}

impl<S> SelectionReportService<S>
where
    S: SelectionStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Selected applicants per course, deduplicated by e-mail.
    pub fn course_groups(&self) -> Result<BTreeMap<String, CourseGroup>, StoreError> {
        let records = self.store.all_selection_records()?;
        Ok(group_selections_by_course(&records))
    }

    /// Candidates selected more often than the overcommitment threshold.
    pub fn overcommitted(&self) -> Result<Vec<Candidate>, StoreError> {
        let records = self.store.all_selection_records()?;
        Ok(find_overcommitted_candidates(&records))
    }

    /// Most-, least-, and never-selected candidates across the population.
    pub fn selection_stats(&self) -> Result<SelectionStats, StoreError> {
        let applications = self.store.all_applications()?;
        let records = self.store.all_selection_records()?;
        Ok(compute_selection_stats(&applications, &records))
    }

    /// The composite admin report, fetching each input collection once.
    pub fn full_report(&self) -> Result<SelectionReport, StoreError> {
        let applications = self.store.all_applications()?;
        let records = self.store.all_selection_records()?;
        Ok(build_report(&applications, &records))
    }
}

/// Builds the composite report from already-fetched collections, for callers
/// that bring their own data instead of a store.
pub fn build_report(
    applications: &[Application],
    records: &[SelectionRecord],
) -> SelectionReport {
    SelectionReport {
        applications_considered: applications.len(),
        selections_considered: records.len(),
        course_groups: group_selections_by_course(records),
        overcommitted: find_overcommitted_candidates(records),
        stats: compute_selection_stats(applications, records),
    }
}
