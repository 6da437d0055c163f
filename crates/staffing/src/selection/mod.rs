//! Selection analytics for the academic staffing portal.
//!
//! Lecturers shortlist tutor and lab-assistant applications during the
//! staffing round; administrators need to see where that shortlisting has
//! landed. This module turns the raw application and selection data into the
//! three administrative views: applicants grouped per course, candidates
//! selected by more lecturers than they can serve, and the most / least /
//! never selected summary.

pub(crate) mod directory;
pub mod domain;
pub mod import;
pub mod report;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{Application, ApplicationId, Candidate, Position, RankLevel, SelectionRecord};
pub use import::{DatasetImportError, DatasetImporter};
pub use report::views::{CourseGroup, SelectionReport, SelectionStats};
pub use report::{
    compute_selection_stats, find_overcommitted_candidates, group_selections_by_course,
    OVERCOMMITMENT_THRESHOLD,
};
pub use router::selection_router;
pub use service::{build_report, SelectionReportService};
pub use store::{SelectionDataset, SelectionStore, StoreError};
