use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::selection::domain::{
    Application, ApplicationId, Position, RankLevel, SelectionRecord,
};
use crate::selection::router::selection_router;
use crate::selection::service::SelectionReportService;
use crate::selection::store::{SelectionDataset, SelectionStore, StoreError};

pub(super) fn application(
    id: i64,
    email: &str,
    first_name: &str,
    last_name: &str,
    course_code: &str,
    course_name: &str,
) -> Application {
    Application {
        id: ApplicationId(id),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        course_code: course_code.to_string(),
        course_name: course_name.to_string(),
        position: Position::Tutor,
        submitted_at: None,
    }
}

/// One lecturer's selection of the given application.
pub(super) fn selected(application: &Application) -> SelectionRecord {
    SelectionRecord {
        application_id: application.id,
        email: application.email.clone(),
        first_name: application.first_name.clone(),
        last_name: application.last_name.clone(),
        course_code: application.course_code.clone(),
        course_name: application.course_name.clone(),
        rank_level: Some(RankLevel::Considered),
        comment: None,
    }
}

pub(super) fn record(
    id: i64,
    email: &str,
    first_name: &str,
    last_name: &str,
    course_code: &str,
    course_name: &str,
) -> SelectionRecord {
    SelectionRecord {
        application_id: ApplicationId(id),
        email: email.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        course_code: course_code.to_string(),
        course_name: course_name.to_string(),
        rank_level: None,
        comment: None,
    }
}

/// Canonical staffing round used across the suites: Ada selected twice, Ben
/// once, Cate never, Dev five times.
pub(super) fn sample_round() -> SelectionDataset {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let ben = application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing");
    let cate = application(3, "cate@uni.edu", "Cate", "Okafor", "COSC-210", "Compilers");
    let dev = application(4, "dev@uni.edu", "Dev", "Patel", "COSC-210", "Compilers");

    let selection_records = vec![
        selected(&ada),
        selected(&dev),
        selected(&ada),
        selected(&dev),
        selected(&dev),
        selected(&ben),
        selected(&dev),
        selected(&dev),
    ];

    SelectionDataset {
        applications: vec![ada, ben, cate, dev],
        selection_records,
    }
}

pub(super) fn build_service(
    dataset: SelectionDataset,
) -> Arc<SelectionReportService<SelectionDataset>> {
    Arc::new(SelectionReportService::new(Arc::new(dataset)))
}

pub(super) fn sample_router() -> axum::Router {
    selection_router(build_service(sample_round()))
}

pub(super) struct UnavailableStore;

impl SelectionStore for UnavailableStore {
    fn all_applications(&self) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn all_selection_records(&self) -> Result<Vec<SelectionRecord>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct BrokenQueryStore;

impl SelectionStore for BrokenQueryStore {
    fn all_applications(&self) -> Result<Vec<Application>, StoreError> {
        Err(StoreError::Query(Box::new(std::io::Error::other(
            "selection join failed",
        ))))
    }

    fn all_selection_records(&self) -> Result<Vec<SelectionRecord>, StoreError> {
        Err(StoreError::Query(Box::new(std::io::Error::other(
            "selection join failed",
        ))))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 65_536)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn emails(candidates: &[crate::selection::domain::Candidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|candidate| candidate.email.as_str())
        .collect()
}
