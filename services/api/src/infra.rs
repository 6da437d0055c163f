use chrono::{NaiveDate, NaiveDateTime};
use metrics_exporter_prometheus::PrometheusHandle;
use staffing::selection::{
    Application, ApplicationId, Position, RankLevel, SelectionDataset, SelectionRecord,
    SelectionStore, StoreError,
};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Snapshot store backing the HTTP service. A mutexed dataset is all this
/// deployment needs until the portal database is wired in directly.
#[derive(Default)]
pub(crate) struct InMemorySelectionStore {
    dataset: Mutex<SelectionDataset>,
}

impl InMemorySelectionStore {
    pub(crate) fn new(dataset: SelectionDataset) -> Self {
        Self {
            dataset: Mutex::new(dataset),
        }
    }
}

impl SelectionStore for InMemorySelectionStore {
    fn all_applications(&self) -> Result<Vec<Application>, StoreError> {
        let guard = self.dataset.lock().expect("selection store mutex poisoned");
        Ok(guard.applications.clone())
    }

    fn all_selection_records(&self) -> Result<Vec<SelectionRecord>, StoreError> {
        let guard = self.dataset.lock().expect("selection store mutex poisoned");
        Ok(guard.selection_records.clone())
    }
}

fn submitted(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, minute, 0))
}

fn application(
    id: i64,
    email: &str,
    name: (&str, &str),
    course: (&str, &str),
    position: Position,
    submitted_at: Option<NaiveDateTime>,
) -> Application {
    Application {
        id: ApplicationId(id),
        email: email.to_string(),
        first_name: name.0.to_string(),
        last_name: name.1.to_string(),
        course_code: course.0.to_string(),
        course_name: course.1.to_string(),
        position,
        submitted_at,
    }
}

fn selected(
    application: &Application,
    rank_level: Option<RankLevel>,
    comment: Option<&str>,
) -> SelectionRecord {
    SelectionRecord {
        application_id: application.id,
        email: application.email.clone(),
        first_name: application.first_name.clone(),
        last_name: application.last_name.clone(),
        course_code: application.course_code.clone(),
        course_name: application.course_name.clone(),
        rank_level,
        comment: comment.map(str::to_string),
    }
}

/// Demonstration staffing round. Priya carries four selections across three
/// courses (overcommitted), Lena and Sofia tie at one selection each, and
/// Tom is never selected.
pub(crate) fn sample_dataset() -> SelectionDataset {
    let intro = ("COSC-101", "Intro to Computing");
    let compilers = ("COSC-210", "Compilers");
    let algebra = ("MATH-250", "Linear Algebra");

    let priya_intro = application(
        1,
        "priya@uni.edu",
        ("Priya", "Sharma"),
        intro,
        Position::Tutor,
        submitted(2025, 2, 10, 8, 30),
    );
    let priya_compilers = application(
        2,
        "priya@uni.edu",
        ("Priya", "Sharma"),
        compilers,
        Position::Tutor,
        submitted(2025, 2, 10, 8, 41),
    );
    let priya_algebra = application(
        3,
        "priya@uni.edu",
        ("Priya", "Sharma"),
        algebra,
        Position::LabAssistant,
        submitted(2025, 2, 10, 9, 2),
    );
    let marco = application(
        4,
        "marco@uni.edu",
        ("Marco", "Rossi"),
        intro,
        Position::Tutor,
        submitted(2025, 2, 11, 14, 5),
    );
    let lena = application(
        5,
        "lena@uni.edu",
        ("Lena", "Fischer"),
        compilers,
        Position::LabAssistant,
        submitted(2025, 2, 11, 16, 48),
    );
    let tom = application(
        6,
        "tom@uni.edu",
        ("Tom", "Nguyen"),
        algebra,
        Position::Tutor,
        submitted(2025, 2, 12, 10, 0),
    );
    let sofia = application(
        7,
        "sofia@uni.edu",
        ("Sofia", "Alvarez"),
        algebra,
        Position::LabAssistant,
        None,
    );

    let selection_records = vec![
        selected(
            &priya_intro,
            Some(RankLevel::TopChoice),
            Some("Led labs for this course last year"),
        ),
        selected(&marco, Some(RankLevel::Considered), None),
        selected(&priya_compilers, Some(RankLevel::StrongCandidate), None),
        selected(&lena, Some(RankLevel::Considered), None),
        selected(&priya_algebra, None, Some("Pending schedule check")),
        selected(&marco, Some(RankLevel::TopChoice), None),
        selected(&priya_intro, Some(RankLevel::StrongCandidate), None),
        selected(&sofia, None, None),
    ];

    SelectionDataset {
        applications: vec![
            priya_intro,
            priya_compilers,
            priya_algebra,
            marco,
            lena,
            tom,
            sofia,
        ],
        selection_records,
    }
}
