use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for the portal's numeric application key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub i64);

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Course position a candidate can apply for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Tutor,
    LabAssistant,
}

impl Position {
    pub const fn label(self) -> &'static str {
        match self {
            Position::Tutor => "Tutor",
            Position::LabAssistant => "Lab Assistant",
        }
    }

    /// Accepts the portal's wire tokens (`tutor`, `lab-assistant`) as well as
    /// the display labels, ignoring case and separator style.
    pub fn parse(value: &str) -> Option<Self> {
        let folded: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        match folded.as_str() {
            "tutor" => Some(Position::Tutor),
            "labassistant" => Some(Position::LabAssistant),
            _ => None,
        }
    }
}

/// Rank tier a lecturer can attach to a selection. The portal stores an empty
/// string for "selected but not yet ranked", which maps to `None` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankLevel {
    TopChoice,
    StrongCandidate,
    Considered,
}

impl RankLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RankLevel::TopChoice => "Top Choice",
            RankLevel::StrongCandidate => "Strong Candidate",
            RankLevel::Considered => "Considered",
        }
    }

    /// Parses a wire token; blanks and unknown tokens degrade to unset.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "topChoice" => Some(RankLevel::TopChoice),
            "strongCandidate" => Some(RankLevel::StrongCandidate),
            "considered" => Some(RankLevel::Considered),
            _ => None,
        }
    }
}

/// One submission by a candidate for a position on a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub course_code: String,
    pub course_name: String,
    pub position: Position,
    /// Creation timestamp carried through from the portal database; the
    /// analytics never reads it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<NaiveDateTime>,
}

/// A lecturer's decision to select an application, resolved against the
/// application it references. Storage keeps at most one record per
/// (lecturer, application) pair; the analytics consumes the union across
/// lecturers, so the same application may appear in several records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    pub application_id: ApplicationId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub course_code: String,
    pub course_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_level: Option<RankLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SelectionRecord {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}

/// Candidate identity as the reports expose it. Identity is keyed by e-mail;
/// the names are display data from the first record seen for that e-mail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl Candidate {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Application {
    pub fn candidate(&self) -> Candidate {
        Candidate {
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        }
    }
}
