use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::super::domain::{Application, ApplicationId, Position};

#[derive(Debug, Deserialize)]
pub(crate) struct ApplicationRow {
    #[serde(rename = "ApplicationID")]
    application_id: i64,
    #[serde(rename = "Email", default)]
    email: String,
    #[serde(rename = "First Name", default)]
    first_name: String,
    #[serde(rename = "Last Name", default)]
    last_name: String,
    #[serde(rename = "Course Code", default)]
    course_code: String,
    #[serde(rename = "Course Name", default)]
    course_name: String,
    #[serde(rename = "Position", default)]
    position: String,
    #[serde(
        rename = "Submitted At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    submitted_at: Option<String>,
}

impl ApplicationRow {
    /// Rows whose position token is unrecognized are dropped rather than
    /// guessed at.
    fn into_application(self) -> Option<Application> {
        let position = Position::parse(&self.position)?;
        let submitted_at = self.submitted_at.as_deref().and_then(parse_datetime);

        Some(Application {
            id: ApplicationId(self.application_id),
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            course_code: self.course_code,
            course_name: self.course_name,
            position,
            submitted_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SelectionRow {
    #[serde(rename = "ApplicationID")]
    pub(crate) application_id: i64,
    #[serde(rename = "Rank Level", default)]
    pub(crate) rank_level: String,
    #[serde(
        rename = "Comment",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) comment: Option<String>,
}

pub(crate) fn parse_applications<R: Read>(reader: R) -> Result<Vec<Application>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut applications = Vec::new();

    for row in csv_reader.deserialize::<ApplicationRow>() {
        if let Some(application) = row?.into_application() {
            applications.push(application);
        }
    }

    Ok(applications)
}

pub(crate) fn parse_selection_rows<R: Read>(reader: R) -> Result<Vec<SelectionRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();

    for row in csv_reader.deserialize::<SelectionRow>() {
        rows.push(row?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    // SQL-style exports: "2025-03-12 09:30:00".
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
