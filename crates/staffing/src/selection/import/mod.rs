//! CSV import for staffing portal exports.
//!
//! The portal produces two flat files: an applications export and a
//! selections export that references applications by id. The importer joins
//! the two into a [`SelectionDataset`], resolving each selection row against
//! the application it points at. Rows that cannot be resolved (a dangling
//! `ApplicationID`, an unrecognized position token) are skipped; structural
//! problems with the files themselves are reported as errors.

mod parser;

use std::collections::HashMap;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::domain::{Application, RankLevel, SelectionRecord};
use super::store::SelectionDataset;

#[derive(Debug)]
pub enum DatasetImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A selections export can only be interpreted against the applications
    /// export that defines the population.
    MissingApplications,
}

impl fmt::Display for DatasetImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetImportError::Io(err) => write!(f, "failed to read portal export: {err}"),
            DatasetImportError::Csv(err) => write!(f, "invalid portal export data: {err}"),
            DatasetImportError::MissingApplications => {
                write!(f, "selections export supplied without an applications export")
            }
        }
    }
}

impl std::error::Error for DatasetImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetImportError::Io(err) => Some(err),
            DatasetImportError::Csv(err) => Some(err),
            DatasetImportError::MissingApplications => None,
        }
    }
}

impl From<std::io::Error> for DatasetImportError {
    fn from(err: std::io::Error) -> Self {
        DatasetImportError::Io(err)
    }
}

impl From<csv::Error> for DatasetImportError {
    fn from(err: csv::Error) -> Self {
        DatasetImportError::Csv(err)
    }
}

pub struct DatasetImporter;

impl DatasetImporter {
    /// Reads both portal exports from disk. Passing `None` for the selections
    /// path yields a dataset with applications only.
    pub fn from_paths<P, Q>(
        applications: P,
        selections: Option<Q>,
    ) -> Result<SelectionDataset, DatasetImportError>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let applications = File::open(applications)?;
        match selections {
            Some(path) => Self::from_readers(applications, Some(File::open(path)?)),
            None => Self::from_readers(applications, None::<File>),
        }
    }

    pub fn from_readers<R, S>(
        applications: R,
        selections: Option<S>,
    ) -> Result<SelectionDataset, DatasetImportError>
    where
        R: Read,
        S: Read,
    {
        let applications = parser::parse_applications(applications)?;
        let rows = match selections {
            Some(reader) => parser::parse_selection_rows(reader)?,
            None => Vec::new(),
        };
        let selection_records = resolve_selections(&applications, rows);

        Ok(SelectionDataset {
            applications,
            selection_records,
        })
    }
}

fn resolve_selections(
    applications: &[Application],
    rows: Vec<parser::SelectionRow>,
) -> Vec<SelectionRecord> {
    let mut by_id: HashMap<i64, &Application> = HashMap::new();
    for application in applications {
        by_id.entry(application.id.0).or_insert(application);
    }

    let mut records = Vec::new();
    for row in rows {
        let Some(application) = by_id.get(&row.application_id) else {
            continue;
        };
        records.push(SelectionRecord {
            application_id: application.id,
            email: application.email.clone(),
            first_name: application.first_name.clone(),
            last_name: application.last_name.clone(),
            course_code: application.course_code.clone(),
            course_name: application.course_name.clone(),
            rank_level: RankLevel::parse(&row.rank_level),
            comment: row.comment,
        });
    }
    records
}
