use std::collections::{HashMap, HashSet};

use super::domain::{Application, Candidate, SelectionRecord};

/// Identity key for a record, or `None` when the e-mail is blank.
///
/// Blank means empty after trimming; everything else is used verbatim, so two
/// spellings that differ in case or padding stay distinct identities exactly
/// as the portal treats them.
pub fn identity_email(email: &str) -> Option<&str> {
    if email.trim().is_empty() {
        None
    } else {
        Some(email)
    }
}

/// Insertion-ordered, e-mail-deduplicated view of the applicant population.
///
/// The first application seen for an e-mail supplies the display name;
/// applications without an identity e-mail are left out entirely.
pub struct CandidateDirectory {
    entries: Vec<Candidate>,
}

impl CandidateDirectory {
    pub fn from_applications(applications: &[Application]) -> Self {
        let mut entries = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for application in applications {
            let Some(email) = identity_email(&application.email) else {
                continue;
            };
            if seen.insert(email) {
                entries.push(application.candidate());
            }
        }

        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Raw selection counts per e-mail. Every record counts once, even when
/// several records point at the same course; records without an identity
/// e-mail are skipped.
pub fn selection_counts(records: &[SelectionRecord]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        let Some(email) = identity_email(&record.email) else {
            continue;
        };
        *counts.entry(email.to_string()).or_insert(0) += 1;
    }
    counts
}
