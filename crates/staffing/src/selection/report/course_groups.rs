use std::collections::BTreeMap;

use super::super::directory::identity_email;
use super::super::domain::SelectionRecord;
use super::views::CourseGroup;

/// Partitions selection records by course code.
///
/// Within a course, the first record per e-mail wins and later duplicates are
/// dropped, so an applicant selected twice for the same course (for instance
/// by two lecturers) appears once. Courses with no selections are absent from
/// the map rather than materialized with empty lists.
pub fn group_selections_by_course(records: &[SelectionRecord]) -> BTreeMap<String, CourseGroup> {
    let mut groups: BTreeMap<String, CourseGroup> = BTreeMap::new();

    for record in records {
        if identity_email(&record.email).is_none() {
            continue;
        }

        let group = groups
            .entry(record.course_code.clone())
            .or_insert_with(|| CourseGroup {
                course_name: record.course_name.clone(),
                applicants: Vec::new(),
            });

        let already_added = group
            .applicants
            .iter()
            .any(|applicant| applicant.email == record.email);
        if !already_added {
            group.applicants.push(record.candidate());
        }
    }

    groups
}
