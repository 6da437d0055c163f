use super::common::*;
use crate::selection::report::{find_overcommitted_candidates, OVERCOMMITMENT_THRESHOLD};

#[test]
fn flags_candidates_selected_more_than_the_threshold() {
    let dataset = sample_round();

    let flagged = find_overcommitted_candidates(&dataset.selection_records);

    assert_eq!(emails(&flagged), vec!["dev@uni.edu"]);
    assert_eq!(flagged[0].display_name(), "Dev Patel");
}

#[test]
fn exactly_threshold_selections_do_not_flag() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let records = vec![selected(&ada); OVERCOMMITMENT_THRESHOLD];

    assert!(find_overcommitted_candidates(&records).is_empty());
}

#[test]
fn one_more_than_threshold_flags() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let records = vec![selected(&ada); OVERCOMMITMENT_THRESHOLD + 1];

    let flagged = find_overcommitted_candidates(&records);

    assert_eq!(emails(&flagged), vec!["ada@uni.edu"]);
}

#[test]
fn selections_across_different_courses_accumulate() {
    let records = vec![
        record(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing"),
        record(5, "ada@uni.edu", "Ada", "Lovelace", "COSC-210", "Compilers"),
        record(6, "ada@uni.edu", "Ada", "Lovelace", "MATH-250", "Linear Algebra"),
        record(7, "ada@uni.edu", "Ada", "Lovelace", "PHYS-110", "Mechanics"),
    ];

    let flagged = find_overcommitted_candidates(&records);

    assert_eq!(emails(&flagged), vec!["ada@uni.edu"]);
}

#[test]
fn repeat_selections_of_one_course_also_accumulate() {
    // Counting is per record, not per distinct course.
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let mut records = vec![selected(&ada), selected(&ada), selected(&ada)];
    records.push(record(5, "ada@uni.edu", "Ada", "Lovelace", "COSC-210", "Compilers"));

    let flagged = find_overcommitted_candidates(&records);

    assert_eq!(emails(&flagged), vec!["ada@uni.edu"]);
}

#[test]
fn output_follows_first_appearance_in_the_input() {
    let mut records = Vec::new();
    for _ in 0..4 {
        records.push(record(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing"));
    }
    for _ in 0..4 {
        records.push(record(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-210", "Compilers"));
    }

    let flagged = find_overcommitted_candidates(&records);

    assert_eq!(emails(&flagged), vec!["ben@uni.edu", "ada@uni.edu"]);
}

#[test]
fn each_candidate_is_reported_once() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let records = vec![selected(&ada); 10];

    let flagged = find_overcommitted_candidates(&records);

    assert_eq!(flagged.len(), 1);
}

#[test]
fn blank_email_records_never_flag() {
    let records = vec![record(1, "  ", "Ghost", "Entry", "COSC-101", "Intro to Computing"); 6];

    assert!(find_overcommitted_candidates(&records).is_empty());
}

#[test]
fn no_records_means_no_flags() {
    assert!(find_overcommitted_candidates(&[]).is_empty());
}
