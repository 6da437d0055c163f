use super::common::*;
use crate::selection::directory::{selection_counts, CandidateDirectory};
use crate::selection::report::compute_selection_stats;

#[test]
fn directory_dedupes_by_email_keeping_the_first_name_seen() {
    let applications = vec![
        application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing"),
        application(5, "ada@uni.edu", "Augusta", "King", "COSC-210", "Compilers"),
        application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing"),
    ];

    let directory = CandidateDirectory::from_applications(&applications);

    let names: Vec<String> = directory.iter().map(|c| c.display_name()).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Ben Cheng"]);
}

#[test]
fn counts_tally_every_record_per_email() {
    let dataset = sample_round();

    let counts = selection_counts(&dataset.selection_records);

    assert_eq!(counts.get("ada@uni.edu"), Some(&2));
    assert_eq!(counts.get("ben@uni.edu"), Some(&1));
    assert_eq!(counts.get("cate@uni.edu"), None);
    assert_eq!(counts.get("dev@uni.edu"), Some(&5));
}

#[test]
fn computes_the_reference_round() {
    let dataset = sample_round();

    let stats = compute_selection_stats(&dataset.applications, &dataset.selection_records);

    assert_eq!(stats.most_selected_names, vec!["Dev Patel"]);
    assert_eq!(stats.most_selected_count, 5);
    assert_eq!(stats.least_selected_names, vec!["Ben Cheng"]);
    assert_eq!(stats.least_selected_count, 1);
    assert_eq!(emails(&stats.unselected), vec!["cate@uni.edu"]);
}

#[test]
fn ties_at_the_maximum_list_everyone_in_population_order() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let ben = application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing");
    let records = vec![selected(&ada), selected(&ben), selected(&ben), selected(&ada)];

    let stats = compute_selection_stats(&[ada, ben], &records);

    assert_eq!(stats.most_selected_names, vec!["Ada Lovelace", "Ben Cheng"]);
    assert_eq!(stats.most_selected_count, 2);
    assert_eq!(stats.least_selected_names, vec!["Ada Lovelace", "Ben Cheng"]);
    assert_eq!(stats.least_selected_count, 2);
}

#[test]
fn ties_at_the_minimum_list_everyone() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let ben = application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing");
    let dev = application(4, "dev@uni.edu", "Dev", "Patel", "COSC-210", "Compilers");
    let records = vec![
        selected(&ada),
        selected(&ben),
        selected(&dev),
        selected(&dev),
    ];

    let stats = compute_selection_stats(&[ada, ben, dev], &records);

    assert_eq!(stats.least_selected_names, vec!["Ada Lovelace", "Ben Cheng"]);
    assert_eq!(stats.least_selected_count, 1);
}

#[test]
fn a_better_extreme_discards_previous_ties() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let ben = application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing");
    let dev = application(4, "dev@uni.edu", "Dev", "Patel", "COSC-210", "Compilers");
    let mut records = vec![selected(&ada), selected(&ben)];
    for _ in 0..3 {
        records.push(selected(&dev));
    }

    let stats = compute_selection_stats(&[ada, ben, dev], &records);

    assert_eq!(stats.most_selected_names, vec!["Dev Patel"]);
    assert_eq!(stats.most_selected_count, 3);
}

#[test]
fn zero_counts_go_to_unselected_not_least() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let cate = application(3, "cate@uni.edu", "Cate", "Okafor", "COSC-210", "Compilers");
    let records = vec![selected(&ada)];

    let stats = compute_selection_stats(&[ada, cate], &records);

    assert_eq!(stats.least_selected_names, vec!["Ada Lovelace"]);
    assert_eq!(stats.least_selected_count, 1);
    assert_eq!(emails(&stats.unselected), vec!["cate@uni.edu"]);
}

#[test]
fn no_records_yields_zero_counts_and_the_whole_population() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let ben = application(2, "ben@uni.edu", "Ben", "Cheng", "COSC-101", "Intro to Computing");

    let stats = compute_selection_stats(&[ada, ben], &[]);

    assert!(stats.most_selected_names.is_empty());
    assert_eq!(stats.most_selected_count, 0);
    assert!(stats.least_selected_names.is_empty());
    assert_eq!(stats.least_selected_count, 0);
    assert_eq!(emails(&stats.unselected), vec!["ada@uni.edu", "ben@uni.edu"]);
}

#[test]
fn a_single_candidate_is_both_most_and_least() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let records = vec![selected(&ada), selected(&ada)];

    let stats = compute_selection_stats(&[ada], &records);

    assert_eq!(stats.most_selected_names, vec!["Ada Lovelace"]);
    assert_eq!(stats.most_selected_count, 2);
    assert_eq!(stats.least_selected_names, vec!["Ada Lovelace"]);
    assert_eq!(stats.least_selected_count, 2);
    assert!(stats.unselected.is_empty());
}

#[test]
fn records_for_emails_outside_the_population_are_ignored() {
    let ada = application(1, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");
    let records = vec![
        selected(&ada),
        record(9, "stray@uni.edu", "Stray", "Entry", "COSC-101", "Intro to Computing"),
    ];

    let stats = compute_selection_stats(&[ada], &records);

    assert_eq!(stats.most_selected_names, vec!["Ada Lovelace"]);
    assert_eq!(stats.most_selected_count, 1);
}

#[test]
fn blank_email_applications_stay_out_of_the_population() {
    let ghost = application(1, "   ", "Ghost", "Entry", "COSC-101", "Intro to Computing");
    let ada = application(2, "ada@uni.edu", "Ada", "Lovelace", "COSC-101", "Intro to Computing");

    let stats = compute_selection_stats(&[ghost, ada], &[]);

    assert_eq!(emails(&stats.unselected), vec!["ada@uni.edu"]);
}

#[test]
fn empty_population_produces_an_empty_summary() {
    let records = vec![record(
        1,
        "ada@uni.edu",
        "Ada",
        "Lovelace",
        "COSC-101",
        "Intro to Computing",
    )];

    let stats = compute_selection_stats(&[], &records);

    assert!(stats.most_selected_names.is_empty());
    assert_eq!(stats.most_selected_count, 0);
    assert!(stats.least_selected_names.is_empty());
    assert_eq!(stats.least_selected_count, 0);
    assert!(stats.unselected.is_empty());
}
