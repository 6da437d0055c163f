use crate::infra::sample_dataset;
use clap::Args;
use staffing::error::AppError;
use staffing::selection::report::views::{SelectionReport, SelectionStats};
use staffing::selection::{
    build_report, DatasetImporter, SelectionDataset, OVERCOMMITMENT_THRESHOLD,
};
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SelectionReportArgs {
    /// Applications CSV export (defaults to the built-in sample round)
    #[arg(long)]
    pub(crate) applications_csv: Option<PathBuf>,
    /// Selections CSV export to pair with the applications
    #[arg(long, requires = "applications_csv")]
    pub(crate) selections_csv: Option<PathBuf>,
    /// Emit the report as pretty-printed JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Applications CSV export to run the demo against
    #[arg(long)]
    pub(crate) applications_csv: Option<PathBuf>,
    /// Selections CSV export to pair with the applications
    #[arg(long, requires = "applications_csv")]
    pub(crate) selections_csv: Option<PathBuf>,
}

pub(crate) fn run_selection_report(args: SelectionReportArgs) -> Result<(), AppError> {
    let SelectionReportArgs {
        applications_csv,
        selections_csv,
        json,
    } = args;

    let (dataset, imported) = load_dataset_from_paths(applications_csv, selections_csv)?;
    let report = build_report(&dataset.applications, &dataset.selection_records);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("report serialization failed: {err}"),
        }
        return Ok(());
    }

    render_report(&report, imported);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        applications_csv,
        selections_csv,
    } = args;

    println!("Selection analytics demo");
    let (dataset, imported) = load_dataset_from_paths(applications_csv, selections_csv)?;
    let report = build_report(&dataset.applications, &dataset.selection_records);
    render_report(&report, imported);

    println!("\nStats payload as served to the admin dashboard:");
    match serde_json::to_string_pretty(&report.stats) {
        Ok(payload) => println!("{payload}"),
        Err(err) => println!("  payload unavailable: {err}"),
    }

    Ok(())
}

pub(crate) fn load_dataset_from_paths(
    applications_csv: Option<PathBuf>,
    selections_csv: Option<PathBuf>,
) -> Result<(SelectionDataset, bool), AppError> {
    match applications_csv {
        Some(applications) => DatasetImporter::from_paths(applications, selections_csv)
            .map(|dataset| (dataset, true))
            .map_err(AppError::from),
        None => Ok((sample_dataset(), false)),
    }
}

fn render_report(report: &SelectionReport, imported: bool) {
    let source = if imported {
        "portal CSV exports"
    } else {
        "built-in sample round"
    };
    println!(
        "Selection report over {source}: {} applications, {} selection records",
        report.applications_considered, report.selections_considered
    );

    println!("\nSelected applicants per course:");
    if report.course_groups.is_empty() {
        println!("  (no selections recorded)");
    }
    for (course_code, group) in &report.course_groups {
        println!("- {} {}", course_code, group.course_name);
        for applicant in &group.applicants {
            println!("    {} <{}>", applicant.display_name(), applicant.email);
        }
    }

    println!(
        "\nOvercommitted candidates (selected more than {OVERCOMMITMENT_THRESHOLD} times):"
    );
    if report.overcommitted.is_empty() {
        println!("  (none)");
    }
    for candidate in &report.overcommitted {
        println!("- {} <{}>", candidate.display_name(), candidate.email);
    }

    render_stats(&report.stats);
}

fn render_stats(stats: &SelectionStats) {
    println!("\nSelection statistics:");
    if stats.most_selected_names.is_empty() {
        println!("- Most selected: (no selections)");
    } else {
        println!(
            "- Most selected ({} selections): {}",
            stats.most_selected_count,
            stats.most_selected_names.join(", ")
        );
    }
    if stats.least_selected_names.is_empty() {
        println!("- Least selected: (no selections)");
    } else {
        println!(
            "- Least selected ({} selections): {}",
            stats.least_selected_count,
            stats.least_selected_names.join(", ")
        );
    }
    if stats.unselected.is_empty() {
        println!("- Never selected: (everyone has at least one selection)");
    } else {
        println!("- Never selected:");
        for candidate in &stats.unselected {
            println!("    {} <{}>", candidate.display_name(), candidate.email);
        }
    }
}
