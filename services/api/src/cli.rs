use crate::demo::{run_demo, run_selection_report, DemoArgs, SelectionReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use staffing::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Staffing Selection Analytics",
    about = "Run and inspect the staffing portal's selection analytics from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Selection reporting for administrators
    Selection {
        #[command(subcommand)]
        command: SelectionCommand,
    },
    /// Run an end-to-end CLI demo of the selection report
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum SelectionCommand {
    /// Compute the selection report from portal CSV exports
    Report(SelectionReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the store from an applications CSV export instead of sample data
    #[arg(long)]
    pub(crate) applications_csv: Option<PathBuf>,
    /// Selections CSV export to seed alongside the applications
    #[arg(long, requires = "applications_csv")]
    pub(crate) selections_csv: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Selection {
            command: SelectionCommand::Report(args),
        } => run_selection_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
