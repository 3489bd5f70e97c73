use crate::demo::{run_assess, run_demo, run_export, run_questions, AssessArgs, ExportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use funding_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Funding Readiness Checklist",
    about = "Score the funding readiness checklist from the command line or over HTTP",
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
    /// Score a set of checklist answers and print the result
    Assess(AssessArgs),
    /// Print the ten checklist questions and their answer options
    Questions,
    /// Score answers and write a dated JSON export file
    Export(ExportArgs),
    /// Walk through reference answer sheets and their profiles
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Questions => run_questions(),
        Command::Export(args) => run_export(args),
        Command::Demo => run_demo(),
    }
}
