use crate::report::{run_estimate, run_tables, EstimateArgs, TablesArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use lions_odds::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "lions-odds",
    about = "Estimate the odds of winning at Cannes Lions from the command line or over HTTP",
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
    /// Estimate the win probability for a single entry
    Estimate(EstimateArgs),
    /// Print the multiplier tables the estimator will use
    Tables(TablesArgs),
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
        Command::Estimate(args) => run_estimate(args),
        Command::Tables(args) => run_tables(args),
    }
}
