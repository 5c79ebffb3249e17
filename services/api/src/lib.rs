mod cli;
mod infra;
mod report;
mod routes;
mod server;

use lions_odds::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
