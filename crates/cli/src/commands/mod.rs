//! Subcommand handlers, one module per backend resource.

pub mod logs;
pub mod metrics;
pub mod ratings;
pub mod reviews;
pub mod subjects;
pub mod teachers;
pub mod users;

use reviewer_client::ReviewerApi;

use crate::cli::Command;

pub async fn run(command: Command, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        Command::Users(cmd) => users::run(cmd, api).await,
        Command::Teachers(cmd) => teachers::run(cmd, api).await,
        Command::Subjects(cmd) => subjects::run(cmd, api).await,
        Command::Reviews(cmd) => reviews::run(cmd, api).await,
        Command::Logs(cmd) => logs::run(cmd, api).await,
        Command::Metrics(cmd) => metrics::run(cmd, api).await,
        Command::Ratings => ratings::run(api).await,
    }
}
