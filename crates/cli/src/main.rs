//! `reviewer-cli` -- administrative console for the teacher-review
//! backend.
//!
//! Manages users, teachers, subjects, and reviews over the backend's
//! REST API, computes average teacher ratings client-side, and drives
//! the asynchronous log-file generation workflow with live progress.
//!
//! # Environment variables
//!
//! | Variable                | Required | Default                     | Description                 |
//! |-------------------------|----------|-----------------------------|-----------------------------|
//! | `REVIEWER_API_URL`      | no       | `http://localhost:8080/api` | Backend API base URL        |
//! | `REVIEWER_TIMEOUT_SECS` | no       | `30`                        | HTTP request timeout        |

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reviewer_cli::cli::Cli;
use reviewer_cli::commands;
use reviewer_cli::config::ClientConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reviewer_cli=info,reviewer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    tracing::debug!(api_url = %config.api_url, "Configured backend");

    let api = config.build_api(cli.api_url)?;
    commands::run(cli.command, &api).await
}
