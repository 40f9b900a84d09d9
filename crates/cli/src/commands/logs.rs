use std::sync::Arc;

use anyhow::bail;

use reviewer_client::{LogPoller, ReviewerApi};
use reviewer_core::job::{JobSnapshot, JobStatus};
use reviewer_core::types::ApiDate;
use reviewer_core::validation;

use crate::cli::LogsCommand;

pub async fn run(command: LogsCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        LogsCommand::Generate { date } => generate(api, date).await,
        LogsCommand::Status { task_id } => {
            let status = api.log_generation_status(&task_id).await?;
            println!("Task {task_id}: {}", status.status);
            if let Some(message) = status.error_message.as_deref() {
                println!("  error: {message}");
            }
            if let Some(url) = status.download_url.as_deref() {
                println!("  download: {url}");
            }
            Ok(())
        }
        LogsCommand::DownloadUrl { task_id } => {
            println!("{}", api.generated_log_download_url(&task_id));
            Ok(())
        }
        LogsCommand::StandardUrl { date } => {
            println!("{}", api.standard_log_download_url(date));
            Ok(())
        }
    }
}

/// Start a generation task and watch it until a terminal status.
///
/// Ctrl-C stops the local polling schedule only; the backend task keeps
/// running and can still be inspected with `logs status`.
async fn generate(api: &ReviewerApi, date: ApiDate) -> anyhow::Result<()> {
    let today = chrono::Utc::now().date_naive();
    validation::validate_past_or_present(date, today)?;

    let poller = LogPoller::new(Arc::new(api.clone()));
    let handle = poller.submit(date).await?;
    let task_id = handle.task_id;
    let mut updates = handle.updates;
    println!("Task {task_id} accepted, waiting for completion (Ctrl-C to stop watching)");

    let mut last_status = None;
    loop {
        let state = updates.borrow_and_update().clone();
        if let Some(snapshot) = state.snapshot() {
            if last_status != Some(snapshot.status) {
                println!("  status: {}", snapshot.status);
                last_status = Some(snapshot.status);
            }
            if snapshot.status.is_terminal() {
                return report_terminal(api, &task_id, snapshot);
            }
        }

        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    bail!("Poller stopped before the task finished");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                poller.cancel();
                println!("Stopped watching; task {task_id} may still be running on the backend");
                return Ok(());
            }
        }
    }
}

fn report_terminal(api: &ReviewerApi, task_id: &str, snapshot: &JobSnapshot) -> anyhow::Result<()> {
    match snapshot.status {
        JobStatus::Completed => {
            match snapshot.download_url.as_deref() {
                Some(_) => println!("Download: {}", api.generated_log_download_url(task_id)),
                None => println!(
                    "Warning: generation completed but the backend returned no download link"
                ),
            }
            Ok(())
        }
        JobStatus::Failed => {
            let reason = snapshot
                .error_message
                .as_deref()
                .unwrap_or("no reason reported");
            bail!("Log generation failed: {reason}");
        }
        JobStatus::Pending | JobStatus::Running => unreachable!("terminal snapshot expected"),
    }
}
