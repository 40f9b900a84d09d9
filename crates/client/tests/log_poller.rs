//! End-to-end tests for the log-generation poller over real HTTP.
//!
//! A stub backend walks a scripted status sequence; the poller runs
//! with millisecond delays so each test finishes quickly.

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use reviewer_client::{ApiError, LogPoller, PollConfig, ReviewerApi, SubmitError};
use reviewer_core::job::{JobStatus, PollerState};
use reviewer_core::types::ApiDate;

use common::client_for;

fn date() -> ApiDate {
    ApiDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn fast_config() -> PollConfig {
    PollConfig {
        initial_delay: Duration::from_millis(10),
        interval: Duration::from_millis(20),
    }
}

fn poller_for(api: &ReviewerApi) -> LogPoller {
    LogPoller::with_config(Arc::new(api.clone()), fast_config())
}

async fn wait_terminal(
    updates: &mut tokio::sync::watch::Receiver<PollerState>,
) -> reviewer_core::job::JobSnapshot {
    loop {
        if updates.borrow().is_terminal() {
            return updates.borrow().snapshot().unwrap().clone();
        }
        updates.changed().await.expect("poller dropped");
    }
}

#[tokio::test]
async fn generation_completes_after_pending_and_running() {
    let polls = Arc::new(AtomicUsize::new(0));
    let polls_handler = Arc::clone(&polls);

    let router = Router::new()
        .route(
            "/logs/generate",
            post(|Query(params): Query<std::collections::HashMap<String, String>>| async move {
                assert_eq!(params["date"], "2024-01-01");
                (
                    StatusCode::ACCEPTED,
                    Json(json!({
                        "taskId": "T1",
                        "status": "PENDING",
                        "statusUrl": "/api/logs/generate/T1/status"
                    })),
                )
            }),
        )
        .route(
            "/logs/generate/T1/status",
            get(move || {
                let polls = Arc::clone(&polls_handler);
                async move {
                    match polls.fetch_add(1, Ordering::SeqCst) {
                        0 => Json(json!({"status": "RUNNING"})),
                        _ => Json(json!({
                            "status": "COMPLETED",
                            "downloadUrl": "/api/logs/generate/T1/download"
                        })),
                    }
                }
            }),
        );
    let api = client_for(router).await;
    let poller = poller_for(&api);

    let mut handle = poller.submit(date()).await.unwrap();
    assert_eq!(handle.task_id, "T1");

    let snapshot = wait_terminal(&mut handle.updates).await;
    assert_eq!(snapshot.status, JobStatus::Completed);
    assert_eq!(
        snapshot.download_url.as_deref(),
        Some("/api/logs/generate/T1/download")
    );

    // Terminal means the schedule stopped: the poll count stays put.
    let seen = polls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(polls.load(Ordering::SeqCst), seen);
}

#[tokio::test]
async fn status_endpoint_failure_fails_the_job_locally() {
    let polls = Arc::new(AtomicUsize::new(0));
    let polls_handler = Arc::clone(&polls);

    let router = Router::new()
        .route(
            "/logs/generate",
            post(|| async { Json(json!({"taskId": "T1", "status": "PENDING"})) }),
        )
        .route(
            "/logs/generate/T1/status",
            get(move || {
                let polls = Arc::clone(&polls_handler);
                async move {
                    polls.fetch_add(1, Ordering::SeqCst);
                    (StatusCode::INTERNAL_SERVER_ERROR, "status registry down")
                }
            }),
        );
    let api = client_for(router).await;
    let poller = poller_for(&api);

    let mut handle = poller.submit(date()).await.unwrap();
    let snapshot = wait_terminal(&mut handle.updates).await;

    assert_eq!(snapshot.status, JobStatus::Failed);
    assert!(snapshot.error_message.as_deref().unwrap().contains("500"));

    // Fail closed: exactly one status request, no retries.
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(polls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn rejected_submission_surfaces_the_backend_message() {
    let router = Router::new().route(
        "/logs/generate",
        post(|| async { (StatusCode::BAD_REQUEST, "Date parameter is required") }),
    );
    let api = client_for(router).await;
    let poller = poller_for(&api);

    let err = poller.submit(date()).await.unwrap_err();
    assert_matches!(
        err,
        SubmitError::Api(ApiError::Api { status: 400, ref body })
            if body.contains("Date parameter is required")
    );
    assert_eq!(poller.snapshot(), PollerState::Idle);
}

#[tokio::test]
async fn acceptance_without_task_id_is_rejected_before_polling() {
    let router = Router::new().route(
        "/logs/generate",
        post(|| async { Json(json!({"status": "PENDING"})) }),
    );
    let api = client_for(router).await;
    let poller = poller_for(&api);

    let err = poller.submit(date()).await.unwrap_err();
    assert_matches!(err, SubmitError::MissingTaskId);
}

#[tokio::test]
async fn completed_without_download_url_still_terminates() {
    let router = Router::new()
        .route(
            "/logs/generate",
            post(|| async { Json(json!({"taskId": "T1", "status": "PENDING"})) }),
        )
        .route(
            "/logs/generate/T1/status",
            get(|| async { Json(json!({"status": "COMPLETED"})) }),
        );
    let api = client_for(router).await;
    let poller = poller_for(&api);

    let mut handle = poller.submit(date()).await.unwrap();
    let snapshot = wait_terminal(&mut handle.updates).await;
    assert_eq!(snapshot.status, JobStatus::Completed);
    assert_eq!(snapshot.download_url, None);
}
