//! Asynchronous log-generation poller.
//!
//! [`LogPoller`] owns the submit -> poll -> terminal lifecycle for
//! exactly one backend job at a time: it schedules a short delay before
//! the first status check, then polls on a fixed interval until the job
//! reaches a terminal status or a status check fails. Timers and
//! transport live here; what each response *means* is decided by the
//! pure transition function in `reviewer_core::job`.
//!
//! Snapshots are published through a [`tokio::sync::watch`] channel so
//! any number of observers can render progress. Cancellation stops the
//! *schedule* only -- a status request already in flight is not aborted,
//! its response is simply discarded.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use reviewer_core::job::{self, JobSnapshot, JobStatus, JobWarning, PollEvent, PollerState, Schedule};
use reviewer_core::types::ApiDate;

use crate::http::{ApiError, ReviewerApi};
use crate::logs::{LogGenerationStarted, LogGenerationStatus};

/// Timing knobs for the poll schedule.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay before the first status check, giving the backend time to
    /// register the freshly accepted task.
    pub initial_delay: Duration,
    /// Fixed delay between subsequent status checks.
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            interval: Duration::from_secs(3),
        }
    }
}

/// Transport seam for the poller.
///
/// Implemented by [`ReviewerApi`] for production and by scripted fakes
/// in tests, so the whole lifecycle can be exercised without a backend.
#[async_trait]
pub trait LogBackend: Send + Sync {
    async fn start_generation(&self, date: ApiDate) -> Result<LogGenerationStarted, ApiError>;
    async fn fetch_status(&self, task_id: &str) -> Result<LogGenerationStatus, ApiError>;
}

#[async_trait]
impl LogBackend for ReviewerApi {
    async fn start_generation(&self, date: ApiDate) -> Result<LogGenerationStarted, ApiError> {
        self.start_log_generation(date).await
    }

    async fn fetch_status(&self, task_id: &str) -> Result<LogGenerationStatus, ApiError> {
        self.log_generation_status(task_id).await
    }
}

/// Errors from submitting a generation request.
///
/// Either way no job is created and polling never starts.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The backend rejected the start request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend accepted the request but returned no task id.
    #[error("Backend returned no task id for the generation request")]
    MissingTaskId,
}

/// Handle to a submitted job: its id plus a live view of its state.
#[derive(Debug)]
pub struct JobHandle {
    pub task_id: String,
    /// Receiver over the poller state; always holds the latest snapshot.
    pub updates: watch::Receiver<PollerState>,
}

/// Drives the poll lifecycle for at most one job at a time.
///
/// Submitting a new job implicitly cancels the previous schedule, and
/// dropping the poller cancels whatever is still running. The token is
/// the only shared handle to a schedule; the spawned task is detached.
pub struct LogPoller<B = ReviewerApi> {
    backend: Arc<B>,
    config: PollConfig,
    state_tx: watch::Sender<PollerState>,
    active: Mutex<Option<CancellationToken>>,
}

impl<B> LogPoller<B> {
    /// Subscribe to state changes. The receiver yields the current
    /// state immediately and every published change afterwards.
    pub fn subscribe(&self) -> watch::Receiver<PollerState> {
        self.state_tx.subscribe()
    }

    /// The latest published state.
    pub fn snapshot(&self) -> PollerState {
        self.state_tx.borrow().clone()
    }

    /// Stop the active schedule, if any. Idempotent and safe to call
    /// when no job was ever submitted.
    ///
    /// Only the recurrence is cancelled: a status request already in
    /// flight runs to completion and its response is discarded.
    pub fn cancel(&self) {
        let mut active = self.active.lock().expect("poller lock poisoned");
        if let Some(cancel) = active.take() {
            cancel.cancel();
        }
    }
}

impl<B: LogBackend + 'static> LogPoller<B> {
    pub fn new(backend: Arc<B>) -> Self {
        Self::with_config(backend, PollConfig::default())
    }

    pub fn with_config(backend: Arc<B>, config: PollConfig) -> Self {
        let (state_tx, _) = watch::channel(PollerState::Idle);
        Self {
            backend,
            config,
            state_tx,
            active: Mutex::new(None),
        }
    }

    /// Submit a generation request and start polling its status.
    ///
    /// Any previous schedule is cancelled and its job discarded before
    /// the request goes out. On success the published state becomes
    /// `Tracking` with the backend-reported status (normally `PENDING`)
    /// and the poll task is spawned; on failure the poller stays idle
    /// and no polling starts.
    pub async fn submit(&self, date: ApiDate) -> Result<JobHandle, SubmitError> {
        self.cancel();
        self.state_tx.send_replace(PollerState::Idle);

        let started = self.backend.start_generation(date).await?;
        let task_id = match started.task_id {
            Some(id) if !id.is_empty() => id,
            _ => return Err(SubmitError::MissingTaskId),
        };

        let mut snapshot = JobSnapshot::pending(task_id.clone(), date);
        snapshot.status = started.status.unwrap_or(JobStatus::Pending);

        tracing::info!(task_id = %task_id, date = %date, "Log generation task accepted");
        self.state_tx.send_replace(PollerState::Tracking(snapshot));

        let cancel = CancellationToken::new();
        tokio::spawn(run_schedule(
            Arc::clone(&self.backend),
            self.config.clone(),
            self.state_tx.clone(),
            task_id.clone(),
            cancel.clone(),
        ));

        let mut active = self.active.lock().expect("poller lock poisoned");
        // A concurrent submit may have slipped in since the cancel()
        // above; its schedule must not be left running unowned.
        if let Some(previous) = active.replace(cancel) {
            previous.cancel();
        }

        Ok(JobHandle {
            task_id,
            updates: self.state_tx.subscribe(),
        })
    }
}

impl<B> Drop for LogPoller<B> {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The spawned poll loop: initial delay, then poll / sleep until a
/// terminal transition or cancellation.
async fn run_schedule<B: LogBackend>(
    backend: Arc<B>,
    config: PollConfig,
    state_tx: watch::Sender<PollerState>,
    task_id: String,
    cancel: CancellationToken,
) {
    // `biased` makes cancellation win over an elapsed timer, so a
    // cancelled schedule never sends another request.
    tokio::select! {
        biased;
        _ = cancel.cancelled() => return,
        _ = tokio::time::sleep(config.initial_delay) => {}
    }

    loop {
        let event = match backend.fetch_status(&task_id).await {
            Ok(status) => PollEvent::Update {
                task_id: task_id.clone(),
                status: status.status,
                error_message: status.error_message,
                download_url: status.download_url,
            },
            Err(e) => {
                tracing::error!(task_id = %task_id, error = %e, "Status check failed, stopping polls");
                PollEvent::TransportFailure {
                    task_id: task_id.clone(),
                    message: e.to_string(),
                }
            }
        };

        // The schedule may have been superseded while the request was
        // in flight; a cancelled schedule must not publish anything.
        if cancel.is_cancelled() {
            return;
        }

        if apply_event(&state_tx, event) == Schedule::Stop {
            return;
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return,
            _ = tokio::time::sleep(config.interval) => {}
        }
    }
}

/// Feed one poll event through the pure transition function and
/// publish the result. Stale events (id mismatch) leave the published
/// state untouched; observers are only woken for real changes.
fn apply_event(state_tx: &watch::Sender<PollerState>, event: PollEvent) -> Schedule {
    let mut schedule = Schedule::Stop;
    state_tx.send_if_modified(|state| {
        let transition = job::step(state.clone(), event.clone());

        if let Some(JobWarning::MissingDownloadUrl) = transition.warning {
            tracing::warn!(
                task_id = state.snapshot().map(|s| s.task_id.as_str()).unwrap_or(""),
                "Generation completed but the backend returned no download link",
            );
        }

        schedule = transition.schedule;
        if transition.state != *state {
            *state = transition.state;
            true
        } else {
            false
        }
    });
    schedule
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
