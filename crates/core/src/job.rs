//! Log-generation job tracking: the status vocabulary and the pure
//! poll-transition function.
//!
//! The poller runtime in `reviewer-client` owns timers and transport;
//! this module owns what each poll result *means*. [`step`] is a pure
//! function from the current tracked state and one poll event to the
//! next state, so every lifecycle rule is testable without a scheduler.

use serde::{Deserialize, Serialize};

use crate::types::ApiDate;

/// Backend-reported state of one log-generation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl JobStatus {
    /// Completed and Failed are terminal: no further polls follow.
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JobStatus::Pending => "PENDING",
            JobStatus::Running => "RUNNING",
            JobStatus::Completed => "COMPLETED",
            JobStatus::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Latest known state of the tracked job, as observed by polling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSnapshot {
    /// Backend-assigned task identifier.
    pub task_id: String,
    /// The date the generation was requested for.
    pub date: ApiDate,
    pub status: JobStatus,
    /// Populated when the job failed (backend-reported or local).
    pub error_message: Option<String>,
    /// Populated only once the job completed.
    pub download_url: Option<String>,
}

impl JobSnapshot {
    /// Snapshot for a freshly submitted job.
    pub fn pending(task_id: impl Into<String>, date: ApiDate) -> Self {
        Self {
            task_id: task_id.into(),
            date,
            status: JobStatus::Pending,
            error_message: None,
            download_url: None,
        }
    }
}

/// Poller state as exposed to the UI layer.
///
/// `Idle` means no job has been submitted (or the poller was reset);
/// `Tracking` carries the latest snapshot of the one job being watched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PollerState {
    #[default]
    Idle,
    Tracking(JobSnapshot),
}

impl PollerState {
    pub fn snapshot(&self) -> Option<&JobSnapshot> {
        match self {
            PollerState::Idle => None,
            PollerState::Tracking(snapshot) => Some(snapshot),
        }
    }

    /// True once the tracked job reached Completed or Failed.
    pub fn is_terminal(&self) -> bool {
        self.snapshot().is_some_and(|s| s.status.is_terminal())
    }
}

/// One status-check result, tagged with the job it belongs to.
///
/// The tag is what makes stale responses harmless: an event whose
/// `task_id` does not match the tracked job is discarded wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEvent {
    /// The backend answered the status request.
    Update {
        task_id: String,
        status: JobStatus,
        error_message: Option<String>,
        download_url: Option<String>,
    },
    /// The status request itself failed (network error or non-2xx).
    /// Fail closed: the job is treated as Failed locally even though
    /// the backend may still be running it.
    TransportFailure { task_id: String, message: String },
}

impl PollEvent {
    fn task_id(&self) -> &str {
        match self {
            PollEvent::Update { task_id, .. } => task_id,
            PollEvent::TransportFailure { task_id, .. } => task_id,
        }
    }
}

/// What the poll schedule should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    Continue,
    Stop,
}

/// Anomaly surfaced by a transition without failing the job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobWarning {
    /// The job completed but the backend sent no download link.
    MissingDownloadUrl,
}

/// Result of feeding one poll event through the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: PollerState,
    pub schedule: Schedule,
    pub warning: Option<JobWarning>,
}

/// Advance the poller state by one poll event.
///
/// Rules, in order:
/// - with no tracked job there is nothing to advance (`Idle`, stop);
/// - an event for a different task id is stale and is discarded without
///   touching the tracked snapshot;
/// - a job already in a terminal status never changes again;
/// - a transport failure forces the job to Failed and stops the
///   schedule;
/// - otherwise the fetched status is applied verbatim. `download_url`
///   is only ever stored on a Completed snapshot, and a Completed
///   update without one yields [`JobWarning::MissingDownloadUrl`].
pub fn step(state: PollerState, event: PollEvent) -> Transition {
    let snapshot = match state {
        PollerState::Idle => {
            return Transition {
                state: PollerState::Idle,
                schedule: Schedule::Stop,
                warning: None,
            }
        }
        PollerState::Tracking(snapshot) => snapshot,
    };

    if event.task_id() != snapshot.task_id {
        return Transition {
            state: PollerState::Tracking(snapshot),
            schedule: Schedule::Continue,
            warning: None,
        };
    }

    if snapshot.status.is_terminal() {
        return Transition {
            state: PollerState::Tracking(snapshot),
            schedule: Schedule::Stop,
            warning: None,
        };
    }

    match event {
        PollEvent::Update {
            status,
            error_message,
            download_url,
            ..
        } => {
            let warning = (status == JobStatus::Completed && download_url.is_none())
                .then_some(JobWarning::MissingDownloadUrl);

            let next = JobSnapshot {
                status,
                error_message,
                download_url: if status == JobStatus::Completed {
                    download_url
                } else {
                    None
                },
                ..snapshot
            };

            Transition {
                schedule: if status.is_terminal() {
                    Schedule::Stop
                } else {
                    Schedule::Continue
                },
                state: PollerState::Tracking(next),
                warning,
            }
        }
        PollEvent::TransportFailure { message, .. } => Transition {
            state: PollerState::Tracking(JobSnapshot {
                status: JobStatus::Failed,
                error_message: Some(message),
                download_url: None,
                ..snapshot
            }),
            schedule: Schedule::Stop,
            warning: None,
        },
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
