//! REST client for the teacher-review backend.
//!
//! Typed endpoint wrappers over [`reqwest`] for every backend resource
//! (users, teachers, subjects, reviews, logs, metrics), plus the
//! asynchronous log-generation poller that tracks one backend job from
//! submission to its terminal status.

pub mod http;
pub mod logs;
pub mod metrics;
pub mod poller;
pub mod reviews;
pub mod subjects;
pub mod teachers;
pub mod users;

pub use http::{ApiError, ReviewerApi};
pub use poller::{JobHandle, LogPoller, PollConfig, SubmitError};
