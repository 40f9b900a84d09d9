//! Operator CLI for the teacher-review backend.
//!
//! Wraps `reviewer-client` in subcommands for every backend resource
//! and drives the asynchronous log-generation workflow with live
//! progress output.

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
