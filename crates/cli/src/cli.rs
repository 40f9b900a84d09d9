//! Command-line surface.

use clap::{Parser, Subcommand};

use reviewer_core::types::{ApiDate, ApiId};

#[derive(Parser)]
#[command(
    name = "reviewer-cli",
    about = "Administrative console for the teacher-review backend",
    version
)]
pub struct Cli {
    /// Base URL of the backend API (overrides REVIEWER_API_URL).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage users
    #[command(subcommand)]
    Users(UsersCommand),
    /// Manage teachers and their subject assignments
    #[command(subcommand)]
    Teachers(TeachersCommand),
    /// Manage subjects
    #[command(subcommand)]
    Subjects(SubjectsCommand),
    /// Manage reviews
    #[command(subcommand)]
    Reviews(ReviewsCommand),
    /// Log-file generation and download links
    #[command(subcommand)]
    Logs(LogsCommand),
    /// Backend usage metrics
    #[command(subcommand)]
    Metrics(MetricsCommand),
    /// Average teacher ratings computed from all reviews
    Ratings,
}

#[derive(Subcommand)]
pub enum UsersCommand {
    /// List all users
    List,
    /// Show one user by id
    Get { id: ApiId },
    /// Show one user by username
    GetByUsername { username: String },
    /// Create a user
    Create { username: String },
    /// Rename a user
    Update { id: ApiId, username: String },
    /// Delete a user
    Delete { id: ApiId },
}

#[derive(Subcommand)]
pub enum TeachersCommand {
    /// List all teachers
    List,
    /// Show one teacher by id
    Get { id: ApiId },
    /// Find a teacher by surname and name
    Find {
        #[arg(long)]
        surname: String,
        #[arg(long)]
        name: String,
    },
    /// List the teachers of a subject
    BySubject { subject_name: String },
    /// Create a teacher
    Create {
        #[arg(long)]
        surname: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        patronym: Option<String>,
    },
    /// Create teachers in bulk from a JSON file
    /// (an array of {"surname", "name", "patronym"?} objects)
    Import { file: std::path::PathBuf },
    /// Update a teacher
    Update {
        id: ApiId,
        #[arg(long)]
        surname: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        patronym: Option<String>,
    },
    /// Delete a teacher
    Delete { id: ApiId },
    /// Link a subject to a teacher
    AssignSubject {
        teacher_id: ApiId,
        subject_id: ApiId,
    },
    /// Unlink a subject from a teacher
    UnassignSubject {
        teacher_id: ApiId,
        subject_id: ApiId,
    },
}

#[derive(Subcommand)]
pub enum SubjectsCommand {
    /// List all subjects
    List,
    /// Show one subject by id
    Get { id: ApiId },
    /// Show one subject by name
    GetByName { name: String },
    /// Create a subject
    Create { name: String },
    /// Rename a subject
    Update { id: ApiId, name: String },
    /// Delete a subject
    Delete { id: ApiId },
}

#[derive(Subcommand)]
pub enum ReviewsCommand {
    /// List all reviews
    List,
    /// Show one review by id
    Get { id: ApiId },
    /// List the reviews written by a user, by id
    ByUser { user_id: ApiId },
    /// List the reviews written by a user, by username
    ByUsername { username: String },
    /// List the reviews about a teacher
    ByTeacher { teacher_id: ApiId },
    /// List the most recent reviews
    Recent {
        #[arg(long, default_value_t = 5)]
        limit: u32,
    },
    /// Search reviews with optional filters
    Search {
        #[arg(long)]
        start_date: Option<ApiDate>,
        #[arg(long)]
        end_date: Option<ApiDate>,
        #[arg(long)]
        teacher_surname: Option<String>,
        #[arg(long)]
        subject_name: Option<String>,
        #[arg(long)]
        min_grade: Option<i32>,
    },
    /// Create a review
    Create {
        #[arg(long)]
        user_id: ApiId,
        #[arg(long)]
        teacher_id: ApiId,
        #[arg(long)]
        subject_id: ApiId,
        /// Review date (YYYY-MM-DD), today or earlier
        #[arg(long)]
        date: ApiDate,
        /// Grade from 1 to 10
        #[arg(long)]
        grade: i32,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Update a review
    Update {
        id: ApiId,
        #[arg(long)]
        user_id: ApiId,
        #[arg(long)]
        teacher_id: ApiId,
        #[arg(long)]
        subject_id: ApiId,
        #[arg(long)]
        date: ApiDate,
        #[arg(long)]
        grade: i32,
        #[arg(long)]
        comment: Option<String>,
    },
    /// Delete a review
    Delete { id: ApiId },
}

#[derive(Subcommand)]
pub enum LogsCommand {
    /// Start generating a log file for a date and poll until it finishes
    Generate {
        /// Log date (YYYY-MM-DD), today or earlier
        #[arg(long)]
        date: ApiDate,
    },
    /// Show the current status of a generation task
    Status { task_id: String },
    /// Print the download URL for a completed generation task
    DownloadUrl { task_id: String },
    /// Print the download URL for a standard daily log file
    StandardUrl {
        #[arg(long)]
        date: ApiDate,
    },
}

#[derive(Subcommand)]
pub enum MetricsCommand {
    /// Visit counts per URL pattern
    Visits,
    /// Entity counts
    Counts,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_an_iso_date() {
        let cli = Cli::try_parse_from([
            "reviewer-cli",
            "logs",
            "generate",
            "--date",
            "2024-01-01",
        ])
        .unwrap();
        match cli.command {
            Command::Logs(LogsCommand::Generate { date }) => {
                assert_eq!(date.to_string(), "2024-01-01");
            }
            _ => panic!("expected logs generate"),
        }
    }

    #[test]
    fn malformed_date_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from([
            "reviewer-cli",
            "logs",
            "generate",
            "--date",
            "01.02.2024",
        ])
        .is_err());
    }
}
