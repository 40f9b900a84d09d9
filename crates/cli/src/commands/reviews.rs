use validator::Validate;

use reviewer_client::reviews::{ReviewFilter, ReviewPayload};
use reviewer_client::ReviewerApi;
use reviewer_core::types::{ApiDate, ApiId};
use reviewer_core::validation;

use crate::cli::ReviewsCommand;
use crate::output;

pub async fn run(command: ReviewsCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        ReviewsCommand::List => {
            for review in api.list_reviews().await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::Get { id } => output::print_review(&api.get_review(id).await?),
        ReviewsCommand::ByUser { user_id } => {
            for review in api.reviews_by_user(user_id).await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::ByUsername { username } => {
            for review in api.reviews_by_username(&username).await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::ByTeacher { teacher_id } => {
            for review in api.reviews_by_teacher(teacher_id).await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::Recent { limit } => {
            for review in api.recent_reviews(limit).await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::Search {
            start_date,
            end_date,
            teacher_surname,
            subject_name,
            min_grade,
        } => {
            let filter = ReviewFilter {
                start_date,
                end_date,
                teacher_surname,
                subject_name,
                min_grade,
            };
            for review in api.search_reviews(&filter).await? {
                output::print_review(&review);
            }
        }
        ReviewsCommand::Create {
            user_id,
            teacher_id,
            subject_id,
            date,
            grade,
            comment,
        } => {
            let payload = build_payload(user_id, teacher_id, subject_id, date, grade, comment)?;
            let review = api.create_review(&payload).await?;
            println!("Created review #{}", review.id);
        }
        ReviewsCommand::Update {
            id,
            user_id,
            teacher_id,
            subject_id,
            date,
            grade,
            comment,
        } => {
            let payload = build_payload(user_id, teacher_id, subject_id, date, grade, comment)?;
            let review = api.update_review(id, &payload).await?;
            println!("Updated review #{}", review.id);
        }
        ReviewsCommand::Delete { id } => {
            api.delete_review(id).await?;
            println!("Deleted review #{id}");
        }
    }
    Ok(())
}

/// Assemble and validate a review payload before it goes on the wire.
fn build_payload(
    user_id: ApiId,
    teacher_id: ApiId,
    subject_id: ApiId,
    date: ApiDate,
    grade: i32,
    comment: Option<String>,
) -> anyhow::Result<ReviewPayload> {
    let today = chrono::Utc::now().date_naive();
    validation::validate_past_or_present(date, today)?;

    let payload = ReviewPayload {
        user_id,
        teacher_id,
        subject_id,
        date,
        grade,
        comment,
    };
    payload.validate()?;
    Ok(payload)
}
