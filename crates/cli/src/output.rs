//! Plain-text rendering for backend entities.

use reviewer_client::reviews::Review;
use reviewer_client::subjects::Subject;
use reviewer_client::teachers::Teacher;
use reviewer_client::users::User;

pub fn print_user(user: &User) {
    println!(
        "#{:<4} {}  ({} reviews)",
        user.id,
        user.username,
        user.reviews.len()
    );
}

pub fn print_teacher(teacher: &Teacher) {
    if teacher.subjects.is_empty() {
        println!("#{:<4} {}", teacher.id, teacher.full_name());
    } else {
        println!(
            "#{:<4} {}  [{}]",
            teacher.id,
            teacher.full_name(),
            teacher.subjects.join(", ")
        );
    }
}

pub fn print_subject(subject: &Subject) {
    if subject.teacher_names.is_empty() {
        println!("#{:<4} {}", subject.id, subject.name);
    } else {
        println!(
            "#{:<4} {}  [{}]",
            subject.id,
            subject.name,
            subject.teacher_names.join(", ")
        );
    }
}

pub fn print_review(review: &Review) {
    println!(
        "#{:<4} {}  {}/10  {} on {} by {}",
        review.id,
        review.date,
        review.grade,
        review.teacher.full_name(),
        review.subject_name,
        review.author
    );
    if let Some(comment) = review.comment.as_deref().filter(|c| !c.is_empty()) {
        println!("      {comment}");
    }
}
