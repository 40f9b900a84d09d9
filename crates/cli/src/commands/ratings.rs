use std::collections::HashMap;

use reviewer_client::ReviewerApi;
use reviewer_core::rating::{average_ratings, rating_band};
use reviewer_core::types::ApiId;

pub async fn run(api: &ReviewerApi) -> anyhow::Result<()> {
    let reviews = api.list_reviews().await?;
    if reviews.is_empty() {
        println!("No reviews yet");
        return Ok(());
    }

    let names: HashMap<ApiId, String> = reviews
        .iter()
        .map(|r| (r.teacher.id, r.teacher.full_name()))
        .collect();
    let averages = average_ratings(reviews.iter().map(|r| (r.teacher.id, r.grade)));

    let mut rows: Vec<_> = averages.into_iter().collect();
    rows.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });

    for (teacher_id, average) in rows {
        let band = rating_band(average).map(|b| b.label()).unwrap_or("?");
        let name = names
            .get(&teacher_id)
            .map(String::as_str)
            .unwrap_or("unknown teacher");
        println!("{average:>4.1}  [{band:^9}]  {name}");
    }
    Ok(())
}
