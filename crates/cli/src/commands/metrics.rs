use reviewer_client::ReviewerApi;

use crate::cli::MetricsCommand;

pub async fn run(command: MetricsCommand, api: &ReviewerApi) -> anyhow::Result<()> {
    match command {
        MetricsCommand::Visits => {
            let counts = api.url_visit_counts().await?;
            let mut rows: Vec<_> = counts.into_iter().collect();
            rows.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            for (url, count) in rows {
                println!("{count:>8}  {url}");
            }
        }
        MetricsCommand::Counts => {
            let counts = api.entity_counts().await?;
            let mut rows: Vec<_> = counts.into_iter().collect();
            rows.sort_by(|a, b| a.0.cmp(&b.0));
            for (entity, count) in rows {
                println!("{count:>8}  {entity}");
            }
        }
    }
    Ok(())
}
