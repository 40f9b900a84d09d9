use std::time::Duration;

use reviewer_client::ReviewerApi;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local backend; override via
/// environment variables (a `.env` file is honored).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, including the `/api` prefix.
    pub api_url: String,
    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                     |
    /// |-------------------------|-----------------------------|
    /// | `REVIEWER_API_URL`      | `http://localhost:8080/api` |
    /// | `REVIEWER_TIMEOUT_SECS` | `30`                        |
    pub fn from_env() -> Self {
        let api_url = std::env::var("REVIEWER_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080/api".into());

        let request_timeout_secs: u64 = std::env::var("REVIEWER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REVIEWER_TIMEOUT_SECS must be a valid u64");

        Self {
            api_url,
            request_timeout_secs,
        }
    }

    /// Build the API client, optionally overriding the base URL
    /// (the `--api-url` flag wins over the environment).
    pub fn build_api(&self, override_url: Option<String>) -> Result<ReviewerApi, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.request_timeout_secs))
            .build()?;
        let base_url = override_url.unwrap_or_else(|| self.api_url.clone());
        Ok(ReviewerApi::with_client(client, base_url))
    }
}
