use reqwest::Client;
use url::Url;

use business::domain::errors::GatewayError;

/// Default origin of the exercise backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Shared HTTP client configuration for the exercise backend.
pub struct ApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the endpoint URL of a single exercise.
    ///
    /// The id becomes exactly one percent-encoded path segment. `.` and `..`
    /// are dot segments under URL normalization in any spelling, so they
    /// cannot name an exercise and are refused.
    pub fn exercise_url(&self, id: &str) -> Result<Url, GatewayError> {
        if matches!(id, "." | "..") {
            return Err(GatewayError::UnaddressableId(id.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::unreachable(format!("not a base url: {}", self.base_url)))?
            .pop_if_empty()
            .push("exercicios")
            .push(id);
        Ok(url)
    }
}
