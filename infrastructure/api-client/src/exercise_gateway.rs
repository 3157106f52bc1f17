use async_trait::async_trait;
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::exercise::gateway::ExerciseGateway;
use business::domain::exercise::value_objects::ExerciseId;
use business::domain::session::Credentials;

use crate::client::ApiClient;

/// Error payload of the backend: `{"detail": "..."}`, or a list for validation errors.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub struct ExerciseGatewayHttp {
    client: ApiClient,
}

impl ExerciseGatewayHttp {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    fn parse_detail(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        match parsed.detail? {
            serde_json::Value::String(detail) => Some(detail),
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
impl ExerciseGateway for ExerciseGatewayHttp {
    async fn delete(&self, id: &ExerciseId, credentials: &Credentials) -> Result<(), GatewayError> {
        let url = self.client.exercise_url(id.as_str())?;

        let response = self
            .client
            .client
            .delete(url)
            .header("Authorization", credentials.bearer())
            .send()
            .await
            .map_err(|e| GatewayError::unreachable(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(GatewayError::Status {
            status: status.as_u16(),
            detail: Self::parse_detail(&body),
        })
    }
}
