use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::session::Credentials;

use super::value_objects::ExerciseId;

/// Remote exercise backend.
#[async_trait]
pub trait ExerciseGateway: Send + Sync {
    async fn delete(&self, id: &ExerciseId, credentials: &Credentials) -> Result<(), GatewayError>;
}
