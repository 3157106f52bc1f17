use async_trait::async_trait;

use crate::domain::exercise::errors::ExerciseError;
use crate::domain::exercise::value_objects::ExerciseId;

#[derive(Debug, Clone)]
pub struct DeleteExerciseParams {
    pub id: ExerciseId,
}

#[async_trait]
pub trait DeleteExerciseUseCase: Send + Sync {
    async fn execute(&self, params: DeleteExerciseParams) -> Result<(), ExerciseError>;
}
