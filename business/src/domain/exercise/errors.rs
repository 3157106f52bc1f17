#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseError {
    #[error("exercise.not_found")]
    NotFound,
    #[error("exercise.rejected")]
    Rejected { status: u16 },
    #[error("exercise.unreachable")]
    Unreachable,
    #[error("exercise.invalid_id")]
    InvalidId,
}

impl From<crate::domain::errors::GatewayError> for ExerciseError {
    fn from(error: crate::domain::errors::GatewayError) -> Self {
        use crate::domain::errors::GatewayError;

        match error {
            // The exercise backend answers 400 for identifiers it does not know.
            GatewayError::Status { status: 400, .. } => ExerciseError::NotFound,
            GatewayError::Status { status, .. } => ExerciseError::Rejected { status },
            GatewayError::Unreachable(_) => ExerciseError::Unreachable,
            GatewayError::UnaddressableId(_) => ExerciseError::InvalidId,
        }
    }
}
