use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::exercise::errors::ExerciseError;
use crate::domain::exercise::gateway::ExerciseGateway;
use crate::domain::exercise::messages;
use crate::domain::exercise::use_cases::delete::{DeleteExerciseParams, DeleteExerciseUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::session::{Credentials, SessionStore};

pub struct DeleteExerciseUseCaseImpl {
    pub gateway: Arc<dyn ExerciseGateway>,
    pub session: Arc<dyn SessionStore>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl DeleteExerciseUseCaseImpl {
    fn report_failure(&self, params: &DeleteExerciseParams, error: GatewayError) -> ExerciseError {
        let mapped = ExerciseError::from(error.clone());
        match &mapped {
            ExerciseError::NotFound => {
                self.notifier.notify(messages::NOT_FOUND);
                self.logger
                    .info(&format!("Exercise not found: {}", params.id));
            }
            // Only the not-found case is surfaced as a toast; the caller still gets the error.
            _ => {
                self.logger.warn(&format!(
                    "Exercise {} not deleted: {:?}",
                    params.id, error
                ));
            }
        }
        mapped
    }
}

#[async_trait]
impl DeleteExerciseUseCase for DeleteExerciseUseCaseImpl {
    async fn execute(&self, params: DeleteExerciseParams) -> Result<(), ExerciseError> {
        self.logger
            .info(&format!("Deleting exercise: {}", params.id));

        let toast = self.notifier.notify(messages::REMOVING);
        let credentials = Credentials::from_session(self.session.as_ref());

        let result = self.gateway.delete(&params.id, &credentials).await;
        self.notifier.dismiss(toast);

        match result {
            Ok(()) => {
                self.notifier.notify(messages::REMOVED);
                self.logger
                    .info(&format!("Exercise deleted: {}", params.id));
                Ok(())
            }
            Err(error) => Err(self.report_failure(&params, error)),
        }
    }
}
