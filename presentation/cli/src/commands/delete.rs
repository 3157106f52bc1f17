use std::sync::Arc;

use tokio::task::JoinSet;

use business::domain::exercise::use_cases::delete::{DeleteExerciseParams, DeleteExerciseUseCase};
use business::domain::exercise::value_objects::ExerciseId;

#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} exercises were not deleted")]
pub struct DeleteFailed {
    pub failed: usize,
    pub total: usize,
}

pub struct DeleteCommand {
    use_case: Arc<dyn DeleteExerciseUseCase>,
}

impl DeleteCommand {
    pub fn new(use_case: Arc<dyn DeleteExerciseUseCase>) -> Self {
        Self { use_case }
    }

    /// Deletes every id concurrently. Each deletion reports to the user on its own.
    pub async fn run(&self, ids: Vec<String>) -> anyhow::Result<()> {
        let total = ids.len();
        let mut tasks = JoinSet::new();

        for raw in ids {
            let use_case = self.use_case.clone();
            let id = ExerciseId::from(raw);
            tasks.spawn(async move { use_case.execute(DeleteExerciseParams { id }).await });
        }

        // Each failure was already reported by the use case; only count them here.
        let mut failed = 0;
        while let Some(joined) = tasks.join_next().await {
            if joined?.is_err() {
                failed += 1;
            }
        }

        if failed == 0 {
            Ok(())
        } else {
            Err(DeleteFailed { failed, total }.into())
        }
    }
}
