use std::sync::Arc;

use api_client::client::ApiClient;
use api_client::exercise_gateway::ExerciseGatewayHttp;
use console::ConsoleNotifier;
use logger::TracingLogger;
use session::MemorySessionStore;

use business::application::exercise::delete::DeleteExerciseUseCaseImpl;
use business::domain::session::TOKEN_KEY;

use crate::commands::delete::DeleteCommand;
use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub delete_command: DeleteCommand,
}

impl DependencyContainer {
    pub fn new(config: AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let session = Arc::new(MemorySessionStore::new());
        if let Some(token) = config.token {
            session.set(TOKEN_KEY, token);
        }
        let gateway = Arc::new(ExerciseGatewayHttp::new(ApiClient::new(config.api.base_url)));
        let notifier = Arc::new(ConsoleNotifier::stdout());

        // Exercise use cases
        let delete_use_case = Arc::new(DeleteExerciseUseCaseImpl {
            gateway,
            session,
            notifier,
            logger,
        });

        Self {
            delete_command: DeleteCommand::new(delete_use_case),
        }
    }
}
