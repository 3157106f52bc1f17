use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by the global `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "exercises", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "exercises", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "exercises", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "exercises", "{}", message);
    }
}
