mod notifier;

pub use notifier::{ConsoleNotifier, Toast};
