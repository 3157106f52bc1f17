use std::io::Write;
use std::sync::Mutex;

use business::domain::notifier::{Notifier, ToastId};
use chrono::{DateTime, Duration, Utc};

/// How long a toast stays visible when nobody dismisses it.
pub const DEFAULT_TTL_SECS: i64 = 5;

/// A toast currently visible on the terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub shown_at: DateTime<Utc>,
}

/// Prints toasts as single lines and keeps track of the ones still visible.
///
/// A toast disappears when dismissed or once it is older than the TTL.
pub struct ConsoleNotifier {
    out: Mutex<Box<dyn Write + Send>>,
    active: Mutex<Vec<Toast>>,
    ttl: Duration,
}

impl ConsoleNotifier {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self::with_ttl(out, Duration::seconds(DEFAULT_TTL_SECS))
    }

    pub fn with_ttl(out: Box<dyn Write + Send>, ttl: Duration) -> Self {
        Self {
            out: Mutex::new(out),
            active: Mutex::new(Vec::new()),
            ttl,
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    /// Toasts shown, not dismissed and not expired, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.active
            .lock()
            .map(|mut active| {
                self.expire(&mut active);
                active.clone()
            })
            .unwrap_or_default()
    }

    fn expire(&self, active: &mut Vec<Toast>) {
        let now = Utc::now();
        active.retain(|toast| now - toast.shown_at < self.ttl);
    }

    fn print(&self, toast: &Toast) {
        let line = format!("[{}] {}", toast.shown_at.format("%H:%M:%S"), toast.message);
        let written = self
            .out
            .lock()
            .map_err(|e| e.to_string())
            .and_then(|mut out| {
                writeln!(out, "{}", line)
                    .and_then(|_| out.flush())
                    .map_err(|e| e.to_string())
            });
        if let Err(e) = written {
            tracing::warn!("toast.print_failed: {e}");
        }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) -> ToastId {
        let toast = Toast {
            id: ToastId::new(),
            message: message.to_string(),
            shown_at: Utc::now(),
        };
        self.print(&toast);

        let id = toast.id;
        if let Ok(mut active) = self.active.lock() {
            self.expire(&mut active);
            active.push(toast);
        }
        id
    }

    fn dismiss(&self, id: ToastId) {
        let Ok(mut active) = self.active.lock() else {
            return;
        };
        if let Some(index) = active.iter().position(|toast| toast.id == id) {
            let toast = active.remove(index);
            tracing::debug!(
                "toast {} dismissed after {} ms",
                toast.id,
                (Utc::now() - toast.shown_at).num_milliseconds()
            );
        }
    }
}
