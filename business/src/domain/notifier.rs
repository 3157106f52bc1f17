use uuid::Uuid;

/// Handle of a toast currently shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Notification port for transient, non-blocking user messages.
///
/// `dismiss` only removes the toast it is given, so independent operations
/// can share one notifier without clearing each other's messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str) -> ToastId;
    fn dismiss(&self, id: ToastId);
}
