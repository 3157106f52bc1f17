use std::collections::HashMap;
use std::sync::RwLock;

use business::domain::session::SessionStore;

/// Session storage that lives as long as the process.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match self.entries.write() {
            Ok(mut entries) => {
                entries.insert(key, value.into());
            }
            Err(e) => tracing::error!("session.write_failed: {key}: {e}"),
        }
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        match self.entries.write() {
            Ok(mut entries) => entries.remove(key),
            Err(e) => {
                tracing::error!("session.write_failed: {key}: {e}");
                None
            }
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        match self.entries.read() {
            Ok(entries) => entries.get(key).cloned(),
            Err(e) => {
                tracing::error!("session.read_failed: {key}: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::session::{Credentials, TOKEN_KEY};
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Captured {
        type Writer = Captured;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn should_return_none_for_unknown_key() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get(TOKEN_KEY), None);
    }

    #[test]
    fn should_return_latest_value() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "first");
        store.set(TOKEN_KEY, "second");

        assert_eq!(store.get(TOKEN_KEY), Some("second".to_string()));
    }

    #[test]
    fn should_forget_removed_value() {
        let store = MemorySessionStore::new();
        store.set(TOKEN_KEY, "jwt");

        assert_eq!(store.remove(TOKEN_KEY), Some("jwt".to_string()));
        assert_eq!(Credentials::from_session(&store).bearer(), "Bearer null");
    }

    #[test]
    fn should_log_when_reading_a_poisoned_store() {
        let store = Arc::new(MemorySessionStore::new());
        store.set(TOKEN_KEY, "jwt");

        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _entries = poisoner.entries.write().unwrap();
            panic!("poison the session lock");
        })
        .join();

        let captured = Captured::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(captured.clone())
            .with_ansi(false)
            .finish();

        let token = tracing::subscriber::with_default(subscriber, || store.get(TOKEN_KEY));

        assert_eq!(token, None);
        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("session.read_failed: token"));
    }
}
