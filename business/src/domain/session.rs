/// Key under which the bearer token is kept in session storage.
pub const TOKEN_KEY: &str = "token";

/// Read-only view of the client session's key/value storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
}

/// Credentials captured from the session for a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    /// Reads the token as it is stored right now. Nothing is cached between calls.
    pub fn from_session(store: &dyn SessionStore) -> Self {
        Self::new(store.get(TOKEN_KEY))
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Authorization header value. A missing token renders as `Bearer null`,
    /// which is what the backend has always received from signed-out clients.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token().unwrap_or("null"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedSession(HashMap<String, String>);

    impl SessionStore for FixedSession {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }
    }

    #[test]
    fn should_read_token_from_session() {
        let session = FixedSession(HashMap::from([(
            TOKEN_KEY.to_string(),
            "abc.def".to_string(),
        )]));

        let credentials = Credentials::from_session(&session);

        assert_eq!(credentials.token(), Some("abc.def"));
        assert_eq!(credentials.bearer(), "Bearer abc.def");
    }

    #[test]
    fn should_render_missing_token_as_null() {
        let session = FixedSession(HashMap::new());

        let credentials = Credentials::from_session(&session);

        assert_eq!(credentials.token(), None);
        assert_eq!(credentials.bearer(), "Bearer null");
    }
}
