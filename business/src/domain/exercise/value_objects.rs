use serde::{Deserialize, Serialize};

/// Opaque identifier of an exercise on the backend.
///
/// No validation is done: the value goes into the request path as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(String);

impl ExerciseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ExerciseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExerciseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for ExerciseId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for ExerciseId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_create_exercise_id_from_str() {
        let id = ExerciseId::new("42");
        assert_eq!(id.as_str(), "42");
    }

    #[test]
    fn should_create_exercise_id_from_numbers() {
        assert_eq!(ExerciseId::from(7u64).as_str(), "7");
        assert_eq!(ExerciseId::from(-3i64).as_str(), "-3");
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id = ExerciseId::new("15");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"15\"");
    }

    proptest! {
        #[test]
        fn should_keep_any_identifier_verbatim(raw in ".*") {
            let id = ExerciseId::from(raw.clone());
            prop_assert_eq!(id.as_str(), raw.as_str());
            prop_assert_eq!(id.to_string(), raw);
        }
    }
}
