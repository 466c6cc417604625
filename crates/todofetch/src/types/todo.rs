//! The task record returned by the `/todos` endpoint

use serde::{Deserialize, Serialize};
use std::fmt;

/// One task record.
///
/// Fields other than `id`, `title` and `completed` (such as `userId`) are
/// ignored when decoding. A negative `id` fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier
    pub id: u64,
    /// Title text
    pub title: String,
    /// Completion flag
    pub completed: bool,
}

impl Todo {
    /// Create a new todo.
    pub fn new(id: u64, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id,
            title: title.into(),
            completed,
        }
    }
}

/// Renders the preview line `ID: <id>, Title: <title>`.
impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Title: {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let json = r#"{"userId": 1, "id": 1, "title": "delectus aut autem", "completed": false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();

        assert_eq!(todo, Todo::new(1, "delectus aut autem", false));
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        for json in [
            r#"{"id": -1, "title": "x", "completed": true}"#,
            r#"{"id": 1, "title": "x"}"#,
            r#"{"id": "1", "title": "x", "completed": true}"#,
        ] {
            assert!(serde_json::from_str::<Todo>(json).is_err(), "decoded {json}");
        }
    }

    #[test]
    fn test_display() {
        let todo = Todo::new(7, "write tests", true);
        assert_eq!(todo.to_string(), "ID: 7, Title: write tests");
    }
}
