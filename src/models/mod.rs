use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `todo` table. The JSON shape keeps the `isEditing`
/// field name clients already depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub task: String,
    pub completed: bool,
    #[serde(rename = "isEditing")]
    pub is_editing: bool,
}

/// Request body for create and update. Clients may send an `id` field;
/// it is ignored, the primary key is always assigned by storage.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPayload {
    pub task: String,
    pub completed: bool,
    #[serde(rename = "isEditing")]
    pub is_editing: bool,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

/// Confirmation body returned by the delete endpoints.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(text: &str) -> Self {
        Self {
            message: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_is_editing_key() {
        let todo = Todo {
            id: 1,
            task: "buy milk".to_string(),
            completed: false,
            is_editing: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["task"], "buy milk");
        assert_eq!(json["completed"], false);
        assert_eq!(json["isEditing"], true);
    }

    #[test]
    fn payload_ignores_client_supplied_id() {
        let payload: TodoPayload = serde_json::from_str(
            r#"{"id": 99, "task": "walk dog", "completed": true, "isEditing": false}"#,
        )
        .unwrap();
        assert_eq!(payload.task, "walk dog");
        assert!(payload.completed);
        assert!(!payload.is_editing);
    }

    #[test]
    fn payload_rejects_missing_task() {
        let result: Result<TodoPayload, _> =
            serde_json::from_str(r#"{"completed": false, "isEditing": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn list_params_default_to_first_hundred() {
        let params: ListParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
    }
}
