//! Wire types for the `/todos` API and their mapping to and from the entity.
//!
//! # Design
//! The request body carries an optional `id`; it is turned into a tagged
//! `UpsertCommand` once, here, so the service never inspects the raw option.
//! An absent or `null` id means create. Any present id, `0` included, means
//! update.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::entity::ToDoEntity;

/// Body of `POST /todos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToDoSaveRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
}

/// Outward-facing view of a stored item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDoResponse {
    pub id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl From<ToDoEntity> for ToDoResponse {
    fn from(item: ToDoEntity) -> Self {
        Self {
            id: item.id,
            text: item.text,
            completed_at: item.completed_at.map(|at| at.fixed_offset()),
        }
    }
}

/// What an upsert should do, decided from the presence of an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertCommand {
    Create { text: String },
    Update { id: i64, text: String },
}

impl From<ToDoSaveRequest> for UpsertCommand {
    fn from(request: ToDoSaveRequest) -> Self {
        match request.id {
            Some(id) => Self::Update {
                id,
                text: request.text,
            },
            None => Self::Create { text: request.text },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_copies_every_field() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 15, 30).unwrap();
        let item = ToDoEntity {
            id: 1,
            text: "New item".to_string(),
            completed_at: Some(at),
        };
        let response = ToDoResponse::from(item.clone());
        assert_eq!(response.id, item.id);
        assert_eq!(response.text, item.text);
        assert_eq!(response.completed_at, Some(at.fixed_offset()));
    }

    #[test]
    fn completed_at_serializes_with_offset() {
        let at = Utc.with_ymd_and_hms(2024, 5, 17, 9, 15, 30).unwrap();
        let response = ToDoResponse {
            id: 3,
            text: "Done".to_string(),
            completed_at: Some(at.fixed_offset()),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["text"], "Done");
        assert_eq!(json["completedAt"], "2024-05-17T09:15:30+00:00");
    }

    #[test]
    fn missing_completed_at_is_omitted() {
        let response = ToDoResponse::from(ToDoEntity {
            id: 2,
            text: "Open".to_string(),
            completed_at: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("completedAt").is_none());
    }

    #[test]
    fn save_request_without_id_creates() {
        let request: ToDoSaveRequest = serde_json::from_str(r#"{"text":"Request text"}"#).unwrap();
        assert_eq!(
            UpsertCommand::from(request),
            UpsertCommand::Create {
                text: "Request text".to_string()
            }
        );
    }

    #[test]
    fn save_request_with_null_id_creates() {
        let request: ToDoSaveRequest =
            serde_json::from_str(r#"{"id":null,"text":"Request text"}"#).unwrap();
        assert!(matches!(UpsertCommand::from(request), UpsertCommand::Create { .. }));
    }

    #[test]
    fn save_request_with_zero_id_updates() {
        let request: ToDoSaveRequest = serde_json::from_str(r#"{"id":0,"text":"Some text"}"#).unwrap();
        assert_eq!(
            UpsertCommand::from(request),
            UpsertCommand::Update {
                id: 0,
                text: "Some text".to_string()
            }
        );
    }

    #[test]
    fn save_request_rejects_missing_text() {
        let result: Result<ToDoSaveRequest, _> = serde_json::from_str(r#"{"id":4}"#);
        assert!(result.is_err());
    }
}
