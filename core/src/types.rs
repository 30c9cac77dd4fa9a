//! Client-side DTOs for the to-do API.
//!
//! # Design
//! These mirror the server's wire schema but are defined independently so the
//! client does not link axum or sqlx. The live-server integration test catches
//! drift between the two.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A to-do item as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub id: i64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl ToDo {
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }
}

/// Body of `POST /todos`. Without an `id` the server creates an item; with
/// one it replaces that item's text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SaveToDo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub text: String,
}

impl SaveToDo {
    pub fn create(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
        }
    }

    pub fn update(id: i64, text: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            text: text.into(),
        }
    }
}
