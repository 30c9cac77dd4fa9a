//! Persisted representation of a to-do item.
//!
//! # Design
//! `ToDoEntity` is always a stored row, so its `id` is never optional. Items
//! that have not reached the store yet are `NewToDo` values; the repository
//! turns one into the other and is the only place ids are assigned.

use chrono::{DateTime, Utc};

/// A to-do item as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ToDoEntity {
    pub id: i64,
    pub text: String,
    pub completed_at: Option<DateTime<Utc>>,
}

impl ToDoEntity {
    /// Replace the text, leaving `id` and `completed_at` alone.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Stamp the item as completed at `at`. An existing stamp is kept.
    pub fn completed(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at.get_or_insert(at);
        self
    }
}

/// An item that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewToDo {
    pub text: String,
}

impl NewToDo {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
