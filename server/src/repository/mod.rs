//! Persistence boundary for to-do items.
//!
//! # Design
//! The service sees only the `ToDoRepository` trait. `SqliteToDoRepository`
//! is the production store; `InMemoryToDoRepository` stands in for it in tests
//! and when no database is wanted. Both assign ids on insert and never reuse
//! them, and both list items in insertion order.

mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::entity::{NewToDo, ToDoEntity};
use crate::error::RepositoryError;

pub use memory::InMemoryToDoRepository;
pub use sqlite::{connect, SqliteToDoRepository};

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[async_trait]
pub trait ToDoRepository: Send + Sync + 'static {
    /// Store a new item; the returned entity carries the assigned id.
    async fn insert(&self, item: NewToDo) -> RepositoryResult<ToDoEntity>;

    /// Overwrite the text and completion time of an existing item.
    ///
    /// Returns `None` when no row has `item.id`, e.g. it was deleted after
    /// being read.
    async fn save(&self, item: &ToDoEntity) -> RepositoryResult<Option<ToDoEntity>>;

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ToDoEntity>>;

    async fn find_all(&self) -> RepositoryResult<Vec<ToDoEntity>>;

    async fn delete_all(&self) -> RepositoryResult<()>;

    /// Remove one item. Unknown ids are ignored.
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
