//! Business rules for to-do items.
//!
//! # Design
//! `ToDoService` holds no item state of its own. Each operation is one
//! read-then-write against the repository, and all timestamps come from the
//! injected `Clock`. Cloning the service clones two `Arc`s, so it doubles as
//! the axum router state.

use std::sync::Arc;

use crate::clock::Clock;
use crate::dto::{ToDoResponse, UpsertCommand};
use crate::entity::{NewToDo, ToDoEntity};
use crate::error::ServiceError;
use crate::repository::ToDoRepository;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Clone)]
pub struct ToDoService {
    repository: Arc<dyn ToDoRepository>,
    clock: Arc<dyn Clock>,
}

impl ToDoService {
    pub fn new(repository: Arc<dyn ToDoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Create a new item or replace the text of an existing one.
    ///
    /// Updating an unknown id fails with `NotFound` and writes nothing.
    #[tracing::instrument(skip(self))]
    pub async fn upsert(&self, command: UpsertCommand) -> ServiceResult<ToDoResponse> {
        let item = match command {
            UpsertCommand::Create { text } => {
                let item = self.repository.insert(NewToDo::new(text)).await?;
                tracing::info!(id = item.id, "created to-do item");
                item
            }
            UpsertCommand::Update { id, text } => {
                let item = self.find(id).await?.with_text(text);
                let item = self.store(&item).await?;
                tracing::info!(id, "updated to-do item");
                item
            }
        };
        Ok(item.into())
    }

    /// Mark an item completed at the clock's current time.
    ///
    /// `completed_at` is written once; completing an already completed item
    /// returns it unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn complete_todo(&self, id: i64) -> ServiceResult<ToDoResponse> {
        let item = self.find(id).await?.completed(self.clock.now());
        let item = self.store(&item).await?;
        tracing::info!(id, completed_at = ?item.completed_at, "completed to-do item");
        Ok(item.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_one(&self, id: i64) -> ServiceResult<ToDoResponse> {
        Ok(self.find(id).await?.into())
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_all(&self) -> ServiceResult<Vec<ToDoResponse>> {
        let items = self.repository.find_all().await?;
        tracing::debug!(count = items.len(), "listed to-do items");
        Ok(items.into_iter().map(ToDoResponse::from).collect())
    }

    /// Delete one item; unknown ids succeed without effect.
    #[tracing::instrument(skip(self))]
    pub async fn delete_one(&self, id: i64) -> ServiceResult<()> {
        self.repository.delete_by_id(id).await?;
        tracing::info!(id, "deleted to-do item");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete_all(&self) -> ServiceResult<()> {
        self.repository.delete_all().await?;
        tracing::info!("deleted all to-do items");
        Ok(())
    }

    async fn find(&self, id: i64) -> ServiceResult<ToDoEntity> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Write back an item read by `find`; it may have been deleted since.
    async fn store(&self, item: &ToDoEntity) -> ServiceResult<ToDoEntity> {
        self.repository
            .save(item)
            .await?
            .ok_or_else(|| ServiceError::not_found(item.id))
    }
}
