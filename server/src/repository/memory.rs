use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{RepositoryResult, ToDoRepository};
use crate::entity::{NewToDo, ToDoEntity};

#[derive(Debug, Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, ToDoEntity>,
}

/// Process-local store. Ids start at 1 and only grow, so ordering by key is
/// insertion order.
#[derive(Debug, Default)]
pub struct InMemoryToDoRepository {
    table: RwLock<Table>,
}

impl InMemoryToDoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ToDoRepository for InMemoryToDoRepository {
    async fn insert(&self, item: NewToDo) -> RepositoryResult<ToDoEntity> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let entity = ToDoEntity {
            id: table.last_id,
            text: item.text,
            completed_at: None,
        };
        table.rows.insert(entity.id, entity.clone());
        Ok(entity)
    }

    async fn save(&self, item: &ToDoEntity) -> RepositoryResult<Option<ToDoEntity>> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&item.id).map(|row| {
            *row = item.clone();
            item.clone()
        }))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ToDoEntity>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<ToDoEntity>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn delete_all(&self) -> RepositoryResult<()> {
        self.table.write().await.rows.clear();
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let repo = InMemoryToDoRepository::new();
        let first = repo.insert(NewToDo::new("First item")).await.unwrap();
        let second = repo.insert(NewToDo::new("Second item")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.completed_at.is_none());
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryToDoRepository::new();
        let first = repo.insert(NewToDo::new("a")).await.unwrap();
        repo.delete_all().await.unwrap();
        let next = repo.insert(NewToDo::new("b")).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryToDoRepository::new();
        for text in ["one", "two", "three"] {
            repo.insert(NewToDo::new(text)).await.unwrap();
        }
        let texts: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.text)
            .collect();
        assert_eq!(texts, ["one", "two", "three"]);
    }

    #[tokio::test]
    async fn save_overwrites_existing_row() {
        let repo = InMemoryToDoRepository::new();
        let item = repo.insert(NewToDo::new("before")).await.unwrap();
        let saved = repo.save(&item.clone().with_text("after")).await.unwrap();
        let stored = repo.find_by_id(item.id).await.unwrap().unwrap();
        assert_eq!(stored.text, "after");
        assert_eq!(saved, Some(stored));
    }

    #[tokio::test]
    async fn save_of_unknown_row_writes_nothing() {
        let repo = InMemoryToDoRepository::new();
        let item = repo.insert(NewToDo::new("gone")).await.unwrap();
        repo.delete_by_id(item.id).await.unwrap();

        let saved = repo.save(&item).await.unwrap();

        assert!(saved.is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_by_unknown_id_is_noop() {
        let repo = InMemoryToDoRepository::new();
        repo.insert(NewToDo::new("keep")).await.unwrap();
        repo.delete_by_id(99).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }
}
