use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{RepositoryResult, ToDoRepository};
use crate::config::DatabaseConfig;
use crate::entity::{NewToDo, ToDoEntity};

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS todos (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    text         TEXT NOT NULL,
    completed_at TEXT
)
"#;

/// Open a pool for `config` and make sure the `todos` table exists.
///
/// An in-memory database lives only as long as its connection, so such URLs
/// get a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

    let pool_options = if config.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    } else {
        SqlitePoolOptions::new().max_connections(config.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    sqlx::query(CREATE_TABLE).execute(&pool).await?;
    tracing::info!(url = %config.url, "database ready");
    Ok(pool)
}

/// `ToDoRepository` backed by a SQLite table.
#[derive(Debug, Clone)]
pub struct SqliteToDoRepository {
    pool: SqlitePool,
}

impl SqliteToDoRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ToDoRepository for SqliteToDoRepository {
    async fn insert(&self, item: NewToDo) -> RepositoryResult<ToDoEntity> {
        let result = sqlx::query("INSERT INTO todos (text) VALUES (?)")
            .bind(&item.text)
            .execute(&self.pool)
            .await?;
        Ok(ToDoEntity {
            id: result.last_insert_rowid(),
            text: item.text,
            completed_at: None,
        })
    }

    async fn save(&self, item: &ToDoEntity) -> RepositoryResult<Option<ToDoEntity>> {
        let result = sqlx::query("UPDATE todos SET text = ?, completed_at = ? WHERE id = ?")
            .bind(&item.text)
            .bind(item.completed_at)
            .bind(item.id)
            .execute(&self.pool)
            .await?;
        Ok((result.rows_affected() > 0).then(|| item.clone()))
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<ToDoEntity>> {
        let item = sqlx::query_as::<_, ToDoEntity>(
            "SELECT id, text, completed_at FROM todos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(item)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<ToDoEntity>> {
        let items = sqlx::query_as::<_, ToDoEntity>(
            "SELECT id, text, completed_at FROM todos ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    async fn delete_all(&self) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM todos").execute(&self.pool).await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
