//! HTTP service for to-do items.
//!
//! # Overview
//! Request → handler → `ToDoService` (via `ToDoRepository` and `Clock`) →
//! `ToDoResponse` → JSON. The service is the router state; handlers do no
//! work beyond extracting parameters.
//!
//! # Routes
//! | Route                  | Method | Success           | Not found |
//! |------------------------|--------|-------------------|-----------|
//! | `/todos`               | GET    | 200, JSON array   |           |
//! | `/todos`               | POST   | 200, JSON object  | 404       |
//! | `/todos/{id}`          | GET    | 200, JSON object  | 404       |
//! | `/todos/{id}/complete` | PUT    | 200, JSON object  | 404       |
//! | `/todos/{id}`          | DELETE | 200, empty        |           |

pub mod clock;
pub mod config;
pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod service;

use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{AppConfig, DatabaseConfig, ServerConfig};
pub use dto::{ToDoResponse, ToDoSaveRequest, UpsertCommand};
pub use entity::{NewToDo, ToDoEntity};
pub use error::{RepositoryError, ServiceError};
pub use repository::{InMemoryToDoRepository, SqliteToDoRepository, ToDoRepository};
pub use service::ToDoService;

pub fn app(service: ToDoService) -> Router {
    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos).post(handlers::save_todo),
        )
        .route(
            "/todos/{id}",
            get(handlers::get_todo).delete(handlers::delete_todo),
        )
        .route("/todos/{id}/complete", put(handlers::complete_todo))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Router over a fresh in-memory store with the system clock.
pub fn in_memory_app() -> Router {
    app(ToDoService::new(
        Arc::new(InMemoryToDoRepository::new()),
        Arc::new(SystemClock),
    ))
}

/// Serve `router` until Ctrl+C or SIGTERM.
pub async fn run(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "listening");
    }
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
