use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_server::{repository, AppConfig, SqliteToDoRepository, SystemClock, ToDoService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::from_env();
    let pool = repository::connect(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;

    let service = ToDoService::new(
        Arc::new(SqliteToDoRepository::new(pool)),
        Arc::new(SystemClock),
    );

    let addr = config.server.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    todo_server::run(listener, todo_server::app(service)).await?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("todo_server=debug,tower_http=debug,info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}
