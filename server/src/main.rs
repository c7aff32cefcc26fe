use taskboard_server::{AppState, Config, SqlTasks, TaskStore};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();

    let tasks = match config.database_url.as_deref() {
        Some(url) => {
            info!("task store: mysql");
            TaskStore::Sql(SqlTasks::connect(url).await?)
        }
        None => {
            info!("task store: in-memory");
            TaskStore::Memory(Default::default())
        }
    };

    let state = AppState::with_task_store(tasks);
    let router = taskboard_server::app_with_cors(state, &config.cors_origin)?;

    let listener = TcpListener::bind(config.socket_addr()).await?;
    info!(addr = %config.socket_addr(), "listening");
    taskboard_server::run(listener, router).await?;
    Ok(())
}
