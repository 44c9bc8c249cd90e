use std::{env, net::SocketAddr};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use worklog::storage::FileStorage;
use worklog::store::{EntryStore, Partitioning};
use worklog::{resolve_data_path, router, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_path = resolve_data_path()?;
    if let Some(parent) = data_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let storage = FileStorage::open(&data_path);
    let store = EntryStore::new(
        Box::new(storage),
        Partitioning::ByMonth {
            prefix: "worklog".to_string(),
        },
    );
    let state = AppState::new(store);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
