use rep_tracker::{
    load_goals, load_log, resolve_data_dir, router, AppState, StoragePaths, SyncSink, TrackerData,
};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = resolve_data_dir();
    fs::create_dir_all(&data_dir).await?;

    let paths = StoragePaths::in_dir(&data_dir);
    let goals = load_goals(&paths.goals).await;
    let log = load_log(&paths.activity).await;
    let sync = SyncSink::from_env();
    if sync.is_enabled() {
        info!("remote sync enabled");
    }
    let state = AppState::new(paths, TrackerData { goals, log }, sync);

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
