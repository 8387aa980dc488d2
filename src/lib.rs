pub mod activity;
pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod stats;
pub mod storage;
pub mod sync;
pub mod ui;
pub mod state;

pub use app::router;
pub use models::TrackerData;
pub use state::AppState;
pub use storage::{load_goals, load_log, resolve_data_dir, StoragePaths};
pub use sync::SyncSink;
