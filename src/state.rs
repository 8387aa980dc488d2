use crate::models::TrackerData;
use crate::storage::StoragePaths;
use crate::sync::SyncSink;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub paths: StoragePaths,
    pub data: Arc<Mutex<TrackerData>>,
    pub sync: SyncSink,
}

impl AppState {
    pub fn new(paths: StoragePaths, data: TrackerData, sync: SyncSink) -> Self {
        Self {
            paths,
            data: Arc::new(Mutex::new(data)),
            sync,
        }
    }
}
