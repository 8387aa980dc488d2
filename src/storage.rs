use crate::errors::AppError;
use crate::models::{ActivityLog, Goals};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

pub fn resolve_data_dir() -> PathBuf {
    env::var("APP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("data"))
}

#[derive(Debug, Clone)]
pub struct StoragePaths {
    pub goals: PathBuf,
    pub activity: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            goals: dir.join("goals.json"),
            activity: dir.join("activity.json"),
        }
    }
}

pub async fn load_goals(path: &Path) -> Goals {
    load_record(path, "goals").await
}

pub async fn load_log(path: &Path) -> ActivityLog {
    load_record(path, "activity").await
}

pub async fn save_goals(path: &Path, goals: &Goals) -> Result<(), AppError> {
    persist_record(path, goals).await
}

pub async fn save_log(path: &Path, log: &ActivityLog) -> Result<(), AppError> {
    persist_record(path, log).await
}

/// A missing or corrupt record reads as the type's default.
async fn load_record<T>(path: &Path, what: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse {what} record: {err}");
                T::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => T::default(),
        Err(err) => {
            error!("failed to read {what} record: {err}");
            T::default()
        }
    }
}

async fn persist_record<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(value).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}
