use crate::models::{DayEntry, SyncPayload};
use std::env;
use tracing::{error, info};

#[derive(Clone)]
pub struct SyncSink {
    endpoint: Option<String>,
    client: reqwest::Client,
}

impl SyncSink {
    pub fn from_env() -> Self {
        Self::new(env::var("SYNC_URL").ok().filter(|url| !url.is_empty()))
    }

    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Detached send; local state never waits on the response.
    pub fn push(&self, date: &str, entry: &DayEntry) {
        let Some(endpoint) = self.endpoint.clone() else {
            return;
        };
        let client = self.client.clone();
        let payload = SyncPayload {
            date: date.to_string(),
            pushups: entry.pushups,
            pullups: entry.pullups,
            squats: entry.squats,
            dead_hang: entry.dead_hang.clone(),
        };

        tokio::spawn(async move {
            match client.post(&endpoint).json(&payload).send().await {
                Ok(response) => {
                    info!("synced entry {}: {}", payload.date, response.status());
                }
                Err(err) => {
                    error!("sync push for {} failed: {err}", payload.date);
                }
            }
        });
    }
}
