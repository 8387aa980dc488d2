use crate::models::{ActivityLog, DayEntry};
use chrono::NaiveDate;

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()
}

impl ActivityLog {
    /// Counters add element-wise; a non-empty dead hang replaces the stored one.
    pub fn merge_add(&mut self, date: &str, incoming: &DayEntry) -> DayEntry {
        let entry = self.days.entry(date.to_string()).or_default();
        entry.pushups = entry.pushups.saturating_add(incoming.pushups);
        entry.pullups = entry.pullups.saturating_add(incoming.pullups);
        entry.squats = entry.squats.saturating_add(incoming.squats);
        if !incoming.dead_hang.is_empty() {
            entry.dead_hang = incoming.dead_hang.clone();
        }
        entry.clone()
    }

    pub fn replace(&mut self, date: &str, entry: DayEntry) {
        self.days.insert(date.to_string(), entry);
    }

    pub fn delete(&mut self, date: &str) -> bool {
        self.days.remove(date).is_some()
    }

    pub fn get(&self, date: &str) -> DayEntry {
        self.days.get(date).cloned().unwrap_or_default()
    }
}
