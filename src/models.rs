use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const DEFAULT_PUSHUP_GOAL: u32 = 200;
pub const DEFAULT_PULLUP_GOAL: u32 = 20;
pub const DEFAULT_SQUAT_GOAL: u32 = 200;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Goals {
    pub pushups: u32,
    pub pullups: u32,
    pub squats: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            pushups: DEFAULT_PUSHUP_GOAL,
            pullups: DEFAULT_PULLUP_GOAL,
            squats: DEFAULT_SQUAT_GOAL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DayEntry {
    #[serde(default)]
    pub pushups: u32,
    #[serde(default)]
    pub pullups: u32,
    #[serde(default)]
    pub squats: u32,
    #[serde(default, rename = "deadHang")]
    pub dead_hang: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ActivityLog {
    pub days: BTreeMap<String, DayEntry>,
}

#[derive(Debug, Clone, Default)]
pub struct TrackerData {
    pub goals: Goals,
    pub log: ActivityLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalStatus {
    Met,
    Partial,
    None,
}

#[derive(Debug, Deserialize)]
pub struct EntryInput {
    #[serde(default)]
    pub pushups: Value,
    #[serde(default)]
    pub pullups: Value,
    #[serde(default)]
    pub squats: Value,
    #[serde(default, rename = "deadHang")]
    pub dead_hang: Value,
}

impl EntryInput {
    pub fn sanitize(&self) -> DayEntry {
        DayEntry {
            pushups: coerce_count(&self.pushups),
            pullups: coerce_count(&self.pullups),
            squats: coerce_count(&self.squats),
            dead_hang: coerce_dead_hang(&self.dead_hang),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GoalsInput {
    #[serde(default)]
    pub pushups: Value,
    #[serde(default)]
    pub pullups: Value,
    #[serde(default)]
    pub squats: Value,
}

impl GoalsInput {
    pub fn sanitize(&self) -> Goals {
        Goals {
            pushups: coerce_count(&self.pushups),
            pullups: coerce_count(&self.pullups),
            squats: coerce_count(&self.squats),
        }
    }
}

pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .map_or(0, |v| v.min(u64::from(u32::MAX)) as u32),
        Value::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// Kept only as `m:ss` with two-digit seconds under 60; everything else empties.
pub fn coerce_dead_hang(value: &Value) -> String {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if valid_dead_hang(trimmed) {
                trimmed.to_string()
            } else {
                String::new()
            }
        }
        _ => String::new(),
    }
}

pub(crate) fn valid_dead_hang(s: &str) -> bool {
    let Some((minutes, seconds)) = s.split_once(':') else {
        return false;
    };
    if minutes.is_empty() || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if seconds.len() != 2 || !seconds.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    seconds.parse::<u32>().is_ok_and(|v| v < 60)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExerciseProgress {
    pub value: u32,
    pub goal: u32,
    pub percent: f64,
    pub status: GoalStatus,
}

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub date: String,
    #[serde(rename = "deadHang")]
    pub dead_hang: String,
    pub pushups: ExerciseProgress,
    pub pullups: ExerciseProgress,
    pub squats: ExerciseProgress,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub date: String,
    pub entry: DayEntry,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Totals {
    pub pushups: u64,
    pub pullups: u64,
    pub squats: u64,
}

impl Totals {
    pub fn add_entry(&mut self, entry: &DayEntry) {
        self.pushups = self.pushups.saturating_add(u64::from(entry.pushups));
        self.pullups = self.pullups.saturating_add(u64::from(entry.pullups));
        self.squats = self.squats.saturating_add(u64::from(entry.squats));
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct Rollups {
    pub week: Totals,
    pub month: Totals,
    pub year: Totals,
    pub all_time: Totals,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub week: Totals,
    pub month: Totals,
    pub year: Totals,
    pub all_time: Totals,
    pub streak: u32,
}

#[derive(Debug, Serialize)]
pub struct CellEntry {
    pub pushups: GoalStatus,
    pub pullups: GoalStatus,
    pub squats: GoalStatus,
    #[serde(rename = "deadHang")]
    pub dead_hang: String,
}

#[derive(Debug, Serialize)]
pub struct GridCell {
    pub date: String,
    pub day: u32,
    pub in_month: bool,
    pub today: bool,
    pub entry: Option<CellEntry>,
}

#[derive(Debug, Serialize)]
pub struct CalendarResponse {
    pub year: i32,
    pub month: u32,
    pub label: String,
    pub cells: Vec<GridCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SyncPayload {
    pub date: String,
    pub pushups: u32,
    pub pullups: u32,
    pub squats: u32,
    #[serde(rename = "deadHang")]
    pub dead_hang: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerce_count_accepts_numbers_and_numeric_strings() {
        assert_eq!(coerce_count(&json!(25)), 25);
        assert_eq!(coerce_count(&json!("40")), 40);
        assert_eq!(coerce_count(&json!(" 7 ")), 7);
        assert_eq!(coerce_count(&json!(0)), 0);
    }

    #[test]
    fn coerce_count_zeroes_bad_input() {
        assert_eq!(coerce_count(&json!("abc")), 0);
        assert_eq!(coerce_count(&json!("")), 0);
        assert_eq!(coerce_count(&json!(-5)), 0);
        assert_eq!(coerce_count(&json!(2.5)), 0);
        assert_eq!(coerce_count(&json!(null)), 0);
        assert_eq!(coerce_count(&json!(true)), 0);
        assert_eq!(coerce_count(&json!({"n": 1})), 0);
    }

    #[test]
    fn dead_hang_keeps_valid_durations() {
        assert_eq!(coerce_dead_hang(&json!("1:30")), "1:30");
        assert_eq!(coerce_dead_hang(&json!("0:05")), "0:05");
        assert_eq!(coerce_dead_hang(&json!("12:59")), "12:59");
        assert_eq!(coerce_dead_hang(&json!(" 2:00 ")), "2:00");
    }

    #[test]
    fn dead_hang_drops_everything_else() {
        assert_eq!(coerce_dead_hang(&json!("")), "");
        assert_eq!(coerce_dead_hang(&json!("90")), "");
        assert_eq!(coerce_dead_hang(&json!("1:5")), "");
        assert_eq!(coerce_dead_hang(&json!("1:60")), "");
        assert_eq!(coerce_dead_hang(&json!(":30")), "");
        assert_eq!(coerce_dead_hang(&json!("a:bc")), "");
        assert_eq!(coerce_dead_hang(&json!("1:2:3")), "");
        assert_eq!(coerce_dead_hang(&json!(90)), "");
        assert_eq!(coerce_dead_hang(&json!(null)), "");
    }

    #[test]
    fn entry_input_sanitizes_every_field() {
        let input: EntryInput = serde_json::from_value(json!({
            "pushups": "30",
            "pullups": -2,
            "squats": "oops",
            "deadHang": "1:45"
        }))
        .unwrap();
        let entry = input.sanitize();
        assert_eq!(entry.pushups, 30);
        assert_eq!(entry.pullups, 0);
        assert_eq!(entry.squats, 0);
        assert_eq!(entry.dead_hang, "1:45");
    }

    #[test]
    fn entry_input_missing_fields_default_to_zero() {
        let input: EntryInput = serde_json::from_value(json!({})).unwrap();
        assert_eq!(input.sanitize(), DayEntry::default());
    }

    #[test]
    fn goals_default_to_two_hundred_twenty_two_hundred() {
        let goals = Goals::default();
        assert_eq!(goals.pushups, 200);
        assert_eq!(goals.pullups, 20);
        assert_eq!(goals.squats, 200);
    }

    #[test]
    fn activity_log_serializes_as_bare_map() {
        let mut log = ActivityLog::default();
        log.days.insert(
            "2024-06-10".to_string(),
            DayEntry {
                pushups: 50,
                pullups: 5,
                squats: 60,
                dead_hang: "1:00".to_string(),
            },
        );
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["2024-06-10"]["pushups"], 50);
        assert_eq!(value["2024-06-10"]["deadHang"], "1:00");
    }

    #[test]
    fn day_entry_tolerates_missing_stored_fields() {
        let entry: DayEntry = serde_json::from_value(json!({"pushups": 10})).unwrap();
        assert_eq!(entry.pushups, 10);
        assert_eq!(entry.pullups, 0);
        assert_eq!(entry.dead_hang, "");
    }
}
