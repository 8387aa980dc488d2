use crate::activity::{date_key, parse_date_key};
use crate::models::{
    ActivityLog, CalendarResponse, CellEntry, DayEntry, ExerciseProgress, Goals, GoalStatus,
    GridCell, Rollups, SummaryResponse, TodayResponse, TrackerData,
};
use chrono::{Datelike, Duration, Local, Months, NaiveDate, Weekday};

pub fn day_status(value: u32, goal: u32) -> GoalStatus {
    if value >= goal {
        GoalStatus::Met
    } else if value > 0 {
        GoalStatus::Partial
    } else {
        GoalStatus::None
    }
}

pub fn progress_percent(value: u32, goal: u32) -> f64 {
    if goal == 0 {
        return 100.0;
    }
    (f64::from(value) * 100.0 / f64::from(goal)).min(100.0)
}

pub fn streak_at(as_of: NaiveDate, log: &ActivityLog, goals: &Goals) -> u32 {
    let mut streak = 0;
    let mut date = as_of;
    loop {
        match log.days.get(&date_key(date)) {
            Some(entry) if meets_goals(entry, goals) => streak += 1,
            _ => break,
        }
        match date.pred_opt() {
            Some(prev) => date = prev,
            None => break,
        }
    }
    streak
}

fn meets_goals(entry: &DayEntry, goals: &Goals) -> bool {
    entry.pushups >= goals.pushups
        && entry.pullups >= goals.pullups
        && entry.squats >= goals.squats
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Week/month/year windows are `[start, as_of]` by date comparison; all-time
/// sums every entry, even ones whose key does not parse as a date.
pub fn rollup_at(as_of: NaiveDate, log: &ActivityLog) -> Rollups {
    let start_of_week = week_start(as_of);
    let start_of_month = as_of.with_day(1).unwrap_or(as_of);
    let start_of_year = NaiveDate::from_ymd_opt(as_of.year(), 1, 1).unwrap_or(as_of);

    let mut rollups = Rollups::default();
    for (key, entry) in &log.days {
        rollups.all_time.add_entry(entry);
        let Some(date) = parse_date_key(key) else {
            continue;
        };
        if date > as_of {
            continue;
        }
        if date >= start_of_week {
            rollups.week.add_entry(entry);
        }
        if date >= start_of_month {
            rollups.month.add_entry(entry);
        }
        if date >= start_of_year {
            rollups.year.add_entry(entry);
        }
    }
    rollups
}

pub fn build_today(data: &TrackerData) -> TodayResponse {
    build_today_at(Local::now().date_naive(), data)
}

pub fn build_today_at(today: NaiveDate, data: &TrackerData) -> TodayResponse {
    let key = date_key(today);
    let entry = data.log.get(&key);
    TodayResponse {
        date: key,
        dead_hang: entry.dead_hang,
        pushups: exercise_progress(entry.pushups, data.goals.pushups),
        pullups: exercise_progress(entry.pullups, data.goals.pullups),
        squats: exercise_progress(entry.squats, data.goals.squats),
        streak: streak_at(today, &data.log, &data.goals),
    }
}

pub fn build_summary(data: &TrackerData) -> SummaryResponse {
    build_summary_at(Local::now().date_naive(), data)
}

pub fn build_summary_at(today: NaiveDate, data: &TrackerData) -> SummaryResponse {
    let rollups = rollup_at(today, &data.log);
    SummaryResponse {
        week: rollups.week,
        month: rollups.month,
        year: rollups.year,
        all_time: rollups.all_time,
        streak: streak_at(today, &data.log, &data.goals),
    }
}

fn exercise_progress(value: u32, goal: u32) -> ExerciseProgress {
    ExerciseProgress {
        value,
        goal,
        percent: progress_percent(value, goal),
        status: day_status(value, goal),
    }
}

pub fn month_grid(year: i32, month: u32, data: &TrackerData) -> Option<CalendarResponse> {
    month_grid_at(Local::now().date_naive(), year, month, data)
}

pub fn month_grid_at(
    today: NaiveDate,
    year: i32,
    month: u32,
    data: &TrackerData,
) -> Option<CalendarResponse> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())?;
    let pad = i64::from(first.weekday().num_days_from_sunday());
    let start = first.checked_sub_signed(Duration::days(pad))?;
    let label = first.format("%B %Y").to_string();

    let mut cells = Vec::new();
    let mut date = start;
    while date <= last || date.weekday() != Weekday::Sun {
        let key = date_key(date);
        let entry = data.log.days.get(&key).map(|entry| CellEntry {
            pushups: day_status(entry.pushups, data.goals.pushups),
            pullups: day_status(entry.pullups, data.goals.pullups),
            squats: day_status(entry.squats, data.goals.squats),
            dead_hang: entry.dead_hang.clone(),
        });
        cells.push(GridCell {
            date: key,
            day: date.day(),
            in_month: date.month() == month && date.year() == year,
            today: date == today,
            entry,
        });
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    Some(CalendarResponse {
        year,
        month,
        label,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Totals;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn entry(pushups: u32, pullups: u32, squats: u32) -> DayEntry {
        DayEntry {
            pushups,
            pullups,
            squats,
            dead_hang: String::new(),
        }
    }

    fn data_with(goals: Goals, entries: &[(&str, DayEntry)]) -> TrackerData {
        let mut data = TrackerData {
            goals,
            log: ActivityLog::default(),
        };
        for (key, entry) in entries {
            data.log.days.insert((*key).to_string(), entry.clone());
        }
        data
    }

    fn small_goals() -> Goals {
        Goals {
            pushups: 10,
            pullups: 2,
            squats: 10,
        }
    }

    #[test]
    fn day_status_covers_the_five_cases() {
        assert_eq!(day_status(0, 0), GoalStatus::Met);
        assert_eq!(day_status(0, 5), GoalStatus::None);
        assert_eq!(day_status(3, 5), GoalStatus::Partial);
        assert_eq!(day_status(5, 5), GoalStatus::Met);
        assert_eq!(day_status(7, 5), GoalStatus::Met);
    }

    #[test]
    fn progress_percent_stays_in_bounds() {
        assert_eq!(progress_percent(0, 200), 0.0);
        assert_eq!(progress_percent(100, 200), 50.0);
        assert_eq!(progress_percent(200, 200), 100.0);
        assert_eq!(progress_percent(500, 200), 100.0);
        assert_eq!(progress_percent(0, 0), 100.0);
        assert_eq!(progress_percent(37, 0), 100.0);
    }

    #[test]
    fn streak_counts_consecutive_qualifying_days() {
        let goals = small_goals();
        let data = data_with(
            goals,
            &[
                ("2024-06-10", entry(10, 2, 10)),
                ("2024-06-11", entry(15, 3, 12)),
                ("2024-06-12", entry(10, 2, 10)),
            ],
        );
        assert_eq!(streak_at(day(2024, 6, 12), &data.log, &data.goals), 3);
    }

    #[test]
    fn streak_breaks_on_an_under_goal_day() {
        let goals = small_goals();
        let data = data_with(
            goals,
            &[
                ("2024-06-10", entry(10, 2, 10)),
                ("2024-06-11", entry(9, 2, 10)),
                ("2024-06-12", entry(10, 2, 10)),
            ],
        );
        assert_eq!(streak_at(day(2024, 6, 12), &data.log, &data.goals), 1);
    }

    #[test]
    fn streak_breaks_on_a_missing_day() {
        let goals = small_goals();
        let data = data_with(
            goals,
            &[
                ("2024-06-10", entry(10, 2, 10)),
                ("2024-06-12", entry(10, 2, 10)),
            ],
        );
        assert_eq!(streak_at(day(2024, 6, 12), &data.log, &data.goals), 1);
    }

    #[test]
    fn streak_is_zero_without_a_qualifying_as_of_day() {
        let goals = small_goals();
        let data = data_with(goals, &[("2024-06-11", entry(10, 2, 10))]);
        assert_eq!(streak_at(day(2024, 6, 12), &data.log, &data.goals), 0);
    }

    #[test]
    fn rollup_of_empty_log_is_all_zero() {
        let rollups = rollup_at(day(2024, 6, 12), &ActivityLog::default());
        assert_eq!(rollups, Rollups::default());
    }

    #[test]
    fn rollup_windows_share_one_reference_day() {
        // 2024-06-12 is a Wednesday; its week starts Sunday 2024-06-09.
        let as_of = day(2024, 6, 12);
        let data = data_with(
            small_goals(),
            &[
                ("2024-06-10", entry(10, 1, 10)),
                ("2024-06-03", entry(20, 2, 20)),
                ("2024-01-15", entry(40, 4, 40)),
                ("2023-12-31", entry(80, 8, 80)),
            ],
        );
        let rollups = rollup_at(as_of, &data.log);
        assert_eq!(rollups.week.pushups, 10);
        assert_eq!(rollups.month.pushups, 30);
        assert_eq!(rollups.year.pushups, 70);
        assert_eq!(rollups.all_time.pushups, 150);
        assert_eq!(rollups.all_time.pullups, 15);
        assert_eq!(rollups.all_time.squats, 150);
    }

    #[test]
    fn rollup_excludes_entries_after_the_reference_day() {
        let as_of = day(2024, 6, 12);
        let data = data_with(small_goals(), &[("2024-06-20", entry(10, 1, 10))]);
        let rollups = rollup_at(as_of, &data.log);
        assert_eq!(rollups.week, Totals::default());
        assert_eq!(rollups.month, Totals::default());
        assert_eq!(rollups.year, Totals::default());
        assert_eq!(rollups.all_time.pushups, 10);
    }

    #[test]
    fn rollup_week_can_reach_into_the_previous_year() {
        // 2024-01-01 is a Monday, so its week starts Sunday 2023-12-31.
        let as_of = day(2024, 1, 1);
        let data = data_with(small_goals(), &[("2023-12-31", entry(10, 1, 10))]);
        let rollups = rollup_at(as_of, &data.log);
        assert_eq!(rollups.week.pushups, 10);
        assert_eq!(rollups.month.pushups, 0);
        assert_eq!(rollups.year.pushups, 0);
        assert_eq!(rollups.all_time.pushups, 10);
    }

    #[test]
    fn rollup_counts_unparseable_keys_in_all_time_only() {
        let as_of = day(2024, 6, 12);
        let data = data_with(small_goals(), &[("not-a-date", entry(10, 1, 10))]);
        let rollups = rollup_at(as_of, &data.log);
        assert_eq!(rollups.week, Totals::default());
        assert_eq!(rollups.year, Totals::default());
        assert_eq!(rollups.all_time.pushups, 10);
    }

    #[test]
    fn month_grid_starts_on_the_sunday_before_the_first() {
        let data = data_with(small_goals(), &[]);
        let grid = month_grid_at(day(2024, 6, 12), 2024, 1, &data).unwrap();
        assert_eq!(grid.label, "January 2024");
        assert_eq!(grid.cells[0].date, "2023-12-31");
        assert!(!grid.cells[0].in_month);
        assert_eq!(grid.cells.len() % 7, 0);
        assert!(grid.cells.len() >= 31);
        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.cells.last().unwrap().date, "2024-02-03");
    }

    #[test]
    fn month_grid_is_exactly_four_weeks_when_the_month_fits() {
        // February 2026 runs Sunday the 1st through Saturday the 28th.
        let data = data_with(small_goals(), &[]);
        let grid = month_grid_at(day(2026, 2, 10), 2026, 2, &data).unwrap();
        assert_eq!(grid.cells.len(), 28);
        assert!(grid.cells.iter().all(|cell| cell.in_month));
    }

    #[test]
    fn month_grid_marks_today_and_entry_statuses() {
        let data = data_with(
            small_goals(),
            &[(
                "2024-06-10",
                DayEntry {
                    pushups: 10,
                    pullups: 1,
                    squats: 0,
                    dead_hang: "1:30".to_string(),
                },
            )],
        );
        let grid = month_grid_at(day(2024, 6, 10), 2024, 6, &data).unwrap();
        let cell = grid
            .cells
            .iter()
            .find(|cell| cell.date == "2024-06-10")
            .unwrap();
        assert!(cell.today);
        assert!(cell.in_month);
        let entry = cell.entry.as_ref().unwrap();
        assert_eq!(entry.pushups, GoalStatus::Met);
        assert_eq!(entry.pullups, GoalStatus::Partial);
        assert_eq!(entry.squats, GoalStatus::None);
        assert_eq!(entry.dead_hang, "1:30");
        let blank = grid
            .cells
            .iter()
            .find(|cell| cell.date == "2024-06-11")
            .unwrap();
        assert!(blank.entry.is_none());
        assert!(!blank.today);
    }

    #[test]
    fn month_grid_rejects_an_invalid_month() {
        let data = data_with(small_goals(), &[]);
        assert!(month_grid_at(day(2024, 6, 12), 2024, 13, &data).is_none());
        assert!(month_grid_at(day(2024, 6, 12), 2024, 0, &data).is_none());
    }

    #[test]
    fn month_grid_handles_the_calendar_edge_years() {
        // The floor month's Sunday pad falls before the earliest representable date.
        let data = data_with(small_goals(), &[]);
        let today = day(2024, 6, 12);
        assert!(month_grid_at(today, NaiveDate::MIN.year(), 1, &data).is_none());
        assert!(month_grid_at(today, NaiveDate::MAX.year(), 1, &data).is_some());
    }

    #[test]
    fn today_view_reports_progress_and_streak() {
        let goals = small_goals();
        let data = data_with(
            goals,
            &[(
                "2024-06-12",
                DayEntry {
                    pushups: 5,
                    pullups: 2,
                    squats: 0,
                    dead_hang: "0:45".to_string(),
                },
            )],
        );
        let today = build_today_at(day(2024, 6, 12), &data);
        assert_eq!(today.date, "2024-06-12");
        assert_eq!(today.dead_hang, "0:45");
        assert_eq!(today.pushups.value, 5);
        assert_eq!(today.pushups.goal, 10);
        assert_eq!(today.pushups.percent, 50.0);
        assert_eq!(today.pushups.status, GoalStatus::Partial);
        assert_eq!(today.pullups.status, GoalStatus::Met);
        assert_eq!(today.squats.status, GoalStatus::None);
        assert_eq!(today.streak, 0);
    }

    #[test]
    fn summary_view_carries_totals_and_streak() {
        let goals = small_goals();
        let data = data_with(
            goals,
            &[
                ("2024-06-11", entry(10, 2, 10)),
                ("2024-06-12", entry(12, 2, 10)),
            ],
        );
        let summary = build_summary_at(day(2024, 6, 12), &data);
        assert_eq!(summary.week.pushups, 22);
        assert_eq!(summary.all_time.pushups, 22);
        assert_eq!(summary.streak, 2);
    }
}
