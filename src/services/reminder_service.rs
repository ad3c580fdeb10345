use chrono::{Duration, Local, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::settings::NotificationSettings;
use crate::services::settings_service::SettingsService;
use crate::utils::dates;

/// Plans the next reminder times from the user's preferences.
///
/// Planning is pure over `(settings, now)`. Each preferred wall-clock time
/// yields at most one upcoming occurrence; times already past today roll to
/// tomorrow, and anything inside the quiet window is dropped.
pub struct ReminderService {
    db: DbPool,
}

impl ReminderService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn plan(settings: &NotificationSettings, now: NaiveDateTime) -> AppResult<Vec<NaiveDateTime>> {
        if !settings.enabled {
            return Ok(Vec::new());
        }

        let quiet = if settings.quiet_hours_enabled {
            Some((
                dates::parse_clock(&settings.quiet_start)?,
                dates::parse_clock(&settings.quiet_end)?,
            ))
        } else {
            None
        };

        let mut planned = Vec::new();

        for preferred in [&settings.preferred_time_1, &settings.preferred_time_2] {
            let clock = dates::parse_clock(preferred)?;

            if let Some((start, end)) = quiet {
                if in_quiet_window(clock, start, end) {
                    debug!(
                        target: "app::reminders",
                        time = %preferred,
                        "preferred time falls inside quiet hours, skipping"
                    );
                    continue;
                }
            }

            let mut occurrence = now.date().and_time(clock);
            if occurrence <= now {
                occurrence += Duration::days(1);
            }

            planned.push(occurrence);
        }

        planned.sort();
        planned.dedup();

        Ok(planned)
    }

    pub fn plan_for_user(&self, user_id: &str) -> AppResult<Vec<NaiveDateTime>> {
        let settings = SettingsService::new(self.db.clone()).get_settings(user_id)?;
        Self::plan(&settings, Local::now().naive_local())
    }
}

/// Quiet windows may span midnight, so comparisons run on minutes of the day.
/// Both ends are inclusive: a reminder at exactly `quiet_end` is still quiet.
fn in_quiet_window(clock: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    use chrono::Timelike;

    let minutes = clock.hour() * 60 + clock.minute();
    let start_minutes = start.hour() * 60 + start.minute();
    let end_minutes = end.hour() * 60 + end.minute();

    if start_minutes <= end_minutes {
        minutes >= start_minutes && minutes <= end_minutes
    } else {
        minutes >= start_minutes || minutes <= end_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, 0)
            .unwrap()
    }

    fn clock(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn quiet_window_spanning_midnight() {
        let start = clock(22, 0);
        let end = clock(7, 0);

        assert!(in_quiet_window(clock(23, 30), start, end));
        assert!(in_quiet_window(clock(2, 0), start, end));
        assert!(in_quiet_window(clock(6, 59), start, end));
        assert!(!in_quiet_window(clock(7, 1), start, end));
        assert!(!in_quiet_window(clock(12, 0), start, end));
        assert!(!in_quiet_window(clock(21, 59), start, end));
    }

    #[test]
    fn quiet_window_ends_are_inclusive() {
        let start = clock(22, 0);
        let end = clock(7, 0);

        assert!(in_quiet_window(clock(22, 0), start, end));
        assert!(in_quiet_window(clock(7, 0), start, end));
    }

    #[test]
    fn quiet_window_within_one_day() {
        let start = clock(13, 0);
        let end = clock(15, 0);

        assert!(in_quiet_window(clock(14, 0), start, end));
        assert!(in_quiet_window(clock(15, 0), start, end));
        assert!(!in_quiet_window(clock(12, 59), start, end));
        assert!(!in_quiet_window(clock(15, 1), start, end));
    }

    #[test]
    fn both_preferred_times_planned_for_today() {
        let settings = NotificationSettings::defaults_for("u1");
        let now = at((2024, 3, 1), (8, 0));

        let planned = ReminderService::plan(&settings, now).unwrap();

        assert_eq!(
            planned,
            vec![at((2024, 3, 1), (9, 0)), at((2024, 3, 1), (21, 0))]
        );
    }

    #[test]
    fn past_time_rolls_to_tomorrow() {
        let settings = NotificationSettings::defaults_for("u1");
        let now = at((2024, 3, 1), (10, 0));

        let planned = ReminderService::plan(&settings, now).unwrap();

        assert_eq!(
            planned,
            vec![at((2024, 3, 1), (21, 0)), at((2024, 3, 2), (9, 0))]
        );
    }

    #[test]
    fn disabled_reminders_plan_nothing() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.enabled = false;

        let planned = ReminderService::plan(&settings, at((2024, 3, 1), (8, 0))).unwrap();

        assert!(planned.is_empty());
    }

    #[test]
    fn preferred_time_inside_quiet_hours_is_dropped() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.preferred_time_2 = "23:00".to_string();

        let planned = ReminderService::plan(&settings, at((2024, 3, 1), (8, 0))).unwrap();

        assert_eq!(planned, vec![at((2024, 3, 1), (9, 0))]);
    }

    #[test]
    fn preferred_time_at_the_quiet_boundary_is_dropped() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.preferred_time_1 = "07:00".to_string();

        let planned = ReminderService::plan(&settings, at((2024, 3, 1), (8, 0))).unwrap();

        assert_eq!(planned, vec![at((2024, 3, 1), (21, 0))]);
    }

    #[test]
    fn quiet_hours_disabled_keeps_late_times() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.preferred_time_2 = "23:00".to_string();
        settings.quiet_hours_enabled = false;

        let planned = ReminderService::plan(&settings, at((2024, 3, 1), (8, 0))).unwrap();

        assert_eq!(planned.len(), 2);
    }
}
