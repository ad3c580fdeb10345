use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::error::{AppError, AppResult};
use crate::models::act::KindnessAct;

/// Calendar-day format shared by every dated record in the store.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

pub fn parse_day(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_FORMAT).map_err(|_| AppError::invalid_date(value))
}

pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

pub fn yesterday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(1)
}

/// Wall-clock format used by reminder preferences.
pub const CLOCK_FORMAT: &str = "%H:%M";

pub fn parse_clock(value: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(value, CLOCK_FORMAT).map_err(|_| AppError::invalid_date(value))
}

/// Distinct calendar days with at least one act, ascending. Acts whose date
/// column does not parse are skipped; streak math recovers locally instead of
/// aborting on a single bad record.
pub fn active_dates(acts: &[KindnessAct]) -> BTreeSet<NaiveDate> {
    let mut dates = BTreeSet::new();
    for act in acts {
        match NaiveDate::parse_from_str(&act.date, DAY_FORMAT) {
            Ok(date) => {
                dates.insert(date);
            }
            Err(_) => {
                tracing::warn!(
                    target: "app::dates",
                    act_id = %act.id,
                    date = %act.date,
                    "skipping act with unparseable date"
                );
            }
        }
    }
    dates
}
