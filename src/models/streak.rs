use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates;

/// Derived streak counters for one user. Never mutated piecemeal: the streak
/// service recomputes the whole record from the act history and the caller
/// persists the result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserStreak {
    pub user_id: String,
    pub current_streak_days: u32,
    pub longest_streak_days: u32,
    pub last_activity_date: String,
    pub total_days_active: u32,
}

impl UserStreak {
    /// The expected state for a brand-new user with no history.
    pub fn zero(user_id: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            user_id: user_id.into(),
            current_streak_days: 0,
            longest_streak_days: 0,
            last_activity_date: dates::format_day(today),
            total_days_active: 0,
        }
    }
}
