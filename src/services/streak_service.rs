use std::collections::BTreeSet;

use chrono::{Duration, Local, NaiveDate};
use tracing::{debug, info};

use crate::db::repositories::act_repository::ActRepository;
use crate::db::repositories::streak_repository::StreakRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::act::KindnessAct;
use crate::models::streak::UserStreak;
use crate::utils::dates;

/// Derives current/longest streak counters from the full act history.
///
/// The recomputation is a pure function of the history and "today"; the
/// service wrapper only adds the read-compute-write sequence around it, so
/// the persisted record can always be rebuilt from the acts alone.
pub struct StreakService {
    db: DbPool,
}

impl StreakService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Recompute the whole streak record from scratch.
    ///
    /// Current streak walks backward from `today`; an unlogged today does not
    /// break the streak as long as yesterday is active (the day is not over
    /// yet). Longest streak is the longest consecutive run anywhere in the
    /// history, and is never reported below the fresh current streak.
    pub fn recompute(user_id: &str, acts: &[KindnessAct], today: NaiveDate) -> UserStreak {
        let active_dates = dates::active_dates(acts);

        if active_dates.is_empty() {
            // Valid state for a brand-new user, not an error.
            debug!(target: "app::streak", %user_id, "no dated activity, streak is the zero state");
            return UserStreak::zero(user_id, today);
        }

        let current_streak = Self::current_streak(&active_dates, today);
        let longest_streak = Self::longest_streak(&active_dates).max(current_streak);

        let last_activity_date = active_dates
            .iter()
            .next_back()
            .copied()
            .map(dates::format_day)
            .unwrap_or_else(|| dates::format_day(today));

        UserStreak {
            user_id: user_id.to_string(),
            current_streak_days: current_streak,
            longest_streak_days: longest_streak,
            last_activity_date,
            total_days_active: active_dates.len() as u32,
        }
    }

    fn current_streak(active_dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
        let anchor = if active_dates.contains(&today) {
            today
        } else if active_dates.contains(&dates::yesterday(today)) {
            dates::yesterday(today)
        } else {
            return 0;
        };

        let mut streak = 1u32;
        let mut check = anchor - Duration::days(1);
        while active_dates.contains(&check) {
            streak += 1;
            check -= Duration::days(1);
        }

        streak
    }

    fn longest_streak(active_dates: &BTreeSet<NaiveDate>) -> u32 {
        let mut longest = 0u32;
        let mut run = 0u32;
        let mut previous: Option<NaiveDate> = None;

        for date in active_dates {
            run = match previous {
                Some(prev) if *date - prev == Duration::days(1) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(*date);
        }

        longest
    }

    /// Load the full act history, recompute, persist. The previous record is
    /// only replaced after the computation succeeds.
    pub fn recalculate_for_user(&self, user_id: &str) -> AppResult<UserStreak> {
        let conn = self.db.get_connection()?;

        if UserRepository::find_by_id(&conn, user_id)?.is_none() {
            return Err(AppError::no_user());
        }

        let acts = ActRepository::list_for_user(&conn, user_id)?;
        let today = Local::now().date_naive();

        let streak = Self::recompute(user_id, &acts, today);
        StreakRepository::upsert(&conn, &streak)?;

        info!(
            target: "app::streak",
            %user_id,
            current = streak.current_streak_days,
            longest = streak.longest_streak_days,
            total_days = streak.total_days_active,
            "streak recalculated"
        );

        Ok(streak)
    }

    pub fn get_for_user(&self, user_id: &str) -> AppResult<Option<UserStreak>> {
        let conn = self.db.get_connection()?;
        StreakRepository::find_by_user(&conn, user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::act::{ActCategory, ImpactLevel, MoodAfter};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn act_on(date: &str) -> KindnessAct {
        KindnessAct {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: "u1".to_string(),
            date: date.to_string(),
            title: "act".to_string(),
            description: String::new(),
            category: ActCategory::Random,
            impact_level: ImpactLevel::Medium,
            mood_after: MoodAfter::Happy,
            created_at: format!("{date}T12:00:00Z"),
        }
    }

    #[test]
    fn empty_history_is_the_zero_state() {
        let streak = StreakService::recompute("u1", &[], day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 0);
        assert_eq!(streak.longest_streak_days, 0);
        assert_eq!(streak.total_days_active, 0);
        assert_eq!(streak.last_activity_date, "2024-01-10");
    }

    #[test]
    fn three_consecutive_days_ending_today() {
        let acts = vec![act_on("2024-01-08"), act_on("2024-01-09"), act_on("2024-01-10")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 3);
        assert_eq!(streak.longest_streak_days, 3);
        assert_eq!(streak.total_days_active, 3);
        assert_eq!(streak.last_activity_date, "2024-01-10");
    }

    #[test]
    fn gap_resets_current_streak() {
        // Acts on D and D+2 only; today is D+2.
        let acts = vec![act_on("2024-01-08"), act_on("2024-01-10")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 1);
        assert_eq!(streak.longest_streak_days, 1);
    }

    #[test]
    fn unlogged_today_keeps_yesterdays_streak() {
        let acts = vec![act_on("2024-01-08"), act_on("2024-01-09")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 2);
        assert_eq!(streak.last_activity_date, "2024-01-09");
    }

    #[test]
    fn two_idle_days_break_the_streak() {
        let acts = vec![act_on("2024-01-07"), act_on("2024-01-08")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 0);
        assert_eq!(streak.longest_streak_days, 2);
    }

    #[test]
    fn longest_streak_found_in_older_history() {
        let acts = vec![
            act_on("2024-01-01"),
            act_on("2024-01-02"),
            act_on("2024-01-03"),
            act_on("2024-01-04"),
            act_on("2024-01-09"),
            act_on("2024-01-10"),
        ];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 2);
        assert_eq!(streak.longest_streak_days, 4);
        assert_eq!(streak.total_days_active, 6);
    }

    #[test]
    fn longest_never_below_current() {
        let acts = vec![act_on("2024-01-09"), act_on("2024-01-10")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert!(streak.longest_streak_days >= streak.current_streak_days);
        assert_eq!(streak.longest_streak_days, 2);
    }

    #[test]
    fn multiple_acts_on_one_day_count_once() {
        let acts = vec![act_on("2024-01-10"), act_on("2024-01-10"), act_on("2024-01-10")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 1);
        assert_eq!(streak.total_days_active, 1);
    }

    #[test]
    fn malformed_dates_degrade_to_zero_not_error() {
        let acts = vec![act_on("garbage"), act_on("also/bad")];
        let streak = StreakService::recompute("u1", &acts, day(2024, 1, 10));

        assert_eq!(streak.current_streak_days, 0);
        assert_eq!(streak.total_days_active, 0);
    }
}
