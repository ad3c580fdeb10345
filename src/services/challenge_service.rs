use std::collections::BTreeSet;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::db::repositories::act_repository::ActRepository;
use crate::db::repositories::challenge_repository::ChallengeRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::challenge::{ChallengeProgress, CHALLENGE_LENGTH_DAYS};
use crate::utils::dates;

/// Advances the 30-day challenge in response to daily activity.
///
/// Day advancement is a pure function over the prior state, the set of days
/// with activity, and "today". The caller is responsible for invoking it only
/// on the first qualifying act of a calendar day.
pub struct ChallengeService {
    db: DbPool,
}

impl ChallengeService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Apply one day of progress.
    ///
    /// Day 1 never needs a predecessor. Every later day requires activity on
    /// the calendar day immediately before `today`; a missed day hard-resets
    /// progress to a single completed day 1. Completing all 30 days
    /// deactivates the challenge and stamps `completed_at` exactly once.
    pub fn record_daily_progress(
        mut state: ChallengeProgress,
        activity_dates: &BTreeSet<NaiveDate>,
        today: NaiveDate,
        now: &str,
    ) -> ChallengeProgress {
        if !state.is_active {
            // The caller may race a just-completed state; silently keep it.
            debug!(
                target: "app::challenge",
                user_id = %state.user_id,
                "progress recorded against an inactive challenge, ignoring"
            );
            return state;
        }

        let last_completed = state.last_completed_day();
        let is_consecutive =
            last_completed == 0 || activity_dates.contains(&dates::yesterday(today));

        if is_consecutive {
            let next_day = last_completed + 1;
            if next_day <= CHALLENGE_LENGTH_DAYS {
                state.completed_days.insert(next_day);
            }
        } else {
            info!(
                target: "app::challenge",
                user_id = %state.user_id,
                last_completed,
                "missed a day, challenge progress reset"
            );
            state.completed_days = BTreeSet::from([1]);
        }

        state.current_day = state.first_incomplete_day();

        if state.is_complete() {
            state.is_active = false;
            if state.completed_at.is_none() {
                state.completed_at = Some(now.to_string());
                info!(
                    target: "app::challenge",
                    user_id = %state.user_id,
                    "challenge completed"
                );
            }
        }

        state.last_updated = now.to_string();
        state
    }

    /// Begin a fresh challenge, replacing any prior progress.
    pub fn start(&self, user_id: &str) -> AppResult<ChallengeProgress> {
        let conn = self.db.get_connection()?;

        if UserRepository::find_by_id(&conn, user_id)?.is_none() {
            return Err(AppError::no_user());
        }

        let progress = ChallengeProgress::fresh(user_id, Utc::now().to_rfc3339());
        ChallengeRepository::upsert(&conn, &progress)?;

        info!(target: "app::challenge", %user_id, "challenge started");

        Ok(progress)
    }

    /// Discard prior progress entirely. Identical to starting over.
    pub fn reset(&self, user_id: &str) -> AppResult<ChallengeProgress> {
        let progress = self.start(user_id)?;
        info!(target: "app::challenge", %user_id, "challenge reset");
        Ok(progress)
    }

    pub fn get_progress(&self, user_id: &str) -> AppResult<Option<ChallengeProgress>> {
        let conn = self.db.get_connection()?;
        ChallengeRepository::find_by_user(&conn, user_id)
    }

    /// React to the first qualifying act of the day. A user who never opted
    /// into the challenge has no progress row, and that is a no-op here.
    pub fn record_first_activity(
        &self,
        user_id: &str,
        today: NaiveDate,
    ) -> AppResult<Option<ChallengeProgress>> {
        let conn = self.db.get_connection()?;

        let Some(progress) = ChallengeRepository::find_by_user(&conn, user_id)? else {
            debug!(target: "app::challenge", %user_id, "no challenge in progress, nothing to advance");
            return Ok(None);
        };

        let acts = ActRepository::list_for_user(&conn, user_id)?;
        let activity_dates = dates::active_dates(&acts);
        let now = Utc::now().to_rfc3339();

        let updated = Self::record_daily_progress(progress, &activity_dates, today, &now);
        ChallengeRepository::upsert(&conn, &updated)?;

        Ok(Some(updated))
    }
}
