use chrono::{Local, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use crate::db::repositories::act_repository::ActRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::act::{KindnessAct, KindnessActInput};
use crate::services::challenge_service::ChallengeService;
use crate::services::streak_service::StreakService;
use crate::utils::dates;

/// Creates and edits kindness acts and drives the downstream recomputation.
///
/// Saving an act always recomputes the streak from the full history. The
/// challenge only advances on the first act logged for the current local day,
/// so backfilled or repeated entries cannot double-advance it.
pub struct ActService {
    db: DbPool,
}

impl ActService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn log_act(&self, input: KindnessActInput) -> AppResult<KindnessAct> {
        let today = Local::now().date_naive();

        let date = match input.date {
            Some(raw) => dates::format_day(dates::parse_day(&raw)?),
            None => dates::format_day(today),
        };

        let title = input.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("an act needs a title"));
        }

        let act = KindnessAct {
            id: Uuid::new_v4().to_string(),
            user_id: input.user_id,
            date,
            title: title.to_string(),
            description: input.description.unwrap_or_default(),
            category: input.category,
            impact_level: input.impact_level,
            mood_after: input.mood_after,
            created_at: Utc::now().to_rfc3339(),
        };

        let first_of_day = {
            let conn = self.db.get_connection()?;

            if UserRepository::find_by_id(&conn, &act.user_id)?.is_none() {
                return Err(AppError::no_user());
            }

            let first = ActRepository::count_for_date(&conn, &act.user_id, &act.date)? == 0;
            ActRepository::upsert(&conn, &act)?;
            first
        };

        info!(
            target: "app::acts",
            act_id = %act.id,
            user_id = %act.user_id,
            date = %act.date,
            category = %act.category,
            "act logged"
        );

        StreakService::new(self.db.clone()).recalculate_for_user(&act.user_id)?;

        // The challenge reacts once per day, and only to today's entries.
        // Backfilling an earlier date feeds the streak but not the challenge.
        if first_of_day && act.date == dates::format_day(today) {
            ChallengeService::new(self.db.clone()).record_first_activity(&act.user_id, today)?;
        } else {
            debug!(
                target: "app::acts",
                act_id = %act.id,
                "not the first act of the current day, challenge untouched"
            );
        }

        Ok(act)
    }

    /// Edit an existing act in place. The calendar day is fixed at creation,
    /// so no streak or challenge recomputation is needed here.
    pub fn update_act(&self, id: &str, input: KindnessActInput) -> AppResult<KindnessAct> {
        let conn = self.db.get_connection()?;
        let existing = ActRepository::find_by_id(&conn, id)?;

        let title = input.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("an act needs a title"));
        }

        let updated = KindnessAct {
            title: title.to_string(),
            description: input.description.unwrap_or_default(),
            category: input.category,
            impact_level: input.impact_level,
            mood_after: input.mood_after,
            ..existing
        };

        ActRepository::upsert(&conn, &updated)?;

        Ok(updated)
    }

    pub fn get_act(&self, id: &str) -> AppResult<KindnessAct> {
        let conn = self.db.get_connection()?;
        ActRepository::find_by_id(&conn, id)
    }

    pub fn list_acts(&self, user_id: &str) -> AppResult<Vec<KindnessAct>> {
        let conn = self.db.get_connection()?;
        ActRepository::list_for_user(&conn, user_id)
    }

    pub fn acts_for_date(&self, user_id: &str, date: &str) -> AppResult<Vec<KindnessAct>> {
        dates::parse_day(date)?;
        let conn = self.db.get_connection()?;
        ActRepository::list_for_date(&conn, user_id, date)
    }

    pub fn todays_acts(&self, user_id: &str) -> AppResult<Vec<KindnessAct>> {
        let today = dates::format_day(Local::now().date_naive());
        let conn = self.db.get_connection()?;
        ActRepository::list_for_date(&conn, user_id, &today)
    }

    /// Remove an act and rebuild the streak without it.
    pub fn delete_act(&self, id: &str) -> AppResult<()> {
        let user_id = {
            let conn = self.db.get_connection()?;
            let act = ActRepository::find_by_id(&conn, id)?;
            ActRepository::delete(&conn, id)?;
            act.user_id
        };

        info!(target: "app::acts", act_id = %id, "act deleted");

        StreakService::new(self.db.clone()).recalculate_for_user(&user_id)?;

        Ok(())
    }
}
