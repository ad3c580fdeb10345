use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::AppResult;
use crate::models::streak::UserStreak;

#[derive(Debug, Clone)]
pub struct UserStreakRow {
    pub user_id: String,
    pub current_streak_days: i64,
    pub longest_streak_days: i64,
    pub last_activity_date: String,
    pub total_days_active: i64,
}

impl UserStreakRow {
    pub fn into_record(self) -> UserStreak {
        UserStreak {
            user_id: self.user_id,
            current_streak_days: self.current_streak_days.max(0) as u32,
            longest_streak_days: self.longest_streak_days.max(0) as u32,
            last_activity_date: self.last_activity_date,
            total_days_active: self.total_days_active.max(0) as u32,
        }
    }
}

impl TryFrom<&Row<'_>> for UserStreakRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            current_streak_days: row.get("current_streak_days")?,
            longest_streak_days: row.get("longest_streak_days")?,
            last_activity_date: row.get("last_activity_date")?,
            total_days_active: row.get("total_days_active")?,
        })
    }
}

pub struct StreakRepository;

impl StreakRepository {
    pub fn find_by_user(conn: &Connection, user_id: &str) -> AppResult<Option<UserStreak>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    current_streak_days,
                    longest_streak_days,
                    last_activity_date,
                    total_days_active
                FROM user_streaks
                WHERE user_id = :user_id
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":user_id": user_id}, |row| {
                UserStreakRow::try_from(row)
            })
            .optional()?;

        Ok(row.map(UserStreakRow::into_record))
    }

    pub fn upsert(conn: &Connection, streak: &UserStreak) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO user_streaks (
                    user_id,
                    current_streak_days,
                    longest_streak_days,
                    last_activity_date,
                    total_days_active,
                    updated_at
                ) VALUES (
                    :user_id,
                    :current_streak_days,
                    :longest_streak_days,
                    :last_activity_date,
                    :total_days_active,
                    CURRENT_TIMESTAMP
                )
                ON CONFLICT(user_id) DO UPDATE SET
                    current_streak_days = excluded.current_streak_days,
                    longest_streak_days = excluded.longest_streak_days,
                    last_activity_date = excluded.last_activity_date,
                    total_days_active = excluded.total_days_active,
                    updated_at = CURRENT_TIMESTAMP
            "#,
            named_params! {
                ":user_id": &streak.user_id,
                ":current_streak_days": streak.current_streak_days as i64,
                ":longest_streak_days": streak.longest_streak_days as i64,
                ":last_activity_date": &streak.last_activity_date,
                ":total_days_active": streak.total_days_active as i64,
            },
        )?;

        Ok(())
    }
}
