use std::collections::BTreeSet;
use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::challenge::{ChallengeProgress, CHALLENGE_LENGTH_DAYS};

#[derive(Debug, Clone)]
pub struct ChallengeProgressRow {
    pub user_id: String,
    pub challenge_name: String,
    pub start_date: String,
    pub current_day: i64,
    pub completed_days: String,
    pub is_active: bool,
    pub completed_at: Option<String>,
    pub last_updated: String,
}

impl ChallengeProgressRow {
    pub fn from_record(record: &ChallengeProgress) -> AppResult<Self> {
        Ok(Self {
            user_id: record.user_id.clone(),
            challenge_name: record.challenge_name.clone(),
            start_date: record.start_date.clone(),
            current_day: i64::from(record.current_day),
            completed_days: serde_json::to_string(&record.completed_days)?,
            is_active: record.is_active,
            completed_at: record.completed_at.clone(),
            last_updated: record.last_updated.clone(),
        })
    }

    pub fn into_record(self) -> AppResult<ChallengeProgress> {
        let completed_days: BTreeSet<u8> = serde_json::from_str(&self.completed_days)?;

        if completed_days
            .iter()
            .any(|day| *day < 1 || *day > CHALLENGE_LENGTH_DAYS)
        {
            return Err(AppError::validation_with_details(
                format!(
                    "completed day out of range in stored progress for user {}",
                    self.user_id
                ),
                serde_json::json!({ "completedDays": completed_days }),
            ));
        }

        Ok(ChallengeProgress {
            user_id: self.user_id,
            challenge_name: self.challenge_name,
            start_date: self.start_date,
            current_day: self.current_day.clamp(1, i64::from(CHALLENGE_LENGTH_DAYS) + 1) as u8,
            completed_days,
            is_active: self.is_active,
            completed_at: self.completed_at,
            last_updated: self.last_updated,
        })
    }
}

impl TryFrom<&Row<'_>> for ChallengeProgressRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            challenge_name: row.get("challenge_name")?,
            start_date: row.get("start_date")?,
            current_day: row.get("current_day")?,
            completed_days: row.get("completed_days")?,
            is_active: row.get("is_active")?,
            completed_at: row.get("completed_at")?,
            last_updated: row.get("last_updated")?,
        })
    }
}

pub struct ChallengeRepository;

impl ChallengeRepository {
    pub fn find_by_user(conn: &Connection, user_id: &str) -> AppResult<Option<ChallengeProgress>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    challenge_name,
                    start_date,
                    current_day,
                    completed_days,
                    is_active,
                    completed_at,
                    last_updated
                FROM challenge_progress
                WHERE user_id = :user_id
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":user_id": user_id}, |row| {
                ChallengeProgressRow::try_from(row)
            })
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.into_record()?)),
            None => Ok(None),
        }
    }

    /// Last write wins: starting or resetting a challenge replaces whatever
    /// progress row exists for the user.
    pub fn upsert(conn: &Connection, record: &ChallengeProgress) -> AppResult<()> {
        let row = ChallengeProgressRow::from_record(record)?;

        conn.execute(
            r#"
                INSERT INTO challenge_progress (
                    user_id,
                    challenge_name,
                    start_date,
                    current_day,
                    completed_days,
                    is_active,
                    completed_at,
                    last_updated
                ) VALUES (
                    :user_id,
                    :challenge_name,
                    :start_date,
                    :current_day,
                    :completed_days,
                    :is_active,
                    :completed_at,
                    :last_updated
                )
                ON CONFLICT(user_id, challenge_name) DO UPDATE SET
                    start_date = excluded.start_date,
                    current_day = excluded.current_day,
                    completed_days = excluded.completed_days,
                    is_active = excluded.is_active,
                    completed_at = excluded.completed_at,
                    last_updated = excluded.last_updated
            "#,
            named_params! {
                ":user_id": &row.user_id,
                ":challenge_name": &row.challenge_name,
                ":start_date": &row.start_date,
                ":current_day": &row.current_day,
                ":completed_days": &row.completed_days,
                ":is_active": &row.is_active,
                ":completed_at": &row.completed_at,
                ":last_updated": &row.last_updated,
            },
        )?;

        Ok(())
    }
}
