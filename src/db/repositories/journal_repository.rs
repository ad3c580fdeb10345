use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::journal::{JournalEntry, JournalMood};

#[derive(Debug, Clone)]
pub struct JournalEntryRow {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub kindness_act_id: Option<String>,
    pub mood_before: Option<String>,
    pub mood_after: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl JournalEntryRow {
    pub fn into_record(self) -> AppResult<JournalEntry> {
        let mood_before = match self.mood_before {
            Some(value) => {
                Some(JournalMood::try_from(value.as_str()).map_err(AppError::validation)?)
            }
            None => None,
        };
        let mood_after = match self.mood_after {
            Some(value) => {
                Some(JournalMood::try_from(value.as_str()).map_err(AppError::validation)?)
            }
            None => None,
        };

        Ok(JournalEntry {
            id: self.id,
            user_id: self.user_id,
            title: self.title,
            content: self.content,
            kindness_act_id: self.kindness_act_id,
            mood_before,
            mood_after,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl TryFrom<&Row<'_>> for JournalEntryRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            title: row.get("title")?,
            content: row.get("content")?,
            kindness_act_id: row.get("kindness_act_id")?,
            mood_before: row.get("mood_before")?,
            mood_after: row.get("mood_after")?,
            created_at: row.get("created_at")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    id,
    user_id,
    title,
    content,
    kindness_act_id,
    mood_before,
    mood_after,
    created_at,
    updated_at
"#;

pub struct JournalRepository;

impl JournalRepository {
    pub fn upsert(conn: &Connection, entry: &JournalEntry) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO journal_entries (
                    id,
                    user_id,
                    title,
                    content,
                    kindness_act_id,
                    mood_before,
                    mood_after,
                    created_at,
                    updated_at
                ) VALUES (
                    :id,
                    :user_id,
                    :title,
                    :content,
                    :kindness_act_id,
                    :mood_before,
                    :mood_after,
                    :created_at,
                    :updated_at
                )
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    content = excluded.content,
                    kindness_act_id = excluded.kindness_act_id,
                    mood_before = excluded.mood_before,
                    mood_after = excluded.mood_after,
                    updated_at = excluded.updated_at
            "#,
            named_params! {
                ":id": &entry.id,
                ":user_id": &entry.user_id,
                ":title": &entry.title,
                ":content": &entry.content,
                ":kindness_act_id": &entry.kindness_act_id,
                ":mood_before": entry.mood_before.map(|mood| mood.as_str()),
                ":mood_after": entry.mood_after.map(|mood| mood.as_str()),
                ":created_at": &entry.created_at,
                ":updated_at": &entry.updated_at,
            },
        )?;

        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<JournalEntry> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM journal_entries WHERE id = :id"
        ))?;

        let row = stmt
            .query_row(named_params! {":id": id}, |row| {
                JournalEntryRow::try_from(row)
            })
            .optional()?;

        match row {
            Some(row) => row.into_record(),
            None => Err(AppError::not_found()),
        }
    }

    pub fn list_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<JournalEntry>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS} FROM journal_entries
                WHERE user_id = :user_id
                ORDER BY created_at DESC
            "#
        ))?;

        let records = stmt
            .query_map(named_params! {":user_id": user_id}, |row| {
                JournalEntryRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    /// Entries whose `created_at` falls on the given calendar day.
    pub fn list_for_date(
        conn: &Connection,
        user_id: &str,
        date: &str,
    ) -> AppResult<Vec<JournalEntry>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS} FROM journal_entries
                WHERE user_id = :user_id AND substr(created_at, 1, 10) = :date
                ORDER BY created_at ASC
            "#
        ))?;

        let records = stmt
            .query_map(named_params! {":user_id": user_id, ":date": date}, |row| {
                JournalEntryRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    pub fn list_for_act(conn: &Connection, kindness_act_id: &str) -> AppResult<Vec<JournalEntry>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS} FROM journal_entries
                WHERE kindness_act_id = :kindness_act_id
                ORDER BY created_at ASC
            "#
        ))?;

        let records = stmt
            .query_map(named_params! {":kindness_act_id": kindness_act_id}, |row| {
                JournalEntryRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    pub fn delete(conn: &Connection, id: &str) -> AppResult<()> {
        let affected = conn.execute("DELETE FROM journal_entries WHERE id = ?1", [id])?;

        if affected == 0 {
            return Err(AppError::not_found());
        }

        Ok(())
    }
}
