use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::db::repositories::act_repository::ActRepository;
use crate::db::repositories::journal_repository::JournalRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::journal::{JournalEntry, JournalEntryInput};
use crate::utils::dates;

/// Journal entries, optionally linked to the act they reflect on.
pub struct JournalService {
    db: DbPool,
}

impl JournalService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn create_entry(&self, input: JournalEntryInput) -> AppResult<JournalEntry> {
        let conn = self.db.get_connection()?;

        if UserRepository::find_by_id(&conn, &input.user_id)?.is_none() {
            return Err(AppError::no_user());
        }

        Self::validate(&input)?;

        // The act link is advisory, but a dangling one at creation time is
        // almost certainly a caller bug.
        if let Some(act_id) = &input.kindness_act_id {
            ActRepository::find_by_id(&conn, act_id)?;
        }

        let entry = JournalEntry {
            id: Uuid::new_v4().to_string(),
            user_id: input.user_id,
            title: input.title.trim().to_string(),
            content: input.content,
            kindness_act_id: input.kindness_act_id,
            mood_before: input.mood_before,
            mood_after: input.mood_after,
            created_at: Utc::now().to_rfc3339(),
            updated_at: None,
        };

        JournalRepository::upsert(&conn, &entry)?;

        info!(
            target: "app::journal",
            entry_id = %entry.id,
            user_id = %entry.user_id,
            linked_act = entry.kindness_act_id.is_some(),
            "journal entry created"
        );

        Ok(entry)
    }

    pub fn update_entry(&self, id: &str, input: JournalEntryInput) -> AppResult<JournalEntry> {
        let conn = self.db.get_connection()?;
        let existing = JournalRepository::find_by_id(&conn, id)?;

        Self::validate(&input)?;

        if let Some(act_id) = &input.kindness_act_id {
            ActRepository::find_by_id(&conn, act_id)?;
        }

        let updated = JournalEntry {
            title: input.title.trim().to_string(),
            content: input.content,
            kindness_act_id: input.kindness_act_id,
            mood_before: input.mood_before,
            mood_after: input.mood_after,
            updated_at: Some(Utc::now().to_rfc3339()),
            ..existing
        };

        JournalRepository::upsert(&conn, &updated)?;

        Ok(updated)
    }

    pub fn get_entry(&self, id: &str) -> AppResult<JournalEntry> {
        let conn = self.db.get_connection()?;
        JournalRepository::find_by_id(&conn, id)
    }

    pub fn list_entries(&self, user_id: &str) -> AppResult<Vec<JournalEntry>> {
        let conn = self.db.get_connection()?;
        JournalRepository::list_for_user(&conn, user_id)
    }

    pub fn entries_for_date(&self, user_id: &str, date: &str) -> AppResult<Vec<JournalEntry>> {
        dates::parse_day(date)?;
        let conn = self.db.get_connection()?;
        JournalRepository::list_for_date(&conn, user_id, date)
    }

    pub fn entries_for_act(&self, kindness_act_id: &str) -> AppResult<Vec<JournalEntry>> {
        let conn = self.db.get_connection()?;
        JournalRepository::list_for_act(&conn, kindness_act_id)
    }

    pub fn delete_entry(&self, id: &str) -> AppResult<()> {
        let conn = self.db.get_connection()?;
        JournalRepository::delete(&conn, id)?;
        info!(target: "app::journal", entry_id = %id, "journal entry deleted");
        Ok(())
    }

    fn validate(input: &JournalEntryInput) -> AppResult<()> {
        if input.title.trim().is_empty() {
            return Err(AppError::validation("a journal entry needs a title"));
        }
        if input.content.trim().is_empty() {
            return Err(AppError::validation("a journal entry needs content"));
        }
        Ok(())
    }
}
