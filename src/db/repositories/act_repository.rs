use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::act::{ActCategory, ImpactLevel, KindnessAct, MoodAfter};

#[derive(Debug, Clone)]
pub struct KindnessActRow {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub impact_level: String,
    pub mood_after: String,
    pub created_at: String,
}

impl KindnessActRow {
    pub fn from_record(record: &KindnessAct) -> Self {
        Self {
            id: record.id.clone(),
            user_id: record.user_id.clone(),
            date: record.date.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            category: record.category.as_str().to_string(),
            impact_level: record.impact_level.as_str().to_string(),
            mood_after: record.mood_after.as_str().to_string(),
            created_at: record.created_at.clone(),
        }
    }

    pub fn into_record(self) -> AppResult<KindnessAct> {
        let category =
            ActCategory::try_from(self.category.as_str()).map_err(AppError::validation)?;
        let impact_level =
            ImpactLevel::try_from(self.impact_level.as_str()).map_err(AppError::validation)?;
        let mood_after =
            MoodAfter::try_from(self.mood_after.as_str()).map_err(AppError::validation)?;

        Ok(KindnessAct {
            id: self.id,
            user_id: self.user_id,
            date: self.date,
            title: self.title,
            description: self.description,
            category,
            impact_level,
            mood_after,
            created_at: self.created_at,
        })
    }
}

impl TryFrom<&Row<'_>> for KindnessActRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            user_id: row.get("user_id")?,
            date: row.get("date")?,
            title: row.get("title")?,
            description: row.get("description")?,
            category: row.get("category")?,
            impact_level: row.get("impact_level")?,
            mood_after: row.get("mood_after")?,
            created_at: row.get("created_at")?,
        })
    }
}

const SELECT_COLUMNS: &str = r#"
    id,
    user_id,
    date,
    title,
    description,
    category,
    impact_level,
    mood_after,
    created_at
"#;

pub struct ActRepository;

impl ActRepository {
    /// Insert a new act, or update the mutable fields of an existing one.
    /// `date` and `created_at` are deliberately left out of the conflict
    /// branch: an act never moves to another calendar day.
    pub fn upsert(conn: &Connection, record: &KindnessAct) -> AppResult<()> {
        let row = KindnessActRow::from_record(record);

        conn.execute(
            r#"
                INSERT INTO kindness_acts (
                    id,
                    user_id,
                    date,
                    title,
                    description,
                    category,
                    impact_level,
                    mood_after,
                    created_at
                ) VALUES (
                    :id,
                    :user_id,
                    :date,
                    :title,
                    :description,
                    :category,
                    :impact_level,
                    :mood_after,
                    :created_at
                )
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    description = excluded.description,
                    category = excluded.category,
                    impact_level = excluded.impact_level,
                    mood_after = excluded.mood_after
            "#,
            named_params! {
                ":id": &row.id,
                ":user_id": &row.user_id,
                ":date": &row.date,
                ":title": &row.title,
                ":description": &row.description,
                ":category": &row.category,
                ":impact_level": &row.impact_level,
                ":mood_after": &row.mood_after,
                ":created_at": &row.created_at,
            },
        )?;

        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<KindnessAct> {
        let mut stmt = conn.prepare(&format!(
            "SELECT {SELECT_COLUMNS} FROM kindness_acts WHERE id = :id"
        ))?;

        let row = stmt
            .query_row(named_params! {":id": id}, |row| {
                KindnessActRow::try_from(row)
            })
            .optional()?;

        match row {
            Some(row) => row.into_record(),
            None => Err(AppError::not_found()),
        }
    }

    pub fn list_for_user(conn: &Connection, user_id: &str) -> AppResult<Vec<KindnessAct>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS} FROM kindness_acts
                WHERE user_id = :user_id
                ORDER BY date ASC, created_at ASC
            "#
        ))?;

        let records = stmt
            .query_map(named_params! {":user_id": user_id}, |row| {
                KindnessActRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    pub fn list_for_date(
        conn: &Connection,
        user_id: &str,
        date: &str,
    ) -> AppResult<Vec<KindnessAct>> {
        let mut stmt = conn.prepare(&format!(
            r#"
                SELECT {SELECT_COLUMNS} FROM kindness_acts
                WHERE user_id = :user_id AND date = :date
                ORDER BY created_at ASC
            "#
        ))?;

        let records = stmt
            .query_map(named_params! {":user_id": user_id, ":date": date}, |row| {
                KindnessActRow::try_from(row)
            })?
            .map(|row| {
                row.map_err(AppError::from)
                    .and_then(|row| row.into_record())
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(records)
    }

    pub fn count_for_date(conn: &Connection, user_id: &str, date: &str) -> AppResult<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM kindness_acts WHERE user_id = :user_id AND date = :date",
            named_params! {":user_id": user_id, ":date": date},
            |row| row.get(0),
        )?;

        Ok(count)
    }

    pub fn delete(conn: &Connection, id: &str) -> AppResult<()> {
        let affected = conn.execute("DELETE FROM kindness_acts WHERE id = ?1", [id])?;

        if affected == 0 {
            return Err(AppError::not_found());
        }

        Ok(())
    }
}
