use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::AppResult;
use crate::models::settings::NotificationSettings;

#[derive(Debug, Clone)]
pub struct NotificationSettingsRow {
    pub user_id: String,
    pub enabled: bool,
    pub frequency_hours: i64,
    pub preferred_time_1: String,
    pub preferred_time_2: String,
    pub quiet_hours_enabled: bool,
    pub quiet_start: String,
    pub quiet_end: String,
}

impl NotificationSettingsRow {
    pub fn into_record(self) -> NotificationSettings {
        NotificationSettings {
            user_id: self.user_id,
            enabled: self.enabled,
            frequency_hours: self.frequency_hours.max(0) as u32,
            preferred_time_1: self.preferred_time_1,
            preferred_time_2: self.preferred_time_2,
            quiet_hours_enabled: self.quiet_hours_enabled,
            quiet_start: self.quiet_start,
            quiet_end: self.quiet_end,
        }
    }
}

impl TryFrom<&Row<'_>> for NotificationSettingsRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            enabled: row.get("enabled")?,
            frequency_hours: row.get("frequency_hours")?,
            preferred_time_1: row.get("preferred_time_1")?,
            preferred_time_2: row.get("preferred_time_2")?,
            quiet_hours_enabled: row.get("quiet_hours_enabled")?,
            quiet_start: row.get("quiet_start")?,
            quiet_end: row.get("quiet_end")?,
        })
    }
}

pub struct SettingsRepository;

impl SettingsRepository {
    pub fn find_by_user(
        conn: &Connection,
        user_id: &str,
    ) -> AppResult<Option<NotificationSettings>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    enabled,
                    frequency_hours,
                    preferred_time_1,
                    preferred_time_2,
                    quiet_hours_enabled,
                    quiet_start,
                    quiet_end
                FROM notification_settings
                WHERE user_id = :user_id
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":user_id": user_id}, |row| {
                NotificationSettingsRow::try_from(row)
            })
            .optional()?;

        Ok(row.map(NotificationSettingsRow::into_record))
    }

    pub fn upsert(conn: &Connection, settings: &NotificationSettings) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO notification_settings (
                    user_id,
                    enabled,
                    frequency_hours,
                    preferred_time_1,
                    preferred_time_2,
                    quiet_hours_enabled,
                    quiet_start,
                    quiet_end
                ) VALUES (
                    :user_id,
                    :enabled,
                    :frequency_hours,
                    :preferred_time_1,
                    :preferred_time_2,
                    :quiet_hours_enabled,
                    :quiet_start,
                    :quiet_end
                )
                ON CONFLICT(user_id) DO UPDATE SET
                    enabled = excluded.enabled,
                    frequency_hours = excluded.frequency_hours,
                    preferred_time_1 = excluded.preferred_time_1,
                    preferred_time_2 = excluded.preferred_time_2,
                    quiet_hours_enabled = excluded.quiet_hours_enabled,
                    quiet_start = excluded.quiet_start,
                    quiet_end = excluded.quiet_end
            "#,
            named_params! {
                ":user_id": &settings.user_id,
                ":enabled": settings.enabled,
                ":frequency_hours": settings.frequency_hours as i64,
                ":preferred_time_1": &settings.preferred_time_1,
                ":preferred_time_2": &settings.preferred_time_2,
                ":quiet_hours_enabled": settings.quiet_hours_enabled,
                ":quiet_start": &settings.quiet_start,
                ":quiet_end": &settings.quiet_end,
            },
        )?;

        Ok(())
    }
}
