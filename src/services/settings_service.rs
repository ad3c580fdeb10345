use tracing::info;

use crate::db::repositories::settings_repository::SettingsRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::settings::NotificationSettings;
use crate::utils::dates;

/// Reminder preferences. Reads fall back to the built-in defaults so callers
/// never have to special-case a user who has not touched the settings screen.
pub struct SettingsService {
    db: DbPool,
}

impl SettingsService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    pub fn get_settings(&self, user_id: &str) -> AppResult<NotificationSettings> {
        let conn = self.db.get_connection()?;

        match SettingsRepository::find_by_user(&conn, user_id)? {
            Some(settings) => Ok(settings),
            None => Ok(NotificationSettings::defaults_for(user_id)),
        }
    }

    pub fn update_settings(&self, settings: NotificationSettings) -> AppResult<NotificationSettings> {
        Self::validate(&settings)?;

        let conn = self.db.get_connection()?;

        if UserRepository::find_by_id(&conn, &settings.user_id)?.is_none() {
            return Err(AppError::no_user());
        }

        SettingsRepository::upsert(&conn, &settings)?;

        info!(
            target: "app::settings",
            user_id = %settings.user_id,
            enabled = settings.enabled,
            quiet_hours = settings.quiet_hours_enabled,
            "notification settings updated"
        );

        Ok(settings)
    }

    fn validate(settings: &NotificationSettings) -> AppResult<()> {
        if settings.frequency_hours == 0 {
            return Err(AppError::validation(
                "reminder frequency must be at least one hour",
            ));
        }

        for value in [
            &settings.preferred_time_1,
            &settings.preferred_time_2,
            &settings.quiet_start,
            &settings.quiet_end,
        ] {
            dates::parse_clock(value)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = NotificationSettings::defaults_for("u1");
        assert!(SettingsService::validate(&settings).is_ok());
    }

    #[test]
    fn rejects_zero_frequency() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.frequency_hours = 0;
        assert!(SettingsService::validate(&settings).is_err());
    }

    #[test]
    fn rejects_unparseable_times() {
        let mut settings = NotificationSettings::defaults_for("u1");
        settings.preferred_time_1 = "nine".to_string();
        assert!(SettingsService::validate(&settings).is_err());
    }
}
