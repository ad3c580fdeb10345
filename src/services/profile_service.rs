use chrono::{Local, Utc};
use tracing::info;
use uuid::Uuid;

use crate::db::repositories::streak_repository::StreakRepository;
use crate::db::repositories::user_repository::UserRepository;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::streak::UserStreak;
use crate::models::user::{User, UserProfile};

/// Onboarding and profile management for the single local user.
pub struct ProfileService {
    db: DbPool,
}

impl ProfileService {
    pub fn new(db: DbPool) -> Self {
        Self { db }
    }

    /// Onboard a new user and seed the zero streak record so the first
    /// dashboard read never sees an absent streak.
    pub fn create_user(&self, name: &str, email: &str) -> AppResult<User> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("a user needs a name"));
        }
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation(format!(
                "not a usable email address: {email}"
            )));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            email: email.to_string(),
            avatar_url: None,
            created_at: Utc::now().to_rfc3339(),
        };

        let conn = self.db.get_connection()?;
        UserRepository::insert(&conn, &user)?;

        let streak = UserStreak::zero(&user.id, Local::now().date_naive());
        StreakRepository::upsert(&conn, &streak)?;

        info!(target: "app::profile", user_id = %user.id, "user onboarded");

        Ok(user)
    }

    /// The single local user. Absence means onboarding has not run yet.
    pub fn current_user(&self) -> AppResult<User> {
        let conn = self.db.get_connection()?;
        UserRepository::find_first(&conn)?.ok_or_else(AppError::no_user)
    }

    pub fn get_user(&self, user_id: &str) -> AppResult<User> {
        let conn = self.db.get_connection()?;
        UserRepository::find_by_id(&conn, user_id)?.ok_or_else(AppError::no_user)
    }

    pub fn save_profile(&self, mut profile: UserProfile) -> AppResult<UserProfile> {
        if profile.first_name.trim().is_empty() {
            return Err(AppError::validation("a profile needs a first name"));
        }

        let conn = self.db.get_connection()?;

        if UserRepository::find_by_id(&conn, &profile.user_id)?.is_none() {
            return Err(AppError::no_user());
        }

        profile.updated_at = Utc::now().to_rfc3339();
        UserRepository::upsert_profile(&conn, &profile)?;

        info!(target: "app::profile", user_id = %profile.user_id, "profile saved");

        Ok(profile)
    }

    pub fn get_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let conn = self.db.get_connection()?;
        UserRepository::find_profile(&conn, user_id)
    }

    /// Onboarding is complete once a user exists and has filled a profile.
    pub fn is_setup_complete(&self) -> AppResult<bool> {
        let conn = self.db.get_connection()?;

        let Some(user) = UserRepository::find_first(&conn)? else {
            return Ok(false);
        };

        Ok(UserRepository::find_profile(&conn, &user.id)?.is_some())
    }
}
