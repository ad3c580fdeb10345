use std::convert::TryFrom;

use rusqlite::{named_params, Connection, OptionalExtension, Row};

use crate::error::{AppError, AppResult};
use crate::models::user::{EmotionalState, MentalWellbeing, User, UserProfile};

#[derive(Debug, Clone)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub created_at: String,
}

impl UserRow {
    pub fn into_record(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
            avatar_url: self.avatar_url,
            created_at: self.created_at,
        }
    }
}

impl TryFrom<&Row<'_>> for UserRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            email: row.get("email")?,
            avatar_url: row.get("avatar_url")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UserProfileRow {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub location_city: Option<String>,
    pub avatar_uri: Option<String>,
    pub emotional_state: String,
    pub mental_wellbeing: String,
    pub updated_at: String,
}

impl UserProfileRow {
    pub fn into_record(self) -> AppResult<UserProfile> {
        let emotional_state = EmotionalState::try_from(self.emotional_state.as_str())
            .map_err(AppError::validation)?;
        let mental_wellbeing = MentalWellbeing::try_from(self.mental_wellbeing.as_str())
            .map_err(AppError::validation)?;

        Ok(UserProfile {
            user_id: self.user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            location_city: self.location_city,
            avatar_uri: self.avatar_uri,
            emotional_state,
            mental_wellbeing,
            updated_at: self.updated_at,
        })
    }
}

impl TryFrom<&Row<'_>> for UserProfileRow {
    type Error = rusqlite::Error;

    fn try_from(row: &Row<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            location_city: row.get("location_city")?,
            avatar_uri: row.get("avatar_uri")?,
            emotional_state: row.get("emotional_state")?,
            mental_wellbeing: row.get("mental_wellbeing")?,
            updated_at: row.get("updated_at")?,
        })
    }
}

pub struct UserRepository;

impl UserRepository {
    pub fn insert(conn: &Connection, user: &User) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO users (id, name, email, avatar_url, created_at)
                VALUES (:id, :name, :email, :avatar_url, :created_at)
            "#,
            named_params! {
                ":id": &user.id,
                ":name": &user.name,
                ":email": &user.email,
                ":avatar_url": &user.avatar_url,
                ":created_at": &user.created_at,
            },
        )?;

        Ok(())
    }

    pub fn find_by_id(conn: &Connection, id: &str) -> AppResult<Option<User>> {
        let mut stmt = conn
            .prepare("SELECT id, name, email, avatar_url, created_at FROM users WHERE id = :id")?;

        let row = stmt
            .query_row(named_params! {":id": id}, |row| UserRow::try_from(row))
            .optional()?;

        Ok(row.map(UserRow::into_record))
    }

    /// The single local user, when one has been onboarded.
    pub fn find_first(conn: &Connection) -> AppResult<Option<User>> {
        let mut stmt = conn.prepare(
            "SELECT id, name, email, avatar_url, created_at FROM users ORDER BY created_at ASC LIMIT 1",
        )?;

        let row = stmt
            .query_row([], |row| UserRow::try_from(row))
            .optional()?;

        Ok(row.map(UserRow::into_record))
    }

    pub fn upsert_profile(conn: &Connection, profile: &UserProfile) -> AppResult<()> {
        conn.execute(
            r#"
                INSERT INTO user_profiles (
                    user_id,
                    first_name,
                    last_name,
                    location_city,
                    avatar_uri,
                    emotional_state,
                    mental_wellbeing,
                    updated_at
                ) VALUES (
                    :user_id,
                    :first_name,
                    :last_name,
                    :location_city,
                    :avatar_uri,
                    :emotional_state,
                    :mental_wellbeing,
                    :updated_at
                )
                ON CONFLICT(user_id) DO UPDATE SET
                    first_name = excluded.first_name,
                    last_name = excluded.last_name,
                    location_city = excluded.location_city,
                    avatar_uri = excluded.avatar_uri,
                    emotional_state = excluded.emotional_state,
                    mental_wellbeing = excluded.mental_wellbeing,
                    updated_at = excluded.updated_at
            "#,
            named_params! {
                ":user_id": &profile.user_id,
                ":first_name": &profile.first_name,
                ":last_name": &profile.last_name,
                ":location_city": &profile.location_city,
                ":avatar_uri": &profile.avatar_uri,
                ":emotional_state": profile.emotional_state.as_str(),
                ":mental_wellbeing": profile.mental_wellbeing.as_str(),
                ":updated_at": &profile.updated_at,
            },
        )?;

        Ok(())
    }

    pub fn find_profile(conn: &Connection, user_id: &str) -> AppResult<Option<UserProfile>> {
        let mut stmt = conn.prepare(
            r#"
                SELECT
                    user_id,
                    first_name,
                    last_name,
                    location_city,
                    avatar_uri,
                    emotional_state,
                    mental_wellbeing,
                    updated_at
                FROM user_profiles
                WHERE user_id = :user_id
            "#,
        )?;

        let row = stmt
            .query_row(named_params! {":user_id": user_id}, |row| {
                UserProfileRow::try_from(row)
            })
            .optional()?;

        match row {
            Some(row) => Ok(Some(row.into_record()?)),
            None => Ok(None),
        }
    }
}
