use chrono::{DateTime, Utc};
use rusqlite::{Connection, Row};
use tracing::{info, warn};

use crate::error::AppResult;

const USER_VERSION: i32 = 3;

#[derive(Debug)]
pub struct MigrationInfo {
    pub version: i32,
    pub description: String,
    pub applied_at: DateTime<Utc>,
}

pub fn run(conn: &Connection) -> AppResult<()> {
    // Ensure migration history table exists
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS migration_history (
            version INTEGER PRIMARY KEY,
            description TEXT NOT NULL,
            applied_at TEXT NOT NULL,
            rollback_sql TEXT
        );
        "#,
    )?;

    let mut current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if current_version < 1 {
        info!(target: "app::db", version = current_version, "running migration v1");
        migrate_to_v1(conn)?;
        current_version = 1;
        conn.execute(&format!("PRAGMA user_version = {}", current_version), [])?;
        record_migration(
            conn,
            1,
            "Add per-user streak counters",
            Some("DROP TABLE IF EXISTS user_streaks;"),
        )?;
    }

    if current_version < 2 {
        info!(target: "app::db", version = current_version, "running migration v2");
        migrate_to_v2(conn)?;
        current_version = 2;
        conn.execute(&format!("PRAGMA user_version = {}", current_version), [])?;
        record_migration(
            conn,
            2,
            "Add KIND30 challenge progress",
            Some("DROP TABLE IF EXISTS challenge_progress;"),
        )?;
    }

    if current_version < 3 {
        info!(target: "app::db", version = current_version, "running migration v3");
        migrate_to_v3(conn)?;
        current_version = 3;
        conn.execute(&format!("PRAGMA user_version = {}", current_version), [])?;
        record_migration(
            conn,
            3,
            "Add notification settings and profile avatars",
            Some("DROP TABLE IF EXISTS notification_settings;"),
        )?;
    }

    if current_version != USER_VERSION {
        conn.execute(&format!("PRAGMA user_version = {}", USER_VERSION), [])?;
    }

    Ok(())
}

fn record_migration(
    conn: &Connection,
    version: i32,
    description: &str,
    rollback_sql: Option<&str>,
) -> AppResult<()> {
    let now = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT OR REPLACE INTO migration_history (version, description, applied_at, rollback_sql) VALUES (?, ?, ?, ?)",
        (version, description, now, rollback_sql),
    )?;
    Ok(())
}

pub fn rollback_to_version(conn: &Connection, target_version: i32) -> AppResult<()> {
    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if target_version >= current_version {
        warn!(
            "Target version {} is not less than current version {}",
            target_version, current_version
        );
        return Ok(());
    }

    // Get rollback scripts for versions greater than target
    let mut stmt = conn.prepare(
        "SELECT version, rollback_sql FROM migration_history WHERE version > ? ORDER BY version DESC",
    )?;

    let rollbacks = stmt
        .query_map([target_version], |row| {
            Ok((row.get::<_, i32>(0)?, row.get::<_, Option<String>>(1)?))
        })?
        .collect::<Result<Vec<_>, _>>()?;
    // Drop the statement before executing DDL: SQLite blocks schema
    // changes while a prepared statement is active on the connection.
    drop(stmt);

    for (version, rollback_sql) in rollbacks {
        if let Some(sql) = rollback_sql {
            info!("Rolling back migration v{}", version);
            conn.execute_batch(&sql)?;
        } else {
            warn!("No rollback script available for migration v{}", version);
        }
    }

    // Update version and remove rolled back migrations from history
    conn.execute(&format!("PRAGMA user_version = {}", target_version), [])?;
    conn.execute(
        "DELETE FROM migration_history WHERE version > ?",
        [target_version],
    )?;

    Ok(())
}

pub fn get_migration_history(conn: &Connection) -> AppResult<Vec<MigrationInfo>> {
    let mut stmt = conn
        .prepare("SELECT version, description, applied_at FROM migration_history ORDER BY version")?;

    let migration_iter = stmt.query_map([], |row| {
        let applied_at_str: String = row.get(2)?;
        let applied_at = DateTime::parse_from_rfc3339(&applied_at_str)
            .map_err(|_| {
                rusqlite::Error::InvalidColumnType(
                    2,
                    "applied_at".to_string(),
                    rusqlite::types::Type::Text,
                )
            })?
            .with_timezone(&Utc);

        Ok(MigrationInfo {
            version: row.get(0)?,
            description: row.get(1)?,
            applied_at,
        })
    })?;

    let mut migrations = Vec::new();
    for migration in migration_iter {
        migrations.push(migration?);
    }
    Ok(migrations)
}

fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS user_streaks (
            user_id TEXT PRIMARY KEY,
            current_streak_days INTEGER NOT NULL DEFAULT 0,
            longest_streak_days INTEGER NOT NULL DEFAULT 0,
            last_activity_date TEXT NOT NULL DEFAULT '',
            total_days_active INTEGER NOT NULL DEFAULT 0,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        "#,
    )?;

    Ok(())
}

fn migrate_to_v2(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS challenge_progress (
            user_id TEXT NOT NULL,
            challenge_name TEXT NOT NULL,
            start_date TEXT NOT NULL,
            current_day INTEGER NOT NULL DEFAULT 1,
            completed_days TEXT NOT NULL DEFAULT '[]',
            is_active INTEGER NOT NULL DEFAULT 1,
            completed_at TEXT,
            last_updated TEXT NOT NULL,
            PRIMARY KEY (user_id, challenge_name),
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        CREATE INDEX IF NOT EXISTS idx_challenge_progress_is_active
            ON challenge_progress(is_active);
        "#,
    )?;

    Ok(())
}

fn migrate_to_v3(conn: &Connection) -> AppResult<()> {
    ensure_column(conn, "user_profiles", "avatar_uri", "TEXT")?;

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notification_settings (
            user_id TEXT PRIMARY KEY,
            enabled INTEGER NOT NULL DEFAULT 1,
            frequency_hours INTEGER NOT NULL DEFAULT 12,
            preferred_time_1 TEXT NOT NULL DEFAULT '09:00',
            preferred_time_2 TEXT NOT NULL DEFAULT '21:00',
            quiet_hours_enabled INTEGER NOT NULL DEFAULT 1,
            quiet_start TEXT NOT NULL DEFAULT '22:00',
            quiet_end TEXT NOT NULL DEFAULT '07:00',
            FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
        );
        "#,
    )?;

    Ok(())
}

fn ensure_column(conn: &Connection, table: &str, column: &str, definition: &str) -> AppResult<()> {
    if !column_exists(conn, table, column)? {
        let sql = format!("ALTER TABLE {table} ADD COLUMN {column} {definition};");
        conn.execute(&sql, [])?;
    }
    Ok(())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let pragma = format!("PRAGMA table_info({table})");
    let mut stmt = conn.prepare(&pragma)?;
    let mut rows = stmt.query([])?;

    while let Some(row) = rows.next()? {
        if equals_name(row, column)? {
            return Ok(true);
        }
    }

    Ok(false)
}

fn equals_name(row: &Row<'_>, column: &str) -> Result<bool, rusqlite::Error> {
    let name: String = row.get(1)?;
    Ok(name.eq_ignore_ascii_case(column))
}
