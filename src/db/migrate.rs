//! Versioned schema migrations.
//!
//! Every migration is idempotent and, once applied, is recorded in the
//! `log` table as `migration_applied` with its version as target.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

const V_CREATE_DAYS: &str = "20250915_0001_create_days";
const V_ADD_SOURCE: &str = "20251002_0002_add_source_to_days";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

pub(crate) fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

pub(crate) fn mark_applied(conn: &Connection, version: &str, message: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `days` table: one row per calendar date, rosters as JSON arrays.
fn migrate_create_days(conn: &Connection) -> AppResult<()> {
    if is_applied(conn, V_CREATE_DAYS)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS days (
            date          TEXT PRIMARY KEY,          -- YYYY-MM-DD
            am_scheduled  TEXT NOT NULL DEFAULT '[]',
            am_off        TEXT NOT NULL DEFAULT '[]',
            pm_scheduled  TEXT NOT NULL DEFAULT '[]',
            pm_off        TEXT NOT NULL DEFAULT '[]',
            updated_at    TEXT NOT NULL              -- ISO 8601 timestamp
        );
        "#,
    )
    .map_err(|e| AppError::Migration(format!("{V_CREATE_DAYS}: {e}")))?;

    mark_applied(conn, V_CREATE_DAYS, "Created days table")?;
    success(format!("Migration applied: {V_CREATE_DAYS} → created 'days' table"));
    Ok(())
}

/// Track where a day came from (`cli` or `import`).
fn migrate_add_source(conn: &Connection) -> AppResult<()> {
    if is_applied(conn, V_ADD_SOURCE)? {
        return Ok(());
    }

    if !table_has_column(conn, "days", "source")? {
        conn.execute(
            "ALTER TABLE days ADD COLUMN source TEXT NOT NULL DEFAULT 'cli';",
            [],
        )
        .map_err(|e| AppError::Migration(format!("{V_ADD_SOURCE}: {e}")))?;
    }

    mark_applied(conn, V_ADD_SOURCE, "Added source column to days")?;
    success(format!("Migration applied: {V_ADD_SOURCE} → added 'source' to days table"));
    Ok(())
}

/// Public entry point: run all pending migrations, oldest first.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;
    migrate_create_days(conn)?;
    migrate_add_source(conn)?;
    Ok(())
}
