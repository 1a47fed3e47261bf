//! SQLite migration registry and executor.
//!
//! # Invariants
//! - `version` values must remain monotonic.
//! - Applied migration version is mirrored to `PRAGMA user_version`.
//! - Migration 1 only uses `IF NOT EXISTS`, so diaries created before
//!   versioning was introduced (user_version 0) are adopted as-is.
//!
//! # Legacy diaries
//! The first releases of the tool created `foods`/`items` directly and never
//! set `user_version`. Such a file reports version 0 while already holding
//! data. Applying migration 1 to it is a no-op on the tables and only stamps
//! the version, so existing foods and events keep their ids and timestamps.
//! Any later migration must stay compatible with that adopted shape: no
//! column renames, and new columns need defaults.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_init.sql"),
}];

/// Returns the latest migration version known by this binary.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies all pending migrations on the provided connection.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current_version = current_user_version(conn)?;
    let latest = latest_version();

    if current_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current_version,
            latest_supported: latest,
        });
    }

    if current_version == latest {
        return Ok(());
    }

    if current_version == 0 && has_legacy_tables(conn)? {
        info!(
            "event=db_migrate module=db status=adopt_legacy from_version=0 to_version={latest}"
        );
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current_version {
            continue;
        }

        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;

    Ok(())
}

/// Whether an unversioned file already holds the diary tables.
fn has_legacy_tables(conn: &Connection) -> DbResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('foods', 'items');",
        [],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
