//! Consumption event repository contracts and SQLite implementation.
//!
//! # Invariants
//! - `items.item` is not a foreign key; events may reference missing foods.
//! - Window queries inner-join `foods`, so dangling events never surface.
//! - The lower window bound is exclusive.

use crate::model::consumption::{ConsumptionEvent, DiaryRow};
use crate::repo::food_repo::parse_unit_mode;
use crate::repo::{parse_timestamp, timestamp_to_db, RepoError, RepoResult};
use chrono::NaiveDateTime;
use log::{debug, info};
use rusqlite::{params, Connection, Row};

/// Repository interface for consumption events.
pub trait ConsumptionRepository {
    /// Appends one event.
    fn record_consumption(&self, event: &ConsumptionEvent) -> RepoResult<()>;
    /// Lists events strictly after `since`, joined to their foods, oldest first.
    fn list_diary_rows_since(&self, since: NaiveDateTime) -> RepoResult<Vec<DiaryRow>>;
}

/// SQLite-backed consumption repository.
pub struct SqliteConsumptionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteConsumptionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ConsumptionRepository for SqliteConsumptionRepository<'_> {
    fn record_consumption(&self, event: &ConsumptionEvent) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO items (item, time, amount_consumed)
             VALUES (?1, ?2, ?3);",
            params![event.food_id, timestamp_to_db(event.time), event.amount],
        )?;

        info!(
            "event=item_record module=repo status=ok food_id={}",
            event.food_id
        );
        Ok(())
    }

    fn list_diary_rows_since(&self, since: NaiveDateTime) -> RepoResult<Vec<DiaryRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                foods.name AS name,
                items.amount_consumed AS amount_consumed,
                foods.is_per_100g AS is_per_100g,
                foods.carbs AS carbs,
                foods.protein AS protein,
                foods.fat AS fat,
                items.time AS time
             FROM items
             INNER JOIN foods ON items.item = foods.id
             WHERE items.time > ?1
             ORDER BY items.time ASC, items.rowid ASC;",
        )?;

        let mut rows = stmt.query([timestamp_to_db(since)])?;
        let mut diary_rows = Vec::new();
        while let Some(row) = rows.next()? {
            diary_rows.push(parse_diary_row(row)?);
        }

        debug!(
            "event=diary_query module=repo status=ok rows={}",
            diary_rows.len()
        );
        Ok(diary_rows)
    }
}

fn parse_diary_row(row: &Row<'_>) -> RepoResult<DiaryRow> {
    let flag: i64 = row.get("is_per_100g")?;
    let unit_mode = parse_unit_mode(flag).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid unit flag `{flag}` in foods.is_per_100g"))
    })?;
    let time_text: String = row.get("time")?;

    Ok(DiaryRow {
        name: row.get("name")?,
        unit_mode,
        amount: row.get("amount_consumed")?,
        carbs: row.get("carbs")?,
        protein: row.get("protein")?,
        fat: row.get("fat")?,
        time: parse_timestamp(&time_text)?,
    })
}
