//! Food catalog repository contracts and SQLite implementation.
//!
//! # Invariants
//! - `foods.is_per_100g` holds exactly `1` (per 100 g) or `0` (per unit).
//! - Listing order is ascending store-assigned id.

use crate::model::food::{FoodDefinition, FoodId, NewFood, UnitMode};
use crate::repo::{RepoError, RepoResult};
use log::{debug, info};
use rusqlite::{params, Connection, Row};

const FOOD_SELECT_SQL: &str = "SELECT
    id,
    name,
    is_per_100g,
    carbs,
    protein,
    fat
FROM foods";

/// Repository interface for the food catalog.
pub trait FoodRepository {
    /// Inserts one food definition and returns its assigned id.
    fn create_food(&self, food: &NewFood) -> RepoResult<FoodId>;
    /// Gets one food definition by id.
    fn get_food(&self, id: FoodId) -> RepoResult<Option<FoodDefinition>>;
    /// Lists every food definition by ascending id.
    fn list_foods(&self) -> RepoResult<Vec<FoodDefinition>>;
}

/// SQLite-backed food repository.
pub struct SqliteFoodRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteFoodRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl FoodRepository for SqliteFoodRepository<'_> {
    fn create_food(&self, food: &NewFood) -> RepoResult<FoodId> {
        self.conn.execute(
            "INSERT INTO foods (name, is_per_100g, carbs, protein, fat)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                food.name.as_str(),
                unit_mode_to_db(food.unit_mode),
                food.carbs,
                food.protein,
                food.fat,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=food_create module=repo status=ok food_id={id}");
        Ok(id)
    }

    fn get_food(&self, id: FoodId) -> RepoResult<Option<FoodDefinition>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FOOD_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_food_row(row)?));
        }

        Ok(None)
    }

    fn list_foods(&self) -> RepoResult<Vec<FoodDefinition>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{FOOD_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut foods = Vec::new();

        while let Some(row) = rows.next()? {
            foods.push(parse_food_row(row)?);
        }

        debug!("event=food_list module=repo status=ok count={}", foods.len());
        Ok(foods)
    }
}

fn parse_food_row(row: &Row<'_>) -> RepoResult<FoodDefinition> {
    let flag: i64 = row.get("is_per_100g")?;
    let unit_mode = parse_unit_mode(flag).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid unit flag `{flag}` in foods.is_per_100g"))
    })?;

    Ok(FoodDefinition {
        id: row.get("id")?,
        name: row.get("name")?,
        unit_mode,
        carbs: row.get("carbs")?,
        protein: row.get("protein")?,
        fat: row.get("fat")?,
    })
}

pub(crate) fn unit_mode_to_db(mode: UnitMode) -> i64 {
    match mode {
        UnitMode::Per100Grams => 1,
        UnitMode::PerUnit => 0,
    }
}

pub(crate) fn parse_unit_mode(value: i64) -> Option<UnitMode> {
    match value {
        1 => Some(UnitMode::Per100Grams),
        0 => Some(UnitMode::PerUnit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_unit_mode, unit_mode_to_db};
    use crate::model::food::UnitMode;

    #[test]
    fn unit_mode_flag_mapping_roundtrips() {
        for mode in [UnitMode::Per100Grams, UnitMode::PerUnit] {
            assert_eq!(parse_unit_mode(unit_mode_to_db(mode)), Some(mode));
        }
        assert_eq!(parse_unit_mode(2), None);
    }
}
