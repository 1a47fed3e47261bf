//! Consumption event and diary row models.
//!
//! Timestamps are naive UTC, matching SQLite `CURRENT_TIMESTAMP`.

use crate::model::food::{FoodId, UnitMode};
use crate::model::nutrition::Macros;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A recorded amount of a food eaten at a point in time.
///
/// `food_id` is not checked against the catalog; dangling references are
/// dropped by the diary join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionEvent {
    pub food_id: FoodId,
    pub time: NaiveDateTime,
    pub amount: f64,
}

/// One consumption event joined with its food definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryRow {
    pub name: String,
    pub unit_mode: UnitMode,
    pub amount: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub time: NaiveDateTime,
}

impl DiaryRow {
    /// Food macros per reference quantity, not scaled by `amount`.
    pub fn macros(&self) -> Macros {
        Macros::new(self.carbs, self.protein, self.fat)
    }

    pub fn calories(&self) -> f64 {
        self.macros().calories()
    }

    pub fn amount_label(&self) -> String {
        self.unit_mode.format_amount(self.amount)
    }

    /// Time of day as `HH:MM`.
    pub fn time_of_day(&self) -> String {
        self.time.format("%H:%M").to_string()
    }
}
