//! Food definition model.
//!
//! # Invariants
//! - `id` is assigned by the store and never reused.
//! - Macro values are grams per reference quantity given by `unit_mode`.

use crate::model::nutrition::Macros;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned food identity.
pub type FoodId = i64;

/// Reference quantity that a food's macros are expressed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitMode {
    /// Macros are grams per 100 grams; amounts are grams.
    #[serde(rename = "per_100_grams")]
    Per100Grams,
    /// Macros are grams per discrete unit; amounts are unit counts.
    PerUnit,
}

impl UnitMode {
    /// Suffix used when displaying a consumed amount.
    pub fn amount_suffix(self) -> &'static str {
        match self {
            Self::Per100Grams => "g",
            Self::PerUnit => "units",
        }
    }

    /// Formats `amount` qualified by this mode, e.g. `200 g` or `3 units`.
    pub fn format_amount(self, amount: f64) -> String {
        format!("{amount} {}", self.amount_suffix())
    }

    pub fn is_per_100_grams(self) -> bool {
        matches!(self, Self::Per100Grams)
    }
}

impl Display for UnitMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Per100Grams => write!(f, "per 100g"),
            Self::PerUnit => write!(f, "per unit"),
        }
    }
}

/// Insert shape for a food definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFood {
    pub name: String,
    pub unit_mode: UnitMode,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl NewFood {
    pub fn new(
        name: impl Into<String>,
        unit_mode: UnitMode,
        carbs: f64,
        protein: f64,
        fat: f64,
    ) -> Self {
        Self {
            name: name.into(),
            unit_mode,
            carbs,
            protein,
            fat,
        }
    }
}

/// Stored food definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDefinition {
    pub id: FoodId,
    pub name: String,
    pub unit_mode: UnitMode,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl FoodDefinition {
    pub fn macros(&self) -> Macros {
        Macros::new(self.carbs, self.protein, self.fat)
    }
}
