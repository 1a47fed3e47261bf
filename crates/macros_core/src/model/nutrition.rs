//! Macro-nutrient math.

use serde::{Deserialize, Serialize};

/// Energy units per gram of carbohydrate.
pub const CALORIES_PER_GRAM_CARBS: f64 = 4.0;
/// Energy units per gram of protein.
pub const CALORIES_PER_GRAM_PROTEIN: f64 = 4.0;
/// Energy units per gram of fat.
pub const CALORIES_PER_GRAM_FAT: f64 = 9.0;

/// Converts macro grams to energy units: `4 * (carbs + protein) + 9 * fat`.
///
/// Accepts any input, including zero and negative values.
pub fn to_calories(carbs: f64, protein: f64, fat: f64) -> f64 {
    CALORIES_PER_GRAM_CARBS * carbs
        + CALORIES_PER_GRAM_PROTEIN * protein
        + CALORIES_PER_GRAM_FAT * fat
}

/// Carbs/protein/fat grams triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Macros {
    pub fn new(carbs: f64, protein: f64, fat: f64) -> Self {
        Self {
            carbs,
            protein,
            fat,
        }
    }

    pub fn calories(&self) -> f64 {
        to_calories(self.carbs, self.protein, self.fat)
    }
}

/// Daily macro targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroGoals {
    pub macros: Macros,
}

impl MacroGoals {
    pub const DEFAULT_CARBS: f64 = 250.0;
    pub const DEFAULT_PROTEIN: f64 = 150.0;
    pub const DEFAULT_FAT: f64 = 60.0;

    /// Energy goal derived from the macro goals.
    pub fn calories(&self) -> f64 {
        self.macros.calories()
    }
}

impl Default for MacroGoals {
    fn default() -> Self {
        Self {
            macros: Macros::new(
                Self::DEFAULT_CARBS,
                Self::DEFAULT_PROTEIN,
                Self::DEFAULT_FAT,
            ),
        }
    }
}
