//! Goal progress indicators rendered as fixed-width bars.

use serde::{Deserialize, Serialize};

/// Number of cells in a progress bar.
pub const BAR_WIDTH: usize = 20;

/// Achieved quantity measured against a goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    pub label: String,
    pub achieved: f64,
    pub goal: f64,
}

impl ProgressIndicator {
    pub fn new(label: impl Into<String>, achieved: f64, goal: f64) -> Self {
        Self {
            label: label.into(),
            achieved,
            goal,
        }
    }

    /// Achieved/goal clamped to `[0.0, 1.0]`.
    ///
    /// A non-positive goal counts as met as soon as anything was achieved.
    pub fn ratio(&self) -> f64 {
        if self.goal <= 0.0 {
            return if self.achieved > 0.0 { 1.0 } else { 0.0 };
        }
        clamp_ratio(self.achieved / self.goal)
    }

    pub fn achieved_cells(&self) -> usize {
        cells_for_ratio(self.ratio())
    }

    pub fn remaining_cells(&self) -> usize {
        BAR_WIDTH - self.achieved_cells()
    }

    /// Achieved quantity truncated toward zero.
    pub fn achieved_whole(&self) -> i64 {
        self.achieved.trunc() as i64
    }

    /// Goal truncated toward zero.
    pub fn goal_whole(&self) -> i64 {
        self.goal.trunc() as i64
    }
}

/// Clamps a ratio to `[0.0, 1.0]`; NaN maps to 0.
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        return 0.0;
    }
    ratio.clamp(0.0, 1.0)
}

/// Whole achieved cells for a ratio, truncated.
pub fn cells_for_ratio(ratio: f64) -> usize {
    (clamp_ratio(ratio) * BAR_WIDTH as f64).trunc() as usize
}
