//! Diary report use-case service.
//!
//! # Responsibility
//! - Select the rolling 24-hour window and aggregate it against goals.
//!
//! # Invariants
//! - Totals add each row's food macros as stored, unscaled by the consumed
//!   amount. Reports of existing diaries depend on these numbers.
//! - The report is rebuilt from storage on every call; nothing is cached.

use crate::model::consumption::DiaryRow;
use crate::model::nutrition::{MacroGoals, Macros};
use crate::model::progress::ProgressIndicator;
use crate::repo::consumption_repo::ConsumptionRepository;
use crate::repo::RepoResult;
use chrono::{Duration, NaiveDateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Aggregated intake over the report window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DiaryTotals {
    pub calories: f64,
    pub macros: Macros,
}

impl DiaryTotals {
    fn add_row(&mut self, row: &DiaryRow) {
        self.calories += row.calories();
        self.macros.carbs += row.carbs;
        self.macros.protein += row.protein;
        self.macros.fat += row.fat;
    }
}

/// Report for one diary request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryReport {
    pub rows: Vec<DiaryRow>,
    pub totals: DiaryTotals,
    pub goals: MacroGoals,
}

impl DiaryReport {
    /// Calories, carbs, protein and fat indicators, in display order.
    pub fn progress(&self) -> Vec<ProgressIndicator> {
        vec![
            ProgressIndicator::new("Calories", self.totals.calories, self.goals.calories()),
            ProgressIndicator::new("Carbs", self.totals.macros.carbs, self.goals.macros.carbs),
            ProgressIndicator::new(
                "Protein",
                self.totals.macros.protein,
                self.goals.macros.protein,
            ),
            ProgressIndicator::new("Fat", self.totals.macros.fat, self.goals.macros.fat),
        ]
    }
}

/// Length of the rolling report window.
pub fn report_window() -> Duration {
    Duration::days(1)
}

/// Builds diary reports over a rolling window.
pub struct DiaryService<R: ConsumptionRepository> {
    repo: R,
    goals: MacroGoals,
}

impl<R: ConsumptionRepository> DiaryService<R> {
    /// Creates a service reporting against the default goals.
    pub fn new(repo: R) -> Self {
        Self::with_goals(repo, MacroGoals::default())
    }

    pub fn with_goals(repo: R, goals: MacroGoals) -> Self {
        Self { repo, goals }
    }

    /// Report for the 24 hours before now (UTC).
    pub fn show_diary(&self) -> RepoResult<DiaryReport> {
        self.show_diary_at(Utc::now().naive_utc())
    }

    /// Report for events with `time > now - 1 day`.
    pub fn show_diary_at(&self, now: NaiveDateTime) -> RepoResult<DiaryReport> {
        let rows = self.repo.list_diary_rows_since(now - report_window())?;

        let mut totals = DiaryTotals::default();
        for row in &rows {
            totals.add_row(row);
        }

        info!(
            "event=diary_build module=service status=ok rows={}",
            rows.len()
        );
        Ok(DiaryReport {
            rows,
            totals,
            goals: self.goals,
        })
    }
}
