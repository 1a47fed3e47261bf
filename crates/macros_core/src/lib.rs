//! Core logic for the macro diary.
//! Storage, domain records and reporting live here; the CLI only prompts
//! and renders.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::consumption::{ConsumptionEvent, DiaryRow};
pub use model::food::{FoodDefinition, FoodId, NewFood, UnitMode};
pub use model::nutrition::{to_calories, MacroGoals, Macros};
pub use model::progress::{ProgressIndicator, BAR_WIDTH};
pub use repo::consumption_repo::{ConsumptionRepository, SqliteConsumptionRepository};
pub use repo::food_repo::{FoodRepository, SqliteFoodRepository};
pub use repo::{RepoError, RepoResult};
pub use service::catalog_service::CatalogService;
pub use service::diary_service::{report_window, DiaryReport, DiaryService, DiaryTotals};
pub use service::recorder_service::RecorderService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
