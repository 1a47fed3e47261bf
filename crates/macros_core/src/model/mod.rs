//! Diary domain model.
//!
//! # Responsibility
//! - Define the records decoded at the store boundary.
//! - Hold the pure nutrition math shared by services and the CLI.
//!
//! # Invariants
//! - Food definitions are immutable once stored.
//! - Consumption events reference foods by id only; macros are never copied
//!   into an event.

pub mod consumption;
pub mod food;
pub mod nutrition;
pub mod progress;
