//! Diary use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the four menu operations.
//! - Keep the CLI decoupled from SQL and column encodings.

pub mod catalog_service;
pub mod diary_service;
pub mod recorder_service;
