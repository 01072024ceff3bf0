//! # MaintDesk Domain
//!
//! Business domain types and models for MaintDesk.
//!
//! This crate contains:
//! - Domain data types (ServiceOrder, Expense, User, HistoryLog)
//! - Domain error types and Result definitions
//! - Filter, sort and report value objects
//!
//! ## Architecture
//! - No dependencies on other MaintDesk crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
