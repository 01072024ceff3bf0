//! # MaintDesk Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The order lifecycle state machine (status transitions, archival)
//! - The derived-data pipeline: filter → sort/aggregate → report views
//! - Port/adapter interfaces (traits) for external collaborators
//!
//! ## Architecture Principles
//! - Only depends on `maintdesk-domain`
//! - No database, HTTP, or platform code
//! - All external dependencies via traits
//! - Synchronous by design: every operation is a pure function or a
//!   single-mutation transformation over in-memory collections

pub mod aggregate;
pub mod filter;
pub mod lifecycle;
pub mod linkage;
pub mod reports;
pub mod sort;

// Infrastructure ports
pub mod ports;

// Re-export specific items to avoid ambiguity
pub use lifecycle::history::group_history_by_day;
pub use lifecycle::LifecycleService;
pub use ports::{Clock, ExpenseSource, OrderSource, SystemClock, UserDirectory};
pub use reports::ReportBuilder;
pub use sort::SortContext;
