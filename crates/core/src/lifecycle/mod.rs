//! Order lifecycle: status transitions, archival and duration metrics

pub mod history;
mod service;

pub use service::{duration_between, LifecycleService};
