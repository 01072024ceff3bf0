//! Port interfaces for external collaborators
//!
//! These traits define the boundaries between core business logic and the
//! host environment (persistence, user directory, wall clock). The core has
//! no suspension points, so every port is synchronous: hosts that source
//! data remotely fetch a full snapshot first and hand it to the core.

use chrono::{DateTime, Utc};
use maintdesk_domain::{Expense, Result, ServiceOrder, User};

/// Trait for the service-order collection owned by the host.
///
/// Lifecycle operations in this crate are pure transformations; the host is
/// responsible for persisting the transformed order back through `update`.
pub trait OrderSource: Send + Sync {
    /// Full snapshot of all orders
    fn list(&self) -> Result<Vec<ServiceOrder>>;

    /// Persist a new order, returning it with any host-assigned fields
    fn create(&self, order: ServiceOrder) -> Result<ServiceOrder>;

    /// Replace the stored order with the given id
    fn update(&self, order: ServiceOrder) -> Result<ServiceOrder>;

    /// Mark the stored order as archived
    fn archive(&self, id: &str) -> Result<()>;
}

/// Trait for the expense collection owned by the host
pub trait ExpenseSource: Send + Sync {
    fn list(&self) -> Result<Vec<Expense>>;

    fn create(&self, expense: Expense) -> Result<Expense>;

    fn update(&self, expense: Expense) -> Result<Expense>;

    fn delete(&self, id: &str) -> Result<()>;
}

/// Read-only user directory.
///
/// Used for the owner-name sort key and for the visibility scoping hosts
/// apply before invoking the filter engine.
pub trait UserDirectory: Send + Sync {
    fn list(&self) -> Result<Vec<User>>;
}

/// Injectable time source, so transition timestamping and duration metrics
/// stay testable without wall-clock dependence
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation of [`Clock`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
