//! Lifecycle service - core business logic
//!
//! All operations are pure transformations: the input order is never
//! mutated, and a failed call leaves the caller's collection untouched.
//! Persisting the returned snapshot is the host's responsibility.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use maintdesk_domain::{HistoryLog, MaintDeskError, OsStatus, Result, ServiceOrder, User};
use tracing::debug;

use crate::ports::Clock;

/// Days between two instants, rounded up.
///
/// `ceil(|end - start| / 1 day)`. Shared by card display and the PMA
/// median so reports stay consistent with individual order displays.
pub fn duration_between(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let secs = (end - start).num_seconds().unsigned_abs();
    secs.div_ceil(86_400) as i64
}

/// Order lifecycle service
pub struct LifecycleService {
    clock: Arc<dyn Clock>,
}

impl LifecycleService {
    /// Create a new lifecycle service
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Apply a status transition, returning the updated order snapshot.
    ///
    /// Rules:
    /// - archived orders reject every transition with `InvalidTransition`
    /// - a same-status move is a no-op (no history entry)
    /// - entering a terminal status stamps `date_closed` when unset
    /// - leaving a terminal status clears `date_closed`
    ///
    /// Any status-to-status combination is otherwise permitted; the state
    /// graph is intentionally permissive (including `Done → Open`).
    pub fn transition(
        &self,
        order: &ServiceOrder,
        new_status: OsStatus,
        actor: &User,
    ) -> Result<ServiceOrder> {
        if order.archived {
            return Err(MaintDeskError::InvalidTransition(format!(
                "order {} is archived and read-only",
                order.id
            )));
        }

        if order.status == new_status {
            return Ok(order.clone());
        }

        let mut updated = order.clone();
        updated.status = new_status;
        updated.date_closed = if new_status.is_terminal() {
            order.date_closed.or_else(|| Some(self.clock.now()))
        } else {
            None
        };
        updated.history.push(self.log_entry(
            format!("Status alterado para {} por {}", new_status.label(), actor.name),
            actor,
        ));

        debug!(
            order_id = %order.id,
            from = %order.status,
            to = %new_status,
            "order status transition"
        );
        Ok(updated)
    }

    /// Archive (document) a closed order. One-way: there is no unarchive.
    ///
    /// Fails with `NotArchivable` unless the order is in a terminal status.
    /// Archiving an already-archived order is a no-op.
    pub fn archive(&self, order: &ServiceOrder, actor: &User) -> Result<ServiceOrder> {
        if !order.status.is_terminal() {
            return Err(MaintDeskError::NotArchivable(format!(
                "order {} is still {}",
                order.id, order.status
            )));
        }

        if order.archived {
            return Ok(order.clone());
        }

        let mut updated = order.clone();
        updated.archived = true;
        updated
            .history
            .push(self.log_entry(format!("OS documentada e arquivada por {}", actor.name), actor));

        debug!(order_id = %order.id, "order archived");
        Ok(updated)
    }

    /// Elapsed days for an order: from `date_opened` to `date_closed` when
    /// closed, otherwise to `as_of` (or the injected clock's now).
    pub fn duration_days(&self, order: &ServiceOrder, as_of: Option<DateTime<Utc>>) -> i64 {
        let end = order.date_closed.or(as_of).unwrap_or_else(|| self.clock.now());
        duration_between(order.date_opened, end)
    }

    fn log_entry(&self, message: String, actor: &User) -> HistoryLog {
        HistoryLog {
            id: uuid::Uuid::now_v7().to_string(),
            date: self.clock.now(),
            message,
            user_id: Some(actor.id.clone()),
        }
    }
}
