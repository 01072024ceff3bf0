//! Sort engine: stable, single-key sorts with synthetic join keys
//!
//! Sorting is stable (`slice::sort_by`), so items with equal keys keep
//! their relative order from the filtered input — several table tie-break
//! expectations rely on this. Missing optional values never error: an
//! absent `date_closed` sorts as the epoch, an absent linked-order id as
//! the empty string.

use std::cmp::Ordering;

use maintdesk_domain::{
    Expense, ExpenseSortKey, OrderSortKey, ServiceOrder, SortDirection, SortSpec, User,
};

use crate::linkage;

/// Lookup context for synthetic sort keys.
///
/// `OwnerName` joins against the user directory, `TotalCost` against the
/// expense collection.
pub struct SortContext<'a> {
    pub users: &'a [User],
    pub expenses: &'a [Expense],
}

impl<'a> SortContext<'a> {
    pub fn new(users: &'a [User], expenses: &'a [Expense]) -> Self {
        Self { users, expenses }
    }

    fn owner_name(&self, order: &ServiceOrder) -> String {
        self.users
            .iter()
            .find(|u| u.id == order.owner_id)
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }

    fn total_cost(&self, order: &ServiceOrder) -> f64 {
        linkage::total_cost_for(&order.id, self.expenses)
    }
}

/// Stable sort over orders by the given spec.
pub fn sort_orders(
    mut orders: Vec<ServiceOrder>,
    spec: &SortSpec<OrderSortKey>,
    ctx: &SortContext<'_>,
) -> Vec<ServiceOrder> {
    orders.sort_by(|a, b| {
        let ord = match spec.key {
            OrderSortKey::Id => cmp_ci(&a.id, &b.id),
            OrderSortKey::Title => cmp_ci(&a.title, &b.title),
            OrderSortKey::Unit => cmp_ci(a.unit.label(), b.unit.label()),
            OrderSortKey::Priority => a.priority.weight().cmp(&b.priority.weight()),
            OrderSortKey::Status => cmp_ci(a.status.label(), b.status.label()),
            OrderSortKey::DateOpened => a.date_opened.cmp(&b.date_opened),
            OrderSortKey::DateClosed => {
                epoch_millis(a.date_closed).cmp(&epoch_millis(b.date_closed))
            }
            OrderSortKey::OwnerName => cmp_ci(&ctx.owner_name(a), &ctx.owner_name(b)),
            OrderSortKey::TotalCost => ctx.total_cost(a).total_cmp(&ctx.total_cost(b)),
        };
        directed(ord, spec.direction)
    });
    orders
}

/// Stable sort over expenses by the given spec.
pub fn sort_expenses(
    mut expenses: Vec<Expense>,
    spec: &SortSpec<ExpenseSortKey>,
) -> Vec<Expense> {
    expenses.sort_by(|a, b| {
        let ord = match spec.key {
            ExpenseSortKey::Id => cmp_ci(&a.id, &b.id),
            ExpenseSortKey::Item => cmp_ci(&a.item, &b.item),
            ExpenseSortKey::Value => a.value.total_cmp(&b.value),
            ExpenseSortKey::Date => a.date.cmp(&b.date),
            ExpenseSortKey::Unit => cmp_ci(a.unit.label(), b.unit.label()),
            ExpenseSortKey::PaymentMethod => {
                cmp_ci(a.payment_method.label(), b.payment_method.label())
            }
            ExpenseSortKey::LinkedOrder => cmp_ci(
                a.linked_os_id.as_deref().unwrap_or(""),
                b.linked_os_id.as_deref().unwrap_or(""),
            ),
        };
        directed(ord, spec.direction)
    });
    expenses
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// Missing dates sort as the lowest possible value rather than erroring.
fn epoch_millis(date: Option<chrono::DateTime<chrono::Utc>>) -> i64 {
    date.map(|d| d.timestamp_millis()).unwrap_or(0)
}

// Equal stays equal under reversal, so descending sorts remain stable.
fn directed(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}
