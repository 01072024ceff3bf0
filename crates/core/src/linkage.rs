//! Linkage resolver: order ↔ expense joins and visibility composition
//!
//! Expenses reference orders through a weak `linked_os_id`; nothing here
//! owns either collection. Lookup helpers raise `NotFound` for absent ids,
//! while the set-valued resolvers degrade to empty results.

use maintdesk_domain::{Expense, MaintDeskError, Result, ServiceOrder, User};

/// Expenses linked to the given order id, in input order.
pub fn expenses_for(order_id: &str, expenses: &[Expense]) -> Vec<Expense> {
    expenses.iter().filter(|e| e.linked_os_id.as_deref() == Some(order_id)).cloned().collect()
}

/// Sum of expense values linked to the given order id.
pub fn total_cost_for(order_id: &str, expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.linked_os_id.as_deref() == Some(order_id))
        .map(|e| e.value)
        .sum()
}

/// Orders visible to a user: admins see everything, everyone else only the
/// orders they own. Hosts apply this before handing collections to the
/// filter engine; the core never filters by permission on its own.
pub fn visible_orders(user: &User, orders: &[ServiceOrder]) -> Vec<ServiceOrder> {
    if user.is_admin {
        return orders.to_vec();
    }
    orders.iter().filter(|o| o.owner_id == user.id).cloned().collect()
}

/// Expenses linked to an order present in the visible-order set.
///
/// Unlinked expenses are not visible through this path; role scoping
/// composes transitively from orders to their costs.
pub fn visible_expenses(visible: &[ServiceOrder], expenses: &[Expense]) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| {
            e.linked_os_id.as_deref().is_some_and(|id| visible.iter().any(|o| o.id == id))
        })
        .cloned()
        .collect()
}

/// Find an order by id.
pub fn find_order<'a>(id: &str, orders: &'a [ServiceOrder]) -> Result<&'a ServiceOrder> {
    orders
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| MaintDeskError::NotFound(format!("order {id}")))
}

/// Find an expense by id.
pub fn find_expense<'a>(id: &str, expenses: &'a [Expense]) -> Result<&'a Expense> {
    expenses
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| MaintDeskError::NotFound(format!("expense {id}")))
}
