//! Filter engine: composable predicates over orders and expenses
//!
//! Every predicate is AND-combined; set-valued dimensions treat the empty
//! set as "no restriction". Filtering is pure, preserves input ordering and
//! never errors — "no data for this period" is a normal outcome.

use chrono::Datelike;
use maintdesk_domain::{Expense, ReportFilter, ServiceOrder};

/// Apply a filter to an order collection.
///
/// Predicates: year/months against `date_opened`, unit/type/owner
/// set-membership, case-insensitive search across id, title and unit label,
/// and an exact `archived` match when the filter sets one.
pub fn filter_orders(orders: &[ServiceOrder], filter: &ReportFilter) -> Vec<ServiceOrder> {
    let needle = search_needle(filter);
    orders
        .iter()
        .filter(|o| {
            filter.year.map_or(true, |y| o.date_opened.year() == y)
                && (filter.months.is_empty() || filter.months.contains(&o.date_opened.month0()))
                && (filter.units.is_empty() || filter.units.contains(&o.unit))
                && (filter.types.is_empty() || filter.types.contains(&o.os_type))
                && (filter.owners.is_empty() || filter.owners.contains(&o.owner_id))
                && needle.as_deref().map_or(true, |n| {
                    matches_any(n, [o.id.as_str(), o.title.as_str(), o.unit.label()])
                })
                && filter.archived.map_or(true, |flag| o.archived == flag)
        })
        .cloned()
        .collect()
}

/// Apply a filter to an expense collection.
///
/// Predicates: year/months against `date`, unit set-membership, and search
/// across id, item, supplier and unit label. Type/owner/archived dimensions
/// do not exist on expenses and are ignored.
pub fn filter_expenses(expenses: &[Expense], filter: &ReportFilter) -> Vec<Expense> {
    let needle = search_needle(filter);
    expenses
        .iter()
        .filter(|e| {
            filter.year.map_or(true, |y| e.date.year() == y)
                && (filter.months.is_empty() || filter.months.contains(&e.date.month0()))
                && (filter.units.is_empty() || filter.units.contains(&e.unit))
                && needle.as_deref().map_or(true, |n| {
                    matches_any(
                        n,
                        [e.id.as_str(), e.item.as_str(), e.supplier.as_str(), e.unit.label()],
                    )
                })
        })
        .cloned()
        .collect()
}

fn search_needle(filter: &ReportFilter) -> Option<String> {
    filter
        .search_text
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

fn matches_any<'a>(needle: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    fields.into_iter().any(|field| field.to_lowercase().contains(needle))
}
