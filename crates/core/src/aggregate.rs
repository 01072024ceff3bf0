//! Aggregation primitives: counts, sums, month series and scalar KPIs
//!
//! Everything here operates on already-filtered slices and returns plain
//! values; composition into named report views lives in `reports`.

use std::collections::BTreeMap;

use chrono::Datelike;
use maintdesk_domain::{
    Expense, ExpenseCategory, GroupSlice, OsStatus, OsType, ServiceOrder, Unit,
};

use crate::lifecycle::duration_between;

/// Month labels in product display order, indexed by `month0`.
pub const MONTH_LABELS: [&str; 12] =
    ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

/// Maximum distinct units shown before the tail collapses into "Outros".
const UNIT_BUCKET_LIMIT: usize = 6;

/// Order counts per status, only statuses that actually occur.
pub fn count_by_status(orders: &[ServiceOrder]) -> BTreeMap<OsStatus, u64> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    counts
}

/// Order counts per type, only types that actually occur.
pub fn count_by_type(orders: &[ServiceOrder]) -> BTreeMap<OsType, u64> {
    let mut counts = BTreeMap::new();
    for order in orders {
        *counts.entry(order.os_type).or_insert(0) += 1;
    }
    counts
}

/// Order counts per unit, ranked by count descending.
///
/// When more than [`UNIT_BUCKET_LIMIT`] distinct units occur, the top five
/// keep their own buckets and the remainder collapses into a trailing
/// "Outros" slice. Ties keep first-appearance order (the ranking sort is
/// stable).
pub fn count_by_unit(orders: &[ServiceOrder]) -> Vec<GroupSlice> {
    let mut labels: Vec<&'static str> = Vec::new();
    let mut counts: Vec<u64> = Vec::new();
    for order in orders {
        let label = order.unit.label();
        match labels.iter().position(|l| *l == label) {
            Some(i) => counts[i] += 1,
            None => {
                labels.push(label);
                counts.push(1);
            }
        }
    }

    let mut slices: Vec<GroupSlice> = labels
        .into_iter()
        .zip(counts)
        .map(|(label, count)| GroupSlice::counted(label, count))
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count));

    if slices.len() > UNIT_BUCKET_LIMIT {
        let tail: u64 = slices[UNIT_BUCKET_LIMIT - 1..].iter().map(|s| s.count).sum();
        slices.truncate(UNIT_BUCKET_LIMIT - 1);
        slices.push(GroupSlice::counted("Outros", tail));
    }
    slices
}

/// Spend per expense category, ranked by sum descending, only categories
/// that actually occur.
pub fn sum_by_category(expenses: &[Expense]) -> Vec<GroupSlice> {
    let mut sums: BTreeMap<ExpenseCategory, f64> = BTreeMap::new();
    for expense in expenses {
        *sums.entry(expense.category).or_insert(0.0) += expense.value;
    }

    let mut slices: Vec<GroupSlice> =
        sums.into_iter().map(|(cat, sum)| GroupSlice::summed(cat.label(), sum)).collect();
    slices.sort_by(|a, b| b.sum.total_cmp(&a.sum));
    slices
}

/// Spend per unit in fixed product order, zero-filled for units with no
/// expenses.
pub fn sum_by_unit(expenses: &[Expense]) -> Vec<GroupSlice> {
    Unit::ALL
        .iter()
        .map(|unit| {
            let sum =
                expenses.iter().filter(|e| e.unit == *unit).map(|e| e.value).sum::<f64>();
            GroupSlice::summed(unit.label(), sum)
        })
        .collect()
}

/// Monthly spend series, Jan through Dez, zero-filled.
///
/// When `months` names a subset (0-based indices), the series narrows to
/// those buckets in calendar order; an empty subset means all twelve.
pub fn sum_by_month(
    expenses: &[Expense],
    months: &std::collections::BTreeSet<u32>,
) -> Vec<GroupSlice> {
    let mut buckets = [0.0f64; 12];
    for expense in expenses {
        buckets[expense.date.month0() as usize] += expense.value;
    }

    (0u32..12)
        .filter(|m| months.is_empty() || months.contains(m))
        .map(|m| GroupSlice::summed(MONTH_LABELS[m as usize], buckets[m as usize]))
        .collect()
}

/// Total spend over the expense slice.
pub fn total_spend(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.value).sum()
}

/// Average spend per order; 0 when there are no orders.
pub fn average_ticket(total_spend: f64, order_count: u64) -> f64 {
    if order_count == 0 {
        return 0.0;
    }
    total_spend / order_count as f64
}

/// PMA: median time-to-resolution in days across closed orders.
///
/// Only orders with a `date_closed` participate. Odd counts take the
/// middle value; even counts take the mean of the two middle values,
/// rounded to one decimal. No closed orders yields 0.
pub fn median_resolution_days(orders: &[ServiceOrder]) -> f64 {
    let mut durations: Vec<i64> = orders
        .iter()
        .filter_map(|o| o.date_closed.map(|closed| duration_between(o.date_opened, closed)))
        .collect();
    if durations.is_empty() {
        return 0.0;
    }
    durations.sort_unstable();

    let mid = durations.len() / 2;
    if durations.len() % 2 == 1 {
        durations[mid] as f64
    } else {
        let mean = (durations[mid - 1] + durations[mid]) as f64 / 2.0;
        (mean * 10.0).round() / 10.0
    }
}

/// Share of orders in `Done` status, as a 0..=100 percentage.
pub fn completion_rate(orders: &[ServiceOrder]) -> f64 {
    if orders.is_empty() {
        return 0.0;
    }
    let done = orders.iter().filter(|o| o.status == OsStatus::Done).count();
    done as f64 / orders.len() as f64 * 100.0
}

/// Distinct units with at least one order in the slice.
pub fn active_unit_count(orders: &[ServiceOrder]) -> usize {
    let mut seen: Vec<Unit> = Vec::new();
    for order in orders {
        if !seen.contains(&order.unit) {
            seen.push(order.unit);
        }
    }
    seen.len()
}
