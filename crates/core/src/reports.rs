//! Report builder: named queries composing filter, linkage, sort and
//! aggregation into view snapshots
//!
//! The builder holds no state and no collections; hosts pass the current
//! order/expense/user slices on every call and re-invoke whenever anything
//! underneath changes.

use maintdesk_domain::{
    ClosedOrderRow, Expense, ExpenseSortKey, GroupSlice, OrderSortKey, ReportFilter, ReportKpis,
    ReportView, ServiceOrder, SortSpec, User,
};
use tracing::debug;

use crate::{aggregate, filter, linkage, sort};

/// Stateless report query engine.
#[derive(Debug, Default)]
pub struct ReportBuilder;

impl ReportBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Managerial view: order-centric groupings and KPIs.
    ///
    /// The filter's archived dimension is ignored here; active and
    /// documented orders both count toward the managerial picture.
    pub fn managerial(
        &self,
        orders: &[ServiceOrder],
        expenses: &[Expense],
        filter: &ReportFilter,
    ) -> ReportView {
        let scope = ReportFilter { archived: None, ..filter.clone() };
        let filtered_orders = filter::filter_orders(orders, &scope);
        let filtered_expenses = filter::filter_expenses(expenses, &scope);

        let mut view = ReportView {
            kpis: kpis(&filtered_orders, &filtered_expenses),
            ..ReportView::default()
        };
        view.groupings.insert("by_status".to_string(), status_slices(&filtered_orders));
        view.groupings.insert("by_type".to_string(), type_slices(&filtered_orders));
        view.groupings
            .insert("by_unit".to_string(), aggregate::count_by_unit(&filtered_orders));

        debug!(orders = filtered_orders.len(), "managerial view built");
        view.filtered_orders = filtered_orders;
        view.filtered_expenses = filtered_expenses;
        view
    }

    /// Financial view: expense-centric groupings and KPIs.
    pub fn financial(
        &self,
        orders: &[ServiceOrder],
        expenses: &[Expense],
        filter: &ReportFilter,
    ) -> ReportView {
        let filtered_orders = filter::filter_orders(orders, filter);
        let filtered_expenses = filter::filter_expenses(expenses, filter);

        let mut view = ReportView {
            kpis: kpis(&filtered_orders, &filtered_expenses),
            ..ReportView::default()
        };
        view.groupings
            .insert("by_category".to_string(), aggregate::sum_by_category(&filtered_expenses));
        view.groupings
            .insert("by_unit".to_string(), aggregate::sum_by_unit(&filtered_expenses));
        view.groupings.insert(
            "by_month".to_string(),
            aggregate::sum_by_month(&filtered_expenses, &filter.months),
        );

        debug!(expenses = filtered_expenses.len(), "financial view built");
        view.filtered_orders = filtered_orders;
        view.filtered_expenses = filtered_expenses;
        view
    }

    /// Closed-orders table: documented orders with their joined linked cost.
    ///
    /// Always restricted to `archived == true` regardless of the incoming
    /// filter. Default sort is `DateClosed` descending.
    pub fn closed_orders(
        &self,
        orders: &[ServiceOrder],
        expenses: &[Expense],
        users: &[User],
        filter: &ReportFilter,
        sort_spec: Option<&SortSpec<OrderSortKey>>,
    ) -> Vec<ClosedOrderRow> {
        let scope = ReportFilter { archived: Some(true), ..filter.clone() };
        let filtered = filter::filter_orders(orders, &scope);

        let default_spec = SortSpec::desc(OrderSortKey::DateClosed);
        let spec = sort_spec.unwrap_or(&default_spec);
        let ctx = sort::SortContext::new(users, expenses);
        let sorted = sort::sort_orders(filtered, spec, &ctx);

        debug!(rows = sorted.len(), "closed-orders table built");
        sorted
            .into_iter()
            .map(|order| {
                let total_cost = linkage::total_cost_for(&order.id, expenses);
                ClosedOrderRow { order, total_cost }
            })
            .collect()
    }

    /// Financial-records table: expenses whose linked order is documented.
    ///
    /// Unlinked expenses and expenses linked to active orders are out of
    /// scope. Default sort is `Date` descending.
    pub fn financial_records(
        &self,
        orders: &[ServiceOrder],
        expenses: &[Expense],
        filter: &ReportFilter,
        sort_spec: Option<&SortSpec<ExpenseSortKey>>,
    ) -> Vec<Expense> {
        let documented: Vec<ServiceOrder> =
            orders.iter().filter(|o| o.archived).cloned().collect();
        let linked = linkage::visible_expenses(&documented, expenses);
        let filtered = filter::filter_expenses(&linked, filter);

        let default_spec = SortSpec::desc(ExpenseSortKey::Date);
        let spec = sort_spec.unwrap_or(&default_spec);
        let sorted = sort::sort_expenses(filtered, spec);

        debug!(rows = sorted.len(), "financial-records table built");
        sorted
    }
}

fn kpis(orders: &[ServiceOrder], expenses: &[Expense]) -> ReportKpis {
    let total_count = orders.len() as u64;
    let total_spend = aggregate::total_spend(expenses);
    ReportKpis {
        total_count,
        total_spend,
        avg_ticket: aggregate::average_ticket(total_spend, total_count),
        median_resolution_days: aggregate::median_resolution_days(orders),
    }
}

// Status slices keep lifecycle order; zero-count buckets are dropped.
fn status_slices(orders: &[ServiceOrder]) -> Vec<GroupSlice> {
    aggregate::count_by_status(orders)
        .into_iter()
        .map(|(status, count)| GroupSlice::counted(status.label(), count))
        .collect()
}

fn type_slices(orders: &[ServiceOrder]) -> Vec<GroupSlice> {
    aggregate::count_by_type(orders)
        .into_iter()
        .map(|(os_type, count)| GroupSlice::counted(os_type.label(), count))
        .collect()
}
