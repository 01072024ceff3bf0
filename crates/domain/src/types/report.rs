//! Report output types
//!
//! A `ReportView` is a derived snapshot produced on demand by the report
//! builder. Nothing in here is persisted; the host recomputes views whenever
//! the underlying collections, filter or sort change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::expense::Expense;
use crate::types::order::ServiceOrder;

/// One bucket of a grouped aggregation (chart slice or ranked-table row)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSlice {
    pub label: String,
    pub count: u64,
    pub sum: f64,
}

impl GroupSlice {
    pub fn counted(label: impl Into<String>, count: u64) -> Self {
        Self { label: label.into(), count, sum: 0.0 }
    }

    pub fn summed(label: impl Into<String>, sum: f64) -> Self {
        Self { label: label.into(), count: 0, sum }
    }
}

/// Scalar KPIs computed over a filtered view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportKpis {
    /// Orders in scope
    pub total_count: u64,
    /// Sum of expense values in scope
    pub total_spend: f64,
    /// `total_spend / total_count`, 0 when there are no orders
    pub avg_ticket: f64,
    /// PMA: median time-to-resolution in days across closed orders
    pub median_resolution_days: f64,
}

/// Composed output of a named report query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportView {
    pub filtered_orders: Vec<ServiceOrder>,
    pub filtered_expenses: Vec<Expense>,
    /// Grouping name ("by_status", "by_month", ...) to its buckets
    pub groupings: BTreeMap<String, Vec<GroupSlice>>,
    pub kpis: ReportKpis,
}

/// Closed-orders table row: an archived order with its joined linked cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClosedOrderRow {
    pub order: ServiceOrder,
    pub total_cost: f64,
}
