//! Filter and sort value objects
//!
//! A `ReportFilter` is an immutable description of what a view wants to see.
//! Empty sets always mean "no restriction", never "match nothing". The
//! `archived` flag has no default: each report query decides how to apply it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::order::{OsType, Unit};

/// Composable, immutable filter over orders and expenses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Calendar year of `date_opened` (orders) / `date` (expenses)
    pub year: Option<i32>,
    /// Zero-based months (0 = January); empty = all months
    pub months: BTreeSet<u32>,
    /// Empty = all units
    pub units: BTreeSet<Unit>,
    /// Empty = all types
    pub types: BTreeSet<OsType>,
    /// Owner user ids; empty = all owners
    pub owners: BTreeSet<String>,
    /// Case-insensitive substring match, OR-ed across a per-collection field set
    pub search_text: Option<String>,
    /// Exact match when set; callers decide the default
    pub archived: Option<bool>,
}

impl ReportFilter {
    /// Convenience constructor for the common year-scoped filter.
    pub fn for_year(year: i32) -> Self {
        Self { year: Some(year), ..Self::default() }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sortable columns for order collections.
///
/// `OwnerName` and `TotalCost` are synthetic: they require a join against
/// the user directory and the expense collection respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSortKey {
    Id,
    Title,
    Unit,
    Priority,
    Status,
    DateOpened,
    DateClosed,
    OwnerName,
    TotalCost,
}

/// Sortable columns for expense collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseSortKey {
    Id,
    Item,
    Value,
    Date,
    Unit,
    PaymentMethod,
    LinkedOrder,
}

/// An active sort: one key, one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    pub fn asc(key: K) -> Self {
        Self { key, direction: SortDirection::Asc }
    }

    pub fn desc(key: K) -> Self {
        Self { key, direction: SortDirection::Desc }
    }

    /// Header-click rule: selecting the active key flips direction,
    /// selecting a new key resets to ascending.
    pub fn toggle(current: Option<&SortSpec<K>>, key: K) -> Self {
        match current {
            Some(spec) if spec.key == key => Self { key, direction: spec.direction.flip() },
            _ => Self::asc(key),
        }
    }
}
