//! Common data types used throughout the application

pub mod expense;
pub mod filter;
pub mod order;
pub mod report;
pub mod user;

pub use expense::{Expense, ExpenseCategory, PaymentMethod};
pub use filter::{ExpenseSortKey, OrderSortKey, ReportFilter, SortDirection, SortSpec};
pub use order::{DayGroup, HistoryLog, OsPriority, OsStatus, OsType, ServiceOrder, Unit};
pub use report::{ClosedOrderRow, GroupSlice, ReportKpis, ReportView};
pub use user::User;
