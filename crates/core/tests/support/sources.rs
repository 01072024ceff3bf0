//! Mock port implementations for testing
//!
//! In-memory mocks for the order/expense/user ports and a fixed clock,
//! enabling deterministic tests without a host environment.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use maintdesk_core::{Clock, ExpenseSource, OrderSource, UserDirectory};
use maintdesk_domain::{Expense, MaintDeskError, Result, ServiceOrder, User};

/// In-memory mock for [`OrderSource`].
#[derive(Default, Clone)]
pub struct MockOrderSource {
    orders: Arc<Mutex<Vec<ServiceOrder>>>,
}

impl MockOrderSource {
    /// Create a new mock seeded with the provided orders.
    pub fn new(orders: Vec<ServiceOrder>) -> Self {
        Self { orders: Arc::new(Mutex::new(orders)) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<ServiceOrder>>> {
        self.orders.lock().map_err(|_| MaintDeskError::Internal("order store poisoned".into()))
    }
}

impl OrderSource for MockOrderSource {
    fn list(&self) -> Result<Vec<ServiceOrder>> {
        Ok(self.lock()?.clone())
    }

    fn create(&self, order: ServiceOrder) -> Result<ServiceOrder> {
        self.lock()?.push(order.clone());
        Ok(order)
    }

    fn update(&self, order: ServiceOrder) -> Result<ServiceOrder> {
        let mut orders = self.lock()?;
        let slot = orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or_else(|| MaintDeskError::NotFound(format!("order {}", order.id)))?;
        *slot = order.clone();
        Ok(order)
    }

    fn archive(&self, id: &str) -> Result<()> {
        let mut orders = self.lock()?;
        let slot = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| MaintDeskError::NotFound(format!("order {id}")))?;
        slot.archived = true;
        Ok(())
    }
}

/// In-memory mock for [`ExpenseSource`].
#[derive(Default, Clone)]
pub struct MockExpenseSource {
    expenses: Arc<Mutex<Vec<Expense>>>,
}

impl MockExpenseSource {
    /// Create a new mock seeded with the provided expenses.
    pub fn new(expenses: Vec<Expense>) -> Self {
        Self { expenses: Arc::new(Mutex::new(expenses)) }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Expense>>> {
        self.expenses
            .lock()
            .map_err(|_| MaintDeskError::Internal("expense store poisoned".into()))
    }
}

impl ExpenseSource for MockExpenseSource {
    fn list(&self) -> Result<Vec<Expense>> {
        Ok(self.lock()?.clone())
    }

    fn create(&self, expense: Expense) -> Result<Expense> {
        expense.validate()?;
        self.lock()?.push(expense.clone());
        Ok(expense)
    }

    fn update(&self, expense: Expense) -> Result<Expense> {
        expense.validate()?;
        let mut expenses = self.lock()?;
        let slot = expenses
            .iter_mut()
            .find(|e| e.id == expense.id)
            .ok_or_else(|| MaintDeskError::NotFound(format!("expense {}", expense.id)))?;
        *slot = expense.clone();
        Ok(expense)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut expenses = self.lock()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(MaintDeskError::NotFound(format!("expense {id}")));
        }
        Ok(())
    }
}

/// Read-only mock for [`UserDirectory`].
#[derive(Default, Clone)]
pub struct MockUserDirectory {
    users: Arc<Vec<User>>,
}

impl MockUserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users: Arc::new(users) }
    }
}

impl UserDirectory for MockUserDirectory {
    fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.to_vec())
    }
}

/// Deterministic clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
