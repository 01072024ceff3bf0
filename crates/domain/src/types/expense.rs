//! Expense types: cost records optionally linked to a service order

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{MaintDeskError, Result};
use crate::types::order::Unit;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Parts,
    Labor,
    Other,
}

impl ExpenseCategory {
    pub const ALL: [ExpenseCategory; 3] =
        [ExpenseCategory::Parts, ExpenseCategory::Labor, ExpenseCategory::Other];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Parts => "Peças",
            ExpenseCategory::Labor => "Mão de Obra",
            ExpenseCategory::Other => "Outros",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How an expense was paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Boleto,
    Pix,
    CreditCard,
    Other,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "À vista",
            PaymentMethod::Boleto => "Boleto",
            PaymentMethod::Pix => "Pix",
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::Other => "Outros",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A cost record, optionally linked to one service order.
///
/// The link is a weak reference: deleting an order does not cascade to its
/// expenses, and the expense's `unit` is independent of the linked order's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Stable identifier, format `FIN-<seq3>` (e.g. "FIN-001")
    pub id: String,
    pub item: String,
    /// Non-negative amount in a currency-agnostic unit
    pub value: f64,
    pub date: DateTime<Utc>,
    pub supplier: String,
    pub category: ExpenseCategory,
    pub payment_method: PaymentMethod,
    pub unit: Unit,
    pub warranty_parts_months: u32,
    pub warranty_service_months: u32,
    /// Weak reference to the service order this cost belongs to
    pub linked_os_id: Option<String>,
}

impl Expense {
    /// Format an expense id from a sequence number, e.g. `1` → `"FIN-001"`.
    pub fn format_id(seq: u32) -> String {
        format!("FIN-{:03}", seq)
    }

    /// Validate field invariants (`value >= 0`, finite amount).
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(MaintDeskError::InvalidInput(format!(
                "expense {} has invalid value {}",
                self.id, self.value
            )));
        }
        Ok(())
    }
}
