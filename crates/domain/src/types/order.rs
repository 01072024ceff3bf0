//! Service order types: the tracked maintenance request and its enumerations

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Physical facility location an order or expense belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Unit {
    Aldeota,
    Parquelandia,
    Cambeba,
    Eusebio,
    Poke,
    Estoque,
    Fabrica,
    Administrativo,
}

impl Unit {
    /// All units, in the order the product presents them.
    pub const ALL: [Unit; 8] = [
        Unit::Aldeota,
        Unit::Parquelandia,
        Unit::Cambeba,
        Unit::Eusebio,
        Unit::Poke,
        Unit::Estoque,
        Unit::Fabrica,
        Unit::Administrativo,
    ];

    /// Human-readable label shown in the product UI.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Aldeota => "Aldeota",
            Unit::Parquelandia => "Parquelândia",
            Unit::Cambeba => "Cambeba",
            Unit::Eusebio => "Eusébio",
            Unit::Poke => "Poke (Santos Dumont)",
            Unit::Estoque => "Estoque",
            Unit::Fabrica => "Fábrica",
            Unit::Administrativo => "Administrativo",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of a service order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OsStatus {
    Open,
    InProgress,
    Waiting,
    Done,
    Cancelled,
}

impl OsStatus {
    /// All statuses, in lifecycle order.
    pub const ALL: [OsStatus; 5] = [
        OsStatus::Open,
        OsStatus::InProgress,
        OsStatus::Waiting,
        OsStatus::Done,
        OsStatus::Cancelled,
    ];

    /// Terminal statuses carry a closing date and are eligible for archival.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OsStatus::Done | OsStatus::Cancelled)
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsStatus::Open => "Aberta",
            OsStatus::InProgress => "Em Andamento",
            OsStatus::Waiting => "Aguardando",
            OsStatus::Done => "Concluída",
            OsStatus::Cancelled => "Cancelada",
        }
    }
}

impl std::fmt::Display for OsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Order priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OsPriority {
    High,
    Medium,
    Low,
}

impl OsPriority {
    /// Numeric weight used by the sort engine (higher = more urgent).
    pub fn weight(&self) -> u8 {
        match self {
            OsPriority::High => 3,
            OsPriority::Medium => 2,
            OsPriority::Low => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OsPriority::High => "Alta",
            OsPriority::Medium => "Média",
            OsPriority::Low => "Baixa",
        }
    }
}

/// Technical classification of the requested work
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OsType {
    Preventive,
    Corrective,
    Installation,
    Other,
}

impl OsType {
    pub const ALL: [OsType; 4] =
        [OsType::Preventive, OsType::Corrective, OsType::Installation, OsType::Other];

    pub fn label(&self) -> &'static str {
        match self {
            OsType::Preventive => "Preventiva",
            OsType::Corrective => "Corretiva",
            OsType::Installation => "Instalação",
            OsType::Other => "Outros",
        }
    }
}

impl std::fmt::Display for OsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Append-only history entry attached to a service order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub message: String,
    /// User who produced the entry, when known
    pub user_id: Option<String>,
}

/// History entries grouped by calendar day, for display purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayGroup {
    pub day: NaiveDate,
    pub logs: Vec<HistoryLog>,
}

/// A tracked maintenance/repair/installation request against a facility unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceOrder {
    /// Stable identifier, format `OS-<year2><seq3>` (e.g. "OS-26001")
    pub id: String,
    pub title: String,
    pub description: String,
    pub unit: Unit,
    #[serde(rename = "type")]
    pub os_type: OsType,
    pub priority: OsPriority,
    pub status: OsStatus,
    /// Reference to the responsible user; not owned by the order
    pub owner_id: String,
    pub date_opened: DateTime<Utc>,
    pub date_forecast: Option<DateTime<Utc>>,
    /// Present iff status is terminal (Done/Cancelled)
    pub date_closed: Option<DateTime<Utc>>,
    /// Append-only event log
    #[serde(default)]
    pub history: Vec<HistoryLog>,
    /// One-way flag: a documented order is read-only
    #[serde(default)]
    pub archived: bool,
}

impl ServiceOrder {
    /// Format an order id from a 4-digit year and a sequence number,
    /// e.g. `(2026, 1)` → `"OS-26001"`.
    pub fn format_id(year: i32, seq: u32) -> String {
        format!("OS-{:02}{:03}", year % 100, seq)
    }
}
