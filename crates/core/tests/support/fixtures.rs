//! Seeded dataset shared by the flow tests
//!
//! A year of facility activity: archived orders from January through April
//! feeding the report views, plus an active May/June board. Expense links
//! intentionally cover all three cases (linked to archived, linked to
//! active, unlinked).

use chrono::{DateTime, Utc};
use maintdesk_domain::{
    Expense, ExpenseCategory, HistoryLog, OsPriority, OsStatus, OsType, PaymentMethod,
    ServiceOrder, Unit, User,
};

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("fixture timestamp")
}

pub fn seed_users() -> Vec<User> {
    vec![
        User { id: "u1".to_string(), name: "Juliana".to_string(), is_admin: true },
        User { id: "u2".to_string(), name: "Vitor".to_string(), is_admin: true },
        User { id: "u4".to_string(), name: "Ana".to_string(), is_admin: false },
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    title: &str,
    unit: Unit,
    os_type: OsType,
    priority: OsPriority,
    status: OsStatus,
    owner_id: &str,
    opened: &str,
    closed: Option<&str>,
    archived: bool,
) -> ServiceOrder {
    ServiceOrder {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        unit,
        os_type,
        priority,
        status,
        owner_id: owner_id.to_string(),
        date_opened: ts(opened),
        date_forecast: None,
        date_closed: closed.map(ts),
        history: vec![],
        archived,
    }
}

#[allow(clippy::too_many_arguments)]
fn expense(
    id: &str,
    item: &str,
    value: f64,
    date: &str,
    supplier: &str,
    category: ExpenseCategory,
    payment_method: PaymentMethod,
    unit: Unit,
    linked: Option<&str>,
) -> Expense {
    Expense {
        id: id.to_string(),
        item: item.to_string(),
        value,
        date: ts(date),
        supplier: supplier.to_string(),
        category,
        payment_method,
        unit,
        warranty_parts_months: 0,
        warranty_service_months: 0,
        linked_os_id: linked.map(str::to_string),
    }
}

pub fn seed_orders() -> Vec<ServiceOrder> {
    let mut orders = vec![
        // January, documented
        order(
            "OS-26001",
            "Manutenção Preventiva Ar Condicionado",
            Unit::Aldeota,
            OsType::Preventive,
            OsPriority::Medium,
            OsStatus::Done,
            "u1",
            "2026-01-05T08:00:00Z",
            Some("2026-01-07T16:00:00Z"),
            true,
        ),
        order(
            "OS-26002",
            "Vazamento Pia Cozinha",
            Unit::Parquelandia,
            OsType::Corrective,
            OsPriority::High,
            OsStatus::Done,
            "u2",
            "2026-01-10T09:30:00Z",
            Some("2026-01-10T14:00:00Z"),
            true,
        ),
        // February, documented
        order(
            "OS-26004",
            "Queda de Energia Parcial",
            Unit::Cambeba,
            OsType::Corrective,
            OsPriority::High,
            OsStatus::Done,
            "u1",
            "2026-02-02T07:00:00Z",
            Some("2026-02-03T18:00:00Z"),
            true,
        ),
        order(
            "OS-26005",
            "Pintura Fachada",
            Unit::Eusebio,
            OsType::Preventive,
            OsPriority::Medium,
            OsStatus::Cancelled,
            "u2",
            "2026-02-10T08:00:00Z",
            Some("2026-02-15T09:00:00Z"),
            true,
        ),
        // March, documented
        order(
            "OS-26006",
            "Troca Motor Geladeira",
            Unit::Poke,
            OsType::Corrective,
            OsPriority::High,
            OsStatus::Done,
            "u4",
            "2026-03-05T11:00:00Z",
            Some("2026-03-12T10:00:00Z"),
            true,
        ),
        // April, documented
        order(
            "OS-26008",
            "Manutenção Sistema de Gás",
            Unit::Fabrica,
            OsType::Preventive,
            OsPriority::High,
            OsStatus::Done,
            "u1",
            "2026-04-01T08:00:00Z",
            Some("2026-04-05T17:00:00Z"),
            true,
        ),
        // May/June, active board
        order(
            "OS-26009",
            "Computador PDV Travando",
            Unit::Parquelandia,
            OsType::Corrective,
            OsPriority::High,
            OsStatus::Open,
            "u2",
            "2026-05-18T10:00:00Z",
            None,
            false,
        ),
        order(
            "OS-26010",
            "Compra de Utensílios",
            Unit::Administrativo,
            OsType::Other,
            OsPriority::Low,
            OsStatus::Waiting,
            "u1",
            "2026-05-20T14:00:00Z",
            None,
            false,
        ),
        order(
            "OS-26012",
            "Vazamento Infiltração Parede",
            Unit::Cambeba,
            OsType::Corrective,
            OsPriority::Medium,
            OsStatus::Open,
            "u4",
            "2026-05-23T08:30:00Z",
            None,
            false,
        ),
        order(
            "OS-26013",
            "Manutenção Câmara Fria",
            Unit::Estoque,
            OsType::Preventive,
            OsPriority::High,
            OsStatus::InProgress,
            "u1",
            "2026-05-24T07:00:00Z",
            None,
            false,
        ),
        // Closed but still on the board, not documented yet
        order(
            "OS-26014",
            "Instalação TV Menu Board",
            Unit::Poke,
            OsType::Installation,
            OsPriority::Low,
            OsStatus::Done,
            "u2",
            "2026-05-15T09:00:00Z",
            Some("2026-05-16T15:00:00Z"),
            false,
        ),
    ];

    orders[7].history = vec![
        HistoryLog {
            id: "1".to_string(),
            date: ts("2026-05-20T14:00:00Z"),
            message: "Cotação solicitada".to_string(),
            user_id: Some("u1".to_string()),
        },
        HistoryLog {
            id: "2".to_string(),
            date: ts("2026-05-21T09:00:00Z"),
            message: "Aguardando aprovação diretoria".to_string(),
            user_id: Some("u1".to_string()),
        },
    ];
    orders
}

pub fn seed_expenses() -> Vec<Expense> {
    vec![
        expense(
            "FIN-001",
            "Recarga de Gás R410A",
            450.0,
            "2026-01-06T10:00:00Z",
            "ClimaFrio Ltda",
            ExpenseCategory::Labor,
            PaymentMethod::Pix,
            Unit::Aldeota,
            Some("OS-26001"),
        ),
        expense(
            "FIN-002",
            "Sifão Metal Cromado",
            89.9,
            "2026-01-10T11:00:00Z",
            "Leroy Merlin",
            ExpenseCategory::Parts,
            PaymentMethod::CreditCard,
            Unit::Parquelandia,
            Some("OS-26002"),
        ),
        expense(
            "FIN-004",
            "Visita Técnica Elétrica",
            250.0,
            "2026-02-02T14:00:00Z",
            "SOS Elétrica",
            ExpenseCategory::Labor,
            PaymentMethod::Pix,
            Unit::Cambeba,
            Some("OS-26004"),
        ),
        expense(
            "FIN-005",
            "Disjuntor Bipolar 63A",
            120.0,
            "2026-02-03T09:00:00Z",
            "Casa do Eletricista",
            ExpenseCategory::Parts,
            PaymentMethod::Cash,
            Unit::Cambeba,
            Some("OS-26004"),
        ),
        expense(
            "FIN-006",
            "Motor Compressor 1/3HP",
            850.0,
            "2026-03-08T10:00:00Z",
            "Refrigeração Silva",
            ExpenseCategory::Parts,
            PaymentMethod::Boleto,
            Unit::Poke,
            Some("OS-26006"),
        ),
        expense(
            "FIN-007",
            "Mão de Obra Troca Motor",
            300.0,
            "2026-03-12T09:00:00Z",
            "Refrigeração Silva",
            ExpenseCategory::Labor,
            PaymentMethod::Pix,
            Unit::Poke,
            Some("OS-26006"),
        ),
        expense(
            "FIN-009",
            "Laudo Técnico ART Gás",
            1500.0,
            "2026-04-05T10:00:00Z",
            "Engenharia Gás Total",
            ExpenseCategory::Other,
            PaymentMethod::Boleto,
            Unit::Fabrica,
            Some("OS-26008"),
        ),
        expense(
            "FIN-011",
            "Manutenção Mensal Contrato",
            600.0,
            "2026-05-24T08:00:00Z",
            "FrioMax",
            ExpenseCategory::Labor,
            PaymentMethod::Boleto,
            Unit::Estoque,
            Some("OS-26013"),
        ),
        expense(
            "FIN-012",
            "Suporte Articulado TV",
            180.0,
            "2026-05-15T10:00:00Z",
            "Magalu",
            ExpenseCategory::Parts,
            PaymentMethod::Pix,
            Unit::Poke,
            None,
        ),
    ]
}
