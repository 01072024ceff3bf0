//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for MaintDesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum MaintDeskError {
    /// A status change was attempted on an archived order.
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Archival was attempted on an order that is not in a terminal status.
    #[error("Not archivable: {0}")]
    NotArchivable(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for MaintDesk operations
pub type Result<T> = std::result::Result<T, MaintDeskError>;
