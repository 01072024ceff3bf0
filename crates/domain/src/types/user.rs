//! User directory entry consumed by the core
//!
//! The full user profile (email, role, avatar) belongs to the host; the core
//! only needs an id for ownership joins, a display name for the owner-name
//! sort key, and the admin flag for visibility scoping.

use serde::{Deserialize, Serialize};

/// Minimal user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}
