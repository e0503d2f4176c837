//! Role model and related functionality

use serde::{Deserialize, Serialize};
use std::fmt;

/// Privilege level attached to every user.
///
/// The derived ordering is the privilege order:
/// `Anonymous < Authenticated < Manager < Admin`. Canonical labels are
/// UPPERCASE; parsing normalizes input case-insensitively so `"manager"`
/// and `"MANAGER"` both resolve to [`Role::Manager`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Anonymous,
    Authenticated,
    Manager,
    Admin,
}

impl Role {
    /// Parse a role label, accepting any casing of the canonical set.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.to_ascii_uppercase().as_str() {
            "ANONYMOUS" => Ok(Role::Anonymous),
            "AUTHENTICATED" => Ok(Role::Authenticated),
            "MANAGER" => Ok(Role::Manager),
            "ADMIN" => Ok(Role::Admin),
            _ => Err("Invalid role".to_string()),
        }
    }

    /// The canonical label, as stored in the database and returned in
    /// responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Anonymous => "ANONYMOUS",
            Role::Authenticated => "AUTHENTICATED",
            Role::Manager => "MANAGER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
