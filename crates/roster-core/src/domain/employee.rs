//! Employee domain types.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Employee Types
// ─────────────────────────────────────────────────────────────────────────────

/// An employee that exists in the system with a repository-assigned ID.
///
/// Use `NewEmployee` for employees that haven't been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Repository ID (always present for persisted employees).
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Contact email. Free text, no format or uniqueness check.
    pub email: String,
    /// Job role (e.g. "Developer", "Tester").
    pub role: String,
}

/// An employee to be inserted (no ID yet).
///
/// After insertion, the repository returns an `Employee` with the assigned ID.
/// An `id` key in an incoming JSON body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl NewEmployee {
    /// Create a new employee payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Replacement values for an existing employee.
///
/// Every field is always written; there is no "leave unchanged" marker.
/// The target ID comes from the caller, never from the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EmployeeUpdate {
    /// Create a new update payload.
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

impl Employee {
    /// Overwrite `name`, `email` and `role` with the update's values.
    ///
    /// The ID is left untouched.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        self.name = update.name;
        self.email = update.email;
        self.role = update.role;
    }
}
