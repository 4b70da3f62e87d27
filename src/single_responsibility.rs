//! # Single Responsibility Principle (SRP)
//!
//! > A type should have one, and only one, reason to change.
//!
//! [`User`] represents a registered person and nothing else. It does not send
//! mail, persist itself, or validate its input. Each of those would be a second
//! reason to change, so they belong to other types.
//!
//! ```rust
//! use solid_recipe::single_responsibility::User;
//!
//! let user = User::new("Alice", "alice@example.com");
//! assert_eq!(user.name(), "Alice");
//! assert_eq!(user.email(), "alice@example.com");
//! ```

use serde::{Deserialize, Serialize};

/// A registered user: a display name and a contact address.
///
/// Fields are private and there are no setters, so a `User` does not change
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    name: String,
    email: String,
}

impl User {
    /// Creates a new User instance.
    ///
    /// # Arguments
    /// * `name` - User's display name
    /// * `email` - User's email address
    ///
    /// # Notes
    /// Both values are stored verbatim. Empty or malformed input is accepted.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Builds a user and reports what was stored.
#[tracing::instrument]
pub fn demonstrate() -> String {
    let user = User::new("Alice", "alice@example.com");
    tracing::debug!(?user, "User constructed");
    format!("User {} <{}>", user.name(), user.email())
}
