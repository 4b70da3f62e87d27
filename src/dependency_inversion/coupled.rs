//! The violation: a high-level type tied to a concrete low-level type.
//!
//! `Users` constructs its own `Database` and calls it directly. There is no
//! seam to inject a different store, and tests cannot observe the save without
//! reaching into `Users`. Compare with [`super::Users`].

use tracing::info;

/// Concrete storage with no abstraction in front of it.
#[derive(Debug, Default)]
pub struct Database;

impl Database {
    pub fn save(&self, data: &str) {
        info!(data, "Saved to hard-wired database");
    }
}

/// Owns and builds its database itself.
#[derive(Debug, Default)]
pub struct Users {
    database: Database,
}

impl Users {
    pub fn new() -> Self {
        Self {
            database: Database,
        }
    }

    pub fn save(&self) {
        self.database.save(super::USER_DATA);
    }
}
