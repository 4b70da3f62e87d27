//! # Dependency Inversion Principle (DIP)
//!
//! > High-level modules should not depend on low-level modules. Both should
//! > depend on abstractions.
//!
//! ## Before
//!
//! [`coupled`] shows the violation: `Users` builds and owns a concrete
//! `Database`. Swapping the database means editing `Users`.
//!
//! ## After
//!
//! [`Storage`] is the abstraction. [`Users`] (high-level) receives a
//! `Box<dyn Storage>` through its constructor and never names a provider.
//! [`Database`] and [`ConsoleStorage`] (low-level) implement the abstraction.
//! Tests inject [`mock::MockStorage`] the same way.
//!
//! ```rust
//! use solid_recipe::dependency_inversion::{ConsoleStorage, Users};
//!
//! let users = Users::new(Box::new(ConsoleStorage));
//! users.save(); // prints "Saved: user data"
//! ```
//!
//! ## Wiring
//!
//! The caller decides which provider to use; `Users` only delegates:
//!
//! ```rust,ignore
//! let storage: Box<dyn Storage> = if verbose {
//!     Box::new(ConsoleStorage)
//! } else {
//!     Box::new(Database::new())
//! };
//! let users = Users::new(storage);
//! ```

pub mod coupled;
pub mod mock;
pub mod storage;

pub use storage::*;

use tracing::{debug, instrument};

/// The payload `Users` saves.
pub const USER_DATA: &str = "user data";

/// Something that can persist data.
///
/// Fire-and-forget: no return value and no error.
pub trait Storage {
    fn save(&self, data: &str);
}

/// High-level consumer that only knows about [`Storage`].
pub struct Users {
    storage: Box<dyn Storage>,
}

impl Users {
    /// Creates a consumer backed by the given storage.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Saves the user data through the injected storage.
    #[instrument(skip(self))]
    pub fn save(&self) {
        debug!(data = USER_DATA, "Delegating save");
        self.storage.save(USER_DATA);
    }
}

#[instrument]
pub fn demonstrate() -> String {
    coupled::Users::new().save();

    let database = Database::new();
    Users::new(Box::new(database.clone())).save();
    Users::new(Box::new(ConsoleStorage)).save();
    format!("Database holds {} record(s)", database.records().len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_delegates_to_database() {
        let database = Database::new();
        let users = Users::new(Box::new(database.clone()));
        users.save();
        assert_eq!(database.records(), vec![USER_DATA.to_string()]);
    }

    #[test]
    fn test_users_with_console_storage_runs_to_completion() {
        Users::new(Box::new(ConsoleStorage)).save();
    }

    #[test]
    fn test_demonstrate_saves_one_record() {
        assert_eq!(demonstrate(), "Database holds 1 record(s)");
    }
}
