//! Low-level providers of [`Storage`].

use super::Storage;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::info;

/// Keeps saved records in memory.
///
/// Clones share the same records, so a caller can hand one clone to a
/// consumer and read the results through another.
#[derive(Debug, Clone, Default)]
pub struct Database {
    records: Arc<Mutex<Vec<String>>>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything saved so far, oldest first.
    pub fn records(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Storage for Database {
    fn save(&self, data: &str) {
        let mut records = self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        records.push(data.to_string());
        info!(data, size = records.len(), "Saved to database");
    }
}

/// Writes saved data to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleStorage;

impl Storage for ConsoleStorage {
    fn save(&self, data: &str) {
        println!("Saved: {data}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_keeps_records_in_order() {
        let database = Database::new();
        database.save("first");
        database.save("second");
        assert_eq!(database.records(), vec!["first", "second"]);
    }

    #[test]
    fn test_database_clones_share_records() {
        let database = Database::new();
        let handle = database.clone();
        handle.save("shared");
        assert_eq!(database.records(), vec!["shared"]);
    }
}
