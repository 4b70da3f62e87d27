//! # Mock Storage
//!
//! [`MockStorage`] implements [`Storage`] entirely in memory and checks that a
//! consumer saved what it was expected to save. Because it is injected through
//! the same constructor as a real provider, it is also the proof that the
//! consumer does not depend on a concrete type.
//!
//! | Feature | MockStorage | Database |
//! |---------|-------------|----------|
//! | **Expectations** | `expect_save` + `verify` | None |
//! | **Recording** | Every call, matched or not | Every call |
//! | **Use Case** | Asserting what a consumer sends | Demonstrating a real provider |
//!
//! ```rust
//! use solid_recipe::dependency_inversion::mock::MockStorage;
//! use solid_recipe::dependency_inversion::Users;
//!
//! let mut mock = MockStorage::new();
//! mock.expect_save("user data");
//!
//! let users = Users::new(Box::new(mock.clone()));
//! users.save();
//!
//! mock.verify();
//! assert_eq!(mock.saved(), vec!["user data".to_string()]);
//! ```

use super::Storage;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// An in-memory [`Storage`] with expectations.
///
/// Clones share state. Keep one clone in the test and move the other into
/// the consumer.
///
/// A mock that never had an expectation only records. Once `expect_save` has
/// been called, every `save` must match the next expectation, and a `save`
/// with none left panics.
#[derive(Debug, Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<MockState>>,
}

#[derive(Debug, Default)]
struct MockState {
    expectations: VecDeque<String>,
    saved: Vec<String>,
    strict: bool,
}

impl MockStorage {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next `save` call to carry exactly `data`.
    pub fn expect_save(&mut self, data: impl Into<String>) -> &mut Self {
        let mut state = self.state.lock().unwrap();
        state.strict = true;
        state.expectations.push_back(data.into());
        drop(state);
        self
    }

    /// Every payload received so far, oldest first.
    pub fn saved(&self) -> Vec<String> {
        self.state.lock().unwrap().saved.clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.state.lock().unwrap().expectations.len();
        if remaining > 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

impl Storage for MockStorage {
    fn save(&self, data: &str) {
        let mut state = self.state.lock().unwrap();
        state.saved.push(data.to_string());
        let strict = state.strict;
        let expectation = state.expectations.pop_front();
        drop(state); // Release lock before panicking so clones stay usable

        match expectation {
            Some(expected) if expected == data => {}
            Some(expected) => {
                panic!("Unexpected save: expected {expected:?}, got {data:?}");
            }
            None if strict => {
                panic!("Unexpected save: no expectation left for {data:?}");
            }
            None => {}
        }
    }
}
