use solid_recipe::dependency_inversion::mock::MockStorage;
use solid_recipe::dependency_inversion::{Database, Storage, Users, USER_DATA};
use std::cell::Cell;
use std::rc::Rc;

/// A storage mechanism the library has never seen.
struct CountingStorage {
    calls: Rc<Cell<usize>>,
}

impl Storage for CountingStorage {
    fn save(&self, _data: &str) {
        self.calls.set(self.calls.get() + 1);
    }
}

/// `Users` delegates to the mock injected through its constructor.
#[test]
fn test_users_with_mock_storage() {
    let mut mock = MockStorage::new();
    mock.expect_save(USER_DATA);

    let users = Users::new(Box::new(mock.clone()));
    users.save();

    mock.verify();
    assert_eq!(mock.saved(), vec![USER_DATA.to_string()]);
}

/// Any `Storage` works, including one defined outside the crate.
#[test]
fn test_users_with_foreign_storage() {
    let calls = Rc::new(Cell::new(0));
    let users = Users::new(Box::new(CountingStorage {
        calls: calls.clone(),
    }));

    users.save();
    users.save();

    assert_eq!(calls.get(), 2);
}

/// Swapping providers does not change what the consumer sends.
#[test]
fn test_same_payload_for_every_provider() {
    let database = Database::new();
    let mock = MockStorage::new();

    Users::new(Box::new(database.clone())).save();
    Users::new(Box::new(mock.clone())).save();

    assert_eq!(database.records(), mock.saved());
}
