use netinv_core::NewInventoryRecord;
use rusqlite::Connection;

#[allow(dead_code)]
pub fn setup_test_db() -> Connection {
    let mut conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    netinv_store::migrations::apply_migrations(&mut conn).expect("Failed to apply migrations");
    conn
}

#[allow(dead_code)]
pub fn device(name: &str, location: &str, make: &str) -> NewInventoryRecord {
    NewInventoryRecord {
        name: Some(name.to_string()),
        location: Some(location.to_string()),
        make: Some(make.to_string()),
        ..NewInventoryRecord::default()
    }
}
