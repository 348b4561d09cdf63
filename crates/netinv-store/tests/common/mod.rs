use netinv_core::NewInventoryRecord;
use rusqlite::Connection;

/// In-memory database with migrations applied
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

#[allow(dead_code)]
pub fn fixture_path(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}
