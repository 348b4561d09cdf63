// Integration tests for the migration framework

use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    // Given: An empty SQLite database
    let mut conn = setup_test_db();

    // When: Migrations are applied
    let result = netinv_store::migrations::apply_migrations(&mut conn);

    // Then: The inventory and bookkeeping tables exist
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());
    let tables = get_table_names(&conn);
    assert_eq!(tables, vec!["inventory", "schema_version"]);
}

#[test]
fn test_migrations_idempotent() {
    let mut conn = setup_test_db();
    netinv_store::migrations::apply_migrations(&mut conn).unwrap();
    netinv_store::migrations::apply_migrations(&mut conn).unwrap();

    let applied = netinv_store::migrations::applied_migrations(&conn).unwrap();
    assert_eq!(applied, vec!["001_inventory".to_string()]);
}

#[test]
fn test_checksum_mismatch_detected() {
    // Given: A migrated database whose recorded checksum was altered
    let mut conn = setup_test_db();
    netinv_store::migrations::apply_migrations(&mut conn).unwrap();
    conn.execute(
        "UPDATE schema_version SET checksum = 'tampered' WHERE migration_id = '001_inventory'",
        [],
    )
    .unwrap();

    // When: Migrations run again
    let result = netinv_store::migrations::apply_migrations(&mut conn);

    // Then: The runner refuses to continue
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Checksum mismatch"), "{}", err);
}

#[test]
fn test_name_column_is_unique() {
    let mut conn = setup_test_db();
    netinv_store::migrations::apply_migrations(&mut conn).unwrap();

    conn.execute("INSERT INTO inventory (id, name) VALUES ('a', 'sw1')", [])
        .unwrap();
    let dup = conn.execute("INSERT INTO inventory (id, name) VALUES ('b', 'sw1')", []);
    assert!(dup.is_err());

    // NULL names never collide
    conn.execute("INSERT INTO inventory (id, name) VALUES ('c', NULL)", [])
        .unwrap();
    conn.execute("INSERT INTO inventory (id, name) VALUES ('d', NULL)", [])
        .unwrap();
}
