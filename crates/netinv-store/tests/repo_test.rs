// Integration tests for SqliteRepo

mod common;

use chrono::NaiveDate;
use common::{device, setup_test_db};
use netinv_core::{FieldPatch, InventoryError, InventoryPatch, NewInventoryRecord};
use netinv_store::SqliteRepo;
use uuid::Uuid;

#[test]
fn test_create_then_get() {
    let conn = setup_test_db();

    let created = SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();
    let fetched = SqliteRepo::get(&conn, created.id).unwrap();

    assert_eq!(fetched, Some(created));
}

#[test]
fn test_create_duplicate_name_is_conflict_and_storage_unchanged() {
    // Given: A record named sw1
    let conn = setup_test_db();
    SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();

    // When: Another record with the same name is created
    let result = SqliteRepo::create(&conn, device("sw1", "DC2", "Juniper"));

    // Then: Conflict, and still one record
    match result {
        Err(InventoryError::NameConflict { name }) => assert_eq!(name, "sw1"),
        other => panic!("Expected NameConflict, got {:?}", other),
    }
    assert_eq!(SqliteRepo::count(&conn).unwrap(), 1);
}

#[test]
fn test_insert_duplicate_name_maps_constraint_to_conflict() {
    let conn = setup_test_db();
    let first = device("sw1", "DC1", "Cisco").into_record(Uuid::now_v7());
    let second = device("sw1", "DC2", "Cisco").into_record(Uuid::now_v7());

    SqliteRepo::insert(&conn, &first).unwrap();
    let result = SqliteRepo::insert(&conn, &second);

    assert!(matches!(result, Err(InventoryError::NameConflict { .. })));
}

#[test]
fn test_records_without_name_do_not_conflict() {
    let conn = setup_test_db();
    SqliteRepo::create(&conn, NewInventoryRecord::default()).unwrap();
    SqliteRepo::create(&conn, NewInventoryRecord::default()).unwrap();
    assert_eq!(SqliteRepo::count(&conn).unwrap(), 2);
}

#[test]
fn test_list_in_insertion_order() {
    let conn = setup_test_db();
    let names = ["c", "a", "b"];
    for name in names {
        SqliteRepo::create(&conn, device(name, "DC1", "Cisco")).unwrap();
    }

    let listed: Vec<String> = SqliteRepo::list(&conn)
        .unwrap()
        .into_iter()
        .filter_map(|r| r.name)
        .collect();
    assert_eq!(listed, vec!["c", "a", "b"]);
}

#[test]
fn test_filter_by_make_exact_and_case_sensitive() {
    let conn = setup_test_db();
    let sw1 = SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();
    SqliteRepo::create(&conn, device("sw2", "DC1", "cisco")).unwrap();
    SqliteRepo::create(&conn, device("sw3", "DC1", "Cisco Systems")).unwrap();

    assert_eq!(SqliteRepo::list_by_make(&conn, "Cisco").unwrap(), vec![sw1]);
    assert!(SqliteRepo::list_by_make(&conn, "Juniper").unwrap().is_empty());
}

#[test]
fn test_filter_by_location() {
    let conn = setup_test_db();
    let a = SqliteRepo::create(&conn, device("a", "DC1", "F5")).unwrap();
    SqliteRepo::create(&conn, device("b", "DC2", "F5")).unwrap();
    let c = SqliteRepo::create(&conn, device("c", "DC1", "Cisco")).unwrap();

    assert_eq!(SqliteRepo::list_by_location(&conn, "DC1").unwrap(), vec![a, c]);
    assert!(SqliteRepo::list_by_location(&conn, "dc1").unwrap().is_empty());
}

#[test]
fn test_update_partial_changes_only_supplied_fields() {
    // Given: A stored record
    let conn = setup_test_db();
    let created = SqliteRepo::create(
        &conn,
        NewInventoryRecord {
            model: Some("C9300".to_string()),
            end_of_support: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..device("sw1", "DC1", "Cisco")
        },
    )
    .unwrap();

    // When: Location is cleared and model is replaced
    let patch = InventoryPatch {
        location: FieldPatch::clear(),
        model: FieldPatch::set("C9500".to_string()),
        ..InventoryPatch::default()
    };
    let updated = SqliteRepo::update_partial(&conn, created.id, &patch).unwrap();

    // Then: Only those two fields changed
    assert_eq!(updated.location, None);
    assert_eq!(updated.model.as_deref(), Some("C9500"));
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.make, created.make);
    assert_eq!(updated.end_of_support, created.end_of_support);
    assert_eq!(SqliteRepo::get(&conn, created.id).unwrap(), Some(updated));
}

#[test]
fn test_update_empty_patch_is_noop() {
    let conn = setup_test_db();
    let created = SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();

    let result = SqliteRepo::update_partial(&conn, created.id, &InventoryPatch::default());

    assert!(matches!(
        result,
        Err(InventoryError::NoFieldsToUpdate { .. })
    ));
}

#[test]
fn test_update_unknown_id_is_not_found_even_when_empty() {
    let conn = setup_test_db();

    let result = SqliteRepo::update_partial(&conn, Uuid::now_v7(), &InventoryPatch::default());

    assert!(matches!(result, Err(InventoryError::NotFound { .. })));
}

#[test]
fn test_update_rename_to_taken_name_is_conflict() {
    let conn = setup_test_db();
    SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();
    let sw2 = SqliteRepo::create(&conn, device("sw2", "DC1", "Cisco")).unwrap();

    let patch = InventoryPatch {
        name: FieldPatch::set("sw1".to_string()),
        ..InventoryPatch::default()
    };
    let result = SqliteRepo::update_partial(&conn, sw2.id, &patch);

    match result {
        Err(InventoryError::NameConflict { name }) => assert_eq!(name, "sw1"),
        other => panic!("Expected NameConflict, got {:?}", other),
    }
    assert_eq!(
        SqliteRepo::get(&conn, sw2.id).unwrap().and_then(|r| r.name),
        Some("sw2".to_string())
    );
}

#[test]
fn test_update_keeping_own_name_is_allowed() {
    let conn = setup_test_db();
    let sw1 = SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();

    let patch = InventoryPatch {
        name: FieldPatch::set("sw1".to_string()),
        make: FieldPatch::set("Arista".to_string()),
        ..InventoryPatch::default()
    };
    let updated = SqliteRepo::update_partial(&conn, sw1.id, &patch).unwrap();

    assert_eq!(updated.make.as_deref(), Some("Arista"));
}

#[test]
fn test_delete_then_get_is_none() {
    let conn = setup_test_db();
    let created = SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();

    SqliteRepo::delete(&conn, created.id).unwrap();

    assert_eq!(SqliteRepo::get(&conn, created.id).unwrap(), None);
    assert!(matches!(
        SqliteRepo::delete(&conn, created.id),
        Err(InventoryError::NotFound { .. })
    ));
}

#[test]
fn test_exists_with_name() {
    let conn = setup_test_db();
    SqliteRepo::create(&conn, device("sw1", "DC1", "Cisco")).unwrap();

    assert!(SqliteRepo::exists_with_name(&conn, "sw1").unwrap());
    assert!(!SqliteRepo::exists_with_name(&conn, "SW1").unwrap());
}
