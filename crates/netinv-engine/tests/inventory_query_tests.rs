// Engine query tests: list and exact-match filters

mod common;

use common::{device, setup_test_db};
use netinv_engine::commands::{
    apply_inventory_command, apply_inventory_query, InventoryCommand, InventoryQuery,
    InventoryQueryResult,
};

fn seed(conn: &mut rusqlite::Connection) {
    for (name, location, make) in [
        ("sw1", "DC1", "Cisco"),
        ("fw1", "DC1", "Palo Alto"),
        ("lb1", "DC2", "F5"),
        ("sw2", "DC2", "Cisco"),
    ] {
        apply_inventory_command(
            InventoryCommand::Create {
                record: device(name, location, make),
            },
            conn,
        )
        .unwrap();
    }
}

fn names(result: InventoryQueryResult) -> Vec<String> {
    result
        .into_records()
        .into_iter()
        .filter_map(|r| r.name)
        .collect()
}

#[test]
fn test_list_returns_all_in_insertion_order() {
    let mut conn = setup_test_db();
    seed(&mut conn);

    let result = apply_inventory_query(InventoryQuery::List, &conn).unwrap();

    assert_eq!(names(result), vec!["sw1", "fw1", "lb1", "sw2"]);
}

#[test]
fn test_by_make_returns_exact_subset() {
    let mut conn = setup_test_db();
    seed(&mut conn);

    let cisco = apply_inventory_query(
        InventoryQuery::ByMake {
            make: "Cisco".to_string(),
        },
        &conn,
    )
    .unwrap();
    let juniper = apply_inventory_query(
        InventoryQuery::ByMake {
            make: "Juniper".to_string(),
        },
        &conn,
    )
    .unwrap();

    assert_eq!(names(cisco), vec!["sw1", "sw2"]);
    assert!(names(juniper).is_empty());
}

#[test]
fn test_by_location_is_case_sensitive() {
    let mut conn = setup_test_db();
    seed(&mut conn);

    let dc2 = apply_inventory_query(
        InventoryQuery::ByLocation {
            location: "DC2".to_string(),
        },
        &conn,
    )
    .unwrap();
    let lower = apply_inventory_query(
        InventoryQuery::ByLocation {
            location: "dc2".to_string(),
        },
        &conn,
    )
    .unwrap();

    assert_eq!(names(dc2), vec!["lb1", "sw2"]);
    assert!(names(lower).is_empty());
}

#[test]
fn test_count() {
    let mut conn = setup_test_db();
    seed(&mut conn);

    assert_eq!(
        apply_inventory_query(InventoryQuery::Count, &conn).unwrap(),
        InventoryQueryResult::Count(4)
    );
}
