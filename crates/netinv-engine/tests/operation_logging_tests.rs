// Every command and query emits start and end / end_error events

mod common;

use common::{device, setup_test_db};
use netinv_core::logging_facility::test_capture::init_test_capture;
use netinv_core::InventoryPatch;
use netinv_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use netinv_engine::commands::{
    apply_inventory_command, apply_inventory_query, InventoryCommand, InventoryQuery,
};
use tracing::Level;
use uuid::Uuid;

#[test]
fn test_create_logs_start_and_end_with_record_id() {
    let capture = init_test_capture();
    let mut conn = setup_test_db();

    let record = apply_inventory_command(
        InventoryCommand::Create {
            record: device("log-create-sw", "DC1", "Cisco"),
        },
        &mut conn,
    )
    .unwrap()
    .into_record()
    .unwrap();

    let id = record.id.to_string();
    let events = capture.events_for_op("inventory_create");
    assert!(events
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_START)));
    assert!(events.iter().any(|e| {
        e.event.as_deref() == Some(EVENT_END) && e.fields.get("record_id") == Some(&id)
    }));
}

#[test]
fn test_not_found_logs_end_error_at_warn() {
    let capture = init_test_capture();
    let mut conn = setup_test_db();
    let missing = Uuid::now_v7();

    let _ = apply_inventory_command(
        InventoryCommand::Update {
            id: missing,
            patch: InventoryPatch::default(),
        },
        &mut conn,
    );

    let events = capture.events_for_op("inventory_update");
    let error_event = events
        .iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("end_error event");
    assert_eq!(error_event.level, Level::WARN);
    assert_eq!(
        error_event.fields.get("err.code"),
        Some(&"ERR_NOT_FOUND".to_string())
    );
}

#[test]
fn test_query_logs_result_len() {
    let capture = init_test_capture();
    let conn = setup_test_db();

    apply_inventory_query(InventoryQuery::Count, &conn).unwrap();

    capture.assert_event_exists("inventory_count", EVENT_END);
}
