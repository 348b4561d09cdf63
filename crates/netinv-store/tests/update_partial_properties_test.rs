//! Property tests: the SQL partial update agrees with the in-memory patch

mod common;

use chrono::NaiveDate;
use common::setup_test_db;
use netinv_core::{FieldPatch, InventoryError, InventoryPatch, NewInventoryRecord};
use netinv_store::SqliteRepo;
use proptest::prelude::*;

fn opt_text() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[A-Za-z0-9 .-]{0,12}")
}

fn opt_date() -> impl Strategy<Value = Option<NaiveDate>> {
    proptest::option::of((2000i32..2040, 1u32..13, 1u32..29))
        .prop_map(|d| d.and_then(|(y, m, day)| NaiveDate::from_ymd_opt(y, m, day)))
}

fn field_patch<T: std::fmt::Debug + Clone + 'static>(
    value: impl Strategy<Value = Option<T>>,
) -> impl Strategy<Value = FieldPatch<T>> {
    prop_oneof![
        Just(FieldPatch::Omitted),
        value.prop_map(FieldPatch::Present),
    ]
}

fn arb_new_record() -> impl Strategy<Value = NewInventoryRecord> {
    (
        (opt_text(), opt_text(), opt_text(), opt_text(), opt_text()),
        (opt_text(), opt_text(), opt_text(), opt_date()),
    )
        .prop_map(
            |(
                (name, ip_address, location, state, device_type),
                (make, model, os_version, end_of_support),
            )| NewInventoryRecord {
                name,
                ip_address,
                location,
                state,
                device_type,
                make,
                model,
                os_version,
                end_of_support,
            },
        )
}

fn arb_patch() -> impl Strategy<Value = InventoryPatch> {
    (
        (
            field_patch(opt_text()),
            field_patch(opt_text()),
            field_patch(opt_text()),
            field_patch(opt_text()),
            field_patch(opt_text()),
        ),
        (
            field_patch(opt_text()),
            field_patch(opt_text()),
            field_patch(opt_text()),
            field_patch(opt_date()),
        ),
    )
        .prop_map(
            |(
                (name, ip_address, location, state, device_type),
                (make, model, os_version, end_of_support),
            )| InventoryPatch {
                name,
                ip_address,
                location,
                state,
                device_type,
                make,
                model,
                os_version,
                end_of_support,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_sql_update_matches_in_memory_patch(
        new in arb_new_record(),
        patch in arb_patch(),
    ) {
        let conn = setup_test_db();
        let stored = SqliteRepo::create(&conn, new).unwrap();

        let result = SqliteRepo::update_partial(&conn, stored.id, &patch);

        if patch.is_empty() {
            prop_assert!(
                matches!(result, Err(InventoryError::NoFieldsToUpdate { .. })),
                "Expected NoFieldsToUpdate, got {:?}",
                result
            );
            prop_assert_eq!(SqliteRepo::get(&conn, stored.id).unwrap(), Some(stored));
        } else {
            let mut expected = stored.clone();
            patch.apply_to(&mut expected);

            let updated = result.unwrap();
            prop_assert_eq!(&updated, &expected);
            prop_assert_eq!(SqliteRepo::get(&conn, stored.id).unwrap(), Some(expected));
        }
    }
}
