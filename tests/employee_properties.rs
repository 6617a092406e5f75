//! Property tests for add/validation behavior.

use entity::Employee;
use products_hr::{MAX_FIELD_LENGTH, ServiceError, ValidationError};
use proptest::prelude::*;
use suite_tests::fresh_service;

// Non-blank text within the limit.
fn valid_field() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ú][A-Za-zÀ-ú .'-]{0,49}"
}

fn blank_field() -> impl Strategy<Value = String> {
    "[ \t]{0,5}"
}

fn oversized_field() -> impl Strategy<Value = String> {
    "[A-Za-z]{51,80}"
}

proptest! {
    #[test]
    fn valid_pairs_are_stored(name in valid_field(), role in valid_field()) {
        let service = fresh_service();
        let id = service.next_id().unwrap();
        service.add(Employee::new(id, name.clone(), role.clone(), 0.0)).unwrap();

        let all = service.list_all().unwrap();
        prop_assert!(all.iter().any(|e| e.name() == name.trim() && e.role() == role.trim()));
    }

    #[test]
    fn blank_fields_are_required(valid in valid_field(), blank in blank_field(), blank_name in any::<bool>()) {
        let service = fresh_service();
        let (name, role) = if blank_name { (blank, valid) } else { (valid, blank) };
        let err = service.add(Employee::new(service.next_id().unwrap(), name, role, 0.0)).unwrap_err();

        let is_required = matches!(err, ServiceError::Validation(ValidationError::Required { .. }));
        prop_assert!(is_required);
        prop_assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn oversized_fields_hit_the_limit(valid in valid_field(), long in oversized_field(), long_name in any::<bool>()) {
        prop_assert!(long.chars().count() > MAX_FIELD_LENGTH);
        let service = fresh_service();
        let (name, role) = if long_name { (long, valid) } else { (valid, long) };
        let err = service.add(Employee::new(service.next_id().unwrap(), name, role, 0.0)).unwrap_err();

        prop_assert!(err.to_string().contains("50"));
        prop_assert!(service.list_all().unwrap().is_empty());
    }

    #[test]
    fn lookups_of_unknown_ids_are_empty(id in any::<i64>()) {
        let service = fresh_service();
        prop_assert!(service.find_by_id(id).unwrap().is_none());
        service.delete(id).unwrap();
        prop_assert!(service.list_all().unwrap().is_empty());
    }
}
