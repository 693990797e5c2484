use homework_core::{validate, ShapeError};
use serde_json::json;

#[test]
fn well_formed_response_is_accepted() {
    let raw = json!({
        "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        "current_date": 1000
    });
    let response = validate(raw).unwrap();

    assert_eq!(response.cursor, 1000);
    assert_eq!(response.homeworks.len(), 1);
}

#[test]
fn records_are_not_inspected() {
    let raw = json!({"homeworks": [42, "junk", {}], "current_date": 5});
    assert_eq!(validate(raw).unwrap().homeworks.len(), 3);
}

#[test]
fn non_mapping_is_rejected() {
    assert_eq!(validate(json!([1, 2])).unwrap_err(), ShapeError::NotAMapping);
    assert_eq!(validate(json!(null)).unwrap_err(), ShapeError::NotAMapping);
}

#[test]
fn homeworks_must_be_a_list() {
    let missing = json!({"current_date": 1000});
    let wrong_type = json!({"homeworks": {"hw1": "approved"}, "current_date": 1000});

    assert_eq!(validate(missing).unwrap_err(), ShapeError::Homeworks);
    assert_eq!(validate(wrong_type).unwrap_err(), ShapeError::Homeworks);
}

#[test]
fn cursor_must_be_present() {
    let raw = json!({"homeworks": []});
    assert_eq!(validate(raw).unwrap_err(), ShapeError::MissingCursor);
}

#[test]
fn cursor_must_be_an_integer() {
    let text = json!({"homeworks": [], "current_date": "yesterday"});
    let fraction = json!({"homeworks": [], "current_date": 1.5});

    assert!(matches!(
        validate(text).unwrap_err(),
        ShapeError::InvalidCursor { .. }
    ));
    assert!(matches!(
        validate(fraction).unwrap_err(),
        ShapeError::InvalidCursor { .. }
    ));
}
