use crate::ApiErrorBody;

use serde_json::json;

#[test]
fn test_from_body_bare_shape() {
    let body = json!({"code": "INVALID_CREDENTIALS", "message": "Bad email or password"});
    let err = ApiErrorBody::from_body(&body).unwrap();
    assert_eq!(err.code, "INVALID_CREDENTIALS");
    assert_eq!(err.message, "Bad email or password");
    assert!(err.field.is_none());
}

#[test]
fn test_from_body_enveloped_shape() {
    let body = json!({"error": {"code": "FORBIDDEN", "message": "Nope", "field": "school_id"}});
    let err = ApiErrorBody::from_body(&body).unwrap();
    assert_eq!(err.code, "FORBIDDEN");
    assert_eq!(err.field.as_deref(), Some("school_id"));
}

#[test]
fn test_from_body_rejects_unstructured_payload() {
    let body = json!({"detail": "something broke"});
    assert!(ApiErrorBody::from_body(&body).is_none());
}
