use super::*;

#[test]
fn from_status_extracts_string_detail() {
    let err = ApiError::from_status(401, r#"{"detail":"Incorrect email or password"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 401, detail: Some("Incorrect email or password".to_owned()) }
    );
    assert_eq!(err.status(), Some(401));
}

#[test]
fn from_status_joins_validation_messages() {
    let body = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"},{"loc":["body","role"],"msg":"field required"}]}"#;
    let err = ApiError::from_status(422, body);
    assert_eq!(
        err.user_message(),
        "value is not a valid email address; field required"
    );
}

#[test]
fn from_status_without_json_body_has_no_detail() {
    let err = ApiError::from_status(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.user_message(), "Request failed (502).");
}

#[test]
fn display_includes_status_and_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"inactive user"}"#);
    assert_eq!(err.to_string(), "request failed with status 400: inactive user");
    let bare = ApiError::Status { status: 500, detail: None };
    assert_eq!(bare.to_string(), "request failed with status 500: no detail");
}

#[test]
fn non_status_errors_have_no_status_code() {
    assert_eq!(ApiError::Network("offline".to_owned()).status(), None);
    assert_eq!(ApiError::Unavailable.status(), None);
    assert_eq!(ApiError::Unavailable.user_message(), "Could not reach the server.");
}
