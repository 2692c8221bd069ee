use super::*;

fn authed(token: &str) -> SessionState {
    SessionState::Authenticated { token: token.to_owned() }
}

// =============================================================
// from_stored
// =============================================================

#[test]
fn from_stored_missing_is_unauthenticated() {
    assert_eq!(SessionState::from_stored(None), SessionState::Unauthenticated);
}

#[test]
fn from_stored_empty_is_unauthenticated() {
    assert_eq!(SessionState::from_stored(Some(String::new())), SessionState::Unauthenticated);
}

#[test]
fn from_stored_token_is_authenticated() {
    let state = SessionState::from_stored(Some("abc123".to_owned()));
    assert_eq!(state, authed("abc123"));
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("abc123"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn login_with_token_authenticates() {
    assert_eq!(SessionState::Unauthenticated.on_login(Some("tok1")), authed("tok1"));
}

#[test]
fn login_overwrites_previous_token() {
    assert_eq!(authed("old").on_login(Some("new")), authed("new"));
}

#[test]
fn login_without_token_leaves_state_alone() {
    assert_eq!(SessionState::Unauthenticated.on_login(None), SessionState::Unauthenticated);
    assert_eq!(authed("keep").on_login(Some("")), authed("keep"));
}

#[test]
fn logout_always_unauthenticates() {
    assert_eq!(authed("abc").on_logout(), SessionState::Unauthenticated);
    assert_eq!(SessionState::Unauthenticated.on_logout(), SessionState::Unauthenticated);
}

// =============================================================
// AuthHeader
// =============================================================

#[test]
fn auth_header_with_token_serializes_bearer() {
    let header = authed("abc123").auth_header();
    assert_eq!(header.authorization(), Some("Bearer abc123"));
    assert_eq!(
        serde_json::to_value(&header).unwrap(),
        serde_json::json!({ "Authorization": "Bearer abc123" })
    );
}

#[test]
fn auth_header_without_token_serializes_empty_object() {
    let header = SessionState::Unauthenticated.auth_header();
    assert!(header.is_empty());
    assert_eq!(serde_json::to_value(&header).unwrap(), serde_json::json!({}));
    assert_eq!(header, AuthHeader::default());
}
