use std::sync::Arc;

use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::transport::Method;
use crate::net::types::UserRole;
use crate::session::storage::MemoryTokenStore;

fn session(store: &MemoryTokenStore, transport: &ScriptedTransport) -> SessionClient {
    SessionClient::new(
        ApiConfig::new("http://api.test/api/v1"),
        Arc::new(store.clone()),
        Arc::new(transport.clone()),
    )
}

fn creds() -> Credentials {
    Credentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

// =============================================================
// login
// =============================================================

#[test]
fn login_stores_token_and_returns_full_body() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(200, json!({ "access_token": "tok1", "token_type": "bearer" }));
    let client = session(&store, &transport);

    let resp = block_on(client.login(&creds())).unwrap();

    assert_eq!(store.get().as_deref(), Some("tok1"));
    assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "access_token": "tok1", "token_type": "bearer" }));
    assert!(client.is_authenticated());
    assert_eq!(client.auth_header().authorization(), Some("Bearer tok1"));
}

#[test]
fn login_posts_credentials_to_login_endpoint() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(200, json!({ "access_token": "tok1", "token_type": "bearer" }));
    block_on(session(&store, &transport).login(&creds())).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, "http://api.test/api/v1/auth/login");
    assert_eq!(requests[0].body, Some(json!({ "email": "a@b.com", "password": "x" })));
    assert_eq!(requests[0].header_value("Authorization"), None);
}

#[test]
fn login_overwrites_existing_token() {
    let store = MemoryTokenStore::with_token("old");
    let transport = ScriptedTransport::new().reply(200, json!({ "access_token": "new", "token_type": "bearer" }));
    block_on(session(&store, &transport).login(&creds())).unwrap();
    assert_eq!(store.get().as_deref(), Some("new"));
}

#[test]
fn login_without_token_in_response_keeps_storage() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(200, json!({ "token_type": "bearer" }));
    let client = session(&store, &transport);

    let resp = block_on(client.login(&creds())).unwrap();

    assert!(resp.access_token().is_none());
    assert_eq!(store.get(), None);
    assert!(!client.is_authenticated());
}

#[test]
fn login_returns_body_without_token_type_unchanged() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(200, json!({ "access_token": "tok1" }));
    let client = session(&store, &transport);

    let resp = block_on(client.login(&creds())).unwrap();

    assert_eq!(serde_json::to_value(&resp).unwrap(), json!({ "access_token": "tok1" }));
    assert!(resp.token_type().is_none());
    assert_eq!(store.get().as_deref(), Some("tok1"));
}

#[test]
fn login_with_non_string_token_succeeds_without_storing() {
    let store = MemoryTokenStore::with_token("old");
    let transport = ScriptedTransport::new().reply(200, json!({ "access_token": 42, "token_type": "bearer" }));
    let client = session(&store, &transport);

    let resp = block_on(client.login(&creds())).unwrap();

    assert_eq!(resp.into_value(), json!({ "access_token": 42, "token_type": "bearer" }));
    assert_eq!(store.get().as_deref(), Some("old"));
}

#[test]
fn login_rejection_propagates_and_stores_nothing() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(401, json!({ "detail": "Incorrect email or password" }));
    let err = block_on(session(&store, &transport).login(&creds())).unwrap_err();

    assert_eq!(err, ApiError::Status { status: 401, detail: Some("Incorrect email or password".to_owned()) });
    assert_eq!(store.get(), None);
}

#[test]
fn login_network_error_propagates_and_keeps_prior_token() {
    let store = MemoryTokenStore::with_token("prior");
    let transport = ScriptedTransport::new().fail(ApiError::Network("connection refused".to_owned()));
    let err = block_on(session(&store, &transport).login(&creds())).unwrap_err();

    assert_eq!(err, ApiError::Network("connection refused".to_owned()));
    assert_eq!(store.get().as_deref(), Some("prior"));
}

// =============================================================
// register
// =============================================================

#[test]
fn register_posts_registration_data() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new().reply(200, json!({ "id": 1, "email": "new@example.com" }));
    let data = RegisterData {
        email: "new@example.com".to_owned(),
        password: "password1".to_owned(),
        full_name: "New Brand".to_owned(),
        role: UserRole::Brand,
    };

    block_on(session(&store, &transport).register(&data)).unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].url, "http://api.test/api/v1/auth/register");
    assert_eq!(requests[0].body.as_ref().and_then(|b| b.get("role")), Some(&json!("brand")));
    assert_eq!(store.get(), None);
}

#[test]
fn register_failure_propagates() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new()
        .reply(400, json!({ "detail": "The user with this email already exists in the system." }));
    let data = RegisterData {
        email: "dup@example.com".to_owned(),
        password: "password1".to_owned(),
        full_name: "Dup".to_owned(),
        role: UserRole::Influencer,
    };

    let err = block_on(session(&store, &transport).register(&data)).unwrap_err();
    assert_eq!(err.status(), Some(400));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_token_and_header() {
    let store = MemoryTokenStore::with_token("abc123");
    let client = session(&store, &ScriptedTransport::new());

    client.logout();

    assert!(!client.is_authenticated());
    assert!(client.auth_header().is_empty());
    assert_eq!(store.get(), None);
}

#[test]
fn logout_is_idempotent() {
    let store = MemoryTokenStore::new();
    let client = session(&store, &ScriptedTransport::new());
    client.logout();
    client.logout();
    assert!(!client.is_authenticated());
    assert_eq!(serde_json::to_value(client.auth_header()).unwrap(), json!({}));
}

// =============================================================
// current_user
// =============================================================

#[test]
fn current_user_without_token_makes_no_request() {
    let store = MemoryTokenStore::new();
    let transport = ScriptedTransport::new();
    let user = block_on(session(&store, &transport).current_user());

    assert!(user.is_none());
    assert!(transport.requests().is_empty());
}

#[test]
fn current_user_with_empty_token_makes_no_request() {
    let store = MemoryTokenStore::with_token("");
    let transport = ScriptedTransport::new();
    assert!(block_on(session(&store, &transport).current_user()).is_none());
    assert!(transport.requests().is_empty());
}

#[test]
fn current_user_accepted_returns_user_and_keeps_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let transport = ScriptedTransport::new().reply(
        200,
        json!({ "user_id": 9, "email": "a@b.com", "full_name": "Alice", "role": "brand", "is_active": true }),
    );
    let client = session(&store, &transport);

    let user = block_on(client.current_user()).unwrap();

    assert_eq!(user.key(), Some(9));
    assert_eq!(user.full_name, "Alice");
    assert_eq!(user.role, UserRole::Brand);
    assert_eq!(store.get().as_deref(), Some("abc123"));

    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, "http://api.test/api/v1/users/me");
    assert_eq!(requests[0].header_value("Authorization"), Some("Bearer abc123"));
}

#[test]
fn current_user_rejected_clears_token() {
    let store = MemoryTokenStore::with_token("expired");
    let transport = ScriptedTransport::new().reply(401, json!({ "detail": "Could not validate credentials" }));
    let client = session(&store, &transport);

    assert!(block_on(client.current_user()).is_none());
    assert!(!client.is_authenticated());
    assert_eq!(store.get(), None);
}

#[test]
fn current_user_network_failure_clears_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let transport = ScriptedTransport::new().fail(ApiError::Network("offline".to_owned()));
    let client = session(&store, &transport);

    assert!(block_on(client.current_user()).is_none());
    assert!(!client.is_authenticated());
}

#[test]
fn current_user_undecodable_body_clears_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let transport = ScriptedTransport::new().reply(200, json!("not a user"));
    let client = session(&store, &transport);

    assert!(block_on(client.current_user()).is_none());
    assert_eq!(store.get(), None);
}

/// Simulates a login finishing while the current-user request is in flight.
struct LoginDuringLookup {
    store: MemoryTokenStore,
}

#[async_trait::async_trait(?Send)]
impl Transport for LoginDuringLookup {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.store.set("fresh");
        Ok(ApiResponse::new(401, r#"{"detail":"Could not validate credentials"}"#))
    }
}

#[test]
fn current_user_failure_clears_token_replaced_mid_request() {
    let store = MemoryTokenStore::with_token("stale");
    let client = SessionClient::new(
        ApiConfig::new("http://api.test/api/v1"),
        Arc::new(store.clone()),
        Arc::new(LoginDuringLookup { store: store.clone() }),
    );

    assert!(block_on(client.current_user()).is_none());
    assert_eq!(store.get(), None);
}

// =============================================================
// auth_header / send_authorized
// =============================================================

#[test]
fn auth_header_reflects_stored_token() {
    let store = MemoryTokenStore::with_token("abc123");
    let client = session(&store, &ScriptedTransport::new());
    assert_eq!(
        serde_json::to_value(client.auth_header()).unwrap(),
        json!({ "Authorization": "Bearer abc123" })
    );

    store.delete();
    assert_eq!(serde_json::to_value(client.auth_header()).unwrap(), json!({}));
}

#[test]
fn send_authorized_attaches_header_and_checks_status() {
    let store = MemoryTokenStore::with_token("abc123");
    let transport = ScriptedTransport::new().reply(200, json!([])).reply(403, json!({ "detail": "forbidden" }));
    let client = session(&store, &transport);

    let ok = block_on(client.send_authorized(ApiRequest::get("http://api.test/api/v1/influencers/"))).unwrap();
    assert_eq!(ok.body, "[]");

    let err = block_on(client.send_authorized(ApiRequest::get("http://api.test/api/v1/campaigns/"))).unwrap_err();
    assert_eq!(err.status(), Some(403));
    assert_eq!(store.get().as_deref(), Some("abc123"));

    for request in transport.requests() {
        assert_eq!(request.header_value("Authorization"), Some("Bearer abc123"));
    }
}

#[test]
fn debug_does_not_print_token() {
    let store = MemoryTokenStore::with_token("secret-token");
    let client = session(&store, &ScriptedTransport::new());
    let out = format!("{client:?}");
    assert!(out.contains("authenticated: true"));
    assert!(!out.contains("secret-token"));
}
