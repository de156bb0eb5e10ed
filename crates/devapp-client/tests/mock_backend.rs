//! Mock backend tests for the devapp client.
//!
//! These tests use wiremock to simulate the devapp REST API and exercise
//! the session, guard, login, and CRUD behavior without a real backend.

use std::sync::{Arc, Mutex};

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use devapp_client::{
    Access, INVALID_CREDENTIALS, LoginFlow, LoginState, MISSING_FIELDS, OrderClient,
    RestAuthBackend, RestClient, SessionStore, TokenStorage, UserClient, authorize, can_enter,
};
use devapp_core::error::{AuthError, Error};
use devapp_core::{BaseUrl, Credentials, Navigator, Order, Route, User};

/// Navigation stub that records every route it is asked to enact.
#[derive(Default)]
struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// Helper to create a base URL from a mock server.
fn mock_base_url(server: &MockServer) -> BaseUrl {
    BaseUrl::new(server.uri()).unwrap()
}

/// Build a session store backed by the mock server, with isolated storage.
fn session_store(
    server: &MockServer,
    dir: &TempDir,
    navigator: Arc<RecordingNavigator>,
) -> SessionStore {
    let client = RestClient::new(mock_base_url(server));
    let storage = TokenStorage::new(dir.path().join("token.json"));
    SessionStore::new(Box::new(RestAuthBackend::new(client)), storage, navigator)
}

/// Mount a successful login exchange for alice/secret123.
async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({
            "username": "alice",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "test-token"
        })))
        .mount(server)
        .await;
}

// ============================================================================
// Session Store
// ============================================================================

#[tokio::test]
async fn initialize_without_prior_session_publishes_logged_out() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let mut subscription = store.subscribe();
    store.initialize().await;

    subscription.changed().await.unwrap();
    assert!(!subscription.borrow_and_update().is_valid());
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), "");
}

#[tokio::test]
async fn login_success_publishes_and_persists() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store.initialize().await;
    assert!(!store.is_logged_in());

    let session = store
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    assert!(session.is_valid());
    assert!(store.is_logged_in());
    assert_eq!(store.token(), "test-token");

    // A fresh store over the same storage restores the session
    let restored = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    restored.initialize().await;
    assert!(restored.is_logged_in());
    assert_eq!(restored.token(), "test-token");
}

#[tokio::test]
async fn login_rejection_publishes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store.initialize().await;

    let mut subscription = store.subscribe();
    subscription.borrow_and_update();

    let result = store.login(&Credentials::new("alice", "wrong")).await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::InvalidCredentials))
    ));
    assert!(!store.is_logged_in());
    assert!(!subscription.has_changed().unwrap());
}

#[tokio::test]
async fn login_failure_never_surfaces_backend_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "user alice is locked out until tomorrow"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let err = store
        .login(&Credentials::new("alice", "wrong"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "Invalid username or password");
}

#[tokio::test]
async fn logout_clears_state_and_navigates_to_login() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    let navigator = Arc::new(RecordingNavigator::default());
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, navigator.clone());
    store.initialize().await;

    store
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();
    assert!(store.is_logged_in());

    store.logout();
    assert!(!store.is_logged_in());
    assert_eq!(store.token(), "");
    assert_eq!(navigator.routes(), [Route::Login]);

    // Logging out again is harmless and republishes false
    store.logout();
    assert!(!store.is_logged_in());

    // The persisted token is gone too
    let restored = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    restored.initialize().await;
    assert!(!restored.is_logged_in());
}

#[tokio::test]
async fn unreachable_auth_backend_is_an_auth_error() {
    // Nothing listens on port 9; the exchange fails at the transport level
    let client = RestClient::new(BaseUrl::new("http://127.0.0.1:9").unwrap());
    let dir = TempDir::new().unwrap();
    let store = SessionStore::new(
        Box::new(RestAuthBackend::new(client)),
        TokenStorage::new(dir.path().join("token.json")),
        Arc::new(RecordingNavigator::default()),
    );

    let result = store.login(&Credentials::new("alice", "secret123")).await;

    assert!(matches!(
        result,
        Err(Error::Auth(AuthError::BackendUnavailable { .. }))
    ));
    assert!(!store.is_logged_in());
}

// ============================================================================
// Outbound Request Augmenter
// ============================================================================

#[tokio::test]
async fn authorize_attaches_exactly_one_bearer_header() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    let client = RestClient::new(mock_base_url(&server));
    let request = authorize(client.get("users").unwrap(), &store);

    let values: Vec<_> = request.headers().get_all("authorization").iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0], "Bearer test-token");
}

#[tokio::test]
async fn authorize_leaves_unauthenticated_requests_untouched() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store.initialize().await;

    let client = RestClient::new(mock_base_url(&server));
    let request = client.get("users").unwrap();
    let header_count = request.headers().len();

    let request = authorize(request, &store);

    assert!(request.headers().get("authorization").is_none());
    assert_eq!(request.headers().len(), header_count);
}

#[tokio::test]
async fn requests_carry_the_token_over_the_wire() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Ada"}
        ])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    let users = UserClient::new(RestClient::new(mock_base_url(&server)), store)
        .list()
        .await
        .unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ada");
}

#[tokio::test]
async fn logged_out_requests_send_no_credential() {
    let server = MockServer::start().await;

    // Any request carrying a credential would match this mock and fail the
    // expectation when the server shuts down
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header_exists("authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store.initialize().await;

    let users = UserClient::new(RestClient::new(mock_base_url(&server)), store)
        .list()
        .await
        .unwrap();
    assert!(users.is_empty());
}

// ============================================================================
// Route Guard
// ============================================================================

#[tokio::test]
async fn guard_redirects_protected_routes_when_logged_out() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store.initialize().await;

    assert_eq!(can_enter(Route::Users, &store), Access::Redirect(Route::Login));
    assert_eq!(can_enter(Route::Orders, &store), Access::Redirect(Route::Login));
    assert_eq!(can_enter(Route::Login, &store), Access::Granted);
}

#[tokio::test]
async fn guard_grants_protected_routes_when_logged_in() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));
    store
        .login(&Credentials::new("alice", "secret123"))
        .await
        .unwrap();

    assert_eq!(can_enter(Route::Users, &store), Access::Granted);
    assert_eq!(can_enter(Route::Orders, &store), Access::Granted);
}

// ============================================================================
// Login Flow
// ============================================================================

#[tokio::test]
async fn empty_fields_fail_locally_without_a_network_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, navigator.clone());
    store.initialize().await;

    let mut flow = LoginFlow::new(store.clone(), navigator.clone());

    assert_eq!(flow.submit("", "secret123").await, LoginState::Idle);
    assert_eq!(flow.submit("alice", "").await, LoginState::Idle);
    assert_eq!(flow.error(), Some(MISSING_FIELDS));
    assert!(!store.is_logged_in());
    assert!(navigator.routes().is_empty());
}

#[tokio::test]
async fn accepted_credentials_navigate_to_the_default_route() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;

    let navigator = Arc::new(RecordingNavigator::default());
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, navigator.clone());
    store.initialize().await;

    let mut flow = LoginFlow::new(store.clone(), navigator.clone());
    let state = flow.submit("alice", "secret123").await;

    assert_eq!(state, LoginState::NavigateAway);
    assert_eq!(flow.error(), None);
    assert!(store.is_logged_in());
    assert_eq!(navigator.routes(), [Route::Users]);
}

#[tokio::test]
async fn rejected_credentials_return_to_idle_with_the_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "Bad credentials"
        })))
        .mount(&server)
        .await;

    let navigator = Arc::new(RecordingNavigator::default());
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, navigator.clone());
    store.initialize().await;

    let mut flow = LoginFlow::new(store.clone(), navigator.clone());
    let state = flow.submit("alice", "wrong").await;

    assert_eq!(state, LoginState::Idle);
    assert_eq!(flow.error(), Some(INVALID_CREDENTIALS));
    assert!(!store.is_logged_in());
    assert!(navigator.routes().is_empty());
}

// ============================================================================
// CRUD error surfacing
// ============================================================================

#[tokio::test]
async fn server_message_field_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "message": "users table is on fire"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let err = UserClient::new(RestClient::new(mock_base_url(&server)), store)
        .list()
        .await
        .unwrap_err();
    assert_eq!(err.user_message(), "users table is on fire");
}

#[tokio::test]
async fn unstructured_errors_use_the_status_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let err = OrderClient::new(RestClient::new(mock_base_url(&server)), store)
        .list()
        .await
        .unwrap_err();
    assert_eq!(
        err.user_message(),
        "Error Code: 503\nMessage: Service Unavailable"
    );
}

#[tokio::test]
async fn client_side_failures_use_the_error_prefix() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let client = UserClient::new(
        RestClient::new(BaseUrl::new("http://127.0.0.1:9").unwrap()),
        store,
    );

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.user_message().starts_with("Error: "));
}

// ============================================================================
// CRUD clients
// ============================================================================

#[tokio::test]
async fn create_user_posts_the_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({"name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7, "name": "Ada"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let created = UserClient::new(RestClient::new(mock_base_url(&server)), store)
        .create(&User::new("Ada"))
        .await
        .unwrap();
    assert_eq!(created.id, Some(7));
}

#[tokio::test]
async fn create_user_with_empty_name_fails_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let err = UserClient::new(RestClient::new(mock_base_url(&server)), store)
        .create(&User::new("   "))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.user_message(), "name is required");
}

#[tokio::test]
async fn create_order_posts_the_wire_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(body_json(json!({
            "user": {"id": 1, "name": "Ada"},
            "productId": 42,
            "status": "PENDING"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "user": {"id": 1, "name": "Ada"},
            "productId": 42,
            "status": "PENDING"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let order = Order::new(
        User {
            id: Some(1),
            name: "Ada".to_string(),
        },
        42,
    );
    let created = OrderClient::new(RestClient::new(mock_base_url(&server)), store)
        .create(&order)
        .await
        .unwrap();
    assert_eq!(created.id, Some(3));
}

#[tokio::test]
async fn create_order_without_a_user_fails_locally() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = session_store(&server, &dir, Arc::new(RecordingNavigator::default()));

    let order = Order::new(User::new("nobody"), 42);
    let err = OrderClient::new(RestClient::new(mock_base_url(&server)), store)
        .create(&order)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
