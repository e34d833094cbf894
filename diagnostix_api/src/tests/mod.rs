use std::cell::RefCell;
use std::collections::HashMap;
use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::post;
use serde::Deserialize;
use serde_json::Value;
use serde_json::json;

use crate::auth::*;
use crate::model::*;
use crate::subscription::Listeners;
use crate::subscription::Subscription;


pub fn session_for(email: &str) -> Session {
    Session {
        access_token: format!("access-{email}"),
        token_type: "bearer".to_string(),
        expires_in: 3600,
        expires_at: None,
        refresh_token: format!("refresh-{email}"),
        user: User {
            id: format!("id-{email}"),
            email: Some(email.to_string()),
            user_metadata: UserMetadata::default(),
            created_at: None,
        },
    }
}

#[derive(Default)]
struct TestIdentityInner {
    session: Option<Session>,
    snapshot_error: Option<String>,
    sign_out_error: Option<String>,
    snapshot_requests: usize,
}

/// In-process identity provider with scriptable notifications and failures.
#[derive(Clone, Default)]
pub struct TestIdentity {
    inner: Rc<RefCell<TestIdentityInner>>,
    listeners: Listeners<AuthEvent>,
}

impl TestIdentity {
    pub fn with_session(session: Session) -> Self {
        let out = Self::default();
        out.inner.borrow_mut().session = Some(session);
        out
    }

    pub fn emit(&self, kind: AuthChangeEvent, session: Option<Session>) {
        self.inner.borrow_mut().session = session.clone();
        self.listeners.emit(&AuthEvent::new(kind, session));
    }

    pub fn fail_snapshot(&self, reason: &str) {
        self.inner.borrow_mut().snapshot_error = Some(reason.to_string());
    }

    pub fn fail_sign_out(&self, reason: &str) {
        self.inner.borrow_mut().sign_out_error = Some(reason.to_string());
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn snapshot_requests(&self) -> usize {
        self.inner.borrow().snapshot_requests
    }
}

impl IdentityProvider for TestIdentity {
    async fn get_session(&self) -> Result<Option<Session>> {
        let mut inner = self.inner.borrow_mut();
        inner.snapshot_requests += 1;
        if let Some(reason) = &inner.snapshot_error {
            anyhow::bail!("{reason}");
        }
        Ok(inner.session.clone())
    }

    fn on_session_change(&self, callback: impl Fn(&AuthEvent) + 'static) -> Subscription {
        self.listeners.subscribe(callback)
    }

    async fn sign_out(&self) -> Result<()> {
        let error = self.inner.borrow().sign_out_error.clone();
        if let Some(reason) = error {
            anyhow::bail!("{reason}");
        }
        self.emit(AuthChangeEvent::SignedOut, None);
        Ok(())
    }
}

pub const TEST_ANON_KEY: &str = "test-anon-key";

#[derive(Default)]
pub struct MockIdentityState {
    // email keyed to (password, user)
    pub users: HashMap<String, (String, Value)>,
    pub access_tokens: HashSet<String>,
    // refresh token keyed to email
    pub refresh_tokens: HashMap<String, String>,
    pub autoconfirm: bool,
    pub fail_logout: bool,
    pub issued: u64,
}

/// A loopback stand-in for the hosted identity service.
pub struct MockIdentityServer {
    pub url: String,
    pub state: Arc<Mutex<MockIdentityState>>,
}

impl MockIdentityServer {
    pub async fn new() -> Result<Self> {
        let state = Arc::new(Mutex::new(MockIdentityState::default()));
        let app = Router::new()
            .route("/auth/v1/token", post(token))
            .route("/auth/v1/signup", post(signup))
            .route("/auth/v1/logout", post(logout))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?.to_string();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        tokio::time::sleep(Duration::from_millis(50)).await;

        Ok(Self {
            url: format!("http://{addr}"),
            state,
        })
    }

    pub fn add_user(&self, email: &str, password: &str, full_name: Option<&str>) {
        let user = json!({
            "id": format!("id-{email}"),
            "email": email,
            "user_metadata": { "full_name": full_name },
        });
        self.state
            .lock()
            .unwrap()
            .users
            .insert(email.to_string(), (password.to_string(), user));
    }
}

type Shared = Arc<Mutex<MockIdentityState>>;

#[derive(Deserialize)]
struct GrantQuery {
    grant_type: String,
}

fn has_api_key(headers: &HeaderMap) -> bool {
    headers
        .get("apikey")
        .and_then(|v| v.to_str().ok())
        .map_or(false, |v| v == TEST_ANON_KEY)
}

fn reject(status: StatusCode, body: Value) -> Response {
    (status, Json(body)).into_response()
}

fn issue_session(state: &mut MockIdentityState, email: &str) -> Value {
    state.issued += 1;
    let access_token = format!("access-{}", state.issued);
    let refresh_token = format!("refresh-{}", state.issued);
    state.access_tokens.insert(access_token.clone());
    state
        .refresh_tokens
        .insert(refresh_token.clone(), email.to_string());
    let user = state.users[email].1.clone();
    json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": refresh_token,
        "user": user,
    })
}

async fn token(
    State(state): State<Shared>,
    Query(query): Query<GrantQuery>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if !has_api_key(&headers) {
        return reject(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "No API key found in request" }),
        );
    }
    let mut state = state.lock().unwrap();
    match query.grant_type.as_str() {
        "password" => {
            let email = body["email"].as_str().unwrap_or_default().to_string();
            let password = body["password"].as_str().unwrap_or_default();
            let valid = state
                .users
                .get(&email)
                .map_or(false, |(expected, _)| expected == password);
            if valid {
                Json(issue_session(&mut state, &email)).into_response()
            } else {
                reject(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" }),
                )
            }
        }
        "refresh_token" => {
            let refresh_token = body["refresh_token"].as_str().unwrap_or_default();
            match state.refresh_tokens.remove(refresh_token) {
                Some(email) => Json(issue_session(&mut state, &email)).into_response(),
                None => reject(
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "invalid_grant", "error_description": "Invalid Refresh Token: Refresh Token Not Found" }),
                ),
            }
        }
        other => reject(
            StatusCode::BAD_REQUEST,
            json!({ "msg": format!("unsupported grant_type {other}") }),
        ),
    }
}

async fn signup(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !has_api_key(&headers) {
        return reject(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "No API key found in request" }),
        );
    }
    let mut state = state.lock().unwrap();
    let email = body["email"].as_str().unwrap_or_default().to_string();
    let password = body["password"].as_str().unwrap_or_default().to_string();
    if state.users.contains_key(&email) {
        return reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "code": 422, "msg": "User already registered" }),
        );
    }
    let user = json!({
        "id": format!("id-{email}"),
        "email": email,
        "user_metadata": body["data"].clone(),
    });
    state.users.insert(email.clone(), (password, user.clone()));
    if state.autoconfirm {
        Json(issue_session(&mut state, &email)).into_response()
    } else {
        Json(user).into_response()
    }
}

async fn logout(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let mut state = state.lock().unwrap();
    if state.fail_logout {
        return reject(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": "logout unavailable" }),
        );
    }
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .unwrap_or_default()
        .to_string();
    if state.access_tokens.remove(&token) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        reject(
            StatusCode::UNAUTHORIZED,
            json!({ "message": "invalid JWT" }),
        )
    }
}
