//! Shared test fixtures
//!
//! Provides a stateful mock auth server backed by wiremock. Registered
//! accounts persist for the lifetime of the server, so duplicate
//! registration and cross-run idempotence can be exercised realistically.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Session cookie issued on successful login
pub const SESSION_COOKIE: &str = "session=probe-session-token";

struct StoredUser {
    email: String,
    password: String,
}

/// Shared server-side state, inspectable from tests
#[derive(Default)]
pub struct AuthState {
    users: Mutex<HashMap<String, StoredUser>>,
    pub register_calls: AtomicUsize,
    pub login_calls: AtomicUsize,
    pub users_calls: AtomicUsize,
}

/// A mock auth server speaking the three-endpoint HTTP contract
pub struct MockAuthServer {
    pub server: MockServer,
    pub state: Arc<AuthState>,
}

impl MockAuthServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state = Arc::new(AuthState::default());

        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(RegisterResponder {
                state: state.clone(),
            })
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(LoginResponder {
                state: state.clone(),
            })
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/users"))
            .respond_with(UsersResponder {
                state: state.clone(),
            })
            .mount(&server)
            .await;

        Self { server, state }
    }

    pub fn base_url(&self) -> String {
        self.server.uri()
    }

    pub fn login_calls(&self) -> usize {
        self.state.login_calls.load(Ordering::SeqCst)
    }

    pub fn users_calls(&self) -> usize {
        self.state.users_calls.load(Ordering::SeqCst)
    }
}

fn field(body: &serde_json::Value, name: &str) -> String {
    body[name].as_str().unwrap_or_default().to_string()
}

struct RegisterResponder {
    state: Arc<AuthState>,
}

impl Respond for RegisterResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.state.register_calls.fetch_add(1, Ordering::SeqCst);

        let body: serde_json::Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "invalid request body"}))
            }
        };
        let username = field(&body, "username");
        let email = field(&body, "email");
        let password = field(&body, "password");

        let mut users = self.state.users.lock().unwrap();
        if users.contains_key(&username) || users.values().any(|user| user.email == email) {
            return ResponseTemplate::new(400).set_body_json(
                serde_json::json!({"error": "username or email already registered"}),
            );
        }
        users.insert(username.clone(), StoredUser { email, password });

        ResponseTemplate::new(201).set_body_json(
            serde_json::json!({"message": "user registered", "username": username}),
        )
    }
}

struct LoginResponder {
    state: Arc<AuthState>,
}

impl Respond for LoginResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.state.login_calls.fetch_add(1, Ordering::SeqCst);

        let body: serde_json::Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => {
                return ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"error": "invalid request body"}))
            }
        };
        let username = field(&body, "username");
        let password = field(&body, "password");

        let users = self.state.users.lock().unwrap();
        match users.get(&username) {
            Some(user) if user.password == password => ResponseTemplate::new(200)
                .insert_header("set-cookie", SESSION_COOKIE)
                .set_body_json(serde_json::json!({"message": "login successful"})),
            _ => ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "invalid credentials"})),
        }
    }
}

struct UsersResponder {
    state: Arc<AuthState>,
}

impl Respond for UsersResponder {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        self.state.users_calls.fetch_add(1, Ordering::SeqCst);

        let authenticated = request
            .headers
            .get("cookie")
            .and_then(|value| value.to_str().ok())
            .map(|value| value.contains(SESSION_COOKIE))
            .unwrap_or(false);
        if !authenticated {
            return ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "authentication required"}));
        }

        let users = self.state.users.lock().unwrap();
        let listing: Vec<serde_json::Value> = users
            .iter()
            .map(|(username, user)| {
                serde_json::json!({"username": username, "email": user.email})
            })
            .collect();
        ResponseTemplate::new(200).set_body_json(serde_json::json!({"users": listing}))
    }
}
