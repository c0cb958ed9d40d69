/**
 * Probe Types Module
 *
 * Defines the credential fixture, the wire request bodies, and the
 * per-probe result record.
 */

use serde::{Deserialize, Serialize};

/// Credential fixture reused across all probes.
///
/// The defaults match the account the probe sequence registers on a fresh
/// server; the fixture is never persisted or validated locally.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: "testuser".to_string(),
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        }
    }
}

/// Registration request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl From<&Credentials> for RegisterRequest {
    fn from(credentials: &Credentials) -> Self {
        Self {
            username: credentials.username.clone(),
            email: credentials.email.clone(),
            password: credentials.password.clone(),
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Status code and parsed JSON body observed for one probe.
///
/// The body stays loosely typed since the server's response schema is not
/// guaranteed by this client; it is only rendered for the operator.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ProbeResult {
    /// Pretty-print the response body for console output
    pub fn pretty_body(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_else(|_| self.body.to_string())
    }
}
