/**
 * Auth API Client Module
 *
 * HTTP client functions for the auth API, one per scripted interaction.
 * Each function issues its request, blocks until the server answers (no
 * timeout is configured), and returns the observed status code and parsed
 * JSON body. Callers decide how to render the outcome.
 */

use crate::config::Config;
use crate::error::ProbeError;
use crate::types::{Credentials, LoginRequest, ProbeResult, RegisterRequest};
use reqwest::{Client, Response};

async fn into_result(response: Response) -> Result<ProbeResult, ProbeError> {
    let status = response.status().as_u16();
    // A non-JSON body is a hard error and aborts the remaining probes.
    let body = response.json::<serde_json::Value>().await?;
    Ok(ProbeResult { status, body })
}

/// Register the credential fixture via POST `/api/register`.
pub async fn register(
    config: &Config,
    credentials: &Credentials,
) -> Result<ProbeResult, ProbeError> {
    let client = Client::new();
    let url = config.api_url("/api/register");
    let request = RegisterRequest::from(credentials);

    tracing::debug!(%url, username = %request.username, "sending registration request");

    let response = client.post(&url).json(&request).send().await?;
    into_result(response).await
}

/// Log in via POST `/api/login`.
pub async fn login(
    config: &Config,
    username: &str,
    password: &str,
) -> Result<ProbeResult, ProbeError> {
    let client = Client::new();
    let url = config.api_url("/api/login");
    let request = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    tracing::debug!(%url, %username, "sending login request");

    let response = client.post(&url).json(&request).send().await?;
    into_result(response).await
}

/// List users via GET `/api/users` through a session-scoped client.
///
/// A cookie-retaining client logs in first so the session cookie set by the
/// server is attached to the listing request. The login response itself is
/// discarded; only the second request's status and body are surfaced.
pub async fn list_users(
    config: &Config,
    credentials: &Credentials,
) -> Result<ProbeResult, ProbeError> {
    let client = Client::builder().cookie_store(true).build()?;

    let login_request = LoginRequest {
        username: credentials.username.clone(),
        password: credentials.password.clone(),
    };
    client
        .post(config.api_url("/api/login"))
        .json(&login_request)
        .send()
        .await?;

    let url = config.api_url("/api/users");
    tracing::debug!(%url, "requesting user listing through session");

    let response = client.get(&url).send().await?;
    into_result(response).await
}
