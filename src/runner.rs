/**
 * Probe Runner Module
 *
 * Runs the five scripted probes in a fixed order and reports each outcome
 * to the operator via console output. The sequence never branches: the
 * booleans returned by the first two probes only gate an extra success
 * line, they never skip later probes.
 */

use crate::client;
use crate::config::Config;
use crate::error::ProbeError;
use crate::types::{Credentials, ProbeResult};

const RULE_WIDTH: usize = 50;

/// Password used by the wrong-password probe
const WRONG_PASSWORD: &str = "wrongpassword";

fn print_result(result: &ProbeResult) {
    println!("Status Code: {}", result.status);
    println!("Response: {}", result.pretty_body());
}

/// Probe 1: registration. Success means the server answered 201.
async fn probe_register(
    config: &Config,
    credentials: &Credentials,
) -> Result<bool, ProbeError> {
    println!("\n--- Testing Registration ---");
    let result = client::register(config, credentials).await?;
    print_result(&result);
    Ok(result.status == 201)
}

/// Probe 2: login. Success means the server answered 200.
async fn probe_login(config: &Config, credentials: &Credentials) -> Result<bool, ProbeError> {
    println!("\n--- Testing Login ---");
    let result = client::login(config, &credentials.username, &credentials.password).await?;
    print_result(&result);
    Ok(result.status == 200)
}

/// Probe 3: user listing through an authenticated session.
async fn probe_list_users(
    config: &Config,
    credentials: &Credentials,
) -> Result<(), ProbeError> {
    println!("\n--- Testing Get Users ---");
    let result = client::list_users(config, credentials).await?;
    print_result(&result);
    Ok(())
}

/// Probe 4: duplicate registration must be rejected with exactly 400.
async fn probe_duplicate_register(
    config: &Config,
    credentials: &Credentials,
) -> Result<(), ProbeError> {
    println!("\n--- Testing Duplicate Registration ---");
    let result = client::register(config, credentials).await?;
    print_result(&result);
    if result.status == 400 {
        println!("✓ Correctly rejected duplicate registration!");
    } else {
        tracing::warn!(status = result.status, "duplicate registration was not rejected");
        println!("✗ Should have rejected!");
    }
    Ok(())
}

/// Probe 5: a wrong password must be rejected with exactly 401.
async fn probe_wrong_password(
    config: &Config,
    credentials: &Credentials,
) -> Result<(), ProbeError> {
    println!("\n--- Testing Wrong Password ---");
    let result = client::login(config, &credentials.username, WRONG_PASSWORD).await?;
    print_result(&result);
    if result.status == 401 {
        println!("✓ Correctly rejected wrong password!");
    } else {
        tracing::warn!(status = result.status, "wrong password was not rejected");
        println!("✗ Should have rejected!");
    }
    Ok(())
}

/// Run the full probe sequence in order.
///
/// Errors propagate immediately and abort the remaining probes; there is no
/// per-probe recovery and no retry.
pub async fn run_suite(config: &Config) -> Result<(), ProbeError> {
    let credentials = Credentials::default();

    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Auth App API Test Suite");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("\nTesting against: {}", config.base_url());
    println!("\nMake sure the auth server is running!");
    println!("{}", "-".repeat(RULE_WIDTH));

    tracing::info!(base_url = config.base_url(), "starting probe suite");

    if probe_register(config, &credentials).await? {
        println!("\n✓ Registration successful!");
    }

    if probe_login(config, &credentials).await? {
        println!("\n✓ Login successful!");
    }

    probe_list_users(config, &credentials).await?;

    probe_duplicate_register(config, &credentials).await?;
    probe_wrong_password(config, &credentials).await?;

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("All tests completed!");
    println!("{}", "=".repeat(RULE_WIDTH));

    Ok(())
}

/// Top-level entry point: run the suite and render any error.
///
/// A connection failure gets an operator-facing hint; anything else prints
/// its message. The process ends normally either way.
pub async fn run(config: &Config) {
    match run_suite(config).await {
        Ok(()) => {}
        Err(ProbeError::ConnectionUnavailable { .. }) => {
            println!("\n❌ Error: Could not connect to the server!");
            println!("Make sure the auth server is running on {}", config.base_url());
        }
        Err(err) => {
            println!("\n❌ Error: {}", err);
        }
    }
}
