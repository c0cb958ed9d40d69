/**
 * Authprobe - Entry Point
 *
 * Runs the scripted probe sequence against the configured auth server and
 * prints each outcome to the console.
 */

use authprobe::config::Config;
use authprobe::runner;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = Config::new();
    tracing::debug!(base_url = config.base_url(), "configuration loaded");

    runner::run(&config).await;
}
