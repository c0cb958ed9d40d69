//! Authprobe - Auth API smoke-test client
//!
//! A small probe harness that exercises a remote HTTP authentication API
//! (registration, login, session-authenticated user listing) by issuing a
//! fixed sequence of requests and printing each outcome to the console.
//!
//! # Module Structure
//!
//! - **`config`** - Target base URL with environment override
//! - **`types`** - Wire request bodies and the per-probe result record
//! - **`error`** - Closed error-kind enum for the probe run
//! - **`client`** - HTTP functions, one per scripted interaction
//! - **`runner`** - The ordered probe sequence and console reporting
//!
//! # Usage
//!
//! ```rust,no_run
//! use authprobe::config::Config;
//! use authprobe::runner;
//!
//! # async fn example() {
//! let config = Config::new();
//! runner::run(&config).await;
//! # }
//! ```
//!
//! The server under test is an external collaborator; this crate only
//! consumes its HTTP contract and renders what it observes.

/// Target endpoint configuration
pub mod config;

/// Wire types and probe results
pub mod types;

/// Probe error kinds
pub mod error;

/// HTTP client functions
pub mod client;

/// Scripted probe sequence
pub mod runner;
