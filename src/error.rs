//! Probe Error Types
//!
//! A closed set of error kinds for the probe run. Individual probes do not
//! recover from errors; everything propagates to the top-level runner, which
//! renders a message and ends the run. A malformed response in an early
//! probe therefore aborts the remaining sequence.

use thiserror::Error;

/// Error kinds that can abort a probe run
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The target server could not be reached
    #[error("could not connect to the server: {message}")]
    ConnectionUnavailable {
        /// Human-readable error message
        message: String,
    },

    /// The response body was not valid JSON
    #[error("failed to decode response body: {message}")]
    ResponseDecode {
        /// Human-readable error message
        message: String,
    },

    /// Any other request failure
    #[error("{message}")]
    Other {
        /// Human-readable error message
        message: String,
    },
}

impl ProbeError {
    /// Create a new connection-unavailable error
    pub fn connection(message: impl Into<String>) -> Self {
        Self::ConnectionUnavailable {
            message: message.into(),
        }
    }

    /// Create a new response-decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::ResponseDecode {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::connection(err.to_string())
        } else if err.is_decode() {
            Self::decode(err.to_string())
        } else {
            Self::other(err.to_string())
        }
    }
}
