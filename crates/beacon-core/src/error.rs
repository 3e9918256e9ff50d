// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Beacon SDK.

use thiserror::Error;

/// The primary error type used across Beacon crates.
///
/// Runtime deep-link resolution never surfaces these to the host app;
/// failures there degrade to fallback values and are logged. `Err` values
/// only come out of construction-time APIs (client setup, configuration).
#[derive(Debug, Error)]
pub enum BeaconError {
    /// Configuration errors (invalid pattern, bad timeout, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-layer errors (client construction, transport failure).
    #[error("network error: {message}")]
    Network {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A string could not be parsed as a URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
