// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep-link configuration model.
//!
//! All fields are optional and default to sensible values; fields use
//! `#[serde(deny_unknown_fields)]` so typos in host config surface at load
//! time instead of being silently ignored.

use serde::{Deserialize, Serialize};

/// Configuration for tracking-link resolution.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DeeplinkConfig {
    /// Override for the tracking-link pattern. `None` uses the platform
    /// default. A pattern that fails to compile fails closed: every link
    /// is classified as non-tracking.
    #[serde(default)]
    pub tracking_pattern: Option<String>,

    /// Timeout for the single resolution GET, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// How long committed attribution stays valid, in hours. `None` keeps
    /// attribution until the next resolution overwrites it.
    #[serde(default)]
    pub attribution_ttl_hours: Option<i64>,
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for DeeplinkConfig {
    fn default() -> Self {
        Self {
            tracking_pattern: None,
            request_timeout_secs: default_request_timeout_secs(),
            attribution_ttl_hours: None,
        }
    }
}
