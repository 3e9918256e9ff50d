// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking-link classification.
//!
//! A tracking link lives on the platform's redirect/shortlink domain and
//! must be resolved via an HTTP round-trip before it can be opened.
//! Classification is a pure pattern match with no failure modes.

use regex::Regex;
use tracing::warn;

/// Default pattern for the platform's redirect domain. Matches shortlinks
/// like `https://links.example.com/abc123`.
const DEFAULT_TRACKING_PATTERN: &str = r"^https?://links\.[^/?#]+/[A-Za-z0-9]";

/// Decides whether a URL is a platform tracking link.
#[derive(Debug, Clone)]
pub struct LinkClassifier {
    pattern: Option<Regex>,
}

impl LinkClassifier {
    /// Classifier for the platform's default redirect domain.
    pub fn new() -> Self {
        Self::with_pattern(DEFAULT_TRACKING_PATTERN)
    }

    /// Classifier with a host-supplied pattern. A pattern that fails to
    /// compile fails closed: every link is classified as non-tracking.
    pub fn with_pattern(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(compiled) => Self {
                pattern: Some(compiled),
            },
            Err(e) => {
                warn!(pattern, error = %e, "tracking-link pattern failed to compile, classifying all links as non-tracking");
                Self { pattern: None }
            }
        }
    }

    /// True iff `url` matches the tracking pattern. Pure and side-effect-free.
    pub fn is_tracking_link(&self, url: &str) -> bool {
        self.pattern.as_ref().is_some_and(|re| re.is_match(url))
    }
}

impl Default for LinkClassifier {
    fn default() -> Self {
        Self::new()
    }
}
