// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking-link resolution over HTTP.
//!
//! A tracking link points at the platform's redirect service. Resolution
//! issues a single GET with redirect-following disabled, reads the redirect
//! target out of the `Location` header, and harvests campaign attribution
//! from the response cookies. The redirect is never followed: the resolver's
//! job is to learn the destination, not to fetch it.

use std::sync::Arc;
use std::time::Duration;

use beacon_core::{AttributionInfo, AttributionStore, BeaconError};
use reqwest::header::{HeaderMap, LOCATION, SET_COOKIE};
use tracing::{debug, warn};
use url::Url;

use crate::classifier::LinkClassifier;
use crate::config::DeeplinkConfig;

const CAMPAIGN_ID_COOKIE: &str = "iterableEmailCampaignId";
const TEMPLATE_ID_COOKIE: &str = "iterableTemplateId";
const MESSAGE_ID_COOKIE: &str = "iterableMessageId";

/// What one resolution captured from the redirect response. Created fresh
/// per call; never shared across concurrent resolutions.
#[derive(Debug, Default)]
struct ResolutionState {
    location: Option<Url>,
    campaign_id: Option<i64>,
    template_id: Option<i64>,
    message_id: Option<String>,
}

/// Resolves tracking links to their true destination and commits harvested
/// attribution to the shared store.
///
/// Concurrent `resolve` calls are independent except for the store, where
/// commits race last-write-wins.
#[derive(Debug)]
pub struct RedirectResolver {
    client: reqwest::Client,
    classifier: LinkClassifier,
    store: Arc<AttributionStore>,
    attribution_ttl: Option<chrono::Duration>,
}

impl RedirectResolver {
    /// Builds a resolver with a transport configured to intercept redirects
    /// rather than follow them.
    pub fn new(config: &DeeplinkConfig, store: Arc<AttributionStore>) -> Result<Self, BeaconError> {
        let classifier = match &config.tracking_pattern {
            Some(pattern) => LinkClassifier::with_pattern(pattern),
            None => LinkClassifier::new(),
        };
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| BeaconError::Network {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            classifier,
            store,
            attribution_ttl: config.attribution_ttl_hours.map(chrono::Duration::hours),
        })
    }

    pub fn classifier(&self) -> &LinkClassifier {
        &self.classifier
    }

    /// Resolves `link` to its destination URL.
    ///
    /// Non-tracking links pass through unchanged with no network call.
    /// Tracking links yield the intercepted redirect target, or `None` when
    /// the server never redirects or the transport fails; failures are
    /// logged, never returned. When the redirect carries all three
    /// attribution cookies, the triple is committed to the store before
    /// this returns.
    pub async fn resolve(&self, link: &Url) -> Option<Url> {
        if !self.classifier.is_tracking_link(link.as_str()) {
            return Some(link.clone());
        }

        let response = match self.client.get(link.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %link, error = %e, "tracking link request failed");
                return None;
            }
        };

        let status = response.status();
        debug!(url = %link, status = %status, "tracking link response");
        if !status.is_redirection() {
            // A 200 without a redirect resolves to nothing; the caller
            // falls back to the original link.
            return None;
        }

        let state = capture_redirect(link, response.headers());
        if let Some(location) = &state.location {
            debug!(url = %link, location = %location, "captured redirect target");
            if let (Some(campaign_id), Some(template_id), Some(message_id)) =
                (state.campaign_id, state.template_id, state.message_id)
            {
                self.store.commit(
                    AttributionInfo {
                        campaign_id,
                        template_id,
                        message_id,
                    },
                    self.attribution_ttl,
                );
            }
        }
        state.location
    }
}

/// Records the redirect target and attribution cookies from an intercepted
/// redirect response.
fn capture_redirect(link: &Url, headers: &HeaderMap) -> ResolutionState {
    let mut state = ResolutionState::default();

    if let Some(location) = headers.get(LOCATION).and_then(|v| v.to_str().ok()) {
        // Relative Location targets resolve against the tracking link.
        match Url::parse(location).or_else(|_| link.join(location)) {
            Ok(target) => state.location = Some(target),
            Err(e) => warn!(location, error = %e, "unparseable redirect location"),
        }
    }

    for raw in headers.get_all(SET_COOKIE) {
        let Ok(raw) = raw.to_str() else { continue };
        let Some((name, value)) = cookie_pair(raw) else {
            continue;
        };
        match name {
            CAMPAIGN_ID_COOKIE => state.campaign_id = Some(numeric_cookie(value)),
            TEMPLATE_ID_COOKIE => state.template_id = Some(numeric_cookie(value)),
            MESSAGE_ID_COOKIE => state.message_id = Some(value.to_string()),
            _ => {}
        }
    }

    state
}

/// Extracts the name/value pair from a `Set-Cookie` header, ignoring
/// attributes like `Path` and `Max-Age`.
fn cookie_pair(raw: &str) -> Option<(&str, &str)> {
    let pair = raw.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    Some((name.trim(), value.trim()))
}

/// Malformed numeric cookies default to 0 rather than aborting resolution.
fn numeric_cookie(value: &str) -> i64 {
    value.parse().unwrap_or(0)
}
