// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deep-link entry points exposed to the wider SDK.
//!
//! Universal-link callbacks and notification taps land here. Tracking links
//! go through the resolver and the resulting destination is dispatched as
//! an open-URL action; everything else dispatches directly.

use std::sync::Arc;

use beacon_core::{
    Action, ActionContext, ActionSource, AttributionStore, BeaconError, UrlHandler, UrlOpener,
};
use tracing::warn;
use url::Url;

use crate::config::DeeplinkConfig;
use crate::resolver::RedirectResolver;

/// Handles incoming deep links for the SDK.
#[derive(Debug)]
pub struct DeeplinkManager {
    resolver: Arc<RedirectResolver>,
}

impl DeeplinkManager {
    pub fn new(config: &DeeplinkConfig, store: Arc<AttributionStore>) -> Result<Self, BeaconError> {
        Ok(Self {
            resolver: Arc::new(RedirectResolver::new(config, store)?),
        })
    }

    /// Tracks a link click and returns the redirected URL's string form,
    /// or `None` when the link does not resolve.
    pub async fn get_and_track_deeplink(&self, url: &Url) -> Option<String> {
        self.resolver.resolve(url).await.map(String::from)
    }

    /// Handles a universal link delivered by the OS.
    ///
    /// Tracking links are always ours: this returns `true` immediately and
    /// finishes asynchronously, resolving the link (falling back to the
    /// original on failure) and dispatching it as an open-URL action. Other
    /// links dispatch synchronously; an unparseable URL returns `false`.
    ///
    /// Must be called from within a Tokio runtime; the asynchronous arm
    /// runs on a spawned task.
    pub fn handle_link(
        &self,
        url: &str,
        url_handler: Option<Arc<dyn UrlHandler>>,
        url_opener: Arc<dyn UrlOpener>,
    ) -> bool {
        if self.resolver.classifier().is_tracking_link(url) {
            let resolver = Arc::clone(&self.resolver);
            let original = url.to_string();
            tokio::spawn(async move {
                let resolved = match Url::parse(&original) {
                    Ok(link) => resolver.resolve(&link).await.map(String::from),
                    Err(e) => {
                        warn!(url = %original, error = %e, "tracking link is not a valid URL");
                        None
                    }
                };
                let target = resolved.unwrap_or(original);
                let Some(action) = Action::open_url(&target) else {
                    warn!(url = %target, "resolved link did not yield an action");
                    return;
                };
                let context = ActionContext::new(action.clone(), ActionSource::UniversalLink);
                beacon_actions::execute(
                    &action,
                    &context,
                    None,
                    url_handler.as_deref(),
                    url_opener.as_ref(),
                );
            });
            // The link is ours to handle regardless of how resolution ends.
            return true;
        }

        match Action::open_url(url) {
            Some(action) => {
                let context = ActionContext::new(action.clone(), ActionSource::UniversalLink);
                beacon_actions::execute(
                    &action,
                    &context,
                    None,
                    url_handler.as_deref(),
                    url_opener.as_ref(),
                )
            }
            None => false,
        }
    }
}
