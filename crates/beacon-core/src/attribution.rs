// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Campaign attribution data and the process-wide attribution store.
//!
//! When a tracking link resolves, the redirect response carries campaign,
//! template, and message identifiers in cookies. The resolver commits them
//! here; event-tracking calls elsewhere in the SDK read them back to tag
//! opens and clicks with their originating send.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The campaign/template/message triple recovered from a resolved tracking
/// link. All three fields are required; a partial triple is never committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributionInfo {
    pub campaign_id: i64,
    pub template_id: i64,
    pub message_id: String,
}

#[derive(Debug)]
struct StoredAttribution {
    info: AttributionInfo,
    expires_at: Option<DateTime<Utc>>,
}

/// Holder of the most recently committed [`AttributionInfo`].
///
/// Concurrent resolutions racing on the store are resolved last-write-wins:
/// each commit atomically replaces the whole snapshot, and a resolution that
/// starts but fails leaves any previously committed value untouched.
#[derive(Debug, Default)]
pub struct AttributionStore {
    current: ArcSwapOption<StoredAttribution>,
}

impl AttributionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replaces the stored attribution. A `ttl` of `None` keeps
    /// the value until the next commit or [`clear`](Self::clear).
    pub fn commit(&self, info: AttributionInfo, ttl: Option<Duration>) {
        let expires_at = ttl.map(|ttl| Utc::now() + ttl);
        debug!(
            campaign_id = info.campaign_id,
            template_id = info.template_id,
            message_id = %info.message_id,
            "committing attribution"
        );
        self.current
            .store(Some(Arc::new(StoredAttribution { info, expires_at })));
    }

    /// Returns the current attribution, or `None` if nothing has been
    /// committed or the committed value has expired. Expiry is checked
    /// lazily on read; an expired snapshot stays in place until overwritten.
    pub fn current(&self) -> Option<AttributionInfo> {
        let guard = self.current.load();
        let stored = guard.as_ref()?;
        if let Some(expires_at) = stored.expires_at {
            if Utc::now() >= expires_at {
                return None;
            }
        }
        Some(stored.info.clone())
    }

    pub fn clear(&self) {
        self.current.store(None);
    }
}
