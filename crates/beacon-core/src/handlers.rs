// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Handler traits the host application implements to intercept actions.
//!
//! Each trait is a single capability. Handlers are optional: the dispatcher
//! invokes them when registered and falls back to default behavior when not.
//! Handlers must return quickly; there is no suspension contract.

use tracing::info;
use url::Url;

use crate::action::{Action, ActionContext};

/// Invoked for open-URL actions before the default opener runs.
///
/// Return `true` to consume the URL and suppress the default open.
pub trait UrlHandler: Send + Sync {
    fn handle_url(&self, url: &Url, context: &ActionContext) -> bool;
}

/// Invoked for custom actions. Custom actions never fall through to URL
/// handling; an unhandled custom action is simply reported as unhandled.
pub trait CustomActionHandler: Send + Sync {
    fn handle_custom_action(&self, action: &Action, context: &ActionContext) -> bool;
}

/// Performs the actual open side effect for a URL nobody consumed.
pub trait UrlOpener: Send + Sync {
    fn open_url(&self, url: &Url);
}

/// Default opener for hosts that register nothing. The mobile platform
/// shims replace this with the real system open call; here it only logs.
#[derive(Debug, Default)]
pub struct SystemUrlOpener;

impl UrlOpener for SystemUrlOpener {
    fn open_url(&self, url: &Url) {
        info!(url = %url, "opening URL with system opener");
    }
}
