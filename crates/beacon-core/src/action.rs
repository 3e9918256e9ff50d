// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dispatchable actions and their originating context.
//!
//! An [`Action`] is the intent derived from a resolved link or a notification
//! payload: either open a URL, or run a named custom action with an arbitrary
//! data map. The [`ActionContext`] records where the action came from so
//! handlers can branch on the source.

use serde_json::{Map, Value};
use tracing::warn;
use url::Url;

/// Where an action originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSource {
    /// The user tapped a push notification.
    PushOpen,
    /// The OS delivered a universal/app link.
    UniversalLink,
    /// An in-app message button or link.
    InApp,
}

/// A dispatchable action.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Open the given URL, either via a registered handler or the system opener.
    OpenUrl(Url),
    /// A named action the host application handles itself.
    Custom {
        action_type: String,
        data: Map<String, Value>,
    },
}

impl Action {
    /// Builds an [`Action::OpenUrl`] from a URL string, or `None` if the
    /// string does not parse. This is the only user-visible failure signal
    /// in the deep-link subsystem.
    pub fn open_url(url: &str) -> Option<Self> {
        match Url::parse(url) {
            Ok(parsed) => Some(Action::OpenUrl(parsed)),
            Err(e) => {
                warn!(url, error = %e, "cannot build open-url action");
                None
            }
        }
    }

    /// Builds an action from a notification payload of the form
    /// `{"type": ..., "data": ...}`.
    ///
    /// A `"openUrl"` type requires a valid URL string in `data`. Any other
    /// non-empty type yields [`Action::Custom`] carrying the remaining
    /// payload fields as its data map. Missing or empty types yield `None`.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let fields = payload.as_object()?;
        let action_type = fields.get("type")?.as_str()?.trim();
        if action_type.is_empty() {
            return None;
        }
        if action_type == "openUrl" {
            return Self::open_url(fields.get("data")?.as_str()?);
        }
        let mut data = fields.clone();
        data.remove("type");
        Some(Action::Custom {
            action_type: action_type.to_string(),
            data,
        })
    }
}

/// An action paired with its source, passed by reference to handlers.
#[derive(Debug, Clone)]
pub struct ActionContext {
    pub action: Action,
    pub source: ActionSource,
}

impl ActionContext {
    pub fn new(action: Action, source: ActionSource) -> Self {
        Self { action, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_url_parses_valid_url() {
        let action = Action::open_url("https://example.com/page").unwrap();
        match action {
            Action::OpenUrl(url) => assert_eq!(url.as_str(), "https://example.com/page"),
            other => panic!("expected OpenUrl, got {other:?}"),
        }
    }

    #[test]
    fn open_url_rejects_garbage() {
        assert_eq!(Action::open_url("not a url"), None);
        assert_eq!(Action::open_url(""), None);
    }

    #[test]
    fn payload_open_url_type() {
        let payload = json!({"type": "openUrl", "data": "https://example.com/a"});
        let action = Action::from_payload(&payload).unwrap();
        assert!(matches!(action, Action::OpenUrl(_)));
    }

    #[test]
    fn payload_open_url_with_bad_url_is_rejected() {
        let payload = json!({"type": "openUrl", "data": "::::"});
        assert_eq!(Action::from_payload(&payload), None);
    }

    #[test]
    fn payload_custom_type_keeps_extra_fields() {
        let payload = json!({"type": "showOffer", "offerId": 42, "tier": "gold"});
        let action = Action::from_payload(&payload).unwrap();
        match action {
            Action::Custom { action_type, data } => {
                assert_eq!(action_type, "showOffer");
                assert_eq!(data.get("offerId"), Some(&json!(42)));
                assert_eq!(data.get("tier"), Some(&json!("gold")));
                assert!(!data.contains_key("type"));
            }
            other => panic!("expected Custom, got {other:?}"),
        }
    }

    #[test]
    fn payload_missing_or_empty_type_is_rejected() {
        assert_eq!(Action::from_payload(&json!({"data": "x"})), None);
        assert_eq!(Action::from_payload(&json!({"type": "  "})), None);
        assert_eq!(Action::from_payload(&json!("just a string")), None);
    }
}
