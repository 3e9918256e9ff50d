// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs an action against the host's registered handlers.
//!
//! Resolution order is fixed: the specific handler gets the action first,
//! the generic opener only runs as a fallback. This lets host applications
//! intercept without losing default behavior.

use beacon_core::{Action, ActionContext, CustomActionHandler, UrlHandler, UrlOpener};
use tracing::debug;

/// Dispatches `action` and reports whether anything consumed it.
///
/// Custom actions go to the custom-action handler if one is registered and
/// never fall through to URL handling; with no handler they are unhandled.
/// Open-URL actions try the URL handler first; if it is absent or declines,
/// the opener performs the open unconditionally and the action counts as
/// handled.
pub fn execute(
    action: &Action,
    context: &ActionContext,
    custom_action_handler: Option<&dyn CustomActionHandler>,
    url_handler: Option<&dyn UrlHandler>,
    url_opener: &dyn UrlOpener,
) -> bool {
    match action {
        Action::Custom { action_type, .. } => match custom_action_handler {
            Some(handler) => {
                let handled = handler.handle_custom_action(action, context);
                debug!(action_type = %action_type, handled, "custom action dispatched");
                handled
            }
            None => {
                debug!(action_type = %action_type, "no custom action handler registered");
                false
            }
        },
        Action::OpenUrl(url) => {
            if let Some(handler) = url_handler {
                if handler.handle_url(url, context) {
                    debug!(url = %url, "URL consumed by registered handler");
                    return true;
                }
            }
            debug!(url = %url, "falling back to URL opener");
            url_opener.open_url(url);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use beacon_core::ActionSource;
    use serde_json::Map;
    use url::Url;

    use super::*;

    #[derive(Default)]
    struct RecordingUrlHandler {
        consume: bool,
        calls: AtomicUsize,
    }

    impl UrlHandler for RecordingUrlHandler {
        fn handle_url(&self, _url: &Url, _context: &ActionContext) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.consume
        }
    }

    #[derive(Default)]
    struct RecordingCustomHandler {
        consume: bool,
        calls: AtomicUsize,
    }

    impl CustomActionHandler for RecordingCustomHandler {
        fn handle_custom_action(&self, _action: &Action, _context: &ActionContext) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.consume
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        calls: AtomicUsize,
    }

    impl UrlOpener for RecordingOpener {
        fn open_url(&self, _url: &Url) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn open_url_action() -> (Action, ActionContext) {
        let action = Action::open_url("https://example.com/page").unwrap();
        let context = ActionContext::new(action.clone(), ActionSource::UniversalLink);
        (action, context)
    }

    fn custom_action() -> (Action, ActionContext) {
        let action = Action::Custom {
            action_type: "showOffer".into(),
            data: Map::new(),
        };
        let context = ActionContext::new(action.clone(), ActionSource::PushOpen);
        (action, context)
    }

    #[test]
    fn url_handler_consumes_and_opener_is_skipped() {
        let (action, context) = open_url_action();
        let handler = RecordingUrlHandler {
            consume: true,
            ..Default::default()
        };
        let opener = RecordingOpener::default();

        assert!(execute(&action, &context, None, Some(&handler), &opener));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(opener.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn declined_url_falls_back_to_opener_exactly_once() {
        let (action, context) = open_url_action();
        let handler = RecordingUrlHandler::default();
        let opener = RecordingOpener::default();

        // Opener always counts as handled.
        assert!(execute(&action, &context, None, Some(&handler), &opener));
        assert_eq!(handler.calls.load(Ordering::SeqCst), 1);
        assert_eq!(opener.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_url_handler_goes_straight_to_opener() {
        let (action, context) = open_url_action();
        let opener = RecordingOpener::default();

        assert!(execute(&action, &context, None, None, &opener));
        assert_eq!(opener.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn custom_action_uses_custom_handler_result() {
        let (action, context) = custom_action();
        let opener = RecordingOpener::default();

        let consuming = RecordingCustomHandler {
            consume: true,
            ..Default::default()
        };
        assert!(execute(&action, &context, Some(&consuming), None, &opener));

        let declining = RecordingCustomHandler::default();
        assert!(!execute(&action, &context, Some(&declining), None, &opener));
        assert_eq!(declining.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn custom_action_never_reaches_url_machinery() {
        let (action, context) = custom_action();
        let url_handler = RecordingUrlHandler {
            consume: true,
            ..Default::default()
        };
        let opener = RecordingOpener::default();

        let declining = RecordingCustomHandler::default();
        assert!(!execute(
            &action,
            &context,
            Some(&declining),
            Some(&url_handler),
            &opener
        ));
        assert_eq!(url_handler.calls.load(Ordering::SeqCst), 0);
        assert_eq!(opener.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn custom_action_without_handler_is_unhandled() {
        let (action, context) = custom_action();
        let opener = RecordingOpener::default();

        assert!(!execute(&action, &context, None, None, &opener));
        assert_eq!(opener.calls.load(Ordering::SeqCst), 0);
    }
}
