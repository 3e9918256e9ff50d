// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracking-link resolution and attribution for the Beacon engagement SDK.
//!
//! Incoming universal links are classified against the platform's redirect
//! domain. Tracking links are resolved over HTTP by intercepting the first
//! redirect response: the `Location` target becomes the destination, and
//! campaign attribution cookies are committed to the shared
//! [`beacon_core::AttributionStore`]. Resolved (or passed-through) URLs are
//! then dispatched via `beacon-actions`.
//!
//! Resolution never fails loudly: transport errors, missing redirects, and
//! malformed cookies all degrade to safe fallbacks and a log line.

pub mod classifier;
pub mod config;
pub mod manager;
pub mod resolver;

pub use classifier::LinkClassifier;
pub use config::DeeplinkConfig;
pub use manager::DeeplinkManager;
pub use resolver::RedirectResolver;
