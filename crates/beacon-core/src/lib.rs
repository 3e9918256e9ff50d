// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Beacon engagement SDK.
//!
//! This crate provides the shared data model (actions, attribution), the
//! error type, and the handler traits host applications implement. The
//! deep-link and dispatch crates build on these types; nothing here touches
//! the network.

pub mod action;
pub mod attribution;
pub mod error;
pub mod handlers;

pub use action::{Action, ActionContext, ActionSource};
pub use attribution::{AttributionInfo, AttributionStore};
pub use error::BeaconError;
pub use handlers::{CustomActionHandler, SystemUrlOpener, UrlHandler, UrlOpener};
