// SPDX-FileCopyrightText: 2026 Beacon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Action dispatch for the Beacon engagement SDK.
//!
//! Given a resolved [`beacon_core::Action`] and its context, [`execute`]
//! tries the host's registered handlers in a fixed order and falls back to
//! the default URL opener. Dispatch is synchronous and thread-agnostic.

pub mod dispatcher;

pub use dispatcher::execute;
