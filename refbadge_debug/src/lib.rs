// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON export for refbadge diagnostics.
//!
//! This crate provides development tooling on top of the core and render
//! crates:
//!
//! - [`pretty::PrettyPrintSink`]: a [`TraceSink`](refbadge_core::trace::TraceSink)
//!   writing one human-readable line per event.
//! - [`json`]: JSON snapshots of measured rows and recorded draw lists.

pub mod json;
pub mod pretty;
