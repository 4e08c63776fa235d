// Copyright 2026 the Refbadge Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint pass and draw-op vocabulary for commit reference badges.
//!
//! This crate consumes the [`MeasuredRow`](refbadge_core::layout::MeasuredRow)
//! cache produced by [`refbadge_core`]'s measurement pass and turns it into
//! draw calls. It defines:
//!
//! - [`Surface`]: the drawing surface a host implements
//! - [`StateOp`] / [`DrawOp`]: the operations issued against a surface
//! - [`paint`]: the per-frame paint pass
//! - [`DrawList`]: a surface that records owned ops, for tests and
//!   diagnostics

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod ops;
mod paint;
mod recording;

pub use ops::{DrawOp, StateOp, Surface};
pub use paint::{
    HEAD_FILL_OPACITY, LABEL_FILL_OPACITY, STROKE_WIDTH, paint, paint_traced,
};
pub use recording::{DrawList, RecordedOp};
