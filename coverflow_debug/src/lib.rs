// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for coverflow
//! diagnostics.
//!
//! This crate provides [`TraceSink`](coverflow_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`]: compact binary recording with
//!   [`recorder::decode`] for playback.
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.
//! - [`shared::SharedSink`] and [`shared::Tee`]: hand a sink to a controller
//!   while keeping access to it, and feed two sinks at once.

pub mod chrome;
pub mod pretty;
pub mod recorder;
pub mod shared;
