// Copyright 2026 the Coverflow Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless state machine for a 3D coverflow image carousel.
//!
//! `coverflow_core` owns everything about the carousel that is not painting:
//! which slide is focused, whether a transition is still settling, whether
//! autoplay is running, and where every slide sits in 3D space. It is `no_std`
//! compatible (with `alloc`) and never reads a clock; callers pass the current
//! [`HostTime`](time::HostTime) into every operation.
//!
//! # Architecture
//!
//! ```text
//!   Input source (keys, clicks, swipes)      Host loop (rAF, test)
//!       │                                        │
//!       ▼                                        ▼
//!   InputEvent ──► CoverflowController ◄── advance(now)
//!                       │      │
//!                       │      └──► TimerQueue (settle, autoplay tick)
//!                       ▼
//!                  VisualTransform × N ──► CoverflowView
//! ```
//!
//! **[`controller`]**: [`CoverflowController`](controller::CoverflowController):
//! circular navigation, the animation lock, and the render pass.
//!
//! **[`autoplay`]**: Start/stop/toggle of the repeating autoplay timer.
//!
//! **[`timer`]**: [`TimerQueue`](timer::TimerQueue): one-shot and repeating
//! deadlines with idempotent cancellation, fired by polling.
//!
//! **[`visual`]**: Offset folding and the offset-to-transform mapping.
//!
//! **[`transform`]**: 3D affine transform type used to express a slide pose.
//!
//! **[`view`]**: The [`CoverflowView`](view::CoverflowView) trait that
//! presentation layers implement.
//!
//! **[`input`]**: Discrete input events and the swipe gesture tracker.
//!
//! **[`page`]**: Page chrome state: mobile menu, scroll-driven header and
//! menu highlighting, smooth-scroll targets.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and event types for
//! controller instrumentation, with a zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod autoplay;
pub mod config;
pub mod controller;
pub mod input;
pub mod page;
pub mod slide;
pub mod time;
pub mod timer;
pub mod trace;
pub mod transform;
pub mod view;
pub mod visual;

#[cfg(test)]
mod testing;
