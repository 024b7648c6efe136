// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Disclosure: deterministic show/hide timing for tooltips and popovers.
//!
//! ## Overview
//!
//! A [`DisclosureController`] owns the `Hidden → Pending → Visible` state
//! machine for one trigger–overlay pair. Feed it [`TriggerEvent`]s from your
//! event loop and elapsed timer tokens from your [`Scheduler`]; it tells your
//! [`OverlayHost`] when to show the overlay, and where, and when to remove it.
//!
//! - Showing waits for a delay (100 ms by default); hiding is immediate.
//! - Each scheduled timer carries a generation [`TimerToken`]. Cancelling bumps
//!   the generation, so a stale timer that fires late is a silent no-op.
//! - The trigger is [measured](Measure) when the timer fires, not when it was
//!   scheduled, and the coordinate comes from [`understory_placement`].
//! - Teardown (explicit, on [`TriggerEvent::Unmount`], or on drop) cancels the
//!   timer, hides the overlay, and detaches the controller.
//!
//! ## Capabilities
//!
//! The controller owns no clock, layout, or renderer. Three traits are injected:
//!
//! - [`Scheduler`]: deferred timers. [`TimerQueue`] is a deterministic,
//!   host-driven implementation.
//! - [`Measure`]: the trigger's current rectangle. Closures and fixed
//!   [`kurbo::Rect`]s implement it.
//! - [`OverlayHost`]: render signals. [`CommandQueue`] records them for a
//!   frame-based toolkit to drain.
//!
//! ## Example
//!
//! ```
//! use core::cell::Cell;
//! use kurbo::Rect;
//! use understory_disclosure::{
//!     CommandQueue, DisclosureConfig, DisclosureController, DisclosureState, RenderCommand,
//!     TimerQueue, TriggerEvent,
//! };
//! use understory_placement::{Placement, anchor_rect};
//!
//! // The trigger's live position, updated by layout.
//! let trigger = Cell::new(anchor_rect(100.0, 200.0, 50.0, 20.0));
//!
//! let mut ctl = DisclosureController::new(
//!     DisclosureConfig::default().placement(Placement::Bottom),
//!     TimerQueue::new(),
//!     || -> Option<Rect> { Some(trigger.get()) },
//!     CommandQueue::new(),
//! )
//! .unwrap();
//!
//! ctl.handle_event(TriggerEvent::PointerEnter);
//! // Layout moves the trigger before the delay elapses.
//! trigger.set(anchor_rect(100.0, 300.0, 50.0, 20.0));
//! ctl.advance_to(100);
//! assert_eq!(ctl.state(), DisclosureState::Visible);
//!
//! match ctl.host_mut().drain().as_slice() {
//!     [RenderCommand::Show { coordinate, .. }] => {
//!         assert_eq!((coordinate.top, coordinate.left), (132.0, 325.0));
//!     }
//!     other => panic!("unexpected commands: {other:?}"),
//! }
//!
//! ctl.handle_event(TriggerEvent::PointerLeave);
//! assert_eq!(ctl.host().last(), Some(&RenderCommand::Hide));
//! ```
//!
//! Transitions are logged with [`tracing`] at `debug` level, no-ops at `trace`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod host;
pub mod timer;

pub use config::{ConfigError, DEFAULT_DELAY_MS, DisclosureConfig, Triggers};
pub use controller::{DisclosureController, DisclosureState, Measure, Transition, TriggerEvent};
pub use host::{CommandQueue, NullHost, OverlayHost, RenderCommand};
pub use timer::{Scheduler, TimerQueue, TimerToken};
