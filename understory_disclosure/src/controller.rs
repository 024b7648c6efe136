// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The disclosure state machine.
//!
//! ## States
//!
//! ```text
//!            enter / focus               timer (token matches, measured)
//!   Hidden ────────────────▶ Pending ─────────────────────────────────▶ Visible
//!     ▲                         │                                          │
//!     │   leave / blur / escape │  (token invalidated)                     │
//!     ├─────────────────────────┘                                          │
//!     │   leave / blur / escape / unmount (immediate)                      │
//!     └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! - Showing is delayed; hiding never is.
//! - Enter/focus while `Pending` or `Visible` does nothing: the running timer
//!   is neither reset nor duplicated.
//! - Leave followed by enter before the timer fires starts a fresh timer; the
//!   old token is dead.
//! - A timer whose measurement fails (the trigger left the layout tree) is an
//!   implicit cancellation.
//!
//! ## Threading
//!
//! Everything runs on the host's event loop. Timers are deferred callbacks
//! delivered through [`DisclosureController::handle_timer`], not threads.
//!
//! ## Focus moving into the overlay
//!
//! `FocusLost` always hides, including when focus moves into the overlay
//! itself. Overlays with focusable content need the host to suppress that
//! `FocusLost`.

use alloc::vec::Vec;

use kurbo::Rect;
use understory_placement::OverlayCoordinate;

use crate::config::{ConfigError, DisclosureConfig, Triggers};
use crate::host::OverlayHost;
use crate::timer::{Scheduler, TimerQueue, TimerToken};

/// Visibility state of one trigger–overlay pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisclosureState {
    /// Nothing is shown and nothing is scheduled.
    #[default]
    Hidden,
    /// A show timer is outstanding.
    Pending,
    /// The overlay is on screen.
    Visible,
}

/// An input delivered by the host for the trigger element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TriggerEvent {
    /// Pointer moved onto the trigger.
    PointerEnter,
    /// Pointer moved off the trigger.
    PointerLeave,
    /// Trigger received focus.
    FocusGained,
    /// Trigger lost focus.
    FocusLost,
    /// Escape key pressed.
    Escape,
    /// Trigger removed from the render tree.
    Unmount,
}

impl TriggerEvent {
    fn is_open_request(self) -> bool {
        matches!(self, Self::PointerEnter | Self::FocusGained)
    }

    /// Input family gating this event; `None` for events that are always honored.
    fn family(self) -> Option<Triggers> {
        match self {
            Self::PointerEnter | Self::PointerLeave => Some(Triggers::HOVER),
            Self::FocusGained | Self::FocusLost => Some(Triggers::FOCUS),
            Self::Escape | Self::Unmount => None,
        }
    }
}

/// A state change produced by the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// State before the change.
    pub from: DisclosureState,
    /// State after the change.
    pub to: DisclosureState,
}

/// Reads the trigger's current bounding rectangle.
///
/// Called only at the moment the overlay is about to become visible, so it
/// must reflect live layout rather than a cached value. Returns `None` when
/// the trigger is no longer laid out.
pub trait Measure {
    /// Measure the trigger now.
    fn measure(&self) -> Option<Rect>;
}

impl<F: Fn() -> Option<Rect>> Measure for F {
    fn measure(&self) -> Option<Rect> {
        self()
    }
}

/// A trigger that never moves.
impl Measure for Rect {
    fn measure(&self) -> Option<Rect> {
        Some(*self)
    }
}

/// Show/hide timing for one trigger–overlay pair.
///
/// Owns the [`DisclosureState`], the generation counter that invalidates
/// stale timers, and the injected capabilities: a [`Scheduler`] for the show
/// delay, a [`Measure`] for the trigger's rectangle, and an [`OverlayHost`]
/// that receives render signals.
///
/// Dropping the controller tears it down (see [`teardown`](Self::teardown)).
///
/// ```
/// use understory_disclosure::{
///     CommandQueue, DisclosureConfig, DisclosureController, DisclosureState, TimerQueue,
///     TriggerEvent,
/// };
/// use understory_placement::anchor_rect;
///
/// let trigger = anchor_rect(100.0, 200.0, 50.0, 20.0);
/// let mut ctl = DisclosureController::new(
///     DisclosureConfig::default(),
///     TimerQueue::new(),
///     trigger,
///     CommandQueue::new(),
/// )
/// .unwrap();
///
/// ctl.handle_event(TriggerEvent::PointerEnter);
/// assert_eq!(ctl.state(), DisclosureState::Pending);
/// ctl.advance_to(100);
/// assert_eq!(ctl.state(), DisclosureState::Visible);
/// let c = ctl.last_coordinate().unwrap();
/// assert_eq!((c.top, c.left), (88.0, 225.0));
/// ```
pub struct DisclosureController<S: Scheduler, M: Measure, H: OverlayHost> {
    config: DisclosureConfig,
    state: DisclosureState,
    /// Bumped on every schedule and every cancellation.
    generation: u64,
    /// Token of the one timer the controller will honor.
    pending: Option<TimerToken>,
    last_coordinate: Option<OverlayCoordinate>,
    attached: bool,
    scheduler: S,
    measure: M,
    host: H,
}

impl<S: Scheduler, M: Measure, H: OverlayHost> core::fmt::Debug for DisclosureController<S, M, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DisclosureController")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler, M: Measure, H: OverlayHost> DisclosureController<S, M, H> {
    /// Create a controller in the `Hidden` state.
    ///
    /// Fails if `config` does not [validate](DisclosureConfig::validate).
    pub fn new(
        config: DisclosureConfig,
        scheduler: S,
        measure: M,
        host: H,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: DisclosureState::Hidden,
            generation: 0,
            pending: None,
            last_coordinate: None,
            attached: true,
            scheduler,
            measure,
            host,
        })
    }

    /// Current state.
    pub fn state(&self) -> DisclosureState {
        self.state
    }

    /// True while the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.state == DisclosureState::Visible
    }

    /// False once the controller has been torn down.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The configuration supplied at construction.
    pub fn config(&self) -> &DisclosureConfig {
        &self.config
    }

    /// Token of the outstanding show timer, if any.
    pub fn pending_token(&self) -> Option<TimerToken> {
        self.pending
    }

    /// Coordinate of the current show cycle, if visible.
    pub fn last_coordinate(&self) -> Option<OverlayCoordinate> {
        self.last_coordinate
    }

    /// The scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Mutable access to the scheduler.
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// The overlay host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the overlay host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Process one input event.
    ///
    /// Returns the resulting transition, or `None` if the event was a no-op.
    pub fn handle_event(&mut self, event: TriggerEvent) -> Option<Transition> {
        if !self.attached {
            tracing::trace!(?event, "event after teardown ignored");
            return None;
        }
        if event == TriggerEvent::Unmount {
            return self.teardown();
        }
        if let Some(family) = event.family() {
            if !self.config.triggers.contains(family) {
                tracing::trace!(?event, "trigger family not enabled");
                return None;
            }
        }

        match (self.state, event.is_open_request()) {
            (DisclosureState::Hidden, true) => {
                if self.config.disabled {
                    tracing::trace!(?event, "disabled; not scheduling");
                    return None;
                }
                self.schedule_show();
                self.set_state(DisclosureState::Pending)
            }
            (DisclosureState::Pending | DisclosureState::Visible, true) => {
                tracing::trace!(?event, state = ?self.state, "already opening or open");
                None
            }
            (DisclosureState::Hidden, false) => None,
            (DisclosureState::Pending | DisclosureState::Visible, false) => self.dismiss(),
        }
    }

    /// Deliver an elapsed show timer.
    ///
    /// The token is checked before anything is mutated; a token that was
    /// cancelled or superseded is ignored.
    pub fn handle_timer(&mut self, token: TimerToken) -> Option<Transition> {
        if !self.attached
            || self.state != DisclosureState::Pending
            || self.pending != Some(token)
        {
            tracing::trace!(
                token = token.generation(),
                current = self.generation,
                "stale timer ignored"
            );
            return None;
        }
        self.pending = None;
        self.reveal()
    }

    /// Show immediately, skipping the delay.
    ///
    /// Still honors `disabled`, and still measures the trigger now.
    pub fn open(&mut self) -> Option<Transition> {
        if !self.attached || self.config.disabled || self.state == DisclosureState::Visible {
            return None;
        }
        self.cancel_pending();
        self.reveal()
    }

    /// Hide immediately and cancel any pending show.
    pub fn close(&mut self) -> Option<Transition> {
        if !self.attached {
            return None;
        }
        self.dismiss()
    }

    /// Change the disabled flag. Disabling closes the overlay.
    pub fn set_disabled(&mut self, disabled: bool) -> Option<Transition> {
        self.config.disabled = disabled;
        if disabled { self.close() } else { None }
    }

    /// Cancel any outstanding timer, hide the overlay, and detach.
    ///
    /// After teardown every event and timer is a no-op. Calling this more
    /// than once is harmless. Runs automatically on drop and on
    /// [`TriggerEvent::Unmount`].
    pub fn teardown(&mut self) -> Option<Transition> {
        if !self.attached {
            return None;
        }
        let transition = self.dismiss();
        self.attached = false;
        tracing::debug!("disclosure torn down");
        transition
    }

    fn schedule_show(&mut self) {
        self.cancel_pending();
        self.generation = self.generation.wrapping_add(1);
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        self.scheduler.schedule(self.config.delay_ms, token);
        tracing::trace!(
            token = token.generation(),
            delay_ms = self.config.delay_ms,
            "show scheduled"
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel(token);
            tracing::trace!(token = token.generation(), "show cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
    }

    /// Measure, place, and show; an unmeasurable trigger cancels the show.
    fn reveal(&mut self) -> Option<Transition> {
        let Some(anchor) = self.measure.measure() else {
            tracing::debug!("trigger could not be measured; cancelling show");
            return self.set_state(DisclosureState::Hidden);
        };
        let coordinate = self.config.placer().place(anchor);
        self.last_coordinate = Some(coordinate);
        self.host.show(&coordinate, self.config.show_arrow);
        let transition = self.set_state(DisclosureState::Visible);
        self.host.open_changed(true);
        transition
    }

    fn dismiss(&mut self) -> Option<Transition> {
        self.cancel_pending();
        let was_visible = self.state == DisclosureState::Visible;
        if was_visible {
            self.host.hide();
        }
        self.last_coordinate = None;
        let transition = self.set_state(DisclosureState::Hidden);
        if was_visible {
            self.host.open_changed(false);
        }
        transition
    }

    fn set_state(&mut self, to: DisclosureState) -> Option<Transition> {
        let from = self.state;
        if from == to {
            return None;
        }
        self.state = to;
        tracing::debug!(?from, ?to, "disclosure transition");
        Some(Transition { from, to })
    }
}

impl<M: Measure, H: OverlayHost> DisclosureController<TimerQueue, M, H> {
    /// Advance the owned [`TimerQueue`] to `now` and deliver every due timer.
    ///
    /// Returns the transitions that resulted, in order.
    pub fn advance_to(&mut self, now: u64) -> Vec<Transition> {
        let due = self.scheduler.advance_to(now);
        due.into_iter()
            .filter_map(|token| self.handle_timer(token))
            .collect()
    }
}

impl<S: Scheduler, M: Measure, H: OverlayHost> Drop for DisclosureController<S, M, H> {
    fn drop(&mut self) {
        let _ = self.teardown();
    }
}
