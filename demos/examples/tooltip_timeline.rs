// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip timing on a simulated clock.
//!
//! Replays a hover, a hover that leaves early, and a quick leave/re-enter,
//! logging every transition. Set `RUST_LOG=understory_disclosure=trace` to
//! also see ignored events and stale timers.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_timeline`

use std::cell::Cell;

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_disclosure::{
    CommandQueue, ConfigError, DisclosureConfig, DisclosureController, DisclosureState,
    TimerQueue, TriggerEvent,
};
use understory_placement::anchor_rect;

/// Input scripted at a point on the simulated clock.
type Script<'a> = &'a [(u64, TriggerEvent)];

fn replay(name: &str, script: Script<'_>, until: u64) -> Result<DisclosureState, ConfigError> {
    let trigger = Cell::new(anchor_rect(100.0, 200.0, 50.0, 20.0));
    let mut ctl = DisclosureController::new(
        DisclosureConfig::default(),
        TimerQueue::new(),
        || -> Option<Rect> { Some(trigger.get()) },
        CommandQueue::new(),
    )?;

    println!("== {name} ==");
    let mut events = script.iter().peekable();
    for now in 0..=until {
        for t in ctl.advance_to(now) {
            println!("  t={now:>3} timer  {:?} -> {:?}", t.from, t.to);
        }
        while let Some(&&(at, event)) = events.peek() {
            if at != now {
                break;
            }
            events.next();
            match ctl.handle_event(event) {
                Some(t) => println!("  t={now:>3} {event:?}  {:?} -> {:?}", t.from, t.to),
                None => println!("  t={now:>3} {event:?}  (no-op)"),
            }
        }
        // The trigger drifts as if the page were scrolling.
        trigger.set(trigger.get() + kurbo::Vec2::new(0.0, -1.0));
    }
    for command in ctl.host_mut().drain() {
        println!("  render: {command:?}");
    }
    Ok(ctl.state())
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_disclosure=debug")),
        )
        .init();

    let state = replay("hover", &[(0, TriggerEvent::PointerEnter)], 150)?;
    assert_eq!(state, DisclosureState::Visible);

    let state = replay(
        "leave early",
        &[(0, TriggerEvent::PointerEnter), (50, TriggerEvent::PointerLeave)],
        150,
    )?;
    assert_eq!(state, DisclosureState::Hidden);

    let state = replay(
        "leave and re-enter",
        &[
            (0, TriggerEvent::PointerEnter),
            (40, TriggerEvent::PointerLeave),
            (60, TriggerEvent::PointerEnter),
        ],
        159,
    )?;
    assert_eq!(state, DisclosureState::Pending, "fresh timer is due at t=160");

    Ok(())
}
