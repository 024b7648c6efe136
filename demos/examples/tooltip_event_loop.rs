// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Driving a disclosure from a wall-clock event loop.
//!
//! The loop sleeps until the next scripted input or the queue's next
//! deadline, whichever comes first, then feeds both into the controller.
//! The overlay is torn down when the "trigger" is unmounted.
//!
//! Run:
//! - `cargo run -p understory_demos --example tooltip_event_loop`

use std::thread;
use std::time::{Duration, Instant};

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_disclosure::{
    ConfigError, DisclosureConfig, DisclosureController, OverlayHost, TimerQueue, TriggerEvent,
};
use understory_placement::{OverlayCoordinate, Placement, anchor_rect};

/// Host that "renders" by printing the overlay box.
struct PrintHost {
    content: Size,
}

impl OverlayHost for PrintHost {
    fn show(&mut self, coordinate: &OverlayCoordinate, show_arrow: bool) {
        println!(
            "  show at {:?} (arrow on {}: {show_arrow})",
            coordinate.overlay_rect(self.content),
            coordinate.arrow_side()
        );
    }

    fn hide(&mut self) {
        println!("  hide");
    }

    fn open_changed(&mut self, open: bool) {
        println!("  open = {open}");
    }
}

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_disclosure=debug")),
        )
        .init();

    let script = [
        (0, TriggerEvent::FocusGained),
        (250, TriggerEvent::Escape),
        (300, TriggerEvent::PointerEnter),
        (320, TriggerEvent::PointerEnter),
        (500, TriggerEvent::Unmount),
    ];

    let mut ctl = DisclosureController::new(
        DisclosureConfig::default()
            .placement(Placement::Right)
            .delay_ms(120),
        TimerQueue::new(),
        anchor_rect(40.0, 16.0, 96.0, 28.0),
        PrintHost {
            content: Size::new(140.0, 32.0),
        },
    )?;

    let start = Instant::now();
    let elapsed_ms = || u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
    let mut next = 0;

    while ctl.is_attached() {
        let now = elapsed_ms();
        ctl.advance_to(now);
        while let Some(&(at, event)) = script.get(next) {
            if at > now {
                break;
            }
            println!("t={now}ms {event:?}");
            ctl.handle_event(event);
            next += 1;
        }

        let next_input = script.get(next).map(|&(at, _)| at);
        let wake = match (next_input, ctl.scheduler().next_due()) {
            (Some(a), Some(b)) => a.min(b),
            (Some(a), None) | (None, Some(a)) => a,
            (None, None) => break,
        };
        thread::sleep(Duration::from_millis(wake.saturating_sub(elapsed_ms())));
    }

    println!("done after {}ms, state {:?}", elapsed_ms(), ctl.state());
    Ok(())
}
