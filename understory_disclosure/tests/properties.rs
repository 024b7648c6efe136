// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property checks over random interleavings of input events and time.

use proptest::prelude::*;
use understory_disclosure::{
    CommandQueue, DisclosureConfig, DisclosureController, DisclosureState, RenderCommand,
    TimerQueue, TriggerEvent,
};
use understory_placement::anchor_rect;

#[derive(Copy, Clone, Debug)]
enum Step {
    Event(TriggerEvent),
    Wait(u64),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => Just(Step::Event(TriggerEvent::PointerEnter)),
        3 => Just(Step::Event(TriggerEvent::PointerLeave)),
        1 => Just(Step::Event(TriggerEvent::FocusGained)),
        1 => Just(Step::Event(TriggerEvent::FocusLost)),
        1 => Just(Step::Event(TriggerEvent::Escape)),
        4 => (0..150u64).prop_map(Step::Wait),
    ]
}

proptest! {
    /// At most one timer is ever outstanding, `Pending` always has exactly
    /// one, and `Visible` is only reached after a full uninterrupted delay.
    #[test]
    fn timers_are_never_duplicated(
        delay in 0..120u64,
        steps in prop::collection::vec(step(), 1..64),
    ) {
        let mut ctl = DisclosureController::new(
            DisclosureConfig::default().delay_ms(delay),
            TimerQueue::new(),
            anchor_rect(10.0, 10.0, 40.0, 20.0),
            CommandQueue::new(),
        )
        .unwrap();

        let mut pending_since: Option<u64> = None;
        for s in steps {
            match s {
                Step::Event(e) => {
                    if let Some(t) = ctl.handle_event(e) {
                        if t.to == DisclosureState::Pending {
                            pending_since = Some(ctl.scheduler().now());
                        }
                    }
                }
                Step::Wait(dt) => {
                    let now = ctl.scheduler().now() + dt;
                    for t in ctl.advance_to(now) {
                        prop_assert_eq!(t.to, DisclosureState::Visible);
                        let since = pending_since.take();
                        prop_assert!(since.is_some());
                        let elapsed = now - since.unwrap_or(now);
                        prop_assert!(elapsed >= delay, "shown after {} < {}", elapsed, delay);
                    }
                }
            }

            prop_assert!(ctl.scheduler().len() <= 1);
            let pending = ctl.state() == DisclosureState::Pending;
            prop_assert_eq!(pending, ctl.pending_token().is_some());
            prop_assert_eq!(pending, ctl.scheduler().len() == 1);
            if ctl.state() == DisclosureState::Hidden {
                pending_since = None;
            }
        }
    }

    /// Every `Show` is eventually balanced by a `Hide` once the trigger goes away.
    #[test]
    fn unmount_always_leaves_the_overlay_removed(
        steps in prop::collection::vec(step(), 0..48),
    ) {
        let mut ctl = DisclosureController::new(
            DisclosureConfig::default(),
            TimerQueue::new(),
            anchor_rect(0.0, 0.0, 10.0, 10.0),
            CommandQueue::new(),
        )
        .unwrap();

        for s in steps {
            match s {
                Step::Event(e) => {
                    ctl.handle_event(e);
                }
                Step::Wait(dt) => {
                    let now = ctl.scheduler().now() + dt;
                    ctl.advance_to(now);
                }
            }
        }
        ctl.handle_event(TriggerEvent::Unmount);
        prop_assert!(ctl.scheduler().is_empty());
        prop_assert!(!ctl.host().is_showing());
        prop_assert!(ctl.advance_to(u64::MAX).is_empty());

        let commands = ctl.host_mut().drain();
        let shows = commands
            .iter()
            .filter(|c| matches!(c, RenderCommand::Show { .. }))
            .count();
        let hides = commands.len() - shows;
        prop_assert_eq!(shows, hides);
    }
}
