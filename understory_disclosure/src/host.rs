// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay host: the rendering side of a disclosure.
//!
//! The controller never renders anything itself. It emits exactly two
//! signals through [`OverlayHost`]: *show at this coordinate* when the
//! overlay becomes visible, and *hide* when it stops being visible.
//! How the overlay is drawn (a top-level layer, a portal, a separate
//! window) is entirely up to the host, with one obligation: it must draw
//! at the supplied coordinate without further layout-driven shifts.
//! [`OverlayCoordinate::overlay_rect`] is the only adjustment needed once
//! the overlay's content size is known.
//!
//! [`CommandQueue`] is a ready-made host that records commands so a
//! frame-based toolkit can drain and apply them once per frame.

use alloc::vec::Vec;

use understory_placement::OverlayCoordinate;

/// Receives render signals from a [`DisclosureController`](crate::controller::DisclosureController).
pub trait OverlayHost {
    /// Render the overlay at `coordinate`.
    ///
    /// When `show_arrow` is false the arrow indicator is omitted; the
    /// coordinate is the same either way.
    fn show(&mut self, coordinate: &OverlayCoordinate, show_arrow: bool);

    /// Remove the overlay.
    fn hide(&mut self);

    /// Called after the open state flips, after `show`/`hide`.
    fn open_changed(&mut self, _open: bool) {}
}

impl<H: OverlayHost + ?Sized> OverlayHost for &mut H {
    fn show(&mut self, coordinate: &OverlayCoordinate, show_arrow: bool) {
        (**self).show(coordinate, show_arrow);
    }

    fn hide(&mut self) {
        (**self).hide();
    }

    fn open_changed(&mut self, open: bool) {
        (**self).open_changed(open);
    }
}

/// A render command recorded by [`CommandQueue`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RenderCommand {
    /// Render the overlay at a coordinate.
    Show {
        /// Where to render.
        coordinate: OverlayCoordinate,
        /// Whether to draw the arrow indicator.
        show_arrow: bool,
    },
    /// Remove the overlay.
    Hide,
}

/// An [`OverlayHost`] that records commands for later application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandQueue {
    commands: Vec<RenderCommand>,
    showing: bool,
}

impl CommandQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded commands in order.
    pub fn drain(&mut self) -> Vec<RenderCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Recorded commands not yet drained.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// The most recent command, if any remain undrained.
    pub fn last(&self) -> Option<&RenderCommand> {
        self.commands.last()
    }

    /// Whether the last applied command left the overlay on screen.
    ///
    /// Unaffected by [`drain`](Self::drain).
    pub fn is_showing(&self) -> bool {
        self.showing
    }
}

impl OverlayHost for CommandQueue {
    fn show(&mut self, coordinate: &OverlayCoordinate, show_arrow: bool) {
        self.commands.push(RenderCommand::Show {
            coordinate: *coordinate,
            show_arrow,
        });
        self.showing = true;
    }

    fn hide(&mut self) {
        self.commands.push(RenderCommand::Hide);
        self.showing = false;
    }
}

/// An [`OverlayHost`] that discards every command.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullHost;

impl OverlayHost for NullHost {
    fn show(&mut self, _coordinate: &OverlayCoordinate, _show_arrow: bool) {}

    fn hide(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use understory_placement::{Placement, anchor_rect, place};

    #[test]
    fn queue_records_in_order() {
        let c = place(anchor_rect(0.0, 0.0, 10.0, 10.0), Placement::Bottom, 4.0);
        let mut q = CommandQueue::new();
        q.show(&c, true);
        q.hide();
        assert!(!q.is_showing());
        assert_eq!(
            q.drain(),
            vec![
                RenderCommand::Show {
                    coordinate: c,
                    show_arrow: true
                },
                RenderCommand::Hide
            ]
        );
        assert!(q.commands().is_empty());
        assert_eq!(q.last(), None);
    }

    fn show_through<H: OverlayHost>(mut host: H, c: &OverlayCoordinate) {
        host.show(c, false);
    }

    #[test]
    fn showing_survives_drain() {
        let c = place(anchor_rect(0.0, 0.0, 10.0, 10.0), Placement::Top, 4.0);
        let mut q = CommandQueue::new();
        // Hosts can be lent by mutable reference.
        show_through(&mut q, &c);
        let _ = q.drain();
        assert!(q.is_showing());
    }
}
