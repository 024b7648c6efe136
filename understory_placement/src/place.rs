// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement calculator.
//!
//! ## Formulas
//!
//! With `w`/`h` the anchor's width and height and `offset` the gap:
//!
//! | Placement | `left`               | `top`                 |
//! |-----------|----------------------|-----------------------|
//! | `Top`     | `x0 + w / 2`         | `y0 - offset`         |
//! | `Bottom`  | `x0 + w / 2`         | `y0 + h + offset`     |
//! | `Left`    | `x0 - offset`        | `y0 + h / 2`          |
//! | `Right`   | `x1 + offset`        | `y0 + h / 2`          |
//!
//! The cross-axis column shows [`Align::Center`]; `Start` and `End` use the
//! anchor's start (`x0`/`y0`) and end (`x1`/`y1`) edges instead.
//!
//! Every function here is pure: identical inputs give bit-identical outputs.

use kurbo::Rect;

use crate::types::{Align, DEFAULT_OFFSET, OverlayCoordinate, Placement};

/// Compute the centered overlay coordinate for `placement` around `anchor`.
///
/// Precondition: `anchor` is finite with non-negative width and height, and
/// `offset` is finite and non-negative. Debug builds assert this.
///
/// ```
/// use understory_placement::{anchor_rect, place, Placement};
///
/// let anchor = anchor_rect(100.0, 200.0, 50.0, 20.0);
/// let c = place(anchor, Placement::Top, 12.0);
/// assert_eq!((c.top, c.left), (88.0, 225.0));
/// ```
#[must_use]
pub fn place(anchor: Rect, placement: Placement, offset: f64) -> OverlayCoordinate {
    place_aligned(anchor, placement, Align::Center, offset)
}

/// Compute the overlay coordinate for `placement` with explicit cross-axis
/// alignment.
#[must_use]
pub fn place_aligned(
    anchor: Rect,
    placement: Placement,
    align: Align,
    offset: f64,
) -> OverlayCoordinate {
    debug_assert!(anchor.is_finite(), "anchor rectangle must be finite");
    debug_assert!(
        anchor.width() >= 0.0 && anchor.height() >= 0.0,
        "anchor rectangle must have non-negative size"
    );
    debug_assert!(
        offset.is_finite() && offset >= 0.0,
        "offset must be finite and non-negative"
    );

    let horizontal = match align {
        Align::Start => anchor.x0,
        Align::Center => anchor.x0 + anchor.width() / 2.0,
        Align::End => anchor.x1,
    };
    let vertical = match align {
        Align::Start => anchor.y0,
        Align::Center => anchor.y0 + anchor.height() / 2.0,
        Align::End => anchor.y1,
    };

    let (top, left) = match placement {
        Placement::Top => (anchor.y0 - offset, horizontal),
        Placement::Bottom => (anchor.y0 + anchor.height() + offset, horizontal),
        Placement::Left => (vertical, anchor.x0 - offset),
        Placement::Right => (vertical, anchor.x1 + offset),
    };

    OverlayCoordinate {
        top,
        left,
        placement,
        align,
    }
}

/// Static placement configuration for one overlay.
///
/// Bundles the side, alignment, and offset so callers can re-run placement
/// against a freshly measured anchor on every show.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placer {
    /// Side of the anchor to place against.
    pub placement: Placement,
    /// Cross-axis alignment.
    pub align: Align,
    /// Gap between the anchor and the overlay.
    pub offset: f64,
}

impl Default for Placer {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            align: Align::default(),
            offset: DEFAULT_OFFSET,
        }
    }
}

impl Placer {
    /// Create a centered placer for `placement` with the default offset.
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }

    /// Place against `anchor`.
    #[must_use]
    pub fn place(&self, anchor: Rect) -> OverlayCoordinate {
        place_aligned(anchor, self.placement, self.align, self.offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::anchor_rect;

    fn anchor() -> Rect {
        anchor_rect(100.0, 200.0, 50.0, 20.0)
    }

    #[test]
    fn top_centers_above() {
        let c = place(anchor(), Placement::Top, 12.0);
        assert_eq!(c.top, 88.0, "top");
        assert_eq!(c.left, 225.0, "left");
        assert_eq!(c.arrow_side(), Placement::Bottom);
    }

    #[test]
    fn bottom_centers_below() {
        let c = place(anchor(), Placement::Bottom, 12.0);
        assert_eq!(c.top, 132.0, "top");
        assert_eq!(c.left, 225.0, "left");
        assert_eq!(c.arrow_side(), Placement::Top);
    }

    #[test]
    fn left_centers_before() {
        let c = place(anchor(), Placement::Left, 12.0);
        assert_eq!(c.top, 110.0, "top");
        assert_eq!(c.left, 188.0, "left");
        assert_eq!(c.arrow_side(), Placement::Right);
    }

    #[test]
    fn right_centers_after() {
        let c = place(anchor(), Placement::Right, 12.0);
        assert_eq!(c.top, 110.0, "top");
        assert_eq!(c.left, 262.0, "left");
        assert_eq!(c.arrow_side(), Placement::Left);
    }

    #[test]
    fn zero_offset_touches_anchor() {
        let a = anchor();
        assert_eq!(place(a, Placement::Top, 0.0).top, a.y0);
        assert_eq!(place(a, Placement::Bottom, 0.0).top, a.y1);
        assert_eq!(place(a, Placement::Left, 0.0).left, a.x0);
        assert_eq!(place(a, Placement::Right, 0.0).left, a.x1);
    }

    #[test]
    fn empty_anchor_collapses_to_a_point() {
        let a = anchor_rect(10.0, 10.0, 0.0, 0.0);
        for p in Placement::ALL {
            let c = place(a, p, 0.0);
            assert_eq!((c.top, c.left), (10.0, 10.0), "{p}");
        }
    }

    #[test]
    fn start_and_end_use_anchor_edges() {
        let a = anchor();
        let s = place_aligned(a, Placement::Bottom, Align::Start, 4.0);
        assert_eq!((s.top, s.left), (124.0, 200.0));
        let e = place_aligned(a, Placement::Bottom, Align::End, 4.0);
        assert_eq!((e.top, e.left), (124.0, 250.0));
        let s = place_aligned(a, Placement::Right, Align::Start, 4.0);
        assert_eq!((s.top, s.left), (100.0, 254.0));
        let e = place_aligned(a, Placement::Left, Align::End, 4.0);
        assert_eq!((e.top, e.left), (120.0, 196.0));
    }

    #[test]
    fn placer_uses_defaults() {
        let placer = Placer::new(Placement::Top);
        assert_eq!(placer.offset, DEFAULT_OFFSET);
        assert_eq!(placer.align, Align::Center);
        assert_eq!(placer.place(anchor()), place(anchor(), Placement::Top, 12.0));
    }

    #[test]
    fn placement_never_flips() {
        // Anchor hugging the top edge of the surface still yields a Top placement.
        let a = anchor_rect(0.0, 0.0, 10.0, 10.0);
        let c = place(a, Placement::Top, 12.0);
        assert_eq!(c.placement, Placement::Top);
        assert_eq!(c.top, -12.0, "coordinates may leave the surface");
    }
}
