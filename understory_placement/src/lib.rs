// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Placement: where to put a tooltip or popover relative to its trigger.
//!
//! ## Overview
//!
//! Given the trigger's bounding rectangle (the *anchor*), a requested side, and a
//! fixed gap, [`place`] returns an [`OverlayCoordinate`]: the attachment point for
//! the overlay together with the side its arrow indicator is drawn on.
//!
//! - [`Placement`]: `Top`, `Bottom`, `Left`, or `Right`. Chosen by the caller; never flipped.
//! - [`Align`]: cross-axis alignment (`Center` by default).
//! - [`OverlayCoordinate::overlay_rect`]: resolves the overlay's box once its size is known.
//! - [`Placer`]: bundles the static configuration for repeated placement.
//!
//! ## Not a collision solver
//!
//! This crate does not clamp against the viewport, flip sides, or arbitrate
//! between several overlays. Coordinates may fall outside the rendering
//! surface; upstream code decides what to do about that.
//!
//! ## Example
//!
//! ```
//! use understory_placement::{anchor_rect, place, Placement};
//! use kurbo::{Rect, Size};
//!
//! let anchor = anchor_rect(100.0, 200.0, 50.0, 20.0);
//! let c = place(anchor, Placement::Top, 12.0);
//! assert_eq!((c.top, c.left), (88.0, 225.0));
//! assert_eq!(c.arrow_side(), Placement::Bottom);
//!
//! // A 60×16 tooltip sits centered above the anchor with its bottom edge on the point.
//! assert_eq!(
//!     c.overlay_rect(Size::new(60.0, 16.0)),
//!     Rect::new(195.0, 72.0, 255.0, 88.0),
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod place;
pub mod types;

pub use place::{Placer, place, place_aligned};
pub use types::{
    Align, Axis, DEFAULT_OFFSET, OverlayCoordinate, ParsePlacementError, Placement, anchor_rect,
};
