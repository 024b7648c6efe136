// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for placement: sides, alignment, and the resolved overlay coordinate.

use core::fmt;
use core::str::FromStr;

use kurbo::{Point, Rect, Size};

/// Default distance between the anchor and the overlay, in the units of the
/// rendering surface.
pub const DEFAULT_OFFSET: f64 = 12.0;

/// Side of the anchor that an overlay is placed against.
///
/// This is an input, never derived state: the calculator does not flip
/// the side when space runs out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Placement {
    /// Above the anchor.
    #[default]
    Top,
    /// Below the anchor.
    Bottom,
    /// Before the anchor on the horizontal axis.
    Left,
    /// After the anchor on the horizontal axis.
    Right,
}

/// The axis along which an overlay is pushed away from its anchor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Offset along y (`Top` and `Bottom`).
    Vertical,
    /// Offset along x (`Left` and `Right`).
    Horizontal,
}

impl Placement {
    /// All placements, in declaration order.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    /// The geometrically opposite side.
    ///
    /// This is the side of the overlay that faces the anchor, which is where
    /// a connecting arrow is drawn.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// The axis along which the offset is applied.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Lowercase name, matching the accepted [`FromStr`] spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Placement`] from an unknown name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown placement (expected top, bottom, left, or right)")]
pub struct ParsePlacementError;

impl FromStr for Placement {
    type Err = ParsePlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParsePlacementError)
    }
}

/// Alignment of the overlay along the anchor's cross axis.
///
/// `Center` reproduces the classic tooltip behavior: centered horizontally
/// for `Top`/`Bottom` and vertically for `Left`/`Right`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Align {
    /// Overlay's start edge lines up with the anchor's start edge.
    Start,
    /// Overlay is centered on the anchor.
    #[default]
    Center,
    /// Overlay's end edge lines up with the anchor's end edge.
    End,
}

/// Build an anchor rectangle from the `{ top, left, width, height }` form
/// most hosts report element bounds in.
#[must_use]
pub fn anchor_rect(top: f64, left: f64, width: f64, height: f64) -> Rect {
    Rect::new(left, top, left + width, top + height)
}

/// Where an overlay should be rendered for one show cycle.
///
/// `top`/`left` is the attachment point; how the overlay's box hangs from
/// that point depends on `placement` and `align` (see
/// [`overlay_rect`](Self::overlay_rect)). Values are immutable once computed;
/// a fresh coordinate is produced for every show.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OverlayCoordinate {
    /// Vertical position of the attachment point.
    pub top: f64,
    /// Horizontal position of the attachment point.
    pub left: f64,
    /// Side of the anchor this coordinate was computed for.
    pub placement: Placement,
    /// Cross-axis alignment this coordinate was computed for.
    pub align: Align,
}

impl OverlayCoordinate {
    /// The attachment point as a [`Point`].
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The side of the overlay on which an arrow indicator is drawn.
    #[must_use]
    pub fn arrow_side(&self) -> Placement {
        self.placement.opposite()
    }

    /// Resolve the overlay's box for content of the given `size`.
    ///
    /// - `Top`: bottom edge sits on the attachment point.
    /// - `Bottom`: top edge sits on the attachment point.
    /// - `Left`: trailing (right) edge sits on the attachment point.
    /// - `Right`: leading (left) edge sits on the attachment point.
    ///
    /// On the cross axis the box is centered on the point for
    /// [`Align::Center`], starts at it for [`Align::Start`] and ends at it for
    /// [`Align::End`].
    #[must_use]
    pub fn overlay_rect(&self, size: Size) -> Rect {
        let cross = |extent: f64| match self.align {
            Align::Start => 0.0,
            Align::Center => extent / 2.0,
            Align::End => extent,
        };
        let (x0, y0) = match self.placement {
            Placement::Top => (self.left - cross(size.width), self.top - size.height),
            Placement::Bottom => (self.left - cross(size.width), self.top),
            Placement::Left => (self.left - size.width, self.top - cross(size.height)),
            Placement::Right => (self.left, self.top - cross(size.height)),
        };
        Rect::from_origin_size((x0, y0), size)
    }
}
