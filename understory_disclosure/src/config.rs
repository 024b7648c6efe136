// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static configuration for a disclosure and its validation.

use understory_placement::{Align, DEFAULT_OFFSET, Placement, Placer};

/// Default show delay in milliseconds.
pub const DEFAULT_DELAY_MS: u64 = 100;

bitflags::bitflags! {
    /// Which input families may open (and close) the overlay.
    ///
    /// Escape and unmount are always honored.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Triggers: u8 {
        /// Pointer enter opens, pointer leave closes.
        const HOVER = 0b0000_0001;
        /// Focus gained opens, focus lost closes.
        const FOCUS = 0b0000_0010;
    }
}

impl Default for Triggers {
    fn default() -> Self {
        Self::HOVER | Self::FOCUS
    }
}

/// Configuration rejected by [`DisclosureConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The offset is negative.
    #[error("offset must be non-negative, got {0}")]
    NegativeOffset(f64),
    /// The offset is NaN or infinite.
    #[error("offset must be finite, got {0}")]
    NonFiniteOffset(f64),
}

/// Construction-time configuration for a
/// [`DisclosureController`](crate::controller::DisclosureController).
///
/// ```
/// use understory_disclosure::config::DisclosureConfig;
/// use understory_placement::Placement;
///
/// let config = DisclosureConfig::default()
///     .placement(Placement::Right)
///     .delay_ms(300)
///     .show_arrow(false);
/// assert!(config.validate().is_ok());
/// assert!(DisclosureConfig::default().offset(-1.0).validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DisclosureConfig {
    /// Side of the trigger the overlay is placed on.
    pub placement: Placement,
    /// Cross-axis alignment.
    pub align: Align,
    /// Delay before showing, in milliseconds. `0` shows on the next tick.
    pub delay_ms: u64,
    /// When set, nothing opens the overlay.
    pub disabled: bool,
    /// Gap between trigger and overlay.
    pub offset: f64,
    /// Whether the host draws an arrow indicator. Purely cosmetic.
    pub show_arrow: bool,
    /// Input families that drive the overlay.
    pub triggers: Triggers,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            align: Align::default(),
            delay_ms: DEFAULT_DELAY_MS,
            disabled: false,
            offset: DEFAULT_OFFSET,
            show_arrow: true,
            triggers: Triggers::default(),
        }
    }
}

impl DisclosureConfig {
    /// Set the placement side.
    #[must_use]
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the show delay in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the disabled flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the trigger/overlay gap.
    #[must_use]
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Set whether an arrow is drawn.
    #[must_use]
    pub fn show_arrow(mut self, show: bool) -> Self {
        self.show_arrow = show;
        self
    }

    /// Set the input families that drive the overlay.
    #[must_use]
    pub fn triggers(mut self, triggers: Triggers) -> Self {
        self.triggers = triggers;
        self
    }

    /// The placement part of this configuration.
    pub fn placer(&self) -> Placer {
        Placer {
            placement: self.placement,
            align: self.align,
            offset: self.offset,
        }
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.offset.is_finite() {
            return Err(ConfigError::NonFiniteOffset(self.offset));
        }
        if self.offset < 0.0 {
            return Err(ConfigError::NegativeOffset(self.offset));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = DisclosureConfig::default();
        assert_eq!(c.delay_ms, 100);
        assert_eq!(c.offset, 12.0);
        assert_eq!(c.placement, Placement::Top);
        assert!(!c.disabled, "enabled by default");
        assert!(c.show_arrow, "arrow by default");
        assert_eq!(c.triggers, Triggers::HOVER | Triggers::FOCUS);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_offsets() {
        let c = DisclosureConfig::default();
        assert_eq!(
            c.clone().offset(-0.5).validate(),
            Err(ConfigError::NegativeOffset(-0.5))
        );
        assert!(matches!(
            c.clone().offset(f64::NAN).validate(),
            Err(ConfigError::NonFiniteOffset(_))
        ));
        assert_eq!(
            c.clone().offset(f64::INFINITY).validate(),
            Err(ConfigError::NonFiniteOffset(f64::INFINITY))
        );
        assert_eq!(c.offset(0.0).validate(), Ok(()));
    }

    #[test]
    fn placer_mirrors_config() {
        let c = DisclosureConfig::default()
            .placement(Placement::Left)
            .align(Align::End)
            .offset(3.0);
        let p = c.placer();
        assert_eq!(p.placement, Placement::Left);
        assert_eq!(p.align, Align::End);
        assert_eq!(p.offset, 3.0);
    }
}
