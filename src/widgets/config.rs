use std::time::Duration;

use crate::error::{Error, Result};
use crate::geometry::RippleReach;
use crate::widgets::ToggleState;

/// Ripple radius at the start of the ripple, in dp
pub const RIPPLE_MIN_RADIUS_DP: f32 = 5.0;
/// Emit point distance from the center at the start of the burst, in dp
pub const EMIT_MIN_RADIUS_DP: f32 = 6.0;
/// Emit point distance from the center at the end of the burst, in dp
pub const EMIT_MAX_RADIUS_DP: f32 = 16.0;
/// Radius of a single emit point, in dp
pub const EMIT_POINT_RADIUS_DP: f32 = 1.0;

/// The preset widget flavours. They share one engine and differ only in
/// which tracks they register and which track settles the toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Bordered vote button: icon jiggle plus a ripple fill from the icon.
    /// The icon motion settles the toggle.
    #[default]
    VoteButton,
    /// Borderless vote label: icon jiggle plus an emit-point burst.
    VoteText,
    /// Borderless like label: scale bounce plus an emit-point burst.
    LikeText,
    /// Plain ripple button: the ripple grows from the tap position and
    /// switching off is immediate.
    Ripple,
}

/// Icon motion presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMotion {
    /// Rotate 0→20→-20→0 while scaling up, then two scale bumps
    Jiggle,
    /// Scale-only bounce 1.0→1.2→1.0→1.1→1.0
    Bounce,
}

/// Keys of the icon track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Activate,
    Deactivate,
}

/// Keys of the effect track
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Ripple,
    EmitPoints,
}

/// Which track's completion (or cancellation) settles an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    Icon,
    Effect,
}

/// Where the ripple grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    /// The anchor supplied with the layout bounds
    Bounds,
    /// The position of the tap, falling back to the bounds anchor
    Tap,
}

impl Variant {
    pub fn activate_motion(self) -> Option<IconMotion> {
        match self {
            Variant::VoteButton | Variant::VoteText => Some(IconMotion::Jiggle),
            Variant::LikeText => Some(IconMotion::Bounce),
            Variant::Ripple => None,
        }
    }

    pub fn deactivate_motion(self) -> Option<IconMotion> {
        match self {
            Variant::Ripple => None,
            _ => Some(IconMotion::Bounce),
        }
    }

    pub fn effect(self) -> Option<Effect> {
        match self {
            Variant::VoteButton | Variant::Ripple => Some(Effect::Ripple),
            Variant::VoteText | Variant::LikeText => Some(Effect::EmitPoints),
        }
    }

    pub fn driver(self) -> Driver {
        match self {
            Variant::VoteButton => Driver::Icon,
            _ => Driver::Effect,
        }
    }

    pub fn ripple_reach(self) -> RippleReach {
        match self {
            Variant::Ripple => RippleReach::FarthestCorner,
            _ => RippleReach::TopRightCorner,
        }
    }

    pub fn anchor_source(self) -> AnchorSource {
        match self {
            Variant::Ripple => AnchorSource::Tap,
            _ => AnchorSource::Bounds,
        }
    }

    pub fn default_ripple_duration(self) -> Duration {
        match self {
            Variant::Ripple => Duration::from_millis(600),
            _ => Duration::from_millis(400),
        }
    }
}

/// Widget configuration.
///
/// ```ignore
/// let config = WidgetConfig::new(Variant::LikeText)
///     .initial_count(12)
///     .initial_state(ToggleState::Active)
///     .density(2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetConfig {
    pub variant: Variant,
    /// Taps are ignored while false
    pub enabled: bool,
    pub initial_count: i64,
    /// Must be `Idle` or `Active`
    pub initial_state: ToggleState,
    /// Pixels per density-independent pixel
    pub density: f32,
    /// Overrides the variant's ripple duration
    pub ripple_duration: Option<Duration>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            enabled: true,
            initial_count: 0,
            initial_state: ToggleState::Idle,
            density: 1.0,
            ripple_duration: None,
        }
    }
}

impl WidgetConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn initial_count(mut self, count: i64) -> Self {
        self.initial_count = count;
        self
    }

    pub fn initial_state(mut self, state: ToggleState) -> Self {
        self.initial_state = state;
        self
    }

    pub fn density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn ripple_duration(mut self, duration: Duration) -> Self {
        self.ripple_duration = Some(duration);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_count < 0 {
            return Err(Error::NegativeCount(self.initial_count));
        }
        if self.initial_state.is_transient() {
            return Err(Error::InvalidInitialState(self.initial_state));
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(Error::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Convert density-independent pixels to whole pixels, rounding half up
    pub fn dp(&self, value: f32) -> f32 {
        (value * self.density + 0.5).floor()
    }

    pub fn effective_ripple_duration(&self) -> Duration {
        self.ripple_duration
            .unwrap_or_else(|| self.variant.default_ripple_duration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(WidgetConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_negative_count() {
        let config = WidgetConfig::default().initial_count(-3);
        assert_eq!(config.validate(), Err(Error::NegativeCount(-3)));
    }

    #[test]
    fn test_rejects_transient_state() {
        let config = WidgetConfig::default().initial_state(ToggleState::Activating);
        assert_eq!(
            config.validate(),
            Err(Error::InvalidInitialState(ToggleState::Activating))
        );
    }

    #[test]
    fn test_rejects_bad_density() {
        assert!(WidgetConfig::default().density(0.0).validate().is_err());
        assert!(WidgetConfig::default().density(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_dp_rounding() {
        let config = WidgetConfig::default().density(1.5);
        assert_eq!(config.dp(5.0), 8.0);
        assert_eq!(config.dp(16.0), 24.0);
        assert_eq!(WidgetConfig::default().dp(6.0), 6.0);
    }

    #[test]
    fn test_ripple_duration() {
        assert_eq!(
            WidgetConfig::new(Variant::Ripple).effective_ripple_duration(),
            Duration::from_millis(600)
        );
        let custom = WidgetConfig::new(Variant::VoteButton).ripple_duration(Duration::from_millis(250));
        assert_eq!(custom.effective_ripple_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_variant_tracks() {
        assert_eq!(Variant::VoteButton.driver(), Driver::Icon);
        assert_eq!(Variant::LikeText.activate_motion(), Some(IconMotion::Bounce));
        assert_eq!(Variant::VoteText.effect(), Some(Effect::EmitPoints));
        assert_eq!(Variant::Ripple.deactivate_motion(), None);
        assert_eq!(Variant::Ripple.ripple_reach(), RippleReach::FarthestCorner);
    }
}
