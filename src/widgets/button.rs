use std::time::Duration;

use crate::animation::{Sequence, Track};
use crate::error::{Error, Result};
use crate::geometry::{emit_points, GeometryState};
use crate::invalidation::ChangeFlags;
use crate::layout::{Bounds, Point};
use crate::widgets::config::{
    AnchorSource, Driver, Effect, Motion, Variant, WidgetConfig, EMIT_MAX_RADIUS_DP,
    EMIT_MIN_RADIUS_DP, EMIT_POINT_RADIUS_DP, RIPPLE_MIN_RADIUS_DP,
};
use crate::widgets::motion;
use crate::widgets::render::{
    EmitPointsParams, IconSet, RenderParams, Renderer, RippleParams,
};
use crate::widgets::{Marker, ToggleCore, ToggleListener, ToggleState};

/// A togglable like/vote button.
///
/// The host feeds it taps, layout bounds and frame ticks, and reads back
/// [`RenderParams`] whenever [`take_changes`](MagicButton::take_changes)
/// reports a pending repaint.
///
/// ```ignore
/// let mut button = MagicButton::new(WidgetConfig::new(Variant::LikeText).initial_count(3))?;
/// button.set_listener(MyListener::new(api));
/// button.tap();
/// while button.tick(frame_delta) {
///     button.render(&mut renderer);
/// }
/// ```
pub struct MagicButton {
    config: WidgetConfig,
    core: ToggleCore,
    icons: Option<IconSet>,
    bounds: Option<Bounds>,
    ripple_anchor: Option<Point>,
    /// Last tap position, for tap-anchored ripples
    tap_anchor: Option<Point>,
    /// Bounds changed while the ripple was running
    ripple_stale: bool,
    icon_track: Track<Motion, ToggleCore>,
    effect_track: Track<Effect, ToggleCore>,
}

impl MagicButton {
    pub fn new(config: WidgetConfig) -> Result<Self> {
        config.validate()?;
        let count = u64::try_from(config.initial_count)
            .map_err(|_| Error::NegativeCount(config.initial_count))?;
        let core = ToggleCore::new(config.initial_state, count, config.enabled);
        let variant = config.variant;

        let mut icon_track = Track::new("icon");
        if let Some(kind) = variant.activate_motion() {
            let sequence = motion::icon_motion(kind, "icon-activate");
            let sequence = match variant.driver() {
                Driver::Icon => with_activation_hooks(sequence),
                Driver::Effect => sequence,
            };
            icon_track.insert(Motion::Activate, sequence);
        }
        if let Some(kind) = variant.deactivate_motion() {
            let sequence = motion::icon_motion(kind, "icon-deactivate")
                .on_start(ToggleCore::clear_ripple)
                .on_end(ToggleCore::settle_deactivation)
                .on_cancel(ToggleCore::rollback_deactivation);
            icon_track.insert(Motion::Deactivate, sequence);
        }

        let mut effect_track = Track::new("effect");
        if variant.effect() == Some(Effect::EmitPoints) {
            let sequence = motion::emit_points(
                config.dp(EMIT_MIN_RADIUS_DP),
                config.dp(EMIT_MAX_RADIUS_DP),
            );
            let sequence = match variant.driver() {
                Driver::Effect => with_activation_hooks(sequence),
                Driver::Icon => sequence,
            };
            effect_track.insert(Effect::EmitPoints, sequence);
        }
        // Ripple sequences need bounds; they are built in `set_bounds`.

        log::debug!("{:?}: created in {:?} with count {}", variant, core.state(), count);
        Ok(Self {
            config,
            core,
            icons: None,
            bounds: None,
            ripple_anchor: None,
            tap_anchor: None,
            ripple_stale: false,
            icon_track,
            effect_track,
        })
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn state(&self) -> ToggleState {
        self.core.state()
    }

    pub fn count(&self) -> u64 {
        self.core.count()
    }

    pub fn marker(&self) -> Marker {
        self.core.marker()
    }

    pub fn is_enabled(&self) -> bool {
        self.core.is_enabled()
    }

    pub fn geometry(&self) -> &GeometryState {
        self.core.geometry()
    }

    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Whether any track is still running
    pub fn is_animating(&self) -> bool {
        self.icon_track.is_running() || self.effect_track.is_running()
    }

    pub fn set_listener(&mut self, listener: impl ToggleListener + 'static) {
        self.core.set_listener(Box::new(listener));
    }

    pub fn set_icons(&mut self, icons: IconSet) {
        self.icons = Some(icons);
        self.core.request_paint();
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.core.set_enabled(enabled);
    }

    pub fn set_count(&mut self, count: i64) -> Result<()> {
        let count = u64::try_from(count).map_err(|_| Error::NegativeCount(count))?;
        self.core.set_count(count);
        Ok(())
    }

    /// Force a settled state, e.g. the result confirmed by a server.
    ///
    /// Running tracks are stopped without their cancel rollback and the
    /// geometry goes back to neutral.
    pub fn set_final_state(&mut self, state: ToggleState) -> Result<()> {
        if state.is_transient() {
            return Err(Error::InvalidInitialState(state));
        }
        self.icon_track.halt();
        self.effect_track.halt();
        self.core.force(state);
        Ok(())
    }

    /// Cancel every running track.
    ///
    /// The driving track's cancel hook rolls the optimistic change back, so
    /// calling this after a failed backing request restores the previous
    /// state and count. Does nothing when no track is running.
    pub fn cancel_all(&mut self) -> bool {
        let icon = self.icon_track.cancel(&mut self.core);
        let effect = self.effect_track.cancel(&mut self.core);
        if icon || effect {
            log::debug!("{:?}: cancelled, back to {:?}", self.variant(), self.state());
        }
        icon || effect
    }

    /// Layout pass result. Rebuilds the bounds-dependent ripple.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<()> {
        bounds.validate()?;
        self.bounds = Some(bounds);
        if self.variant().effect() == Some(Effect::Ripple) {
            if self.effect_track.is_playing(Effect::Ripple) {
                self.ripple_stale = true;
            } else {
                self.rebuild_ripple(self.resize_anchor(bounds));
            }
        }
        self.core.request_paint();
        Ok(())
    }

    /// Tap without a pointer position
    pub fn tap(&mut self) -> bool {
        self.handle_tap(None)
    }

    /// Tap at a position in local coordinates
    pub fn tap_at(&mut self, position: Point) -> bool {
        self.handle_tap(Some(position))
    }

    /// Advance every running track by `dt`. Returns true while any track runs.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let icon = self.icon_track.tick(dt, &mut self.core);
        let effect = self.effect_track.tick(dt, &mut self.core);
        if self.ripple_stale && !self.effect_track.is_playing(Effect::Ripple) {
            if let Some(bounds) = self.bounds {
                self.rebuild_ripple(self.resize_anchor(bounds));
            }
        }
        icon || effect
    }

    /// Pending layout/paint requests since the last call
    pub fn take_changes(&mut self) -> ChangeFlags {
        self.core.take_changes()
    }

    pub fn render_params(&self) -> RenderParams {
        let state = self.core.state();
        let marker = self.core.marker();
        let geometry = *self.core.geometry();
        let count = self.core.count();
        let has_ripple = self.variant().effect() == Some(Effect::Ripple);

        let ripple = match (geometry.ripple_radius, self.ripple_anchor) {
            (Some(radius), Some(center)) if has_ripple => Some(RippleParams { center, radius }),
            _ => None,
        };

        let emit_points = (self.variant().effect() == Some(Effect::EmitPoints)
            && state == ToggleState::Activating)
            .then(|| EmitPointsParams {
                center: self.emit_center(),
                offsets: emit_points(geometry.emit_point_radius),
                point_radius: self.config.dp(EMIT_POINT_RADIUS_DP),
                alpha: geometry.emit_point_alpha,
            });

        RenderParams {
            state,
            marker,
            icon: self.icons.map(|icons| icons.for_marker(marker)),
            geometry,
            counter_text: (count > 0).then(|| count.to_string()),
            filled: has_ripple && state == ToggleState::Active,
            ripple,
            emit_points,
        }
    }

    pub fn render(&self, renderer: &mut impl Renderer) {
        renderer.draw(&self.render_params());
    }

    fn handle_tap(&mut self, position: Option<Point>) -> bool {
        if !self.core.is_enabled() {
            log::trace!("{:?}: tap ignored, disabled", self.variant());
            return false;
        }
        match self.core.state() {
            ToggleState::Idle => self.activate(position),
            ToggleState::Active => self.deactivate(),
            state => {
                log::trace!("{:?}: tap ignored while {:?}", self.variant(), state);
                false
            }
        }
    }

    fn activate(&mut self, position: Option<Point>) -> bool {
        if !self.core.begin_activation() {
            return false;
        }
        let driver = self.variant().driver();

        let icon_started = self.icon_track.play(Motion::Activate, &mut self.core);
        let effect_started = match self.variant().effect() {
            Some(Effect::Ripple) => {
                self.prepare_ripple(position);
                self.effect_track.play(Effect::Ripple, &mut self.core)
            }
            Some(Effect::EmitPoints) => self.effect_track.play(Effect::EmitPoints, &mut self.core),
            None => false,
        };

        let driver_started = match driver {
            Driver::Icon => icon_started,
            Driver::Effect => effect_started,
        };
        self.core.notify_activated();
        if !driver_started {
            log::debug!("{:?}: no {:?} track to play, settling now", self.variant(), driver);
            self.core.settle_activation();
        }
        true
    }

    fn deactivate(&mut self) -> bool {
        if !self.core.begin_deactivation() {
            return false;
        }
        // A ripple outliving the activation must not keep writing its radius
        if self.effect_track.halt() {
            log::debug!("{:?}: effect stopped for deactivation", self.variant());
        }
        self.core.notify_deactivated();
        if !self.icon_track.play(Motion::Deactivate, &mut self.core) {
            self.core.clear_ripple();
            self.core.settle_deactivation();
        }
        true
    }

    fn prepare_ripple(&mut self, position: Option<Point>) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let anchor = match self.variant().anchor_source() {
            AnchorSource::Tap => {
                self.tap_anchor = position;
                position.unwrap_or(bounds.anchor)
            }
            AnchorSource::Bounds => bounds.anchor,
        };
        if self.ripple_stale || self.ripple_anchor != Some(anchor) {
            self.rebuild_ripple(anchor);
        }
    }

    /// Anchor to keep when the bounds change: a tap-anchored ripple stays
    /// where it was last tapped.
    fn resize_anchor(&self, bounds: Bounds) -> Point {
        match self.variant().anchor_source() {
            AnchorSource::Tap => self.tap_anchor.unwrap_or(bounds.anchor),
            AnchorSource::Bounds => bounds.anchor,
        }
    }

    fn rebuild_ripple(&mut self, anchor: Point) {
        let Some(bounds) = self.bounds else {
            return;
        };
        let max_radius = self.variant().ripple_reach().max_radius(&bounds, anchor);
        let sequence = motion::ripple(
            self.config.dp(RIPPLE_MIN_RADIUS_DP),
            max_radius,
            self.config.effective_ripple_duration(),
        );
        let sequence = match self.variant().driver() {
            Driver::Effect => with_activation_hooks(sequence),
            Driver::Icon => sequence.on_cancel(ToggleCore::clear_ripple),
        };
        log::debug!(
            "{:?}: ripple rebuilt at ({}, {}) reaching {:.1}px",
            self.variant(),
            anchor.x,
            anchor.y,
            max_radius
        );
        self.effect_track.insert(Effect::Ripple, sequence);
        self.ripple_anchor = Some(anchor);
        self.ripple_stale = false;
    }

    fn emit_center(&self) -> Point {
        match self.bounds {
            Some(bounds) => bounds.anchor,
            None => {
                let offset = self.config.dp(EMIT_MAX_RADIUS_DP) + self.config.dp(EMIT_POINT_RADIUS_DP);
                Point::new(offset, offset)
            }
        }
    }
}

fn with_activation_hooks(sequence: Sequence<ToggleCore>) -> Sequence<ToggleCore> {
    sequence
        .on_end(ToggleCore::settle_activation)
        .on_cancel(ToggleCore::rollback_activation)
}

impl std::fmt::Debug for MagicButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MagicButton")
            .field("variant", &self.config.variant)
            .field("core", &self.core)
            .field("bounds", &self.bounds)
            .field("icon_track", &self.icon_track)
            .field("effect_track", &self.effect_track)
            .finish_non_exhaustive()
    }
}
