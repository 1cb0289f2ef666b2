//! The toggle lifecycle shared by every variant.
//!
//! ```text
//!            tap                    track ends
//!   Idle ───────────▶ Activating ─────────────▶ Active
//!    ▲  ◀───────────── (cancel)                  │  ▲
//!    │                                       tap │  │ (cancel)
//!    │        track ends                         ▼  │
//!    └──────────────────────────────────── Deactivating
//! ```
//!
//! Taps only act on the settled states. The counter moves optimistically
//! when a transition starts and moves back one unit if the transition's
//! driving track is cancelled.

use crate::geometry::GeometryState;
use crate::invalidation::{ChangeFlags, Invalidation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToggleState {
    /// Not liked/voted
    #[default]
    Idle,
    /// Animating on
    Activating,
    /// Liked/voted
    Active,
    /// Animating off
    Deactivating,
}

impl ToggleState {
    pub fn is_transient(self) -> bool {
        matches!(self, ToggleState::Activating | ToggleState::Deactivating)
    }

    pub fn is_settled(self) -> bool {
        !self.is_transient()
    }
}

/// Which representation the renderer should draw (icon asset, fill, text color)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Inactive,
    Active,
}

impl Marker {
    pub fn for_state(state: ToggleState) -> Self {
        match state {
            ToggleState::Idle | ToggleState::Deactivating => Marker::Inactive,
            ToggleState::Activating | ToggleState::Active => Marker::Active,
        }
    }
}

/// Receives toggle notifications from the widget.
///
/// `on_activated` and `on_deactivated` fire at the moment of the optimistic
/// counter change, before any animation completes. Issue the backing request
/// there, then call `set_final_state` or `cancel_all` with its outcome.
pub trait ToggleListener {
    fn on_activated(&mut self);

    fn on_deactivated(&mut self);

    /// A transition finished its animation and reached `state`
    fn on_settled(&mut self, _state: ToggleState) {}

    /// A transition was cancelled and the widget went back to `state`
    fn on_rolled_back(&mut self, _state: ToggleState) {}
}

/// State, counter and geometry of one widget.
///
/// This is the target every animation track writes into. Its transition
/// methods are wired as sequence hooks by the widget facade.
pub struct ToggleCore {
    state: ToggleState,
    count: u64,
    marker: Marker,
    enabled: bool,
    geometry: GeometryState,
    invalidation: Invalidation,
    /// Whether the tap that started the current transition moved the counter
    counted: bool,
    listener: Option<Box<dyn ToggleListener>>,
}

impl ToggleCore {
    pub fn new(state: ToggleState, count: u64, enabled: bool) -> Self {
        debug_assert!(state.is_settled());
        Self {
            state,
            count,
            marker: Marker::for_state(state),
            enabled,
            geometry: GeometryState::NEUTRAL,
            invalidation: Invalidation::new(),
            counted: false,
            listener: None,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn geometry(&self) -> &GeometryState {
        &self.geometry
    }

    pub(crate) fn set_listener(&mut self, listener: Box<dyn ToggleListener>) {
        self.listener = Some(listener);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_count(&mut self, count: u64) {
        self.count = count;
        self.invalidation.request_layout();
    }

    /// Apply a geometry change coming from a segment and request a repaint
    pub(crate) fn update_geometry(&mut self, f: impl FnOnce(&mut GeometryState)) {
        f(&mut self.geometry);
        self.invalidation.request_paint();
    }

    pub(crate) fn request_paint(&mut self) {
        self.invalidation.request_paint();
    }

    pub(crate) fn take_changes(&mut self) -> ChangeFlags {
        self.invalidation.take()
    }

    pub(crate) fn clear_ripple(&mut self) {
        self.update_geometry(GeometryState::clear_ripple);
    }

    /// `Idle --tap--> Activating`. Returns false when the tap is ignored.
    pub(crate) fn begin_activation(&mut self) -> bool {
        if !self.enabled || self.state != ToggleState::Idle {
            return false;
        }
        self.state = ToggleState::Activating;
        let raised = self.count.saturating_add(1);
        self.counted = raised != self.count;
        self.count = raised;
        self.marker = Marker::Active;
        self.invalidation.request_layout();
        log::debug!("toggle: Idle -> Activating (count {})", self.count);
        true
    }

    /// `Active --tap--> Deactivating`. Returns false when the tap is ignored.
    pub(crate) fn begin_deactivation(&mut self) -> bool {
        if !self.enabled || self.state != ToggleState::Active {
            return false;
        }
        self.state = ToggleState::Deactivating;
        let lowered = self.count.saturating_sub(1);
        self.counted = lowered != self.count;
        self.count = lowered;
        self.marker = Marker::Inactive;
        self.invalidation.request_layout();
        log::debug!("toggle: Active -> Deactivating (count {})", self.count);
        true
    }

    pub(crate) fn notify_activated(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_activated();
        }
    }

    pub(crate) fn notify_deactivated(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_deactivated();
        }
    }

    /// `Activating --completes--> Active`
    pub(crate) fn settle_activation(&mut self) {
        if self.state != ToggleState::Activating {
            log::debug!("toggle: activation end ignored in {:?}", self.state);
            return;
        }
        self.enter(ToggleState::Active);
        log::debug!("toggle: Activating -> Active");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_settled(ToggleState::Active);
        }
    }

    /// `Deactivating --completes--> Idle`
    pub(crate) fn settle_deactivation(&mut self) {
        if self.state != ToggleState::Deactivating {
            log::debug!("toggle: deactivation end ignored in {:?}", self.state);
            return;
        }
        self.enter(ToggleState::Idle);
        log::debug!("toggle: Deactivating -> Idle");
        if let Some(listener) = self.listener.as_mut() {
            listener.on_settled(ToggleState::Idle);
        }
    }

    /// `Activating --cancelled--> Idle`, undoing the optimistic increment
    pub(crate) fn rollback_activation(&mut self) {
        if self.state != ToggleState::Activating {
            return;
        }
        if std::mem::take(&mut self.counted) {
            self.count = self.count.saturating_sub(1);
        }
        self.enter(ToggleState::Idle);
        self.invalidation.request_layout();
        log::debug!("toggle: Activating rolled back (count {})", self.count);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_rolled_back(ToggleState::Idle);
        }
    }

    /// `Deactivating --cancelled--> Active`, re-adding the unit removed on tap.
    /// A tap on a zero counter removed nothing, so nothing is re-added.
    pub(crate) fn rollback_deactivation(&mut self) {
        if self.state != ToggleState::Deactivating {
            return;
        }
        if std::mem::take(&mut self.counted) {
            self.count = self.count.saturating_add(1);
        }
        self.enter(ToggleState::Active);
        self.invalidation.request_layout();
        log::debug!("toggle: Deactivating rolled back (count {})", self.count);
        if let Some(listener) = self.listener.as_mut() {
            listener.on_rolled_back(ToggleState::Active);
        }
    }

    /// Jump straight to a settled state, skipping animation
    pub(crate) fn force(&mut self, state: ToggleState) {
        debug_assert!(state.is_settled());
        log::debug!("toggle: forced {:?} -> {:?}", self.state, state);
        self.enter(state);
    }

    fn enter(&mut self, state: ToggleState) {
        self.state = state;
        self.counted = false;
        self.marker = Marker::for_state(state);
        self.geometry.reset_icon();
        if state == ToggleState::Idle {
            self.geometry.clear_ripple();
        }
        self.invalidation.request_paint();
    }
}

impl std::fmt::Debug for ToggleCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleCore")
            .field("state", &self.state)
            .field("count", &self.count)
            .field("marker", &self.marker)
            .field("enabled", &self.enabled)
            .field("geometry", &self.geometry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl ToggleListener for Recorder {
        fn on_activated(&mut self) {
            self.0.borrow_mut().push("activated".into());
        }

        fn on_deactivated(&mut self) {
            self.0.borrow_mut().push("deactivated".into());
        }

        fn on_settled(&mut self, state: ToggleState) {
            self.0.borrow_mut().push(format!("settled {state:?}"));
        }

        fn on_rolled_back(&mut self, state: ToggleState) {
            self.0.borrow_mut().push(format!("rolled back {state:?}"));
        }
    }

    #[test]
    fn test_activation_round_trip() {
        let mut core = ToggleCore::new(ToggleState::Idle, 0, true);
        assert!(core.begin_activation());
        assert_eq!(core.state(), ToggleState::Activating);
        assert_eq!(core.count(), 1);
        assert_eq!(core.marker(), Marker::Active);

        core.update_geometry(|g| g.icon_scale = 1.3);
        core.settle_activation();
        assert_eq!(core.state(), ToggleState::Active);
        assert!(core.geometry().is_neutral_icon());
        assert_eq!(core.count(), 1);
    }

    #[test]
    fn test_transient_states_ignore_taps() {
        let mut core = ToggleCore::new(ToggleState::Idle, 0, true);
        core.begin_activation();
        assert!(!core.begin_activation());
        assert!(!core.begin_deactivation());
        assert_eq!(core.count(), 1);
    }

    #[test]
    fn test_disabled_ignores_taps() {
        let mut core = ToggleCore::new(ToggleState::Active, 3, false);
        assert!(!core.begin_deactivation());
        assert_eq!(core.state(), ToggleState::Active);
        assert_eq!(core.count(), 3);
    }

    #[test]
    fn test_rollbacks() {
        let mut core = ToggleCore::new(ToggleState::Active, 5, true);
        core.begin_deactivation();
        assert_eq!(core.count(), 4);
        core.rollback_deactivation();
        assert_eq!(core.state(), ToggleState::Active);
        assert_eq!(core.marker(), Marker::Active);
        assert_eq!(core.count(), 5);

        let mut core = ToggleCore::new(ToggleState::Idle, 0, true);
        core.begin_activation();
        core.update_geometry(|g| g.ripple_radius = Some(12.0));
        core.rollback_activation();
        assert_eq!(core.state(), ToggleState::Idle);
        assert_eq!(core.marker(), Marker::Inactive);
        assert_eq!(core.count(), 0);
        assert_eq!(core.geometry().ripple_radius, None);
    }

    #[test]
    fn test_rollback_on_zero_counter_restores_zero() {
        let mut core = ToggleCore::new(ToggleState::Active, 0, true);
        assert!(core.begin_deactivation());
        assert_eq!(core.count(), 0);
        core.rollback_deactivation();
        assert_eq!(core.state(), ToggleState::Active);
        assert_eq!(core.count(), 0);

        // A later rollback from a non-zero counter re-adds as usual
        core.set_count(1);
        core.begin_deactivation();
        core.rollback_deactivation();
        assert_eq!(core.count(), 1);
    }

    #[test]
    fn test_stale_hooks_are_ignored() {
        let mut core = ToggleCore::new(ToggleState::Active, 2, true);
        core.rollback_activation();
        core.settle_deactivation();
        assert_eq!(core.state(), ToggleState::Active);
        assert_eq!(core.count(), 2);
    }

    #[test]
    fn test_listener_notifications() {
        let recorder = Recorder::default();
        let mut core = ToggleCore::new(ToggleState::Idle, 0, true);
        core.set_listener(Box::new(recorder.clone()));
        core.begin_activation();
        core.notify_activated();
        core.rollback_activation();
        assert_eq!(*recorder.0.borrow(), ["activated", "rolled back Idle"]);
    }

    #[test]
    fn test_counter_change_requests_layout() {
        let mut core = ToggleCore::new(ToggleState::Idle, 0, true);
        core.take_changes();
        core.begin_activation();
        assert!(core.take_changes().contains(ChangeFlags::NEEDS_LAYOUT));
        core.update_geometry(|g| g.icon_rotation = 4.0);
        assert_eq!(core.take_changes(), ChangeFlags::NEEDS_PAINT);
    }
}
