//! What the host renderer gets to see.
//!
//! The widget never draws. Each frame the host asks for [`RenderParams`] and
//! draws the icon (rotated and scaled about its own center), the optional
//! ripple or emit points, and the counter text.

use crate::geometry::{GeometryState, EMIT_POINT_COUNT};
use crate::layout::Point;
use crate::widgets::{Marker, ToggleState};

/// Opaque handle to an icon asset owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IconHandle(pub u64);

/// Icons to use for each marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSet {
    pub inactive: IconHandle,
    pub active: IconHandle,
}

impl IconSet {
    /// Same icon for both markers (the marker then only changes fill and text color)
    pub fn single(icon: IconHandle) -> Self {
        Self {
            inactive: icon,
            active: icon,
        }
    }

    pub fn pair(inactive: IconHandle, active: IconHandle) -> Self {
        Self { inactive, active }
    }

    pub fn for_marker(&self, marker: Marker) -> IconHandle {
        match marker {
            Marker::Inactive => self.inactive,
            Marker::Active => self.active,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleParams {
    pub center: Point,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitPointsParams {
    pub center: Point,
    /// Offsets of each point from `center`
    pub offsets: [Point; EMIT_POINT_COUNT],
    /// Radius of a single point
    pub point_radius: f32,
    pub alpha: u8,
}

/// Snapshot of everything needed to draw the widget
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    pub state: ToggleState,
    pub marker: Marker,
    pub icon: Option<IconHandle>,
    pub geometry: GeometryState,
    /// `None` when the count is zero
    pub counter_text: Option<String>,
    /// Whether the background is fully filled (settled ripple)
    pub filled: bool,
    pub ripple: Option<RippleParams>,
    pub emit_points: Option<EmitPointsParams>,
}

/// Host-side drawing collaborator
pub trait Renderer {
    fn draw(&mut self, params: &RenderParams);
}

impl<F: FnMut(&RenderParams)> Renderer for F {
    fn draw(&mut self, params: &RenderParams) {
        self(params)
    }
}
