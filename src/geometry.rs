//! Render-time geometry driven by the animation tracks.

use crate::layout::{Bounds, Point};

/// Number of emit points laid out around the emit center
pub const EMIT_POINT_COUNT: usize = 8;

/// Angle between two neighbouring emit points
pub const EMIT_POINT_STEP_DEGREES: f32 = 360.0 / EMIT_POINT_COUNT as f32;

/// Values the renderer reads each frame.
///
/// Only the widget's animation tracks write these; callers get a read-only
/// view through the render parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryState {
    /// Icon rotation about its own center, in degrees
    pub icon_rotation: f32,
    /// Icon scale factor about its own center
    pub icon_scale: f32,
    /// Current ripple radius; `None` while no ripple is shown
    pub ripple_radius: Option<f32>,
    /// Distance of every emit point from the emit center
    pub emit_point_radius: f32,
    /// Shared alpha of the emit points
    pub emit_point_alpha: u8,
}

impl GeometryState {
    pub const NEUTRAL: GeometryState = GeometryState {
        icon_rotation: 0.0,
        icon_scale: 1.0,
        ripple_radius: None,
        emit_point_radius: 0.0,
        emit_point_alpha: u8::MAX,
    };

    /// Put the icon back at rest and make the emit points fully opaque.
    /// The ripple is left alone: a settled ripple stays until cleared.
    pub fn reset_icon(&mut self) {
        self.icon_rotation = 0.0;
        self.icon_scale = 1.0;
        self.emit_point_alpha = u8::MAX;
    }

    pub fn clear_ripple(&mut self) {
        self.ripple_radius = None;
    }

    pub fn is_neutral_icon(&self) -> bool {
        self.icon_rotation == 0.0 && self.icon_scale == 1.0
    }
}

impl Default for GeometryState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// How far a ripple has to grow to cover the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RippleReach {
    /// Distance from the anchor to the farthest corner of the bounds
    FarthestCorner,
    /// Distance from the anchor to the top-right corner of the bounds
    TopRightCorner,
}

impl RippleReach {
    pub fn max_radius(self, bounds: &Bounds, anchor: Point) -> f32 {
        let (width, height) = (bounds.width(), bounds.height());
        let (dx, dy) = match self {
            RippleReach::FarthestCorner => (
                anchor.x.max(width - anchor.x),
                anchor.y.max(height - anchor.y),
            ),
            RippleReach::TopRightCorner => (width - anchor.x, anchor.y),
        };
        (dx * dx + dy * dy).sqrt()
    }
}

/// Offsets of the emit points from the emit center for the given radius,
/// starting at 0° and stepping clockwise by 45° (y grows downwards).
pub fn emit_points(radius: f32) -> [Point; EMIT_POINT_COUNT] {
    std::array::from_fn(|i| {
        let theta = (i as f32 * EMIT_POINT_STEP_DEGREES).to_radians();
        Point::new(radius * theta.cos(), radius * theta.sin())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn test_farthest_corner_radius() {
        let bounds = Bounds::new(100.0, 50.0);
        let radius = RippleReach::FarthestCorner.max_radius(&bounds, Point::new(10.0, 25.0));
        assert!((radius - (90.0f32 * 90.0 + 25.0 * 25.0).sqrt()).abs() < EPS);
        assert!((radius - 93.408).abs() < 0.01);
    }

    #[test]
    fn test_farthest_corner_picks_larger_side() {
        let bounds = Bounds::new(100.0, 50.0);
        let radius = RippleReach::FarthestCorner.max_radius(&bounds, Point::new(90.0, 40.0));
        assert!((radius - (90.0f32 * 90.0 + 40.0 * 40.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_top_right_radius() {
        let bounds = Bounds::new(100.0, 40.0);
        let radius = RippleReach::TopRightCorner.max_radius(&bounds, Point::new(20.0, 20.0));
        assert!((radius - (80.0f32 * 80.0 + 20.0 * 20.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn test_emit_points_layout() {
        let points = emit_points(10.0);
        assert!((points[0].x - 10.0).abs() < EPS && points[0].y.abs() < EPS);
        assert!(points[2].x.abs() < EPS && (points[2].y - 10.0).abs() < EPS);
        assert!((points[4].x + 10.0).abs() < EPS && points[4].y.abs() < EPS);
        for (i, point) in points.iter().enumerate() {
            assert!((point.distance_to(Point::ORIGIN) - 10.0).abs() < EPS);
            let angle = point.y.atan2(point.x).to_degrees().rem_euclid(360.0);
            assert!((angle - i as f32 * 45.0).abs() < 0.01, "point {i} at {angle}");
        }
    }

    #[test]
    fn test_reset_icon_keeps_ripple() {
        let mut geometry = GeometryState {
            icon_rotation: 12.0,
            icon_scale: 1.3,
            ripple_radius: Some(40.0),
            emit_point_radius: 16.0,
            emit_point_alpha: 10,
        };
        geometry.reset_icon();
        assert!(geometry.is_neutral_icon());
        assert_eq!(geometry.emit_point_alpha, 255);
        assert_eq!(geometry.ripple_radius, Some(40.0));
    }
}
