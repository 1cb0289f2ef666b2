//! Layout values supplied by the host layout pass.
//!
//! The widget never measures itself. The host hands it a [`Bounds`] after
//! every layout pass and the widget derives its bounds-dependent geometry
//! (the ripple reach) from it.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Widget bounds in local pixel coordinates, plus the point ripples and
/// emit points grow from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub size: Size,
    pub padding: Padding,
    pub anchor: Point,
}

impl Bounds {
    /// Bounds of the given size, anchored at their center.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            padding: Padding::default(),
            anchor: Point::new(width / 2.0, height / 2.0),
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn anchor(mut self, anchor: Point) -> Self {
        self.anchor = anchor;
        self
    }

    /// Anchor at the center of a leading icon: `padding.left + icon_width / 2`
    /// horizontally, vertically centered.
    pub fn icon_anchor(mut self, icon_width: f32) -> Self {
        self.anchor = Point::new(
            self.padding.left + icon_width / 2.0,
            self.size.height / 2.0,
        );
        self
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let Size { width, height } = self.size;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(Error::InvalidBounds { width, height });
        }
        Ok(())
    }
}
