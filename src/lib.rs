//! Togglable like/vote buttons with optimistic counters.
//!
//! A tap flips the widget into a transient state, moves the counter right
//! away and starts a short keyframe animation. When the animation finishes
//! the widget settles; when it is cancelled (typically because the backing
//! request failed) the state and counter roll back.
//!
//! The crate owns no thread, no clock and no pixels. The host forwards taps,
//! layout bounds and frame deltas, and draws from [`widgets::RenderParams`].

pub mod animation;
pub mod error;
pub mod geometry;
pub mod invalidation;
pub mod layout;
pub mod widgets;

pub use error::{Error, Result};

pub mod prelude {
    pub use crate::animation::{FrameClock, TimingFunction};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::GeometryState;
    pub use crate::invalidation::ChangeFlags;
    pub use crate::layout::{Bounds, Padding, Point, Size};
    pub use crate::widgets::{
        IconHandle, IconSet, MagicButton, Marker, RenderParams, Renderer, ToggleListener,
        ToggleState, Variant, WidgetConfig,
    };
}
