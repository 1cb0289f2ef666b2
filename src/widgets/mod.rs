pub mod button;
pub mod config;
pub mod motion;
pub mod render;
pub mod toggle;

pub use button::MagicButton;
pub use config::{Effect, IconMotion, Motion, Variant, WidgetConfig};
pub use render::{
    EmitPointsParams, IconHandle, IconSet, RenderParams, Renderer, RippleParams,
};
pub use toggle::{Marker, ToggleCore, ToggleListener, ToggleState};
