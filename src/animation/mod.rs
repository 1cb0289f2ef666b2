//! Keyframe animation engine.
//!
//! [`Segment`]s interpolate one value over a fixed duration, [`Sequence`]s
//! compose them sequentially or in parallel, and [`Track`]s make sure only
//! one sequence drives a render channel at a time. Everything is advanced by
//! explicit host ticks; nothing here spawns threads or reads the clock.

mod animatable;
mod clock;
mod segment;
mod sequence;
mod timing;
mod track;

pub use animatable::Animatable;
pub use clock::FrameClock;
pub use segment::Segment;
pub use sequence::{Playback, Sequence};
pub use timing::TimingFunction;
pub use track::Track;
