use thiserror::Error;

use crate::widgets::ToggleState;

/// Errors raised while configuring a widget.
///
/// Interaction itself never fails: taps while disabled or mid-transition are
/// ignored and cancelling an idle widget is a no-op.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("count must not be negative, got {0}")]
    NegativeCount(i64),

    #[error("{0:?} is transient; only Idle or Active can be set directly")]
    InvalidInitialState(ToggleState),

    #[error("density must be a positive finite factor, got {0}")]
    InvalidDensity(f32),

    #[error("invalid bounds {width}x{height}")]
    InvalidBounds { width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, Error>;
