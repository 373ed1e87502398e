//! Configuration errors
//!
//! The simulation itself cannot fail: every step is pure computation. The only
//! fallible operation is building a session from settings that would corrupt
//! layout or spawn placement, so those are rejected before the first frame.

use std::fmt;

/// Settings rejected at session construction time
#[derive(Clone, Debug, PartialEq)]
pub enum SettingsError {
    /// Playfield width/height is zero, negative or not finite
    InvalidPlayfield { width: f32, height: f32 },
    /// An object size is zero, negative or not finite
    InvalidSize { object: &'static str, size: f32 },
    /// An object does not fit across the playfield
    WiderThanPlayfield {
        object: &'static str,
        size: f32,
        width: f32,
    },
    /// The player (plus its bottom margin) does not fit vertically
    PlayerTallerThanPlayfield { needed: f32, height: f32 },
    /// A counter that is used as a divisor or a lifetime is zero
    ZeroSetting { name: &'static str },
    /// A speed that would leave objects stalled or moving the wrong way
    InvalidSpeed { object: &'static str, speed: f32 },
    /// Settings JSON could not be parsed
    Parse { message: String },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPlayfield { width, height } => {
                write!(f, "invalid playfield: {width}x{height}")
            }
            Self::InvalidSize { object, size } => write!(f, "invalid {object} size: {size}"),
            Self::WiderThanPlayfield {
                object,
                size,
                width,
            } => write!(
                f,
                "{object} size {size} exceeds playfield width {width}"
            ),
            Self::PlayerTallerThanPlayfield { needed, height } => write!(
                f,
                "player needs {needed} pixels of height, playfield has {height}"
            ),
            Self::ZeroSetting { name } => write!(f, "{name} must be greater than zero"),
            Self::InvalidSpeed { object, speed } => write!(f, "invalid {object} speed: {speed}"),
            Self::Parse { message } => write!(f, "could not parse settings: {message}"),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}
