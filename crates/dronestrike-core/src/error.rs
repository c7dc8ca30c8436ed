//! Setup-time configuration errors.
//!
//! The tick loop itself is infallible; everything that can go wrong is
//! caught once when the engine is configured or the field is resized.

use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is NaN or infinite.
    NonFiniteField { width: f64, height: f64 },
    /// Width must be positive.
    FieldTooNarrow { width: f64 },
    /// Height must leave room for the drone spawn band.
    FieldTooShort { height: f64, min: f64 },
    /// Frame duration must be finite and positive.
    InvalidFrameDuration { frame_ms: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteField { width, height } => {
                write!(f, "field size must be finite: got {width}x{height}")
            }
            Self::FieldTooNarrow { width } => {
                write!(f, "field width must be positive: got {width}")
            }
            Self::FieldTooShort { height, min } => write!(
                f,
                "field height must exceed {min} to fit the spawn band: got {height}"
            ),
            Self::InvalidFrameDuration { frame_ms } => {
                write!(f, "frame duration must be a positive number of ms: got {frame_ms}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
