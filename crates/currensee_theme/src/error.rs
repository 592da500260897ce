//! Theme error types

use std::path::PathBuf;
use thiserror::Error;

/// Failure to parse a CSS color string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input is neither `#RRGGBB` nor `rgb()`/`rgba()`
    #[error("unrecognized color syntax: {0:?}")]
    Syntax(String),

    /// A hex digit pair could not be decoded
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// An `rgb()`/`rgba()` channel is above 255
    #[error("color channel out of range (0-255): {0}")]
    ChannelOutOfRange(String),

    /// The alpha component is not a number in 0.0..=1.0
    #[error("invalid alpha component: {0:?}")]
    InvalidAlpha(String),
}

/// Failure of the preference persistence layer
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Failed to read or write the preference file
    #[error("preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preference file is not valid TOML
    #[error("failed to parse preference file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The preference could not be serialized
    #[error("failed to serialize preference: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored value is not one of `light`, `dark`, `system`
    #[error("unknown theme preference: {0:?}")]
    Unknown(String),
}

/// Theme context errors
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A context was used after its store was dropped, or was never bound to one
    #[error("theme context used outside of a ThemeStore provider")]
    OutsideProvider,

    /// Persisting or loading the preference failed
    #[error(transparent)]
    Preference(#[from] PreferenceError),

    /// A color string could not be parsed
    #[error(transparent)]
    Color(#[from] ColorParseError),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
