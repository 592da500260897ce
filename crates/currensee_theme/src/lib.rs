//! CurrenSee Theme System
//!
//! Light/dark palettes for the CurrenSee site and the pipeline that turns
//! the active palette into CSS custom properties on the document root.
//!
//! # Overview
//!
//! - **Design tokens**: colors, roles, radii, spacing, shadows, typography
//! - **Themes**: two immutable statics, [`LIGHT_THEME`] and [`DARK_THEME`]
//! - **Store**: [`ThemeStore`] tracks the user preference and the OS signal
//!   and pushes active-theme changes to subscribers
//! - **Projection**: [`CssVariableProjector`] writes `--theme-*` raw values
//!   and HSL compatibility slots onto a [`DocumentRoot`]
//!
//! # Quick Start
//!
//! ```rust
//! use currensee_theme::{
//!     ColorScheme, CssVariableProjector, StyleRoot, ThemePreference, ThemeStore,
//! };
//! use std::sync::{Arc, Mutex};
//!
//! let store = ThemeStore::in_memory(ThemePreference::System);
//! let root = Arc::new(Mutex::new(StyleRoot::new()));
//! let _projection = CssVariableProjector::new().attach(&store, root.clone());
//!
//! store.set_system_scheme(Some(ColorScheme::Dark));
//! assert_eq!(root.lock().unwrap().property("--theme-bg"), Some("#0F0F12"));
//! ```
//!
//! # Roles
//!
//! UI code asks for a role rather than a raw color:
//!
//! ```rust
//! use currensee_theme::{RoleToken, LIGHT_THEME};
//!
//! let (fg, bg) = LIGHT_THEME.role_colors(RoleToken::SettingsNotifIcon);
//! assert_eq!(fg.to_css(), "#EF4444");
//! assert_eq!(bg.to_css(), "#FDECEC");
//! ```

pub mod color;
pub mod error;
pub mod hsl;
pub mod locale;
pub mod preference;
pub mod projector;
pub mod state;
pub mod theme;
pub mod themes;
pub mod tokens;

// Re-export commonly used types
pub use color::Color;
pub use error::{ColorParseError, PreferenceError, Result, ThemeError};
pub use hsl::{to_hsl, Hsl};
pub use locale::{apply_document_language, resolve_locale, TextDirection, SUPPORTED_LOCALES};
pub use preference::{FilePreferences, MemoryPreferences, PreferenceProvider, ThemePreference};
pub use projector::{CssVariableProjector, DocumentRoot, StyleRoot, COMPAT_SLOTS};
pub use state::{Subscription, ThemeContext, ThemeStore};
pub use theme::{ColorScheme, Theme, ThemeBundle};
pub use themes::{currensee_bundle, DARK_THEME, LIGHT_THEME};
pub use tokens::*;
