//! User theme preference and its persistence
//!
//! The store does not own persistence. It talks to a [`PreferenceProvider`],
//! which the embedding application supplies. Two providers ship here: an
//! in-memory one and a TOML file one (used by the CLI).

use crate::error::PreferenceError;
use crate::theme::ColorScheme;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::RwLock;

/// What the user asked for. `System` follows the OS signal.
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Resolve against the OS signal (`None` while it is still loading)
    pub fn resolve(self, system: Option<ColorScheme>) -> Option<ColorScheme> {
        match self {
            ThemePreference::Light => Some(ColorScheme::Light),
            ThemePreference::Dark => Some(ColorScheme::Dark),
            ThemePreference::System => system,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl From<ColorScheme> for ThemePreference {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => ThemePreference::Light,
            ColorScheme::Dark => ThemePreference::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(PreferenceError::Unknown(other.to_string())),
        }
    }
}

/// Persistence for the user's preference
pub trait PreferenceProvider: Send + Sync {
    /// Load the stored preference, `None` if nothing was stored yet
    fn load(&self) -> Result<Option<ThemePreference>, PreferenceError>;

    /// Persist a new preference
    fn store(&self, preference: ThemePreference) -> Result<(), PreferenceError>;
}

/// Non-persistent provider
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    value: RwLock<Option<ThemePreference>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(preference: ThemePreference) -> Self {
        Self {
            value: RwLock::new(Some(preference)),
        }
    }
}

impl PreferenceProvider for MemoryPreferences {
    fn load(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        Ok(*self.value.read().unwrap())
    }

    fn store(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        *self.value.write().unwrap() = Some(preference);
        Ok(())
    }
}

/// On-disk layout of the preference file
#[derive(Debug, Default, Deserialize, Serialize)]
struct PreferenceFile {
    #[serde(default)]
    theme: Option<String>,
}

/// Provider backed by a small TOML file (`theme = "dark"`)
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceProvider for FilePreferences {
    fn load(&self) -> Result<Option<ThemePreference>, PreferenceError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let file: PreferenceFile = toml::from_str(&content)?;

        file.theme.as_deref().map(str::parse::<ThemePreference>).transpose()
    }

    fn store(&self, preference: ThemePreference) -> Result<(), PreferenceError> {
        let file = PreferenceFile {
            theme: Some(preference.as_str().to_string()),
        };
        let content = toml::to_string_pretty(&file)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        tracing::debug!(
            "stored theme preference {} in {}",
            preference,
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_preference_follows_signal() {
        assert_eq!(ThemePreference::System.resolve(None), None);
        assert_eq!(
            ThemePreference::System.resolve(Some(ColorScheme::Dark)),
            Some(ColorScheme::Dark)
        );
        assert_eq!(
            ThemePreference::Light.resolve(Some(ColorScheme::Dark)),
            Some(ColorScheme::Light)
        );
    }

    #[test]
    fn memory_provider_round_trips() {
        let provider = MemoryPreferences::new();
        assert_eq!(provider.load().unwrap(), None);
        provider.store(ThemePreference::Dark).unwrap();
        assert_eq!(provider.load().unwrap(), Some(ThemePreference::Dark));
    }

    #[test]
    fn file_provider_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs").join("theme.toml");

        let provider = FilePreferences::new(&path);
        assert_eq!(provider.load().unwrap(), None);
        provider.store(ThemePreference::Light).unwrap();

        let reopened = FilePreferences::new(&path);
        assert_eq!(reopened.load().unwrap(), Some(ThemePreference::Light));
    }

    #[test]
    fn file_provider_rejects_unknown_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        fs::write(&path, "theme = \"sepia\"\n").unwrap();

        let err = FilePreferences::new(&path).load().unwrap_err();
        assert!(matches!(err, PreferenceError::Unknown(ref v) if v == "sepia"));
    }
}
