//! CurrenSee configuration file handling

use anyhow::{Context, Result};
use currensee_theme::{ColorScheme, ColorToken, CssVariableProjector, ThemePreference};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file name looked up in a directory
pub const CONFIG_FILE: &str = "currensee.toml";

/// Top-level configuration (currensee.toml)
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CurrenseeConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Theme selection and overrides
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Preference used when no preference file has a stored value
    #[serde(default)]
    pub preference: ThemePreference,
    /// Stand-in for the OS color-scheme signal
    #[serde(default)]
    pub system: Option<ColorScheme>,
    /// Where `toggle` persists the preference (relative to the config file)
    #[serde(default)]
    pub preference_file: Option<String>,
    /// Raw color overrides keyed by token name (`tint = "#5B4BC4"`)
    #[serde(default)]
    pub overrides: BTreeMap<String, String>,
}

/// Document language settings
#[derive(Debug, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// Locale candidates in priority order
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string()]
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            languages: default_languages(),
        }
    }
}

impl CurrenseeConfig {
    /// Load configuration from a file or a directory containing currensee.toml
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join(CONFIG_FILE)
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!(
                "No {} found at {}. Run `currensee init` to create one.",
                CONFIG_FILE,
                path.display()
            );
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Load `currensee.toml` from `dir` if present, otherwise use defaults
    pub fn load_or_default(dir: &Path) -> Result<Self> {
        if dir.join(CONFIG_FILE).exists() {
            Self::load(dir)
        } else {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Projector carrying the configured overrides
    pub fn projector(&self) -> Result<CssVariableProjector> {
        let mut projector = CssVariableProjector::new();
        for (key, raw) in &self.theme.overrides {
            let token = ColorToken::from_key(key)
                .with_context(|| format!("Unknown color token in [theme.overrides]: {key}"))?;
            projector.set_override(token, raw.clone());
        }
        Ok(projector)
    }

    /// Preference file path resolved against `base`
    pub fn preference_path(&self, base: &Path) -> Option<PathBuf> {
        self.theme
            .preference_file
            .as_ref()
            .map(|file| base.join(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config = CurrenseeConfig::parse("").unwrap();
        assert_eq!(config.theme.preference, ThemePreference::System);
        assert_eq!(config.theme.system, None);
        assert_eq!(config.document.languages, vec!["en".to_string()]);
    }

    #[test]
    fn parses_full_config() {
        let config = CurrenseeConfig::parse(
            r##"
[theme]
preference = "dark"
system = "light"
preference_file = ".currensee/theme.toml"

[theme.overrides]
tint = "#5B4BC4"

[document]
languages = ["ar-EG", "en"]
"##,
        )
        .unwrap();

        assert_eq!(config.theme.preference, ThemePreference::Dark);
        assert_eq!(config.theme.system, Some(ColorScheme::Light));
        assert_eq!(
            config.preference_path(Path::new("/site")),
            Some(PathBuf::from("/site/.currensee/theme.toml"))
        );

        let projector = config.projector().unwrap();
        assert_eq!(projector.override_for(ColorToken::Tint), Some("#5B4BC4"));
    }

    #[test]
    fn unknown_override_key_is_an_error() {
        let config = CurrenseeConfig::parse("[theme.overrides]\nbrand = \"#000000\"\n").unwrap();
        let err = config.projector().unwrap_err();
        assert!(err.to_string().contains("brand"));
    }

    #[test]
    fn missing_config_points_at_init() {
        let dir = tempfile::tempdir().unwrap();
        let err = CurrenseeConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("currensee init"));
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = CurrenseeConfig::default();
        config.theme.preference = ThemePreference::Light;
        let text = config.to_toml().unwrap();
        let parsed = CurrenseeConfig::parse(&text).unwrap();
        assert_eq!(parsed.theme.preference, ThemePreference::Light);
    }
}
