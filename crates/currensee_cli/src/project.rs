//! Project scaffolding for `currensee init`

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::{CurrenseeConfig, CONFIG_FILE};

/// Default location of the persisted preference, relative to the config
pub const DEFAULT_PREFERENCE_FILE: &str = ".currensee/theme.toml";

/// Write a starter `currensee.toml` into `path`.
///
/// Refuses to overwrite an existing config unless `force` is set.
pub fn init_project(path: &Path, force: bool) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);
    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Pass --force to overwrite it.",
            config_path.display()
        );
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    let mut config = CurrenseeConfig::default();
    config.theme.preference_file = Some(DEFAULT_PREFERENCE_FILE.to_string());

    let content = format!(
        r##"# CurrenSee theme configuration
#
# preference: "light", "dark" or "system"
# system: stand-in for the OS color scheme ("light" or "dark")
# [theme.overrides]: raw color values keyed by token, e.g. tint = "#5B4BC4"

{}"##,
        config.to_toml()?
    );
    fs::write(&config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    // Keep the persisted preference out of version control
    let gitignore = path.join(".gitignore");
    if !gitignore.exists() {
        fs::write(&gitignore, "/.currensee/\n")?;
    }

    tracing::info!("Created {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use currensee_theme::ThemePreference;
    use pretty_assertions::assert_eq;

    #[test]
    fn init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), false).unwrap();

        let config = CurrenseeConfig::load(dir.path()).unwrap();
        assert_eq!(config.theme.preference, ThemePreference::System);
        assert_eq!(
            config.theme.preference_file.as_deref(),
            Some(DEFAULT_PREFERENCE_FILE)
        );
        assert!(dir.path().join(".gitignore").exists());
    }

    #[test]
    fn starter_config_documents_overrides() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), false).unwrap();

        let content = fs::read_to_string(dir.path().join(CONFIG_FILE)).unwrap();
        assert!(content.starts_with("# CurrenSee theme configuration\n"));
        assert!(content.contains("# [theme.overrides]: raw color values keyed by token, e.g. tint = \"#5B4BC4\"\n"));
        assert!(content.contains("preference_file = \".currensee/theme.toml\""));
    }

    #[test]
    fn init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        init_project(dir.path(), false).unwrap();

        let err = init_project(dir.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        init_project(dir.path(), true).unwrap();
    }
}
