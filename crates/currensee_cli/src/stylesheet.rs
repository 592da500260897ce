//! Stylesheet rendering for the `css` command

use anyhow::Result;
use clap::ValueEnum;
use currensee_theme::{
    apply_document_language, resolve_locale, ColorScheme, CssVariableProjector, FilePreferences,
    MemoryPreferences, StyleRoot, ThemeBundle, ThemeStore,
};
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::config::CurrenseeConfig;

/// Which scheme(s) the stylesheet covers
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemeSelection {
    Light,
    Dark,
    /// Light on `:root`, dark on `.dark` (class-based switching)
    Both,
    /// Whatever the configured preference resolves to
    Active,
}

/// Build the store the config describes
pub fn open_store(config: &CurrenseeConfig, base: &Path) -> Result<ThemeStore> {
    let bundle = ThemeBundle::currensee();
    let store = match config.preference_path(base) {
        Some(path) => ThemeStore::with_fallback(
            bundle,
            FilePreferences::new(path),
            config.theme.preference,
        )?,
        None => ThemeStore::new(
            bundle,
            MemoryPreferences::with_value(config.theme.preference),
        )?,
    };
    store.set_system_scheme(config.theme.system);
    Ok(store)
}

fn render_scheme(projector: &CssVariableProjector, scheme: ColorScheme, selector: &str) -> String {
    let mut root = StyleRoot::new();
    projector.project(ThemeBundle::currensee().for_scheme(scheme), &mut root);
    root.to_css_block(selector)
}

/// Render the stylesheet for `selection`
pub fn render(config: &CurrenseeConfig, base: &Path, selection: SchemeSelection) -> Result<String> {
    let projector = config.projector()?;

    let css = match selection {
        SchemeSelection::Light => render_scheme(&projector, ColorScheme::Light, ":root"),
        SchemeSelection::Dark => render_scheme(&projector, ColorScheme::Dark, ":root"),
        SchemeSelection::Both => format!(
            "{}\n{}",
            render_scheme(&projector, ColorScheme::Light, ":root"),
            render_scheme(&projector, ColorScheme::Dark, ".dark"),
        ),
        SchemeSelection::Active => {
            let store = open_store(config, base)?;
            let root = Arc::new(Mutex::new(StyleRoot::new()));
            let _projection = projector.attach(&store, root.clone());

            let locale = resolve_locale(config.document.languages.as_slice());
            let mut document = root.lock().unwrap();
            apply_document_language(&mut *document, locale);

            tracing::info!(
                "active scheme: {} (preference {})",
                store.get_snapshot().color_scheme(),
                store.preference()
            );

            format!(
                "/* html lang=\"{}\" dir=\"{}\" */\n{}",
                document.attribute("lang").unwrap_or_default(),
                document.attribute("dir").unwrap_or_default(),
                document.to_css()
            )
        }
    };

    Ok(css)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_renders_root_and_dark_blocks() {
        let config = CurrenseeConfig::default();
        let css = render(&config, Path::new("."), SchemeSelection::Both).unwrap();

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --theme-bg: #F3F4F6;\n"));
        assert!(css.contains(".dark {\n"));
        assert!(css.contains("  --theme-bg: #0F0F12;\n"));
    }

    #[test]
    fn active_follows_system_signal_and_locale() {
        let config = CurrenseeConfig::parse(
            "[theme]\nsystem = \"dark\"\n[document]\nlanguages = [\"ar-EG\"]\n",
        )
        .unwrap();
        let css = render(&config, Path::new("."), SchemeSelection::Active).unwrap();

        assert!(css.starts_with("/* html lang=\"ar\" dir=\"rtl\" */\n"));
        assert!(css.contains("  --theme-tint: #7965C1;\n"));
    }

    #[test]
    fn overrides_reach_the_stylesheet() {
        let config =
            CurrenseeConfig::parse("[theme.overrides]\ndanger = \"oops\"\n").unwrap();
        let css = render(&config, Path::new("."), SchemeSelection::Light).unwrap();

        assert!(css.contains("  --theme-danger: oops;\n"));
        assert!(css.contains("  --destructive: 0 0% 50%;\n"));
    }
}
