//! CSS custom property projection
//!
//! On every active-theme change the projector writes two families of
//! custom properties onto the document root:
//!
//! - `--theme-<token>`: the raw color value, one per [`ColorToken`]
//! - compatibility slots (`--background`, `--primary`, ...): bare
//!   `H S% L%` triplets for the utility-class layer
//!
//! The root is process-wide, so anything styled against it sees the same
//! values. Re-projecting the same theme rewrites the same values.

use crate::hsl::to_hsl;
use crate::state::{Subscription, ThemeStore};
use crate::theme::Theme;
use crate::tokens::ColorToken;
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};

/// Prefix of the per-token raw properties
pub const THEME_PREFIX: &str = "--theme-";

/// Compatibility slots and the token each one is derived from
pub const COMPAT_SLOTS: [(&str, ColorToken); 14] = [
    ("--background", ColorToken::Bg),
    ("--foreground", ColorToken::Text),
    ("--card", ColorToken::Card),
    ("--card-foreground", ColorToken::Text),
    ("--primary", ColorToken::Tint),
    ("--primary-foreground", ColorToken::OnTint),
    ("--secondary", ColorToken::Surface),
    ("--secondary-foreground", ColorToken::Text),
    ("--muted", ColorToken::Surface),
    ("--muted-foreground", ColorToken::Subtext),
    ("--accent", ColorToken::Surface),
    ("--accent-foreground", ColorToken::Text),
    ("--border", ColorToken::Border),
    ("--destructive", ColorToken::Danger),
];

/// Property name for a token, e.g. `--theme-on-tint`
pub fn theme_property_name(token: ColorToken) -> String {
    format!("{}{}", THEME_PREFIX, token.css_name())
}

/// Write target for projected styles (the document root element)
pub trait DocumentRoot {
    /// Set a custom property on the root style
    fn set_property(&mut self, name: &str, value: &str);

    /// Set an attribute on the root element (`lang`, `dir`, ...)
    fn set_attribute(&mut self, name: &str, value: &str);
}

/// In-memory document root that preserves write order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
    attributes: IndexMap<String, String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render the properties as a `:root` rule
    pub fn to_css(&self) -> String {
        self.to_css_block(":root")
    }

    /// Render the properties as a rule for `selector`
    pub fn to_css_block(&self, selector: &str) -> String {
        let mut out = String::with_capacity(64 + self.properties.len() * 40);
        let _ = writeln!(out, "{} {{", selector);
        for (name, value) in &self.properties {
            let _ = writeln!(out, "  {}: {};", name, value);
        }
        out.push_str("}\n");
        out
    }
}

impl DocumentRoot for StyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }
}

/// Projects a [`Theme`] onto a [`DocumentRoot`]
#[derive(Clone, Debug, Default)]
pub struct CssVariableProjector {
    /// Raw CSS strings that replace a token's palette value
    overrides: FxHashMap<ColorToken, String>,
}

impl CssVariableProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (ColorToken, S)>,
        S: Into<String>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(token, raw)| (token, raw.into()))
                .collect(),
        }
    }

    /// Replace a token's value with a raw CSS string.
    ///
    /// The string is written verbatim to `--theme-*`; if it does not parse,
    /// the compatibility slots derived from it fall back to neutral gray.
    pub fn set_override(&mut self, token: ColorToken, raw: impl Into<String>) {
        self.overrides.insert(token, raw.into());
    }

    pub fn remove_override(&mut self, token: ColorToken) {
        self.overrides.remove(&token);
    }

    pub fn override_for(&self, token: ColorToken) -> Option<&str> {
        self.overrides.get(&token).map(String::as_str)
    }

    fn raw_value(&self, theme: &Theme, token: ColorToken) -> String {
        match self.overrides.get(&token) {
            Some(raw) => raw.clone(),
            None => theme.color(token).to_css(),
        }
    }

    fn hsl_value(&self, theme: &Theme, token: ColorToken) -> String {
        match self.overrides.get(&token) {
            Some(raw) => to_hsl(raw),
            None => theme.color(token).to_hsl().to_string(),
        }
    }

    /// Every `(property, value)` pair for `theme`, in write order
    pub fn variables(&self, theme: &Theme) -> Vec<(String, String)> {
        let mut vars = Vec::with_capacity(ColorToken::ALL.len() + COMPAT_SLOTS.len());

        for token in ColorToken::ALL {
            vars.push((theme_property_name(token), self.raw_value(theme, token)));
        }

        for (name, token) in COMPAT_SLOTS {
            vars.push((name.to_string(), self.hsl_value(theme, token)));
        }

        vars
    }

    /// Write all properties for `theme` onto `root`
    pub fn project<R: DocumentRoot + ?Sized>(&self, theme: &Theme, root: &mut R) {
        let vars = self.variables(theme);
        tracing::debug!(
            "projecting {} theme: {} properties",
            theme.color_scheme(),
            vars.len()
        );
        for (name, value) in &vars {
            root.set_property(name, value);
        }
    }

    /// Project the store's current theme now and after every change.
    ///
    /// The returned guard keeps the projection live; drop it to stop.
    pub fn attach<R>(self, store: &ThemeStore, root: Arc<Mutex<R>>) -> Subscription
    where
        R: DocumentRoot + Send + 'static,
    {
        let projector = Arc::new(self);

        // Subscribed before the first projection, which reads the snapshot
        // under the root lock, so the last write is always the active theme
        let subscription = {
            let projector = projector.clone();
            let root = root.clone();
            store.subscribe(move |theme| {
                let mut guard = root.lock().unwrap();
                projector.project(theme, &mut *guard);
            })
        };

        let mut guard = root.lock().unwrap();
        projector.project(store.get_snapshot(), &mut *guard);
        drop(guard);

        subscription
    }
}
