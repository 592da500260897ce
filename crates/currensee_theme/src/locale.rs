//! Document language attributes
//!
//! The site ships twelve locale bundles. This module picks one from the
//! detection candidates (stored choice, then navigator languages, then the
//! html tag) and projects `lang`/`dir` onto the document root.

use crate::projector::DocumentRoot;
use std::fmt;

/// Locales with a bundled translation, in menu order
pub const SUPPORTED_LOCALES: [&str; 12] = [
    "en", "es", "fr", "de", "it", "ja", "zh-CN", "pt", "ru", "ar", "ko", "ro",
];

/// Used when no candidate matches
pub const FALLBACK_LOCALE: &str = "en";

/// Primary subtags written right-to-left
const RTL_LANGUAGES: [&str; 4] = ["ar", "he", "fa", "ur"];

/// Normalize locale identifiers for lookup.
///
/// - Converts `_` to `-` (some platforms report `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

fn primary_subtag(locale: &str) -> &str {
    locale.split('-').next().unwrap_or(locale)
}

/// Pick the bundled locale for a list of candidates, in priority order.
///
/// A candidate first matches a bundle exactly (ignoring case), then a
/// bundle named by its bare language subtag (`ar-EG` -> `ar`). Regional
/// bundles only match exactly, so `zh-TW` does not pick `zh-CN`. Falls
/// back to [`FALLBACK_LOCALE`].
pub fn resolve_locale<S: AsRef<str>>(candidates: &[S]) -> &'static str {
    for candidate in candidates {
        let wanted = normalize_locale(candidate.as_ref());
        if wanted.is_empty() {
            continue;
        }

        if let Some(exact) = SUPPORTED_LOCALES
            .iter()
            .find(|supported| supported.eq_ignore_ascii_case(&wanted))
        {
            return *exact;
        }

        let lang = primary_subtag(&wanted);
        if let Some(by_lang) = SUPPORTED_LOCALES
            .iter()
            .find(|supported| supported.eq_ignore_ascii_case(lang))
        {
            return *by_lang;
        }

        tracing::trace!("no bundle for locale candidate {:?}", wanted);
    }

    FALLBACK_LOCALE
}

/// Text direction for the document root
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn for_locale(locale: &str) -> Self {
        let normalized = normalize_locale(locale);
        let lang = primary_subtag(&normalized);
        if RTL_LANGUAGES
            .iter()
            .any(|rtl| rtl.eq_ignore_ascii_case(lang))
        {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }
}

impl fmt::Display for TextDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write `lang` and `dir` for `locale` onto the root element
pub fn apply_document_language<R: DocumentRoot + ?Sized>(root: &mut R, locale: &str) {
    let dir = TextDirection::for_locale(locale);
    tracing::debug!("document language {} ({})", locale, dir);
    root.set_attribute("lang", locale);
    root.set_attribute("dir", dir.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::StyleRoot;

    #[test]
    fn exact_match_wins_case_insensitively() {
        assert_eq!(resolve_locale(&["zh-cn"]), "zh-CN");
        assert_eq!(resolve_locale(&["ko"]), "ko");
    }

    #[test]
    fn region_falls_back_to_language() {
        assert_eq!(resolve_locale(&["ar-EG"]), "ar");
        assert_eq!(resolve_locale(&["pt_BR"]), "pt");
    }

    #[test]
    fn regional_bundle_needs_exact_match() {
        assert_eq!(resolve_locale(&["zh-TW"]), "en");
        assert_eq!(resolve_locale(&["zh"]), "en");
        assert_eq!(resolve_locale(&["zh-TW", "ja"]), "ja");
        assert_eq!(resolve_locale(&["zh_cn"]), "zh-CN");
    }

    #[test]
    fn earlier_candidates_take_priority() {
        assert_eq!(resolve_locale(&["", "xx", "de-AT", "fr"]), "de");
    }

    #[test]
    fn unknown_locales_fall_back_to_english() {
        assert_eq!(resolve_locale(&["xx"]), "en");
        assert_eq!(resolve_locale::<&str>(&[]), "en");
    }

    #[test]
    fn rtl_detection() {
        assert_eq!(TextDirection::for_locale("ar"), TextDirection::Rtl);
        assert_eq!(TextDirection::for_locale("fa-IR"), TextDirection::Rtl);
        assert_eq!(TextDirection::for_locale("en"), TextDirection::Ltr);
    }

    #[test]
    fn applies_lang_and_dir() {
        let mut root = StyleRoot::new();
        apply_document_language(&mut root, "ar");
        assert_eq!(root.attribute("lang"), Some("ar"));
        assert_eq!(root.attribute("dir"), Some("rtl"));

        apply_document_language(&mut root, "ro");
        assert_eq!(root.attribute("dir"), Some("ltr"));
        assert!(root.is_empty());
    }
}
