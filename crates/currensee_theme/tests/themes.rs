use currensee_theme::{
    ColorScheme, ColorToken, CssVariableProjector, RadiusToken, RoleToken, StyleRoot,
    ThemeBundle, ThemePreference, ThemeStore, DARK_THEME, LIGHT_THEME,
};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn both_themes_define_every_color_token() {
    let light: Vec<ColorToken> = LIGHT_THEME.colors().iter().map(|(t, _)| t).collect();
    let dark: Vec<ColorToken> = DARK_THEME.colors().iter().map(|(t, _)| t).collect();

    assert_eq!(light, dark);
    assert_eq!(light.len(), ColorToken::ALL.len());
}

#[test]
fn roles_resolve_in_both_schemes() {
    let bundle = ThemeBundle::currensee();
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let theme = bundle.for_scheme(scheme);
        for role in RoleToken::ALL {
            let pair = theme.roles().get(role);
            assert!(ColorToken::ALL.contains(&pair.fg), "{scheme} {role:?}");
            assert!(ColorToken::ALL.contains(&pair.bg), "{scheme} {role:?}");

            let (fg, bg) = theme.role_colors(role);
            assert_eq!(fg, theme.color(pair.fg));
            assert_eq!(bg, theme.color(pair.bg));
        }
    }
}

#[test]
fn palettes_are_tuned_per_scheme() {
    assert_eq!(LIGHT_THEME.color(ColorToken::Danger).to_css(), "#EF4444");
    assert_eq!(DARK_THEME.color(ColorToken::Danger).to_css(), "#F87171");
    assert_ne!(
        LIGHT_THEME.color(ColorToken::Tint),
        DARK_THEME.color(ColorToken::Tint)
    );
    assert_eq!(LIGHT_THEME.color_scheme(), ColorScheme::Light);
    assert_eq!(DARK_THEME.color_scheme(), ColorScheme::Dark);
}

#[test]
fn shared_scales_match_across_schemes() {
    for theme in [&LIGHT_THEME, &DARK_THEME] {
        assert_eq!(theme.radius().get(RadiusToken::Pill), 999.0);
        assert_eq!(theme.radius().get(RadiusToken::Sheet), 28.0);
        assert_eq!(theme.spacing().xl_6, 64.0);
        assert_eq!(theme.typography().body.line_height, 22.5);
    }
    assert_eq!(LIGHT_THEME.shadow().android_elevation, 3);
    assert_eq!(DARK_THEME.shadow().android_elevation, 0);
}

#[test]
fn projection_is_idempotent() {
    let projector = CssVariableProjector::new();
    let mut once = StyleRoot::new();
    projector.project(&LIGHT_THEME, &mut once);

    let mut twice = once.clone();
    projector.project(&LIGHT_THEME, &mut twice);

    assert_eq!(once, twice);
}

#[test]
fn light_dark_light_restores_every_property() {
    let store = ThemeStore::in_memory(ThemePreference::Light);
    let root = Arc::new(Mutex::new(StyleRoot::new()));
    let _projection = CssVariableProjector::new().attach(&store, root.clone());

    let original = root.lock().unwrap().clone();
    assert_eq!(original.property("--theme-tint"), Some("#483AA0"));

    store.toggle().unwrap();
    {
        let dark = root.lock().unwrap();
        assert_eq!(dark.property("--theme-tint"), Some("#7965C1"));
        assert_eq!(dark.property("--background"), Some("240 9% 6%"));
    }

    store.toggle().unwrap();
    assert_eq!(*root.lock().unwrap(), original);
}

#[test]
fn dropping_the_projection_stops_updates() {
    let store = ThemeStore::in_memory(ThemePreference::Light);
    let root = Arc::new(Mutex::new(StyleRoot::new()));
    let projection = CssVariableProjector::new().attach(&store, root.clone());
    drop(projection);

    store.set_preference(ThemePreference::Dark).unwrap();
    assert_eq!(
        root.lock().unwrap().property("--theme-bg"),
        Some("#F3F4F6")
    );
}

#[test]
fn style_root_serializes_properties() {
    let mut root = StyleRoot::new();
    CssVariableProjector::new().project(&DARK_THEME, &mut root);

    let json = serde_json::to_value(&root).unwrap();
    let props = json["properties"].as_object().unwrap();
    assert_eq!(props.len(), 50);
    assert_eq!(props["--theme-highlight-border"], "rgba(121,101,193,0.65)");
}
