//! Theme integrity checks for the `check` command

use currensee_theme::{
    ColorScheme, ColorToken, CssVariableProjector, RoleToken, StyleRoot, ThemeBundle,
    COMPAT_SLOTS,
};

/// A problem found while checking the theme bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub scheme: ColorScheme,
    pub message: String,
}

/// Check the bundle as projected with `projector`.
///
/// Verifies that both schemes project every property and that every
/// compatibility slot holds a well-formed `H S% L%` triplet. Slots that fell
/// back to neutral gray because of an override are reported.
pub fn check_bundle(bundle: &ThemeBundle, projector: &CssVariableProjector) -> Vec<Finding> {
    let mut findings = Vec::new();

    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let theme = bundle.for_scheme(scheme);
        if theme.color_scheme() != scheme {
            findings.push(Finding {
                scheme,
                message: format!("theme reports scheme {}", theme.color_scheme()),
            });
        }

        for role in RoleToken::ALL {
            let pair = theme.roles().get(role);
            if pair.fg == pair.bg {
                findings.push(Finding {
                    scheme,
                    message: format!("role {} uses {} for both fg and bg", role.key(), pair.fg.key()),
                });
            }
        }

        let mut root = StyleRoot::new();
        projector.project(theme, &mut root);

        let expected = ColorToken::ALL.len() + COMPAT_SLOTS.len();
        if root.len() != expected {
            findings.push(Finding {
                scheme,
                message: format!("projected {} properties, expected {}", root.len(), expected),
            });
        }

        for (name, token) in COMPAT_SLOTS {
            let value = root.property(name).unwrap_or_default();
            if !is_hsl_triplet(value) {
                findings.push(Finding {
                    scheme,
                    message: format!("{name} is not an HSL triplet: {value:?}"),
                });
            } else if projector.override_for(token).is_some()
                && value == currensee_theme::Hsl::FALLBACK.to_string()
            {
                findings.push(Finding {
                    scheme,
                    message: format!(
                        "{name} fell back to neutral gray; override for {} does not parse",
                        token.key()
                    ),
                });
            }
        }
    }

    findings
}

/// `H S% L%` with H in 0..360 and S, L in 0..=100
fn is_hsl_triplet(value: &str) -> bool {
    let mut parts = value.split(' ');
    let (Some(h), Some(s), Some(l), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    let percent = |p: &str| {
        p.strip_suffix('%')
            .and_then(|n| n.parse::<u16>().ok())
            .is_some_and(|n| n <= 100)
    };

    h.parse::<u16>().is_ok_and(|h| h < 360) && percent(s) && percent(l)
}
