//! # Theme tokens
//!
//! The colour palette of the landing page and the gradient CSS variables that
//! switch with the theme.
//!
//! | Family | Shades |
//! |--------|--------|
//! | [`AMBIENT`] | light, base, dark, deeper (page backgrounds and text) |
//! | [`CORAL`], [`OCEAN`] | primary accents, used by the brand gradient |
//! | [`WARM`], [`COOL`] | secondary blob colours |
//! | [`SUNRISE`], [`TWILIGHT`] | accent gradient and blob colours |
//! | [`SURFACE`], [`GRAIN`] | translucent overlays |
//!
//! [`stylesheet`] renders everything as custom properties: palette colours
//! and light gradients under `:root`, dark gradient overrides under `.dark`.
//! The stylesheet asset only ever refers to `var(--...)`, so the hex values
//! live here and nowhere else.

use std::fmt::Write;

use crate::theme::Theme;

/// Three-step colour ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shade {
    pub light: &'static str,
    pub base: &'static str,
    pub dark: &'static str,
}

/// Ambient ramp has an extra, deeper step used for dark backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmbientShade {
    pub light: &'static str,
    pub base: &'static str,
    pub dark: &'static str,
    pub deeper: &'static str,
}

/// Light/dark pair of translucent overlay colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlay {
    pub light: &'static str,
    pub dark: &'static str,
}

pub const AMBIENT: AmbientShade = AmbientShade {
    light: "#F2F6FA",
    base: "#D9E3EE",
    dark: "#48608B",
    deeper: "#2B4472",
};

pub const CORAL: Shade = Shade {
    light: "#FFE4E2",
    base: "#FF7066",
    dark: "#FF2A1D",
};

pub const OCEAN: Shade = Shade {
    light: "#D5F6FA",
    base: "#36C2E6",
    dark: "#14748F",
};

pub const WARM: Shade = Shade {
    light: "#FFE6D1",
    base: "#FF9E56",
    dark: "#FF7A18",
};

pub const COOL: Shade = Shade {
    light: "#E1F0FF",
    base: "#56ADFF",
    dark: "#0070F3",
};

pub const SUNRISE: Shade = Shade {
    light: "#FFE9DB",
    base: "#FF914B",
    dark: "#FF6503",
};

pub const TWILIGHT: Shade = Shade {
    light: "#E8E0FF",
    base: "#8C66FF",
    dark: "#5E29FF",
};

pub const SURFACE: Overlay = Overlay {
    light: "rgba(255, 255, 255, 0.08)",
    dark: "rgba(0, 0, 0, 0.04)",
};

pub const GRAIN: Overlay = Overlay {
    light: "rgba(255, 255, 255, 0.05)",
    dark: "rgba(0, 0, 0, 0.05)",
};

/// Every palette colour as `(variable, value)`, in declaration order.
pub fn palette_variables() -> Vec<(String, &'static str)> {
    let mut vars = vec![
        ("--color-ambient-light".to_string(), AMBIENT.light),
        ("--color-ambient-base".to_string(), AMBIENT.base),
        ("--color-ambient-dark".to_string(), AMBIENT.dark),
        ("--color-ambient-deeper".to_string(), AMBIENT.deeper),
    ];
    for (family, shade) in [
        ("coral", CORAL),
        ("ocean", OCEAN),
        ("warm", WARM),
        ("cool", COOL),
        ("sunrise", SUNRISE),
        ("twilight", TWILIGHT),
    ] {
        vars.push((format!("--color-{family}-light"), shade.light));
        vars.push((format!("--color-{family}-base"), shade.base));
        vars.push((format!("--color-{family}-dark"), shade.dark));
    }
    for (family, overlay) in [("surface", SURFACE), ("grain", GRAIN)] {
        vars.push((format!("--color-{family}-light"), overlay.light));
        vars.push((format!("--color-{family}-dark"), overlay.dark));
    }
    vars
}

/// Gradient stops substituted for the given theme.
pub fn gradient_variables(theme: Theme) -> [(&'static str, &'static str); 10] {
    match theme {
        Theme::Light => [
            ("--gradient-ambient-start", AMBIENT.light),
            ("--gradient-ambient-end", AMBIENT.base),
            ("--gradient-primary-start", CORAL.base),
            ("--gradient-primary-end", OCEAN.base),
            ("--gradient-accent-start", SUNRISE.base),
            ("--gradient-accent-end", TWILIGHT.base),
            ("--gradient-mesh-center", CORAL.light),
            ("--gradient-mesh-mid", OCEAN.base),
            ("--gradient-mesh-edge", TWILIGHT.base),
            ("--gradient-glow-center", CORAL.base),
        ],
        Theme::Dark => [
            ("--gradient-ambient-start", AMBIENT.dark),
            ("--gradient-ambient-end", AMBIENT.deeper),
            ("--gradient-primary-start", CORAL.dark),
            ("--gradient-primary-end", OCEAN.dark),
            ("--gradient-accent-start", SUNRISE.dark),
            ("--gradient-accent-end", TWILIGHT.dark),
            ("--gradient-mesh-center", CORAL.base),
            ("--gradient-mesh-mid", OCEAN.dark),
            ("--gradient-mesh-edge", TWILIGHT.dark),
            ("--gradient-glow-center", CORAL.dark),
        ],
    }
}

/// Render the token stylesheet injected at the top of the app.
pub fn stylesheet() -> String {
    let mut css = String::from(":root {\n");
    for (name, value) in palette_variables() {
        let _ = writeln!(css, "  {name}: {value};");
    }
    for (name, value) in gradient_variables(Theme::Light) {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n.dark {\n");
    for (name, value) in gradient_variables(Theme::Dark) {
        let _ = writeln!(css, "  {name}: {value};");
    }
    css.push_str("}\n");
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block<'a>(css: &'a str, selector: &str) -> &'a str {
        let start = css.find(&format!("{selector} {{")).unwrap();
        let end = start + css[start..].find('}').unwrap();
        &css[start..end]
    }

    #[test]
    fn test_stylesheet_light_values_under_root() {
        let css = stylesheet();
        let root = block(&css, ":root");
        assert!(root.contains("--gradient-primary-start: #FF7066;"));
        assert!(root.contains("--gradient-primary-end: #36C2E6;"));
        assert!(root.contains("--gradient-mesh-center: #FFE4E2;"));
        assert!(root.contains("--color-ambient-deeper: #2B4472;"));
        assert!(root.contains("--color-surface-light: rgba(255, 255, 255, 0.08);"));
    }

    #[test]
    fn test_stylesheet_dark_overrides() {
        let css = stylesheet();
        let dark = block(&css, ".dark");
        assert!(dark.contains("--gradient-ambient-start: #48608B;"));
        assert!(dark.contains("--gradient-primary-start: #FF2A1D;"));
        assert!(dark.contains("--gradient-glow-center: #FF2A1D;"));
        // Palette colours are theme independent and only declared once.
        assert!(!dark.contains("--color-"));
    }

    #[test]
    fn test_both_themes_define_same_variables() {
        let light: Vec<_> = gradient_variables(Theme::Light).iter().map(|(n, _)| *n).collect();
        let dark: Vec<_> = gradient_variables(Theme::Dark).iter().map(|(n, _)| *n).collect();
        assert_eq!(light, dark);
    }

    #[test]
    fn test_palette_size() {
        // 4 ambient + 6 ramps * 3 + 2 overlays * 2
        assert_eq!(palette_variables().len(), 26);
    }
}
