//! The fixed table from setting keys to style variables.
//!
//! Theme colors come in `light_*` / `dark_*` pairs that write the same
//! variable. Dimension, radius and shadow keys are global. The card color
//! fans out to two variables so cards and generic surfaces stay in step.
//!
//! Variables that are only ever derived (header transparency, hero overlay)
//! have no table entry; their names live here so the whole output surface is
//! declared in one place.

/// Style variable names written by the resolver.
pub mod var {
    pub const COLOR_PRIMARY: &str = "--color-primary";
    pub const COLOR_HEADING: &str = "--color-heading";
    pub const COLOR_TITLE: &str = "--color-title";
    pub const COLOR_ACCENT: &str = "--color-accent";
    pub const COLOR_BUTTON_BG: &str = "--color-button-bg";
    pub const COLOR_CARD_BG: &str = "--color-card-bg";
    pub const COLOR_SURFACE: &str = "--color-surface";
    pub const COLOR_HEADER_BG: &str = "--color-header-bg";
    pub const COLOR_BACKGROUND: &str = "--color-background";
    pub const COLOR_HERO_BG: &str = "--color-hero-bg";
    pub const COLOR_TEXT: &str = "--color-text";
    pub const HERO_HEIGHT: &str = "--hero-height";
    pub const HERO_MAX_HEIGHT: &str = "--hero-max-height";
    pub const HERO_ASPECT_RATIO: &str = "--hero-aspect-ratio";
    pub const RADIUS_CUSTOM: &str = "--radius-custom";
    pub const SHADOW_MAIN: &str = "--shadow-main";
    pub const HEADER_HEIGHT: &str = "--header-height";
    pub const CONTENT_TOP_OFFSET: &str = "--content-top-offset";
    pub const HEADER_BG: &str = "--header-bg";
    pub const HEADER_BLUR: &str = "--header-blur";
    pub const HEADER_BORDER: &str = "--header-border";
    pub const HERO_OVERLAY_START: &str = "--hero-overlay-start";
    pub const HERO_OVERLAY_END: &str = "--hero-overlay-end";
}

/// Setting keys with rules beyond a plain table lookup.
pub mod key {
    pub const THEME: &str = "theme";
    pub const GLOBAL_SHADOW: &str = "global_shadow";
    pub const HEADER_HEIGHT: &str = "header_height";
    pub const CONTENT_TOP_OFFSET: &str = "content_top_offset";
    pub const HEADER_TRANSPARENT: &str = "header_transparent";
    pub const HERO_OVERLAY_OPACITY: &str = "hero_overlay_opacity";
}

use var::*;

const CARD: &[&str] = &[COLOR_CARD_BG, COLOR_SURFACE];

/// `(setting key, variables)` in declaration order.
pub const MAPPINGS: &[(&str, &[&str])] = &[
    ("light_primary_color", &[COLOR_PRIMARY]),
    ("light_heading_color", &[COLOR_HEADING]),
    ("light_title_color", &[COLOR_TITLE]),
    ("light_accent_color", &[COLOR_ACCENT]),
    ("light_button_color", &[COLOR_BUTTON_BG]),
    ("light_card_color", CARD),
    ("light_header_color", &[COLOR_HEADER_BG]),
    ("light_bg_color", &[COLOR_BACKGROUND]),
    ("light_hero_bg_color", &[COLOR_HERO_BG]),
    ("light_text_color", &[COLOR_TEXT]),
    ("hero_height", &[HERO_HEIGHT]),
    ("hero_max_height", &[HERO_MAX_HEIGHT]),
    ("hero_aspect_ratio", &[HERO_ASPECT_RATIO]),
    ("dark_primary_color", &[COLOR_PRIMARY]),
    ("dark_heading_color", &[COLOR_HEADING]),
    ("dark_title_color", &[COLOR_TITLE]),
    ("dark_accent_color", &[COLOR_ACCENT]),
    ("dark_button_color", &[COLOR_BUTTON_BG]),
    ("dark_card_color", CARD),
    ("dark_header_color", &[COLOR_HEADER_BG]),
    ("dark_bg_color", &[COLOR_BACKGROUND]),
    ("dark_hero_bg_color", &[COLOR_HERO_BG]),
    ("dark_text_color", &[COLOR_TEXT]),
    ("global_radius", &[RADIUS_CUSTOM]),
    ("global_shadow", &[SHADOW_MAIN]),
    ("header_height", &[HEADER_HEIGHT]),
    ("content_top_offset", &[CONTENT_TOP_OFFSET]),
];

/// Variables mapped from a setting key, matched literally.
pub fn lookup(key: &str) -> Option<&'static [&'static str]> {
    MAPPINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, vars)| *vars)
}

/// Every variable name the resolver can write, table and derived alike.
pub fn all_variables() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MAPPINGS
        .iter()
        .flat_map(|(_, vars)| vars.iter().copied())
        .chain([
            HEADER_BG,
            HEADER_BLUR,
            HEADER_BORDER,
            HERO_OVERLAY_START,
            HERO_OVERLAY_END,
        ])
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_literal() {
        assert_eq!(lookup("light_primary_color"), Some(&[COLOR_PRIMARY][..]));
        assert_eq!(lookup("dark_primary_color"), Some(&[COLOR_PRIMARY][..]));
        assert_eq!(lookup("primary_color"), None);
        assert_eq!(lookup("LIGHT_PRIMARY_COLOR"), None);
    }

    #[test]
    fn card_color_fans_out() {
        assert_eq!(lookup("light_card_color"), Some(CARD));
        assert_eq!(lookup("dark_card_color"), Some(CARD));
    }

    #[test]
    fn derived_only_keys_are_not_in_table() {
        assert_eq!(lookup(key::THEME), None);
        assert_eq!(lookup(key::HEADER_TRANSPARENT), None);
        assert_eq!(lookup(key::HERO_OVERLAY_OPACITY), None);
    }

    #[test]
    fn light_and_dark_families_cover_the_same_variables() {
        for (k, vars) in MAPPINGS.iter().filter(|(k, _)| k.starts_with("light_")) {
            let dark = k.replacen("light_", "dark_", 1);
            assert_eq!(lookup(&dark), Some(*vars), "{dark} missing or different");
        }
    }

    #[test]
    fn output_surface_matches_published_names() {
        let expected = [
            "--color-primary",
            "--color-heading",
            "--color-title",
            "--color-accent",
            "--color-button-bg",
            "--color-card-bg",
            "--color-surface",
            "--color-header-bg",
            "--color-background",
            "--color-hero-bg",
            "--color-text",
            "--hero-height",
            "--hero-max-height",
            "--hero-aspect-ratio",
            "--radius-custom",
            "--shadow-main",
            "--header-height",
            "--content-top-offset",
            "--header-bg",
            "--header-blur",
            "--header-border",
            "--hero-overlay-start",
            "--hero-overlay-end",
        ];
        let mut expected = expected.to_vec();
        expected.sort_unstable();
        assert_eq!(all_variables(), expected);
    }
}
