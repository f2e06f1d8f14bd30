//! Data document loading and settings overrides.
//!
//! The resolver consumes a settings record; this module finds it. The record
//! lives under `site_settings` in a data document that also carries the
//! site's content tables:
//!
//! ```json
//! {
//!   "products": [ ... ],
//!   "site_settings": [{ "theme": "dark", "dark_primary_color": "#818cf8" }]
//! }
//! ```
//!
//! The same document can be written in TOML, which reads better for a
//! hand-maintained settings file:
//!
//! ```toml
//! [site_settings]
//! theme = "dark"
//! dark_primary_color = "#818cf8"
//! header_transparent = true
//! ```
//!
//! ## Layering
//!
//! ```text
//! data document (site.json / site.toml)   ← base
//! --set key=value (repeatable)            ← overrides, last wins
//! ```
//!
//! Overrides keep the position of a key already in the record and append new
//! keys, so key order (which decides ties between `light_*` and `dark_*`
//! writes) stays that of the document.
//!
//! Settings are not validated: unknown keys and odd values are the
//! resolver's business, and it tolerates them.

use crate::settings::SettingsRecord;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported data format: {} (expected .json or .toml)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid override '{0}': expected key=value")]
    Override(String),
}

/// Key of the settings record inside the data document.
pub const SETTINGS_KEY: &str = "site_settings";

/// A data document with its settings record extracted.
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub record: SettingsRecord,
    /// First table of the document, handed to the header.
    pub primary_table: Option<String>,
}

/// Read a JSON or TOML data document, choosing the parser by extension.
pub fn load_document(path: &Path) -> Result<Value, SettingsError> {
    let format = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content = fs::read_to_string(path)?;
    let document: Value = match format.as_deref() {
        Some("json") => serde_json::from_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
    };
    debug!(path = %path.display(), "loaded data document");
    Ok(document)
}

/// The normalized settings record of a data document.
pub fn site_settings(document: &Value) -> SettingsRecord {
    SettingsRecord::from_input(document.get(SETTINGS_KEY))
}

/// Name of the first key of the document.
pub fn primary_table(document: &Value) -> Option<&str> {
    document
        .as_object()
        .and_then(|map| map.keys().next())
        .map(String::as_str)
}

/// Parse a `key=value` override.
///
/// `true`, `false` and `null` become their JSON values; everything else,
/// numbers included, stays a string.
pub fn parse_override(spec: &str) -> Result<(String, Value), SettingsError> {
    let (key, value) = spec
        .split_once('=')
        .ok_or_else(|| SettingsError::Override(spec.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SettingsError::Override(spec.to_string()));
    }
    let value = match value {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "null" => Value::Null,
        other => Value::String(other.to_string()),
    };
    Ok((key.to_string(), value))
}

/// Layer `key=value` overrides on top of a record.
pub fn apply_overrides(
    mut record: SettingsRecord,
    overrides: &[String],
) -> Result<SettingsRecord, SettingsError> {
    for spec in overrides {
        let (key, value) = parse_override(spec)?;
        debug!(key = %key, "settings override");
        record.insert(key, value);
    }
    Ok(record)
}

/// Load a data document, extract its settings and apply overrides.
pub fn load_settings(path: &Path, overrides: &[String]) -> Result<LoadedSettings, SettingsError> {
    let document = load_document(path)?;
    let record = apply_overrides(site_settings(&document), overrides)?;
    Ok(LoadedSettings {
        primary_table: primary_table(&document).map(str::to_string),
        record,
    })
}

/// Returns a fully-commented sample settings document covering every key.
///
/// Used by the `gen-settings` CLI command.
pub fn stock_settings_toml() -> &'static str {
    r##"# Site Style Settings
# ===================
# Every key is optional. Keys the shell does not know are ignored.
# Colors, sizes and shadows are CSS values and are used as written unless
# noted otherwise.

[site_settings]
# "dark" switches the shell into dark mode; anything else means light.
theme = "light"

# ---------------------------------------------------------------------------
# Light mode colors
# ---------------------------------------------------------------------------
light_primary_color = "#2563eb"
light_heading_color = "#0f172a"
light_title_color = "#0f172a"
light_accent_color = "#f59e0b"
light_button_color = "#2563eb"
light_card_color = "#ffffff"     # Cards and other surfaces
light_header_color = "#ffffff"
light_bg_color = "#f8fafc"
light_hero_bg_color = "#e2e8f0"
light_text_color = "#334155"

# ---------------------------------------------------------------------------
# Dark mode colors
# ---------------------------------------------------------------------------
# Both families are applied in the order they appear, so when light and dark
# keys are both present the later one wins. Keep only the family you use, or
# list the active one last.
# dark_primary_color = "#818cf8"
# dark_heading_color = "#f8fafc"
# dark_title_color = "#f8fafc"
# dark_accent_color = "#fbbf24"
# dark_button_color = "#6366f1"
# dark_card_color = "#1e293b"
# dark_header_color = "#0f172a"
# dark_bg_color = "#020617"
# dark_hero_bg_color = "#0f172a"
# dark_text_color = "#cbd5e1"

# ---------------------------------------------------------------------------
# Shape
# ---------------------------------------------------------------------------
global_radius = "12px"
# "soft", "strong", "none", or any box-shadow value.
global_shadow = "soft"

# ---------------------------------------------------------------------------
# Header
# ---------------------------------------------------------------------------
# Unitless values get "px"; values ending in px, rem or vh are kept.
header_height = 80
content_top_offset = 80
# true drops the header background, blur and border.
header_transparent = false

# ---------------------------------------------------------------------------
# Hero
# ---------------------------------------------------------------------------
hero_height = "70vh"
hero_max_height = "900px"
hero_aspect_ratio = "16 / 9"
# Darkness of the gradient laid over the hero image (0 to 1, default 0.8).
hero_overlay_opacity = 0.8
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping;
    use serde_json::json;
    use tempfile::TempDir;

    // =========================================================================
    // load_document tests
    // =========================================================================

    #[test]
    fn load_json_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        fs::write(&path, r#"{"pages": [], "site_settings": [{"theme": "dark"}]}"#).unwrap();

        let document = load_document(&path).unwrap();
        assert_eq!(site_settings(&document).get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn load_toml_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[site_settings]
theme = "dark"
header_transparent = true
header_height = 80
"#,
        )
        .unwrap();

        let record = site_settings(&load_document(&path).unwrap());
        assert_eq!(record.get("theme"), Some(&json!("dark")));
        assert_eq!(record.get("header_transparent"), Some(&json!(true)));
        assert_eq!(record.get("header_height"), Some(&json!(80)));
    }

    #[test]
    fn load_toml_array_of_tables() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[[site_settings]]
theme = "dark"
"#,
        )
        .unwrap();

        let record = site_settings(&load_document(&path).unwrap());
        assert_eq!(record.get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn toml_keeps_document_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(
            &path,
            r##"
[site_settings]
dark_primary_color = "#111"
light_primary_color = "#222"
"##,
        )
        .unwrap();

        let record = site_settings(&load_document(&path).unwrap());
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["dark_primary_color", "light_primary_color"]);
    }

    #[test]
    fn unknown_extension_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.yaml");
        fs::write(&path, "theme: dark").unwrap();
        assert!(matches!(
            load_document(&path),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_document(&path), Err(SettingsError::Json(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_document(&path), Err(SettingsError::Toml(_))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = load_document(&tmp.path().join("absent.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    // =========================================================================
    // Document accessors
    // =========================================================================

    #[test]
    fn missing_settings_is_empty_record() {
        let document = json!({"products": []});
        assert!(site_settings(&document).is_empty());
    }

    #[test]
    fn primary_table_is_first_key() {
        let document: Value =
            serde_json::from_str(r#"{"products": [], "site_settings": {}}"#).unwrap();
        assert_eq!(primary_table(&document), Some("products"));
        assert_eq!(primary_table(&json!({})), None);
        assert_eq!(primary_table(&json!([])), None);
    }

    // =========================================================================
    // Overrides
    // =========================================================================

    #[test]
    fn parse_override_values() {
        assert_eq!(
            parse_override("theme=dark").unwrap(),
            ("theme".to_string(), json!("dark"))
        );
        assert_eq!(
            parse_override("header_transparent=true").unwrap().1,
            json!(true)
        );
        assert_eq!(parse_override("global_radius=null").unwrap().1, Value::Null);
        assert_eq!(parse_override("header_height=80").unwrap().1, json!("80"));
        assert_eq!(parse_override("global_shadow=").unwrap().1, json!(""));
    }

    #[test]
    fn value_may_contain_equals() {
        let (key, value) = parse_override("hero_aspect_ratio=a=b").unwrap();
        assert_eq!(key, "hero_aspect_ratio");
        assert_eq!(value, json!("a=b"));
    }

    #[test]
    fn malformed_override_is_error() {
        assert!(matches!(
            parse_override("theme"),
            Err(SettingsError::Override(_))
        ));
        assert!(matches!(
            parse_override("=dark"),
            Err(SettingsError::Override(_))
        ));
    }

    #[test]
    fn overrides_replace_in_place_and_append() {
        let base = SettingsRecord::from_input(Some(&json!({"theme": "light", "global_radius": "4px"})));
        let record = apply_overrides(
            base,
            &["theme=dark".to_string(), "header_height=64".to_string()],
        )
        .unwrap();
        let keys: Vec<&str> = record.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["theme", "global_radius", "header_height"]);
        assert_eq!(record.get("theme"), Some(&json!("dark")));
    }

    #[test]
    fn load_settings_combines_document_and_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.json");
        fs::write(
            &path,
            r#"{"articles": [], "site_settings": {"theme": "light"}}"#,
        )
        .unwrap();

        let loaded = load_settings(&path, &["theme=dark".to_string()]).unwrap();
        assert_eq!(loaded.primary_table.as_deref(), Some("articles"));
        assert_eq!(loaded.record.get("theme"), Some(&json!("dark")));
    }

    // =========================================================================
    // stock_settings_toml tests
    // =========================================================================

    #[test]
    fn stock_settings_is_valid_toml() {
        let _: toml::Value =
            toml::from_str(stock_settings_toml()).expect("stock settings must be valid TOML");
    }

    #[test]
    fn stock_settings_keys_are_all_recognized() {
        let document: Value = toml::from_str(stock_settings_toml()).unwrap();
        let record = site_settings(&document);
        assert!(!record.is_empty());
        for (key, _) in record.iter() {
            let is_rule_key = matches!(
                key.as_str(),
                "theme" | "header_transparent" | "hero_overlay_opacity"
            );
            assert!(
                is_rule_key || mapping::lookup(key).is_some(),
                "stock key '{key}' is not recognized"
            );
        }
    }

    #[test]
    fn stock_settings_mentions_every_table_key() {
        let content = stock_settings_toml();
        for (key, _) in mapping::MAPPINGS {
            assert!(content.contains(key), "stock settings missing '{key}'");
        }
    }
}
