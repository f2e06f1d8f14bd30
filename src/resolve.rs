//! The presentation resolver: settings record in, style variables out.
//!
//! One [`apply`] call is one full pass over the record:
//!
//! ```text
//! 1. theme       settings.theme == "dark" → set/clear the dark flag
//! 2. prefix      read back from the flag: "dark_" or "light_"
//! 3. table       every key present in the record, in record order:
//!                  look up literally → shadow preset / unit coercion → write
//! 4. header      header_transparent == true → force the transparent triplet,
//!                otherwise remove it
//! 5. overlay     hero_overlay_opacity (default 0.8) → two gradient stops
//! ```
//!
//! ## Table lookups are not filtered by theme
//!
//! Step 3 matches keys literally. A record holding both `light_primary_color`
//! and `dark_primary_color` writes `--color-primary` twice, and whichever key
//! comes later in the record wins, whatever the active theme. The prefix from
//! step 2 is only reported (entries from the other family are marked
//! `off_theme`).
//!
//! ## Passes are total but not clearing
//!
//! Every pass rewrites every variable it has a key for. Variables written by
//! an earlier pass whose key is now absent are left in place; only the header
//! triplet is actively removed. Applying the same record twice yields the
//! same scope.
//!
//! Nothing here fails: unknown keys are skipped, unparsable numbers turn into
//! `NaN` in the output.

use crate::derive::{self, OverlayStops, TRANSPARENT_HEADER};
use crate::mapping::{self, key, var};
use crate::settings::{SettingsRecord, to_text};
use crate::target::{DARK_FLAG, PresentationTarget};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

/// Active color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// Key prefix of this theme's color family.
    pub fn prefix(self) -> &'static str {
        match self {
            ThemeMode::Light => "light_",
            ThemeMode::Dark => "dark_",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    fn other(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// One table-driven write.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedEntry {
    pub key: String,
    pub variables: &'static [&'static str],
    /// Written value; `None` when the variable was cleared (`null` setting).
    pub value: Option<String>,
    /// Key belongs to the inactive theme's family.
    pub off_theme: bool,
}

/// What a pass did. Informational only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplyReport {
    pub theme: ThemeMode,
    pub prefix: &'static str,
    pub applied: Vec<AppliedEntry>,
    /// Keys with no table entry and no rule of their own.
    pub ignored: Vec<String>,
    pub header_transparent: bool,
    pub overlay: OverlayStops,
}

/// Keys consumed by a rule even though they have no table entry.
const RULE_KEYS: [&str; 3] = [
    key::THEME,
    key::HEADER_TRANSPARENT,
    key::HERO_OVERLAY_OPACITY,
];

/// Normalize raw `site_settings` input and apply it.
pub fn apply_input(target: &mut dyn PresentationTarget, input: Option<&Value>) -> ApplyReport {
    apply(target, &SettingsRecord::from_input(input))
}

/// Apply a settings record to the target.
pub fn apply(target: &mut dyn PresentationTarget, settings: &SettingsRecord) -> ApplyReport {
    let wants_dark = matches!(settings.get(key::THEME), Some(Value::String(s)) if s == "dark");
    target.set_flag(DARK_FLAG, wants_dark);

    let theme = if target.flag(DARK_FLAG) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    };
    let prefix = theme.prefix();
    let other_prefix = theme.other().prefix();
    debug!(theme = theme.as_str(), keys = settings.len(), "applying settings");

    let mut applied = Vec::new();
    let mut ignored = Vec::new();

    for (setting, raw) in settings.iter() {
        let Some(variables) = mapping::lookup(setting) else {
            if !RULE_KEYS.contains(&setting.as_str()) {
                trace!(key = %setting, "no mapping, skipped");
                ignored.push(setting.clone());
            }
            continue;
        };

        let value = resolve_value(setting, raw);
        for name in variables {
            write(target, name, value.as_deref());
        }

        let off_theme = setting.starts_with(other_prefix);
        if off_theme {
            debug!(key = %setting, active = prefix, "applied key from inactive theme");
        }
        trace!(key = %setting, ?variables, value = ?value, "applied");
        applied.push(AppliedEntry {
            key: setting.clone(),
            variables,
            value,
            off_theme,
        });
    }

    let header_transparent = matches!(settings.get(key::HEADER_TRANSPARENT), Some(Value::Bool(true)));
    if header_transparent {
        for (name, literal) in TRANSPARENT_HEADER {
            target.set_variable(name, literal);
        }
    } else {
        for (name, _) in TRANSPARENT_HEADER {
            target.remove_variable(name);
        }
    }

    let opacity = derive::overlay_opacity(settings.get(key::HERO_OVERLAY_OPACITY));
    if opacity.is_nan() {
        debug!("hero_overlay_opacity is not a number, overlay stops carry NaN");
    }
    let overlay = OverlayStops::from_opacity(opacity);
    target.set_variable(var::HERO_OVERLAY_START, &overlay.start);
    target.set_variable(var::HERO_OVERLAY_END, &overlay.end);

    ApplyReport {
        theme,
        prefix,
        applied,
        ignored,
        header_transparent,
        overlay,
    }
}

/// Value to write for a table key, after its key-specific rule.
fn resolve_value(setting: &str, raw: &Value) -> Option<String> {
    match setting {
        key::GLOBAL_SHADOW => to_text(raw).map(|text| derive::shadow_preset(&text).to_string()),
        key::HEADER_HEIGHT | key::CONTENT_TOP_OFFSET => derive::coerce_dimension(raw),
        _ => to_text(raw),
    }
}

fn write(target: &mut dyn PresentationTarget, name: &str, value: Option<&str>) {
    match value {
        Some(value) => target.set_variable(name, value),
        None => target.remove_variable(name),
    }
}

// =============================================================================
// Re-apply on change
// =============================================================================

/// Re-applies settings only when their value changes.
///
/// The comparison runs on the normalized record, so `[{...}]` and `{...}`
/// with the same content count as unchanged, as do `[]` and `{}`.
#[derive(Debug, Default)]
pub struct SettingsWatcher {
    last: Option<SettingsRecord>,
}

impl SettingsWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `input` if it differs from the last applied record.
    ///
    /// Returns the report when a pass ran, `None` when the input was unchanged.
    pub fn observe(
        &mut self,
        target: &mut dyn PresentationTarget,
        input: Option<&Value>,
    ) -> Option<ApplyReport> {
        let record = SettingsRecord::from_input(input);
        if self.last.as_ref() == Some(&record) {
            trace!("settings unchanged, skipping apply");
            return None;
        }
        Some(self.run(target, record))
    }

    /// Apply `input` unconditionally.
    pub fn force(&mut self, target: &mut dyn PresentationTarget, input: Option<&Value>) -> ApplyReport {
        self.run(target, SettingsRecord::from_input(input))
    }

    /// The record applied most recently.
    pub fn last(&self) -> Option<&SettingsRecord> {
        self.last.as_ref()
    }

    fn run(&mut self, target: &mut dyn PresentationTarget, record: SettingsRecord) -> ApplyReport {
        let report = apply(target, &record);
        self.last = Some(record);
        report
    }
}
