//! The settings record and the scalar rules every derivation shares.
//!
//! A settings record is a flat, ordered map from setting key to a scalar. It
//! arrives from the data document either bare or wrapped in a one-element
//! array, so [`SettingsRecord::from_input`] normalizes both shapes:
//!
//! ```text
//! "site_settings": { "theme": "dark" }     → { theme: "dark" }
//! "site_settings": [{ "theme": "dark" }]   → { theme: "dark" }
//! "site_settings": []                      → {}
//! (absent, null, a string, ...)            → {}
//! ```
//!
//! Key order is the document order (`serde_json` is built with
//! `preserve_order`). The resolver walks keys in this order, so when two keys
//! target the same variable the later one wins.
//!
//! ## Scalar semantics
//!
//! Settings are untyped on the way in: a height can be `80` or `"80"`, an
//! opacity `0.5` or `"0.5"`. The helpers here give every value one
//! consistent reading:
//!
//! | value | truthy | text |
//! |-------|--------|------|
//! | `""` | no | `""` |
//! | `"80"` | yes | `80` |
//! | `0` / `NaN` | no | `0` / `NaN` |
//! | `80`, `0.5` | yes | `80`, `0.5` |
//! | `true` / `false` | yes / no | `true` / `false` |
//! | `null` | no | *(none)* |

use serde::Serialize;
use serde_json::{Map, Value};

/// A normalized settings record. Read-only to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsRecord(Map<String, Value>);

impl SettingsRecord {
    /// Normalize whatever the data document holds under `site_settings`.
    ///
    /// Arrays yield their first element (if that is an object), objects are
    /// taken as-is, anything else is an empty record.
    pub fn from_input(input: Option<&Value>) -> Self {
        match input {
            Some(Value::Array(items)) => match items.first() {
                Some(Value::Object(map)) => Self(map.clone()),
                _ => Self::default(),
            },
            Some(Value::Object(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Keys and values in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Set a key. Existing keys keep their position, new keys go last.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }
}

impl From<Map<String, Value>> for SettingsRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for SettingsRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// Scalar readings
// =============================================================================

/// Whether a value counts as "set" for the unit-coercion rule.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Text form of a value as written into a style variable.
///
/// `None` for `null`: writing it removes the variable instead.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            _ => format_number(n.as_f64().unwrap_or(f64::NAN)),
        }),
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|v| to_text(v).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Some(Value::to_string(value)),
    }
}

/// Shortest decimal form of a float, with `NaN` and `Infinity` spelled out.
///
/// Magnitudes from 1e21 up and below 1e-6 switch to exponent form
/// (`1e+21`, `1.5e-7`).
pub fn format_number(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f == f64::INFINITY {
        "Infinity".to_string()
    } else if f == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if f == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else if f.abs() >= 1e21 || f.abs() < 1e-6 {
        let exp = format!("{f:e}");
        match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        }
    } else {
        f.to_string()
    }
}

/// Read a value as a float.
///
/// Numbers pass through. Everything else goes through its text form and
/// [`parse_float_prefix`], so `"0.5"` → 0.5, `"0.5abc"` → 0.5, `true` → NaN.
pub fn to_float(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        other => to_text(other)
            .map(|s| parse_float_prefix(&s))
            .unwrap_or(f64::NAN),
    }
}

/// Parse the longest leading decimal literal of `s`, ignoring leading
/// whitespace. Returns NaN when no digits lead the string.
///
/// Accepts an optional sign, `Infinity`, digits with an optional fraction
/// (`5.`, `.5`), and an exponent only when it carries digits (`1e3x` → 1000,
/// `1e` → 1).
pub fn parse_float_prefix(s: &str) -> f64 {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let int_part = &s[int_start..pos];

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        frac_part = &s[frac_start..end];
        pos = end;
    }

    if int_part.is_empty() && frac_part.is_empty() {
        return f64::NAN;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos + 1..end];
        }
    }

    let mut literal = String::with_capacity(int_part.len() + frac_part.len() + exponent.len() + 4);
    if negative {
        literal.push('-');
    }
    literal.push_str(if int_part.is_empty() { "0" } else { int_part });
    if !frac_part.is_empty() {
        literal.push('.');
        literal.push_str(frac_part);
    }
    if !exponent.is_empty() {
        literal.push('e');
        literal.push_str(exponent);
    }
    literal.parse().unwrap_or(f64::NAN)
}
