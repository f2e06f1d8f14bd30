//! Shared test utilities for the resolver test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let (scope, report) = apply_json(json!({"theme": "dark"}));
//! assert_var(&scope, "--hero-overlay-start", "rgba(0, 0, 0, 0.8)");
//! ```

use serde_json::Value;

use crate::resolve::{ApplyReport, apply};
use crate::settings::SettingsRecord;
use crate::target::StyleScope;

/// Build a settings record from a JSON literal (bare or wrapped).
pub fn record(value: Value) -> SettingsRecord {
    SettingsRecord::from_input(Some(&value))
}

/// Apply a JSON literal to a fresh scope.
pub fn apply_json(value: Value) -> (StyleScope, ApplyReport) {
    let mut scope = StyleScope::new();
    let report = apply(&mut scope, &record(value));
    (scope, report)
}

/// Assert a variable holds `expected`. Panics with the full scope on miss.
pub fn assert_var(scope: &StyleScope, name: &str, expected: &str) {
    let actual = scope.variable(name);
    assert_eq!(
        actual,
        Some(expected),
        "variable {name}: expected {expected:?}, got {actual:?}\nscope:\n{}",
        scope.to_css()
    );
}
