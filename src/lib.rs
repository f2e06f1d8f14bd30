//! # Site Style
//!
//! Turns a site's settings record into the style variables of its page
//! shell. The header, sections and footer of the site only reference
//! variables such as `var(--color-primary)`; everything that decides their
//! values lives here.
//!
//! # Pipeline
//!
//! ```text
//! data document  →  settings record  →  resolver  →  style scope  →  shell
//! (site.json)       (site_settings)     (apply)      (variables,     (HTML)
//!                                                     dark flag)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Loads JSON/TOML data documents, extracts `site_settings`, layers `--set` overrides |
//! | [`settings`] | The normalized settings record and the shared scalar rules (truthiness, text form, float parsing) |
//! | [`mapping`] | Fixed table from setting keys to variable names; the full output surface |
//! | [`derive`] | Shadow presets, dimension units, header transparency, hero overlay stops |
//! | [`resolve`] | One apply pass over a record, its report, and the change watcher |
//! | [`target`] | The `PresentationTarget` trait and the in-memory `StyleScope` |
//! | [`shell`] | Renders the document shell around a resolved scope using Maud |
//! | [`output`] | CLI output formatting of apply reports |
//!
//! # Design Decisions
//!
//! ## Permissive Input
//!
//! A bad setting should degrade the page, never break it. The resolver has
//! no error path: unknown keys are skipped, values are written as given, and
//! an unparsable overlay opacity shows up as `NaN` in the generated color.
//! Loading the document is the only fallible step.
//!
//! ## Injected Target
//!
//! The resolver writes through `&mut dyn PresentationTarget` rather than
//! owning a scope. The same pass drives the static `StyleScope` used by the
//! CLI and any host scope (a live DOM bridge, a test recorder).
//!
//! ## Literal Key Lookup
//!
//! `light_*` and `dark_*` keys both apply whatever the active theme; the
//! later key in the record wins. The active prefix is reported alongside each
//! write so mismatches are visible without changing what gets applied.

pub mod config;
pub mod derive;
pub mod mapping;
pub mod output;
pub mod resolve;
pub mod settings;
pub mod shell;
pub mod target;

pub use resolve::{ApplyReport, SettingsWatcher, ThemeMode, apply, apply_input};
pub use settings::SettingsRecord;
pub use target::{PresentationTarget, StyleScope};

#[cfg(test)]
pub(crate) mod test_helpers;
