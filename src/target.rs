//! The presentation target: the root style scope the resolver writes into.
//!
//! The resolver never owns the scope. It receives `&mut dyn PresentationTarget`,
//! which keeps exactly one writer per apply and lets tests or other hosts
//! substitute their own scope.
//!
//! [`StyleScope`] is the in-memory implementation. Besides recording
//! variables and flags it renders itself for the two places a static shell
//! needs it:
//!
//! ```text
//! to_css()           :root.dark {
//!                        --color-primary: #4f46e5;
//!                    }
//! to_inline_style()  --color-primary: #4f46e5; --header-height: 80px
//! ```

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Name of the flag that switches the shell into dark mode.
pub const DARK_FLAG: &str = "dark";

/// A mutable style scope.
pub trait PresentationTarget {
    fn set_variable(&mut self, name: &str, value: &str);
    /// Drop a variable so a lower-priority fallback applies again.
    fn remove_variable(&mut self, name: &str);
    fn set_flag(&mut self, name: &str, on: bool);
    fn flag(&self, name: &str) -> bool;
}

/// Recorded variables and flags of a root style scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StyleScope {
    variables: BTreeMap<String, String>,
    flags: BTreeSet<String>,
}

impl StyleScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Variables sorted by name.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variables
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_dark(&self) -> bool {
        self.flags.contains(DARK_FLAG)
    }

    /// Flags that are on, sorted; used as the root element's class list.
    pub fn flags(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() && self.flags.is_empty()
    }

    /// Render as a CSS rule on `:root`, qualified by the active flags.
    pub fn to_css(&self) -> String {
        let selector: String = std::iter::once(":root".to_string())
            .chain(self.flags().map(|f| format!(".{f}")))
            .collect();
        let mut css = format!("{selector} {{\n");
        for (name, value) in self.variables() {
            css.push_str(&format!("    {name}: {value};\n"));
        }
        css.push('}');
        css
    }

    /// Render as the value of a `style` attribute.
    pub fn to_inline_style(&self) -> String {
        self.variables()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl PresentationTarget for StyleScope {
    fn set_variable(&mut self, name: &str, value: &str) {
        // An empty value clears the property, as a style declaration would.
        if value.is_empty() {
            self.variables.remove(name);
        } else {
            self.variables.insert(name.to_string(), value.to_string());
        }
    }

    fn remove_variable(&mut self, name: &str) {
        self.variables.remove(name);
    }

    fn set_flag(&mut self, name: &str, on: bool) {
        if on {
            self.flags.insert(name.to_string());
        } else {
            self.flags.remove(name);
        }
    }

    fn flag(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}
