//! Static document shell.
//!
//! Places a resolved [`StyleScope`] on the root element and lays out the
//! landmarks that consume it. The header, sections and footer are filled in
//! by other collaborators; the shell only wires their containers:
//!
//! ```html
//! <html lang="en" class="dark" style="--color-primary: #818cf8; ...">
//!   <head> ... </head>
//!   <body>
//!     <div class="site-shell">
//!       <header class="site-header" data-table="products"></header>
//!       <main style="padding-top: var(--content-top-offset, 0px)"></main>
//!       <footer class="site-footer"></footer>
//!     </div>
//!   </body>
//! </html>
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) so every attribute value is escaped.

use crate::target::StyleScope;
use maud::{DOCTYPE, Markup, html};

/// Base colors for the shell wrapper, read from the resolved variables.
const SHELL_STYLE: &str =
    "min-height: 100vh; background: var(--color-background); color: var(--color-text)";

/// Offset that keeps content clear of a fixed header.
const MAIN_STYLE: &str = "padding-top: var(--content-top-offset, 0px)";

/// Renders the site header container.
fn site_header(primary_table: Option<&str>) -> Markup {
    html! {
        header.site-header data-table=[primary_table] {}
    }
}

/// Renders the full document for a resolved scope.
pub fn render_document(scope: &StyleScope, title: &str, primary_table: Option<&str>) -> Markup {
    let classes = scope.flags().collect::<Vec<_>>().join(" ");
    let class = (!classes.is_empty()).then_some(classes);
    let inline = scope.to_inline_style();
    let style = (!inline.is_empty()).then_some(inline);

    html! {
        (DOCTYPE)
        html lang="en" class=[class] style=[style] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
            }
            body {
                div.site-shell style=(SHELL_STYLE) {
                    (site_header(primary_table))
                    main style=(MAIN_STYLE) {}
                    footer.site-footer {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{DARK_FLAG, PresentationTarget};

    #[test]
    fn root_carries_dark_class_and_variables() {
        let mut scope = StyleScope::new();
        scope.set_flag(DARK_FLAG, true);
        scope.set_variable("--color-primary", "#818cf8");

        let html = render_document(&scope, "Shop", None).into_string();
        assert!(html.contains(r#"<html lang="en" class="dark" style="--color-primary: #818cf8">"#));
    }

    #[test]
    fn light_empty_scope_has_bare_root() {
        let html = render_document(&StyleScope::new(), "Shop", None).into_string();
        assert!(html.contains(r#"<html lang="en">"#));
    }

    #[test]
    fn header_carries_primary_table() {
        let html = render_document(&StyleScope::new(), "Shop", Some("products")).into_string();
        assert!(html.contains(r#"<header class="site-header" data-table="products">"#));
    }

    #[test]
    fn main_offsets_by_content_top_variable() {
        let html = render_document(&StyleScope::new(), "Shop", None).into_string();
        assert!(html.contains(r#"<main style="padding-top: var(--content-top-offset, 0px)">"#));
    }

    #[test]
    fn values_are_escaped() {
        let mut scope = StyleScope::new();
        scope.set_variable("--color-text", r#""><script>"#);
        let html = render_document(&scope, "<Shop>", None).into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("<title>&lt;Shop&gt;</title>"));
    }
}
