//! Constants and built-in templates for table rendering
//!
//! This module contains the well-known names shared between the data model,
//! the record tree and the bundled Tera templates.

use lazy_static::lazy_static;
use std::collections::HashMap;

/// The attribute that is always present and always holds a class list
pub const CLASS_ATTRIBUTE: &str = "class";

/// Class injected into the record of a hidden cell
pub const HIDDEN_CLASS: &str = "hidden";

/// Top-level context key the record tree is passed under when rendering
pub const CONTEXT_KEY: &str = "tabledata";

/// Name of the bundled full-table template
pub const DEFAULT_TEMPLATE_NAME: &str = "table.html";

/// Name of the bundled body-only template (included by `table.html`)
pub const TBODY_TEMPLATE_NAME: &str = "tbody.html";

// ============================================================================
// Built-in Templates
// ============================================================================

lazy_static! {
    /// Bundled templates, keyed by the name they are registered under
    pub static ref BUILTIN_TEMPLATES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            DEFAULT_TEMPLATE_NAME,
            include_str!("../../templates/table.html.tera"),
        );
        m.insert(
            TBODY_TEMPLATE_NAME,
            include_str!("../../templates/tbody.html.tera"),
        );
        m
    };
}

/// Look up a bundled template by name
pub fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_registered() {
        assert!(builtin_template(DEFAULT_TEMPLATE_NAME).is_some());
        assert!(builtin_template(TBODY_TEMPLATE_NAME).is_some());
        assert!(builtin_template("missing.html").is_none());
    }

    #[test]
    fn test_default_template_uses_context_key() {
        let tpl = builtin_template(DEFAULT_TEMPLATE_NAME).unwrap();
        assert!(tpl.contains(CONTEXT_KEY));
        assert!(tpl.contains(TBODY_TEMPLATE_NAME));
    }
}
