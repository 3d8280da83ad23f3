//! Data layer - Constants and bundled templates
//!
//! This module contains the static data shared by the model and the renderer:
//! - Well-known attribute, class and context names
//! - Bundled Tera templates

pub mod constants;

// Re-export commonly used items
pub use constants::{
    builtin_template, BUILTIN_TEMPLATES, CLASS_ATTRIBUTE, CONTEXT_KEY, DEFAULT_TEMPLATE_NAME,
    HIDDEN_CLASS, TBODY_TEMPLATE_NAME,
};
