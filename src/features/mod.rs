//! Feature modules - building, loading and rendering tables
//!
//! This module contains the layers around the core table model:
//! - Table factory and headerless-column policy
//! - Loading table documents (JSON, YAML, CSV)
//! - Template rendering through Tera

pub mod factory;
pub mod loading;
#[cfg(feature = "render")]
pub mod render;

// Re-export commonly used types
pub use factory::{HeaderlessPolicy, TableFactory};
pub use loading::{load_file, load_reader, load_str, InputFormat};
#[cfg(feature = "render")]
pub use render::{RenderOptions, TeraRenderer};
