//! Tera-based table rendering
//!
//! [`TeraRenderer`] turns a [`Table`] into markup: the table is converted to
//! its record tree (escaping per [`RenderOptions::escape`]) and handed to a
//! Tera template under a single top-level key, `tabledata` by default.
//!
//! Two templates are bundled: `table.html` (full table) and `tbody.html`
//! (body rows only). Custom templates can be added by string or loaded from
//! a glob; they read the same record fields (`header`, `rows`, `cells`,
//! `cellsByKey`, `attributes`, `key`, `value`, `beforeRaw`, `afterRaw`,
//! `hidden`).
//!
//! ## Example
//!
//! ```rust
//! use tableclass::core::input::row_input;
//! use tableclass::{Table, TeraRenderer};
//!
//! let mut table = Table::new();
//! table
//!     .set_header_from_record(row_input([("name", "Name")]))
//!     .add_rows_from_records([row_input([("name", "Ada & Grace")])]);
//!
//! let html = table.render(&TeraRenderer::new().unwrap()).unwrap();
//! assert!(html.contains("<th>Name</th>"));
//! assert!(html.contains("<td>Ada &amp; Grace</td>"));
//! ```

use std::error::Error as _;

use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use tracing::{debug, trace};

use crate::core::record::TableRecord;
use crate::core::table::{Table, TableRenderer};
use crate::data::constants::{BUILTIN_TEMPLATES, CONTEXT_KEY, DEFAULT_TEMPLATE_NAME, TBODY_TEMPLATE_NAME};
use crate::utils::error::{TableError, TableResult};
use crate::utils::escaping::EscapePolicy;

/// Rendering configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Template to render
    /// Default: `table.html`
    pub template_name: String,

    /// Key the record tree is passed under.
    /// The bundled templates read `tabledata`, so any other key needs a
    /// custom template; rendering a bundled template under another key
    /// fails with [`TableError::Render`].
    /// Default: `tabledata`
    pub context_key: String,

    /// Escaping applied to cell values and attribute values
    /// Default: `Html`
    pub escape: EscapePolicy,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
            context_key: CONTEXT_KEY.to_string(),
            escape: EscapePolicy::Html,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that write values verbatim (trusted content only)
    pub fn raw() -> Self {
        Self {
            escape: EscapePolicy::Raw,
            ..Self::default()
        }
    }

    /// Options that render only the `<tbody>` section
    pub fn body_only() -> Self {
        Self {
            template_name: TBODY_TEMPLATE_NAME.to_string(),
            ..Self::default()
        }
    }

    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template_name = name.into();
        self
    }

    pub fn with_escape(mut self, escape: EscapePolicy) -> Self {
        self.escape = escape;
        self
    }
}

/// Table renderer backed by a Tera instance
#[derive(Debug)]
pub struct TeraRenderer {
    tera: Tera,
    options: RenderOptions,
    /// Bundled templates not replaced by loaded or added ones
    builtins: Vec<&'static str>,
}

impl TeraRenderer {
    /// Renderer with the bundled templates and default options
    pub fn new() -> TableResult<Self> {
        Self::with_options(RenderOptions::default())
    }

    pub fn with_options(options: RenderOptions) -> TableResult<Self> {
        Self::from_tera(Tera::default(), options)
    }

    /// Load templates matching `glob` (e.g. `"templates/**/*.html"`).
    /// Bundled templates are added unless a loaded template has the same name.
    pub fn from_glob(glob: &str, options: RenderOptions) -> TableResult<Self> {
        let tera = Tera::new(glob).map_err(|e| tera_error(glob, e))?;
        Self::from_tera(tera, options)
    }

    fn from_tera(mut tera: Tera, options: RenderOptions) -> TableResult<Self> {
        // Escaping is applied while building the record
        tera.autoescape_on(vec![]);

        let loaded: Vec<String> = tera.get_template_names().map(str::to_string).collect();
        let builtins: Vec<(&'static str, &'static str)> = BUILTIN_TEMPLATES
            .iter()
            .filter(|(name, _)| !loaded.iter().any(|l| l == *name))
            .map(|(name, content)| (*name, *content))
            .collect();
        tera.add_raw_templates(builtins.iter().copied())
            .map_err(|e| tera_error(DEFAULT_TEMPLATE_NAME, e))?;

        debug!(
            template = %options.template_name,
            templates = loaded.len() + BUILTIN_TEMPLATES.len(),
            "tera renderer ready"
        );
        Ok(Self {
            tera,
            options,
            builtins: builtins.into_iter().map(|(name, _)| name).collect(),
        })
    }

    /// Register an additional template
    pub fn add_template(&mut self, name: &str, content: &str) -> TableResult<&mut Self> {
        self.tera
            .add_raw_template(name, content)
            .map_err(|e| tera_error(name, e))?;
        self.builtins.retain(|builtin| *builtin != name);
        Ok(self)
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Render an already built record tree
    pub fn render_record(&self, record: &TableRecord) -> TableResult<String> {
        let template = self.options.template_name.as_str();
        let bundled = self.builtins.iter().any(|b| *b == template);
        if bundled && self.options.context_key != CONTEXT_KEY {
            return Err(TableError::render(
                template,
                format!(
                    "bundled template reads '{}', not '{}'; use a custom template",
                    CONTEXT_KEY, self.options.context_key
                ),
            ));
        }

        let mut context = Context::new();
        context.insert(self.options.context_key.as_str(), record);

        trace!(
            template = %self.options.template_name,
            rows = record.rows.len(),
            "rendering table"
        );
        self.tera
            .render(&self.options.template_name, &context)
            .map_err(|e| tera_error(&self.options.template_name, e))
    }
}

impl TableRenderer for TeraRenderer {
    fn render(&self, table: &Table) -> TableResult<String> {
        self.render_record(&table.to_record_with(self.options.escape))
    }
}

/// Flatten a Tera error and its sources into one message
fn tera_error(template: &str, err: tera::Error) -> TableError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    TableError::render(template, message)
}
