//! Table cells

use super::attributes::HtmlAttributes;
use super::entity::HtmlEntity;
use super::record::CellRecord;
use crate::data::constants::HIDDEN_CLASS;
use crate::utils::escaping::EscapePolicy;

/// A keyed value holder, the smallest unit of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCell {
    /// Column key, unique within the owning row
    key: String,
    value: Option<String>,
    /// Raw content to prepend to the value. Never escaped; not for user input!
    before_raw: Option<String>,
    /// Raw content to append to the value. Never escaped; not for user input!
    after_raw: Option<String>,
    /// Hidden cells are kept for data purposes and rendered with the `hidden` class
    hidden: bool,
    attributes: HtmlAttributes,
}

impl TableCell {
    /// Create an empty cell with the given key
    pub fn new(key: impl Into<String>) -> Self {
        TableCell {
            key: key.into(),
            value: None,
            before_raw: None,
            after_raw: None,
            hidden: false,
            attributes: HtmlAttributes::new(),
        }
    }

    /// Create a cell with key and value
    pub fn with_key_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(key).with_value(value)
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_attributes(mut self, attributes: HtmlAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_before_raw(mut self, raw: impl Into<String>) -> Self {
        self.before_raw = Some(raw.into());
        self
    }

    pub fn with_after_raw(mut self, raw: impl Into<String>) -> Self {
        self.after_raw = Some(raw.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn clear_value(&mut self) -> &mut Self {
        self.value = None;
        self
    }

    pub fn before_raw(&self) -> Option<&str> {
        self.before_raw.as_deref()
    }

    pub fn set_before_raw(&mut self, raw: impl Into<String>) -> &mut Self {
        self.before_raw = Some(raw.into());
        self
    }

    pub fn after_raw(&self) -> Option<&str> {
        self.after_raw.as_deref()
    }

    pub fn set_after_raw(&mut self, raw: impl Into<String>) -> &mut Self {
        self.after_raw = Some(raw.into());
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) -> &mut Self {
        self.hidden = hidden;
        self
    }

    /// Returns the record representation
    pub fn to_record(&self) -> CellRecord {
        self.to_record_with(EscapePolicy::Raw)
    }

    /// Returns the record representation, escaping the value and attribute
    /// values per `policy`. Raw fragments are passed through untouched.
    ///
    /// A hidden cell gets the `hidden` class in its serialized attributes;
    /// the stored attributes are left as they are.
    pub fn to_record_with(&self, policy: EscapePolicy) -> CellRecord {
        let attributes = if self.hidden && !self.attributes.has_class(HIDDEN_CLASS) {
            let mut attrs = self.attributes.clone();
            attrs.add_class(HIDDEN_CLASS);
            attrs.serialize_with(policy)
        } else {
            self.attributes.serialize_with(policy)
        };

        CellRecord {
            key: self.key.clone(),
            value: self.value.as_deref().map(|v| policy.apply(v).into_owned()),
            before_raw: self.before_raw.clone(),
            after_raw: self.after_raw.clone(),
            attributes,
            hidden: self.hidden,
        }
    }
}

impl HtmlEntity for TableCell {
    fn attributes(&self) -> &HtmlAttributes {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut HtmlAttributes {
        &mut self.attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builder_and_accessors() {
        let mut cell = TableCell::new("name")
            .with_value("Ada")
            .with_before_raw("<b>")
            .with_after_raw("</b>");
        assert_eq!(cell.key(), "name");
        assert_eq!(cell.value(), Some("Ada"));
        assert_eq!(cell.before_raw(), Some("<b>"));
        assert_eq!(cell.after_raw(), Some("</b>"));
        assert!(!cell.is_hidden());

        cell.set_value("Grace").set_hidden(true).add_class("person");
        assert_eq!(cell.value(), Some("Grace"));
        assert!(cell.is_hidden());
        assert!(cell.has_class("person"));

        cell.clear_value();
        assert_eq!(cell.value(), None);
    }

    #[test]
    fn test_record_fields() {
        let cell = TableCell::with_key_value("age", "36").with_before_raw("~");
        let record = cell.to_record();
        assert_eq!(
            record,
            CellRecord {
                key: "age".to_string(),
                value: Some("36".to_string()),
                before_raw: Some("~".to_string()),
                after_raw: None,
                attributes: String::new(),
                hidden: false,
            }
        );
    }

    #[test]
    fn test_hidden_record_has_hidden_class() {
        let cell = TableCell::new("internal").with_hidden(true);
        let record = cell.to_record();
        assert_eq!(record.attributes, r#"class="hidden""#);
        assert!(record.hidden);
    }

    #[test]
    fn test_hidden_record_does_not_mutate_cell() {
        let mut cell = TableCell::new("internal").with_hidden(true);
        cell.add_class("narrow");
        let first = cell.to_record();
        let second = cell.to_record();
        assert_eq!(first, second);
        assert_eq!(first.attributes, r#"class="narrow hidden""#);
        assert_eq!(cell.attributes().classes(), ["narrow"]);
    }

    #[test]
    fn test_record_escaping_leaves_raw_fragments() {
        let cell = TableCell::with_key_value("x", "a<b")
            .with_before_raw("<i>")
            .with_after_raw("</i>");
        let record = cell.to_record_with(EscapePolicy::Html);
        assert_eq!(record.value.as_deref(), Some("a&lt;b"));
        assert_eq!(record.before_raw.as_deref(), Some("<i>"));
        assert_eq!(record.after_raw.as_deref(), Some("</i>"));
    }

    #[test]
    fn test_record_json_field_names() {
        let json = serde_json::to_value(TableCell::new("k").to_record()).unwrap();
        for field in ["key", "value", "beforeRaw", "afterRaw", "attributes", "hidden"] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
