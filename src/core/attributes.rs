//! HTML attribute dictionaries
//!
//! [`HtmlAttributes`] is an ordered `name → value` map with one special
//! entry: `class` is always present and always holds a de-duplicated list of
//! class names in first-insertion order.
//!
//! ## Example
//!
//! ```rust
//! use tableclass::HtmlAttributes;
//!
//! let mut attrs = HtmlAttributes::new();
//! attrs.add_class("a").add_class("b").add_class("a");
//! attrs.set("id", "users").set("hidden", true);
//!
//! assert_eq!(attrs.classes(), ["a", "b"]);
//! assert_eq!(attrs.serialize(), r#"class="a b" id="users" hidden"#);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::data::constants::CLASS_ATTRIBUTE;
use crate::utils::escaping::{is_valid_attribute_name, EscapePolicy};

/// A single attribute value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, from = "AttributeInput")]
pub enum AttributeValue {
    /// Boolean attribute: `true` renders the bare name, `false` renders nothing
    Bool(bool),
    /// Scalar attribute rendered as `name="value"`
    Text(String),
    /// List attribute rendered as `name="v1 v2"`
    List(Vec<String>),
}

impl AttributeValue {
    /// Render as a `name="..."` fragment, or `None` when nothing is emitted
    fn render(&self, name: &str, policy: EscapePolicy) -> Option<String> {
        match self {
            AttributeValue::Bool(true) => Some(name.to_string()),
            AttributeValue::Bool(false) => None,
            AttributeValue::Text(value) => Some(format!("{}=\"{}\"", name, policy.apply(value))),
            AttributeValue::List(values) if values.is_empty() => None,
            AttributeValue::List(values) => {
                let joined = values
                    .iter()
                    .map(|v| policy.apply(v))
                    .collect::<Vec<_>>()
                    .join(" ");
                Some(format!("{}=\"{}\"", name, joined))
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::List(l) => Some(l),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Bool(b)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Text(s.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Text(s)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(l: Vec<String>) -> Self {
        AttributeValue::List(l)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(l: Vec<&str>) -> Self {
        AttributeValue::List(l.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for AttributeValue {
    fn from(l: &[&str]) -> Self {
        AttributeValue::List(l.iter().map(|s| s.to_string()).collect())
    }
}

/// Wire shape accepted when reading attribute values from records.
/// Numbers are kept as their textual form.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeInput {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

impl From<AttributeInput> for AttributeValue {
    fn from(input: AttributeInput) -> Self {
        match input {
            AttributeInput::Bool(b) => AttributeValue::Bool(b),
            AttributeInput::Number(n) => AttributeValue::Text(n.to_string()),
            AttributeInput::Text(s) => AttributeValue::Text(s),
            AttributeInput::List(l) => AttributeValue::List(l),
        }
    }
}

/// Ordered HTML attribute dictionary with special `class` list handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, Option<AttributeValue>>",
    into = "IndexMap<String, AttributeValue>"
)]
pub struct HtmlAttributes {
    entries: IndexMap<String, AttributeValue>,
}

impl Default for HtmlAttributes {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlAttributes {
    /// Create an empty attribute map (holding only an empty class list)
    pub fn new() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(
            CLASS_ATTRIBUTE.to_string(),
            AttributeValue::List(Vec::new()),
        );
        Self { entries }
    }

    /// Returns the attribute by name
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// Sets an attribute, overwriting any previous value.
    ///
    /// Values for `class` are coerced into a class list: text is split on
    /// whitespace, lists are de-duplicated and booleans clear the list.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        if name == CLASS_ATTRIBUTE {
            let classes = match value {
                AttributeValue::Text(s) => s.split_whitespace().map(str::to_string).collect(),
                AttributeValue::List(l) => l,
                AttributeValue::Bool(_) => Vec::new(),
            };
            self.class_list_mut().clear();
            self.add_classes(classes);
        } else {
            self.entries.insert(name, value);
        }
        self
    }

    /// Returns true if an attribute with the given name exists
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Removes an attribute. Removing `class` empties the class list.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        if name == CLASS_ATTRIBUTE {
            self.class_list_mut().clear();
        } else {
            self.entries.shift_remove(name);
        }
        self
    }

    /// Returns all class values
    pub fn classes(&self) -> &[String] {
        self.entries
            .get(CLASS_ATTRIBUTE)
            .and_then(AttributeValue::as_list)
            .unwrap_or(&[])
    }

    /// Adds a class unless it is blank or already present
    pub fn add_class(&mut self, class: impl AsRef<str>) -> &mut Self {
        let class = class.as_ref().trim();
        if class.is_empty() {
            return self;
        }
        let list = self.class_list_mut();
        if !list.iter().any(|c| c == class) {
            list.push(class.to_string());
        }
        self
    }

    /// Adds all classes from a list
    pub fn add_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    /// Removes a class if present
    pub fn remove_class(&mut self, class: &str) -> &mut Self {
        let list = self.class_list_mut();
        if let Some(pos) = list.iter().position(|c| c == class) {
            list.remove(pos);
        }
        self
    }

    /// Returns true if the class exists
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    /// Iterate attributes in insertion order (`class` first)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of attributes, counting `class`
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing would be serialized
    pub fn is_empty(&self) -> bool {
        self.entries.len() == 1 && self.classes().is_empty()
    }

    /// Returns the attribute string without escaping
    pub fn serialize(&self) -> String {
        self.serialize_with(EscapePolicy::Raw)
    }

    /// Returns the attribute string, escaping values per `policy`.
    ///
    /// Under [`EscapePolicy::Html`] attributes whose name is not a valid HTML
    /// attribute name are skipped.
    pub fn serialize_with(&self, policy: EscapePolicy) -> String {
        self.entries
            .iter()
            .filter(|(name, _)| {
                if policy == EscapePolicy::Html && !is_valid_attribute_name(name) {
                    warn!(name = %name, "skipping invalid attribute name");
                    return false;
                }
                true
            })
            .filter_map(|(name, value)| value.render(name, policy))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn class_list_mut(&mut self) -> &mut Vec<String> {
        let entry = self
            .entries
            .entry(CLASS_ATTRIBUTE.to_string())
            .or_insert_with(|| AttributeValue::List(Vec::new()));
        if !matches!(entry, AttributeValue::List(_)) {
            *entry = AttributeValue::List(Vec::new());
        }
        match entry {
            AttributeValue::List(list) => list,
            _ => unreachable!("class attribute is always a list"),
        }
    }
}

impl fmt::Display for HtmlAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl<K, V> FromIterator<(K, V)> for HtmlAttributes
where
    K: Into<String>,
    V: Into<AttributeValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = HtmlAttributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

impl From<IndexMap<String, AttributeValue>> for HtmlAttributes {
    fn from(map: IndexMap<String, AttributeValue>) -> Self {
        map.into_iter().collect()
    }
}

/// `null` entries count as absent
impl From<IndexMap<String, Option<AttributeValue>>> for HtmlAttributes {
    fn from(map: IndexMap<String, Option<AttributeValue>>) -> Self {
        map.into_iter()
            .filter_map(|(name, value)| value.map(|v| (name, v)))
            .collect()
    }
}

impl From<HtmlAttributes> for IndexMap<String, AttributeValue> {
    fn from(attrs: HtmlAttributes) -> Self {
        attrs.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_class_always_present() {
        let attrs = HtmlAttributes::new();
        assert!(attrs.has("class"));
        assert!(attrs.classes().is_empty());
        assert!(attrs.is_empty());
        assert_eq!(attrs.serialize(), "");
    }

    #[test]
    fn test_add_class_deduplicates() {
        let mut attrs = HtmlAttributes::new();
        attrs.add_class("a").add_class("b").add_class("a");
        assert_eq!(attrs.classes(), ["a", "b"]);
    }

    #[test]
    fn test_add_classes_skips_blank() {
        let mut attrs = HtmlAttributes::new();
        attrs.add_classes(["x", "", "  ", "y", "x"]);
        assert_eq!(attrs.classes(), ["x", "y"]);
    }

    #[test]
    fn test_remove_class() {
        let mut attrs = HtmlAttributes::new();
        attrs.add_classes(["a", "b", "c"]);
        attrs.remove_class("b").remove_class("missing");
        assert_eq!(attrs.classes(), ["a", "c"]);
        assert!(!attrs.has_class("b"));
        assert!(attrs.has_class("c"));
    }

    #[test]
    fn test_set_class_coercion() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("class", "one two  one");
        assert_eq!(attrs.classes(), ["one", "two"]);

        attrs.set("class", vec!["three"]);
        assert_eq!(attrs.classes(), ["three"]);

        attrs.set("class", false);
        assert!(attrs.classes().is_empty());
    }

    #[test]
    fn test_remove_class_attribute_keeps_key() {
        let mut attrs = HtmlAttributes::new();
        attrs.add_class("a").set("id", "t");
        attrs.remove("class").remove("id");
        assert!(attrs.has("class"));
        assert!(!attrs.has("id"));
        assert!(attrs.classes().is_empty());
    }

    #[test]
    fn test_serialize_formats() {
        let mut attrs = HtmlAttributes::new();
        attrs
            .add_class("striped")
            .add_class("wide")
            .set("id", "data")
            .set("hidden", true)
            .set("draggable", false)
            .set("data-tags", vec!["x", "y"]);
        assert_eq!(
            attrs.serialize(),
            r#"class="striped wide" id="data" hidden data-tags="x y""#
        );
        assert_eq!(attrs.to_string(), attrs.serialize());
    }

    #[test]
    fn test_serialize_escaping_is_opt_in() {
        let mut attrs = HtmlAttributes::new();
        attrs.set("title", r#"a "quoted" <b>"#);
        assert_eq!(attrs.serialize(), r#"title="a "quoted" <b>""#);
        assert_eq!(
            attrs.serialize_with(EscapePolicy::Html),
            r#"title="a &quot;quoted&quot; &lt;b&gt;""#
        );
    }

    #[test]
    fn test_escaping_skips_invalid_names() {
        let mut attrs = HtmlAttributes::new();
        attrs
            .add_class("c")
            .set("x\" onclick=\"evil", "v")
            .set("data-ok", "1");
        assert_eq!(
            attrs.serialize_with(EscapePolicy::Html),
            r#"class="c" data-ok="1""#
        );
        // raw output stays verbatim
        assert!(attrs.serialize().contains("onclick"));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = HtmlAttributes::new();
        original.add_class("a");
        let mut copy = original.clone();
        copy.add_class("b").set("id", "copy");
        assert_eq!(original.classes(), ["a"]);
        assert!(!original.has("id"));
    }

    #[test]
    fn test_deserialize_from_map() {
        let attrs: HtmlAttributes =
            serde_json::from_str(r#"{"id": "t", "colspan": 2, "class": "a b a", "open": true}"#)
                .unwrap();
        assert_eq!(attrs.classes(), ["a", "b"]);
        assert_eq!(attrs.get("colspan"), Some(&AttributeValue::Text("2".into())));
        assert_eq!(attrs.get("open").and_then(AttributeValue::as_bool), Some(true));
        // class keeps its leading position
        assert_eq!(attrs.iter().next().map(|(k, _)| k), Some("class"));
    }

    #[test]
    fn test_deserialize_null_is_absent() {
        let attrs: HtmlAttributes =
            serde_json::from_str(r#"{"title": null, "id": "x", "class": null}"#).unwrap();
        assert!(!attrs.has("title"));
        assert_eq!(attrs.get("id").and_then(AttributeValue::as_str), Some("x"));
        assert!(attrs.has("class"));
        assert!(attrs.classes().is_empty());
    }
}
