//! Shared attribute handling for cells, rows and tables

use super::attributes::{AttributeValue, HtmlAttributes};

/// An element that owns an [`HtmlAttributes`] map.
///
/// The provided methods forward to the map and return `&mut Self` so they
/// chain with the element's own setters.
pub trait HtmlEntity {
    fn attributes(&self) -> &HtmlAttributes;

    fn attributes_mut(&mut self) -> &mut HtmlAttributes;

    /// Replace the whole attribute map
    fn set_attributes(&mut self, attributes: HtmlAttributes) -> &mut Self
    where
        Self: Sized,
    {
        *self.attributes_mut() = attributes;
        self
    }

    fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().set(name, value);
        self
    }

    fn add_class(&mut self, class: impl AsRef<str>) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().add_class(class);
        self
    }

    fn add_classes<I, S>(&mut self, classes: I) -> &mut Self
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes_mut().add_classes(classes);
        self
    }

    fn remove_class(&mut self, class: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.attributes_mut().remove_class(class);
        self
    }

    fn has_class(&self, class: &str) -> bool {
        self.attributes().has_class(class)
    }
}
