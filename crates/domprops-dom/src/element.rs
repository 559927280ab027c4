//! Element - a detached HTML element
//!
//! Holds the local name, the content attributes and the interface that
//! answers property reads.

use crate::attributes::NamedNodeMap;
use crate::dataset::DOMStringMap;
use crate::interface::{Computed, Interface, MemberKind};
use crate::Value;

/// The HTML namespace
pub const HTML_NAMESPACE: &str = "http://www.w3.org/1999/xhtml";

/// HTML element
#[derive(Debug, Clone)]
pub struct Element {
    local_name: String,
    interface: &'static Interface,
    attributes: NamedNodeMap,
}

impl Element {
    pub(crate) fn new(local_name: String, interface: &'static Interface) -> Self {
        Self {
            local_name,
            interface,
            attributes: NamedNodeMap::new(),
        }
    }

    /// Lowercase local name, e.g. `img`
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Uppercase qualified name, e.g. `IMG`
    pub fn tag_name(&self) -> String {
        self.local_name.to_ascii_uppercase()
    }

    /// Most derived interface, e.g. `HTMLImageElement`
    pub fn interface(&self) -> &'static Interface {
        self.interface
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.set(name, value);
    }

    pub fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove_named_item(name);
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    pub fn toggle_attribute(&mut self, name: &str, force: Option<bool>) -> bool {
        self.attributes.toggle(name, force)
    }

    pub fn attributes(&self) -> &NamedNodeMap {
        &self.attributes
    }

    pub fn dataset(&self) -> DOMStringMap {
        DOMStringMap::from_attributes(&self.attributes)
    }

    /// Check whether the element exposes a property
    pub fn has_property(&self, name: &str) -> bool {
        self.interface.member(name).is_some()
    }

    /// Read a property by exact name. `None` means the property is undefined.
    pub fn property(&self, name: &str) -> Option<Value> {
        let member = self.interface.member(name)?;

        let value = match member.kind {
            MemberKind::Reflect { attribute, rule } => rule.read(self.attributes.get(attribute)),
            MemberKind::Computed(computed) => match computed {
                Computed::Null => Value::Null,
                Computed::Bool(b) => Value::Bool(b),
                Computed::Long(n) => Value::Long(n),
                Computed::Double(n) => Value::Double(n),
                Computed::Str(s) => Value::String(s.to_string()),
                Computed::Object(interface) => Value::Object(interface),
                Computed::TagName => Value::String(self.tag_name()),
                Computed::LocalName => Value::String(self.local_name.clone()),
                Computed::NamespaceUri => Value::String(HTML_NAMESPACE.to_string()),
            },
        };

        Some(value)
    }

    /// All property names visible on the element
    pub fn property_names(&self) -> Vec<&'static str> {
        self.interface.member_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::{HTML_IMAGE_ELEMENT, HTML_INPUT_ELEMENT};

    fn img() -> Element {
        Element::new("img".to_string(), &HTML_IMAGE_ELEMENT)
    }

    #[test]
    fn test_names() {
        let element = img();
        assert_eq!(element.local_name(), "img");
        assert_eq!(element.tag_name(), "IMG");
        assert_eq!(element.property("tagName"), Some(Value::String("IMG".into())));
        assert_eq!(element.property("namespaceURI"), Some(Value::String(HTML_NAMESPACE.into())));
    }

    #[test]
    fn test_reflected_property_follows_attribute() {
        let mut element = img();
        assert_eq!(element.property("srcset"), Some(Value::String(String::new())));

        element.set_attribute("SRCSET", "a.png 2x");
        assert_eq!(element.property("srcset"), Some(Value::String("a.png 2x".into())));

        element.remove_attribute("srcset");
        assert_eq!(element.property("srcset"), Some(Value::String(String::new())));
    }

    #[test]
    fn test_undefined_property() {
        let element = img();
        assert_eq!(element.property("srcSet"), None);
        assert_eq!(element.property("fooBar"), None);
        assert!(!element.has_property("hspaceX"));
    }

    #[test]
    fn test_inherited_properties() {
        let element = img();
        assert_eq!(element.property("autocapitalize"), Some(Value::String(String::new())));
        assert_eq!(element.property("ariaLabel"), Some(Value::Null));
        assert_eq!(element.property("dataset"), Some(Value::Object("DOMStringMap")));
        assert!(element.property_names().contains(&"className"));
    }

    #[test]
    fn test_boolean_reflection() {
        let mut element = Element::new("input".to_string(), &HTML_INPUT_ELEMENT);
        assert_eq!(element.property("required"), Some(Value::Bool(false)));
        assert!(element.toggle_attribute("required", None));
        assert_eq!(element.property("required"), Some(Value::Bool(true)));
        assert_eq!(element.property("type"), Some(Value::String("text".into())));
    }

    #[test]
    fn test_dataset() {
        let mut element = img();
        element.set_attribute("data-user-id", "7");
        assert_eq!(element.dataset().get("userId"), Some("7"));
    }
}
