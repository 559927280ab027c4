//! DOMStringMap (dataset)
//!
//! Read-only view of an element's `data-*` attributes keyed by camelCase
//! name, and the conversions between the two forms.

use std::collections::BTreeMap;

use crate::attributes::NamedNodeMap;

pub use domprops_refdata::{to_camel_case, to_kebab_case};

/// DOMStringMap snapshot of `data-*` attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMStringMap {
    data: BTreeMap<String, String>,
}

impl DOMStringMap {
    /// Collect the `data-*` attributes of an attribute map
    pub fn from_attributes(attrs: &NamedNodeMap) -> Self {
        let data = attrs
            .iter()
            .filter_map(|attr| {
                let key = attr.name.strip_prefix("data-")?;
                Some((to_camel_case(key), attr.value.clone()))
            })
            .collect();
        Self { data }
    }

    /// Value by camelCase key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn has(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Attribute name for a dataset key
    pub fn to_attribute_name(key: &str) -> String {
        format!("data-{}", to_kebab_case(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_attributes() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("data-user-id", "123");
        attrs.set("data-active", "true");
        attrs.set("class", "ignored");

        let map = DOMStringMap::from_attributes(&attrs);

        assert_eq!(map.get("userId"), Some("123"));
        assert_eq!(map.get("active"), Some("true"));
        assert!(!map.has("class"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["active", "userId"]);
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("user-id"), "userId");
        assert_eq!(to_camel_case("first-name"), "firstName");
        assert_eq!(to_camel_case("simple"), "simple");
        assert_eq!(to_camel_case("a-1"), "a-1");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("userId"), "user-id");
        assert_eq!(DOMStringMap::to_attribute_name("firstName"), "data-first-name");
    }
}
