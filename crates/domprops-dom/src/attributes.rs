//! Element Attributes
//!
//! Content attributes of an HTML element. Names are ASCII-lowercased on
//! every access, as for elements in the HTML namespace.

use std::collections::HashMap;

/// Named node map (attribute collection)
#[derive(Debug, Clone, Default)]
pub struct NamedNodeMap {
    attributes: Vec<Attr>,
    by_name: HashMap<String, usize>,
}

/// Single attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

impl Attr {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

impl NamedNodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Attribute by index, in insertion order
    pub fn item(&self, index: usize) -> Option<&Attr> {
        self.attributes.get(index)
    }

    /// Attribute by name
    pub fn get_named_item(&self, name: &str) -> Option<&Attr> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .and_then(|&i| self.attributes.get(i))
    }

    /// Attribute value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_named_item(name).map(|a| a.value.as_str())
    }

    /// Insert or replace an attribute, returning the replaced one
    pub fn set_named_item(&mut self, attr: Attr) -> Option<Attr> {
        if let Some(&index) = self.by_name.get(&attr.name) {
            return Some(std::mem::replace(&mut self.attributes[index], attr));
        }
        self.by_name.insert(attr.name.clone(), self.attributes.len());
        self.attributes.push(attr);
        None
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.set_named_item(Attr::new(name, value));
    }

    /// Remove an attribute by name
    pub fn remove_named_item(&mut self, name: &str) -> Option<Attr> {
        let index = self.by_name.remove(&name.to_ascii_lowercase())?;
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.attributes.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(&name.to_ascii_lowercase())
    }

    /// Toggle a boolean attribute; returns whether it is now present
    pub fn toggle(&mut self, name: &str, force: Option<bool>) -> bool {
        let present = self.contains(name);
        match force.unwrap_or(!present) {
            true => {
                if !present {
                    self.set(name, "");
                }
                true
            }
            false => {
                self.remove_named_item(name);
                false
            }
        }
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> Vec<&str> {
        self.attributes.iter().map(|a| a.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_attribute() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("class", "btn");
        attrs.set("ID", "submit");

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some("btn"));
        assert_eq!(attrs.get("id"), Some("submit"));
        assert_eq!(attrs.names(), vec!["class", "id"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        let old = attrs.set_named_item(Attr::new("A", "3"));

        assert_eq!(old.map(|a| a.value), Some("1".to_string()));
        assert_eq!(attrs.item(0).map(|a| a.value.as_str()), Some("3"));
    }

    #[test]
    fn test_remove_reindexes() {
        let mut attrs = NamedNodeMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("c", "3");

        assert!(attrs.remove_named_item("b").is_some());
        assert!(!attrs.contains("b"));
        assert_eq!(attrs.get("c"), Some("3"));
        assert!(attrs.remove_named_item("b").is_none());
    }

    #[test]
    fn test_toggle_attribute() {
        let mut attrs = NamedNodeMap::new();

        assert!(attrs.toggle("disabled", None));
        assert!(attrs.contains("disabled"));
        assert!(attrs.toggle("disabled", Some(true)));
        assert!(!attrs.toggle("disabled", None));
        assert!(!attrs.contains("disabled"));
        assert!(!attrs.toggle("disabled", Some(false)));
    }
}
