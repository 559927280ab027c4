//! Document - element factory

use crate::element::Element;
use crate::html::{interface_for, HTML_ELEMENT, HTML_UNKNOWN_ELEMENT};
use crate::DomError;

/// HTML document that creates detached elements
#[derive(Debug, Default)]
pub struct Document {
    created: usize,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an element by tag name, like `document.createElement`
    pub fn create_element(&mut self, name: &str) -> Result<Element, DomError> {
        validate_name(name)?;

        let local_name = name.to_ascii_lowercase();
        let mut interface = interface_for(&local_name);
        if std::ptr::eq(interface, &HTML_UNKNOWN_ELEMENT) && is_valid_custom_element_name(&local_name) {
            interface = &HTML_ELEMENT;
        }

        tracing::debug!("Created <{}> as {}", local_name, interface.name);
        self.created += 1;
        Ok(Element::new(local_name, interface))
    }

    /// Number of elements created so far
    pub fn created_count(&self) -> usize {
        self.created
    }
}

/// Element names start with an ASCII letter and contain no whitespace,
/// `/`, `>` or NUL
fn validate_name(name: &str) -> Result<(), DomError> {
    let first = name.chars().next().ok_or(DomError::EmptyName)?;
    let bad = |c: char| c.is_ascii_whitespace() || matches!(c, '/' | '>' | '\0');

    if !first.is_ascii_alphabetic() || name.chars().any(bad) {
        return Err(DomError::InvalidCharacter(name.to_string()));
    }
    Ok(())
}

/// Check if a lowercase name is a valid custom element name
pub fn is_valid_custom_element_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "annotation-xml",
        "color-profile",
        "font-face",
        "font-face-src",
        "font-face-uri",
        "font-face-format",
        "font-face-name",
        "missing-glyph",
    ];

    name.contains('-')
        && name.starts_with(|c: char| c.is_ascii_lowercase())
        && !RESERVED.contains(&name)
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.') || !c.is_ascii())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_known_element() {
        let mut doc = Document::new();
        let element = doc.create_element("IMG").unwrap();
        assert_eq!(element.local_name(), "img");
        assert_eq!(element.interface().name, "HTMLImageElement");
        assert_eq!(doc.created_count(), 1);
    }

    #[test]
    fn test_create_unknown_and_custom() {
        let mut doc = Document::new();
        assert_eq!(doc.create_element("blink").unwrap().interface().name, "HTMLUnknownElement");
        assert_eq!(doc.create_element("my-widget").unwrap().interface().name, "HTMLElement");
        assert_eq!(doc.create_element("font-face").unwrap().interface().name, "HTMLUnknownElement");
    }

    #[test]
    fn test_invalid_names() {
        let mut doc = Document::new();
        assert!(matches!(doc.create_element(""), Err(DomError::EmptyName)));
        assert!(matches!(doc.create_element("1abc"), Err(DomError::InvalidCharacter(_))));
        assert!(matches!(doc.create_element("a b"), Err(DomError::InvalidCharacter(_))));
        assert_eq!(doc.created_count(), 0);
    }

    #[test]
    fn test_custom_element_names() {
        assert!(is_valid_custom_element_name("x-foo"));
        assert!(is_valid_custom_element_name("math-α"));
        assert!(!is_valid_custom_element_name("foo"));
        assert!(!is_valid_custom_element_name("-foo"));
        assert!(!is_valid_custom_element_name("missing-glyph"));
        assert!(!is_valid_custom_element_name("x-Foo"));
    }
}
