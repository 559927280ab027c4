//! Attribute Spaces
//!
//! Each space is a table of property definitions plus the rule that turns
//! a property name into its content attribute name.

mod aria;
mod html;
mod xlink;
mod xml;
mod xmlns;

use serde::Serialize;

use crate::info::Types;

/// Origin of a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Html,
    Aria,
    Xml,
    #[serde(rename = "xlink")]
    XLink,
    Xmlns,
}

/// A single property definition within a space
#[derive(Debug, Clone, Copy)]
pub struct Definition {
    pub property: &'static str,
    pub types: Types,
}

pub(crate) const fn def(property: &'static str, types: Types) -> Definition {
    Definition { property, types }
}

impl Space {
    /// Definitions belonging to this space
    pub fn definitions(self) -> &'static [Definition] {
        match self {
            Self::Html => html::DEFINITIONS,
            Self::Aria => aria::DEFINITIONS,
            Self::Xml => xml::DEFINITIONS,
            Self::XLink => xlink::DEFINITIONS,
            Self::Xmlns => xmlns::DEFINITIONS,
        }
    }

    /// Content attribute name for `property` in this space
    pub fn attribute_for(self, property: &str) -> String {
        match self {
            Self::Html => html::attribute_for(property),
            Self::Aria => aria::attribute_for(property),
            Self::Xml => prefixed("xml:", property, 3),
            Self::XLink => prefixed("xlink:", property, 5),
            Self::Xmlns => xmlns::attribute_for(property),
        }
    }
}

/// `xmlLang` -> `xml:lang`, `xLinkHref` -> `xlink:href`
fn prefixed(prefix: &str, property: &str, skip: usize) -> String {
    let rest = property.get(skip..).unwrap_or_default();
    format!("{prefix}{}", rest.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_transforms() {
        assert_eq!(Space::Html.attribute_for("acceptCharset"), "accept-charset");
        assert_eq!(Space::Html.attribute_for("srcSet"), "srcset");
        assert_eq!(Space::Aria.attribute_for("ariaValueNow"), "aria-valuenow");
        assert_eq!(Space::Aria.attribute_for("role"), "role");
        assert_eq!(Space::Xml.attribute_for("xmlLang"), "xml:lang");
        assert_eq!(Space::XLink.attribute_for("xLinkArcRole"), "xlink:arcrole");
        assert_eq!(Space::Xmlns.attribute_for("xmlnsXLink"), "xmlns:xlink");
    }

    #[test]
    fn test_definitions_unique_per_space() {
        for space in [Space::Html, Space::Aria, Space::Xml, Space::XLink, Space::Xmlns] {
            let mut seen = std::collections::HashSet::new();
            for definition in space.definitions() {
                assert!(seen.insert(definition.property), "{:?} defines {} twice", space, definition.property);
            }
        }
    }
}
