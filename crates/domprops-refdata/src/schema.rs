//! Schema - merged attribute spaces
//!
//! `find` accepts either an attribute (`accept-charset`) or a property
//! (`acceptCharset`) in any case and returns the matching [`Info`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::info::{Info, Types};
use crate::space::Space;

/// Lowercase form used for case-insensitive matching
pub fn normalize(value: &str) -> String {
    value.to_ascii_lowercase()
}

/// Lookup table built from one or more spaces
#[derive(Debug)]
pub struct Schema {
    name: &'static str,
    infos: Vec<Info>,
    /// Normalized attribute and property names to index in `infos`
    normal: HashMap<String, usize>,
}

impl Schema {
    /// Merge spaces; later spaces override earlier ones on conflict
    pub fn from_spaces(name: &'static str, spaces: &[Space]) -> Self {
        let mut schema = Self {
            name,
            infos: Vec::new(),
            normal: HashMap::new(),
        };

        for &space in spaces {
            for definition in space.definitions() {
                let attribute = space.attribute_for(definition.property);
                let info = Info::defined(definition.property, attribute, definition.types, Some(space));
                schema.insert(info);
            }
        }

        tracing::debug!("Built schema {} with {} definitions", name, schema.infos.len());
        schema
    }

    fn insert(&mut self, info: Info) {
        let index = self.infos.len();
        self.normal.insert(normalize(&info.property), index);
        self.normal.insert(normalize(&info.attribute), index);
        self.infos.push(info);
    }

    /// The HTML schema: xml, xlink, xmlns, aria and html spaces
    pub fn html() -> &'static Schema {
        static HTML: OnceLock<Schema> = OnceLock::new();
        HTML.get_or_init(|| {
            Schema::from_spaces("html", &[Space::Xml, Space::XLink, Space::Xmlns, Space::Aria, Space::Html])
        })
    }

    /// Schema name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.infos.len()
    }

    /// Check if the schema has no definitions
    pub fn is_empty(&self) -> bool {
        self.infos.is_empty()
    }

    /// Look up an attribute or property name
    pub fn find(&self, value: &str) -> Info {
        let normal = normalize(value);

        if let Some(&index) = self.normal.get(&normal) {
            return self.infos[index].clone();
        }

        if value.starts_with("data") && is_valid_data_name(value) {
            return data_info(value);
        }

        Info::undefined(value)
    }
}

/// `data` followed by word characters, `-`, `.` or `:`
fn is_valid_data_name(value: &str) -> bool {
    value.len() > 4
        && value[4..]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | ':'))
}

/// Info for `data-*` attributes and `data*` properties
fn data_info(value: &str) -> Info {
    let rest = &value[4..];

    if let Some(attr_rest) = rest.strip_prefix('-') {
        let camel = to_camel_case(attr_rest);
        let mut property = String::from("data");
        let mut chars = camel.chars();
        if let Some(first) = chars.next() {
            property.push(first.to_ascii_uppercase());
            property.push_str(chars.as_str());
        }
        return Info::defined(property, value, Types::NONE, None);
    }

    if has_dash_lowercase(rest) {
        // Not a valid dataset key: keep it verbatim
        return Info::defined(value, value, Types::NONE, None);
    }

    let mut attribute = String::from("data");
    let dashed = to_kebab_case(rest);
    if !dashed.starts_with('-') {
        attribute.push('-');
    }
    attribute.push_str(&dashed);
    Info::defined(value, attribute, Types::NONE, None)
}

/// `user-id` -> `userId`; a dash only capitalizes a following lowercase letter
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(next) if c == '-' && next.is_ascii_lowercase() => {
                result.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => result.push(c),
        }
    }

    result
}

/// `userId` -> `user-id`
pub fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

fn has_dash_lowercase(value: &str) -> bool {
    value
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'-' && pair[1].is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_attribute() {
        let info = Schema::html().find("accept-charset");
        assert!(info.defined);
        assert_eq!(info.property, "acceptCharset");
        assert_eq!(info.space, Some(Space::Html));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(Schema::html().find("SRCSET").property, "srcSet");
        assert_eq!(Schema::html().find("srcset").attribute, "srcset");
        assert_eq!(Schema::html().find("className").attribute, "class");
    }

    #[test]
    fn test_find_aria() {
        let info = Schema::html().find("aria-activedescendant");
        assert!(info.defined);
        assert_eq!(info.property, "ariaActiveDescendant");
        assert_eq!(info.space, Some(Space::Aria));
        assert_eq!(Schema::html().find("role").property, "role");
    }

    #[test]
    fn test_find_data_attribute() {
        let info = Schema::html().find("data-user-id");
        assert!(info.defined);
        assert_eq!(info.property, "dataUserId");
        assert_eq!(info.attribute, "data-user-id");
    }

    #[test]
    fn test_find_data_property() {
        let info = Schema::html().find("dataUserId");
        assert!(info.defined);
        assert_eq!(info.attribute, "data-user-id");
        assert_eq!(info.property, "dataUserId");
    }

    #[test]
    fn test_find_unknown() {
        let info = Schema::html().find("aria-braillelabel");
        assert!(!info.defined);
        assert_eq!(info.property, "aria-braillelabel");
        assert!(!Schema::html().find("").defined);
        assert!(!Schema::html().find("data$x").defined);
        assert!(Schema::html().find("data").defined);
    }

    #[test]
    fn test_data_prefix_is_case_sensitive() {
        assert!(!Schema::html().find("DATA-foo").defined);
        assert!(!Schema::html().find("Data-foo").defined);
        assert_eq!(Schema::html().find("DATA-foo").property, "DATA-foo");
        assert!(Schema::html().find("data-FOO").defined);
    }

    #[test]
    fn test_xml_spaces() {
        assert_eq!(Schema::html().find("xml:lang").property, "xmlLang");
        assert_eq!(Schema::html().find("xlink:href").property, "xLinkHref");
        assert_eq!(Schema::html().find("xmlns:xlink").property, "xmlnsXLink");
    }

    #[test]
    fn test_case_helpers() {
        assert_eq!(to_camel_case("user-id"), "userId");
        assert_eq!(to_camel_case("a-1"), "a-1");
        assert_eq!(to_kebab_case("UserId"), "-user-id");
    }
}
