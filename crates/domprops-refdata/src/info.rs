//! Property Info
//!
//! What the lookup knows about one attribute: its canonical property name
//! and how its value is typed.

use serde::Serialize;

use crate::space::Space;

/// Value type flags for a definition, stored as a small bitset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Types(u16);

impl Types {
    pub const NONE: Types = Types(0);
    pub const BOOLEAN: Types = Types(1 << 0);
    pub const BOOLEANISH: Types = Types(1 << 1);
    pub const OVERLOADED_BOOLEAN: Types = Types(1 << 2);
    pub const NUMBER: Types = Types(1 << 3);
    pub const SPACE_SEPARATED: Types = Types(1 << 4);
    pub const COMMA_SEPARATED: Types = Types(1 << 5);
    pub const COMMA_OR_SPACE_SEPARATED: Types = Types(1 << 6);
    pub const MUST_USE_PROPERTY: Types = Types(1 << 7);

    /// Union of two flag sets
    pub const fn with(self, other: Types) -> Types {
        Types(self.0 | other.0)
    }

    /// Check if every flag in `other` is set
    pub const fn contains(self, other: Types) -> bool {
        self.0 & other.0 == other.0 && other.0 != 0
    }
}

/// Lookup result for a single attribute or property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Info {
    /// Content attribute name, e.g. `accept-charset`
    pub attribute: String,
    /// Canonical property name, e.g. `acceptCharset`
    pub property: String,
    /// Space the definition came from (`None` for unknown values)
    pub space: Option<Space>,
    pub boolean: bool,
    pub booleanish: bool,
    pub overloaded_boolean: bool,
    pub number: bool,
    pub comma_separated: bool,
    pub space_separated: bool,
    pub comma_or_space_separated: bool,
    pub must_use_property: bool,
    /// Whether the lookup recognized the value
    pub defined: bool,
}

impl Info {
    /// Info for a value the lookup does not know
    pub fn undefined(value: &str) -> Self {
        Self {
            attribute: value.to_string(),
            property: value.to_string(),
            space: None,
            boolean: false,
            booleanish: false,
            overloaded_boolean: false,
            number: false,
            comma_separated: false,
            space_separated: false,
            comma_or_space_separated: false,
            must_use_property: false,
            defined: false,
        }
    }

    /// Info for a recognized definition
    pub fn defined(property: impl Into<String>, attribute: impl Into<String>, types: Types, space: Option<Space>) -> Self {
        Self {
            attribute: attribute.into(),
            property: property.into(),
            space,
            boolean: types.contains(Types::BOOLEAN),
            booleanish: types.contains(Types::BOOLEANISH),
            overloaded_boolean: types.contains(Types::OVERLOADED_BOOLEAN),
            number: types.contains(Types::NUMBER),
            comma_separated: types.contains(Types::COMMA_SEPARATED),
            space_separated: types.contains(Types::SPACE_SEPARATED),
            comma_or_space_separated: types.contains(Types::COMMA_OR_SPACE_SEPARATED),
            must_use_property: types.contains(Types::MUST_USE_PROPERTY),
            defined: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_union() {
        let types = Types::NUMBER.with(Types::COMMA_SEPARATED);
        assert!(types.contains(Types::NUMBER));
        assert!(types.contains(Types::COMMA_SEPARATED));
        assert!(!types.contains(Types::BOOLEAN));
        assert!(!Types::NONE.contains(Types::NONE));
    }

    #[test]
    fn test_defined_flags() {
        let info = Info::defined("checked", "checked", Types::BOOLEAN.with(Types::MUST_USE_PROPERTY), Some(Space::Html));
        assert!(info.defined);
        assert!(info.boolean);
        assert!(info.must_use_property);
        assert!(!info.number);
    }

    #[test]
    fn test_undefined() {
        let info = Info::undefined("fooBar");
        assert!(!info.defined);
        assert_eq!(info.attribute, "fooBar");
        assert_eq!(info.property, "fooBar");
        assert_eq!(info.space, None);
    }
}
