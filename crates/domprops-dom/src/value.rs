//! Property values
//!
//! What reading a property off an element yields. Absence of a property is
//! `None` at the call site, never a `Value`.

use serde::Serialize;
use std::fmt;

/// Value of an element property
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Value {
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    String(String),
    /// DOMTokenList contents
    TokenList(Vec<String>),
    /// Platform object, identified by interface name
    Object(&'static str),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Long(n) => write!(f, "{n}"),
            Self::Double(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::TokenList(tokens) => write!(f, "DOMTokenList({})", tokens.join(" ")),
            Self::Object(name) => write!(f, "[object {name}]"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Long(-1).as_long(), Some(-1));
        assert!(Value::Null.is_null());
        assert_eq!(Value::Null.as_str(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Object("CSSStyleDeclaration").to_string(), "[object CSSStyleDeclaration]");
        assert_eq!(Value::TokenList(vec!["a".into(), "b".into()]).to_string(), "DOMTokenList(a b)");
        assert_eq!(Value::String("".into()).to_string(), "\"\"");
    }
}
