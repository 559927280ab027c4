//! Attribute Reflection
//!
//! How an IDL attribute reads its content attribute: strings, booleans,
//! numbers and enumerated keywords, following the HTML reflection rules.

use crate::Value;

/// Keyword set of an enumerated attribute
#[derive(Debug)]
pub struct Enumerated {
    /// Canonical keywords, lowercase
    pub keywords: &'static [&'static str],
    /// State when the attribute is absent
    pub missing: &'static str,
    /// State when the attribute has an unknown value
    pub invalid: &'static str,
}

impl Enumerated {
    /// Resolve an attribute value to its canonical keyword
    pub fn resolve(&self, value: Option<&str>) -> &'static str {
        match value {
            None => self.missing,
            Some(v) => self
                .keywords
                .iter()
                .find(|keyword| keyword.eq_ignore_ascii_case(v))
                .copied()
                .unwrap_or(self.invalid),
        }
    }
}

/// Reflection rule for a single IDL attribute
#[derive(Debug, Clone, Copy)]
pub enum Reflect {
    /// DOMString, empty when absent
    String,
    /// USVString URL; unresolved since detached elements have no base
    Url,
    /// DOMString?, null when absent
    NullableString,
    /// Presence of the attribute
    Boolean,
    /// `long` with default
    Long(i64),
    /// `long` limited to non-negative numbers, with default
    NonNegativeLong(i64),
    /// `unsigned long` with default
    UnsignedLong(u32),
    /// `unsigned long` limited to non-zero numbers, with default
    PositiveUnsignedLong(u32),
    /// `double` with default
    Double(f64),
    Enumerated(&'static Enumerated),
    /// Enumerated, null when absent
    NullableEnumerated(&'static Enumerated),
    /// DOMTokenList over the attribute's tokens
    TokenList,
}

const MAX_LONG: i64 = 2_147_483_647;

impl Reflect {
    /// Read the IDL value from the content attribute's value
    pub fn read(self, value: Option<&str>) -> Value {
        match self {
            Self::String | Self::Url => Value::String(value.unwrap_or_default().to_string()),
            Self::NullableString => value.map_or(Value::Null, |v| Value::String(v.to_string())),
            Self::Boolean => Value::Bool(value.is_some()),
            Self::Long(default) => Value::Long(
                value
                    .and_then(parse_integer)
                    .filter(|n| (-MAX_LONG - 1..=MAX_LONG).contains(n))
                    .unwrap_or(default),
            ),
            Self::NonNegativeLong(default) => Value::Long(
                value
                    .and_then(parse_integer)
                    .filter(|n| (0..=MAX_LONG).contains(n))
                    .unwrap_or(default),
            ),
            Self::UnsignedLong(default) => Value::Long(
                value
                    .and_then(parse_integer)
                    .filter(|n| (0..=MAX_LONG).contains(n))
                    .unwrap_or(i64::from(default)),
            ),
            Self::PositiveUnsignedLong(default) => Value::Long(
                value
                    .and_then(parse_integer)
                    .filter(|n| (1..=MAX_LONG).contains(n))
                    .unwrap_or(i64::from(default)),
            ),
            Self::Double(default) => Value::Double(value.and_then(parse_float).unwrap_or(default)),
            Self::Enumerated(keywords) => Value::String(keywords.resolve(value).to_string()),
            Self::NullableEnumerated(keywords) => match value {
                None => Value::Null,
                Some(_) => match keywords.resolve(value) {
                    "" => Value::Null,
                    keyword => Value::String(keyword.to_string()),
                },
            },
            Self::TokenList => Value::TokenList(
                value
                    .unwrap_or_default()
                    .split_ascii_whitespace()
                    .map(String::from)
                    .collect(),
            ),
        }
    }
}

/// Rules for parsing integers: leading whitespace, optional sign, digits,
/// trailing garbage ignored
pub fn parse_integer(input: &str) -> Option<i64> {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Rules for parsing floating-point numbers: longest valid prefix
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            end = frac_end;
            has_digits = true;
        }
    }

    if !has_digits {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'-' | b'+') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}
