//! Namespace declaration definitions

use super::{def, Definition};
use crate::info::Types;

pub(super) fn attribute_for(property: &str) -> String {
    match property {
        "xmlnsXLink" => "xmlns:xlink".to_string(),
        _ => property.to_ascii_lowercase(),
    }
}

pub(super) const DEFINITIONS: &[Definition] = &[
    def("xmlns", Types::NONE),
    def("xmlnsXLink", Types::NONE),
];
