//! dom-props live DOM
//!
//! A small DOM that can create any HTML element by tag name and read its
//! properties the way a browser exposes them: content-attribute
//! reflection, computed members, the ARIA mixin and `dataset`.

mod aria;
mod attributes;
mod dataset;
mod document;
mod element;
mod html;
mod interface;
mod reflect;
mod value;

pub use aria::{is_id_reference, ARIA_MIXIN, ID_REFERENCE_ATTRIBUTES};
pub use attributes::{Attr, NamedNodeMap};
pub use dataset::{to_camel_case, to_kebab_case, DOMStringMap};
pub use document::{is_valid_custom_element_name, Document};
pub use element::{Element, HTML_NAMESPACE};
pub use html::interface_for;
pub use interface::{Computed, Interface, Member, MemberKind};
pub use reflect::{parse_float, parse_integer, Enumerated, Reflect};
pub use value::Value;

/// DOM errors
#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("Invalid character in element name {0:?}")]
    InvalidCharacter(String),

    #[error("Element name is empty")]
    EmptyName,
}
