//! dom-props reference data
//!
//! Static HTML and ARIA reference tables and the attribute-to-property
//! lookup used to cross-check a live DOM.
//!
//! - [`HTML_TAG_NAMES`]: every known tag name
//! - [`HTML_ELEMENT_ATTRIBUTES`]: per-tag and global attributes
//! - [`ARIA_ATTRIBUTES`]: ARIA states and properties
//! - [`Schema`]: attribute/property lookup

mod aria;
mod attributes;
mod info;
mod schema;
mod space;
mod tags;

pub use aria::ARIA_ATTRIBUTES;
pub use attributes::{element_attributes, global_attributes, GLOBAL_KEY, HTML_ELEMENT_ATTRIBUTES};
pub use info::{Info, Types};
pub use schema::{normalize, to_camel_case, to_kebab_case, Schema};
pub use space::{Definition, Space};
pub use tags::{is_known_tag, HTML_TAG_NAMES};

/// The bundled datasets as one value
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledReferenceData;

impl BundledReferenceData {
    pub fn tag_names(&self) -> &'static [&'static str] {
        HTML_TAG_NAMES
    }

    pub fn element_attributes(&self, tag: &str) -> Option<&'static [&'static str]> {
        element_attributes(tag)
    }

    pub fn global_attributes(&self) -> &'static [&'static str] {
        global_attributes()
    }

    pub fn aria_attributes(&self) -> &'static [&'static str] {
        ARIA_ATTRIBUTES
    }
}
