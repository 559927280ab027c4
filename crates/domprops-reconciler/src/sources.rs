//! Reconciler inputs
//!
//! Reference data, the attribute lookup and the live DOM sit behind traits
//! so stale or partial datasets can be swapped in.

use domprops_dom::{Document, DomError, Element};
use domprops_refdata::{BundledReferenceData, Info, Schema};

/// Tag and attribute lists
pub trait ReferenceData {
    /// Every known tag, including removed ones
    fn tag_names(&self) -> Vec<String>;

    /// Per-tag attributes; `None` when the tag has no entry
    fn element_attributes(&self, tag: &str) -> Option<Vec<String>>;

    fn global_attributes(&self) -> Vec<String>;

    fn aria_attributes(&self) -> Vec<String>;
}

/// Attribute name to property name oracle
pub trait PropertyLookup {
    /// Schema name used in failure messages
    fn schema_name(&self) -> &str;

    fn find(&self, attribute: &str) -> Info;
}

/// Element created by a [`LiveDom`]
pub trait LiveElement {
    /// Whether reading the property yields something other than undefined
    fn has_property(&self, property: &str) -> bool;
}

/// DOM able to create elements by tag name
pub trait LiveDom {
    type Element: LiveElement;
    type Error: std::fmt::Display;

    fn create_element(&mut self, tag: &str) -> Result<Self::Element, Self::Error>;
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

impl ReferenceData for BundledReferenceData {
    fn tag_names(&self) -> Vec<String> {
        owned(BundledReferenceData::tag_names(self))
    }

    fn element_attributes(&self, tag: &str) -> Option<Vec<String>> {
        BundledReferenceData::element_attributes(self, tag).map(owned)
    }

    fn global_attributes(&self) -> Vec<String> {
        owned(BundledReferenceData::global_attributes(self))
    }

    fn aria_attributes(&self) -> Vec<String> {
        owned(BundledReferenceData::aria_attributes(self))
    }
}

impl PropertyLookup for Schema {
    fn schema_name(&self) -> &str {
        self.name()
    }

    fn find(&self, attribute: &str) -> Info {
        Schema::find(self, attribute)
    }
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn schema_name(&self) -> &str {
        (**self).schema_name()
    }

    fn find(&self, attribute: &str) -> Info {
        (**self).find(attribute)
    }
}

impl LiveElement for Element {
    fn has_property(&self, property: &str) -> bool {
        self.property(property).is_some()
    }
}

impl LiveDom for Document {
    type Element = Element;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<Element, DomError> {
        Document::create_element(self, tag)
    }
}
