//! ARIA Attributes
//!
//! WAI-ARIA 1.2 states and properties, as content attribute names.
//!
//! The list is pinned to the 1.2 recommendation, the same version the
//! `aria` lookup space and the DOM's ARIAMixin describe. ARIA 1.3 drafts
//! (`aria-description`, `aria-braillelabel`, `aria-brailleroledescription`,
//! `aria-colindextext`, `aria-rowindextext`) are not listed. Adding them
//! here without updating the lookup reports each one as stale data on
//! every tag, which is the drift the reconciler exists to surface.

/// All ARIA state and property attributes
pub const ARIA_ATTRIBUTES: &[&str] = &[
    "aria-activedescendant",
    "aria-atomic",
    "aria-autocomplete",
    "aria-busy",
    "aria-checked",
    "aria-colcount",
    "aria-colindex",
    "aria-colspan",
    "aria-controls",
    "aria-current",
    "aria-describedby",
    "aria-details",
    "aria-disabled",
    "aria-dropeffect",
    "aria-errormessage",
    "aria-expanded",
    "aria-flowto",
    "aria-grabbed",
    "aria-haspopup",
    "aria-hidden",
    "aria-invalid",
    "aria-keyshortcuts",
    "aria-label",
    "aria-labelledby",
    "aria-level",
    "aria-live",
    "aria-modal",
    "aria-multiline",
    "aria-multiselectable",
    "aria-orientation",
    "aria-owns",
    "aria-placeholder",
    "aria-posinset",
    "aria-pressed",
    "aria-readonly",
    "aria-relevant",
    "aria-required",
    "aria-roledescription",
    "aria-rowcount",
    "aria-rowindex",
    "aria-rowspan",
    "aria-selected",
    "aria-setsize",
    "aria-sort",
    "aria-valuemax",
    "aria-valuemin",
    "aria-valuenow",
    "aria-valuetext",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_prefixed() {
        assert!(ARIA_ATTRIBUTES.iter().all(|attr| attr.starts_with("aria-")));
        assert!(ARIA_ATTRIBUTES.contains(&"aria-activedescendant"));
    }
}
