//! ARIA Reflection
//!
//! The ARIAMixin members every element carries: `role` and the `aria-*`
//! attributes as nullable strings, plus element-reference properties.

use crate::interface::{computed, reflect, Computed, Member};
use crate::reflect::Reflect;

const S: Reflect = Reflect::NullableString;

/// ARIAMixin members
pub const ARIA_MIXIN: &[Member] = &[
    reflect("role", "role", S),
    reflect("ariaAtomic", "aria-atomic", S),
    reflect("ariaAutoComplete", "aria-autocomplete", S),
    reflect("ariaBrailleLabel", "aria-braillelabel", S),
    reflect("ariaBrailleRoleDescription", "aria-brailleroledescription", S),
    reflect("ariaBusy", "aria-busy", S),
    reflect("ariaChecked", "aria-checked", S),
    reflect("ariaColCount", "aria-colcount", S),
    reflect("ariaColIndex", "aria-colindex", S),
    reflect("ariaColIndexText", "aria-colindextext", S),
    reflect("ariaColSpan", "aria-colspan", S),
    reflect("ariaCurrent", "aria-current", S),
    reflect("ariaDescription", "aria-description", S),
    reflect("ariaDisabled", "aria-disabled", S),
    reflect("ariaExpanded", "aria-expanded", S),
    reflect("ariaHasPopup", "aria-haspopup", S),
    reflect("ariaHidden", "aria-hidden", S),
    reflect("ariaInvalid", "aria-invalid", S),
    reflect("ariaKeyShortcuts", "aria-keyshortcuts", S),
    reflect("ariaLabel", "aria-label", S),
    reflect("ariaLevel", "aria-level", S),
    reflect("ariaLive", "aria-live", S),
    reflect("ariaModal", "aria-modal", S),
    reflect("ariaMultiLine", "aria-multiline", S),
    reflect("ariaMultiSelectable", "aria-multiselectable", S),
    reflect("ariaOrientation", "aria-orientation", S),
    reflect("ariaPlaceholder", "aria-placeholder", S),
    reflect("ariaPosInSet", "aria-posinset", S),
    reflect("ariaPressed", "aria-pressed", S),
    reflect("ariaReadOnly", "aria-readonly", S),
    reflect("ariaRelevant", "aria-relevant", S),
    reflect("ariaRequired", "aria-required", S),
    reflect("ariaRoleDescription", "aria-roledescription", S),
    reflect("ariaRowCount", "aria-rowcount", S),
    reflect("ariaRowIndex", "aria-rowindex", S),
    reflect("ariaRowIndexText", "aria-rowindextext", S),
    reflect("ariaRowSpan", "aria-rowspan", S),
    reflect("ariaSelected", "aria-selected", S),
    reflect("ariaSetSize", "aria-setsize", S),
    reflect("ariaSort", "aria-sort", S),
    reflect("ariaValueMax", "aria-valuemax", S),
    reflect("ariaValueMin", "aria-valuemin", S),
    reflect("ariaValueNow", "aria-valuenow", S),
    reflect("ariaValueText", "aria-valuetext", S),
    // Element references resolve to elements, which a detached element has none of
    computed("ariaActiveDescendantElement", Computed::Null),
    computed("ariaControlsElements", Computed::Null),
    computed("ariaDescribedByElements", Computed::Null),
    computed("ariaDetailsElements", Computed::Null),
    computed("ariaErrorMessageElements", Computed::Null),
    computed("ariaFlowToElements", Computed::Null),
    computed("ariaLabelledByElements", Computed::Null),
    computed("ariaOwnsElements", Computed::Null),
];

/// ARIA attributes whose value is a list of element IDs
pub const ID_REFERENCE_ATTRIBUTES: &[&str] = &[
    "aria-activedescendant",
    "aria-controls",
    "aria-describedby",
    "aria-details",
    "aria-errormessage",
    "aria-flowto",
    "aria-labelledby",
    "aria-owns",
];

/// Check whether an ARIA attribute refers to other elements by ID
pub fn is_id_reference(attribute: &str) -> bool {
    ID_REFERENCE_ATTRIBUTES.contains(&attribute)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::MemberKind;

    #[test]
    fn test_reflected_attributes_are_aria() {
        for member in ARIA_MIXIN {
            if let MemberKind::Reflect { attribute, .. } = member.kind {
                assert!(attribute == "role" || attribute.starts_with("aria-"), "{attribute}");
            }
        }
    }

    #[test]
    fn test_id_references_have_element_properties() {
        assert!(is_id_reference("aria-activedescendant"));
        assert!(!is_id_reference("aria-label"));
        assert!(ARIA_MIXIN.iter().any(|m| m.name == "ariaActiveDescendantElement"));
        assert!(!ARIA_MIXIN.iter().any(|m| m.name == "ariaActiveDescendant"));
    }
}
