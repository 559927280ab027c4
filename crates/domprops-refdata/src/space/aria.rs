//! ARIA attribute definitions

use super::{def, Definition};
use crate::info::Types;

const NONE: Types = Types::NONE;
const BOOLEANISH: Types = Types::BOOLEANISH;
const NUMBER: Types = Types::NUMBER;
const SPACE_SEPARATED: Types = Types::SPACE_SEPARATED;

/// `ariaValueNow` -> `aria-valuenow`; `role` is kept as is
pub(super) fn attribute_for(property: &str) -> String {
    if property == "role" {
        return property.to_string();
    }
    let rest = property.strip_prefix("aria").unwrap_or(property);
    format!("aria-{}", rest.to_ascii_lowercase())
}

pub(super) const DEFINITIONS: &[Definition] = &[
    def("ariaActiveDescendant", NONE),
    def("ariaAtomic", BOOLEANISH),
    def("ariaAutoComplete", NONE),
    def("ariaBusy", BOOLEANISH),
    def("ariaChecked", BOOLEANISH),
    def("ariaColCount", NUMBER),
    def("ariaColIndex", NUMBER),
    def("ariaColSpan", NUMBER),
    def("ariaControls", SPACE_SEPARATED),
    def("ariaCurrent", NONE),
    def("ariaDescribedBy", SPACE_SEPARATED),
    def("ariaDetails", NONE),
    def("ariaDisabled", BOOLEANISH),
    def("ariaDropEffect", SPACE_SEPARATED),
    def("ariaErrorMessage", NONE),
    def("ariaExpanded", BOOLEANISH),
    def("ariaFlowTo", SPACE_SEPARATED),
    def("ariaGrabbed", BOOLEANISH),
    def("ariaHasPopup", NONE),
    def("ariaHidden", BOOLEANISH),
    def("ariaInvalid", NONE),
    def("ariaKeyShortcuts", NONE),
    def("ariaLabel", NONE),
    def("ariaLabelledBy", SPACE_SEPARATED),
    def("ariaLevel", NUMBER),
    def("ariaLive", NONE),
    def("ariaModal", BOOLEANISH),
    def("ariaMultiLine", BOOLEANISH),
    def("ariaMultiSelectable", BOOLEANISH),
    def("ariaOrientation", NONE),
    def("ariaOwns", SPACE_SEPARATED),
    def("ariaPlaceholder", NONE),
    def("ariaPosInSet", NUMBER),
    def("ariaPressed", BOOLEANISH),
    def("ariaReadOnly", BOOLEANISH),
    def("ariaRelevant", NONE),
    def("ariaRequired", BOOLEANISH),
    def("ariaRoleDescription", SPACE_SEPARATED),
    def("ariaRowCount", NUMBER),
    def("ariaRowIndex", NUMBER),
    def("ariaRowSpan", NUMBER),
    def("ariaSelected", BOOLEANISH),
    def("ariaSetSize", NUMBER),
    def("ariaSort", NONE),
    def("ariaValueMax", NUMBER),
    def("ariaValueMin", NUMBER),
    def("ariaValueNow", NUMBER),
    def("ariaValueText", NONE),
    def("role", NONE),
];
