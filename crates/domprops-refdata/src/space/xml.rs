//! XML attribute definitions (`xml:lang` and friends)

use super::{def, Definition};
use crate::info::Types;

pub(super) const DEFINITIONS: &[Definition] = &[
    def("xmlLang", Types::NONE),
    def("xmlBase", Types::NONE),
    def("xmlSpace", Types::NONE),
];
