//! XLink attribute definitions

use super::{def, Definition};
use crate::info::Types;

pub(super) const DEFINITIONS: &[Definition] = &[
    def("xLinkActuate", Types::NONE),
    def("xLinkArcRole", Types::NONE),
    def("xLinkHref", Types::NONE),
    def("xLinkRole", Types::NONE),
    def("xLinkShow", Types::NONE),
    def("xLinkTitle", Types::NONE),
    def("xLinkType", Types::NONE),
];
