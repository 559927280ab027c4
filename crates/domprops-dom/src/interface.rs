//! DOM Interfaces
//!
//! An interface is a named list of members plus a parent interface and
//! mixins. Property lookup walks from the most derived interface up.

use crate::reflect::Reflect;

/// Member of an interface
#[derive(Debug)]
pub struct Member {
    /// IDL attribute name, e.g. `srcset`
    pub name: &'static str,
    pub kind: MemberKind,
}

/// How a member produces its value
#[derive(Debug)]
pub enum MemberKind {
    /// Reflects a content attribute
    Reflect { attribute: &'static str, rule: Reflect },
    /// Computed from element state rather than an attribute
    Computed(Computed),
}

/// Computed member values
#[derive(Debug, Clone, Copy)]
pub enum Computed {
    /// Always null on a detached element (form owner, content document, ...)
    Null,
    Bool(bool),
    Long(i64),
    Double(f64),
    Str(&'static str),
    /// Platform object of the given interface
    Object(&'static str),
    TagName,
    LocalName,
    NamespaceUri,
}

pub(crate) const fn reflect(name: &'static str, attribute: &'static str, rule: Reflect) -> Member {
    Member {
        name,
        kind: MemberKind::Reflect { attribute, rule },
    }
}

pub(crate) const fn computed(name: &'static str, value: Computed) -> Member {
    Member {
        name,
        kind: MemberKind::Computed(value),
    }
}

/// A DOM interface
#[derive(Debug)]
pub struct Interface {
    pub name: &'static str,
    pub parent: Option<&'static Interface>,
    pub mixins: &'static [&'static [Member]],
    pub members: &'static [Member],
}

impl Interface {
    /// Find a member by exact (case-sensitive) name
    pub fn member(&'static self, name: &str) -> Option<&'static Member> {
        let mut current = Some(self);
        while let Some(interface) = current {
            if let Some(member) = interface.own_member(name) {
                return Some(member);
            }
            current = interface.parent;
        }
        None
    }

    fn own_member(&'static self, name: &str) -> Option<&'static Member> {
        self.members
            .iter()
            .chain(self.mixins.iter().flat_map(|mixin| mixin.iter()))
            .find(|member| member.name == name)
    }

    /// Names of all members visible on this interface, most derived first
    pub fn member_names(&'static self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut current = Some(self);
        while let Some(interface) = current {
            let own = interface
                .members
                .iter()
                .chain(interface.mixins.iter().flat_map(|mixin| mixin.iter()));
            for member in own {
                if !names.contains(&member.name) {
                    names.push(member.name);
                }
            }
            current = interface.parent;
        }
        names
    }

    /// Check if this interface is `name` or inherits from it
    pub fn inherits(&'static self, name: &str) -> bool {
        let mut current = Some(self);
        while let Some(interface) = current {
            if interface.name == name {
                return true;
            }
            current = interface.parent;
        }
        false
    }
}
