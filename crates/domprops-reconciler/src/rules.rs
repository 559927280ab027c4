//! Exception Rules
//!
//! One ordered table of exemptions and property-name corrections. A pair
//! is classified by the matching rule with the highest-precedence
//! category; ties go to the earlier rule.

use serde::Serialize;

use Category::{AttrOnly, Correction, NotYetImplemented, Removed};
use Group::{Aria, Element, Global};
use Scope::{AnyTag, Tags};

/// Elements dropped from the tag list before anything is created
pub const REMOVED_ELEMENTS: &[(&str, &str)] = &[
    ("applet", "removed from browsers"),
    ("basefont", "removed from browsers"),
    ("isindex", "bad data"),
];

/// Check if a tag is in the removed-elements set
pub fn is_removed_element(tag: &str) -> bool {
    REMOVED_ELEMENTS.iter().any(|(name, _)| *name == tag)
}

/// Which attribute list a check comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Per-tag attributes
    Element,
    /// Global attributes, checked on every tag
    Global,
    /// ARIA attributes, checked on every tag
    Aria,
}

impl Group {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Global => "global",
            Self::Aria => "aria",
        }
    }
}

/// What a rule says about a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "category", content = "property")]
pub enum Category {
    /// Attribute no longer has a property in any engine
    Removed,
    /// Attribute works, but has no reflecting property
    AttrOnly,
    /// Property is specified but not shipped yet
    NotYetImplemented,
    /// Property exists under a different name than the lookup's
    Correction(&'static str),
}

impl Category {
    /// Lower ranks win
    fn rank(self) -> u8 {
        match self {
            Self::Removed => 0,
            Self::AttrOnly => 1,
            Self::NotYetImplemented => 2,
            Self::Correction(_) => 3,
        }
    }

    /// Whether the category exempts a pair from the existence check
    pub fn is_exemption(self) -> bool {
        !matches!(self, Self::Correction(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Confirmed,
    /// Kept as recorded, but the reason is doubtful
    Uncertain,
}

/// Tags a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    AnyTag,
    Tags(&'static [&'static str]),
}

impl Scope {
    pub fn contains(self, tag: &str) -> bool {
        match self {
            Self::AnyTag => true,
            Self::Tags(tags) => tags.contains(&tag),
        }
    }
}

/// Single exception rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub group: Group,
    pub scope: Scope,
    pub attributes: &'static [&'static str],
    pub category: Category,
    pub confidence: Confidence,
    pub note: &'static str,
}

impl Rule {
    pub const fn new(group: Group, scope: Scope, attributes: &'static [&'static str], category: Category) -> Self {
        Self {
            group,
            scope,
            attributes,
            category,
            confidence: Confidence::Confirmed,
            note: "",
        }
    }

    pub const fn note(mut self, note: &'static str) -> Self {
        self.note = note;
        self
    }

    pub const fn uncertain(mut self, note: &'static str) -> Self {
        self.confidence = Confidence::Uncertain;
        self.note = note;
        self
    }

    pub fn matches(&self, group: Group, tag: &str, attribute: &str) -> bool {
        self.group == group && self.scope.contains(tag) && self.attributes.contains(&attribute)
    }
}

/// Result of classifying a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition<'a> {
    /// Exempt from the existence check
    Skip(&'a Rule),
    /// Check the property; `correction` replaces the lookup's property name
    Check { correction: Option<&'static str> },
}

/// Ordered collection of rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled exception tables
    pub fn standard() -> Self {
        Self { rules: STANDARD.to_vec() }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn with(mut self, rule: Rule) -> Self {
        self.push(rule);
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Highest-precedence rule matching the pair
    pub fn find(&self, group: Group, tag: &str, attribute: &str) -> Option<&Rule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(group, tag, attribute))
            .min_by_key(|rule| rule.category.rank())
    }

    pub fn classify(&self, group: Group, tag: &str, attribute: &str) -> Disposition<'_> {
        match self.find(group, tag, attribute) {
            Some(rule) => match rule.category {
                Category::Correction(property) => Disposition::Check {
                    correction: Some(property),
                },
                _ => Disposition::Skip(rule),
            },
            None => Disposition::Check { correction: None },
        }
    }
}

const TABLE_PARTS: &[&str] = &["thead", "tr", "th", "td", "tbody", "tfoot", "col", "colgroup"];

static STANDARD: &[Rule] = &[
    // Element attributes: removed
    Rule::new(Element, Tags(TABLE_PARTS), &["char", "charoff"], Removed),
    Rule::new(Element, Tags(&["form"]), &["accept"], Removed),
    Rule::new(Element, Tags(&["area"]), &["type"], Removed),
    Rule::new(Element, Tags(&["head"]), &["profile"], Removed),
    Rule::new(Element, Tags(&["html"]), &["manifest"], Removed),
    Rule::new(Element, Tags(&["img"]), &["hspace", "vspace"], Removed),
    Rule::new(Element, Tags(&["input"]), &["ismap"], Removed),
    Rule::new(Element, Tags(&["object"]), &["hspace", "vspace", "typemustmatch"], Removed),
    Rule::new(Element, Tags(&["details"]), &["name"], Removed).note("firefox has removed this"),
    Rule::new(Element, Tags(&["link"]), &["color"], Removed).uncertain("not sure if this was ever an attr"),
    Rule::new(Element, Tags(&["template"]), &["shadowrootdelegatesfocus"], Removed).uncertain("bad data"),
    Rule::new(Element, Tags(&["object"]), &["classid"], Removed)
        .uncertain("no engine exposes the corrected property"),
    Rule::new(Element, Tags(&["iframe"]), &["allowusermedia"], Removed)
        .uncertain("no engine exposes the corrected property"),
    Rule::new(Element, Tags(&["area"]), &["hreflang"], Removed).note("dropped from HTMLAreaElement"),
    // Element attributes: not yet implemented
    Rule::new(Element, Tags(&["button", "input"]), &["popovertargetaction"], NotYetImplemented),
    Rule::new(Element, Tags(&["iframe"]), &["loading", "allowpaymentrequest", "fetchpriority"], NotYetImplemented),
    Rule::new(Element, Tags(&["script"]), &["fetchpriority", "blocking"], NotYetImplemented),
    Rule::new(Element, Tags(&["link"]), &["blocking", "fetchpriority"], NotYetImplemented),
    Rule::new(Element, Tags(&["style"]), &["blocking"], NotYetImplemented),
    Rule::new(Element, Tags(&["img"]), &["fetchpriority"], NotYetImplemented),
    // Element attributes: attribute only
    Rule::new(Element, Tags(&["template"]), &["shadowrootmode"], AttrOnly).note("prop exists, but no effect"),
    Rule::new(Element, Tags(&["script"]), &["language"], AttrOnly),
    Rule::new(Element, Tags(&["meta"]), &["charset"], AttrOnly)
        .uncertain("charset correction has no property on meta"),
    // Element attributes: corrections
    Rule::new(Element, AnyTag, &["allowfullscreen"], Correction("allowFullscreen")),
    Rule::new(Element, AnyTag, &["allowusermedia"], Correction("allowUsermedia")),
    Rule::new(Element, AnyTag, &["autoplay"], Correction("autoplay")),
    Rule::new(Element, AnyTag, &["playsinline"], Correction("playsInline")),
    Rule::new(Element, AnyTag, &["charset"], Correction("charset")),
    Rule::new(Element, AnyTag, &["classid"], Correction("classid")),
    Rule::new(Element, AnyTag, &["srcdoc"], Correction("srcdoc")),
    Rule::new(Element, AnyTag, &["srcset"], Correction("srcset")),
    Rule::new(Element, AnyTag, &["hreflang"], Correction("hreflang")),
    Rule::new(Element, AnyTag, &["srclang"], Correction("srclang")),
    Rule::new(Element, AnyTag, &["enctype"], Correction("enctype")),
    Rule::new(Element, AnyTag, &["autocomplete"], Correction("autocomplete")),
    Rule::new(Element, AnyTag, &["formenctype"], Correction("formEnctype")),
    Rule::new(Element, AnyTag, &["popovertarget"], Correction("popoverTargetElement")),
    Rule::new(Element, AnyTag, &["imagesrcset"], Correction("imageSrcset")),
    // Global attributes
    Rule::new(Global, AnyTag, &["is", "autofocus"], AttrOnly),
    Rule::new(Global, AnyTag, &["popover"], NotYetImplemented),
    Rule::new(Global, AnyTag, &["itemid", "itemprop", "itemref", "itemscope", "itemtype"], Removed)
        .uncertain("microdata DOM API dropped"),
    Rule::new(Global, AnyTag, &["autocapitalize"], Correction("autocapitalize")),
    Rule::new(Global, AnyTag, &["spellcheck"], Correction("spellcheck")),
    Rule::new(Global, AnyTag, &["itemid"], Correction("itemId")),
    Rule::new(Global, AnyTag, &["itemprop"], Correction("itemProp")),
    Rule::new(Global, AnyTag, &["itemref"], Correction("itemRef")),
    Rule::new(Global, AnyTag, &["itemscope"], Correction("itemScope")),
    Rule::new(Global, AnyTag, &["itemtype"], Correction("itemType")),
    // ARIA attributes
    Rule::new(
        Aria,
        AnyTag,
        &[
            "aria-activedescendant",
            "aria-controls",
            "aria-describedby",
            "aria-details",
            "aria-errormessage",
            "aria-flowto",
            "aria-labelledby",
            "aria-owns",
        ],
        AttrOnly,
    )
    .note("reflected as element references"),
    Rule::new(Aria, AnyTag, &["aria-dropeffect", "aria-grabbed"], Removed).note("deprecated in ARIA 1.1"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_elements() {
        assert!(is_removed_element("applet"));
        assert!(is_removed_element("isindex"));
        assert!(!is_removed_element("a"));
    }

    #[test]
    fn test_removed_beats_correction() {
        let rules = RuleSet::standard();
        match rules.classify(Element, "object", "classid") {
            Disposition::Skip(rule) => {
                assert_eq!(rule.category, Removed);
                assert_eq!(rule.confidence, Confidence::Uncertain);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_attr_only_beats_correction() {
        let rules = RuleSet::standard();
        assert!(matches!(
            rules.classify(Element, "meta", "charset"),
            Disposition::Skip(Rule { category: AttrOnly, .. })
        ));
        assert_eq!(
            rules.classify(Element, "script", "charset"),
            Disposition::Check { correction: Some("charset") }
        );
    }

    #[test]
    fn test_scope_is_per_tag() {
        let rules = RuleSet::standard();
        assert!(matches!(rules.classify(Element, "td", "char"), Disposition::Skip(_)));
        assert_eq!(rules.classify(Element, "div", "char"), Disposition::Check { correction: None });
    }

    #[test]
    fn test_groups_are_separate() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.classify(Global, "div", "autocapitalize"),
            Disposition::Check { correction: Some("autocapitalize") }
        );
        assert_eq!(rules.classify(Element, "div", "autocapitalize"), Disposition::Check { correction: None });
        assert!(matches!(rules.classify(Aria, "div", "aria-owns"), Disposition::Skip(_)));
        assert_eq!(rules.classify(Aria, "div", "aria-label"), Disposition::Check { correction: None });
    }

    #[test]
    fn test_exemption_precedence() {
        let rules = RuleSet::new()
            .with(Rule::new(Element, AnyTag, &["x"], NotYetImplemented))
            .with(Rule::new(Element, AnyTag, &["x"], AttrOnly))
            .with(Rule::new(Element, AnyTag, &["x"], Removed))
            .with(Rule::new(Element, AnyTag, &["y"], NotYetImplemented))
            .with(Rule::new(Element, AnyTag, &["y"], AttrOnly));

        let category = |attribute| match rules.classify(Element, "a", attribute) {
            Disposition::Skip(rule) => rule.category,
            other => panic!("unexpected {other:?}"),
        };
        assert_eq!(category("x"), Removed);
        assert_eq!(category("y"), AttrOnly);
    }

    #[test]
    fn test_ties_go_to_first_rule() {
        let rules = RuleSet::new()
            .with(Rule::new(Element, AnyTag, &["x"], Removed).note("first"))
            .with(Rule::new(Element, AnyTag, &["x"], Removed).note("second"));
        match rules.classify(Element, "a", "x") {
            Disposition::Skip(rule) => assert_eq!(rule.note, "first"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Correction("srcset")).unwrap();
        assert_eq!(json, r#"{"category":"correction","property":"srcset"}"#);
        let json = serde_json::to_string(&NotYetImplemented).unwrap();
        assert_eq!(json, r#"{"category":"notYetImplemented"}"#);
    }
}
