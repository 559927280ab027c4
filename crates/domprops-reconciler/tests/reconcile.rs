//! Integration tests - full reconciler runs over bundled and injected data

use std::fs;

use domprops_dom::{Document, DomError, Element};
use domprops_reconciler::{
    Category, CheckKind, Confidence, Config, Failure, Group, LiveDom, Outcome, Reconciler,
    ReferenceData, Report, SnapshotMode,
};
use domprops_refdata::{BundledReferenceData, Schema};

fn run_default() -> Report {
    Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), Config::default())
        .run()
        .unwrap()
}

fn property_outcome<'a>(report: &'a Report, group: Group, tag: &str, attribute: &str) -> &'a Outcome {
    let record = report
        .find(group, tag, attribute)
        .find(|record| record.kind == CheckKind::PropertyExists)
        .unwrap_or_else(|| panic!("no property check for <{tag}> {attribute}"));
    &record.outcome
}

/// Bundled data with extra per-tag attributes
struct Injected {
    extra: Vec<(&'static str, &'static str)>,
    no_globals: bool,
}

impl ReferenceData for Injected {
    fn tag_names(&self) -> Vec<String> {
        ReferenceData::tag_names(&BundledReferenceData)
    }

    fn element_attributes(&self, tag: &str) -> Option<Vec<String>> {
        let mut attributes = ReferenceData::element_attributes(&BundledReferenceData, tag)?;
        for (extra_tag, attribute) in &self.extra {
            if *extra_tag == tag {
                attributes.push(attribute.to_string());
            }
        }
        Some(attributes)
    }

    fn global_attributes(&self) -> Vec<String> {
        if self.no_globals {
            return Vec::new();
        }
        ReferenceData::global_attributes(&BundledReferenceData)
    }

    fn aria_attributes(&self) -> Vec<String> {
        ReferenceData::aria_attributes(&BundledReferenceData)
    }
}

/// DOM that cannot create one tag
struct Refusing(Document, &'static str);

impl LiveDom for Refusing {
    type Element = Element;
    type Error = DomError;

    fn create_element(&mut self, tag: &str) -> Result<Element, DomError> {
        if tag == self.1 {
            return Err(DomError::InvalidCharacter(tag.to_string()));
        }
        self.0.create_element(tag)
    }
}

#[test]
fn test_default_run_has_no_failures() {
    let report = run_default();
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "{failures:#?}");
    assert!(report.is_success());
    assert!(report.summary().passed > 0);
    assert!(report.summary().skipped > 0);
}

#[test]
fn test_every_candidate_tag_creates_an_element() {
    let report = run_default();
    let created: Vec<_> = report
        .records()
        .iter()
        .filter(|record| record.kind == CheckKind::ElementCreated)
        .collect();

    assert_eq!(created.len(), 146);
    assert!(created.iter().all(|record| record.outcome == Outcome::Passed));
    assert!(!created.iter().any(|record| record.tag.as_deref() == Some("applet")));
}

#[test]
fn test_img_srcset_resolves() {
    let report = run_default();
    assert_eq!(property_outcome(&report, Group::Element, "img", "srcset"), &Outcome::Passed);
}

#[test]
fn test_template_shadowrootdelegatesfocus_is_skipped() {
    let report = run_default();
    assert_eq!(
        property_outcome(&report, Group::Element, "template", "shadowrootdelegatesfocus"),
        &Outcome::Skipped {
            category: Category::Removed,
            confidence: Confidence::Uncertain,
            note: "bad data",
        }
    );
}

#[test]
fn test_autocapitalize_passes_on_every_tag() {
    let report = run_default();
    let checks: Vec<_> = report
        .records()
        .iter()
        .filter(|record| {
            record.kind == CheckKind::PropertyExists
                && record.group == Some(Group::Global)
                && record.attribute.as_deref() == Some("autocapitalize")
        })
        .collect();

    assert_eq!(checks.len(), 146);
    assert!(checks.iter().all(|record| record.outcome == Outcome::Passed));
}

#[test]
fn test_aria_activedescendant_is_attribute_only() {
    let report = run_default();
    for tag in ["div", "input", "marquee"] {
        assert!(matches!(
            property_outcome(&report, Group::Aria, tag, "aria-activedescendant"),
            Outcome::Skipped { category: Category::AttrOnly, .. }
        ));
    }
    assert_eq!(property_outcome(&report, Group::Aria, "div", "aria-label"), &Outcome::Passed);
}

#[test]
fn test_stale_data_is_reported_without_aborting() {
    let data = Injected {
        extra: vec![("img", "bogus-attr"), ("div", "ismap")],
        no_globals: false,
    };
    let report = Reconciler::new(data, Schema::html(), Document::new(), Config::default())
        .run()
        .unwrap();

    let failures: Vec<_> = report.failures().cloned().collect();
    assert_eq!(
        failures,
        vec![
            Failure::MissingProperty {
                tag: "div".into(),
                attribute: "ismap".into(),
                property: "isMap".into(),
            },
            Failure::StaleReferenceData {
                schema: "html".into(),
                attribute: "bogus-attr".into(),
            },
            Failure::MissingProperty {
                tag: "img".into(),
                attribute: "bogus-attr".into(),
                property: "bogus-attr".into(),
            },
        ]
    );
    let kinds: Vec<_> = report
        .find(Group::Element, "img", "bogus-attr")
        .map(|record| record.kind)
        .collect();
    assert_eq!(kinds, vec![CheckKind::AttributeRecognized, CheckKind::PropertyExists]);
    assert_eq!(property_outcome(&report, Group::Element, "img", "srcset"), &Outcome::Passed);
    assert_eq!(property_outcome(&report, Group::Global, "video", "autocapitalize"), &Outcome::Passed);
}

#[test]
fn test_empty_global_list_is_a_failure() {
    let data = Injected {
        extra: Vec::new(),
        no_globals: true,
    };
    let report = Reconciler::new(data, Schema::html(), Document::new(), Config::default())
        .run()
        .unwrap();

    assert_eq!(report.failures().collect::<Vec<_>>(), vec![&Failure::NoGlobalAttributes]);
}

#[test]
fn test_element_creation_failure_is_isolated() {
    let dom = Refusing(Document::new(), "marquee");
    let report = Reconciler::new(BundledReferenceData, Schema::html(), dom, Config::default())
        .run()
        .unwrap();

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], Failure::ElementCreation { tag, .. } if tag == "marquee"));
    assert!(report.find(Group::Aria, "marquee", "aria-label").all(|r| r.kind == CheckKind::AttributeRecognized));
    assert_eq!(property_outcome(&report, Group::Aria, "div", "aria-label"), &Outcome::Passed);
}

#[test]
fn test_snapshot_mismatch_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-attr-tags.json");
    fs::write(&path, "[\n    \"abbr\"\n]").unwrap();

    let config = Config {
        snapshot_path: path.clone(),
        ..Config::default()
    };
    let report = Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), config)
        .run()
        .unwrap();

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    match failures[0] {
        Failure::SnapshotMismatch { line, expected, actual, .. } => {
            assert_eq!(*line, 2);
            assert_eq!(expected, "    \"abbr\"");
            assert_eq!(actual, "    \"abbr\",");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(report.summary().passed > 1000);
}

#[test]
fn test_missing_snapshot_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("no-attr-tags.json");

    let config = Config {
        snapshot_path: path.clone(),
        ..Config::default()
    };
    let report = Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), config)
        .run()
        .unwrap();

    assert!(report.is_success());
    let bundled = fs::read_to_string(Config::default().snapshot_path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), bundled);
}

#[test]
fn test_update_mode_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-attr-tags.json");
    fs::write(&path, "stale").unwrap();

    let config = Config {
        snapshot_path: path.clone(),
        snapshot_mode: SnapshotMode::Update,
        ..Config::default()
    };
    let report = Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), config)
        .run()
        .unwrap();

    assert!(report.is_success());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("[\n    \"abbr\",\n    \"acronym\","));
    assert!(written.ends_with("\"xmp\"\n]"));
    assert_eq!(written, fs::read_to_string(Config::default().snapshot_path).unwrap());
}

#[test]
fn test_report_serializes() {
    let report = run_default();
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["summary"]["failed"], 0);
    assert!(json["records"].as_array().is_some_and(|records| !records.is_empty()));
}
