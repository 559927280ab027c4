//! Attribute/Property Reconciler
//!
//! Walks every candidate tag and, for each per-tag, global and ARIA
//! attribute, checks that the lookup knows the attribute and that a live
//! element exposes the resulting property.

use crate::config::Config;
use crate::report::{CheckKind, CheckRecord, Failure, Outcome, Report};
use crate::rules::{is_removed_element, Disposition, Group, RuleSet};
use crate::snapshot::{self, Snapshot, SnapshotOutcome};
use crate::sources::{LiveDom, LiveElement, PropertyLookup, ReferenceData};
use crate::ReconcileError;

/// Reconciler over reference data, a property lookup and a live DOM
pub struct Reconciler<R, L, D> {
    data: R,
    lookup: L,
    dom: D,
    rules: RuleSet,
    config: Config,
}

impl<R, L, D> Reconciler<R, L, D>
where
    R: ReferenceData,
    L: PropertyLookup,
    D: LiveDom,
{
    /// Create a reconciler with the standard rule set
    pub fn new(data: R, lookup: L, dom: D, config: Config) -> Self {
        Self {
            data,
            lookup,
            dom,
            rules: RuleSet::standard(),
            config,
        }
    }

    /// Replace the rule set
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reference tags minus the removed elements
    pub fn list_candidate_tags(&self) -> Vec<String> {
        self.data
            .tag_names()
            .into_iter()
            .filter(|tag| !is_removed_element(tag))
            .collect()
    }

    /// Split tags into (with per-tag attributes, without)
    pub fn partition_tags(&self, tags: &[String]) -> (Vec<String>, Vec<String>) {
        tags.iter()
            .cloned()
            .partition(|tag| self.data.element_attributes(tag).is_some())
    }

    pub fn check_element_created(&mut self, tag: &str) -> Result<D::Element, Failure> {
        self.dom.create_element(tag).map_err(|err| Failure::ElementCreation {
            tag: tag.to_string(),
            reason: err.to_string(),
        })
    }

    pub fn check_attribute_recognized(&self, attribute: &str) -> Result<(), Failure> {
        if !attribute.is_empty() && self.lookup.find(attribute).defined {
            return Ok(());
        }
        Err(Failure::StaleReferenceData {
            schema: self.lookup.schema_name().to_string(),
            attribute: attribute.to_string(),
        })
    }

    /// Classify the pair, then read the expected property off the element
    pub fn check_property_exists(&self, group: Group, tag: &str, element: &D::Element, attribute: &str) -> Outcome {
        let correction = match self.rules.classify(group, tag, attribute) {
            Disposition::Skip(rule) => {
                if self.config.log_skips {
                    tracing::debug!("Skipping <{}> {}: {:?} {}", tag, attribute, rule.category, rule.note);
                }
                return Outcome::skipped(rule);
            }
            Disposition::Check { correction } => correction,
        };

        let property = match correction {
            Some(property) => property.to_string(),
            None => self.lookup.find(attribute).property,
        };

        if element.has_property(&property) {
            return Outcome::Passed;
        }
        Outcome::Failed {
            failure: Failure::MissingProperty {
                tag: tag.to_string(),
                attribute: attribute.to_string(),
                property,
            },
        }
    }

    /// Run every check and collect the results
    pub fn run(&mut self) -> Result<Report, ReconcileError> {
        let mut report = Report::new();

        let tags = self.list_candidate_tags();
        let (with_attrs, without_attrs) = self.partition_tags(&tags);
        tracing::info!(
            "Checking {} tags ({} with attributes, {} without)",
            tags.len(),
            with_attrs.len(),
            without_attrs.len()
        );

        let globals = self.data.global_attributes();
        let aria = self.data.aria_attributes();

        let present = if globals.is_empty() { Err(Failure::NoGlobalAttributes) } else { Ok(()) };
        report.push(CheckRecord::new(CheckKind::GlobalAttributesPresent, present.into()));

        self.check_snapshot(&without_attrs, &mut report)?;

        for tag in &tags {
            let element = match self.check_element_created(tag) {
                Ok(element) => {
                    report.push(CheckRecord::new(CheckKind::ElementCreated, Outcome::Passed).tag(tag));
                    Some(element)
                }
                Err(failure) => {
                    report.push(CheckRecord::new(CheckKind::ElementCreated, Outcome::Failed { failure }).tag(tag));
                    None
                }
            };

            let own = self.data.element_attributes(tag).unwrap_or_default();
            let groups = [(Group::Element, &own), (Group::Global, &globals), (Group::Aria, &aria)];
            for (group, attributes) in groups {
                for attribute in attributes {
                    self.check_pair(group, tag, element.as_ref(), attribute, &mut report);
                }
            }
        }

        let summary = report.summary();
        tracing::info!("{}", summary);
        Ok(report)
    }

    fn check_pair(
        &self,
        group: Group,
        tag: &str,
        element: Option<&D::Element>,
        attribute: &str,
        report: &mut Report,
    ) {
        let recognized = self.check_attribute_recognized(attribute);
        report.push(
            CheckRecord::new(CheckKind::AttributeRecognized, recognized.into())
                .tag(tag)
                .attribute(group, attribute),
        );

        // Unknown attributes are still looked up under their raw name
        let Some(element) = element else {
            return;
        };

        let outcome = self.check_property_exists(group, tag, element, attribute);
        tracing::debug!("<{}> {} {}: {:?}", tag, group.as_str(), attribute, outcome);
        report.push(
            CheckRecord::new(CheckKind::PropertyExists, outcome)
                .tag(tag)
                .attribute(group, attribute),
        );
    }

    fn check_snapshot(&self, without_attrs: &[String], report: &mut Report) -> Result<(), ReconcileError> {
        let path = &self.config.snapshot_path;
        let rendered = snapshot::render(without_attrs)?;

        let result = match Snapshot::verify(path, &rendered, self.config.snapshot_mode)? {
            SnapshotOutcome::Matched | SnapshotOutcome::Written => Ok(()),
            SnapshotOutcome::Mismatch { line, expected, actual } => Err(Failure::SnapshotMismatch {
                path: path.clone(),
                line,
                expected,
                actual,
            }),
        };
        report.push(CheckRecord::new(CheckKind::Snapshot, result.into()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{Category, Rule, Scope};
    use domprops_dom::Document;
    use domprops_refdata::{BundledReferenceData, Schema};

    fn reconciler() -> Reconciler<BundledReferenceData, &'static Schema, Document> {
        Reconciler::new(BundledReferenceData, Schema::html(), Document::new(), Config::default())
    }

    #[test]
    fn test_candidate_tags_exclude_removed() {
        let tags = reconciler().list_candidate_tags();
        assert!(!tags.iter().any(|t| t == "applet" || t == "basefont" || t == "isindex"));
        assert!(tags.iter().any(|t| t == "img"));
    }

    #[test]
    fn test_partition() {
        let r = reconciler();
        let tags = vec!["img".to_string(), "span".to_string(), "br".to_string()];
        let (with, without) = r.partition_tags(&tags);
        assert_eq!(with, vec!["img", "br"]);
        assert_eq!(without, vec!["span"]);
    }

    #[test]
    fn test_check_attribute_recognized() {
        let r = reconciler();
        assert!(r.check_attribute_recognized("srcset").is_ok());
        assert!(matches!(
            r.check_attribute_recognized(""),
            Err(Failure::StaleReferenceData { .. })
        ));
        assert!(r.check_attribute_recognized("made-up-attr").is_err());
    }

    #[test]
    fn test_check_property_exists() {
        let mut r = reconciler();
        let img = r.check_element_created("img").unwrap();
        assert_eq!(r.check_property_exists(Group::Element, "img", &img, "srcset"), Outcome::Passed);
        assert_eq!(r.check_property_exists(Group::Element, "img", &img, "alt"), Outcome::Passed);
        assert!(matches!(
            r.check_property_exists(Group::Element, "img", &img, "hspace"),
            Outcome::Skipped { .. }
        ));
    }

    #[test]
    fn test_unknown_attribute_is_read_under_raw_name() {
        let mut r = reconciler();
        let img = r.check_element_created("img").unwrap();
        assert_eq!(
            r.check_property_exists(Group::Element, "img", &img, "bogus-attr"),
            Outcome::Failed {
                failure: Failure::MissingProperty {
                    tag: "img".into(),
                    attribute: "bogus-attr".into(),
                    property: "bogus-attr".into(),
                },
            }
        );
    }

    #[test]
    fn test_with_rules_replaces_standard_table() {
        let rules = RuleSet::new()
            .with(Rule::new(Group::Element, Scope::Tags(&["img"]), &["alt"], Category::Removed).note("custom"));
        let mut r = reconciler().with_rules(rules);
        assert_eq!(r.rules().len(), 1);

        let img = r.check_element_created("img").unwrap();
        assert!(matches!(
            r.check_property_exists(Group::Element, "img", &img, "alt"),
            Outcome::Skipped { note: "custom", .. }
        ));
        assert!(!matches!(
            r.check_property_exists(Group::Element, "img", &img, "hspace"),
            Outcome::Skipped { .. }
        ));
    }
}
