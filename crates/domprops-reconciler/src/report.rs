//! Check Report
//!
//! Every check appends one record; nothing short-circuits. Failures are
//! values here, not errors that stop the run.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::rules::{Category, Confidence, Group, Rule};
use crate::ReconcileError;

/// A failed check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "failure", rename_all = "camelCase")]
pub enum Failure {
    #[error("{schema} schema does not know attribute {attribute:?}")]
    StaleReferenceData { schema: String, attribute: String },

    #[error("<{tag}> has no property {property:?} for attribute {attribute:?}")]
    MissingProperty {
        tag: String,
        attribute: String,
        property: String,
    },

    #[error("{} differs at line {line}: expected {expected:?}, got {actual:?}", .path.display())]
    SnapshotMismatch {
        path: PathBuf,
        line: usize,
        expected: String,
        actual: String,
    },

    #[error("could not create <{tag}>: {reason}")]
    ElementCreation { tag: String, reason: String },

    #[error("reference data has no global attributes")]
    NoGlobalAttributes,
}

/// Kind of check a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckKind {
    GlobalAttributesPresent,
    Snapshot,
    ElementCreated,
    AttributeRecognized,
    PropertyExists,
}

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum Outcome {
    Passed,
    Failed { failure: Failure },
    Skipped {
        #[serde(flatten)]
        category: Category,
        confidence: Confidence,
        note: &'static str,
    },
}

impl Outcome {
    pub(crate) fn skipped(rule: &Rule) -> Self {
        Self::Skipped {
            category: rule.category,
            confidence: rule.confidence,
            note: rule.note,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl From<Result<(), Failure>> for Outcome {
    fn from(result: Result<(), Failure>) -> Self {
        match result {
            Ok(()) => Self::Passed,
            Err(failure) => Self::Failed { failure },
        }
    }
}

/// One check and its outcome
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub kind: CheckKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl CheckRecord {
    pub fn new(kind: CheckKind, outcome: Outcome) -> Self {
        Self {
            group: None,
            tag: None,
            attribute: None,
            kind,
            outcome,
        }
    }

    pub fn tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }

    pub fn attribute(mut self, group: Group, attribute: &str) -> Self {
        self.group = Some(group);
        self.attribute = Some(attribute.to_string());
        self
    }
}

/// Outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checks: {} passed, {} failed, {} skipped",
            self.total(),
            self.passed,
            self.failed,
            self.skipped
        )
    }
}

/// Ordered check records of one run
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    summary: Summary,
    records: Vec<CheckRecord>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: CheckRecord) {
        match &record.outcome {
            Outcome::Passed => self.summary.passed += 1,
            Outcome::Failed { failure } => {
                tracing::warn!("{}", failure);
                self.summary.failed += 1;
            }
            Outcome::Skipped { .. } => self.summary.skipped += 1,
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[CheckRecord] {
        &self.records
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn failures(&self) -> impl Iterator<Item = &Failure> {
        self.records.iter().filter_map(|record| match &record.outcome {
            Outcome::Failed { failure } => Some(failure),
            _ => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.summary.failed == 0
    }

    /// Records for one (tag, attribute) pair
    pub fn find(&self, group: Group, tag: &str, attribute: &str) -> impl Iterator<Item = &CheckRecord> {
        self.records.iter().filter(move |record| {
            record.group == Some(group)
                && record.tag.as_deref() == Some(tag)
                && record.attribute.as_deref() == Some(attribute)
        })
    }

    /// Pretty JSON
    pub fn to_json(&self) -> Result<String, ReconcileError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
