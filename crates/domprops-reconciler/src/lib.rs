//! dom-props reconciler
//!
//! Cross-checks HTML reference data against a live DOM: every known
//! element must be creatable, every known attribute must be recognized by
//! the property lookup, and every non-exempt attribute must surface as a
//! property on the element. Exemptions and property-name corrections live
//! in one [`RuleSet`].

mod config;
mod error;
mod reconciler;
mod report;
mod rules;
pub mod snapshot;
mod sources;

pub use config::{Config, SnapshotMode};
pub use error::ReconcileError;
pub use reconciler::Reconciler;
pub use report::{CheckKind, CheckRecord, Failure, Outcome, Report, Summary};
pub use rules::{
    is_removed_element, Category, Confidence, Disposition, Group, Rule, RuleSet, Scope, REMOVED_ELEMENTS,
};
pub use snapshot::{Snapshot, SnapshotOutcome};
pub use sources::{LiveDom, LiveElement, PropertyLookup, ReferenceData};

/// Version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
