//! Golden Snapshot
//!
//! The tags without per-tag attributes are kept in a JSON file with
//! 4-space indentation and no trailing newline.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::SnapshotMode;
use crate::ReconcileError;

/// Render tags as a 4-space indented JSON array
pub fn render<T: AsRef<str>>(tags: &[T]) -> Result<String, ReconcileError> {
    let tags: Vec<&str> = tags.iter().map(AsRef::as_ref).collect();
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    tags.serialize(&mut ser)?;
    // serde_json only writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Result of a snapshot comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotOutcome {
    Matched,
    /// The golden file was (re)written
    Written,
    /// First differing line, 1-based
    Mismatch {
        line: usize,
        expected: String,
        actual: String,
    },
}

/// Golden file comparison
pub struct Snapshot;

impl Snapshot {
    /// Compare `rendered` against the file at `path`, or write it
    pub fn verify(path: &Path, rendered: &str, mode: SnapshotMode) -> Result<SnapshotOutcome, ReconcileError> {
        if mode == SnapshotMode::Update {
            Self::write(path, rendered)?;
            tracing::info!("Updated snapshot {}", path.display());
            return Ok(SnapshotOutcome::Written);
        }

        if !path.exists() {
            tracing::warn!("Snapshot {} missing, writing it", path.display());
            Self::write(path, rendered)?;
            return Ok(SnapshotOutcome::Written);
        }

        let expected = fs::read_to_string(path).map_err(ReconcileError::io(path))?;
        Ok(compare(&expected, rendered))
    }

    fn write(path: &Path, rendered: &str) -> Result<(), ReconcileError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ReconcileError::io(parent))?;
        }
        fs::write(path, rendered).map_err(ReconcileError::io(path))
    }
}

/// Byte comparison, reporting the first differing line
fn compare(expected: &str, actual: &str) -> SnapshotOutcome {
    if expected == actual {
        return SnapshotOutcome::Matched;
    }

    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (Some(e), Some(a)) if e == a => line += 1,
            (e, a) => {
                return SnapshotOutcome::Mismatch {
                    line,
                    expected: e.unwrap_or_default().to_string(),
                    actual: a.unwrap_or_default().to_string(),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_js_stringify() {
        let rendered = render(&["br", "hr"]).unwrap();
        assert_eq!(rendered, "[\n    \"br\",\n    \"hr\"\n]");
        assert_eq!(render::<&str>(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_compare_reports_first_difference() {
        assert_eq!(compare("[\n    \"a\"\n]", "[\n    \"a\"\n]"), SnapshotOutcome::Matched);
        assert_eq!(
            compare("[\n    \"a\"\n]", "[\n    \"b\"\n]"),
            SnapshotOutcome::Mismatch {
                line: 2,
                expected: "    \"a\"".into(),
                actual: "    \"b\"".into(),
            }
        );
    }

    #[test]
    fn test_trailing_newline_is_a_mismatch() {
        assert_eq!(
            compare("[]\n", "[]"),
            SnapshotOutcome::Mismatch {
                line: 2,
                expected: String::new(),
                actual: String::new(),
            }
        );
    }
}
