//! Reconciler Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// What to do with the golden snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotMode {
    /// Compare against the golden file
    #[default]
    Verify,
    /// Rewrite the golden file from the current data
    Update,
}

/// Reconciler configuration options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Golden file for the tags without per-tag attributes
    pub snapshot_path: PathBuf,

    pub snapshot_mode: SnapshotMode,

    /// Log each skipped pair at debug level
    pub log_skips: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("snapshots")
                .join("no-attr-tags.json"),
            snapshot_mode: SnapshotMode::Verify,
            log_skips: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_bundled_snapshot() {
        let config = Config::default();
        assert!(config.snapshot_path.ends_with("snapshots/no-attr-tags.json"));
        assert_eq!(config.snapshot_mode, SnapshotMode::Verify);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"snapshot_mode": "update"}"#).unwrap();
        assert_eq!(config.snapshot_mode, SnapshotMode::Update);
        assert!(config.log_skips);
    }
}
