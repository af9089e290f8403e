//! Pipeline configuration.
//!
//! Passed explicitly into the pipeline entry point; there is no ambient
//! module-level configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the hts pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HtsConfig {
    /// Folder where uploaded report PDFs are stored.
    pub upload_dir: PathBuf,

    /// Input extensions accepted by the pipeline (lowercase, no dot).
    pub allowed_extensions: Vec<String>,

    /// What to do when the derived output path already exists.
    pub on_collision: CollisionPolicy,
}

impl Default for HtsConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads/pdf"),
            allowed_extensions: vec!["pdf".to_string()],
            on_collision: CollisionPolicy::Overwrite,
        }
    }
}

/// Policy for an output path that already exists.
///
/// Two concurrent invocations over the same input race on the same output
/// file; `Rename` closes that gap at the cost of idempotent re-runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Overwrite the existing file; repeated runs on the same input are
    /// idempotent (byte-identical output).
    #[default]
    Overwrite,
    /// Pick the next free numbered name (`report-1.csv`, `report-2.csv`, ...).
    Rename,
}

impl HtsConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }

    /// Whether a path's extension is in the allowed set (case-insensitive).
    pub fn extension_allowed(&self, path: &Path) -> bool {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        self.allowed_extensions.iter().any(|a| a == &ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_allows_pdf_only() {
        let config = HtsConfig::default();
        assert!(config.extension_allowed(Path::new("report.pdf")));
        assert!(config.extension_allowed(Path::new("report.PDF")));
        assert!(!config.extension_allowed(Path::new("report.docx")));
        assert!(!config.extension_allowed(Path::new("report")));
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let mut config = HtsConfig::default();
        config.on_collision = CollisionPolicy::Rename;
        config.save(&path).unwrap();
        let loaded = HtsConfig::from_file(&path).unwrap();
        assert_eq!(loaded.on_collision, CollisionPolicy::Rename);
    }
}
