use ferry_store::FerryPaths;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// How `ferry report` prints entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Report settings, stored as top-level keys of `.ferry/config.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: OutputFormat,
    /// List origin revisions under each effect line.
    pub show_origin_refs: bool,
    /// Treat INSUFFICIENT_APPROVALS as a failed run.
    pub fail_on_insufficient_approvals: bool,
    /// Give runs where every effect is NOOP their own exit status.
    pub fail_on_noop: bool,
}

impl ReportConfig {
    /// Load from `.ferry/config.json`.
    /// Returns defaults if the file is missing or unparseable.
    pub fn load(paths: &FerryPaths) -> Self {
        let content = match std::fs::read_to_string(&paths.config_json) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    path = %paths.config_json.display(),
                    error = %e,
                    "ignoring unreadable report config"
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ReportConfig::load(&FerryPaths::discover(tmp.path()));
        assert_eq!(config, ReportConfig::default());
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn reads_known_keys_and_ignores_others() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = FerryPaths::discover(tmp.path());
        paths.ensure_layout().unwrap();
        std::fs::write(
            &paths.config_json,
            r#"{"format": "json", "fail_on_noop": true, "workflow": "default"}"#,
        )
        .unwrap();
        let config = ReportConfig::load(&paths);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.fail_on_noop);
        assert!(!config.show_origin_refs);
    }

    #[test]
    fn invalid_value_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let paths = FerryPaths::discover(tmp.path());
        paths.ensure_layout().unwrap();
        std::fs::write(&paths.config_json, r#"{"format": "yaml"}"#).unwrap();
        assert_eq!(ReportConfig::load(&paths), ReportConfig::default());
    }
}
