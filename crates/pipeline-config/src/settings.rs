use crate::error::ConfigError;
use connectors::file::csv::sink::HeaderPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Seoul RTMS (real-estate transaction) dataset on the open-data portal.
pub const DEFAULT_SERVICE: &str = "tbLnOpendataRtmsV";

const DEFAULT_SINK_PATH: &str = "data_files/seoul_real_estate.csv";

/// Per-pipeline settings, loadable from a JSON file. Defaults reproduce the
/// legacy daily job: first 1000 records of the RTMS service, appended
/// headerless to a fixed CSV path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineSettings {
    pub service: String,
    /// 1-based inclusive window bounds, as the open API counts them.
    pub start_index: u32,
    pub end_index: u32,
    pub sink_path: PathBuf,
    pub header_policy: HeaderPolicy,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        PipelineSettings {
            service: DEFAULT_SERVICE.to_string(),
            start_index: 1,
            end_index: 1000,
            sink_path: PathBuf::from(DEFAULT_SINK_PATH),
            header_policy: HeaderPolicy::Never,
        }
    }
}

impl PipelineSettings {
    /// Loads settings from a JSON file, or the defaults when no file is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let settings = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                serde_json::from_str(&content)?
            }
            None => PipelineSettings::default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service.is_empty() {
            return Err(ConfigError::Invalid("service name is empty".into()));
        }
        if self.start_index == 0 {
            return Err(ConfigError::Invalid(
                "start_index is 1-based and must be >= 1".into(),
            ));
        }
        if self.start_index > self.end_index {
            return Err(ConfigError::Invalid(format!(
                "start_index {} is past end_index {}",
                self.start_index, self.end_index
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_the_legacy_job() {
        let settings = PipelineSettings::default();
        assert_eq!(settings.service, "tbLnOpendataRtmsV");
        assert_eq!(settings.start_index, 1);
        assert_eq!(settings.end_index, 1000);
        assert_eq!(settings.sink_path, PathBuf::from(DEFAULT_SINK_PATH));
        assert_eq!(settings.header_policy, HeaderPolicy::Never);
        settings.validate().unwrap();
    }

    #[test]
    fn test_load_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(
            &path,
            r#"{
                "service": "tbLnOpendataRtmsV",
                "start_index": 1,
                "end_index": 50,
                "sink_path": "out/rtms.csv",
                "header_policy": "write-once"
            }"#,
        )
        .unwrap();

        let settings = PipelineSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.end_index, 50);
        assert_eq!(settings.header_policy, HeaderPolicy::WriteOnce);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"end_index": 10}"#).unwrap();

        let settings = PipelineSettings::load(Some(&path)).unwrap();
        assert_eq!(settings.service, DEFAULT_SERVICE);
        assert_eq!(settings.end_index, 10);
    }

    #[test]
    fn test_inverted_window_is_rejected() {
        let settings = PipelineSettings {
            start_index: 100,
            end_index: 10,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_start_index_is_rejected() {
        let settings = PipelineSettings {
            start_index: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
