//! Configuration handling for the enquiry app

use crate::enquiry::SimulatedSender;
use crate::state::NotificationQueue;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// User configuration for the enquiry app
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnquiryConfig {
    /// Simulated delivery delay in milliseconds
    pub send_delay_ms: Option<u64>,
    /// Make the simulated delivery fail
    pub simulate_failure: Option<bool>,
    /// How long toasts stay on screen in milliseconds
    pub toast_duration_ms: Option<u64>,
}

impl EnquiryConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "udm", "udm-enquiry")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: EnquiryConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any error.
    ///
    /// On first run the defaults are written out so the knobs are discoverable.
    pub fn load_or_default() -> Self {
        if Self::config_path().is_some_and(|path| !path.exists()) {
            let config = Self::starter();
            if let Err(err) = config.save() {
                tracing::warn!("Failed to write default config: {err:#}");
            }
            return config;
        }

        Self::load().unwrap_or_else(|err| {
            tracing::warn!("Failed to load config, using defaults: {err:#}");
            Self::default()
        })
    }

    /// Defaults with every key spelled out
    pub fn starter() -> Self {
        Self {
            send_delay_ms: Some(SimulatedSender::DEFAULT_DELAY.as_millis() as u64),
            simulate_failure: Some(false),
            toast_duration_ms: Some(NotificationQueue::DEFAULT_DURATION.as_millis() as u64),
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    /// Write configuration as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn send_delay(&self) -> Duration {
        self.send_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedSender::DEFAULT_DELAY)
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(NotificationQueue::DEFAULT_DURATION)
    }

    /// Build the sender described by this configuration
    pub fn sender(&self) -> SimulatedSender {
        if self.simulate_failure.unwrap_or(false) {
            SimulatedSender::failing(self.send_delay())
        } else {
            SimulatedSender::new(self.send_delay())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EnquiryConfig::default();
        assert!(config.send_delay_ms.is_none());
        assert!(config.simulate_failure.is_none());
        assert!(config.toast_duration_ms.is_none());
    }

    #[test]
    fn test_default_durations() {
        let config = EnquiryConfig::default();
        assert_eq!(config.send_delay(), Duration::from_millis(1500));
        assert_eq!(config.toast_duration(), Duration::from_millis(4000));
    }

    #[test]
    fn test_serialization() {
        let config = EnquiryConfig {
            send_delay_ms: Some(250),
            simulate_failure: Some(true),
            toast_duration_ms: Some(1000),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: EnquiryConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.send_delay_ms, Some(250));
        assert_eq!(parsed.simulate_failure, Some(true));
        assert_eq!(parsed.toast_duration_ms, Some(1000));
        assert_eq!(parsed.send_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: EnquiryConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.send_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"send_delay_ms": 10, "unknown_field": "value"}"#;
        let parsed: EnquiryConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.send_delay_ms, Some(10));
    }

    #[test]
    fn test_sender_uses_configured_delay() {
        let config = EnquiryConfig {
            send_delay_ms: Some(0),
            ..Default::default()
        };
        assert_eq!(config.sender().delay(), Duration::ZERO);
    }

    #[tokio::test]
    async fn test_failing_sender_from_config() {
        use crate::enquiry::EnquirySender;
        use crate::state::FormValues;

        let config = EnquiryConfig {
            send_delay_ms: Some(0),
            simulate_failure: Some(true),
            ..Default::default()
        };
        assert!(config.sender().send(&FormValues::default()).await.is_err());
    }

    fn scratch_path() -> PathBuf {
        std::env::temp_dir()
            .join(format!("udm-enquiry-{}", uuid::Uuid::new_v4()))
            .join("config.json")
    }

    #[test]
    fn test_starter_matches_defaults() {
        let starter = EnquiryConfig::starter();
        let defaults = EnquiryConfig::default();
        assert_eq!(starter.send_delay(), defaults.send_delay());
        assert_eq!(starter.toast_duration(), defaults.toast_duration());
        assert_eq!(starter.simulate_failure, Some(false));
    }

    #[test]
    fn test_load_missing_file_yields_defaults() {
        let config = EnquiryConfig::load_from(&scratch_path()).unwrap();
        assert!(config.send_delay_ms.is_none());
        assert_eq!(config.toast_duration(), NotificationQueue::DEFAULT_DURATION);
    }

    #[test]
    fn test_save_then_load() {
        let path = scratch_path();
        let config = EnquiryConfig {
            send_delay_ms: Some(300),
            simulate_failure: Some(true),
            toast_duration_ms: None,
        };

        config.save_to(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\n  \"send_delay_ms\": 300"));

        let loaded = EnquiryConfig::load_from(&path).unwrap();
        assert_eq!(loaded.send_delay_ms, Some(300));
        assert_eq!(loaded.simulate_failure, Some(true));
        assert!(loaded.toast_duration_ms.is_none());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let path = scratch_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).unwrap();
        }
        fs::write(&path, "{ not json").unwrap();

        assert!(EnquiryConfig::load_from(&path).is_err());

        if let Some(dir) = path.parent() {
            let _ = fs::remove_dir_all(dir);
        }
    }
}
