//! User settings stored as settings.json in the app data directory

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::DEFAULT_ENDPOINT;
use crate::export::ExportFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Scraping service
    pub endpoint: Option<String>,

    // Export
    pub export_dir: Option<String>,
    pub export_format: ExportFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_x: None,
            window_y: None,
            window_w: None,
            window_h: None,
            endpoint: None,
            export_dir: None,
            export_format: ExportFormat::Xlsx,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => match serde_json::from_str(&s) {
                Ok(settings) => {
                    debug!(path = %path.display(), "Settings loaded");
                    settings
                }
                Err(e) => {
                    warn!(error = %e, "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    pub fn endpoint_or_default(&self) -> String {
        self.endpoint
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_owned())
    }

    pub fn export_dir_or_default(&self) -> PathBuf {
        self.export_dir
            .as_ref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                dirs::download_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join("Maps Business Scraper")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fall_back_to_the_dev_endpoint() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint_or_default(), DEFAULT_ENDPOINT);
        assert_eq!(settings.export_format, ExportFormat::Xlsx);
    }

    #[test]
    fn blank_endpoint_override_is_ignored() {
        let settings = Settings {
            endpoint: Some("   ".into()),
            ..Settings::default()
        };
        assert_eq!(settings.endpoint_or_default(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn unknown_settings_keys_do_not_break_loading() {
        let parsed: Settings =
            serde_json::from_str(r#"{"endpoint": "http://10.0.0.2:5000", "legacy_key": 1}"#)
                .unwrap_or_default();
        assert_eq!(
            parsed.endpoint_or_default(),
            "http://10.0.0.2:5000".to_owned()
        );
    }
}
