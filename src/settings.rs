//! Startup configuration stored as settings.json in the app data directory.
//!
//! Read once at launch and never written; the file is created by hand.

use crate::constants::SETTINGS_FILE;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_w: f32,
    pub window_h: f32,

    /// Page shown at launch, by display name
    pub start_page: Option<String>,

    pub show_sidebar_logo: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_w: 1100.0,
            window_h: 760.0,
            start_page: None,
            show_sidebar_logo: true,
        }
    }
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SETTINGS_FILE);
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

    /// Window size clamped to the minimum the layout supports
    pub fn window_size(&self) -> [f32; 2] {
        [self.window_w.max(MIN_WINDOW[0]), self.window_h.max(MIN_WINDOW[1])]
    }
}

pub const MIN_WINDOW: [f32; 2] = [720.0, 480.0];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{ "start_page": "Contact Us" }"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.start_page.as_deref(), Some("Contact Us"));
        assert_eq!(settings.window_w, Settings::default().window_w);
        assert!(settings.show_sidebar_logo);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE), "{ not json").unwrap();
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_load_never_writes() {
        let dir = tempfile::tempdir().unwrap();
        Settings::load(dir.path());
        assert!(!dir.path().join(SETTINGS_FILE).exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_window_size_clamped() {
        let settings = Settings {
            window_w: 100.0,
            window_h: 2000.0,
            ..Settings::default()
        };
        assert_eq!(settings.window_size(), [MIN_WINDOW[0], 2000.0]);
    }
}
