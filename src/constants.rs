//! Application constants

pub const APP_NAME: &str = "HydroTrek";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "hydrotrek.log";
