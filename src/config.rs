use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `<meta name="..." content="{json}">` consulted by [`load_from_document`].
pub const CONFIG_META_NAME: &str = "theme-dropdown-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Local storage key holding an explicit `dark` / `light` choice.
    pub storage_key: String,
    /// Media query whose match means the environment prefers dark.
    pub dark_query: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            dark_query: DEFAULT_DARK_QUERY.to_string(),
        }
    }
}

impl ThemeConfig {
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Console log level: debug output only in debug builds.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Read the config from the page's meta tag, falling back to defaults.
pub fn load_from_document() -> ThemeConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| {
            doc.query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
                .ok()
                .flatten()
        })
        .and_then(|meta| meta.get_attribute("content"));

    match content {
        Some(json) => ThemeConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid theme config: {}", e);
            ThemeConfig::default()
        }),
        None => ThemeConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_browser_conventions() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = ThemeConfig::from_json(r#"{"storage_key":"site-theme"}"#).unwrap();
        assert_eq!(config.storage_key, "site-theme");
        assert_eq!(config.dark_query, DEFAULT_DARK_QUERY);
    }

    #[test]
    fn log_level_follows_build_profile() {
        let expected = if cfg!(debug_assertions) {
            log::Level::Debug
        } else {
            log::Level::Info
        };
        assert_eq!(log_level(), expected);
        assert!(log_level() >= log::Level::Info, "Info must always be emitted");
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = ThemeConfig::from_json("{storage_key").unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().starts_with("Config error:"));
    }
}
