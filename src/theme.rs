use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A theme choice offered by the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
    #[default]
    System,
}

impl Theme {
    /// All variants in the order they are listed in the popup.
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::System];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::System => "system",
        }
    }

    /// Capitalised display text for the option list.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::System => "System",
        }
    }

    /// The value written to storage. `System` is represented by the key being absent.
    pub fn persisted_value(self) -> Option<&'static str> {
        match self {
            Theme::Dark | Theme::Light => Some(self.as_str()),
            Theme::System => None,
        }
    }

    /// Resolve to the root marker, consulting the environment only for `System`.
    pub fn resolve(self, prefers_dark: bool) -> Marker {
        match self {
            Theme::Dark => Marker::Dark,
            Theme::Light => Marker::Light,
            Theme::System => Marker::from_prefers_dark(prefers_dark),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            "system" => Ok(Theme::System),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Class token on the document root. Exactly one is present once applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Dark,
    Light,
}

impl Marker {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Marker::Dark
        } else {
            Marker::Light
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Marker::Dark => "dark",
            Marker::Light => "light",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Marker::Dark => Marker::Light,
            Marker::Light => Marker::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_variants_and_rejects_others() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!(matches!(
            "solarized".parse::<Theme>(),
            Err(ThemeError::UnknownTheme(s)) if s == "solarized"
        ));
        assert!("Dark".parse::<Theme>().is_err());
    }

    #[test]
    fn system_is_never_persisted() {
        assert_eq!(Theme::Dark.persisted_value(), Some("dark"));
        assert_eq!(Theme::Light.persisted_value(), Some("light"));
        assert_eq!(Theme::System.persisted_value(), None);
    }

    #[test]
    fn explicit_variants_ignore_environment() {
        assert_eq!(Theme::Dark.resolve(false), Marker::Dark);
        assert_eq!(Theme::Light.resolve(true), Marker::Light);
        assert_eq!(Theme::System.resolve(true), Marker::Dark);
        assert_eq!(Theme::System.resolve(false), Marker::Light);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Theme::System).unwrap(), "\"system\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }
}
