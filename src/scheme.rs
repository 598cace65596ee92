//! The environment's colour-scheme preference.

/// Capability query for "does the environment prefer dark right now".
pub trait ColorSchemeProbe {
    fn prefers_dark(&self) -> bool;
}

/// Evaluates a media query through `window.matchMedia`.
#[derive(Debug, Clone)]
pub struct MediaQueryProbe {
    query: String,
}

impl MediaQueryProbe {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

impl ColorSchemeProbe for MediaQueryProbe {
    fn prefers_dark(&self) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        match window.match_media(&self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(e) => {
                log::warn!(
                    "matchMedia({}) failed: {}",
                    self.query,
                    crate::error::js_message(e)
                );
                false
            }
        }
    }
}

/// A preference that only changes when told to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedScheme {
    prefers_dark: bool,
}

impl FixedScheme {
    pub fn new(prefers_dark: bool) -> Self {
        Self { prefers_dark }
    }

    pub fn set(&mut self, prefers_dark: bool) {
        self.prefers_dark = prefers_dark;
    }
}

impl ColorSchemeProbe for FixedScheme {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark
    }
}
