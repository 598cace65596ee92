//! Theme selection logic behind the dropdown.
//!
//! The controller owns the three side-effect seams (preference storage,
//! colour-scheme probe, root class list) and keeps the root carrying exactly
//! one [`Marker`] once anything has been applied. Seam failures are logged
//! and never surface to the caller.

use crate::config::ThemeConfig;
use crate::document::{DocumentRoot, RootClasses};
use crate::scheme::{ColorSchemeProbe, MediaQueryProbe};
use crate::storage::{LocalStore, PreferenceStore};
use crate::theme::{Marker, Theme};

/// Controller wired to `localStorage`, `matchMedia` and `<html>`.
pub type BrowserThemeController = ThemeController<LocalStore, MediaQueryProbe, DocumentRoot>;

#[derive(Debug, Clone)]
pub struct ThemeController<S, P, R> {
    store: S,
    probe: P,
    root: R,
    config: ThemeConfig,
    current: Theme,
    marker: Option<Marker>,
}

impl BrowserThemeController {
    pub fn browser(config: ThemeConfig) -> Self {
        let probe = MediaQueryProbe::new(config.dark_query.clone());
        Self::new(LocalStore, probe, DocumentRoot, config)
    }
}

impl<S, P, R> ThemeController<S, P, R> {
    pub fn new(store: S, probe: P, root: R, config: ThemeConfig) -> Self {
        Self {
            store,
            probe,
            root,
            config,
            current: Theme::System,
            marker: None,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// The marker most recently applied to the root, if any.
    pub fn marker(&self) -> Option<Marker> {
        self.marker
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn probe_mut(&mut self) -> &mut P {
        &mut self.probe
    }

    pub fn root(&self) -> &R {
        &self.root
    }
}

impl<S, P, R> ThemeController<S, P, R>
where
    S: PreferenceStore,
    P: ColorSchemeProbe,
    R: RootClasses,
{
    /// Load the persisted choice and apply its marker.
    ///
    /// A missing, unreadable or unrecognised value leaves the state at
    /// `System`. An unrecognised value stays in storage untouched.
    pub fn mount(&mut self) -> Theme {
        let key = self.config.storage_key.as_str();
        let stored = match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read theme preference '{}': {}", key, e);
                None
            }
        };

        if let Some(raw) = stored {
            match raw.parse::<Theme>() {
                Ok(theme) => self.current = theme,
                Err(e) => log::warn!("Ignoring stored theme preference: {}", e),
            }
        }

        self.refresh();
        self.current
    }

    /// Persist (or clear, for `System`) the choice and apply its marker.
    pub fn select(&mut self, theme: Theme) -> Theme {
        let key = self.config.storage_key.as_str();
        let result = match theme.persisted_value() {
            Some(value) => {
                log::info!("Saving theme preference: {} = {}", key, value);
                self.store.set(key, value)
            }
            None => {
                log::info!("Clearing theme preference: {}", key);
                self.store.remove(key)
            }
        };
        if let Err(e) = result {
            log::warn!("Failed to persist theme preference: {}", e);
        }

        self.current = theme;
        self.refresh();
        self.current
    }

    /// Re-apply the marker for the current state, re-querying the
    /// environment when that state is `System`.
    pub fn refresh(&mut self) -> Marker {
        let prefers_dark = match self.current {
            Theme::System => self.probe.prefers_dark(),
            Theme::Dark => true,
            Theme::Light => false,
        };
        let marker = self.current.resolve(prefers_dark);
        self.apply(marker);
        marker
    }

    fn apply(&mut self, marker: Marker) {
        if let Err(e) = self.root.add(marker.class()) {
            log::warn!("Failed to add '{}' to the document root: {}", marker.class(), e);
        }
        if let Err(e) = self.root.remove(marker.opposite().class()) {
            log::warn!(
                "Failed to remove '{}' from the document root: {}",
                marker.opposite().class(),
                e
            );
        }
        log::debug!("Applied theme marker '{}'", marker.class());
        self.marker = Some(marker);
    }
}
