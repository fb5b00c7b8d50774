//! Persisted light/dark theme setting.
//!
//! # Design
//! `ThemeManager` owns a `KeyValueStore` and a cached `Theme`. Storage is
//! canonical: every read goes back to it and refreshes the cache, every
//! toggle writes through. When storage cannot be read, or holds something
//! other than `"light"`/`"dark"`, the cache answers instead. Storage errors
//! are logged and never returned.
//!
//! The colour-scheme preference is passed in at construction rather than
//! queried here, so the default is deterministic under test.

use std::cell::Cell;

use crate::storage::KeyValueStore;
use crate::types::Theme;

/// Storage key holding the theme.
pub const THEME_KEY: &str = "theme";

pub struct ThemeManager<S> {
    store: S,
    cached: Cell<Theme>,
}

impl<S: KeyValueStore> ThemeManager<S> {
    /// A persisted theme wins; otherwise the preference decides. The default
    /// is not written back until the first toggle.
    pub fn new(store: S, prefers_dark: bool) -> Self {
        let manager = Self {
            store,
            cached: Cell::new(Theme::from_preference(prefers_dark)),
        };
        manager.theme();
        manager
    }

    /// Current theme, re-synchronised from storage.
    pub fn theme(&self) -> Theme {
        if let Some(stored) = self.read_stored() {
            self.cached.set(stored);
        }
        self.cached.get()
    }

    /// Flip the theme and persist it. The in-memory value flips even if the
    /// write fails.
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.theme().toggled();
        self.cached.set(next);
        if let Err(e) = self.store.set(THEME_KEY, next.as_str()) {
            tracing::warn!(error = %e, theme = %next, "failed to persist theme; keeping it in memory");
        }
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read_stored(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match raw.parse() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring stored theme");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "theme storage unavailable; using cached theme");
                None
            }
        }
    }
}
