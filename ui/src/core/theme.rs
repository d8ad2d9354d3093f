//! Light/dark theme flag: resolution, flipping, and the persistence port.
//!
//! The flag lives in per-origin local storage under [`THEME_STORAGE_KEY`] and
//! is mirrored onto the root element as a `data-theme` attribute. Everything
//! here is pure; the browser-backed [`ThemeStore`] lives in
//! [`crate::core::platform`].

/// Fixed local-storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root-element attribute the active theme is reflected onto.
pub const THEME_ATTRIBUTE: &str = "data-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolve a persisted value. Anything but `"dark"` (including an absent
    /// key) falls back to light.
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle-button label advertising the *next* action.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark Mode",
            Theme::Dark => "☀️ Light Mode",
        }
    }
}

/// Persistence port for the theme flag. Backed by local storage in the
/// browser and by an in-memory cell elsewhere, so the resolution and toggle
/// rules stay testable without a DOM.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Read the persisted flag, defaulting to light.
pub fn resolve<S: ThemeStore>(store: &S) -> Theme {
    Theme::from_stored(store.load().as_deref())
}

/// Flip the current theme and persist the new value. Returns the new theme
/// so callers can reflect it onto the document and the toggle label.
pub fn toggle<S: ThemeStore>(store: &mut S, current: Theme) -> Theme {
    let next = current.next();
    store.save(next.as_attr());
    next
}

/// Simple in-memory store used by tests and non-browser builds.
#[derive(Debug, Default, Clone)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_on_first_visit() {
        let store = MemoryThemeStore::default();
        let theme = resolve(&store);
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggle_label(), "🌙 Dark Mode");
    }

    #[test]
    fn unrecognized_values_fall_back_to_light() {
        assert_eq!(Theme::from_stored(Some("solarized")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut store = MemoryThemeStore::default();
        let dark = toggle(&mut store, Theme::Light);
        assert_eq!(dark, Theme::Dark);
        assert_eq!(store.load().as_deref(), Some("dark"));
        assert_eq!(dark.toggle_label(), "☀️ Light Mode");

        let light = toggle(&mut store, dark);
        assert_eq!(light, Theme::Light);
        assert_eq!(store.load().as_deref(), Some("light"));
    }

    #[test]
    fn resolve_honors_a_persisted_dark_flag() {
        let mut store = MemoryThemeStore::default();
        store.save("dark");
        assert_eq!(resolve(&store), Theme::Dark);
    }
}
