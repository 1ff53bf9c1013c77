#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{THEME_DARK_CLASS, THEME_LIGHT_CLASS, THEME_STORAGE_KEY};
use crate::env::{ColorScheme, PreferenceStore};

/// The two mutually exclusive visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Marker class this theme applies to the document root.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Light => THEME_LIGHT_CLASS,
            Self::Dark => THEME_DARK_CLASS,
        }
    }

    /// Parse a stored marker literal. Anything other than the two exact
    /// class strings is `None` — garbage values fall back to the
    /// environment preference.
    #[must_use]
    pub fn from_class(value: &str) -> Option<Self> {
        match value {
            THEME_LIGHT_CLASS => Some(Self::Light),
            THEME_DARK_CLASS => Some(Self::Dark),
            _ => None,
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Resolve the theme to apply at page load.
///
/// A valid persisted preference wins. Otherwise the environment's
/// color-scheme query decides: light only when light is explicitly
/// preferred, dark for every other outcome. The resolved fallback is
/// not written back; persistence happens only on an explicit toggle.
#[must_use]
pub fn resolve(store: &impl PreferenceStore, scheme: &impl ColorScheme) -> Theme {
    if let Some(saved) = store.get(THEME_STORAGE_KEY) {
        if let Some(theme) = Theme::from_class(&saved) {
            return theme;
        }
    }
    if scheme.prefers_light() { Theme::Light } else { Theme::Dark }
}

/// Invert `current` and persist the new choice.
#[must_use]
pub fn toggle(store: &mut impl PreferenceStore, current: Theme) -> Theme {
    let next = current.toggled();
    store.set(THEME_STORAGE_KEY, next.class());
    next
}
