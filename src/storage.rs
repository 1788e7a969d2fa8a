//! Thin typed layer over browser local storage. Every persisted value on
//! the site is a plain string under a fixed key; a missing or mangled
//! value always falls back to the default instead of erroring.

use web_sys::Storage;

use crate::dom;

pub const THEME_KEY: &str = "theme";
pub const CONSENT_KEY: &str = "supaco-cookie-consent";
pub const BANNER_DISMISSED_KEY: &str = "announcement_banner_dismissed";

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

pub fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

/// Cookie-consent decision. Only an explicit visitor action moves it out
/// of `Undecided`; "Gérer mes cookies" moves it back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsentState {
    Undecided,
    Accepted,
    Declined,
}

impl ConsentState {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => Self::Accepted,
            Some("declined") => Self::Declined,
            _ => Self::Undecided,
        }
    }

    pub fn as_stored(self) -> Option<&'static str> {
        match self {
            Self::Accepted => Some("accepted"),
            Self::Declined => Some("declined"),
            Self::Undecided => None,
        }
    }

    /// The prompt is shown exactly while no decision is on record.
    pub fn needs_prompt(self) -> bool {
        matches!(self, Self::Undecided)
    }

    pub fn load() -> Self {
        Self::from_stored(read(CONSENT_KEY).as_deref())
    }

    pub fn store(self) {
        match self.as_stored() {
            Some(value) => write(CONSENT_KEY, value),
            None => remove(CONSENT_KEY),
        }
    }

    pub fn reset() {
        remove(CONSENT_KEY);
    }
}

/// Visitor theme choice, dark unless they switched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
}

impl ThemePreference {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn load() -> Self {
        Self::from_stored(read(THEME_KEY).as_deref())
    }

    pub fn store(self) {
        write(THEME_KEY, self.as_stored());
    }

    /// Reflects the preference onto the document so CSS picks it up.
    pub fn apply(self) {
        dom::set_root_attribute("data-theme", self.as_stored());
    }
}

pub fn banner_dismissed() -> bool {
    read(BANNER_DISMISSED_KEY).is_some()
}

pub fn dismiss_banner() {
    write(BANNER_DISMISSED_KEY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consent_defaults_to_undecided() {
        assert_eq!(ConsentState::from_stored(None), ConsentState::Undecided);
        assert_eq!(
            ConsentState::from_stored(Some("gibberish")),
            ConsentState::Undecided
        );
        assert!(ConsentState::Undecided.needs_prompt());
    }

    #[test]
    fn consent_round_trips_both_decisions() {
        for state in [ConsentState::Accepted, ConsentState::Declined] {
            let stored = state.as_stored().expect("decisions persist");
            assert_eq!(ConsentState::from_stored(Some(stored)), state);
            assert!(!state.needs_prompt());
        }
    }

    #[test]
    fn undecided_has_no_stored_form() {
        assert_eq!(ConsentState::Undecided.as_stored(), None);
    }

    #[test]
    fn theme_defaults_to_dark() {
        assert_eq!(ThemePreference::from_stored(None), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::from_stored(Some("unknown")),
            ThemePreference::Dark
        );
    }

    #[test]
    fn theme_toggle_alternates() {
        assert_eq!(ThemePreference::Dark.toggled(), ThemePreference::Light);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
        assert_eq!(
            ThemePreference::from_stored(Some(ThemePreference::Light.as_stored())),
            ThemePreference::Light
        );
    }
}
