use super::*;

#[test]
fn default_is_light() {
    assert_eq!(ThemePreference::default(), ThemePreference::Light);
}

#[test]
fn from_stored_accepts_exact_values() {
    assert_eq!(ThemePreference::from_stored("dark"), Some(ThemePreference::Dark));
    assert_eq!(ThemePreference::from_stored("light"), Some(ThemePreference::Light));
}

#[test]
fn from_stored_rejects_malformed_values() {
    assert_eq!(ThemePreference::from_stored(""), None);
    assert_eq!(ThemePreference::from_stored("Dark"), None);
    assert_eq!(ThemePreference::from_stored(" dark"), None);
    assert_eq!(ThemePreference::from_stored("true"), None);
}

#[test]
fn as_str_matches_stored_encoding() {
    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(ThemePreference::from_stored(pref.as_str()), Some(pref));
    }
}

#[test]
fn icon_is_sun_only_when_dark() {
    assert_eq!(ThemePreference::Dark.icon(), "sun-icon.svg");
    assert_eq!(ThemePreference::Light.icon(), "moon-icon.svg");
}

#[test]
fn from_dark_follows_flag() {
    assert!(ThemePreference::from_dark(true).is_dark());
    assert!(!ThemePreference::from_dark(false).is_dark());
}
