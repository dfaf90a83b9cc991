use super::*;

// =============================================================
// ThemePreference parsing
// =============================================================

#[test]
fn from_stored_absent_is_light() {
    assert_eq!(ThemePreference::from_stored(None), ThemePreference::Light);
}

#[test]
fn from_stored_dark_is_dark() {
    assert_eq!(ThemePreference::from_stored(Some("dark")), ThemePreference::Dark);
}

#[test]
fn from_stored_other_values_are_light() {
    for raw in ["light", "Dark", "DARK", " dark", "", "true", "1"] {
        assert_eq!(ThemePreference::from_stored(Some(raw)), ThemePreference::Light, "{raw:?}");
    }
}

// =============================================================
// ThemePreference presentation
// =============================================================

#[test]
fn toggled_twice_is_identity() {
    for theme in [ThemePreference::Light, ThemePreference::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn as_str_round_trips_through_from_stored() {
    for theme in [ThemePreference::Light, ThemePreference::Dark] {
        assert_eq!(ThemePreference::from_stored(Some(theme.as_str())), theme);
    }
}

#[test]
fn body_and_icon_classes_follow_theme() {
    assert_eq!(ThemePreference::Dark.body_class(), "bg-dark text-white");
    assert_eq!(ThemePreference::Light.body_class(), "bg-light text-dark");
    assert_eq!(ThemePreference::Dark.icon_class(), "fa-moon");
    assert_eq!(ThemePreference::Light.icon_class(), "fa-sun");
}

#[test]
fn serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_value(ThemePreference::Dark).unwrap(), serde_json::json!("dark"));
    let parsed: ThemePreference = serde_json::from_str("\"light\"").unwrap();
    assert_eq!(parsed, ThemePreference::Light);
}

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_theme_is_light() {
    let state = UiState::default();
    assert_eq!(state.theme, ThemePreference::Light);
    assert!(!state.theme.is_dark());
}
