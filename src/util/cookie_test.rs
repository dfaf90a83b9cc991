use super::*;

// =============================================================
// read_cookie
// =============================================================

#[test]
fn read_cookie_finds_key_among_pairs() {
    let header = "session=abc; theme=dark; lang=en";
    assert_eq!(read_cookie(header, "theme"), Some("dark".to_owned()));
    assert_eq!(read_cookie(header, "lang"), Some("en".to_owned()));
}

#[test]
fn read_cookie_missing_key_is_none() {
    assert_eq!(read_cookie("session=abc", "theme"), None);
    assert_eq!(read_cookie("", "theme"), None);
}

#[test]
fn read_cookie_first_match_wins() {
    assert_eq!(read_cookie("theme=dark; theme=light", "theme"), Some("dark".to_owned()));
}

#[test]
fn read_cookie_decodes_percent_encoding() {
    assert_eq!(
        read_cookie("greeting=hello%20world%3B", "greeting"),
        Some("hello world;".to_owned())
    );
}

#[test]
fn read_cookie_strips_surrounding_quotes() {
    assert_eq!(read_cookie("theme=\"dark\"", "theme"), Some("dark".to_owned()));
}

#[test]
fn read_cookie_does_not_match_key_prefix() {
    assert_eq!(read_cookie("themes=dark", "theme"), None);
}

// =============================================================
// format_cookie
// =============================================================

#[test]
fn format_cookie_with_expiry_sets_max_age_and_path() {
    let raw = format_cookie("theme", "dark", &CookieOptions::expiring_in_days(365));
    assert!(raw.starts_with("theme=dark"));
    assert!(raw.contains("Path=/"));
    assert!(raw.contains("Max-Age=31536000"));
    assert!(raw.contains("SameSite=Lax"));
}

#[test]
fn format_cookie_without_expiry_is_session_cookie() {
    let raw = format_cookie("theme", "light", &CookieOptions::default());
    assert!(raw.starts_with("theme=light"));
    assert!(!raw.contains("Max-Age"));
}

#[test]
fn format_cookie_encodes_reserved_characters() {
    let raw = format_cookie("note", "a b;c", &CookieOptions::default());
    assert!(!raw.starts_with("note=a b;c"));
    assert_eq!(read_cookie(raw.split("; ").next().unwrap(), "note"), Some("a b;c".to_owned()));
}

#[test]
fn cookie_options_default_path_is_root() {
    let options = CookieOptions::expiring_in_days(7);
    assert_eq!(options.path, "/");
    assert_eq!(options.expires_in_days, Some(7));
}
