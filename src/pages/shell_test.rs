use super::*;

#[test]
fn default_section_is_overview() {
    assert_eq!(Section::default(), Section::Overview);
    assert_eq!(Section::ALL[0], Section::Overview);
}

#[test]
fn section_titles_are_unique() {
    let titles: std::collections::HashSet<_> = Section::ALL.iter().map(|s| s.title()).collect();
    assert_eq!(titles.len(), Section::ALL.len());
}

#[test]
fn sidebar_and_card_classes_follow_theme() {
    assert!(sidebar_class(true).contains("bg-dark"));
    assert!(sidebar_class(false).contains("bg-light"));
    assert!(card_class(true).contains("text-white"));
    assert!(card_class(false).contains("text-dark"));
}

#[test]
fn sidebar_is_collapsible_on_mobile() {
    for dark in [true, false] {
        assert!(sidebar_class(dark).contains("collapse"));
    }
}

#[test]
fn nav_link_active_ignores_theme() {
    assert_eq!(nav_link_class(true, true), "nav-link active");
    assert_eq!(nav_link_class(true, false), "nav-link active");
    assert_eq!(nav_link_class(false, true), "nav-link text-white");
}
