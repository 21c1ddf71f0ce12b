use super::*;

#[test]
fn slugify_lowercases_and_hyphenates() {
    assert_eq!(slugify("Job Search Sites"), "job-search-sites");
    assert_eq!(slugify("Email"), "email");
}

#[test]
fn slugify_collapses_whitespace_runs() {
    assert_eq!(slugify("  First \t Name "), "first-name");
    assert_eq!(slugify(""), "");
}

#[test]
fn suffixed_joins_with_hyphen() {
    assert_eq!(suffixed("loading", "spinner"), "loading-spinner");
    assert_eq!(suffixed("status-bar", "message"), "status-bar-message");
}
