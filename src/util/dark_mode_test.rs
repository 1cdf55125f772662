#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn read_preference_is_false_in_non_hydrate_tests() {
    assert!(!read_preference());
}

#[test]
fn parse_theme_recognizes_known_values() {
    assert_eq!(parse_theme("dark"), Some(true));
    assert_eq!(parse_theme(" light "), Some(false));
    assert_eq!(parse_theme("sepia"), None);
    assert_eq!(parse_theme(""), None);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
