use super::*;

#[test]
fn default_is_light() {
    let state = ThemeState::default();
    assert!(!state.dark);
    assert_eq!(state.theme_name(), "light");
}

#[test]
fn toggle_applies_optimistically() {
    let mut state = ThemeState::default();
    let change = state.toggle(true);
    assert!(state.dark);
    assert_eq!(change, ThemeChange { previous: false, next: true });
    assert_eq!(state.theme_name(), "dark");
}

#[test]
fn settle_success_keeps_value() {
    let mut state = ThemeState::default();
    let change = state.toggle(true);
    let rolled_back = state.settle::<String>(change, &Ok(true));
    assert!(!rolled_back);
    assert!(state.dark);
}

#[test]
fn settle_reported_failure_reverts() {
    let mut state = ThemeState::default();
    let change = state.toggle(true);
    assert!(state.settle::<String>(change, &Ok(false)));
    assert!(!state.dark);
}

#[test]
fn settle_transport_failure_reverts() {
    let mut state = ThemeState { dark: true };
    let change = state.toggle(false);
    assert!(state.settle(change, &Err("offline")));
    assert!(state.dark);
}

#[test]
fn rapid_toggles_settle_within_observed_values() {
    // first toggle succeeds, second fails; arrival order varies
    let initial = false;

    let mut in_order = ThemeState { dark: initial };
    let first = in_order.toggle(true);
    let second = in_order.toggle(false);
    in_order.settle::<&str>(first, &Ok(true));
    in_order.settle(second, &Err("500"));

    let mut reversed = ThemeState { dark: initial };
    let first = reversed.toggle(true);
    let second = reversed.toggle(false);
    reversed.settle(second, &Err("500"));
    reversed.settle::<&str>(first, &Ok(true));

    let allowed = [initial, first.next, second.next];
    assert!(allowed.contains(&in_order.dark));
    assert!(allowed.contains(&reversed.dark));
    // the failed second toggle reverts to the first toggle's value
    assert!(in_order.dark);
    assert!(reversed.dark);
}

#[test]
fn rapid_toggles_first_failure_after_second_success_reverts_to_initial() {
    let mut state = ThemeState { dark: false };
    let first = state.toggle(true);
    let second = state.toggle(false);
    state.settle::<&str>(second, &Ok(true));
    state.settle(first, &Err("timeout"));
    // stale rollback: displayed value no longer tracks the last settled request
    assert!(!state.dark);
}
