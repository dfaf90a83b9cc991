use super::*;

// =============================================================
// AuthState transitions
// =============================================================

#[test]
fn initial_without_required_login_is_authenticated() {
    assert_eq!(AuthState::initial(false), AuthState::Authenticated);
}

#[test]
fn initial_with_required_login_is_unauthenticated() {
    assert_eq!(AuthState::initial(true), AuthState::Unauthenticated);
}

#[test]
fn sign_out_then_login_round_trips() {
    let mut state = AuthState::Authenticated;
    state.sign_out();
    assert!(!state.is_authenticated());
    state.login_success();
    assert!(state.is_authenticated());
}

#[test]
fn transitions_are_idempotent() {
    let mut state = AuthState::Unauthenticated;
    state.sign_out();
    assert_eq!(state, AuthState::Unauthenticated);
    state.login_success();
    state.login_success();
    assert_eq!(state, AuthState::Authenticated);
}
