use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_cart_open() {
    let state = UiState::default();
    assert!(state.cart_open);
}
