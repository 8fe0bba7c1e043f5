#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the session page chrome.
#[derive(Clone, Debug)]
pub struct UiState {
    pub cart_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { cart_open: true }
    }
}
