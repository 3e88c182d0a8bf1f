//! Throwaway per-session UI flags.

/// Presentation flags orthogonal to the group store; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiState {
    /// Collapsible sidebar visibility.
    pub sidebar_open: bool,
    /// True until the initial hydration result is shown. Distinguishes
    /// "still hydrating" from "hydrated empty"; never an error state.
    pub loading: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_open: false,
            loading: true,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::UiState;

    #[test]
    fn starts_loading_with_sidebar_closed() {
        let state = UiState::new();
        assert!(state.loading);
        assert!(!state.sidebar_open);
    }

    #[test]
    fn sidebar_toggle_flips_both_ways() {
        let mut state = UiState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_open);
        state.toggle_sidebar();
        assert!(!state.sidebar_open);
    }

    #[test]
    fn finish_loading_is_one_way() {
        let mut state = UiState::new();
        state.finish_loading();
        state.finish_loading();
        assert!(!state.loading);
    }
}
