//! Presentation-only derived state.
//!
//! # Responsibility
//! - Compute pure derived views (pagination windows) over the group list.
//! - Track throwaway UI flags (sidebar, loading) that never round-trip
//!   through storage.

pub mod pager;
pub mod ui_state;

pub use pager::Pager;
pub use ui_state::UiState;
