//! UI Model
//!
//! Local state of the page shell. Lives as long as the page and is never
//! persisted.

/// Shell-local UI state
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiModel {
    /// Whether the profile modal has been requested
    pub modal_open: bool,
}

impl UiModel {
    /// Create initial UI model (modal closed)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_profile_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_profile_modal(&mut self) {
        self.modal_open = false;
    }
}
