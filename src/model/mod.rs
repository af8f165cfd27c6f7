//! Pure Layout Model
//!
//! Cloneable state owned by the layout orchestrator:
//!
//! - **path / route**: current location and its classification
//! - **UiModel**: modal state
//!
//! Auth state is not here; it is read from the session on demand.

pub mod ui;

pub use ui::UiModel;

use crate::logic::route::{classify_route, RouteKind};

/// Root layout model
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Model {
    /// Path the router currently reports
    pub path: String,

    /// Classification of `path`, recomputed whenever it changes
    pub route: RouteKind,

    pub ui: UiModel,
}

impl Model {
    /// Create initial model for the path the page mounted on
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            route: classify_route(path),
            ui: UiModel::new(),
        }
    }

    /// Record a new path. Returns false if it is the path already shown.
    pub fn set_path(&mut self, path: &str) -> bool {
        if self.path == path {
            return false;
        }
        self.path = path.to_string();
        self.route = classify_route(path);
        true
    }

    pub fn is_auth_route(&self) -> bool {
        self.route == RouteKind::AuthRoute
    }
}
