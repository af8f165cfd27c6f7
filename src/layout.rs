//! Page shell orchestration
//!
//! Decides which chrome (navigation bar, footer, profile modal) is rendered
//! for the current route and session, and reacts to shell-level actions.
//! The session, router and animation engine are injected collaborators.

use tracing::{debug, info};

use crate::logic::layout::{calculate_chrome, ChromeVisibility};
use crate::logic::route::{RouteKind, BROWSE_PATH};
use crate::messages::LayoutMsg;
use crate::model::Model;
use crate::services::{AnimationRefresher, Router};
use crate::session::{SessionContext, UserProfile};

/// Props handed to the navigation bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBar<'a> {
    pub is_logged_in: bool,
    pub user: Option<&'a UserProfile>,
}

/// Snapshot of what the shell renders around the main content slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutFrame<'a> {
    pub nav: Option<NavBar<'a>>,
    pub footer: bool,
    /// User shown in the profile modal, if the modal is rendered
    pub profile_modal: Option<&'a UserProfile>,
}

pub struct LayoutOrchestrator<S, R, A> {
    model: Model,
    session: S,
    router: R,
    animations: A,
}

impl<S, R, A> LayoutOrchestrator<S, R, A>
where
    S: SessionContext,
    R: Router,
    A: AnimationRefresher,
{
    /// Mount the shell on the router's current path.
    ///
    /// Initializes the animation engine once and refreshes it for the
    /// initial route.
    pub fn mount(session: S, router: R, mut animations: A) -> Self {
        let model = Model::new(router.current_path());
        animations.init();
        animations.refresh();
        debug!(path = %model.path, route = ?model.route, "Layout mounted");

        Self {
            model,
            session,
            router,
            animations,
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut S {
        &mut self.session
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn animations(&self) -> &A {
        &self.animations
    }

    pub fn route(&self) -> RouteKind {
        self.model.route
    }

    pub fn modal_open(&self) -> bool {
        self.model.ui.modal_open
    }

    pub fn visibility(&self) -> ChromeVisibility {
        calculate_chrome(
            self.model.route,
            self.model.ui.modal_open,
            self.session.user().is_some(),
        )
    }

    /// Current frame with the props each region receives
    pub fn frame(&self) -> LayoutFrame<'_> {
        let visibility = self.visibility();

        LayoutFrame {
            nav: visibility.nav.then(|| NavBar {
                is_logged_in: self.session.is_logged_in(),
                user: self.session.user(),
            }),
            footer: visibility.footer,
            profile_modal: if visibility.profile_modal {
                self.session.user()
            } else {
                None
            },
        }
    }

    /// Dispatch a single message
    pub fn update(&mut self, msg: LayoutMsg) {
        match msg {
            LayoutMsg::RouteChanged(path) => self.route_changed(&path),
            LayoutMsg::ProfileClick => self.profile_click(),
            LayoutMsg::Logout => self.logout(),
            LayoutMsg::ModalClose => self.modal_close(),
            LayoutMsg::BrowseClick => self.browse_click(),
        }
    }

    /// Re-classify the route and refresh animations. Same-path reports are ignored.
    pub fn route_changed(&mut self, path: &str) {
        if !self.model.set_path(path) {
            return;
        }
        debug!(path = %path, route = ?self.model.route, "Route changed");
        self.animations.refresh();
    }

    /// Open the profile modal. Only reachable while the navigation bar is shown.
    pub fn profile_click(&mut self) {
        if !self.visibility().nav {
            debug!(path = %self.model.path, "Ignoring profile click without navigation bar");
            return;
        }
        self.model.ui.open_profile_modal();
    }

    /// End the session and close the modal, whatever state it was in
    pub fn logout(&mut self) {
        info!("Logging out");
        self.session.logout();
        self.model.ui.close_profile_modal();
    }

    pub fn modal_close(&mut self) {
        self.model.ui.close_profile_modal();
    }

    /// Navigate to the business listing. Modal state is left alone.
    pub fn browse_click(&mut self) {
        self.router.navigate(BROWSE_PATH);
        self.sync_route();
    }

    /// Pick up a path change made through the router
    pub fn sync_route(&mut self) {
        let path = self.router.current_path().to_string();
        self.route_changed(&path);
    }
}
