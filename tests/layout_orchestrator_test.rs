//! Integration tests for the page shell
//!
//! The orchestrator is driven through recording collaborators so the calls it
//! makes on the session, router and animation engine can be checked.

use bizdir::layout::LayoutOrchestrator;
use bizdir::logic::route::{RouteKind, BROWSE_PATH};
use bizdir::messages::LayoutMsg;
use bizdir::services::{AnimationRefresher, Router};
use bizdir::session::{SessionContext, UserPatch, UserProfile};

#[derive(Default)]
struct RecordingSession {
    user: Option<UserProfile>,
    logout_calls: usize,
}

impl SessionContext for RecordingSession {
    fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    fn login(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    fn logout(&mut self) {
        self.logout_calls += 1;
        self.user = None;
    }

    fn update_user(&mut self, patch: UserPatch) {
        if let Some(user) = self.user.as_mut() {
            user.apply(patch);
        }
    }
}

struct RecordingRouter {
    path: String,
    navigations: Vec<String>,
}

impl Router for RecordingRouter {
    fn current_path(&self) -> &str {
        &self.path
    }

    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
        self.path = path.to_string();
    }
}

#[derive(Default)]
struct RecordingAnimations {
    inits: usize,
    refreshes: usize,
}

impl AnimationRefresher for RecordingAnimations {
    fn init(&mut self) {
        self.inits += 1;
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}

type Shell = LayoutOrchestrator<RecordingSession, RecordingRouter, RecordingAnimations>;

fn user() -> UserProfile {
    UserProfile {
        id: "u-7".to_string(),
        name: "Sam".to_string(),
        email: "sam@example.com".to_string(),
        avatar_url: None,
    }
}

fn mount(path: &str, logged_in: bool) -> Shell {
    let session = RecordingSession {
        user: logged_in.then(user),
        logout_calls: 0,
    };
    let router = RecordingRouter {
        path: path.to_string(),
        navigations: Vec::new(),
    };
    LayoutOrchestrator::mount(session, router, RecordingAnimations::default())
}

#[test]
fn test_mount_inits_animations_once() {
    let mut shell = mount("/", true);
    assert_eq!(shell.animations().inits, 1);
    assert_eq!(shell.animations().refreshes, 1);

    shell.update(LayoutMsg::route_changed("/browse"));
    shell.update(LayoutMsg::route_changed("/business/1"));
    assert_eq!(shell.animations().inits, 1);
    assert_eq!(shell.animations().refreshes, 3);
}

#[test]
fn test_auth_route_suppresses_open_modal() {
    let mut shell = mount("/", true);
    shell.update(LayoutMsg::ProfileClick);
    assert!(shell.frame().profile_modal.is_some());

    shell.update(LayoutMsg::route_changed("/auth/login"));
    assert_eq!(shell.route(), RouteKind::AuthRoute);
    // Modal flag survives the navigation but nothing is rendered
    assert!(shell.modal_open());
    let frame = shell.frame();
    assert!(frame.nav.is_none());
    assert!(!frame.footer);
    assert!(frame.profile_modal.is_none());

    // Coming back shows the modal that was left open
    shell.update(LayoutMsg::route_changed("/"));
    assert!(shell.frame().profile_modal.is_some());
}

#[test]
fn test_logout_is_idempotent() {
    let mut shell = mount("/", true);

    // From closed
    shell.update(LayoutMsg::Logout);
    assert!(!shell.modal_open());
    assert_eq!(shell.session().logout_calls, 1);

    // From open
    shell.session_mut().login(user());
    shell.update(LayoutMsg::ProfileClick);
    assert!(shell.modal_open());
    shell.update(LayoutMsg::Logout);
    assert!(!shell.modal_open());
    assert_eq!(shell.session().logout_calls, 2);
    assert!(!shell.session().is_logged_in());

    // Already logged out
    shell.update(LayoutMsg::Logout);
    assert!(!shell.modal_open());
    assert_eq!(shell.session().logout_calls, 3);
}

#[test]
fn test_browse_click_uses_router() {
    let mut shell = mount("/business/1", false);
    shell.update(LayoutMsg::BrowseClick);

    assert_eq!(shell.router().navigations, vec![BROWSE_PATH.to_string()]);
    assert_eq!(shell.model().path, BROWSE_PATH);
    assert_eq!(shell.animations().refreshes, 2);
}

#[test]
fn test_profile_click_unreachable_on_auth_route() {
    let mut shell = mount("/auth/signup", true);
    shell.update(LayoutMsg::ProfileClick);
    assert!(!shell.modal_open());

    shell.update(LayoutMsg::route_changed("/"));
    assert!(shell.frame().profile_modal.is_none());
}

#[test]
fn test_nav_props_follow_session() {
    let mut shell = mount("/", false);
    let nav = shell.frame().nav.unwrap();
    assert!(!nav.is_logged_in);
    assert!(nav.user.is_none());

    shell.session_mut().login(user());
    shell.session_mut().update_user(UserPatch {
        name: Some("Samantha".to_string()),
        ..Default::default()
    });
    let nav = shell.frame().nav.unwrap();
    assert!(nav.is_logged_in);
    assert_eq!(nav.user.map(|u| u.name.as_str()), Some("Samantha"));
}
