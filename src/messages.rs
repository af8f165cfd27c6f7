//! Message types for the layout update loop
//!
//! Every change to the shell flows through a [`LayoutMsg`]:
//! - Router events (the current path changed)
//! - User input on the navigation bar and profile modal

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutMsg {
    /// Router reports a new current path
    RouteChanged(String),

    /// Profile button in the navigation bar
    ProfileClick,

    /// Logout from the navigation bar or the profile modal
    Logout,

    /// Profile modal dismissed
    ModalClose,

    /// "Browse" button in the navigation bar
    BrowseClick,
}

impl LayoutMsg {
    pub fn route_changed(path: impl Into<String>) -> Self {
        LayoutMsg::RouteChanged(path.into())
    }
}

impl FromStr for LayoutMsg {
    type Err = String;

    /// Parse a command-line event: a path (starting with `/`) or an action name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with('/') {
            return Ok(LayoutMsg::route_changed(s));
        }
        match s {
            "profile" => Ok(LayoutMsg::ProfileClick),
            "logout" => Ok(LayoutMsg::Logout),
            "close" => Ok(LayoutMsg::ModalClose),
            "browse" => Ok(LayoutMsg::BrowseClick),
            other => Err(format!(
                "unknown event '{}' (expected a /path, profile, logout, close or browse)",
                other
            )),
        }
    }
}
