//! Route classification
//!
//! Pure functions deciding how a path affects the page shell.

/// Prefix shared by sign-in, sign-up and other identity pages
pub const AUTH_ROUTE_PREFIX: &str = "/auth/";

/// Listing page opened by the "browse" action
pub const BROWSE_PATH: &str = "/browse";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
    AuthRoute,
    NormalRoute,
}

/// Classify a path by prefix
///
/// # Examples
/// ```
/// use bizdir::logic::route::{classify_route, RouteKind};
///
/// assert_eq!(classify_route("/auth/login"), RouteKind::AuthRoute);
/// assert_eq!(classify_route("/auth"), RouteKind::NormalRoute);
/// assert_eq!(classify_route("/business/42"), RouteKind::NormalRoute);
/// ```
pub fn classify_route(path: &str) -> RouteKind {
    if path.starts_with(AUTH_ROUTE_PREFIX) {
        RouteKind::AuthRoute
    } else {
        RouteKind::NormalRoute
    }
}
