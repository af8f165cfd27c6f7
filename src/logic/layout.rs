//! Layout calculation logic
//!
//! Pure functions deciding which regions of the page shell are present.

use super::route::RouteKind;

/// Which regions of the shell are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub nav: bool,
    pub footer: bool,
    pub profile_modal: bool,
}

/// Navigation bar and footer are shown on every non-auth route
pub fn chrome_visible(route: RouteKind) -> bool {
    route == RouteKind::NormalRoute
}

/// Calculate region presence from route, modal flag and whether a user is signed in
///
/// The modal is suppressed on auth routes even if it was left open.
///
/// # Examples
/// ```
/// use bizdir::logic::layout::calculate_chrome;
/// use bizdir::logic::route::RouteKind;
///
/// let shown = calculate_chrome(RouteKind::NormalRoute, true, true);
/// assert!(shown.nav && shown.footer && shown.profile_modal);
///
/// let hidden = calculate_chrome(RouteKind::AuthRoute, true, true);
/// assert!(!hidden.nav && !hidden.footer && !hidden.profile_modal);
/// ```
pub fn calculate_chrome(route: RouteKind, modal_open: bool, user_present: bool) -> ChromeVisibility {
    let chrome = chrome_visible(route);

    ChromeVisibility {
        nav: chrome,
        footer: chrome,
        profile_modal: modal_open && chrome && user_present,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_ignores_auth_state() {
        for user_present in [false, true] {
            let chrome = calculate_chrome(RouteKind::NormalRoute, false, user_present);
            assert!(chrome.nav);
            assert!(chrome.footer);
            assert!(!chrome.profile_modal);
        }
    }

    #[test]
    fn test_auth_route_hides_everything() {
        for modal_open in [false, true] {
            for user_present in [false, true] {
                let chrome = calculate_chrome(RouteKind::AuthRoute, modal_open, user_present);
                assert_eq!(
                    chrome,
                    ChromeVisibility {
                        nav: false,
                        footer: false,
                        profile_modal: false
                    }
                );
            }
        }
    }

    #[test]
    fn test_modal_requires_user() {
        let chrome = calculate_chrome(RouteKind::NormalRoute, true, false);
        assert!(!chrome.profile_modal);

        let chrome = calculate_chrome(RouteKind::NormalRoute, true, true);
        assert!(chrome.profile_modal);
    }
}
