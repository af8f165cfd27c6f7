//! External collaborators the page shell talks to
//!
//! - router: current path and navigation
//! - animation: scroll-animation refresh on route change

pub mod animation;
pub mod router;

pub use animation::{AnimationRefresher, TracingAnimations};
pub use router::{HistoryRouter, Router};
