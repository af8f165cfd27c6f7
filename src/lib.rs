//! Business directory client
//!
//! Fetches business profiles, formats them for display, and drives the
//! session-aware page shell around them.

pub mod api;
pub mod config;
pub mod layout;
pub mod logic;
pub mod messages;
pub mod model;
pub mod services;
pub mod session;

pub use api::{ApiError, BusinessClient, BusinessData};
pub use layout::{LayoutFrame, LayoutOrchestrator};
