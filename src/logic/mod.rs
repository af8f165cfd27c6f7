//! Business Logic
//!
//! This module contains pure functions that can be unit tested:
//! - errors: ApiError classification and cause extraction
//! - formatting: Business data to display strings
//! - layout: Shell region visibility
//! - route: Route classification

pub mod errors;
pub mod formatting;
pub mod layout;
pub mod route;
