//! Formatting and display logic
//!
//! Pure functions turning fetched business data into human-readable strings.

use serde::Serialize;

use crate::api::{BusinessData, BusinessLocation, SocialMedia, SocialPlatform};

/// Value the backend uses for "no value" in location fields
const ABSENT_SENTINEL: &str = "-";

pub const PLACEHOLDER_IMAGE_URL: &str = "/api/placeholder/800/600";

/// A social platform with a usable link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

/// Display-ready projection of a business
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDisplay {
    /// Identifier timestamp only. Not unique enough to key storage on.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub location: String,
    pub full_address: String,
    pub company_size: &'static str,
    pub founded_year: i32,
    pub images: Vec<String>,
    pub social_media: SocialMedia,
    pub available_platforms: Vec<SocialLink>,
}

fn is_present(part: &str) -> bool {
    !part.is_empty() && part != ABSENT_SENTINEL
}

/// Join the present parts, falling back to the display name and then `fallback`
fn join_or_fallback(parts: &[&str], display_name: &str, fallback: &str) -> String {
    let joined = parts
        .iter()
        .copied()
        .filter(|part| is_present(part))
        .collect::<Vec<_>>()
        .join(", ");

    if !joined.is_empty() {
        joined
    } else if !display_name.is_empty() {
        display_name.to_string()
    } else {
        fallback.to_string()
    }
}

/// Short "city, state, country" location
///
/// # Examples
/// ```
/// use bizdir::api::BusinessLocation;
/// use bizdir::logic::formatting::format_location;
///
/// let location = BusinessLocation {
///     city: "Austin".to_string(),
///     state: "TX".to_string(),
///     country: "USA".to_string(),
///     display_name: "x".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(format_location(&location), "Austin, TX, USA");
/// ```
pub fn format_location(location: &BusinessLocation) -> String {
    join_or_fallback(
        &[
            location.city.as_str(),
            location.state.as_str(),
            location.country.as_str(),
        ],
        &location.display_name,
        "Location not specified",
    )
}

/// Full postal address, street first
pub fn full_address(location: &BusinessLocation) -> String {
    join_or_fallback(
        &[
            location.street.as_str(),
            location.city.as_str(),
            location.state.as_str(),
            location.postcode.as_str(),
            location.country.as_str(),
        ],
        &location.display_name,
        "Address not available",
    )
}

/// Map a headcount to its size band. Upper bounds are inclusive.
///
/// # Examples
/// ```
/// use bizdir::logic::formatting::company_size_label;
///
/// assert_eq!(company_size_label(10), "1-10 employees");
/// assert_eq!(company_size_label(11), "11-50 employees");
/// assert_eq!(company_size_label(501), "500+ employees");
/// ```
pub fn company_size_label(size: i64) -> &'static str {
    match size {
        i64::MIN..=10 => "1-10 employees",
        11..=50 => "11-50 employees",
        51..=200 => "51-200 employees",
        201..=500 => "201-500 employees",
        _ => "500+ employees",
    }
}

/// Image at `index`, or the placeholder when there is none
pub fn business_image_url(business: &BusinessData, index: usize) -> &str {
    business
        .business_image_urls
        .get(index)
        .map(String::as_str)
        .filter(|url| !url.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE_URL)
}

/// Platforms whose link is non-blank, in platform declaration order
pub fn available_social_platforms(social_media: &SocialMedia) -> Vec<SocialLink> {
    SocialPlatform::ALL
        .iter()
        .filter_map(|&platform| {
            social_media
                .get(platform)
                .filter(|url| !url.trim().is_empty())
                .map(|url| SocialLink {
                    platform,
                    url: url.to_string(),
                })
        })
        .collect()
}

/// Ensure a link carries a scheme so it opens as an absolute URL
pub fn format_social_url(url: &str) -> String {
    if url.is_empty() {
        String::new()
    } else if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

pub fn convert_to_display_format(business: &BusinessData) -> BusinessDisplay {
    BusinessDisplay {
        id: business.id.display_key(),
        name: business.business_name.clone(),
        description: business.description.clone(),
        category: business.category.clone(),
        location: format_location(&business.location),
        full_address: full_address(&business.location),
        company_size: company_size_label(business.company_size),
        founded_year: business.founded_year,
        images: business.business_image_urls.clone(),
        social_media: business.social_media.clone(),
        available_platforms: available_social_platforms(&business.social_media),
    }
}
