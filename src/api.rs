use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error};

use crate::logic::errors::format_error_message;

/// Header sent so development tunnels serve the API instead of an interstitial page
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error - could not connect to server";
pub const NOT_FOUND_MESSAGE: &str = "Business not found";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch business data";

/// Creation-ordered identifier as issued by the directory backend
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    pub timestamp: i64,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub creation_time: String,
}

impl Identifier {
    /// Timestamp component as a string. Only unique enough for display.
    pub fn display_key(&self) -> String {
        self.timestamp.to_string()
    }

    /// Parse `creation_time` as RFC 3339, if the backend sent one
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.creation_time)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessLocation {
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub display_name: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub street: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub city: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub state: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub postcode: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub country: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Platforms a business can link to, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SocialPlatform {
    #[serde(rename = "instagram")]
    Instagram,
    #[serde(rename = "youTube")]
    YouTube,
    #[serde(rename = "linkedIn")]
    LinkedIn,
    #[serde(rename = "website")]
    Website,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Instagram,
        SocialPlatform::YouTube,
        SocialPlatform::LinkedIn,
        SocialPlatform::Website,
    ];

    /// Wire name of the platform
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "instagram",
            SocialPlatform::YouTube => "youTube",
            SocialPlatform::LinkedIn => "linkedIn",
            SocialPlatform::Website => "website",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Website => "Website",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub you_tube: Option<String>,
    #[serde(default)]
    pub linked_in: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialMedia {
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        match platform {
            SocialPlatform::Instagram => self.instagram.as_deref(),
            SocialPlatform::YouTube => self.you_tube.as_deref(),
            SocialPlatform::LinkedIn => self.linked_in.as_deref(),
            SocialPlatform::Website => self.website.as_deref(),
        }
    }
}

/// Helper function to deserialize null as empty vector
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Treat a JSON null string as empty, the same as an absent one
fn deserialize_null_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessData {
    pub id: Identifier,
    pub user_id: Identifier,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub business_name: String,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub category: String,
    pub location: BusinessLocation,
    #[serde(default, deserialize_with = "deserialize_null_string")]
    pub description: String,
    pub company_size: i64,
    pub founded_year: i32,
    /// Display order; index 0 is the primary image
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub business_image_urls: Vec<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
}

/// Classified failure of a business fetch
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response reached us (connection refused, DNS, timeout)
    #[error("Network error - could not connect to server")]
    Network,

    #[error("Business not found")]
    NotFound,

    /// Any other non-2xx response
    #[error("{message}")]
    Server { status: u16, message: String },

    /// Anything that doesn't fit above, e.g. a 2xx with a malformed body
    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// 0 when no HTTP response was involved, otherwise the HTTP status
    pub fn status(&self) -> u16 {
        match self {
            ApiError::Network | ApiError::Unexpected(_) => 0,
            ApiError::NotFound => StatusCode::NOT_FOUND.as_u16(),
            ApiError::Server { status, .. } => *status,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Read-only client for the business directory API
#[derive(Clone)]
pub struct BusinessClient {
    base_url: String,
    client: Client,
}

impl BusinessClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Use a preconfigured reqwest client (proxy, TLS roots, timeouts)
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn business_url(&self, id: &str) -> String {
        format!(
            "{}/api/ApplicationUser/business/{}",
            self.base_url,
            urlencoding::encode(id)
        )
    }

    /// Fetch a single business profile.
    ///
    /// Issues exactly one GET; failures are classified into an [`ApiError`]
    /// and returned, never retried.
    pub async fn get_business_by_id(&self, id: &str) -> Result<BusinessData, ApiError> {
        let url = self.business_url(id);
        debug!(%url, "Fetching business data");

        let result = self.fetch_business(&url).await;
        if let Err(e) = &result {
            error!(status = e.status(), error = %e, "Error in get_business_by_id");
        }
        result
    }

    async fn fetch_business(&self, url: &str) -> Result<BusinessData, ApiError> {
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .header(TUNNEL_BYPASS_HEADER, "true")
            .send()
            .await
            .map_err(|e| {
                debug!(error = %format_error_message(&e), "No response from server");
                ApiError::Network
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), ok = status.is_success(), "Response received");

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !status.is_success() {
            let message = match response.text().await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => DEFAULT_FAILURE_MESSAGE.to_string(),
                Err(e) => {
                    debug!(error = %e, "Could not read error response");
                    DEFAULT_FAILURE_MESSAGE.to_string()
                }
            };
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Unexpected(format_error_message(&e)))?;

        let business: BusinessData =
            serde_json::from_str(&body).map_err(|e| ApiError::Unexpected(e.to_string()))?;
        debug!(business = %business.business_name, "Fetched business data");

        Ok(business)
    }
}
