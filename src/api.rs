use crate::config::Config;
use crate::models::SalonsResponse;
use reqwest::{Client, Error as ReqwestError, StatusCode};
use thiserror::Error;
use tracing::{debug, error};

/// Fallback banner text when a fetch error carries no usable message.
pub const LOAD_SALONS_FALLBACK: &str = "Failed to load salons";

#[derive(Error, Debug)]
pub enum SalonApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] ReqwestError),
    #[error("Salon listing not found")]
    NotFound,
    #[error("Request failed with status {0}")]
    Status(StatusCode),
}

/// Client for the salon backend REST API.
#[derive(Clone)]
pub struct SalonApi {
    client: Client,
    base_url: String,
}

impl SalonApi {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config.api_url.clone())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Fetch the full salon collection. No query parameters: filtering is
    /// done client-side.
    pub async fn get_salons(&self) -> Result<SalonsResponse, SalonApiError> {
        let url = format!("{}/salons", self.base_url);
        debug!("Fetching salon listing from {url}");

        let response = self
            .client
            .get(&url)
            .header("User-Agent", "salonspot/1.0")
            .send()
            .await?;

        if response.status().is_success() {
            let listing: SalonsResponse = response.json().await?;
            debug!(
                "Salon listing fetched ({} salons)",
                listing.salons.as_ref().map(Vec::len).unwrap_or(0)
            );
            Ok(listing)
        } else {
            error!("Salon listing request failed with {}", response.status());
            Err(status_error(response.status()))
        }
    }
}

/// Map a non-success response status to an error. Total over all statuses,
/// including ones reqwest's `error_for_status` would not treat as errors.
fn status_error(status: StatusCode) -> SalonApiError {
    if status == StatusCode::NOT_FOUND {
        SalonApiError::NotFound
    } else {
        SalonApiError::Status(status)
    }
}

/// Banner text for a failed listing fetch: the error's own message, or the
/// fixed fallback when it renders empty.
pub fn load_error_message(error: &SalonApiError) -> String {
    message_or_fallback(error.to_string())
}

fn message_or_fallback(message: String) -> String {
    if message.is_empty() {
        LOAD_SALONS_FALLBACK.to_string()
    } else {
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_salon_api_creation() {
        let api = SalonApi::with_base_url("http://localhost:5000/api".to_string());
        assert_eq!(api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_load_error_message_uses_error_display() {
        let message = load_error_message(&SalonApiError::NotFound);
        assert_eq!(message, "Salon listing not found");
    }

    #[test]
    fn test_load_error_message_status_variant() {
        let message = load_error_message(&SalonApiError::Status(StatusCode::BAD_GATEWAY));
        assert_eq!(message, "Request failed with status 502 Bad Gateway");
    }

    #[test]
    fn test_empty_message_falls_back() {
        assert_eq!(message_or_fallback(String::new()), LOAD_SALONS_FALLBACK);
        assert_eq!(message_or_fallback(String::new()), "Failed to load salons");
    }

    #[test]
    fn test_non_empty_message_passes_through() {
        assert_eq!(
            message_or_fallback("Network Error".to_string()),
            "Network Error"
        );
    }

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND),
            SalonApiError::NotFound
        ));
        match status_error(StatusCode::INTERNAL_SERVER_ERROR) {
            SalonApiError::Status(status) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected Status error, got {other}"),
        }
        // Statuses reqwest would not classify as errors still map cleanly
        match status_error(StatusCode::NOT_MODIFIED) {
            SalonApiError::Status(status) => assert_eq!(status, StatusCode::NOT_MODIFIED),
            other => panic!("expected Status error, got {other}"),
        }
    }

    // Note: fetch tests would require a live backend or mocked responses;
    // deserialization of the payload shape is covered in models.rs.
}
