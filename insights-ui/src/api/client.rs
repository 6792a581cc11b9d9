//! HTTP API Client
//!
//! Browser-side [`AnalyticsSource`] for the FixItNow backend.

use async_trait::async_trait;
use fixitnow_insights::analytics::DASHBOARD_ENDPOINT;
use fixitnow_insights::{AnalyticsPayload, AnalyticsSource, FetchFailure, FetchResult};
use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

const API_URL_KEY: &str = "fixitnow_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(API_URL_KEY).ok().flatten());

    normalize_base(stored.as_deref().unwrap_or(DEFAULT_API_BASE))
}

/// Remove trailing slashes so endpoint paths join cleanly
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

/// Full URL of the admin analytics endpoint under `base`
pub fn dashboard_url(base: &str) -> String {
    format!("{}{}", normalize_base(base), DASHBOARD_ENDPOINT)
}

/// Fetches the admin analytics with the signed-in admin's token
pub struct HttpAnalyticsSource {
    url: String,
    token: Option<String>,
}

impl HttpAnalyticsSource {
    pub fn new(token: Option<String>) -> Self {
        Self {
            url: dashboard_url(&get_api_base()),
            token,
        }
    }

    async fn request(&self) -> FetchResult<AnalyticsPayload> {
        let mut request = Request::get(&self.url);
        if let Some(token) = &self.token {
            request = request.header("Authorization", &format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        if !response.ok() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                status: response.status(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Network(e.to_string()))?;

        Ok(AnalyticsPayload::from_json(&body)?)
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for HttpAnalyticsSource {
    async fn fetch(&self) -> FetchResult<AnalyticsPayload> {
        let result = self.request().await;

        if let Err(e) = &result {
            web_sys::console::error_1(&format!("Analytics fetch error: {}", e).into());
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_url() {
        assert_eq!(
            dashboard_url("http://localhost:8080/api"),
            "http://localhost:8080/api/analytics/admin/dashboard"
        );
        assert_eq!(
            dashboard_url("https://admin.fixitnow.example/api//"),
            "https://admin.fixitnow.example/api/analytics/admin/dashboard"
        );
    }
}
