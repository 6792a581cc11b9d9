//! Analytics API Client
//!
//! HTTP client for the FixItNow backend's admin analytics endpoint.

use async_trait::async_trait;
use reqwest::Client;

use crate::analytics::AnalyticsPayload;
use crate::config::ApiConfig;
use crate::dashboard::AnalyticsSource;
use crate::error::{FetchFailure, FetchResult};

/// Reads the admin analytics payload over HTTP
pub struct AnalyticsClient {
    client: Client,
    url: String,
    token: Option<String>,
}

impl AnalyticsClient {
    /// Create a client for the configured backend
    ///
    /// `token` is sent as a bearer token when present.
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.dashboard_url(),
            token,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Fetch and decode the dashboard payload
    pub async fn fetch_dashboard(&self) -> FetchResult<AnalyticsPayload> {
        let mut request = self.client.get(&self.url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        tracing::debug!(url = %self.url, "Requesting analytics");

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait(?Send)]
impl AnalyticsSource for AnalyticsClient {
    async fn fetch(&self) -> FetchResult<AnalyticsPayload> {
        self.fetch_dashboard().await
    }
}

fn transport_error(e: reqwest::Error) -> FetchFailure {
    if e.is_timeout() {
        FetchFailure::Timeout
    } else {
        FetchFailure::Network(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::{build_router, FixtureState};
    use axum::{http::StatusCode, routing::get, Router};
    use std::net::SocketAddr;

    async fn spawn(router: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        addr
    }

    fn config_for(addr: SocketAddr) -> ApiConfig {
        ApiConfig {
            base_url: format!("http://{}", addr),
            request_timeout_secs: 5,
            token: None,
        }
    }

    fn sample_payload() -> AnalyticsPayload {
        AnalyticsPayload::from_json(
            r#"{"topServices": [{"title": "AC Repair", "bookingCount": 6}], "locationTrends": []}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_from_fixture() {
        let addr = spawn(build_router(FixtureState::new(sample_payload(), None))).await;
        let client = AnalyticsClient::new(&config_for(addr), None).unwrap();

        let payload = client.fetch().await.unwrap();
        assert_eq!(payload, sample_payload());
    }

    #[tokio::test]
    async fn test_bearer_token_sent() {
        let state = FixtureState::new(sample_payload(), Some("s3cret".to_string()));
        let addr = spawn(build_router(state)).await;

        let with_token =
            AnalyticsClient::new(&config_for(addr), Some("s3cret".to_string())).unwrap();
        assert!(with_token.has_token());
        assert!(with_token.fetch().await.is_ok());

        let without_token = AnalyticsClient::new(&config_for(addr), None).unwrap();
        match without_token.fetch().await {
            Err(FetchFailure::Status { status, .. }) => assert_eq!(status, 401),
            other => panic!("expected 401, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_is_failure() {
        let router = Router::new().route(
            "/analytics/admin/dashboard",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
        );
        let addr = spawn(router).await;
        let client = AnalyticsClient::new(&config_for(addr), None).unwrap();

        match client.fetch().await {
            Err(FetchFailure::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database down");
            }
            other => panic!("expected status failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_failure() {
        let router = Router::new().route(
            "/analytics/admin/dashboard",
            get(|| async { "<html>not json</html>" }),
        );
        let addr = spawn(router).await;
        let client = AnalyticsClient::new(&config_for(addr), None).unwrap();

        assert!(matches!(client.fetch().await, Err(FetchFailure::Decode(_))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = AnalyticsClient::new(&config_for(addr), None).unwrap();
        assert!(matches!(client.fetch().await, Err(FetchFailure::Network(_))));
    }

    #[test]
    fn test_url() {
        let client = AnalyticsClient::new(&ApiConfig::default(), None).unwrap();
        assert_eq!(
            client.url(),
            "http://localhost:8080/api/analytics/admin/dashboard"
        );
        assert!(!client.has_token());
    }
}
