//! Analytics Payload
//!
//! Types for the precomputed analytics the backend serves at
//! `GET /analytics/admin/dashboard`.

mod payload;

pub use payload::{AnalyticsPayload, LocationTrend, Metrics, TopProvider, TopService};

/// Path of the admin analytics endpoint, relative to the API base URL
pub const DASHBOARD_ENDPOINT: &str = "/analytics/admin/dashboard";
