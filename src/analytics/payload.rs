//! Analytics payload wire types
//!
//! The backend precomputes everything; these types only describe the JSON it
//! returns. Every numeric field tolerates being missing or `null`.

use serde::{Deserialize, Deserializer, Serialize};

/// Full response of `GET /analytics/admin/dashboard`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsPayload {
    /// Aggregate figures for the summary cards
    #[serde(default)]
    pub metrics: Option<Metrics>,
    /// Services ordered by booking count
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_services: Vec<TopService>,
    /// Providers ordered by the backend's ranking
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_providers: Vec<TopProvider>,
    /// Booking counts per location
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_trends: Vec<LocationTrend>,
}

/// Scalar aggregates
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_bookings: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_revenue: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_services: u64,
    /// `None` when no ratings exist yet
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopService {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProvider {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub avg_rating: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_earnings: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationTrend {
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub booking_count: u64,
}

impl AnalyticsPayload {
    /// Parse a payload from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Metrics block, falling back to all zeros when the backend omitted it
    pub fn metrics_or_default(&self) -> Metrics {
        self.metrics.clone().unwrap_or_default()
    }

    /// True when every section is empty
    pub fn is_blank(&self) -> bool {
        self.metrics.is_none()
            && self.top_services.is_empty()
            && self.top_providers.is_empty()
            && self.location_trends.is_empty()
    }
}

/// Treat an explicit `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
