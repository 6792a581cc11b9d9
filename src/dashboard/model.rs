//! Render Model
//!
//! Display-ready view of an [`AnalyticsPayload`]. The web page and the
//! terminal renderer both draw from this, so scaling and formatting only
//! live here.

use crate::analytics::{AnalyticsPayload, LocationTrend, TopProvider, TopService};

use super::format::{format_average_rating, format_currency, format_rating};

/// Denominator for horizontal bars
///
/// Holds the largest booking count of a section, never less than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarScale {
    max: u64,
}

impl BarScale {
    pub fn from_counts(counts: impl IntoIterator<Item = u64>) -> Self {
        let max = counts.into_iter().max().unwrap_or(0).max(1);
        Self { max }
    }

    pub fn max(&self) -> u64 {
        self.max
    }

    /// Share of the maximum as a percentage
    pub fn percent(&self, count: u64) -> f64 {
        count as f64 / self.max as f64 * 100.0
    }
}

/// Colour hint for a metric card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Green,
    Purple,
    Yellow,
}

/// One summary card
#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub accent: Accent,
}

/// One row of a horizontal bar list
#[derive(Debug, Clone, PartialEq)]
pub struct BarRow {
    pub label: String,
    pub count: u64,
    pub width_percent: f64,
}

impl BarRow {
    fn new(label: &str, count: u64, scale: BarScale) -> Self {
        Self {
            label: label.to_string(),
            count,
            width_percent: scale.percent(count),
        }
    }

    /// Zero-count bars are drawn empty, without a label inside
    pub fn show_inline_count(&self) -> bool {
        self.count > 0
    }

    /// Inline CSS for the filled part of the bar
    pub fn width_style(&self) -> String {
        format!("width: {}%", trim_percent(self.width_percent))
    }
}

/// One row of the providers table
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRow {
    pub name: String,
    pub rating: String,
    pub bookings: u64,
    pub earnings: String,
    /// Bookings relative to the busiest provider
    pub share_percent: f64,
}

impl ProviderRow {
    fn new(provider: &TopProvider, scale: BarScale) -> Self {
        Self {
            name: provider.name.clone(),
            rating: format_rating(provider.avg_rating),
            bookings: provider.booking_count,
            earnings: format_currency(provider.total_earnings),
            share_percent: scale.percent(provider.booking_count),
        }
    }

    pub fn share_style(&self) -> String {
        format!("width: {}%", trim_percent(self.share_percent))
    }
}

/// Everything the ready state renders
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    pub cards: Vec<MetricCard>,
    pub services: Vec<BarRow>,
    pub providers: Vec<ProviderRow>,
    pub locations: Vec<BarRow>,
    pub service_scale: BarScale,
    pub provider_scale: BarScale,
    pub location_scale: BarScale,
}

impl DashboardModel {
    pub fn build(payload: &AnalyticsPayload) -> Self {
        let service_scale = BarScale::from_counts(payload.top_services.iter().map(|s| s.booking_count));
        let provider_scale =
            BarScale::from_counts(payload.top_providers.iter().map(|p| p.booking_count));
        let location_scale =
            BarScale::from_counts(payload.location_trends.iter().map(|l| l.booking_count));

        Self {
            cards: metric_cards(payload),
            services: payload
                .top_services
                .iter()
                .map(|TopService { title, booking_count }| {
                    BarRow::new(title, *booking_count, service_scale)
                })
                .collect(),
            providers: payload
                .top_providers
                .iter()
                .map(|p| ProviderRow::new(p, provider_scale))
                .collect(),
            locations: payload
                .location_trends
                .iter()
                .map(|LocationTrend { location, booking_count }| {
                    BarRow::new(location, *booking_count, location_scale)
                })
                .collect(),
            service_scale,
            provider_scale,
            location_scale,
        }
    }
}

fn metric_cards(payload: &AnalyticsPayload) -> Vec<MetricCard> {
    let metrics = payload.metrics_or_default();

    vec![
        MetricCard {
            label: "Total Bookings",
            value: metrics.total_bookings.to_string(),
            accent: Accent::Blue,
        },
        MetricCard {
            label: "Total Revenue",
            value: format_currency(metrics.total_revenue),
            accent: Accent::Green,
        },
        MetricCard {
            label: "Active Services",
            value: metrics.active_services.to_string(),
            accent: Accent::Purple,
        },
        MetricCard {
            label: "Avg Rating",
            value: format_average_rating(metrics.avg_rating),
            accent: Accent::Yellow,
        },
    ]
}

/// `50.0` -> `50`, `33.333333` -> `33.33`
fn trim_percent(percent: f64) -> String {
    let fixed = format!("{:.2}", percent);
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
