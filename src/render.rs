//! Terminal Renderer
//!
//! Draws the dashboard render model as plain text.

use std::fmt::Write;

use crate::dashboard::{BarRow, DashboardModel, DashboardState, MetricCard, ProviderRow};

const TITLE: &str = "FixItNow Admin";
const LOADING_MESSAGE: &str = "Loading analytics...";
const EMPTY_MESSAGE: &str = "No analytics data available";
const LABEL_WIDTH: usize = 16;
const BAR_FILL: char = '█';
const BAR_TRACK: char = '░';

/// Text renderer with a fixed bar width
#[derive(Debug, Clone)]
pub struct TextRenderer {
    bar_width: usize,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(40)
    }
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self {
            bar_width: bar_width.max(1),
        }
    }

    /// Render any dashboard state
    pub fn render(&self, state: &DashboardState) -> String {
        let mut out = String::new();
        self.header(&mut out);

        match state {
            DashboardState::Loading => {
                let _ = writeln!(out, "{}", LOADING_MESSAGE);
            }
            DashboardState::Empty => {
                let _ = writeln!(out, "{}", EMPTY_MESSAGE);
            }
            DashboardState::Ready(payload) => {
                self.ready(&mut out, &DashboardModel::build(payload));
            }
        }

        out
    }

    fn header(&self, out: &mut String) {
        let _ = writeln!(out, "{}", TITLE);
        let _ = writeln!(out, "{}", "=".repeat(TITLE.chars().count()));
        let _ = writeln!(out);
    }

    fn ready(&self, out: &mut String, model: &DashboardModel) {
        let _ = writeln!(out, "📊 Analytics Dashboard");
        let _ = writeln!(out);
        self.cards(out, &model.cards);

        let _ = writeln!(out);
        let _ = writeln!(out, "🏆 Most Booked Services");
        self.bars(out, &model.services);

        let _ = writeln!(out);
        let _ = writeln!(out, "⭐ Top Providers");
        self.providers(out, &model.providers);

        let _ = writeln!(out);
        let _ = writeln!(out, "📍 Location Trends");
        self.bars(out, &model.locations);
    }

    fn cards(&self, out: &mut String, cards: &[MetricCard]) {
        for card in cards {
            let _ = writeln!(out, "  {:<16} {}", card.label.to_uppercase(), card.value);
        }
    }

    fn bars(&self, out: &mut String, rows: &[BarRow]) {
        if rows.is_empty() {
            let _ = writeln!(out, "  (none)");
            return;
        }

        for row in rows {
            let _ = writeln!(
                out,
                "  {:<label$} {} {:>6}",
                truncate(&row.label, LABEL_WIDTH),
                self.bar(row.width_percent),
                row.count,
                label = LABEL_WIDTH
            );
        }
    }

    /// Filled cells are the percentage of the bar width, rounded down
    fn bar(&self, percent: f64) -> String {
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * self.bar_width as f64).floor() as usize;
        let mut bar = String::with_capacity(self.bar_width * 3);
        bar.extend(std::iter::repeat(BAR_FILL).take(filled));
        bar.extend(std::iter::repeat(BAR_TRACK).take(self.bar_width - filled));
        bar
    }

    fn providers(&self, out: &mut String, rows: &[ProviderRow]) {
        if rows.is_empty() {
            let _ = writeln!(out, "  (none)");
            return;
        }

        let name_width = rows
            .iter()
            .map(|r| r.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Provider".len());

        let _ = writeln!(
            out,
            "  {:<name_width$} {:>8} {:>8} {:>14}",
            "Provider", "Rating", "Bookings", "Earnings"
        );
        let _ = writeln!(out, "  {}", "-".repeat(name_width + 33));

        for row in rows {
            let _ = writeln!(
                out,
                "  {:<name_width$} {:>8} {:>8} {:>14}",
                row.name,
                row.rating,
                row.bookings,
                row.earnings
            );
        }
    }
}

/// Truncate to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{AnalyticsPayload, LocationTrend, TopProvider, TopService};

    fn sample() -> AnalyticsPayload {
        AnalyticsPayload {
            top_services: vec![
                TopService {
                    title: "Deep Cleaning Service".to_string(),
                    booking_count: 10,
                },
                TopService {
                    title: "Plumbing".to_string(),
                    booking_count: 5,
                },
            ],
            top_providers: vec![TopProvider {
                name: "Asha".to_string(),
                avg_rating: 4.5,
                booking_count: 8,
                total_earnings: 12000.0,
            }],
            location_trends: vec![LocationTrend {
                location: "Mumbai".to_string(),
                booking_count: 0,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_loading_and_empty() {
        let renderer = TextRenderer::default();

        let loading = renderer.render(&DashboardState::Loading);
        assert!(loading.starts_with("FixItNow Admin"));
        assert!(loading.contains("Loading analytics..."));

        let empty = renderer.render(&DashboardState::Empty);
        assert!(empty.contains("No analytics data available"));
        assert!(!empty.contains("Total Bookings"));
    }

    #[test]
    fn test_ready_sections() {
        let out = TextRenderer::new(10).render(&DashboardState::Ready(sample()));

        assert!(out.contains("TOTAL BOOKINGS"));
        assert!(out.contains("N/A ★"));
        assert!(out.contains("Most Booked Services"));
        assert!(out.contains("4.50 ★"));
        assert!(out.contains("₹12,000"));
        assert!(out.contains("Location Trends"));
    }

    #[test]
    fn test_bar_widths() {
        let renderer = TextRenderer::new(10);
        assert_eq!(renderer.bar(100.0), "██████████");
        assert_eq!(renderer.bar(50.0), "█████░░░░░");
        assert_eq!(renderer.bar(0.0), "░░░░░░░░░░");
        assert_eq!(renderer.bar(33.3), "███░░░░░░░");
    }

    #[test]
    fn test_label_truncation() {
        assert_eq!(truncate("Plumbing", 16), "Plumbing");
        assert_eq!(truncate("Deep Cleaning Service", 16), "Deep Cleaning S…");
        assert_eq!(truncate("Deep Cleaning Service", 16).chars().count(), 16);
    }

    #[test]
    fn test_empty_sections() {
        let out = TextRenderer::default().render(&DashboardState::Ready(AnalyticsPayload::default()));
        assert_eq!(out.matches("(none)").count(), 3);
    }
}
