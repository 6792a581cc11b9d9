//! Metric Card Component
//!
//! One summary figure: total bookings, revenue, active services or rating.

use fixitnow_insights::dashboard::{Accent, MetricCard};
use leptos::*;

/// Summary card for a single aggregate
#[component]
pub fn SummaryCard(card: MetricCard) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-6">
            <div class="text-gray-500 text-sm uppercase font-semibold">{card.label}</div>
            <div class=format!("text-4xl font-bold mt-2 {}", accent_class(card.accent))>
                {card.value}
            </div>
        </div>
    }
}

fn accent_class(accent: Accent) -> &'static str {
    match accent {
        Accent::Blue => "text-blue-600",
        Accent::Green => "text-green-600",
        Accent::Purple => "text-purple-600",
        Accent::Yellow => "text-yellow-600",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_classes() {
        assert_eq!(accent_class(Accent::Blue), "text-blue-600");
        assert_eq!(accent_class(Accent::Yellow), "text-yellow-600");
    }
}
