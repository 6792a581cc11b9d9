//! Admin Insights Page
//!
//! Fetches the precomputed analytics once on mount and renders cards,
//! bar lists and the providers table.

use fixitnow_insights::dashboard::{load_dashboard, DashboardModel, DashboardState};
use leptos::*;

use crate::api::HttpAnalyticsSource;
use crate::components::{BarList, Nav, ProviderTable, StatusMessage, SummaryCard};
use crate::state::{use_auth, GlobalState};

/// Insights page component
#[component]
pub fn AdminInsights() -> impl IntoView {
    let global = expect_context::<GlobalState>();
    let auth = use_auth();

    let dashboard = create_rw_signal(DashboardState::Loading);

    // Fetch on mount; nothing tracked, so this runs once per mount
    create_effect(move |_| {
        let source = HttpAnalyticsSource::new(auth.token.get_untracked());
        spawn_local(async move {
            dashboard.set(DashboardState::Loading);
            let next = load_dashboard(&source, &global).await;
            dashboard.set(next);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-100">
            <Nav />

            {move || match dashboard.get() {
                DashboardState::Loading => view! {
                    <StatusMessage message="Loading analytics..." spinner=true />
                }.into_view(),
                DashboardState::Empty => view! {
                    <StatusMessage message="No analytics data available" />
                }.into_view(),
                DashboardState::Ready(payload) => view! {
                    <InsightsBody model=DashboardModel::build(&payload) />
                }.into_view(),
            }}
        </div>
    }
}

/// Ready-state content
#[component]
fn InsightsBody(model: DashboardModel) -> impl IntoView {
    let DashboardModel {
        cards,
        services,
        providers,
        locations,
        ..
    } = model;

    view! {
        <div class="max-w-7xl mx-auto p-6">
            <h2 class="text-3xl font-bold text-gray-800 mb-8">"📊 Analytics Dashboard"</h2>

            // Key metrics
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-12">
                {cards.into_iter().map(|card| view! { <SummaryCard card=card /> }).collect_view()}
            </div>

            <section class="bg-white rounded-lg shadow p-6 mb-12">
                <h3 class="text-2xl font-bold text-gray-800 mb-6">"🏆 Most Booked Services"</h3>
                <BarList rows=services fill="bg-blue-500" />
            </section>

            <section class="bg-white rounded-lg shadow p-6 mb-12">
                <h3 class="text-2xl font-bold text-gray-800 mb-6">"⭐ Top Providers"</h3>
                <ProviderTable rows=providers />
            </section>

            <section class="bg-white rounded-lg shadow p-6">
                <h3 class="text-2xl font-bold text-gray-800 mb-6">"📍 Location Trends"</h3>
                <BarList rows=locations fill="bg-green-500" />
            </section>
        </div>
    }
}
