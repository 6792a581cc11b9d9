//! Admin dashboard landing page
//!
//! The main admin dashboard belongs to the wider console; this route only
//! keeps the navigation target alive when the insights page runs alone.

use leptos::*;
use leptos_router::*;

use fixitnow_insights::Route as AdminRoute;

use crate::components::Nav;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100">
            <Nav />
            <div class="max-w-7xl mx-auto p-6">
                <h2 class="text-3xl font-bold text-gray-800 mb-4">"Admin Dashboard"</h2>
                <A href=AdminRoute::AdminInsights.path() class="text-blue-700 hover:underline">
                    "View analytics insights →"
                </A>
            </div>
        </div>
    }
}
