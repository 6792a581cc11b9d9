//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use fixitnow_insights::Route as AdminRoute;

use crate::components::Toast;
use crate::pages::{AdminDashboard, AdminInsights, AdminLogin};
use crate::state::auth::provide_auth;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();
    provide_auth();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=|| view! { <Redirect path=AdminRoute::AdminInsights.path() /> } />
                <Route path=AdminRoute::AdminInsights.path() view=AdminInsights />
                <Route path=AdminRoute::AdminDashboard.path() view=AdminDashboard />
                <Route path=AdminRoute::AdminLogin.path() view=AdminLogin />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-100 flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold text-gray-800 mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href=AdminRoute::AdminInsights.path()
                class="px-6 py-3 bg-blue-700 hover:bg-blue-600 text-white rounded-lg font-medium transition"
            >
                "Go to Insights"
            </A>
        </div>
    }
}
