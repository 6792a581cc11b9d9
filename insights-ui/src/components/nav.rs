//! Navigation Component
//!
//! Admin header bar with the Dashboard and Logout actions.

use fixitnow_insights::dashboard;
use leptos::*;
use leptos_router::*;

use crate::state::{use_auth, RouterNavigator};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let auth = use_auth();
    let navigator = RouterNavigator(use_navigate());

    let to_dashboard = {
        let navigator = navigator.clone();
        move |_| dashboard::go_to_dashboard(&navigator)
    };
    let on_logout = move |_| dashboard::logout(&auth, &navigator);

    view! {
        <nav class="bg-blue-700 text-white p-4 shadow-lg">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <h1 class="text-2xl font-bold">"FixItNow Admin"</h1>
                <div class="flex gap-4">
                    <button
                        on:click=to_dashboard
                        class="hover:bg-blue-600 px-4 py-2 rounded transition"
                    >
                        "Dashboard"
                    </button>
                    <button
                        on:click=on_logout
                        class="hover:bg-red-600 px-4 py-2 rounded transition"
                    >
                        "Logout"
                    </button>
                </div>
            </div>
        </nav>
    }
}
