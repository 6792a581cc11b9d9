//! Admin login page
//!
//! Sign-in itself happens in the FixItNow console. For standalone use this
//! page accepts a token issued there and stores it.

use leptos::*;
use leptos_router::*;

use fixitnow_insights::Route as AdminRoute;

use crate::state::use_auth;

#[component]
pub fn AdminLogin() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (token, set_token) = create_signal(String::new());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let value = token.get();
        if value.trim().is_empty() {
            return;
        }

        auth.sign_in(&value);
        navigate(AdminRoute::AdminInsights.path(), Default::default());
    };

    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <form on:submit=on_submit class="bg-white rounded-lg shadow p-8 w-full max-w-md space-y-4">
                <h1 class="text-2xl font-bold text-gray-800">"FixItNow Admin"</h1>
                <p class="text-gray-600 text-sm">"Paste the admin token issued by the FixItNow console."</p>
                <input
                    type="password"
                    placeholder="Admin token"
                    prop:value=move || token.get()
                    on:input=move |ev| set_token.set(event_target_value(&ev))
                    class="w-full border border-gray-300 rounded px-4 py-2 focus:border-blue-600 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || token.get().trim().is_empty()
                    class="w-full bg-blue-700 hover:bg-blue-600 disabled:bg-gray-400 text-white py-2 rounded transition"
                >
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
