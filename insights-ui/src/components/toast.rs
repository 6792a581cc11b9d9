//! Toast Notification Component
//!
//! Shows transient error messages.

use leptos::*;

use crate::state::GlobalState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_context::<GlobalState>();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || {
                state.error.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-red-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg transform transition-all duration-300 \
                                ease-out animate-slide-in">
                        <span class="text-lg">"✕"</span>
                        <span class="text-sm font-medium">{msg}</span>
                        <button
                            on:click=move |_| state.clear_error()
                            class="ml-2 text-white/70 hover:text-white"
                            aria-label="Dismiss"
                        >
                            "×"
                        </button>
                    </div>
                })
            }}
        </div>
    }
}
