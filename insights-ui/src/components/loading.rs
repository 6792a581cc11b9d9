//! Loading and empty-state placeholders

use leptos::*;

/// Centered status line used while loading or when there is nothing to show
#[component]
pub fn StatusMessage(
    #[prop(into)]
    message: String,
    /// Show a spinner before the message
    #[prop(default = false)]
    spinner: bool,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-96 space-x-3">
            {spinner.then(|| view! { <div class="loading-spinner w-6 h-6" /> })}
            <div class="text-gray-600 text-lg">{message}</div>
        </div>
    }
}
