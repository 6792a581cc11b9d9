//! Global Application State
//!
//! Reactive state shared by every page, using Leptos signals.

use fixitnow_insights::Notifier;
use leptos::*;

/// How long an error toast stays up
const ERROR_TOAST_MS: u32 = 5000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Error message to display
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(ERROR_TOAST_MS, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Clear error message
    pub fn clear_error(&self) {
        self.error.set(None);
    }
}

impl Notifier for GlobalState {
    fn error(&self, message: &str) {
        self.show_error(message);
    }
}
