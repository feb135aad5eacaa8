//! Toast Notification Component
//!
//! Success and error notices fed by the global state signals.

use leptos::*;

use crate::state::use_global_state;

#[derive(Clone, Copy)]
enum Severity {
    Success,
    Error,
}

impl Severity {
    fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✓",
            Severity::Error => "!",
        }
    }

    fn accent(self) -> &'static str {
        match self {
            Severity::Success => "border-green-500 text-green-400",
            Severity::Error => "border-red-500 text-red-400",
        }
    }
}

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    let notices = move || {
        let mut notices = Vec::new();
        if let Some(message) = state.success.get() {
            notices.push((Severity::Success, message));
        }
        if let Some(message) = state.error.get() {
            notices.push((Severity::Error, message));
        }
        notices
    };

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2">
            {move || notices().into_iter().map(|(severity, message)| view! {
                <div class=format!(
                    "flex items-center gap-3 bg-gray-900 border-l-4 {} px-4 py-3 rounded-r-lg shadow-lg animate-slide-in",
                    severity.accent()
                )>
                    <span class="font-bold">{severity.glyph()}</span>
                    <span class="text-sm text-gray-200">{message}</span>
                </div>
            }).collect_view()}
        </div>
    }
}
