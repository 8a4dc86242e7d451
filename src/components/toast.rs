//! Toast Notification Component
//!
//! Shows transient success messages from the view state.

use leptos::*;

use crate::state::ViewState;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50">
            {move || {
                state.success.get().map(|msg| view! {
                    <div class="flex items-center space-x-3 bg-green-600 text-white px-4 py-3 \
                                rounded-lg shadow-lg">
                        <span class="text-lg">"✓"</span>
                        <span class="text-sm font-medium">{msg}</span>
                    </div>
                })
            }}
        </div>
    }
}
