//! App Root Component
//!
//! Shell layout: sticky header, collapsible side navigation, and the main
//! content region driven by the active page.

use leptos::*;

use crate::components::Toast;
use crate::pages::{render_page, NAV_ITEMS};
use crate::state::{provide_view_state, ViewState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide view state to all components
    provide_view_state();
    let state = use_context::<ViewState>().expect("ViewState not found");

    let sidebar_open = state.sidebar_open;
    let active_page = state.active_page;

    view! {
        <div class="min-h-screen bg-gray-50 text-gray-900">
            <Header />

            <div class="flex">
                // Side navigation
                <aside class=move || {
                    let base = "fixed lg:sticky top-[57px] left-0 z-40 h-[calc(100vh-57px)] w-64 \
                                bg-white border-r border-gray-200 transition-transform duration-300 \
                                ease-in-out lg:translate-x-0";
                    if sidebar_open.get() {
                        format!("{} translate-x-0", base)
                    } else {
                        format!("{} -translate-x-full", base)
                    }
                }>
                    <SideNav />
                </aside>

                // Main content region
                <main class="flex-1 p-6 lg:p-8">
                    <div class="max-w-7xl mx-auto">
                        {move || render_page(active_page.get())}
                    </div>
                </main>
            </div>

            // Mobile sidebar overlay
            {move || {
                sidebar_open.get().then(|| view! {
                    <div
                        class="fixed inset-0 bg-black/50 z-30 lg:hidden"
                        on:click=move |_| sidebar_open.set(false)
                    />
                })
            }}

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Sticky top bar with sidebar toggle and brand
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    view! {
        <header class="bg-white border-b border-gray-200 sticky top-0 z-50">
            <div class="flex items-center justify-between px-4 py-3">
                <div class="flex items-center gap-4">
                    <button
                        on:click=move |_| state.toggle_sidebar()
                        class="lg:hidden px-2 py-1 rounded hover:bg-gray-100"
                        aria-label="Toggle navigation"
                    >
                        "☰"
                    </button>
                    <div class="flex items-center gap-2">
                        <span class="text-xl">"🎯"</span>
                        <h1 class="text-xl font-semibold">"WikiCampaign Tracker"</h1>
                    </div>
                </div>

                <div class="flex items-center gap-3">
                    <button class="px-2 py-1 rounded hover:bg-gray-100" aria-label="Notifications">
                        "🔔"
                    </button>
                    <div class="w-9 h-9 rounded-full bg-blue-600 text-white flex items-center \
                                justify-center text-sm font-medium">
                        "CM"
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Side navigation rendered from the static nav table
#[component]
fn SideNav() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    view! {
        <nav class="p-4 space-y-1">
            {NAV_ITEMS.iter().map(|item| {
                let page = item.page;
                let nav_state = state.clone();
                let active_page = state.active_page;
                view! {
                    <NavEntry
                        label=item.label
                        icon=item.icon
                        on_navigate=move || nav_state.navigate_to(page)
                        is_active=Signal::derive(move || active_page.get() == page)
                    />
                }
            }).collect_view()}
        </nav>
    }
}

/// Single navigation entry
#[component]
fn NavEntry(
    label: &'static str,
    icon: &'static str,
    on_navigate: impl Fn() + 'static,
    #[prop(into)]
    is_active: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_navigate()
            class=move || {
                let base = "w-full flex items-center gap-2 px-3 py-2 rounded-lg text-sm \
                            font-medium text-left transition-colors";
                if is_active.get() {
                    format!("{} bg-blue-600 text-white", base)
                } else {
                    format!("{} text-gray-700 hover:bg-gray-100", base)
                }
            }
        >
            <span>{icon}</span>
            <span>{label}</span>
        </button>
    }
}
