//! Stat Card Component
//!
//! Summary card showing a headline figure with a month-over-month change.

use leptos::*;

/// Summary stat card
#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)]
    value: String,
    change: &'static str,
    /// Whether the change is an improvement (green) or a regression (red)
    #[prop(default = true)]
    change_positive: bool,
    icon: &'static str,
) -> impl IntoView {
    let change_class = if change_positive {
        "text-green-600"
    } else {
        "text-red-600"
    };

    view! {
        <div class="bg-white rounded-lg border border-gray-200 p-4 hover:border-gray-300 transition-colors">
            <div class="flex items-center justify-between">
                <span class="text-gray-600 text-sm">{title}</span>
                <span class="text-xl">{icon}</span>
            </div>

            <div class="text-3xl font-bold mt-2">{value}</div>

            <div class="mt-2">
                <span class=format!("text-sm {}", change_class)>{change}</span>
            </div>
        </div>
    }
}
