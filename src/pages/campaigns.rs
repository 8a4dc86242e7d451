//! Campaigns Page
//!
//! Searchable, filterable table of all campaigns with CSV export.

use leptos::*;

use crate::components::StatusBadge;
use crate::data;
use crate::export;
use crate::model::{filter_campaigns, format_count, StatusFilter};
use crate::state::ViewState;

/// Campaign list page
#[component]
pub fn CampaignList() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    let (query, set_query) = create_signal(String::new());
    let (status, set_status) = create_signal(StatusFilter::All);

    let campaigns = data::sample_campaigns();
    let filtered = create_memo(move |_| {
        filter_campaigns(&campaigns, &query.get(), status.get())
    });

    let on_export = move |_| {
        let csv = export::campaigns_to_csv(&filtered.get());
        export::download_file("campaigns.csv", &csv);
        state.show_success("Campaign list exported");
    };

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-2xl font-bold">"Campaigns"</h1>
                <p class="text-gray-600 mt-1">"View and manage all Wikipedia campaigns"</p>
            </div>

            <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Campaign List"</h2>
                    <p class="text-sm text-gray-600">"Browse ongoing and past campaigns"</p>
                </div>

                // Search, status filter, export
                <div class="flex flex-col sm:flex-row gap-4">
                    <input
                        type="text"
                        placeholder="Search campaigns..."
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                        class="flex-1 bg-white rounded-lg px-4 py-2
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />

                    <div class="flex gap-2">
                        {StatusFilter::ALL.into_iter().map(|filter| view! {
                            <button
                                on:click=move |_| set_status.set(filter)
                                class=move || {
                                    let base = "px-3 py-2 rounded-lg text-sm font-medium transition-colors";
                                    if status.get() == filter {
                                        format!("{} bg-blue-600 text-white", base)
                                    } else {
                                        format!("{} border border-gray-300 text-gray-600 hover:bg-gray-100", base)
                                    }
                                }
                            >
                                {filter.label()}
                            </button>
                        }).collect_view()}
                    </div>

                    <button
                        on:click=on_export
                        class="px-3 py-2 rounded-lg text-sm font-medium border border-gray-300
                               text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "⬇ Export CSV"
                    </button>
                </div>

                // Campaign table
                <div class="border border-gray-200 rounded-lg overflow-x-auto">
                    <table class="w-full text-sm">
                        <thead>
                            <tr class="text-left text-gray-600 border-b border-gray-200">
                                <th class="px-4 py-3 font-medium">"Campaign Name"</th>
                                <th class="px-4 py-3 font-medium">"Status"</th>
                                <th class="px-4 py-3 font-medium">"Duration"</th>
                                <th class="px-4 py-3 font-medium text-right">"Participants"</th>
                                <th class="px-4 py-3 font-medium text-right">"Total Edits"</th>
                                <th class="px-4 py-3 font-medium text-right">"Articles"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = filtered.get();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="6" class="px-4 py-8 text-center text-gray-500">
                                                "No campaigns match the current filters"
                                            </td>
                                        </tr>
                                    }.into_view()
                                } else {
                                    rows.into_iter().map(|campaign| view! {
                                        <tr class="border-b border-gray-100 last:border-0 hover:bg-gray-50">
                                            <td class="px-4 py-3">{campaign.name.clone()}</td>
                                            <td class="px-4 py-3">
                                                <StatusBadge status=campaign.status />
                                            </td>
                                            <td class="px-4 py-3 text-gray-600">
                                                {campaign.duration_label()}
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                {format_count(campaign.participants)}
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                {format_count(campaign.total_edits)}
                                            </td>
                                            <td class="px-4 py-3 text-right">
                                                {format_count(campaign.articles_edited)}
                                            </td>
                                        </tr>
                                    }).collect_view()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </section>
        </div>
    }
}
