//! Settings Page
//!
//! Account and application preferences, split across three tabs.

use leptos::*;

use crate::data;
use crate::export;
use crate::state::ViewState;

/// Settings tab selector
#[derive(Clone, Copy, PartialEq, Eq)]
enum SettingsTab {
    General,
    Notifications,
    Data,
}

impl SettingsTab {
    const ALL: [SettingsTab; 3] = [
        SettingsTab::General,
        SettingsTab::Notifications,
        SettingsTab::Data,
    ];

    fn label(&self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Data => "Data & Export",
        }
    }
}

/// Settings page component
#[component]
pub fn SettingsPage() -> impl IntoView {
    let (tab, set_tab) = create_signal(SettingsTab::General);

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-2xl font-bold">"Settings"</h1>
                <p class="text-gray-600 mt-1">"Manage your account and application preferences"</p>
            </div>

            // Tab bar
            <div class="flex gap-1 bg-gray-100 rounded-lg p-1 w-fit">
                {SettingsTab::ALL.into_iter().map(|t| view! {
                    <button
                        on:click=move |_| set_tab.set(t)
                        class=move || {
                            let base = "px-4 py-2 rounded-md text-sm font-medium transition-colors";
                            if tab.get() == t {
                                format!("{} bg-white shadow-sm", base)
                            } else {
                                format!("{} text-gray-600 hover:text-gray-900", base)
                            }
                        }
                    >
                        {t.label()}
                    </button>
                }).collect_view()}
            </div>

            // Tab content
            {move || match tab.get() {
                SettingsTab::General => view! { <GeneralTab /> }.into_view(),
                SettingsTab::Notifications => view! { <NotificationsTab /> }.into_view(),
                SettingsTab::Data => view! { <DataTab /> }.into_view(),
            }}
        </div>
    }
}

/// Profile and dashboard preferences
#[component]
fn GeneralTab() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    let (name, set_name) = create_signal("Campaign Manager".to_string());
    let (email, set_email) = create_signal("manager@wikicampaign.org".to_string());

    let on_save = move |_| {
        // No persistence layer; saving just confirms the in-memory edit.
        state.show_success("Profile settings saved");
    };

    view! {
        <div class="space-y-4">
            <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Profile Settings"</h2>
                    <p class="text-sm text-gray-600">"Update your personal information"</p>
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Display Name"</label>
                    <input
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                        class="w-full max-w-md bg-white rounded-lg px-4 py-2
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full max-w-md bg-white rounded-lg px-4 py-2
                               border border-gray-300 focus:border-blue-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Timezone"</label>
                    <select class="w-full max-w-md bg-white rounded-lg px-4 py-2
                                   border border-gray-300 focus:border-blue-500 focus:outline-none">
                        <option value="utc">"UTC (GMT+0)"</option>
                        <option value="est">"Eastern Time (GMT-5)"</option>
                        <option value="pst">"Pacific Time (GMT-8)"</option>
                        <option value="cet">"Central European Time (GMT+1)"</option>
                        <option value="jst">"Japan Standard Time (GMT+9)"</option>
                    </select>
                </div>

                <button
                    on:click=on_save
                    class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg
                           font-medium transition-colors"
                >
                    "Save Changes"
                </button>
            </section>

            <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Dashboard Preferences"</h2>
                    <p class="text-sm text-gray-600">"Customize your dashboard view"</p>
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Default Date Range"</label>
                    <select class="w-full max-w-md bg-white rounded-lg px-4 py-2
                                   border border-gray-300 focus:border-blue-500 focus:outline-none">
                        <option value="7days">"Last 7 days"</option>
                        <option value="30days" selected=true>"Last 30 days"</option>
                        <option value="90days">"Last 90 days"</option>
                        <option value="year">"Last year"</option>
                    </select>
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"Preferred Chart Type"</label>
                    <select class="w-full max-w-md bg-white rounded-lg px-4 py-2
                                   border border-gray-300 focus:border-blue-500 focus:outline-none">
                        <option value="line">"Line Chart"</option>
                        <option value="area" selected=true>"Area Chart"</option>
                        <option value="bar">"Bar Chart"</option>
                    </select>
                </div>
            </section>
        </div>
    }
}

/// Email notification toggles
#[component]
fn NotificationsTab() -> impl IntoView {
    view! {
        <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-6">
            <div>
                <h2 class="text-lg font-semibold">"Email Notifications"</h2>
                <p class="text-sm text-gray-600">"Choose what updates you want to receive"</p>
            </div>

            <NotificationToggle
                label="Campaign Updates"
                description="Receive updates about campaign milestones and progress"
                initial=true
            />
            <NotificationToggle
                label="Weekly Reports"
                description="Get weekly summaries of all campaign activities"
                initial=true
            />
            <NotificationToggle
                label="New Contributors"
                description="Be notified when new contributors join campaigns"
                initial=false
            />
            <NotificationToggle
                label="Achievement Alerts"
                description="Get alerts when campaigns reach their goals"
                initial=true
            />
        </section>
    }
}

/// Single notification on/off switch
#[component]
fn NotificationToggle(
    label: &'static str,
    description: &'static str,
    initial: bool,
) -> impl IntoView {
    let (enabled, set_enabled) = create_signal(initial);

    view! {
        <div class="flex items-center justify-between border-t border-gray-100 first:border-0 pt-4 first:pt-0">
            <div>
                <div class="font-medium">{label}</div>
                <p class="text-sm text-gray-600">{description}</p>
            </div>
            <button
                on:click=move |_| set_enabled.update(|e| *e = !*e)
                class=move || {
                    let base = "relative w-11 h-6 rounded-full transition-colors";
                    if enabled.get() {
                        format!("{} bg-blue-600", base)
                    } else {
                        format!("{} bg-gray-300", base)
                    }
                }
            >
                <span class=move || {
                    let base = "absolute top-0.5 w-5 h-5 bg-white rounded-full transition-transform";
                    if enabled.get() {
                        format!("{} left-0.5 translate-x-5", base)
                    } else {
                        format!("{} left-0.5", base)
                    }
                } />
            </button>
        </div>
    }
}

/// Data export and API access
#[component]
fn DataTab() -> impl IntoView {
    let state = use_context::<ViewState>().expect("ViewState not found");

    let state_for_csv = state.clone();
    let export_csv = move |_| {
        let csv = export::campaigns_to_csv(&data::sample_campaigns());
        export::download_file("campaigns.csv", &csv);
        state_for_csv.show_success("Exported campaign data as CSV");
    };

    let state_for_json = state;
    let export_json = move |_| {
        match export::campaigns_to_json(&data::sample_campaigns()) {
            Ok(json) => {
                export::download_file("campaigns.json", &json);
                state_for_json.show_success("Exported campaign data as JSON");
            }
            Err(e) => {
                web_sys::console::error_1(&format!("export failed: {}", e).into());
            }
        }
    };

    view! {
        <div class="space-y-4">
            <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"Data Export"</h2>
                    <p class="text-sm text-gray-600">"Download your campaign data"</p>
                </div>

                <div class="flex gap-2">
                    <button
                        on:click=export_csv
                        class="px-4 py-2 rounded-lg text-sm font-medium border border-gray-300
                               text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "Export as CSV"
                    </button>
                    <button
                        on:click=export_json
                        class="px-4 py-2 rounded-lg text-sm font-medium border border-gray-300
                               text-gray-600 hover:bg-gray-100 transition-colors"
                    >
                        "Export as JSON"
                    </button>
                </div>
            </section>

            <section class="bg-white rounded-lg border border-gray-200 p-6 space-y-4">
                <div>
                    <h2 class="text-lg font-semibold">"API Access"</h2>
                    <p class="text-sm text-gray-600">"Manage your API keys for external integrations"</p>
                </div>

                <div>
                    <label class="block text-sm text-gray-600 mb-2">"API Key"</label>
                    <input
                        type="password"
                        value="wc_sk_1234567890abcdef"
                        readonly=true
                        class="w-full max-w-md bg-gray-50 rounded-lg px-4 py-2
                               border border-gray-300 text-gray-500"
                    />
                </div>
                <p class="text-xs text-gray-600">
                    "Keep your API key secure. Do not share it publicly."
                </p>
            </section>
        </div>
    }
}
