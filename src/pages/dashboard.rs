//! Dashboard Page
//!
//! Overview of campaign performance: summary stats, contribution trends,
//! and progress of the featured active campaigns.

use leptos::*;

use crate::components::{ChartKind, Series, StatCard, TrendChart};
use crate::data;

/// Series shown in the contributions chart, in value order
const CONTRIBUTION_SERIES: [Series; 3] = [
    Series { name: "Edits", color: "#3b82f6" },
    Series { name: "Active Users", color: "#10b981" },
    Series { name: "Articles", color: "#f59e0b" },
];

/// Dashboard overview page
#[component]
pub fn DashboardOverview() -> impl IntoView {
    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-2xl font-bold">"Dashboard Overview"</h1>
                <p class="text-gray-600 mt-1">
                    "Monitor your campaign performance and contribution metrics"
                </p>
            </div>

            // Summary stats
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-4">
                <StatCard
                    title="Total Edits"
                    value="12,456"
                    change="+18.2% from last month"
                    icon="✏️"
                />
                <StatCard
                    title="Active Users"
                    value="248"
                    change="+12.5% from last month"
                    icon="👥"
                />
                <StatCard
                    title="Articles Edited"
                    value="1,834"
                    change="+8.1% from last month"
                    icon="📄"
                />
                <StatCard
                    title="Bytes Added"
                    value="2.4M"
                    change="+22.3% from last month"
                    icon="💾"
                />
            </div>

            // Contributions over time
            <section class="bg-white rounded-lg border border-gray-200 p-6">
                <h2 class="text-lg font-semibold">"Contributions Over Time"</h2>
                <p class="text-sm text-gray-600 mb-4">
                    "Track edits, active users, and articles created across all campaigns"
                </p>
                <TrendChart
                    points=data::contribution_trend()
                    series=CONTRIBUTION_SERIES.to_vec()
                    kind=ChartKind::Area
                />
            </section>

            // Active campaigns progress
            <section class="bg-white rounded-lg border border-gray-200 p-6">
                <h2 class="text-lg font-semibold">"Active Campaigns Progress"</h2>
                <p class="text-sm text-gray-600 mb-6">"Current status of ongoing campaigns"</p>

                <div class="space-y-6">
                    {data::campaign_progress().into_iter().map(|campaign| {
                        let percent = campaign.percent();
                        view! {
                            <div class="space-y-2">
                                <div class="flex items-center justify-between">
                                    <span class="font-medium">{campaign.name}</span>
                                    <span class="text-sm text-gray-600">
                                        {format!("{} / {} edits", campaign.edits, campaign.target)}
                                    </span>
                                </div>
                                <div class="h-2 bg-gray-200 rounded-full overflow-hidden">
                                    <div
                                        class="h-full bg-blue-600 rounded-full"
                                        style=format!("width: {}%", percent)
                                    />
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
