//! Contributors Page
//!
//! Contributor growth trends, edits by top contributors, and the
//! leaderboard.

use leptos::*;

use crate::components::{BarChart, ChartKind, RankBadge, Series, TrendChart};
use crate::data::{self, TrendPoint};
use crate::model::{format_count, Contributor};

const GROWTH_SERIES: [Series; 2] = [
    Series { name: "New Contributors", color: "#3b82f6" },
    Series { name: "Active Contributors", color: "#10b981" },
];

/// Contributor analytics page
#[component]
pub fn ContributorAnalytics() -> impl IntoView {
    let contributors = data::sample_contributors();

    // Edits per contributor for the bar chart
    let edits_points: Vec<TrendPoint> = contributors
        .iter()
        .map(|c| TrendPoint {
            label: c.username.clone(),
            values: vec![c.edits as f64],
        })
        .collect();

    view! {
        <div class="space-y-6">
            // Page header
            <div>
                <h1 class="text-2xl font-bold">"Contributor Analytics"</h1>
                <p class="text-gray-600 mt-1">"Track top contributors and engagement trends"</p>
            </div>

            // Trend charts
            <div class="grid gap-4 lg:grid-cols-2">
                <section class="bg-white rounded-lg border border-gray-200 p-6">
                    <h2 class="text-lg font-semibold">"Contributor Growth"</h2>
                    <p class="text-sm text-gray-600 mb-4">"New and active contributors over time"</p>
                    <TrendChart
                        points=data::contributor_trend()
                        series=GROWTH_SERIES.to_vec()
                        kind=ChartKind::Line
                    />
                </section>

                <section class="bg-white rounded-lg border border-gray-200 p-6">
                    <h2 class="text-lg font-semibold">"Edits by Top Contributors"</h2>
                    <p class="text-sm text-gray-600 mb-4">"Total edits from leading contributors"</p>
                    <BarChart points=edits_points />
                </section>
            </div>

            // Leaderboard
            <section class="bg-white rounded-lg border border-gray-200 p-6">
                <h2 class="text-lg font-semibold">"Top Contributors"</h2>
                <p class="text-sm text-gray-600 mb-4">"Leaderboard of most active contributors"</p>

                <div class="space-y-4">
                    {contributors.into_iter().map(|contributor| view! {
                        <LeaderboardRow contributor=contributor />
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}

/// Single leaderboard entry
#[component]
fn LeaderboardRow(contributor: Contributor) -> impl IntoView {
    let initials = contributor.initials();
    let bytes = contributor.bytes_display();
    let top_three = contributor.rank <= 3;

    view! {
        <div class="flex items-center justify-between p-4 rounded-lg border border-gray-200 \
                    hover:bg-gray-50 transition-colors">
            <div class="flex items-center gap-4">
                <div class="flex items-center gap-3">
                    <RankBadge rank=contributor.rank />
                    <div class="w-10 h-10 rounded-full bg-gray-200 flex items-center justify-center \
                                text-sm font-medium text-gray-700">
                        {initials}
                    </div>
                </div>
                <div>
                    <div class="flex items-center gap-2">
                        <span class="font-medium">{contributor.name.clone()}</span>
                        {top_three.then(|| view! { <span class="text-yellow-500">"🏆"</span> })}
                    </div>
                    <p class="text-sm text-gray-600">{format!("@{}", contributor.username)}</p>
                </div>
            </div>

            <div class="flex gap-8 text-sm">
                <div class="text-center">
                    <div class="text-xs text-gray-600">"Edits"</div>
                    <div class="font-medium">{format_count(contributor.edits)}</div>
                </div>
                <div class="text-center">
                    <div class="text-xs text-gray-600">"Articles"</div>
                    <div class="font-medium">{format_count(contributor.articles)}</div>
                </div>
                <div class="text-center">
                    <div class="text-xs text-gray-600">"Bytes"</div>
                    <div class="font-medium">{bytes}</div>
                </div>
            </div>
        </div>
    }
}
