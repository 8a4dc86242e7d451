//! Badge Components
//!
//! Status badges for campaigns and rank badges for the leaderboard.

use leptos::*;

use crate::model::CampaignStatus;

/// Campaign status badge
#[component]
pub fn StatusBadge(status: CampaignStatus) -> impl IntoView {
    let class = match status {
        CampaignStatus::Active => "bg-blue-600 text-white",
        CampaignStatus::Completed => "bg-gray-200 text-gray-700",
        CampaignStatus::Upcoming => "border border-gray-300 text-gray-600",
    };

    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium {}",
            class
        )>
            {status.label()}
        </span>
    }
}

/// Leaderboard rank badge; medals for the top three
#[component]
pub fn RankBadge(rank: u32) -> impl IntoView {
    let (text, class) = match rank {
        1 => ("🥇 #1".to_string(), "bg-yellow-500 text-white"),
        2 => ("🥈 #2".to_string(), "bg-gray-400 text-white"),
        3 => ("🥉 #3".to_string(), "bg-amber-600 text-white"),
        n => (format!("#{}", n), "border border-gray-300 text-gray-600"),
    };

    view! {
        <span class=format!(
            "inline-block px-2 py-0.5 rounded-full text-xs font-medium {}",
            class
        )>
            {text}
        </span>
    }
}
