//! Sample Data
//!
//! Embedded datasets backing every page. In a real deployment these would
//! come from a campaign API; fetching is out of scope here.

use crate::model::{Campaign, CampaignStatus, Contributor};

/// One labelled point in a chart series
#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub label: String,
    pub values: Vec<f64>,
}

/// Progress of an active campaign toward its edit target
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignProgress {
    pub name: &'static str,
    pub edits: u32,
    pub target: u32,
}

impl CampaignProgress {
    /// Completion percentage, clamped to 100
    pub fn percent(&self) -> u32 {
        if self.target == 0 {
            return 0;
        }
        (self.edits * 100 / self.target).min(100)
    }
}

/// The six sample campaigns shown in the campaign list
pub fn sample_campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Women in Science 2025".to_string(),
            status: CampaignStatus::Active,
            start_date: "2025-10-01".to_string(),
            end_date: "2025-11-30".to_string(),
            participants: 52,
            total_edits: 1234,
            articles_edited: 245,
        },
        Campaign {
            id: 2,
            name: "Asia Art Month".to_string(),
            status: CampaignStatus::Active,
            start_date: "2025-10-15".to_string(),
            end_date: "2025-11-15".to_string(),
            participants: 38,
            total_edits: 892,
            articles_edited: 178,
        },
        Campaign {
            id: 3,
            name: "Climate Action Edit-a-thon".to_string(),
            status: CampaignStatus::Active,
            start_date: "2025-09-20".to_string(),
            end_date: "2025-12-20".to_string(),
            participants: 67,
            total_edits: 1567,
            articles_edited: 312,
        },
        Campaign {
            id: 4,
            name: "Indigenous Languages".to_string(),
            status: CampaignStatus::Active,
            start_date: "2025-10-10".to_string(),
            end_date: "2025-10-31".to_string(),
            participants: 24,
            total_edits: 445,
            articles_edited: 89,
        },
        Campaign {
            id: 5,
            name: "Black History Month 2025".to_string(),
            status: CampaignStatus::Completed,
            start_date: "2025-02-01".to_string(),
            end_date: "2025-02-28".to_string(),
            participants: 89,
            total_edits: 2345,
            articles_edited: 456,
        },
        Campaign {
            id: 6,
            name: "Pride Month Edit-a-thon".to_string(),
            status: CampaignStatus::Upcoming,
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-30".to_string(),
            participants: 0,
            total_edits: 0,
            articles_edited: 0,
        },
    ]
}

/// The eight ranked contributors on the analytics leaderboard
pub fn sample_contributors() -> Vec<Contributor> {
    let rows: [(&str, &str, u32, u32, u64); 8] = [
        ("Sarah Chen", "schen_wiki", 1245, 89, 345_600),
        ("Marcus Rodriguez", "mrodriguez", 1098, 76, 298_400),
        ("Aisha Patel", "apatel", 967, 68, 267_800),
        ("James Wilson", "jwilson", 834, 54, 234_500),
        ("Lisa Anderson", "landerson", 789, 51, 198_700),
        ("David Kim", "dkim", 723, 47, 187_600),
        ("Emily Martinez", "emartinez", 656, 42, 156_300),
        ("Robert Taylor", "rtaylor", 612, 39, 145_200),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (name, username, edits, articles, bytes_added))| Contributor {
            id: i as u32 + 1,
            name: name.to_string(),
            username: username.to_string(),
            edits: *edits,
            articles: *articles,
            bytes_added: *bytes_added,
            rank: i as u32 + 1,
        })
        .collect()
}

/// Contributions over time across all campaigns: edits, users, articles
pub fn contribution_trend() -> Vec<TrendPoint> {
    [
        ("Oct 1", 245.0, 18.0, 12.0),
        ("Oct 5", 312.0, 24.0, 18.0),
        ("Oct 9", 289.0, 21.0, 15.0),
        ("Oct 13", 456.0, 32.0, 24.0),
        ("Oct 17", 523.0, 38.0, 28.0),
        ("Oct 21", 612.0, 45.0, 35.0),
        ("Oct 25", 678.0, 52.0, 42.0),
    ]
    .iter()
    .map(|(label, edits, users, articles)| TrendPoint {
        label: label.to_string(),
        values: vec![*edits, *users, *articles],
    })
    .collect()
}

/// Contributor growth per month: new contributors, active contributors
pub fn contributor_trend() -> Vec<TrendPoint> {
    [
        ("May", 12.0, 45.0),
        ("Jun", 18.0, 58.0),
        ("Jul", 15.0, 67.0),
        ("Aug", 22.0, 82.0),
        ("Sep", 28.0, 98.0),
        ("Oct", 35.0, 124.0),
    ]
    .iter()
    .map(|(label, new, active)| TrendPoint {
        label: label.to_string(),
        values: vec![*new, *active],
    })
    .collect()
}

/// Edit progress of the four featured active campaigns
pub fn campaign_progress() -> Vec<CampaignProgress> {
    vec![
        CampaignProgress { name: "Women in Science 2025", edits: 1234, target: 1500 },
        CampaignProgress { name: "Asia Art Month", edits: 892, target: 1200 },
        CampaignProgress { name: "Climate Action Edit-a-thon", edits: 567, target: 1000 },
        CampaignProgress { name: "Indigenous Languages", edits: 445, target: 500 },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_campaigns_shape() {
        let campaigns = sample_campaigns();
        assert_eq!(campaigns.len(), 6);

        let active = campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .count();
        assert_eq!(active, 4);

        // ids are unique
        let mut ids: Vec<_> = campaigns.iter().map(|c| c.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), campaigns.len());
    }

    #[test]
    fn test_contributors_are_ranked_by_edits() {
        let contributors = sample_contributors();
        assert_eq!(contributors.len(), 8);
        for pair in contributors.windows(2) {
            assert!(pair[0].edits >= pair[1].edits);
            assert_eq!(pair[0].rank + 1, pair[1].rank);
        }
    }

    #[test]
    fn test_progress_percent() {
        let progress = campaign_progress();
        assert_eq!(progress[0].percent(), 82);
        assert_eq!(progress[3].percent(), 89);
        assert_eq!(CampaignProgress { name: "x", edits: 10, target: 0 }.percent(), 0);
        assert_eq!(CampaignProgress { name: "x", edits: 900, target: 300 }.percent(), 100);
    }

    #[test]
    fn test_trend_series_are_rectangular() {
        for p in contribution_trend() {
            assert_eq!(p.values.len(), 3);
        }
        for p in contributor_trend() {
            assert_eq!(p.values.len(), 2);
        }
    }
}
