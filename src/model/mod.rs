//! Domain Model
//!
//! Campaign and contributor records, the status filter, and the campaign
//! search/filter function. Everything here is plain data and pure functions
//! so it can be tested natively.

use serde::{Deserialize, Serialize};

/// Lifecycle status of a campaign
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Completed,
    Upcoming,
}

impl CampaignStatus {
    /// Lowercase label as shown in status badges
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Active => "active",
            CampaignStatus::Completed => "completed",
            CampaignStatus::Upcoming => "upcoming",
        }
    }
}

/// A time-boxed editing initiative
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: u32,
    pub name: String,
    pub status: CampaignStatus,
    /// ISO-8601 date (YYYY-MM-DD)
    pub start_date: String,
    /// ISO-8601 date (YYYY-MM-DD)
    pub end_date: String,
    pub participants: u32,
    pub total_edits: u32,
    pub articles_edited: u32,
}

impl Campaign {
    /// Human-readable date range, e.g. "Oct 1, 2025 - Nov 30, 2025"
    pub fn duration_label(&self) -> String {
        format!(
            "{} - {}",
            format_iso_date(&self.start_date),
            format_iso_date(&self.end_date)
        )
    }
}

/// An individual ranked by editing activity
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub edits: u32,
    pub articles: u32,
    pub bytes_added: u64,
    pub rank: u32,
}

impl Contributor {
    /// Uppercase initials for the avatar, e.g. "Sarah Chen" -> "SC"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// Byte contribution in thousands, e.g. 345600 -> "345.6K"
    pub fn bytes_display(&self) -> String {
        format!("{:.1}K", self.bytes_added as f64 / 1000.0)
    }
}

/// Status predicate for the campaign list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Active,
    Completed,
    Upcoming,
}

impl StatusFilter {
    /// Every filter, in the order the filter buttons appear
    pub const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Active,
        StatusFilter::Completed,
        StatusFilter::Upcoming,
    ];

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
            StatusFilter::Upcoming => "Upcoming",
        }
    }

    /// Whether a campaign with the given status passes this filter
    pub fn matches(&self, status: CampaignStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == CampaignStatus::Active,
            StatusFilter::Completed => status == CampaignStatus::Completed,
            StatusFilter::Upcoming => status == CampaignStatus::Upcoming,
        }
    }
}

/// Filter campaigns by name substring (case-insensitive) and status.
///
/// An empty query matches every record. Whitespace is matched literally,
/// so a query of " " only matches names containing a space. Output order
/// follows input order; the input is left untouched.
pub fn filter_campaigns(
    records: &[Campaign],
    query: &str,
    status: StatusFilter,
) -> Vec<Campaign> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&needle) && status.matches(c.status))
        .cloned()
        .collect()
}

/// Format a count with thousands separators, e.g. 12456 -> "12,456"
pub fn format_count(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format an ISO-8601 date for display, e.g. "2025-10-01" -> "Oct 1, 2025".
/// Unparseable input is shown as-is.
pub fn format_iso_date(iso: &str) -> String {
    chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_empty_query_all_status_is_identity() {
        let campaigns = data::sample_campaigns();
        let filtered = filter_campaigns(&campaigns, "", StatusFilter::All);
        assert_eq!(filtered, campaigns);
    }

    #[test]
    fn test_filter_soundness_and_completeness() {
        let campaigns = data::sample_campaigns();
        let query = "a";
        let status = StatusFilter::Active;
        let filtered = filter_campaigns(&campaigns, query, status);

        for c in &filtered {
            assert!(c.name.to_lowercase().contains(query));
            assert!(status.matches(c.status));
        }
        for c in &campaigns {
            let matches = c.name.to_lowercase().contains(query) && status.matches(c.status);
            assert_eq!(matches, filtered.contains(c));
        }
    }

    #[test]
    fn test_filter_is_idempotent() {
        let campaigns = data::sample_campaigns();
        let once = filter_campaigns(&campaigns, "month", StatusFilter::All);
        let twice = filter_campaigns(&once, "month", StatusFilter::All);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_preserves_order() {
        let campaigns = data::sample_campaigns();
        let filtered = filter_campaigns(&campaigns, "", StatusFilter::Active);
        let expected: Vec<_> = campaigns
            .iter()
            .filter(|c| c.status == CampaignStatus::Active)
            .cloned()
            .collect();
        assert_eq!(filtered, expected);
    }

    #[test]
    fn test_climate_query_matches_single_campaign() {
        let campaigns = data::sample_campaigns();
        let filtered = filter_campaigns(&campaigns, "climate", StatusFilter::All);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Climate Action Edit-a-thon");
    }

    #[test]
    fn test_completed_filter_matches_single_campaign() {
        let campaigns = data::sample_campaigns();
        let filtered = filter_campaigns(&campaigns, "", StatusFilter::Completed);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Black History Month 2025");
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let campaigns = data::sample_campaigns();
        let lower = filter_campaigns(&campaigns, "women", StatusFilter::All);
        let upper = filter_campaigns(&campaigns, "WOMEN", StatusFilter::All);
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_whitespace_query_is_literal() {
        let campaigns = data::sample_campaigns();
        // Every sample name contains a space, so " " matches all of them.
        let filtered = filter_campaigns(&campaigns, " ", StatusFilter::All);
        assert_eq!(filtered.len(), campaigns.len());
    }

    #[test]
    fn test_empty_records_yield_empty_result() {
        let filtered = filter_campaigns(&[], "anything", StatusFilter::All);
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_contributor_initials() {
        let contributors = data::sample_contributors();
        assert_eq!(contributors[0].initials(), "SC");
        assert_eq!(contributors[1].initials(), "MR");
    }

    #[test]
    fn test_bytes_display() {
        let c = &data::sample_contributors()[0];
        assert_eq!(c.bytes_display(), "345.6K");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1234), "1,234");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date("2025-10-01"), "Oct 1, 2025");
        assert_eq!(format_iso_date("not a date"), "not a date");
    }

    #[test]
    fn test_duration_label() {
        let campaigns = data::sample_campaigns();
        assert_eq!(campaigns[0].duration_label(), "Oct 1, 2025 - Nov 30, 2025");
    }
}
