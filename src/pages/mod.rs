//! Pages
//!
//! Page identifiers, the navigation table, and the dispatch from identifier
//! to page view.

use leptos::*;

pub mod campaigns;
pub mod contributors;
pub mod dashboard;
pub mod settings;

pub use campaigns::CampaignList;
pub use contributors::ContributorAnalytics;
pub use dashboard::DashboardOverview;
pub use settings::SettingsPage;

/// Identifier for each navigable page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Dashboard,
    Campaigns,
    Contributors,
    Analytics,
    Settings,
}

impl PageId {
    /// Every page, in navigation order
    pub const ALL: [PageId; 5] = [
        PageId::Dashboard,
        PageId::Campaigns,
        PageId::Contributors,
        PageId::Analytics,
        PageId::Settings,
    ];

    /// URL-ish slug for the page
    pub fn slug(&self) -> &'static str {
        match self {
            PageId::Dashboard => "dashboard",
            PageId::Campaigns => "campaigns",
            PageId::Contributors => "contributors",
            PageId::Analytics => "analytics",
            PageId::Settings => "settings",
        }
    }

    /// Parse a slug, falling back to the dashboard on anything unrecognized.
    /// Navigation fails open rather than surfacing an error page.
    pub fn from_slug(slug: &str) -> PageId {
        match slug {
            "dashboard" => PageId::Dashboard,
            "campaigns" => PageId::Campaigns,
            "contributors" => PageId::Contributors,
            "analytics" => PageId::Analytics,
            "settings" => PageId::Settings,
            _ => PageId::Dashboard,
        }
    }
}

/// One entry in the side navigation
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Sidebar entries, one per page, in display order
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { page: PageId::Dashboard, label: "Dashboard", icon: "📊" },
    NavItem { page: PageId::Campaigns, label: "Campaigns", icon: "🎯" },
    NavItem { page: PageId::Contributors, label: "Contributors", icon: "👥" },
    NavItem { page: PageId::Analytics, label: "Analytics", icon: "📈" },
    NavItem { page: PageId::Settings, label: "Settings", icon: "⚙️" },
];

/// Produce the view for a page. The match is exhaustive, so every `PageId`
/// dispatches to exactly one view.
pub fn render_page(page: PageId) -> View {
    match page {
        PageId::Dashboard => view! { <DashboardOverview /> }.into_view(),
        PageId::Campaigns => view! { <CampaignList /> }.into_view(),
        PageId::Contributors => view! { <ContributorAnalytics /> }.into_view(),
        // Analytics is a deliberate redirect to the dashboard view until a
        // dedicated analytics page exists.
        PageId::Analytics => view! { <DashboardOverview /> }.into_view(),
        PageId::Settings => view! { <SettingsPage /> }.into_view(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_covers_every_page() {
        assert_eq!(NAV_ITEMS.len(), PageId::ALL.len());
        for page in PageId::ALL {
            assert!(NAV_ITEMS.iter().any(|item| item.page == page));
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_slug(page.slug()), page);
        }
    }

    #[test]
    fn test_unknown_slug_fails_open_to_dashboard() {
        assert_eq!(PageId::from_slug("reports"), PageId::Dashboard);
        assert_eq!(PageId::from_slug(""), PageId::Dashboard);
        assert_eq!(PageId::from_slug("DASHBOARD"), PageId::Dashboard);
    }

    #[test]
    fn test_nav_labels_are_unique() {
        for (i, a) in NAV_ITEMS.iter().enumerate() {
            for b in NAV_ITEMS.iter().skip(i + 1) {
                assert_ne!(a.label, b.label);
            }
        }
    }
}
