//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod badge;
pub mod chart;
pub mod stat_card;
pub mod toast;

pub use badge::{RankBadge, StatusBadge};
pub use chart::{BarChart, ChartKind, Series, TrendChart};
pub use stat_card::StatCard;
pub use toast::Toast;
