pub mod analytics;
pub mod calendar;
pub mod client_detail;
pub mod clients;
pub mod content;
pub mod dashboard;
pub mod layout;
pub mod review;
pub mod widgets;

pub use analytics::{parse_days, render_analytics, AnalyticsData};
pub use calendar::{render_calendar, CalendarData};
pub use client_detail::{render_client_detail, ClientDetailData, DetailForm};
pub use clients::{render_clients, ClientsData, ClientsModal};
pub use content::{
    render_content, render_script_detail, ContentData, ContentFilters, ContentModal, ContentTab,
    ScriptDetailData,
};
pub use dashboard::{render_dashboard, DashboardData};
pub use review::{render_review, ReviewData, ReviewModal, ReviewState};
