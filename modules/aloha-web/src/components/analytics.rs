use aloha_common::format::{capitalize, industry_label, thousands};
use content_api_client::{
    ClientFull, ContentTypeData, IndustryInsight, KeywordData, PerformanceData, PerformanceTotals,
};
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{client_selector, error_banner, inline_error, page_header, stat_card, SECONDARY_BUTTON};
use crate::templates::{href, render_to_html};

/// Periods offered by the selector, in days.
pub const PERIODS: [u32; 3] = [7, 30, 90];
pub const DEFAULT_DAYS: u32 = 30;

/// Tips shown when the backend has no insights yet.
const FALLBACK_TIPS: &[(&str, &str)] = &[
    ("Get Started", "Add clients and generate content to see AI-powered insights"),
    ("Best Posting Times", "Hawaii audiences engage most between 7-9 AM and 6-8 PM HST"),
    ("Content Variety", "Mix promotional content with educational and behind-the-scenes posts"),
];

const PLATFORM_PLACEHOLDERS: &[(&str, &str)] = &[
    ("TikTok", "bg-pink-500"),
    ("Instagram", "bg-purple-500"),
    ("YouTube", "bg-red-500"),
    ("Facebook", "bg-blue-500"),
];

fn platform_color(platform: &str) -> &'static str {
    match platform {
        "tiktok" => "bg-pink-500",
        "instagram" => "bg-purple-500",
        "youtube" => "bg-red-500",
        "facebook" => "bg-blue-500",
        _ => "bg-gray-400",
    }
}

/// Unknown periods fall back to 30 days.
pub fn parse_days(raw: Option<&str>) -> u32 {
    raw.and_then(|d| d.trim().parse().ok())
        .filter(|d| PERIODS.contains(d))
        .unwrap_or(DEFAULT_DAYS)
}

#[derive(Clone, PartialEq)]
pub struct AnalyticsData {
    pub clients: Vec<ClientFull>,
    pub client_id: Option<String>,
    pub days: u32,
    /// `Ok(None)` when no client is selected.
    pub performance: Result<Option<PerformanceData>, String>,
    pub insights: Vec<IndustryInsight>,
    pub content_types: Vec<ContentTypeData>,
    pub keywords: Vec<KeywordData>,
    pub notice: Option<String>,
    pub action_error: Option<String>,
}

impl AnalyticsData {
    fn link(&self, days: u32) -> String {
        let client = self.client_id.clone().unwrap_or_default();
        href("/analytics", &[("client_id", &client), ("days", &days.to_string())])
    }
}

fn period_tabs(data: &AnalyticsData) -> Element {
    let tabs: Vec<(String, String, &str)> = PERIODS
        .iter()
        .map(|d| {
            let class = if *d == data.days {
                "px-3 py-1.5 text-sm rounded-lg bg-emerald-600 text-white"
            } else {
                "px-3 py-1.5 text-sm rounded-lg text-gray-600 hover:bg-gray-100"
            };
            (data.link(*d), format!("Last {d} days"), class)
        })
        .collect();
    rsx! {
        div { class: "flex items-center gap-1",
            for (target, label, class) in tabs.iter() {
                a { href: "{target}", class: "{class}", "{label}" }
            }
        }
    }
}

fn quick_stats(totals: &PerformanceTotals, platform_count: usize) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Quick Stats" }
            div { class: "space-y-4",
                div {
                    p { class: "text-2xl font-bold text-gray-900", "{totals.avg_score}%" }
                    p { class: "text-sm text-gray-500", "Avg. Quality Score" }
                }
                div {
                    p { class: "text-2xl font-bold text-emerald-600", "{totals.content_pieces}" }
                    p { class: "text-sm text-gray-500", "Content Pieces" }
                }
                div {
                    p { class: "text-2xl font-bold text-gray-900", "{platform_count}" }
                    p { class: "text-sm text-gray-500", "Platforms" }
                }
            }
        }
    }
}

fn insights_panel(insights: &[IndustryInsight]) -> Element {
    let cards: Vec<_> = insights
        .iter()
        .map(|i| {
            let hooks: Vec<String> = i.best_hook_styles.iter().take(3).cloned().collect();
            let hashtags = i
                .winning_hashtags
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ");
            (i, industry_label(&i.industry), hooks, hashtags)
        })
        .collect();

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Industry Insights" }
            if cards.is_empty() {
                div { class: "space-y-4",
                    for (title, text) in FALLBACK_TIPS.iter() {
                        div { class: "p-4 bg-gray-50 rounded-lg",
                            p { class: "text-sm font-medium text-gray-900", "{title}" }
                            p { class: "text-sm text-gray-600 mt-1", "{text}" }
                        }
                    }
                }
            } else {
                div { class: "space-y-4",
                    for (insight, industry, hooks, hashtags) in cards.iter() {
                        div { class: "p-4 bg-gray-50 rounded-lg",
                            div { class: "flex items-center gap-2 mb-2",
                                span { class: "text-sm font-medium text-gray-900", "{industry}" }
                                span { class: "text-xs text-gray-400 ml-auto", "{insight.videos_analyzed} videos analyzed" }
                            }
                            if !hooks.is_empty() {
                                p { class: "text-xs text-gray-500 mb-1", "Best Hook Styles:" }
                                div { class: "flex flex-wrap gap-1 mb-2",
                                    for style in hooks.iter() {
                                        span { class: "px-2 py-0.5 bg-emerald-100 text-emerald-700 text-xs rounded", "{style}" }
                                    }
                                }
                            }
                            if !hashtags.is_empty() {
                                p { class: "text-xs text-gray-500", "#{hashtags}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn platform_cards(performance: Option<&PerformanceData>) -> Element {
    let stats: Vec<_> = performance
        .map(|p| p.by_platform.as_slice())
        .unwrap_or_default()
        .iter()
        .map(|p| {
            (
                capitalize(&p.platform),
                platform_color(&p.platform),
                thousands(p.views),
                format!("{} posts | {}% score", p.count, p.avg_score),
            )
        })
        .collect();

    rsx! {
        div { class: "mt-6 bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Performance by Platform" }
            div { class: "grid grid-cols-1 md:grid-cols-4 gap-4",
                if stats.is_empty() {
                    for (name, color) in PLATFORM_PLACEHOLDERS.iter() {
                        div { class: "p-4 border border-gray-200 rounded-lg",
                            div { class: "flex items-center gap-2 mb-2",
                                div { class: "w-3 h-3 rounded-full {color}" }
                                span { class: "text-sm font-medium text-gray-900", "{name}" }
                            }
                            p { class: "text-2xl font-bold text-gray-900", "0" }
                            p { class: "text-sm text-gray-500", "No data yet" }
                        }
                    }
                } else {
                    for (name, color, views, summary) in stats.iter() {
                        div { class: "p-4 border border-gray-200 rounded-lg",
                            div { class: "flex items-center gap-2 mb-2",
                                div { class: "w-3 h-3 rounded-full {color}" }
                                span { class: "text-sm font-medium text-gray-900", "{name}" }
                            }
                            p { class: "text-2xl font-bold text-gray-900", "{views}" }
                            p { class: "text-sm text-gray-500", "{summary}" }
                        }
                    }
                }
            }
        }
    }
}

fn top_content(performance: &PerformanceData) -> Element {
    let rows: Vec<_> = performance
        .top_content
        .iter()
        .take(5)
        .enumerate()
        .map(|(i, c)| {
            (
                format!("#{}", i + 1),
                c,
                capitalize(&c.platform),
                format!("{} views", thousands(c.views)),
                format!("{} engagement", thousands(c.engagement)),
            )
        })
        .collect();
    rsx! {
        div { class: "mt-6 bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Top Performing Content" }
            div { class: "space-y-3",
                for (rank, content, platform, views, engagement) in rows.iter() {
                    div { class: "flex items-center gap-4 p-3 bg-gray-50 rounded-lg",
                        span { class: "text-lg font-bold text-gray-400", "{rank}" }
                        div { class: "flex-1",
                            p { class: "font-medium text-gray-900", "{content.keyword}" }
                            p { class: "text-sm text-gray-500", "{platform}" }
                        }
                        div { class: "text-right",
                            p { class: "font-semibold text-gray-900", "{views}" }
                            p { class: "text-sm text-gray-500", "{engagement}" }
                        }
                    }
                }
            }
        }
    }
}

/// Rows are `(label, views, engagement, count, avg score)`.
fn breakdown_table(title: &str, label_heading: &str, rows: Vec<(String, String, String, u64, String)>) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "{title}" }
            if rows.is_empty() {
                p { class: "text-sm text-gray-500", "No data yet" }
            } else {
                table { class: "w-full text-sm",
                    thead {
                        tr {
                            th { class: "text-left pb-2 text-gray-500", "{label_heading}" }
                            th { class: "text-right pb-2 text-gray-500", "Views" }
                            th { class: "text-right pb-2 text-gray-500", "Engagement" }
                            th { class: "text-right pb-2 text-gray-500", "Pieces" }
                            th { class: "text-right pb-2 text-gray-500", "Avg Score" }
                        }
                    }
                    tbody {
                        for (label, views, engagement, count, score) in rows.iter() {
                            tr {
                                td { class: "py-1 text-gray-900", "{label}" }
                                td { class: "py-1 text-right", "{views}" }
                                td { class: "py-1 text-right", "{engagement}" }
                                td { class: "py-1 text-right", "{count}" }
                                td { class: "py-1 text-right", "{score}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Analytics(data: AnalyticsData) -> Element {
    let selected_client = data
        .client_id
        .as_deref()
        .and_then(|id| data.clients.iter().find(|c| c.id == id));
    let subtitle = match selected_client {
        Some(client) => format!("Performance for {}", client.business_name),
        None => "Performance insights".to_string(),
    };
    let page_href = data.link(data.days);
    let selector = client_selector(
        "/analytics",
        &data.clients,
        data.client_id.as_deref().unwrap_or_default(),
        &[("days", data.days.to_string())],
    );
    let client_id = data.client_id.clone().unwrap_or_default();
    let days = data.days.to_string();

    let body = match &data.performance {
        Err(message) => error_banner("Failed to load analytics", message, &page_href),
        Ok(performance) => {
            let performance = performance.as_ref();
            let totals = performance.map(|p| p.totals.clone()).unwrap_or_default();
            let platform_count = performance.map(|p| p.by_platform.len()).unwrap_or(0);
            let type_rows: Vec<_> = data
                .content_types
                .iter()
                .map(|t| {
                    (
                        industry_label(&t.content_type),
                        thousands(t.total_views),
                        thousands(t.total_engagement),
                        t.count,
                        t.avg_score.clone(),
                    )
                })
                .collect();
            let keyword_rows: Vec<_> = data
                .keywords
                .iter()
                .map(|k| {
                    (
                        k.keyword.clone(),
                        thousands(k.total_views),
                        thousands(k.total_engagement),
                        k.count,
                        k.avg_score.clone(),
                    )
                })
                .collect();
            let top = performance.filter(|p| !p.top_content.is_empty()).map(top_content);

            rsx! {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",
                    { stat_card(thousands(totals.views), "Total Views", Some(format!("{} content pieces", totals.content_pieces)), "blue") }
                    { stat_card(thousands(totals.likes), "Total Likes", Some(format!("Avg Score: {}", totals.avg_score)), "pink") }
                    { stat_card(thousands(totals.comments), "Comments", Some("Engagement metric".to_string()), "purple") }
                    { stat_card(thousands(totals.shares), "Shares", Some("Viral metric".to_string()), "emerald") }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                    div { class: "lg:col-span-2 space-y-6",
                        { quick_stats(&totals, platform_count) }
                    }
                    { insights_panel(&data.insights) }
                }
                { platform_cards(performance) }
                if let Some(top) = top {
                    {top}
                }
                div { class: "mt-6 grid grid-cols-1 lg:grid-cols-2 gap-6",
                    { breakdown_table("By Content Type", "Content Type", type_rows) }
                    { breakdown_table("By Keyword", "Keyword", keyword_rows) }
                }
            }
        }
    };

    rsx! {
        Layout { title: "Analytics".to_string(), path: "/analytics".to_string(),
            { page_header("Analytics", &subtitle, Some(&page_href)) }
            div { class: "p-8",
                div { class: "flex items-center justify-between",
                    {selector}
                    div { class: "flex items-center gap-3 mb-6",
                        { period_tabs(&data) }
                        form { method: "POST", action: "/analytics/refresh",
                            input { r#type: "hidden", name: "client_id", value: "{client_id}" }
                            input { r#type: "hidden", name: "days", value: "{days}" }
                            button { r#type: "submit", class: SECONDARY_BUTTON, "Refresh Analytics" }
                        }
                    }
                }
                if let Some(err) = &data.action_error {
                    div { class: "mb-6", { inline_error(Some(err)) } }
                }
                if let Some(notice) = &data.notice {
                    div { class: "mb-6 p-3 bg-emerald-50 border border-emerald-200 rounded-lg text-emerald-700 text-sm", "{notice}" }
                }
                {body}
            }
        }
    }
}

pub fn render_analytics(data: AnalyticsData) -> String {
    let mut dom = VirtualDom::new_with_props(Analytics, AnalyticsProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
