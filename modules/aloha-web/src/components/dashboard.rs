use aloha_common::format::{relative_time, thousands};
use chrono::{DateTime, Utc};
use content_api_client::{CostData, DashboardOverview, Pipeline};
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{error_banner, page_header, stat_card, status_badge};
use crate::templates::render_to_html;

#[derive(Clone, PartialEq)]
pub struct DashboardData {
    pub overview: Result<DashboardOverview, String>,
    pub pipelines: Vec<Pipeline>,
    pub costs: Option<CostData>,
    pub now: DateTime<Utc>,
}

fn month_row(label: &str, value: u64) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "text-gray-600", "{label}" }
            span { class: "font-semibold text-gray-900", "{value}" }
        }
    }
}

fn overview_panels(o: &DashboardOverview, now: DateTime<Utc>) -> Element {
    let recent: Vec<_> = o
        .recent_activity
        .iter()
        .take(5)
        .map(|a| (a, relative_time(a.created_at, now)))
        .collect();

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",
            { stat_card(thousands(o.clients.active), "Active Clients", Some(format!("{} total", o.clients.total)), "blue") }
            { stat_card(thousands(o.content.scripts), "Total Scripts", Some(format!("{} this month", o.this_month.scripts)), "purple") }
            { stat_card(thousands(o.content.pending_review), "Pending Review", None, "amber") }
            { stat_card(thousands(o.content.published), "Published", Some(format!("{} this month", o.this_month.published)), "emerald") }
        }

        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
            div { class: "bg-white rounded-xl border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "This Month" }
                div { class: "space-y-4",
                    { month_row("Scripts Generated", o.this_month.scripts) }
                    { month_row("Videos Rendered", o.this_month.renders) }
                    { month_row("Posts Published", o.this_month.published) }
                }
            }

            div { class: "lg:col-span-2 bg-white rounded-xl border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Recent Activity" }
                if recent.is_empty() {
                    div { class: "text-center py-8",
                        p { class: "text-gray-500", "No recent activity" }
                        p { class: "text-sm text-gray-400 mt-1",
                            "Add clients and generate content to see activity here"
                        }
                    }
                } else {
                    div { class: "space-y-3",
                        for (activity, ago) in recent.iter() {
                            div { class: "p-3 bg-gray-50 rounded-lg",
                                p { class: "text-sm text-gray-900",
                                    span { class: "font-medium", "{activity.keyword}" }
                                    " - "
                                    span { class: "text-gray-600", "{activity.client}" }
                                }
                                div { class: "flex items-center gap-2 mt-1",
                                    { status_badge(&activity.status) }
                                    span { class: "text-xs text-gray-500", "{ago}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn pipelines_table(pipelines: &[Pipeline], now: DateTime<Utc>) -> Element {
    let rows: Vec<_> = pipelines
        .iter()
        .map(|p| (p, relative_time(p.started_at, now)))
        .collect();
    rsx! {
        div { class: "mt-8 bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Pipelines" }
            table { class: "w-full text-sm",
                thead {
                    tr {
                        th { class: "text-left pb-2 text-gray-500", "Status" }
                        th { class: "text-left pb-2 text-gray-500", "Started" }
                        th { class: "text-right pb-2 text-gray-500", "Scripts" }
                        th { class: "text-right pb-2 text-gray-500", "Voiceovers" }
                        th { class: "text-right pb-2 text-gray-500", "Rendered" }
                        th { class: "text-right pb-2 text-gray-500", "Published" }
                    }
                }
                tbody {
                    for (p, started) in rows.iter() {
                        tr {
                            td { class: "py-1", { status_badge(&p.status) } }
                            td { class: "py-1 text-gray-500", "{started}" }
                            td { class: "py-1 text-right", "{p.scripts_generated}" }
                            td { class: "py-1 text-right", "{p.voiceovers_created}" }
                            td { class: "py-1 text-right", "{p.videos_rendered}" }
                            td { class: "py-1 text-right", "{p.videos_published}" }
                        }
                    }
                }
            }
        }
    }
}

fn cost_summary(costs: &CostData) -> Element {
    rsx! {
        div { class: "mt-8 bg-white rounded-xl border border-gray-200 p-6",
            div { class: "flex items-baseline justify-between mb-4",
                h2 { class: "text-lg font-semibold text-gray-900", "Costs (30 days)" }
                span { class: "text-2xl font-bold text-gray-900", "${costs.total_cost}" }
            }
            if !costs.by_service.is_empty() {
                table { class: "w-full text-sm",
                    tbody {
                        for service in costs.by_service.iter() {
                            tr {
                                td { class: "py-1 text-gray-600", "{service.service}" }
                                td { class: "py-1 text-right text-gray-500", "{service.operations} ops" }
                                td { class: "py-1 text-right font-medium", "${service.cost}" }
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
fn Dashboard(data: DashboardData) -> Element {
    let body = match &data.overview {
        Ok(overview) => overview_panels(overview, data.now),
        Err(message) => error_banner("Connection Error", message, "/"),
    };
    let refresh = data.overview.is_ok().then_some("/");

    rsx! {
        Layout { title: "Dashboard".to_string(), path: "/".to_string(),
            { page_header("Dashboard", "Overview of your content factory", refresh) }
            div { class: "p-8",
                {body}

                if data.overview.is_ok() {
                    if !data.pipelines.is_empty() {
                        { pipelines_table(&data.pipelines, data.now) }
                    }
                    if let Some(costs) = &data.costs {
                        { cost_summary(costs) }
                    }

                    div { class: "mt-8 bg-gradient-to-r from-emerald-600 to-emerald-700 rounded-xl p-6 text-white",
                        h2 { class: "text-lg font-semibold mb-2", "Quick Actions" }
                        p { class: "text-emerald-100 text-sm mb-4", "Get started with common tasks" }
                        div { class: "flex flex-wrap gap-3",
                            a { href: "/clients?modal=add", class: "px-4 py-2 bg-white/20 hover:bg-white/30 rounded-lg text-sm font-medium", "Add New Client" }
                            a { href: "/content?modal=generate", class: "px-4 py-2 bg-white/20 hover:bg-white/30 rounded-lg text-sm font-medium", "Generate Content" }
                            a { href: "/review", class: "px-4 py-2 bg-white/20 hover:bg-white/30 rounded-lg text-sm font-medium", "Review Queue" }
                            a { href: "/analytics", class: "px-4 py-2 bg-white/20 hover:bg-white/30 rounded-lg text-sm font-medium", "View Analytics" }
                        }
                    }
                }
            }
        }
    }
}

pub fn render_dashboard(data: DashboardData) -> String {
    let mut dom = VirtualDom::new_with_props(Dashboard, DashboardProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
