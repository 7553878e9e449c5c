use aloha_common::format::{date, industry_label, relative_time, thousands};
use aloha_common::forms::{KeywordForm, PlatformForm};
use chrono::{DateTime, FixedOffset, Utc};
use content_api_client::{ClientDashboard, ClientFull, Platform};
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{
    error_banner, inline_error, page_header, stat_card, status_badge, INPUT_CLASS, LABEL_CLASS,
    PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::templates::{client_path, render_to_html};

/// The form that was last submitted, re-rendered with its error.
#[derive(Clone, PartialEq, Default)]
pub enum DetailForm {
    #[default]
    Clean,
    Keyword { form: KeywordForm, error: String },
    Platform { form: PlatformForm, error: String },
    Status { error: String },
}

#[derive(Clone, PartialEq)]
pub struct ClientDetailData {
    pub id: String,
    pub client: Result<ClientFull, String>,
    pub dashboard: Option<ClientDashboard>,
    pub form: DetailForm,
    pub tz: FixedOffset,
    pub now: DateTime<Utc>,
}

fn stats_panel(dashboard: &ClientDashboard, now: DateTime<Utc>) -> Element {
    let stats = &dashboard.stats;
    let perf = &dashboard.performance;
    let metrics = [
        ("Views", thousands(perf.total_views)),
        ("Likes", thousands(perf.total_likes)),
        ("Comments", thousands(perf.total_comments)),
        ("Shares", thousands(perf.total_shares)),
    ];
    let pipeline = dashboard
        .pipeline
        .as_ref()
        .map(|p| (p, relative_time(p.started_at, now)));

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",
            { stat_card(thousands(stats.total_scripts), "Total Scripts", Some(format!("{} this month", stats.scripts_this_month)), "purple") }
            { stat_card(thousands(stats.total_renders), "Total Videos", Some(format!("{} approved", stats.renders_approved)), "blue") }
            { stat_card(thousands(stats.active_keywords), "Active Keywords", None, "amber") }
            { stat_card(format!("{}%", stats.avg_quality_score), "Avg Quality", None, "emerald") }
        }
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6 mb-8",
            div { class: "bg-white rounded-xl border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Performance" }
                div { class: "grid grid-cols-2 gap-4 text-sm",
                    for (label, value) in metrics.iter() {
                        div {
                            span { class: "text-gray-500", "{label} " }
                            span { class: "font-semibold", "{value}" }
                        }
                    }
                }
                p { class: "text-sm text-gray-500 mt-4", "Avg engagement score: {perf.avg_engagement_score}" }
            }
            div { class: "bg-white rounded-xl border border-gray-200 p-6",
                h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Latest Pipeline" }
                if let Some((p, started)) = pipeline {
                    div { class: "space-y-2 text-sm",
                        div { class: "flex items-center gap-2",
                            { status_badge(&p.status) }
                            span { class: "text-gray-500", "started {started}" }
                        }
                        p { "{p.scripts_generated} scripts, {p.voiceovers_created} voiceovers" }
                        p { "{p.videos_rendered} rendered, {p.videos_published} published" }
                    }
                } else {
                    p { class: "text-sm text-gray-500", "No pipeline runs yet" }
                }
            }
        }
    }
}

fn keywords_panel(client: &ClientFull, form: &DetailForm) -> Element {
    let keywords = client.keywords.clone().unwrap_or_default();
    let action = format!("{}/keywords", client_path(&client.id));
    let (draft, error) = match form {
        DetailForm::Keyword { form, error } => (form.clone(), Some(error.as_str())),
        _ => (KeywordForm::default(), None),
    };
    let category = draft.category.clone().unwrap_or_default();
    let priority = draft.priority.clone().unwrap_or_default();

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Keywords" }
            if keywords.is_empty() {
                p { class: "text-sm text-gray-500 mb-4", "No keywords yet" }
            } else {
                ul { class: "divide-y divide-gray-100 mb-4",
                    for kw in keywords.iter() {
                        li { class: "flex items-center justify-between py-2 text-sm",
                            span { class: "text-gray-900", "{kw.keyword}" }
                            div { class: "flex items-center gap-3 text-xs text-gray-500",
                                if let Some(category) = &kw.category {
                                    span { "{category}" }
                                }
                                span { "priority {kw.priority}" }
                                if !kw.is_active {
                                    span { class: "text-amber-600", "inactive" }
                                }
                            }
                        }
                    }
                }
            }
            form { method: "POST", action: "{action}", class: "space-y-3",
                { inline_error(error) }
                div { class: "grid grid-cols-3 gap-3",
                    input { r#type: "text", name: "keyword", value: "{draft.keyword}", placeholder: "Keyword", class: INPUT_CLASS }
                    input { r#type: "text", name: "category", value: "{category}", placeholder: "Category", class: INPUT_CLASS }
                    input { r#type: "number", name: "priority", value: "{priority}", placeholder: "Priority", class: INPUT_CLASS }
                }
                button { r#type: "submit", class: PRIMARY_BUTTON, "Add Keyword" }
            }
        }
    }
}

fn platforms_panel(client: &ClientFull, form: &DetailForm) -> Element {
    let accounts = client.platform_accounts.clone().unwrap_or_default();
    let action = format!("{}/platforms", client_path(&client.id));
    let (draft, error) = match form {
        DetailForm::Platform { form, error } => (form.clone(), Some(error.as_str())),
        _ => (PlatformForm::default(), None),
    };
    let options: Vec<(&str, &str, bool)> = Platform::ALL
        .iter()
        .map(|p| (p.as_str(), p.label(), p.as_str() == draft.platform))
        .collect();
    let account_id = draft.account_id.clone().unwrap_or_default();

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Platforms" }
            if accounts.is_empty() {
                p { class: "text-sm text-gray-500 mb-4", "No platforms connected" }
            } else {
                ul { class: "divide-y divide-gray-100 mb-4",
                    for account in accounts.iter() {
                        li { class: "flex items-center justify-between py-2 text-sm",
                            span { class: "text-gray-900", "{account.platform}" }
                            span { class: "text-gray-500", "{account.account_name}" }
                        }
                    }
                }
            }
            form { method: "POST", action: "{action}", class: "space-y-3",
                { inline_error(error) }
                div { class: "grid grid-cols-2 gap-3",
                    div {
                        label { class: LABEL_CLASS, "Platform" }
                        select { name: "platform", class: INPUT_CLASS,
                            for (value, label, selected) in options.iter() {
                                option { value: "{value}", selected: *selected, "{label}" }
                            }
                        }
                    }
                    div {
                        label { class: LABEL_CLASS, "Account Name" }
                        input { r#type: "text", name: "account_name", value: "{draft.account_name}", class: INPUT_CLASS }
                    }
                    div {
                        label { class: LABEL_CLASS, "Access Token" }
                        input { r#type: "password", name: "access_token", class: INPUT_CLASS }
                    }
                    div {
                        label { class: LABEL_CLASS, "Account ID" }
                        input { r#type: "text", name: "account_id", value: "{account_id}", class: INPUT_CLASS }
                    }
                }
                button { r#type: "submit", class: PRIMARY_BUTTON, "Connect Platform" }
            }
        }
    }
}

fn client_body(client: &ClientFull, data: &ClientDetailData) -> Element {
    let industry = industry_label(&client.industry);
    let added = date(client.created_at, data.tz);
    let status_action = format!("{}/status", client_path(&client.id));
    let (next_status, toggle_label) = if client.status == "active" {
        ("paused", "Pause Client")
    } else {
        ("active", "Activate Client")
    };
    let status_error = match &data.form {
        DetailForm::Status { error } => Some(error.as_str()),
        _ => None,
    };
    let stats = data.dashboard.as_ref().map(|d| stats_panel(d, data.now));

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6 mb-8",
            div { class: "flex items-start justify-between",
                div {
                    div { class: "flex items-center gap-3",
                        h2 { class: "text-2xl font-semibold text-gray-900", "{client.business_name}" }
                        { status_badge(&client.status) }
                    }
                    p { class: "text-sm text-gray-500 mt-1", "{industry} | {client.tier} | {client.primary_audience}" }
                    p { class: "text-sm text-gray-500", "{client.contact_name} {client.contact_email}" }
                    p { class: "text-xs text-gray-400 mt-1", "Added {added}" }
                }
                form { method: "POST", action: "{status_action}", class: "space-y-2",
                    input { r#type: "hidden", name: "status", value: "{next_status}" }
                    button { r#type: "submit", class: SECONDARY_BUTTON, "{toggle_label}" }
                }
            }
            if status_error.is_some() {
                div { class: "mt-4", { inline_error(status_error) } }
            }
        }
        if let Some(stats) = stats {
            {stats}
        }
        div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
            { keywords_panel(client, &data.form) }
            { platforms_panel(client, &data.form) }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn ClientDetail(data: ClientDetailData) -> Element {
    let page_href = client_path(&data.id);
    let (title, body) = match &data.client {
        Ok(client) => (client.business_name.clone(), client_body(client, &data)),
        Err(message) => (
            "Client".to_string(),
            error_banner("Failed to load client", message, &page_href),
        ),
    };

    rsx! {
        Layout { title: title.clone(), path: page_href.clone(),
            { page_header(&title, "Client details", Some(&page_href)) }
            div { class: "p-8",
                a { href: "/clients", class: "inline-block mb-6 text-sm text-gray-500 hover:text-gray-900", "Back to clients" }
                {body}
            }
        }
    }
}

pub fn render_client_detail(data: ClientDetailData) -> String {
    let mut dom = VirtualDom::new_with_props(ClientDetail, ClientDetailProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
