use aloha_common::format::{capitalize, date, percent, seconds, video_label};
use aloha_common::forms::{GenerateForm, CONTENT_TYPES, RENDER_STATUSES};
use aloha_common::to_simple_script;
use chrono::FixedOffset;
use content_api_client::{ClientFull, RenderFull, ScriptAudience, ScriptFull};
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{
    empty_state, error_banner, inline_error, modal, page_header, status_badge, INPUT_CLASS,
    LABEL_CLASS, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::templates::{href, render_to_html};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentTab {
    #[default]
    Videos,
    Scripts,
}

impl ContentTab {
    /// Unknown values fall back to the videos tab.
    pub fn parse(s: &str) -> Self {
        match s {
            "scripts" => ContentTab::Scripts,
            _ => ContentTab::Videos,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ContentTab::Videos => "videos",
            ContentTab::Scripts => "scripts",
        }
    }
}

/// Tab and list filters carried in the content page URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContentFilters {
    pub tab: ContentTab,
    pub client_id: String,
    pub status: String,
}

impl ContentFilters {
    pub fn href(&self, extra: &[(&str, &str)]) -> String {
        let mut pairs = vec![
            ("tab", self.tab.key()),
            ("client_id", self.client_id.as_str()),
            ("status", self.status.as_str()),
        ];
        pairs.extend_from_slice(extra);
        href("/content", &pairs)
    }

    fn hidden_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("tab", self.tab.key().to_string()),
            ("client_id", self.client_id.clone()),
            ("status", self.status.clone()),
        ]
    }
}

#[derive(Clone, PartialEq)]
pub enum ContentModal {
    Closed,
    Generate { form: GenerateForm, error: Option<String> },
    Preview { render: Result<RenderFull, String>, notice: Option<String>, error: Option<String> },
}

#[derive(Clone, PartialEq)]
pub struct ContentData {
    pub filters: ContentFilters,
    pub clients: Vec<ClientFull>,
    pub renders: Result<Vec<RenderFull>, String>,
    pub scripts: Result<Vec<ScriptFull>, String>,
    pub modal: ContentModal,
    pub tz: FixedOffset,
}

fn tab_link(filters: &ContentFilters, tab: ContentTab, label: &str) -> Element {
    let target = ContentFilters { tab, ..filters.clone() }.href(&[]);
    let class = if filters.tab == tab {
        "px-4 py-2 text-sm font-medium rounded-lg bg-white text-gray-900 shadow-sm"
    } else {
        "px-4 py-2 text-sm font-medium rounded-lg text-gray-600 hover:text-gray-900"
    };
    rsx! {
        a { href: "{target}", class: "{class}", "{label}" }
    }
}

fn filter_bar(filters: &ContentFilters, clients: &[ClientFull]) -> Element {
    let client_options: Vec<(String, String, bool)> = clients
        .iter()
        .map(|c| (c.id.clone(), c.business_name.clone(), c.id == filters.client_id))
        .collect();
    let status_options: Vec<(&str, &str, bool)> = RENDER_STATUSES
        .iter()
        .map(|(value, label)| (*value, *label, *value == filters.status))
        .collect();
    let tab = filters.tab.key();

    rsx! {
        form { method: "GET", action: "/content", class: "flex items-center gap-3",
            input { r#type: "hidden", name: "tab", value: "{tab}" }
            select { name: "client_id", class: "px-3 py-2 border border-gray-200 rounded-lg text-sm bg-white",
                option { value: "", "All Clients" }
                for (id, name, selected) in client_options.iter() {
                    option { value: "{id}", selected: *selected, "{name}" }
                }
            }
            select { name: "status", class: "px-3 py-2 border border-gray-200 rounded-lg text-sm bg-white",
                option { value: "", "All Statuses" }
                for (value, label, selected) in status_options.iter() {
                    option { value: "{value}", selected: *selected, "{label}" }
                }
            }
            button { r#type: "submit", class: SECONDARY_BUTTON, "Filter" }
        }
    }
}

fn renders_table(renders: &[RenderFull], filters: &ContentFilters, tz: FixedOffset) -> Element {
    let rows: Vec<_> = renders
        .iter()
        .map(|r| {
            let title = video_label(r.script.as_ref().map(|s| s.keyword.as_str()), &r.id);
            let client = r.client.as_ref().map(|c| c.business_name.clone());
            let view = filters.href(&[("preview", &r.id)]);
            (r, title, client, view, seconds(r.duration_seconds), percent(r.quality_score), date(r.created_at, tz))
        })
        .collect();

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 overflow-hidden",
            table { class: "w-full",
                thead { class: "bg-gray-50 border-b border-gray-200",
                    tr {
                        for heading in ["Video", "Status", "Duration", "Quality", "Created", "Actions"] {
                            th { class: "text-left px-6 py-3 text-xs font-medium text-gray-500 uppercase tracking-wider", "{heading}" }
                        }
                    }
                }
                tbody { class: "divide-y divide-gray-200",
                    for (render, title, client, view, duration, quality, created) in rows.iter() {
                        tr { class: "hover:bg-gray-50",
                            td { class: "px-6 py-4",
                                div { class: "flex items-center gap-3",
                                    div { class: "w-16 h-10 bg-gray-200 rounded flex items-center justify-center",
                                        if let Some(thumb) = &render.thumbnail_url {
                                            img { src: "{thumb}", alt: "", class: "w-full h-full object-cover rounded" }
                                        }
                                    }
                                    div {
                                        span { class: "font-medium text-gray-900", "{title}" }
                                        if let Some(client) = client {
                                            p { class: "text-xs text-gray-500", "{client}" }
                                        }
                                    }
                                }
                            }
                            td { class: "px-6 py-4", { status_badge(&render.status) } }
                            td { class: "px-6 py-4 text-sm text-gray-500", "{duration}" }
                            td { class: "px-6 py-4 text-sm text-gray-500", "{quality}" }
                            td { class: "px-6 py-4 text-sm text-gray-500", "{created}" }
                            td { class: "px-6 py-4",
                                div { class: "flex items-center gap-2",
                                    a { href: "{view}", class: "text-emerald-600 hover:text-emerald-700 text-sm font-medium", "View" }
                                    if let Some(url) = &render.video_url {
                                        a { href: "{url}", target: "_blank", rel: "noopener noreferrer",
                                            class: "text-gray-400 hover:text-gray-600 text-sm", "Open"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn script_cards(scripts: &[ScriptFull], tz: FixedOffset) -> Element {
    let cards: Vec<_> = scripts
        .iter()
        .map(|s| {
            let style = s
                .voice_style
                .clone()
                .or_else(|| s.content_type.clone())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "Standard".to_string());
            let client = s.client.as_ref().map(|c| c.business_name.clone());
            let voiceover = s.voiceover.as_ref().map(|v| {
                let class = if v.status == "completed" {
                    "px-2 py-0.5 rounded bg-green-100 text-green-700"
                } else {
                    "px-2 py-0.5 rounded bg-amber-100 text-amber-700"
                };
                (class, format!("Voiceover: {}", v.status))
            });
            let detail = format!("/content/scripts/{}", s.id);
            (s, style, client, voiceover, detail, date(s.created_at, tz))
        })
        .collect();

    rsx! {
        div { class: "grid gap-4",
            for (script, style, client, voiceover, detail, created) in cards.iter() {
                div { class: "bg-white rounded-xl border border-gray-200 p-6",
                    div { class: "flex items-start justify-between mb-3",
                        div {
                            a { href: "{detail}", class: "font-semibold text-gray-900 hover:text-emerald-700", "{script.keyword}" }
                            div { class: "flex items-center gap-3 mt-1",
                                if let Some(client) = client {
                                    span { class: "text-xs text-gray-500", "{client}" }
                                }
                                span { class: "text-xs text-gray-500", "{style}" }
                                { status_badge(&script.status) }
                            }
                        }
                        span { class: "text-xs text-gray-400", "{created}" }
                    }
                    p { class: "text-sm text-gray-600 line-clamp-2", "{script.hook_text}" }
                    div { class: "flex items-center gap-4 mt-3 text-xs text-gray-500",
                        span { "{script.word_count} words" }
                        span { "~{script.estimated_duration}s" }
                        if let Some((class, label)) = voiceover {
                            span { class: "{class}", "{label}" }
                        }
                    }
                }
            }
        }
    }
}

fn generate_form(form: &GenerateForm, error: Option<&str>, clients: &[ClientFull], close_href: &str) -> Element {
    let client_options: Vec<(String, String, bool)> = clients
        .iter()
        .map(|c| (c.id.clone(), c.business_name.clone(), c.id == form.client_id))
        .collect();
    let type_options: Vec<(&str, &str, bool)> = CONTENT_TYPES
        .iter()
        .map(|(value, label)| (*value, *label, *value == form.content_type))
        .collect();
    let audience_options: Vec<(&str, &str, bool)> = ScriptAudience::ALL
        .iter()
        .map(|a| (a.as_str(), a.label(), a.as_str() == form.audience_type))
        .collect();
    let angle = form.angle.clone().unwrap_or_default();
    let queue_voiceover = form.queue_voiceover.is_some();

    rsx! {
        form { method: "POST", action: "/content/generate", class: "space-y-4",
            { inline_error(error) }
            div {
                label { class: LABEL_CLASS, "Client *" }
                select { name: "client_id", required: true, class: INPUT_CLASS,
                    if client_options.is_empty() {
                        option { value: "", "No clients available" }
                    }
                    for (id, name, selected) in client_options.iter() {
                        option { value: "{id}", selected: *selected, "{name}" }
                    }
                }
            }
            div {
                label { class: LABEL_CLASS, "Keyword / Topic *" }
                input { r#type: "text", name: "keyword", required: true, value: "{form.keyword}",
                    placeholder: "e.g., lomi lomi massage, happy hour specials", class: INPUT_CLASS }
            }
            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: LABEL_CLASS, "Content Type" }
                    select { name: "content_type", class: INPUT_CLASS,
                        for (value, label, selected) in type_options.iter() {
                            option { value: "{value}", selected: *selected, "{label}" }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Target Audience" }
                    select { name: "audience_type", class: INPUT_CLASS,
                        for (value, label, selected) in audience_options.iter() {
                            option { value: "{value}", selected: *selected, "{label}" }
                        }
                    }
                }
            }
            div {
                label { class: LABEL_CLASS, "Angle / Hook (optional)" }
                input { r#type: "text", name: "angle", value: "{angle}",
                    placeholder: "e.g., seasonal special, customer story", class: INPUT_CLASS }
            }
            div { class: "flex items-center gap-2",
                input { r#type: "checkbox", id: "queue_voiceover", name: "queue_voiceover", checked: queue_voiceover,
                    class: "rounded border-gray-300 text-emerald-600 focus:ring-emerald-500" }
                label { r#for: "queue_voiceover", class: "text-sm text-gray-700", "Automatically generate voiceover" }
            }
            div { class: "flex items-center justify-end gap-3 pt-4 border-t border-gray-200",
                a { href: "{close_href}", class: SECONDARY_BUTTON, "Cancel" }
                button { r#type: "submit", class: PRIMARY_BUTTON, "Generate Script" }
            }
        }
    }
}

fn action_form(action: String, label: &str, hidden: &[(&'static str, String)], class: &str) -> Element {
    rsx! {
        form { method: "POST", action: "{action}",
            for (name, value) in hidden.iter() {
                input { r#type: "hidden", name: "{name}", value: "{value}" }
            }
            button { r#type: "submit", class: "{class}", "{label}" }
        }
    }
}

fn video_preview(
    render: &RenderFull,
    filters: &ContentFilters,
    notice: Option<&str>,
    error: Option<&str>,
    tz: FixedOffset,
) -> Element {
    let client = render.client.as_ref().map(|c| c.business_name.clone());
    let status = capitalize(&render.status);
    let duration = seconds(render.duration_seconds);
    let quality = percent(render.quality_score);
    let created = date(render.created_at, tz);
    let hidden = filters.hidden_fields();
    let score = action_form(
        format!("/content/renders/{}/score", render.id),
        "Score Quality",
        &hidden,
        SECONDARY_BUTTON,
    );
    let publish = action_form(
        format!("/content/renders/{}/publish", render.id),
        "Publish",
        &hidden,
        PRIMARY_BUTTON,
    );

    rsx! {
        div { class: "space-y-4",
            if let Some(client) = client {
                p { class: "text-sm text-gray-500", "{client}" }
            }
            { inline_error(error) }
            if let Some(notice) = notice {
                div { class: "p-3 bg-emerald-50 border border-emerald-200 rounded-lg text-emerald-700 text-sm", "{notice}" }
            }
            if let Some(url) = &render.video_url {
                video { src: "{url}", controls: true, class: "w-full rounded-lg bg-black" }
            } else {
                div { class: "aspect-video bg-gray-100 rounded-lg flex flex-col items-center justify-center text-gray-400",
                    p { "Video not available yet" }
                    p { class: "text-sm", "Status: {render.status}" }
                }
            }
            div { class: "grid grid-cols-4 gap-4",
                div { class: "bg-gray-50 rounded-lg p-3",
                    p { class: "text-xs text-gray-500", "Status" }
                    p { class: "font-medium text-gray-900", "{status}" }
                }
                div { class: "bg-gray-50 rounded-lg p-3",
                    p { class: "text-xs text-gray-500", "Duration" }
                    p { class: "font-medium text-gray-900", "{duration}" }
                }
                div { class: "bg-gray-50 rounded-lg p-3",
                    p { class: "text-xs text-gray-500", "Quality Score" }
                    p { class: "font-medium text-gray-900", "{quality}" }
                }
                div { class: "bg-gray-50 rounded-lg p-3",
                    p { class: "text-xs text-gray-500", "Created" }
                    p { class: "font-medium text-gray-900", "{created}" }
                }
            }
            div { class: "flex items-center justify-end gap-3 pt-4 border-t border-gray-200",
                if let Some(url) = &render.video_url {
                    a { href: "{url}", target: "_blank", rel: "noopener noreferrer", class: SECONDARY_BUTTON, "Open in New Tab" }
                }
                {score}
                {publish}
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Content(data: ContentData) -> Element {
    let filters = &data.filters;
    let page_href = filters.href(&[]);
    let generate_href = filters.href(&[("modal", "generate")]);

    let body = match filters.tab {
        ContentTab::Videos => match &data.renders {
            Err(message) => error_banner("Failed to load videos", message, &page_href),
            Ok(renders) if renders.is_empty() => empty_state(
                "No videos yet",
                "Generate scripts and render videos to see them here",
            ),
            Ok(renders) => renders_table(renders, filters, data.tz),
        },
        ContentTab::Scripts => match &data.scripts {
            Err(message) => error_banner("Failed to load scripts", message, &page_href),
            Ok(scripts) if scripts.is_empty() => {
                empty_state("No scripts yet", "Generate your first AI script to get started")
            }
            Ok(scripts) => script_cards(scripts, data.tz),
        },
    };

    let overlay = match &data.modal {
        ContentModal::Closed => None,
        ContentModal::Generate { form, error } => Some(modal(
            "Generate AI Script",
            &page_href,
            generate_form(form, error.as_deref(), &data.clients, &page_href),
        )),
        ContentModal::Preview { render: Ok(render), notice, error } => {
            let title = video_label(render.script.as_ref().map(|s| s.keyword.as_str()), &render.id);
            Some(modal(
                &title,
                &page_href,
                video_preview(render, filters, notice.as_deref(), error.as_deref(), data.tz),
            ))
        }
        ContentModal::Preview { render: Err(message), .. } => Some(modal(
            "Video",
            &page_href,
            error_banner("Failed to load video", message, &page_href),
        )),
    };

    rsx! {
        Layout { title: "Content".to_string(), path: "/content".to_string(),
            { page_header("Content", "Manage scripts and videos", Some(&page_href)) }
            div { class: "p-8",
                div { class: "flex items-center justify-between mb-6",
                    div { class: "flex items-center gap-1 p-1 bg-gray-100 rounded-lg",
                        { tab_link(filters, ContentTab::Videos, "Videos") }
                        { tab_link(filters, ContentTab::Scripts, "Scripts") }
                    }
                    div { class: "flex items-center gap-3",
                        { filter_bar(filters, &data.clients) }
                        a { href: "{generate_href}", class: PRIMARY_BUTTON, "Generate Script" }
                    }
                }
                {body}
            }
            if let Some(overlay) = overlay {
                {overlay}
            }
        }
    }
}

pub fn render_content(data: ContentData) -> String {
    let mut dom = VirtualDom::new_with_props(Content, ContentProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

// --- Script detail ---

#[derive(Clone, PartialEq)]
pub struct ScriptDetailData {
    pub id: String,
    pub script: Result<ScriptFull, String>,
    pub tz: FixedOffset,
}

fn script_section(label: &str, text: &str) -> Element {
    rsx! {
        div {
            h3 { class: "text-xs font-medium text-gray-500 uppercase tracking-wider mb-1", "{label}" }
            p { class: "text-gray-900 whitespace-pre-line", "{text}" }
        }
    }
}

fn script_body(full: &ScriptFull, tz: FixedOffset) -> Element {
    let simple = to_simple_script(full);
    let client = full.client.as_ref().map(|c| c.business_name.clone());
    let created = date(full.created_at, tz);
    let audience = full.target_audience.clone().unwrap_or_default();
    let renders: Vec<_> = full
        .renders
        .iter()
        .flatten()
        .map(|r| {
            let view = href("/content", &[("preview", &r.id)]);
            let label = video_label(Some(full.keyword.as_str()), &r.id);
            (r, view, label, percent(r.quality_score))
        })
        .collect();

    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
            div { class: "lg:col-span-2 bg-white rounded-xl border border-gray-200 p-6 space-y-6",
                { script_section("Hook", &simple.hook) }
                { script_section("Body", &simple.body) }
                { script_section("Call to Action", &simple.cta) }
                if !full.full_script.is_empty() {
                    { script_section("Full Script", &full.full_script) }
                }
            }
            div { class: "space-y-6",
                div { class: "bg-white rounded-xl border border-gray-200 p-6 space-y-3 text-sm",
                    div { class: "flex items-center justify-between",
                        span { class: "text-gray-500", "Status" }
                        { status_badge(&simple.status) }
                    }
                    if let Some(client) = client {
                        div { class: "flex items-center justify-between",
                            span { class: "text-gray-500", "Client" }
                            span { class: "text-gray-900", "{client}" }
                        }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-gray-500", "Voice" }
                        span { class: "text-gray-900", "{simple.voice_style}" }
                    }
                    if !audience.is_empty() {
                        div { class: "flex items-center justify-between",
                            span { class: "text-gray-500", "Audience" }
                            span { class: "text-gray-900", "{audience}" }
                        }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-gray-500", "Length" }
                        span { class: "text-gray-900", "{full.word_count} words, ~{full.estimated_duration}s" }
                    }
                    div { class: "flex items-center justify-between",
                        span { class: "text-gray-500", "Created" }
                        span { class: "text-gray-900", "{created}" }
                    }
                    if let Some(voiceover) = &full.voiceover {
                        div { class: "flex items-center justify-between",
                            span { class: "text-gray-500", "Voiceover" }
                            { status_badge(&voiceover.status) }
                        }
                    }
                }
                div { class: "bg-white rounded-xl border border-gray-200 p-6",
                    h2 { class: "text-lg font-semibold text-gray-900 mb-4", "Videos" }
                    if renders.is_empty() {
                        p { class: "text-sm text-gray-500", "No videos rendered from this script" }
                    }
                    for (render, view, label, quality) in renders.iter() {
                        div { class: "flex items-center justify-between py-2",
                            a { href: "{view}", class: "text-sm text-emerald-600 hover:text-emerald-700", "{label}" }
                            div { class: "flex items-center gap-2",
                                span { class: "text-xs text-gray-500", "{quality}" }
                                { status_badge(&render.status) }
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
fn ScriptDetail(data: ScriptDetailData) -> Element {
    let page_href = format!("/content/scripts/{}", data.id);
    let (title, body) = match &data.script {
        Ok(script) => (script.keyword.clone(), script_body(script, data.tz)),
        Err(message) => (
            "Script".to_string(),
            error_banner("Failed to load script", message, &page_href),
        ),
    };

    rsx! {
        Layout { title: title.clone(), path: page_href.clone(),
            { page_header(&title, "Script details", Some(&page_href)) }
            div { class: "p-8",
                a { href: "/content?tab=scripts", class: "inline-block mb-6 text-sm text-gray-500 hover:text-gray-900", "Back to scripts" }
                {body}
            }
        }
    }
}

pub fn render_script_detail(data: ScriptDetailData) -> String {
    let mut dom = VirtualDom::new_with_props(ScriptDetail, ScriptDetailProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
