use aloha_common::format::{percent, relative_time};
use aloha_common::forms::ScheduleForm;
use aloha_common::ReviewItem;
use chrono::{DateTime, Utc};
use content_api_client::Platform;
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{
    empty_state, error_banner, inline_error, modal, page_header, INPUT_CLASS, LABEL_CLASS,
    PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::templates::{href, render_to_html};

/// Selection and locally rejected items, carried in the review page URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewState {
    pub selected: String,
    pub dismissed: Vec<String>,
}

impl ReviewState {
    /// `dismissed` is a comma-separated id list.
    pub fn from_query(selected: Option<&str>, dismissed: Option<&str>) -> Self {
        Self {
            selected: selected.unwrap_or_default().to_string(),
            dismissed: dismissed
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn dismissed_param(&self) -> String {
        self.dismissed.join(",")
    }

    pub fn href(&self, extra: &[(&str, &str)]) -> String {
        let dismissed = self.dismissed_param();
        let mut pairs = vec![("selected", self.selected.as_str()), ("dismissed", dismissed.as_str())];
        pairs.extend_from_slice(extra);
        href("/review", &pairs)
    }

    /// State after rejecting `id`: hidden from the queue and deselected.
    pub fn reject(&self, id: &str) -> Self {
        let mut dismissed = self.dismissed.clone();
        if !dismissed.iter().any(|d| d == id) {
            dismissed.push(id.to_string());
        }
        Self {
            selected: if self.selected == id { String::new() } else { self.selected.clone() },
            dismissed,
        }
    }

    pub fn is_dismissed(&self, id: &str) -> bool {
        self.dismissed.iter().any(|d| d == id)
    }
}

#[derive(Clone, PartialEq)]
pub enum ReviewModal {
    Closed,
    Schedule { item: ReviewItem, form: ScheduleForm, error: Option<String> },
}

#[derive(Clone, PartialEq)]
pub struct ReviewData {
    pub items: Result<Vec<ReviewItem>, String>,
    pub state: ReviewState,
    pub modal: ReviewModal,
    /// Failed approve, shown above the queue.
    pub action_error: Option<String>,
    pub now: DateTime<Utc>,
}

fn approve_form(item: &ReviewItem, state: &ReviewState, label: &str, class: &str) -> Element {
    let action = format!("/review/{}/approve", item.id);
    let dismissed = state.dismissed_param();
    rsx! {
        form { method: "POST", action: "{action}",
            input { r#type: "hidden", name: "dismissed", value: "{dismissed}" }
            button { r#type: "submit", class: "{class}", title: "Approve", "{label}" }
        }
    }
}

fn review_card(item: &ReviewItem, state: &ReviewState, now: DateTime<Utc>) -> Element {
    let select_href = ReviewState { selected: item.id.clone(), ..state.clone() }.href(&[]);
    let reject_href = state.reject(&item.id).href(&[]);
    let ago = relative_time(item.created_at, now);
    let border = if state.selected == item.id {
        "border-emerald-500 ring-2 ring-emerald-500/20"
    } else {
        "border-gray-200 hover:border-gray-300"
    };
    let status_class = if item.status == "pending" {
        "bg-amber-100 text-amber-700"
    } else {
        "bg-gray-100 text-gray-600"
    };
    let score = item.quality_score.map(|s| format!("Score: {}", percent(Some(s))));
    let approve = approve_form(
        item,
        state,
        "Approve",
        "px-3 py-1.5 text-sm text-green-700 bg-green-50 rounded-lg hover:bg-green-100",
    );

    rsx! {
        div { class: "bg-white rounded-xl border p-4 {border}",
            div { class: "flex items-start gap-4",
                a { href: "{select_href}", class: "w-24 h-16 bg-gray-100 rounded-lg flex-shrink-0 overflow-hidden",
                    if let Some(thumb) = &item.thumbnail_url {
                        img { src: "{thumb}", alt: "", class: "w-full h-full object-cover" }
                    }
                }
                div { class: "flex-1 min-w-0",
                    a { href: "{select_href}", class: "font-medium text-gray-900 truncate block", "{item.keyword}" }
                    p { class: "text-sm text-gray-500", "{item.client_name}" }
                    div { class: "flex items-center gap-2 mt-2 text-xs",
                        span { class: "text-gray-400", "{ago}" }
                        span { class: "px-2 py-0.5 rounded-full {status_class}", "{item.status}" }
                        if let Some(score) = score {
                            span { class: "text-gray-500", "{score}" }
                        }
                    }
                }
                div { class: "flex items-center gap-2",
                    {approve}
                    a { href: "{reject_href}", title: "Reject",
                        class: "px-3 py-1.5 text-sm text-red-700 bg-red-50 rounded-lg hover:bg-red-100",
                        "Reject"
                    }
                }
            }
        }
    }
}

fn preview_panel(selected: Option<&ReviewItem>, state: &ReviewState) -> Element {
    let Some(item) = selected else {
        return rsx! {
            div { class: "bg-white rounded-xl border border-gray-200 p-6 text-center",
                p { class: "text-gray-500", "Select an item to preview" }
            }
        };
    };
    let score = item.quality_score.map(|s| format!("Quality Score: {}", percent(Some(s))));
    let schedule_href = state.href(&[("schedule", &item.id)]);
    let preview_href = href("/content", &[("preview", &item.id)]);
    let approve = approve_form(item, state, "Approve", PRIMARY_BUTTON);

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6 sticky top-6",
            div { class: "aspect-video bg-gray-100 rounded-lg mb-4 overflow-hidden",
                if let Some(thumb) = &item.thumbnail_url {
                    img { src: "{thumb}", alt: "", class: "w-full h-full object-cover" }
                }
            }
            h3 { class: "font-semibold text-gray-900 mb-1", "{item.keyword}" }
            p { class: "text-sm text-gray-500 mb-2", "Client: {item.client_name}" }
            if let Some(score) = score {
                p { class: "text-sm text-gray-600 mb-4", "{score}" }
            }
            a { href: "{preview_href}", class: "block w-full text-center px-4 py-2 mb-4 border border-gray-200 rounded-lg text-sm hover:bg-gray-50",
                "Preview Video"
            }
            div { class: "flex items-center gap-3",
                {approve}
                a { href: "{schedule_href}", class: SECONDARY_BUTTON, "Schedule" }
            }
        }
    }
}

fn schedule_form(item: &ReviewItem, form: &ScheduleForm, state: &ReviewState, error: Option<&str>, close_href: &str) -> Element {
    let action = format!("/review/{}/schedule", item.id);
    let dismissed = state.dismissed_param();
    let platforms: Vec<(&str, &str, bool)> = Platform::ALL
        .iter()
        .map(|p| (p.as_str(), p.label(), form.is_checked(*p)))
        .collect();

    rsx! {
        form { method: "POST", action: "{action}", class: "space-y-4",
            input { r#type: "hidden", name: "dismissed", value: "{dismissed}" }
            { inline_error(error) }
            div { class: "p-3 bg-gray-50 rounded-lg",
                p { class: "font-medium text-gray-900", "{item.keyword}" }
                p { class: "text-sm text-gray-500", "{item.client_name}" }
            }
            div {
                label { class: LABEL_CLASS, "Platforms" }
                div { class: "flex flex-wrap gap-3",
                    for (value, label, checked) in platforms.iter() {
                        label { class: "flex items-center gap-2 px-3 py-2 bg-gray-100 rounded-lg text-sm",
                            input { r#type: "checkbox", name: "{value}", checked: *checked }
                            "{label}"
                        }
                    }
                }
            }
            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: LABEL_CLASS, "Date" }
                    input { r#type: "date", name: "date", required: true, value: "{form.date}", class: INPUT_CLASS }
                }
                div {
                    label { class: LABEL_CLASS, "Time" }
                    input { r#type: "time", name: "time", value: "{form.time}", class: INPUT_CLASS }
                }
            }
            div { class: "flex items-center justify-end gap-3 pt-4 border-t border-gray-200",
                a { href: "{close_href}", class: SECONDARY_BUTTON, "Cancel" }
                button { r#type: "submit", class: PRIMARY_BUTTON, "Schedule" }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Review(data: ReviewData) -> Element {
    let page_href = data.state.href(&[]);
    let visible: Vec<&ReviewItem> = match &data.items {
        Ok(items) => items.iter().filter(|i| !data.state.is_dismissed(&i.id)).collect(),
        Err(_) => Vec::new(),
    };
    let subtitle = format!("{} items pending review", visible.len());

    let body = match &data.items {
        Err(message) => error_banner("Failed to load review queue", message, &page_href),
        Ok(_) if visible.is_empty() => empty_state(
            "All caught up!",
            "No content waiting for review. New content will appear here when ready.",
        ),
        Ok(_) => {
            let selected = visible.iter().copied().find(|i| i.id == data.state.selected);
            let cards: Vec<Element> = visible
                .iter()
                .map(|item| review_card(item, &data.state, data.now))
                .collect();
            let panel = preview_panel(selected, &data.state);
            rsx! {
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                    div { class: "lg:col-span-2 space-y-4",
                        for card in cards {
                            {card}
                        }
                    }
                    div { {panel} }
                }
            }
        }
    };

    let overlay = match &data.modal {
        ReviewModal::Closed => None,
        ReviewModal::Schedule { item, form, error } => Some(modal(
            "Schedule Content",
            &page_href,
            schedule_form(item, form, &data.state, error.as_deref(), &page_href),
        )),
    };

    rsx! {
        Layout { title: "Review Queue".to_string(), path: "/review".to_string(),
            { page_header("Review Queue", &subtitle, Some(&page_href)) }
            div { class: "p-8",
                if let Some(err) = &data.action_error {
                    div { class: "mb-6", { inline_error(Some(err)) } }
                }
                {body}
            }
            if let Some(overlay) = overlay {
                {overlay}
            }
        }
    }
}

pub fn render_review(data: ReviewData) -> String {
    let mut dom = VirtualDom::new_with_props(Review, ReviewProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn item(id: &str, keyword: &str) -> ReviewItem {
        ReviewItem {
            id: id.to_string(),
            script_id: "s1".to_string(),
            client_id: "c1".to_string(),
            client_name: "Poke Shack".to_string(),
            keyword: keyword.to_string(),
            thumbnail_url: None,
            status: "completed".to_string(),
            quality_score: Some(0.8),
            created_at: Utc.with_ymd_and_hms(2026, 10, 16, 9, 0, 0).unwrap(),
        }
    }

    fn data(items: Vec<ReviewItem>, state: ReviewState) -> ReviewData {
        ReviewData {
            items: Ok(items),
            state,
            modal: ReviewModal::Closed,
            action_error: None,
            now: Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn empty_queue_is_all_caught_up() {
        let html = render_review(data(vec![], ReviewState::default()));
        assert!(html.contains("All caught up!"));
        assert!(html.contains("0 items pending review"));
    }

    #[test]
    fn dismissed_items_are_hidden_and_counted_out() {
        let state = ReviewState::from_query(None, Some("r2"));
        let html = render_review(data(vec![item("r1", "poke bowls"), item("r2", "shave ice")], state));
        assert!(html.contains("1 items pending review"));
        assert!(html.contains("poke bowls"));
        assert!(!html.contains("shave ice"));
    }

    #[test]
    fn selecting_shows_preview_actions() {
        let state = ReviewState::from_query(Some("r1"), None);
        let html = render_review(data(vec![item("r1", "poke bowls")], state));
        assert!(html.contains("Client: Poke Shack"));
        assert!(html.contains("Quality Score: 80%"));
        assert!(html.contains("schedule=r1"));
        assert!(html.contains("/review/r1/approve"));
    }

    #[test]
    fn reject_deselects_and_dismisses() {
        let state = ReviewState::from_query(Some("r1"), Some("r0"));
        let next = state.reject("r1");
        assert_eq!(next.selected, "");
        assert_eq!(next.dismissed, vec!["r0".to_string(), "r1".to_string()]);
        assert_eq!(next.href(&[]), "/review?dismissed=r0%2Cr1");
        assert_eq!(next.reject("r1"), next);
    }

    #[test]
    fn schedule_modal_prechecks_defaults() {
        let mut d = data(vec![item("r1", "poke bowls")], ReviewState::default());
        d.modal = ReviewModal::Schedule {
            item: item("r1", "poke bowls"),
            form: ScheduleForm::defaults(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()),
            error: Some("Select at least one platform".to_string()),
        };
        let html = render_review(d);
        assert!(html.contains("Schedule Content"));
        assert!(html.contains("2026-10-17"));
        assert!(html.contains("Select at least one platform"));
        assert!(html.contains("/review/r1/schedule"));
    }

    #[test]
    fn queue_failure_shows_retry() {
        let mut d = data(vec![], ReviewState::default());
        d.items = Err("HTTP 503".to_string());
        let html = render_review(d);
        assert!(html.contains("Failed to load review queue"));
        assert!(html.contains("Retry"));
    }
}
