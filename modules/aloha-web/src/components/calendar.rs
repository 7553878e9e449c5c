use aloha_common::calendar::{cell_items, items_for_day, DayCell, Month};
use aloha_common::format::{long_day, time};
use aloha_common::{CalendarItem, ScheduledItem};
use chrono::{FixedOffset, NaiveDate};
use content_api_client::ClientFull;
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{client_selector, empty_state, error_banner, page_header};
use crate::templates::{href, render_to_html};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Clone, PartialEq)]
pub struct CalendarData {
    pub clients: Vec<ClientFull>,
    /// Active client; `None` when there are no clients.
    pub client_id: Option<String>,
    pub month: Month,
    pub today: NaiveDate,
    pub day: Option<NaiveDate>,
    pub items: Result<Vec<CalendarItem>, String>,
    pub scheduled: Vec<ScheduledItem>,
    pub tz: FixedOffset,
}

impl CalendarData {
    fn link(&self, month: Option<Month>, day: Option<NaiveDate>) -> String {
        let client = self.client_id.clone().unwrap_or_default();
        let month = month.map(|m| m.key()).unwrap_or_default();
        let day = day.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default();
        href("/calendar", &[("client_id", &client), ("month", &month), ("day", &day)])
    }
}

fn day_cell(cell: &DayCell, data: &CalendarData, items: &[CalendarItem]) -> Element {
    let (shown, overflow) = cell_items(items, cell.date, data.tz);
    let target = data.link(Some(data.month), Some(cell.date));
    let frame = if cell.is_selected {
        "border-emerald-500 bg-emerald-50"
    } else {
        "border-transparent hover:bg-gray-50"
    };
    let fade = if cell.in_month { "" } else { "opacity-40" };
    let number = if cell.is_today {
        "bg-emerald-600 text-white"
    } else {
        "text-gray-700"
    };
    let day_of_month = cell.date.format("%-d").to_string();

    rsx! {
        a { href: "{target}", class: "block min-h-24 p-2 rounded-lg border transition-colors text-left {frame} {fade}",
            span { class: "inline-flex items-center justify-center w-7 h-7 text-sm font-medium rounded-full {number}",
                "{day_of_month}"
            }
            div { class: "mt-1 space-y-1",
                for item in shown.iter() {
                    div { class: "text-xs px-1.5 py-0.5 bg-emerald-100 text-emerald-700 rounded truncate", "{item.keyword}" }
                }
                if overflow > 0 {
                    div { class: "text-xs text-gray-500 px-1.5", "+{overflow} more" }
                }
            }
        }
    }
}

fn month_grid(data: &CalendarData, items: &[CalendarItem]) -> Element {
    let cells: Vec<Element> = data
        .month
        .grid(data.today, data.day)
        .iter()
        .flatten()
        .map(|cell| day_cell(cell, data, items))
        .collect();
    rsx! {
        div { class: "grid grid-cols-7 gap-1 mb-2",
            for name in WEEKDAYS {
                div { class: "text-center text-xs font-medium text-gray-500 py-2", "{name}" }
            }
        }
        div { class: "grid grid-cols-7 gap-1",
            for cell in cells {
                {cell}
            }
        }
    }
}

fn selected_day(day: NaiveDate, items: &[CalendarItem], tz: FixedOffset) -> Element {
    let heading = long_day(day);
    let posts: Vec<_> = items_for_day(items, day, tz)
        .into_iter()
        .map(|item| (item, time(item.scheduled_time, tz)))
        .collect();
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h3 { class: "font-semibold text-gray-900 mb-4", "{heading}" }
            if posts.is_empty() {
                p { class: "text-sm text-gray-500", "No posts scheduled" }
            } else {
                div { class: "space-y-3",
                    for (item, at) in posts.iter() {
                        div { class: "p-3 bg-gray-50 rounded-lg",
                            h4 { class: "font-medium text-gray-900 text-sm", "{item.keyword}" }
                            div { class: "text-xs text-gray-500 mt-1", "{at}" }
                            div { class: "flex flex-wrap gap-1 mt-2",
                                for platform in item.platforms.iter() {
                                    span { class: "px-2 py-0.5 bg-emerald-100 text-emerald-700 text-xs rounded", "{platform}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn upcoming(scheduled: &[ScheduledItem], tz: FixedOffset) -> Element {
    let rows: Vec<_> = scheduled
        .iter()
        .take(5)
        .map(|item| {
            let local = item.scheduled_time.with_timezone(&tz);
            (
                item,
                local.format("%b").to_string(),
                local.format("%-d").to_string(),
                time(item.scheduled_time, tz),
            )
        })
        .collect();
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            h3 { class: "font-semibold text-gray-900 mb-4", "Upcoming Posts" }
            if rows.is_empty() {
                p { class: "text-sm text-gray-500", "No upcoming posts" }
            } else {
                div { class: "space-y-3",
                    for (item, month, day, at) in rows.iter() {
                        div { class: "flex items-start gap-3 p-2 hover:bg-gray-50 rounded-lg transition-colors",
                            div { class: "text-center",
                                div { class: "text-xs font-medium text-emerald-600", "{month}" }
                                div { class: "text-lg font-bold text-gray-900", "{day}" }
                            }
                            div { class: "flex-1 min-w-0",
                                p { class: "text-sm font-medium text-gray-900 truncate", "{item.keyword}" }
                                p { class: "text-xs text-gray-500", "{at}" }
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
fn Calendar(data: CalendarData) -> Element {
    let selected_client = data
        .client_id
        .as_deref()
        .and_then(|id| data.clients.iter().find(|c| c.id == id));
    let subtitle = match selected_client {
        Some(client) => format!("Schedule for {}", client.business_name),
        None => "Schedule and manage your posts".to_string(),
    };
    let page_href = data.link(Some(data.month), data.day);
    let prev_href = data.link(Some(data.month.prev()), None);
    let next_href = data.link(Some(data.month.next()), None);
    let today_href = data.link(None, None);
    let title = data.month.title();
    let selector = client_selector(
        "/calendar",
        &data.clients,
        data.client_id.as_deref().unwrap_or_default(),
        &[("month", data.month.key())],
    );

    let (grid, day_panel) = match &data.items {
        Err(message) => (error_banner("Failed to load calendar", message, &page_href), None),
        Ok(items) => (
            month_grid(&data, items),
            data.day.map(|day| selected_day(day, items, data.tz)),
        ),
    };
    let upcoming_panel = upcoming(&data.scheduled, data.tz);

    rsx! {
        Layout { title: "Content Calendar".to_string(), path: "/calendar".to_string(),
            { page_header("Content Calendar", &subtitle, Some(&page_href)) }
            div { class: "p-8",
                {selector}
                if data.client_id.is_none() {
                    { empty_state("No clients yet", "Add a client to start scheduling posts") }
                } else {
                    div { class: "grid grid-cols-1 lg:grid-cols-4 gap-6",
                        div { class: "lg:col-span-3 bg-white rounded-xl border border-gray-200 p-6",
                            div { class: "flex items-center justify-between mb-6",
                                h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                                div { class: "flex items-center gap-2",
                                    a { href: "{prev_href}", class: "p-2 hover:bg-gray-100 rounded-lg transition-colors", title: "Previous month", "‹" }
                                    a { href: "{today_href}", class: "px-3 py-1.5 text-sm font-medium text-emerald-600 hover:bg-emerald-50 rounded-lg transition-colors", "Today" }
                                    a { href: "{next_href}", class: "p-2 hover:bg-gray-100 rounded-lg transition-colors", title: "Next month", "›" }
                                }
                            }
                            {grid}
                        }
                        div { class: "space-y-6",
                            if let Some(panel) = day_panel {
                                {panel}
                            }
                            {upcoming_panel}
                        }
                    }
                }
            }
        }
    }
}

pub fn render_calendar(data: CalendarData) -> String {
    let mut dom = VirtualDom::new_with_props(Calendar, CalendarProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
