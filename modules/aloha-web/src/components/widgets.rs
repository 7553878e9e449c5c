//! Presentational pieces shared by every page.

use aloha_common::format::status_badge as badge_class;
use content_api_client::ClientFull;
use dioxus::prelude::*;

pub const INPUT_CLASS: &str = "w-full px-3 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-emerald-500 bg-white";
pub const LABEL_CLASS: &str = "block text-sm font-medium text-gray-700 mb-1";
pub const PRIMARY_BUTTON: &str = "inline-flex items-center gap-2 px-4 py-2 bg-emerald-600 text-white rounded-lg hover:bg-emerald-700 transition-colors";
pub const SECONDARY_BUTTON: &str = "inline-flex items-center gap-2 px-4 py-2 border border-gray-200 text-gray-700 rounded-lg hover:bg-gray-50 transition-colors";

/// Page title bar. The refresh link reloads the page with its current state.
pub fn page_header(title: &str, subtitle: &str, refresh_href: Option<&str>) -> Element {
    rsx! {
        header { class: "flex items-center justify-between h-16 px-8 bg-white border-b border-gray-200",
            div {
                h1 { class: "text-xl font-semibold text-gray-900", "{title}" }
                p { class: "text-sm text-gray-500", "{subtitle}" }
            }
            if let Some(href) = refresh_href {
                a { href: "{href}", class: "px-3 py-1.5 text-sm text-gray-600 hover:bg-gray-100 rounded-lg",
                    "Refresh"
                }
            }
        }
    }
}

pub fn stat_card(value: String, label: &str, note: Option<String>, color: &str) -> Element {
    let text_class = format!("text-3xl font-bold text-{color}-700");
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6",
            p { class: "text-sm text-gray-500", "{label}" }
            p { class: "{text_class} mt-1", "{value}" }
            if let Some(note) = note {
                p { class: "text-xs text-gray-400 mt-1", "{note}" }
            }
        }
    }
}

/// Failed primary fetch. Retry repeats the same request.
pub fn error_banner(title: &str, message: &str, retry_href: &str) -> Element {
    rsx! {
        div { class: "bg-red-50 border border-red-200 rounded-lg p-6 text-center",
            h2 { class: "text-lg font-semibold text-red-800", "{title}" }
            p { class: "text-red-600 mt-2", "{message}" }
            a { href: "{retry_href}",
                class: "inline-block mt-4 px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors",
                "Retry"
            }
        }
    }
}

pub fn empty_state(title: &str, text: &str) -> Element {
    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-12 text-center",
            h3 { class: "text-lg font-medium text-gray-900 mb-2", "{title}" }
            p { class: "text-gray-500", "{text}" }
        }
    }
}

/// Form-level error shown at the top of a modal.
pub fn inline_error(error: Option<&str>) -> Element {
    rsx! {
        if let Some(err) = error {
            div { class: "p-3 bg-red-50 border border-red-200 rounded-lg text-red-700 text-sm",
                "{err}"
            }
        }
    }
}

/// Overlay dialog. Closing is a plain link back to the page without the modal.
pub fn modal(title: &str, close_href: &str, body: Element) -> Element {
    rsx! {
        div { class: "fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4",
            div { class: "bg-white rounded-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto",
                div { class: "flex items-center justify-between p-6 border-b border-gray-200",
                    h2 { class: "text-xl font-semibold", "{title}" }
                    a { href: "{close_href}", class: "p-2 text-gray-400 hover:text-gray-600 rounded-lg hover:bg-gray-100",
                        "Close"
                    }
                }
                div { class: "p-6", {body} }
            }
        }
    }
}

pub fn status_badge(status: &str) -> Element {
    let class = format!(
        "inline-flex items-center px-2.5 py-1 rounded-full text-xs font-medium {}",
        badge_class(status)
    );
    rsx! {
        span { class: "{class}", "{status}" }
    }
}

/// GET form that switches the page's active client.
pub fn client_selector(
    action: &str,
    clients: &[ClientFull],
    selected: &str,
    hidden: &[(&str, String)],
) -> Element {
    rsx! {
        form { method: "GET", action: "{action}", class: "flex items-center gap-3 mb-6",
            for (name, value) in hidden.iter() {
                input { r#type: "hidden", name: "{name}", value: "{value}" }
            }
            select { name: "client_id", class: "px-4 py-2 border border-gray-200 rounded-lg text-sm bg-white",
                if clients.is_empty() {
                    option { value: "", "No clients available" }
                }
                for client in clients.iter() {
                    option { value: "{client.id}", selected: client.id == selected,
                        "{client.business_name}"
                    }
                }
            }
            button { r#type: "submit", class: SECONDARY_BUTTON, "Show" }
        }
    }
}
