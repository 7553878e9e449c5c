use aloha_common::filter_clients;
use aloha_common::format::{date, industry_label};
use aloha_common::forms::{NewClientForm, INDUSTRIES, ISLANDS};
use chrono::FixedOffset;
use content_api_client::{Audience, ClientFull, Tier};
use dioxus::prelude::*;

use super::layout::Layout;
use super::widgets::{
    empty_state, error_banner, inline_error, modal, page_header, status_badge, INPUT_CLASS,
    LABEL_CLASS, PRIMARY_BUTTON, SECONDARY_BUTTON,
};
use crate::templates::{client_path, href, render_to_html};

#[derive(Clone, PartialEq)]
pub enum ClientsModal {
    Closed,
    Add { form: NewClientForm, error: Option<String> },
    Delete { client: ClientFull, error: Option<String> },
}

#[derive(Clone, PartialEq)]
pub struct ClientsData {
    pub clients: Result<Vec<ClientFull>, String>,
    pub query: String,
    pub modal: ClientsModal,
    pub tz: FixedOffset,
}

fn website_href(website: &str) -> String {
    if website.starts_with("http") {
        website.to_string()
    } else {
        format!("https://{website}")
    }
}

fn client_card(client: &ClientFull, query: &str, tz: FixedOffset) -> Element {
    let industry = industry_label(&client.industry);
    let added = format!("Added {}", date(client.created_at, tz));
    let island = client.locations.first().map(|l| l.island.clone());
    let website = client.website.as_deref().map(website_href);
    let detail_href = client_path(&client.id);
    let delete_href = href("/clients", &[("q", query), ("delete", &client.id)]);

    rsx! {
        div { class: "bg-white rounded-xl border border-gray-200 p-6 hover:shadow-lg transition-shadow",
            div { class: "mb-4",
                a { href: "{detail_href}", class: "font-semibold text-gray-900 hover:text-emerald-700",
                    "{client.business_name}"
                }
                p { class: "text-sm text-gray-500", "{industry}" }
            }
            div { class: "space-y-3 mb-4 text-sm text-gray-600",
                div { "Tier: {client.tier}" }
                div { "Audience: {client.primary_audience}" }
                if let Some(counts) = &client.counts {
                    div { class: "flex items-center gap-4",
                        span { "{counts.scripts} scripts" }
                        span { "{counts.renders} videos" }
                    }
                }
            }
            div { class: "flex items-center gap-2 mb-4",
                { status_badge(&client.status) }
                if let Some(island) = island {
                    span { class: "px-2 py-1 text-xs font-medium rounded bg-blue-100 text-blue-700", "{island}" }
                }
            }
            div { class: "flex items-center justify-between pt-4 border-t border-gray-100",
                span { class: "text-xs text-gray-400", "{added}" }
                div { class: "flex items-center gap-3 text-sm",
                    a { href: "{delete_href}", class: "text-gray-400 hover:text-red-600", title: "Delete client", "Delete" }
                    if let Some(site) = website {
                        a { href: "{site}", target: "_blank", rel: "noopener noreferrer",
                            class: "text-gray-400 hover:text-emerald-600", title: "Visit website",
                            "Website"
                        }
                    }
                }
            }
        }
    }
}

fn add_client_form(form: &NewClientForm, error: Option<&str>, close_href: &str) -> Element {
    let phone = form.contact_phone.clone().unwrap_or_default();
    let website = form.website.clone().unwrap_or_default();
    let industries: Vec<(&str, String, bool)> = INDUSTRIES
        .iter()
        .map(|ind| (*ind, industry_label(ind), *ind == form.industry))
        .collect();
    let audiences: Vec<(&str, &str, bool)> = Audience::ALL
        .iter()
        .map(|a| (a.as_str(), a.label(), a.as_str() == form.primary_audience))
        .collect();
    let tiers: Vec<(&str, &str, bool)> = Tier::ALL
        .iter()
        .map(|t| (t.as_str(), t.label(), t.as_str() == form.tier))
        .collect();
    rsx! {
        form { method: "POST", action: "/clients", class: "space-y-6",
            { inline_error(error) }

            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: LABEL_CLASS, r#for: "business_name", "Business Name *" }
                    input { r#type: "text", id: "business_name", name: "business_name", required: true,
                        value: "{form.business_name}", placeholder: "e.g., Aloha Spa & Wellness", class: INPUT_CLASS }
                }
                div {
                    label { class: LABEL_CLASS, r#for: "industry", "Industry *" }
                    select { id: "industry", name: "industry", class: INPUT_CLASS,
                        for (value, label, selected) in industries.iter() {
                            option { value: "{value}", selected: *selected, "{label}" }
                        }
                    }
                }
            }

            div { class: "space-y-4",
                h3 { class: "text-sm font-medium text-gray-900", "Contact Information" }
                div { class: "grid grid-cols-2 gap-4",
                    div {
                        label { class: LABEL_CLASS, "Contact Name" }
                        input { r#type: "text", name: "contact_name", value: "{form.contact_name}", placeholder: "e.g., John Smith", class: INPUT_CLASS }
                    }
                    div {
                        label { class: LABEL_CLASS, "Contact Email" }
                        input { r#type: "email", name: "contact_email", value: "{form.contact_email}", placeholder: "e.g., john@example.com", class: INPUT_CLASS }
                    }
                    div {
                        label { class: LABEL_CLASS, "Phone" }
                        input { r#type: "tel", name: "contact_phone", value: "{phone}", class: INPUT_CLASS }
                    }
                    div {
                        label { class: LABEL_CLASS, "Website" }
                        input { r#type: "text", name: "website", value: "{website}", class: INPUT_CLASS }
                    }
                }
            }

            div { class: "grid grid-cols-2 gap-4",
                div {
                    label { class: LABEL_CLASS, "Island *" }
                    select { name: "island", class: INPUT_CLASS,
                        for island in ISLANDS.iter() {
                            option { value: "{island}", selected: *island == form.island, "{island}" }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Neighborhood" }
                    input { r#type: "text", name: "neighborhood", value: "{form.neighborhood}", placeholder: "e.g., Waikiki, Kailua", class: INPUT_CLASS }
                }
            }

            div { class: "grid grid-cols-3 gap-4",
                div {
                    label { class: LABEL_CLASS, "Target Audience" }
                    select { name: "primary_audience", class: INPUT_CLASS,
                        for (value, label, selected) in audiences.iter() {
                            option { value: "{value}", selected: *selected, "{label}" }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Service Tier" }
                    select { name: "tier", class: INPUT_CLASS,
                        for (value, label, selected) in tiers.iter() {
                            option { value: "{value}", selected: *selected, "{label}" }
                        }
                    }
                }
                div {
                    label { class: LABEL_CLASS, "Monthly Fee ($)" }
                    input { r#type: "number", name: "monthly_fee", value: "{form.monthly_fee}", class: INPUT_CLASS }
                }
            }

            div { class: "flex items-center justify-end gap-3 pt-4 border-t border-gray-200",
                a { href: "{close_href}", class: SECONDARY_BUTTON, "Cancel" }
                button { r#type: "submit", class: PRIMARY_BUTTON, "Create Client" }
            }
        }
    }
}

fn delete_confirm(client: &ClientFull, error: Option<&str>, close_href: &str) -> Element {
    let action = format!("{}/delete", client_path(&client.id));
    rsx! {
        div { class: "space-y-4",
            { inline_error(error) }
            p { class: "text-gray-600",
                "Are you sure you want to delete "
                strong { "{client.business_name}" }
                "? This will also delete all associated scripts, videos, and analytics data. This action cannot be undone."
            }
            form { method: "POST", action: "{action}", class: "flex items-center justify-end gap-3",
                a { href: "{close_href}", class: SECONDARY_BUTTON, "Cancel" }
                button { r#type: "submit",
                    class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700 transition-colors",
                    "Delete Client"
                }
            }
        }
    }
}

#[allow(non_snake_case)]
#[component]
fn Clients(data: ClientsData) -> Element {
    let page_href = href("/clients", &[("q", &data.query)]);
    let add_href = href("/clients", &[("q", &data.query), ("modal", "add")]);

    let body = match &data.clients {
        Err(message) => error_banner("Failed to load clients", message, &page_href),
        Ok(clients) => {
            let visible = filter_clients(clients, &data.query);
            if visible.is_empty() {
                rsx! {
                    { empty_state("No clients yet", "Add your first Hawaii SMB client to start generating content") }
                    div { class: "text-center mt-4",
                        a { href: "{add_href}", class: PRIMARY_BUTTON, "Add Client" }
                    }
                }
            } else {
                rsx! {
                    div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                        for client in visible.iter() {
                            { client_card(client, &data.query, data.tz) }
                        }
                    }
                }
            }
        }
    };

    let overlay = match &data.modal {
        ClientsModal::Closed => None,
        ClientsModal::Add { form, error } => Some(modal(
            "Add New Client",
            &page_href,
            add_client_form(form, error.as_deref(), &page_href),
        )),
        ClientsModal::Delete { client, error } => Some(modal(
            "Delete Client",
            &page_href,
            delete_confirm(client, error.as_deref(), &page_href),
        )),
    };

    rsx! {
        Layout { title: "Clients".to_string(), path: "/clients".to_string(),
            { page_header("Clients", "Manage your SMB clients", Some(&page_href)) }
            div { class: "p-8",
                div { class: "flex items-center justify-between mb-6",
                    form { method: "GET", action: "/clients", class: "flex-1 max-w-md",
                        input { r#type: "search", name: "q", value: "{data.query}",
                            placeholder: "Search clients...",
                            class: "w-full px-4 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-emerald-500"
                        }
                    }
                    a { href: "{add_href}", class: PRIMARY_BUTTON, "Add Client" }
                }
                {body}
            }
            if let Some(overlay) = overlay {
                {overlay}
            }
        }
    }
}

pub fn render_clients(data: ClientsData) -> String {
    let mut dom = VirtualDom::new_with_props(Clients, ClientsProps { data });
    dom.rebuild_in_place();
    render_to_html(&dom)
}
