use dioxus::prelude::*;

struct NavItem {
    label: &'static str,
    href: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/" },
    NavItem { label: "Clients", href: "/clients" },
    NavItem { label: "Content", href: "/content" },
    NavItem { label: "Calendar", href: "/calendar" },
    NavItem { label: "Review Queue", href: "/review" },
    NavItem { label: "Analytics", href: "/analytics" },
];

/// `/` only matches itself; every other item also owns its sub-paths.
pub fn is_active(href: &str, path: &str) -> bool {
    path == href || (href != "/" && path.starts_with(href))
}

/// Dashboard layout with sidebar navigation.
#[allow(non_snake_case)]
#[component]
pub fn Layout(title: String, path: String, children: Element) -> Element {
    let full_title = format!("{title} | Aloha Content Factory");
    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            script { src: "https://cdn.tailwindcss.com" }
        }
        body { class: "min-h-screen bg-gray-50 font-sans text-gray-900",
            aside { class: "fixed inset-y-0 left-0 z-50 w-64 bg-gradient-to-b from-emerald-900 to-emerald-950 text-white",
                div { class: "flex h-16 items-center gap-2 px-6 border-b border-emerald-800",
                    div {
                        h1 { class: "font-bold text-lg", "Aloha Content" }
                        p { class: "text-xs text-emerald-400", "Factory Dashboard" }
                    }
                }
                nav { class: "mt-6 px-3",
                    ul { class: "space-y-1",
                        for item in NAV_ITEMS.iter() {
                            {
                                let class = if is_active(item.href, &path) {
                                    "flex items-center gap-3 px-3 py-2.5 rounded-lg bg-emerald-700 text-white"
                                } else {
                                    "flex items-center gap-3 px-3 py-2.5 rounded-lg text-emerald-200 hover:bg-emerald-800 hover:text-white transition-colors"
                                };
                                let href = item.href;
                                let label = item.label;
                                rsx! { li { a { href: href, class: class, "{label}" } } }
                            }
                        }
                    }
                }
            }
            main { class: "pl-64",
                {children}
            }
        }
    }
}
