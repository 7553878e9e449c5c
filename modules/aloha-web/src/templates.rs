use dioxus::prelude::VirtualDom;

/// Render a VirtualDom into a complete HTML document string.
pub fn render_to_html(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}

/// Link to `path` carrying the given page state. Empty values are dropped so
/// links stay short.
pub fn href(path: &str, pairs: &[(&str, &str)]) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    let mut any = false;
    for (key, value) in pairs {
        if !value.is_empty() {
            query.append_pair(key, value);
            any = true;
        }
    }
    if any {
        format!("{path}?{}", query.finish())
    } else {
        path.to_string()
    }
}

/// `/clients/{id}` with the id encoded as a single path segment.
pub fn client_path(id: &str) -> String {
    format!("/clients/{}", urlencoding::encode(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_path_encodes_id_as_one_segment() {
        assert_eq!(client_path("c1"), "/clients/c1");
        assert_eq!(client_path("a\nb"), "/clients/a%0Ab");
        assert_eq!(client_path("x/y z"), "/clients/x%2Fy%20z");
    }

    #[test]
    fn href_drops_empty_state() {
        assert_eq!(href("/content", &[("tab", "scripts"), ("status", "")]), "/content?tab=scripts");
        assert_eq!(href("/content", &[("status", "")]), "/content");
    }

    #[test]
    fn href_encodes_values() {
        assert_eq!(href("/clients", &[("q", "poke & co")]), "/clients?q=poke+%26+co");
    }
}
