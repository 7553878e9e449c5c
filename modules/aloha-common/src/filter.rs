use content_api_client::ClientFull;

/// Clients whose business name or industry contains `query`, ignoring case.
/// A blank query keeps every client. Order is preserved.
pub fn filter_clients<'a>(clients: &'a [ClientFull], query: &str) -> Vec<&'a ClientFull> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return clients.iter().collect();
    }
    clients
        .iter()
        .filter(|c| {
            c.business_name.to_lowercase().contains(&needle)
                || c.industry.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fixtures::client;

    fn names(clients: Vec<&ClientFull>) -> Vec<&str> {
        clients.iter().map(|c| c.business_name.as_str()).collect()
    }

    #[test]
    fn matches_name_case_insensitively() {
        let clients = vec![
            client("c1", "Poke Shack", "restaurant"),
            client("c2", "Aloha Spa", "spa_wellness"),
        ];
        assert_eq!(names(filter_clients(&clients, "POKE")), vec!["Poke Shack"]);
    }

    #[test]
    fn matches_industry_substring() {
        let clients = vec![
            client("c1", "Poke Shack", "restaurant"),
            client("c2", "Aloha Spa", "spa_wellness"),
            client("c3", "Kona Grill", "restaurant"),
        ];
        assert_eq!(
            names(filter_clients(&clients, "rest")),
            vec!["Poke Shack", "Kona Grill"]
        );
        assert_eq!(names(filter_clients(&clients, "Wellness")), vec!["Aloha Spa"]);
    }

    #[test]
    fn blank_query_keeps_all() {
        let clients = vec![
            client("c1", "Poke Shack", "restaurant"),
            client("c2", "Aloha Spa", "spa_wellness"),
        ];
        assert_eq!(filter_clients(&clients, "").len(), 2);
        assert_eq!(filter_clients(&clients, "   ").len(), 2);
    }

    #[test]
    fn no_match_is_empty() {
        let clients = vec![client("c1", "Poke Shack", "restaurant")];
        assert!(filter_clients(&clients, "surf").is_empty());
    }
}
