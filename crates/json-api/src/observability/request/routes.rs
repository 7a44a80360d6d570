//! Route templates for span and metric labels.

use uuid::Uuid;

/// Collapse id segments so every product or category shares one label,
/// e.g. `/api/products/{id}`. Anything sitting where the router expects an
/// id is collapsed, valid or not, so malformed ids cannot mint new labels.
pub(super) fn route_template(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut labels: Vec<&str> = Vec::new();
    let mut previous = "";

    for segment in path.trim_start_matches('/').split('/') {
        let label = match (previous, segment) {
            ("products", "active" | "low-stock" | "category") => segment,
            ("products" | "categories", _) => "{id}",
            ("category", _) => "{category}",
            _ if Uuid::parse_str(segment).is_ok() => "{id}",
            _ if labels.last().is_some_and(|last| last.starts_with('{')) => "{rest}",
            _ => segment,
        };

        labels.push(label);
        previous = segment;
    }

    format!("/{}", labels.join("/"))
}
