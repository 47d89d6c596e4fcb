/// Known metric categories and their display labels, in filter order.
pub const CATEGORY_LABELS: [(&str, &str); 8] = [
    ("economy", "Economy"),
    ("health", "Health & Hospitals"),
    ("crime", "Crime & Justice"),
    ("defence", "Defence & Security"),
    ("education", "Education"),
    ("labour", "Labour & Demographics"),
    ("energy", "Energy & Environment"),
    ("budget", "Budget & Finance"),
];

/// Display label for a category key. Unknown keys are shown as-is.
pub fn category_label(category: Option<&str>) -> &str {
    match category {
        None | Some("") => "All Categories",
        Some(key) => CATEGORY_LABELS
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, label)| *label)
            .unwrap_or(key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        assert_eq!(category_label(Some("health")), "Health & Hospitals");
        assert_eq!(category_label(Some("transport")), "transport");
        assert_eq!(category_label(None), "All Categories");
        assert_eq!(category_label(Some("")), "All Categories");
    }
}
