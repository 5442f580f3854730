use crate::models::CategoryOption;

/// Conversation categories and their subcategories, in display order.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Account Access",
        &[
            "Login Issues",
            "Password Reset",
            "Account Security",
            "Profile Management",
        ],
    ),
    (
        "Technical Support",
        &[
            "Software Issues",
            "Hardware Problems",
            "Network Connectivity",
            "System Updates",
        ],
    ),
    (
        "Billing",
        &[
            "Payment Issues",
            "Invoice Questions",
            "Subscription Management",
            "Refund Requests",
        ],
    ),
    (
        "Product Information",
        &[
            "Product Features",
            "Pricing Details",
            "Compatibility",
            "Documentation",
        ],
    ),
    (
        "Service Issues",
        &[
            "Downtime",
            "Performance",
            "Service Interruption",
            "Error Reporting",
        ],
    ),
];

pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().map(|(name, _)| *name)
}

/// Filter options handed back to the client alongside conversation lists.
pub fn options() -> Vec<CategoryOption> {
    CATEGORIES
        .iter()
        .map(|(name, subs)| CategoryOption {
            name: name.to_string(),
            subcategories: subs.iter().map(|sub| sub.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_four_subcategories() {
        assert_eq!(CATEGORIES.len(), 5);
        for (name, subs) in CATEGORIES {
            assert_eq!(subs.len(), 4, "{name}");
        }
    }

    #[test]
    fn options_preserve_order() {
        let names: Vec<String> = options().into_iter().map(|opt| opt.name).collect();
        assert_eq!(names.first().map(String::as_str), Some("Account Access"));
        assert_eq!(names.last().map(String::as_str), Some("Service Issues"));
    }
}
