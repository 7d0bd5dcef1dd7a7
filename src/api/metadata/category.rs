//! Path categorization for the API overview and endpoint listing

/// Substring rules checked in order; the first hit names the category
const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["/actions"], "Actions"),
    (&["/ticket"], "Tickets"),
    (&["/agent"], "Agents"),
    (&["/client"], "Clients"),
    (&["/site"], "Sites"),
    (&["/user"], "Users"),
    (&["/asset"], "Assets"),
    (&["/invoice"], "Invoicing"),
    (&["/report"], "Reports"),
    (&["/address"], "Addresses"),
    (&["/appointment"], "Appointments"),
    (&["/project"], "Projects"),
    (&["/contract"], "Contracts"),
    (&["/supplier"], "Suppliers"),
    (&["/product"], "Products"),
    (&["/kb", "/knowledge"], "Knowledge Base"),
    (&["/integration"], "Integrations"),
    (&["/webhook"], "Webhooks"),
    (&["/api"], "API Management"),
];

pub const OTHER_CATEGORY: &str = "Other";

/// Derive the single category label for an API path
pub fn categorize_path(path: &str) -> &'static str {
    let lower = path.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|(needles, _)| needles.iter().any(|n| lower.contains(n)))
        .map(|(_, label)| *label)
        .unwrap_or(OTHER_CATEGORY)
}
