//! Navigation derived from the page list.

use vitrine_site::defaults;

/// A navigation link.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct NavItem {
    /// Visible label (title-cased page name)
    pub label: String,
    /// Anchor fragment (lower-cased page name)
    pub href: String,
}

/// Build navigation items from the page list, preserving order.
///
/// An empty list falls back to the default pages so the document always
/// carries a complete nav.
pub fn nav_items(pages: &[String]) -> Vec<NavItem> {
    if pages.is_empty() {
        return defaults::PAGES
            .iter()
            .map(|page| NavItem {
                label: title_case(page),
                href: format!("#{}", slugify(page)),
            })
            .collect();
    }

    pages
        .iter()
        .map(|page| NavItem {
            label: title_case(page),
            href: format!("#{}", slugify(page)),
        })
        .collect()
}

/// Convert a page name to a URL-safe anchor slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Title-case a page name: capitalize the first letter of each word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first letter of a string.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_anchors_and_labels() {
        let pages = vec!["Home".to_string(), "About".to_string(), "Contact".to_string()];
        let nav = nav_items(&pages);

        assert_eq!(nav.len(), 3);
        assert_eq!(nav[0].href, "#home");
        assert_eq!(nav[0].label, "Home");
        assert_eq!(nav[1].href, "#about");
        assert_eq!(nav[2].href, "#contact");
    }

    #[test]
    fn title_cases_lowercase_names() {
        let pages = vec!["our work".to_string()];
        let nav = nav_items(&pages);

        assert_eq!(nav[0].label, "Our Work");
        assert_eq!(nav[0].href, "#our-work");
    }

    #[test]
    fn preserves_page_order() {
        let pages = vec!["Contact".to_string(), "Home".to_string()];
        let nav = nav_items(&pages);

        assert_eq!(nav[0].href, "#contact");
        assert_eq!(nav[1].href, "#home");
    }

    #[test]
    fn empty_list_falls_back_to_default_pages() {
        let nav = nav_items(&[]);

        assert_eq!(nav.len(), 4);
        assert_eq!(nav[0].href, "#home");
        assert_eq!(nav[3].href, "#contact");
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Home"), "home");
        assert_eq!(slugify("Our Work"), "our-work");
        assert_eq!(slugify("FAQ (New)"), "faq-new");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }
}
