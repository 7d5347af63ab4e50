//! Navigation identity for the header links.

use wasm_bindgen::JsCast;
use web_sys::Document;

/// Pages the header navigation can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Cv,
    Portfolio,
}

impl Page {
    /// Key used by the `data-page` attribute on header links.
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Cv => "cv",
            Page::Portfolio => "portfolio",
        }
    }
}

/// Resolve which nav link a path belongs to. Unrecognized paths map to no
/// page, which is not an error.
pub fn page_for_path(path: &str) -> Option<Page> {
    if path.is_empty() || path == "/" || path.ends_with("index.html") {
        Some(Page::Home)
    } else if path.contains("cv.html") {
        Some(Page::Cv)
    } else if path.contains("portfolio.html") {
        Some(Page::Portfolio)
    } else {
        None
    }
}

/// Mark the matching header link active and clear the rest. Must run only
/// after the header fragment is in the document.
pub fn apply_active_link(document: &Document, page: Option<Page>) {
    let Ok(links) = document.query_selector_all(".header-link[data-page]") else {
        return;
    };

    for index in 0..links.length() {
        let Some(node) = links.item(index) else {
            continue;
        };
        let Ok(link) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };

        let _ = link.class_list().remove_1("active");
        let is_match = page
            .map(|p| link.get_attribute("data-page").as_deref() == Some(p.key()))
            .unwrap_or(false);
        if is_match {
            let _ = link.class_list().add_1("active");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cv_path_resolves_to_cv() {
        assert_eq!(page_for_path("/cv.html"), Some(Page::Cv));
    }

    #[test]
    fn test_root_and_index_resolve_to_home() {
        assert_eq!(page_for_path("/"), Some(Page::Home));
        assert_eq!(page_for_path(""), Some(Page::Home));
        assert_eq!(page_for_path("/index.html"), Some(Page::Home));
    }

    #[test]
    fn test_portfolio_path_resolves_to_portfolio() {
        assert_eq!(page_for_path("/portfolio.html"), Some(Page::Portfolio));
    }

    #[test]
    fn test_unrecognized_path_resolves_to_none() {
        assert_eq!(page_for_path("/about.html"), None);
    }

    #[test]
    fn test_nested_paths_still_match() {
        assert_eq!(page_for_path("/site/cv.html"), Some(Page::Cv));
    }
}
