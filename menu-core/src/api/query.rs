//! Menu Item Query
//!
//! The server-side half of the filter pipeline: category and search text.

use crate::domain::{FilterState, ALL_CATEGORY_ID};

/// Query parameters for `GET /menuItems`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub q: Option<String>,
}

impl MenuQuery {
    /// `all`/empty category and blank search are dropped; search is trimmed
    pub fn new(category: &str, search: &str) -> Self {
        let category = category.trim();
        let search = search.trim();
        Self {
            category: (!category.is_empty() && category != ALL_CATEGORY_ID).then(|| category.to_string()),
            q: (!search.is_empty()).then(|| search.to_string()),
        }
    }

    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = Vec::new();
        if let Some(category) = &self.category {
            params.push(("category", category.as_str()));
        }
        if let Some(q) = &self.q {
            params.push(("q", q.as_str()));
        }
        params
    }
}

impl From<&FilterState> for MenuQuery {
    fn from(filters: &FilterState) -> Self {
        MenuQuery::new(&filters.category, &filters.search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_category_is_omitted() {
        assert_eq!(MenuQuery::new("all", ""), MenuQuery::default());
        assert!(MenuQuery::new("all", "   ").params().is_empty());
    }

    #[test]
    fn test_params_in_order() {
        let query = MenuQuery::new("mains", "  chicken ");
        assert_eq!(query.params(), vec![("category", "mains"), ("q", "chicken")]);
    }

    #[test]
    fn test_from_filter_state() {
        let filters = FilterState {
            search: "naan".to_string(),
            ..Default::default()
        };
        let query = MenuQuery::from(&filters);
        assert_eq!(query.category, None);
        assert_eq!(query.q.as_deref(), Some("naan"));
    }
}
