//! List Filters
//!
//! `?search=&category=` query parameters shared by the product catalog and
//! the public job listing.

use serde::Deserialize;

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Sentinel the storefront still sends for "all categories"
pub const LEGACY_ALL_CATEGORIES: &str = "Все";

/// Raw query string as sent by the client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// Normalized filter
///
/// Blank values and the "all" sentinels are dropped, so an empty filter
/// means "return everything".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    search: Option<String>,
    category: Option<String>,
}

impl ListFilter {
    pub fn new(search: Option<&str>, category: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);

        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty() && !is_all_categories(c))
            .map(str::to_owned);

        Self { search, category }
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// `ILIKE` pattern for the search term, with wildcards in the term escaped
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for ch in term.chars() {
                if matches!(ch, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(ch);
            }
            pattern.push('%');
            pattern
        })
    }

    /// In-process equivalent of the SQL predicate
    pub fn matches(&self, text: &str, category: &str) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|term| text.to_lowercase().contains(&term.to_lowercase()));
        let category_ok = self.category.as_deref().is_none_or(|c| c == category);
        search_ok && category_ok
    }
}

impl From<ListQuery> for ListFilter {
    fn from(query: ListQuery) -> Self {
        Self::new(query.search.as_deref(), query.category.as_deref())
    }
}

fn is_all_categories(value: &str) -> bool {
    value.eq_ignore_ascii_case(ALL_CATEGORIES) || value == LEGACY_ALL_CATEGORIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sentinels_disable_category() {
        assert_eq!(ListFilter::new(None, Some("all")).category(), None);
        assert_eq!(ListFilter::new(None, Some("ALL")).category(), None);
        assert_eq!(ListFilter::new(None, Some("Все")).category(), None);
        assert_eq!(ListFilter::new(None, Some("  ")).category(), None);
        assert_eq!(
            ListFilter::new(None, Some("Инструменты")).category(),
            Some("Инструменты")
        );
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let filter = ListFilter::new(Some("   "), None);
        assert_eq!(filter, ListFilter::default());
        assert_eq!(filter.search_pattern(), None);
    }

    #[test]
    fn test_search_pattern_escapes_wildcards() {
        let filter = ListFilter::new(Some("50%_off\\"), None);
        assert_eq!(filter.search_pattern().as_deref(), Some("%50\\%\\_off\\\\%"));
    }

    #[test]
    fn test_matches_is_case_insensitive_on_text() {
        let filter = ListFilter::new(Some("дрель"), Some("Инструменты"));
        assert!(filter.matches("Дрель ударная", "Инструменты"));
        assert!(!filter.matches("Дрель ударная", "Краски"));
        assert!(!filter.matches("Шуруповерт", "Инструменты"));
        assert!(ListFilter::default().matches("anything", "any"));
    }

    #[test]
    fn test_from_query() {
        let query = ListQuery {
            search: Some(" cement ".to_string()),
            category: Some("all".to_string()),
        };
        let filter = ListFilter::from(query);
        assert_eq!(filter.search(), Some("cement"));
        assert_eq!(filter.category(), None);
    }
}
