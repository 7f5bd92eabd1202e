//! The glyph catalog and search filtering

use std::sync::Arc;

/// Ordered, immutable set of unique glyph names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    names: Arc<[String]>,
}

impl Catalog {
    pub fn new(names: impl Into<Arc<[String]>>) -> Self {
        Self {
            names: names.into(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Names whose lowercase form contains the lowercase `term`, in catalog
    /// order. The term is used verbatim; an empty term keeps every name.
    pub fn filter(&self, term: &str) -> Vec<&str> {
        let needle = term.to_lowercase();
        self.names
            .iter()
            .map(String::as_str)
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}

impl FromIterator<String> for Catalog {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> FromIterator<&'a str> for Catalog {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        ["house", "heart", "home", "star"].into_iter().collect()
    }

    #[test]
    fn test_filter_substring_keeps_order() {
        assert_eq!(catalog().filter("ho"), vec!["house", "home"]);
        // Substring, not prefix
        assert_eq!(catalog().filter("ar"), vec!["heart", "star"]);
    }

    #[test]
    fn test_filter_case_insensitive() {
        assert_eq!(catalog().filter("HO"), vec!["house", "home"]);
        let mixed: Catalog = ["ArrowUp", "arrow-down"].into_iter().collect();
        assert_eq!(mixed.filter("arrowu"), vec!["ArrowUp"]);
    }

    #[test]
    fn test_filter_empty_term_keeps_all() {
        assert_eq!(catalog().filter(""), vec!["house", "heart", "home", "star"]);
    }

    #[test]
    fn test_filter_not_trimmed() {
        assert!(catalog().filter(" ho").is_empty());
    }

    #[test]
    fn test_contains() {
        assert!(catalog().contains("star"));
        assert!(!catalog().contains("Star"));
    }
}
