//! Static category configuration.
//!
//! A registry maps category names to their display color and whether their
//! events count toward the per-category totals. It is loaded once from
//! configuration and never mutated; switching category sets is a config
//! change, not a code change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::TypeError;

/// Color used for events whose category is not in the registry.
pub const FALLBACK_COLOR: &str = "#FFFFFF";

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    /// Display color, e.g. `#33CFFF`.
    pub color: String,
    /// Whether event durations in this category are summed into totals.
    #[serde(default)]
    pub counts_toward_total: bool,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        color: impl Into<String>,
        counts_toward_total: bool,
    ) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            counts_toward_total,
        }
    }
}

/// Ordered set of categories. Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Category>", into = "Vec<Category>")]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// Builds a registry, rejecting empty or duplicate names.
    pub fn new(categories: Vec<Category>) -> Result<Self, TypeError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.name.trim().is_empty() {
                return Err(TypeError::Empty {
                    field: "category name",
                });
            }
            if !seen.insert(category.name.as_str()) {
                return Err(TypeError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
        }
        Ok(Self { categories })
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// True only for known categories flagged as counted.
    pub fn counts_toward_total(&self, name: &str) -> bool {
        self.get(name).is_some_and(|c| c.counts_toward_total)
    }

    /// Display color for `name`, or [`FALLBACK_COLOR`] when unknown.
    pub fn color_for(&self, name: &str) -> &str {
        self.get(name).map_or(FALLBACK_COLOR, |c| c.color.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    /// Counted categories in display order.
    pub fn counted(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter().filter(|c| c.counts_toward_total)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self {
            categories: vec![
                Category::new("job", "#D1B9FF", true),
                Category::new("class", "#33CFFF", true),
                Category::new("gym", "#FFADAD", false),
                Category::new("study", "#B9FBC0", true),
                Category::new("other", "#E2E2E2", false),
            ],
        }
    }
}

impl TryFrom<Vec<Category>> for CategoryRegistry {
    type Error = TypeError;

    fn try_from(value: Vec<Category>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryRegistry> for Vec<Category> {
    fn from(registry: CategoryRegistry) -> Self {
        registry.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_counts_expected_categories() {
        let registry = CategoryRegistry::default();
        let counted: Vec<_> = registry.counted().map(|c| c.name.as_str()).collect();
        assert_eq!(counted, vec!["job", "class", "study"]);
        assert!(!registry.counts_toward_total("gym"));
        assert!(!registry.counts_toward_total("other"));
    }

    #[test]
    fn unknown_category_uses_fallback_color() {
        let registry = CategoryRegistry::default();
        assert_eq!(registry.color_for("class"), "#33CFFF");
        assert_eq!(registry.color_for("karaoke"), FALLBACK_COLOR);
        assert!(!registry.counts_toward_total("karaoke"));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = CategoryRegistry::new(vec![
            Category::new("work", "#000000", true),
            Category::new("work", "#FFFFFF", false),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TypeError::DuplicateCategory {
                name: "work".to_string()
            }
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        let err = CategoryRegistry::new(vec![Category::new("  ", "#000000", true)]).unwrap_err();
        assert!(matches!(err, TypeError::Empty { .. }));
    }

    #[test]
    fn deserializes_from_list_and_keeps_order() {
        let json = r##"[
            {"name": "reading", "color": "#111111", "counts_toward_total": true},
            {"name": "chores", "color": "#222222"}
        ]"##;
        let registry: CategoryRegistry = serde_json::from_str(json).unwrap();
        let names: Vec<_> = registry.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["reading", "chores"]);
        assert!(!registry.counts_toward_total("chores"));
    }

    #[test]
    fn deserialization_rejects_duplicates() {
        let json = r##"[
            {"name": "a", "color": "#111111"},
            {"name": "a", "color": "#222222"}
        ]"##;
        assert!(serde_json::from_str::<CategoryRegistry>(json).is_err());
    }
}
