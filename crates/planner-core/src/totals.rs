//! Per-category time totals.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::category::CategoryRegistry;
use crate::event::Event;

/// Accumulated minutes per counted category, in registry order.
///
/// Every counted category is present, with zero when it has no events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    entries: Vec<(String, u32)>,
}

impl CategoryTotals {
    pub fn get(&self, category: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, minutes)| *minutes)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, minutes)| (name.as_str(), *minutes))
    }

    /// Sum across all counted categories.
    pub fn total_minutes(&self) -> u32 {
        self.entries.iter().map(|(_, minutes)| minutes).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-line summary such as `job: 0min / class: 1h 30min`.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|(name, minutes)| format!("{name}: {}", format_duration(*minutes)))
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, minutes) in &self.entries {
            map.serialize_entry(name, minutes)?;
        }
        map.end()
    }
}

/// Sums event durations for each counted category.
///
/// Events in uncounted or unknown categories contribute nothing.
pub fn aggregate_totals(events: &[Event], registry: &CategoryRegistry) -> CategoryTotals {
    let entries = registry
        .counted()
        .map(|category| {
            let minutes = events
                .iter()
                .filter(|event| event.category == category.name)
                .map(Event::duration_minutes)
                .sum();
            (category.name.clone(), minutes)
        })
        .collect();
    CategoryTotals { entries }
}

/// Formats a minute count as `0min`, `45min`, `2h`, or `1h 30min`.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;

    match (hours, rest) {
        (0, rest) => format!("{rest}min"),
        (hours, 0) => format!("{hours}h"),
        (hours, rest) => format!("{hours}h {rest}min"),
    }
}
