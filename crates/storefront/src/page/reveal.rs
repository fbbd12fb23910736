//! Reveal-on-scroll bookkeeping.
//!
//! Observed elements start hidden and are revealed the first time the host
//! reports them at least [`REVEAL_THRESHOLD`] inside the viewport. They never
//! hide again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// One visibility report from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntersectionEntry {
    /// Element identifier, e.g. `produto-card:3`.
    pub element: String,
    /// Visible fraction in `0.0..=1.0`.
    pub ratio: f64,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    elements: BTreeMap<String, bool>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an element in the hidden state.
    pub fn observe(&mut self, element: impl Into<String>) {
        self.elements.entry(element.into()).or_insert(false);
    }

    /// Apply visibility reports. Returns the elements revealed by this call.
    pub fn on_intersection(&mut self, entries: &[IntersectionEntry]) -> Vec<String> {
        let mut revealed = Vec::new();
        for entry in entries {
            if entry.ratio < REVEAL_THRESHOLD {
                continue;
            }
            if let Some(shown) = self.elements.get_mut(&entry.element) {
                if !*shown {
                    *shown = true;
                    revealed.push(entry.element.clone());
                }
            }
        }
        revealed
    }

    #[must_use]
    pub fn is_revealed(&self, element: &str) -> bool {
        self.elements.get(element).copied().unwrap_or(false)
    }

    /// Observed elements still hidden.
    #[must_use]
    pub fn hidden(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, shown)| !**shown)
            .map(|(element, _)| element.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(element: &str, ratio: f64) -> IntersectionEntry {
        IntersectionEntry {
            element: element.to_owned(),
            ratio,
        }
    }

    #[test]
    fn test_reveal_at_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.observe("produto-card:1");
        tracker.observe("stat-item:1");

        assert!(tracker.on_intersection(&[entry("produto-card:1", 0.05)]).is_empty());
        assert_eq!(
            tracker.on_intersection(&[entry("produto-card:1", 0.1)]),
            vec!["produto-card:1".to_owned()]
        );
        assert!(tracker.is_revealed("produto-card:1"));
        assert_eq!(tracker.hidden(), vec!["stat-item:1"]);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::new();
        tracker.observe("categoria-item:2");
        tracker.on_intersection(&[entry("categoria-item:2", 0.8)]);

        assert!(tracker.on_intersection(&[entry("categoria-item:2", 0.0)]).is_empty());
        assert!(tracker.on_intersection(&[entry("categoria-item:2", 0.9)]).is_empty());
        assert!(tracker.is_revealed("categoria-item:2"));
    }

    #[test]
    fn test_unobserved_elements_ignored() {
        let mut tracker = RevealTracker::new();
        assert!(tracker.on_intersection(&[entry("footer", 1.0)]).is_empty());
        assert!(!tracker.is_revealed("footer"));
    }
}
