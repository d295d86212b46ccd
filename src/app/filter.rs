//! Text filtering of the catalog.
//!
//! The query is treated as a case-insensitive regular-expression fragment,
//! not a literal substring, matched against the concatenation of display
//! name and region. An empty query matches everything; a fragment that
//! fails to parse matches nothing.

use crate::core::catalog::{Location, LocationId};
use regex::RegexBuilder;

/// What one filter pass did to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Ids whose locations match the query, in catalog order.
    pub matched: Vec<LocationId>,
    /// Ids whose visibility flipped in this pass; the caller issues one
    /// `set_visibility` per entry.
    pub changed: Vec<LocationId>,
    /// Drives the "no results" indicator.
    pub is_empty: bool,
}

#[derive(Debug, Default)]
pub struct FilterEngine;

impl FilterEngine {
    pub fn new() -> Self {
        Self
    }

    /// Applies `query` to the catalog, mutating each location's `visible`
    /// flag. Runs synchronously on every input change; no debounce.
    pub fn apply(&self, query: &str, catalog: &mut [Location]) -> FilterOutcome {
        let pattern = RegexBuilder::new(query).case_insensitive(true).build();

        let mut matched = Vec::new();
        let mut changed = Vec::new();
        for loc in catalog.iter_mut() {
            let matches = match &pattern {
                Ok(re) => re.is_match(&loc.filter_text()),
                Err(e) => {
                    log::debug!("unparsable filter fragment {:?}: {}", query, e);
                    false
                }
            };
            if matches {
                matched.push(loc.id);
            }
            if loc.visible != matches {
                loc.visible = matches;
                changed.push(loc.id);
            }
        }

        FilterOutcome {
            is_empty: matched.is_empty(),
            matched,
            changed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::default_catalog;

    fn names(catalog: &[Location], ids: &[LocationId]) -> Vec<String> {
        ids.iter()
            .map(|id| catalog[id.0].display_name.clone())
            .collect()
    }

    #[test]
    fn test_single_match() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("brooklyn", &mut catalog);
        assert_eq!(names(&catalog, &outcome.matched), vec!["Brooklyn"]);
        assert!(!outcome.is_empty);
        assert!(catalog[0].visible);
        assert!(!catalog[1].visible);
    }

    #[test]
    fn test_park_matches_all_four_parks() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("park", &mut catalog);
        assert_eq!(
            names(&catalog, &outcome.matched),
            vec![
                "Washington Square Park",
                "Central Park",
                "Astoria Park",
                "Madison Square Park"
            ]
        );
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("", &mut catalog);
        assert_eq!(outcome.matched.len(), 10);
        assert!(!outcome.is_empty);
        assert!(outcome.changed.is_empty());
    }

    #[test]
    fn test_no_match_reports_empty() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("zzz-no-match", &mut catalog);
        assert!(outcome.matched.is_empty());
        assert!(outcome.is_empty);
        assert_eq!(outcome.changed.len(), 10);
        assert!(catalog.iter().all(|loc| !loc.visible));
    }

    #[test]
    fn test_query_is_a_regex_fragment() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("br.+lyn", &mut catalog);
        assert_eq!(names(&catalog, &outcome.matched), vec!["Brooklyn"]);

        // Alternation works too.
        let outcome = FilterEngine::new().apply("queens|harlem", &mut catalog);
        assert_eq!(names(&catalog, &outcome.matched), vec!["Queens", "Harlem"]);
    }

    #[test]
    fn test_match_spans_name_region_concatenation() {
        let mut catalog = default_catalog();
        // "Soho" + "NY" concatenated is "SohoNY".
        let outcome = FilterEngine::new().apply("sohony", &mut catalog);
        assert_eq!(names(&catalog, &outcome.matched), vec!["Soho"]);
    }

    #[test]
    fn test_invalid_fragment_matches_nothing() {
        let mut catalog = default_catalog();
        let outcome = FilterEngine::new().apply("(unclosed", &mut catalog);
        assert!(outcome.matched.is_empty());
        assert!(outcome.is_empty);
    }

    #[test]
    fn test_changed_tracks_membership_flips_only() {
        let mut catalog = default_catalog();
        let engine = FilterEngine::new();

        let first = engine.apply("park", &mut catalog);
        assert_eq!(first.changed.len(), 6); // six neighborhoods hidden

        // Same query again: memberships are stable.
        let second = engine.apply("park", &mut catalog);
        assert!(second.changed.is_empty());

        // Reset: the six come back.
        let third = engine.apply("", &mut catalog);
        assert_eq!(third.changed.len(), 6);
    }
}
