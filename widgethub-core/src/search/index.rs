//! Search index over the catalog widgets

use serde::Serialize;
use std::fmt;
use tracing::debug;

use super::{FuzzyMatcher, Matcher, SearchOptions};
use crate::catalog::Widget;

/// A search result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit<'a> {
    pub widget: &'a Widget,

    /// Relevance, `0.0` for the unfiltered listing
    pub score: f64,
}

/// Immutable search index over a fixed widget list
pub struct SearchIndex {
    widgets: Vec<Widget>,
    matcher: Box<dyn Matcher>,
}

impl fmt::Debug for SearchIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchIndex")
            .field("widgets", &self.widgets.len())
            .finish_non_exhaustive()
    }
}

impl SearchIndex {
    /// Build the index with the default fuzzy matcher
    pub fn new(widgets: Vec<Widget>, options: SearchOptions) -> Self {
        let matcher = FuzzyMatcher::new(&widgets, options);
        debug!(
            "Built search index over {} widgets ({} terms)",
            widgets.len(),
            matcher.term_count()
        );
        Self::with_matcher(widgets, Box::new(matcher))
    }

    /// Build the index around a custom matcher
    ///
    /// The matcher must have been built over `widgets` in the same order.
    pub fn with_matcher(widgets: Vec<Widget>, matcher: Box<dyn Matcher>) -> Self {
        Self { widgets, matcher }
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Widgets matching `query`, best first
    pub fn search(&self, query: &str) -> Vec<&Widget> {
        self.search_with_scores(query)
            .into_iter()
            .map(|hit| hit.widget)
            .collect()
    }

    /// Widgets matching `query` with their scores, best first
    ///
    /// A blank query returns every widget in catalog order.
    pub fn search_with_scores(&self, query: &str) -> Vec<SearchHit<'_>> {
        if query.trim().is_empty() {
            return self
                .widgets
                .iter()
                .map(|widget| SearchHit { widget, score: 0.0 })
                .collect();
        }

        let hits: Vec<SearchHit<'_>> = self
            .matcher
            .rank(query)
            .into_iter()
            .filter_map(|scored| {
                self.widgets.get(scored.doc).map(|widget| SearchHit {
                    widget,
                    score: scored.score,
                })
            })
            .collect();

        debug!("Search '{}' matched {} widgets", query, hits.len());
        hits
    }
}
