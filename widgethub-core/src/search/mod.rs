//! widgethub Search - ranked fuzzy search over the widget catalog
//!
//! The index is built once over the fixed widget list and is read-only
//! afterwards. Queries are tolerant of typos and of partial (prefix)
//! terms; an empty query means "no filter" and returns every widget.
//!
//! Matching sits behind the [`Matcher`] trait so the ranking strategy
//! can be swapped without touching callers. [`FuzzyMatcher`] is the
//! default.

mod fuzzy;
mod index;
mod options;
mod tokenizer;

pub use fuzzy::{bounded_levenshtein, Field, FuzzyMatcher};
pub use index::{SearchHit, SearchIndex};
pub use options::{
    FieldBoosts, SearchOptions, DEFAULT_FUZZY, DEFAULT_FUZZY_WEIGHT, DEFAULT_MAX_FUZZY,
    DEFAULT_PREFIX_WEIGHT,
};
pub use tokenizer::tokenize;

/// A matched document and its relevance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    /// Position of the document in the indexed corpus
    pub doc: usize,

    pub score: f64,
}

/// Approximate matching over a corpus fixed at construction
///
/// Implementations return matching documents ordered by descending
/// score, with ties kept in corpus order. The same query must always
/// produce the same ranking.
pub trait Matcher: Send + Sync {
    fn rank(&self, query: &str) -> Vec<ScoredDoc>;
}
