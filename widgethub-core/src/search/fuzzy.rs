//! Fuzzy prefix matcher with BM25+ scoring
//!
//! Terms from each widget field go into an inverted index. A query term
//! matches an indexed term exactly, as a prefix of it, or within a small
//! Levenshtein distance. Each match is scored with BM25+ and scaled down
//! for prefix and fuzzy matches so exact hits rank first.

use std::collections::BTreeMap;
use tracing::trace;

use super::tokenizer::tokenize;
use super::{Matcher, ScoredDoc, SearchOptions};
use crate::catalog::Widget;

/// BM25 term frequency saturation
const BM25_K1: f64 = 1.2;

/// BM25 field length normalization
const BM25_B: f64 = 0.7;

/// BM25+ lower bound on the term frequency component
const BM25_D: f64 = 0.5;

/// Penalty per extra character of a prefix match
const PREFIX_LENGTH_PENALTY: f64 = 0.3;

/// Indexed widget fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Tags,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Description, Field::Tags];

    fn slot(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Description => 1,
            Field::Tags => 2,
        }
    }

    fn tokens(self, widget: &Widget) -> Vec<String> {
        match self {
            Field::Name => tokenize(&widget.name),
            Field::Description => tokenize(&widget.description),
            Field::Tags => widget.tags.iter().flat_map(|tag| tokenize(tag)).collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct Posting {
    doc: usize,
    field: Field,
    frequency: u32,
}

#[derive(Debug, Clone, Default)]
struct TermEntry {
    postings: Vec<Posting>,
    /// Number of documents containing the term, per field
    document_frequency: [usize; 3],
}

/// Default matcher: inverted index over widget name, description and tags
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    options: SearchOptions,
    terms: BTreeMap<String, TermEntry>,
    field_lengths: Vec<[usize; 3]>,
    average_field_lengths: [f64; 3],
}

impl FuzzyMatcher {
    /// Index `widgets`; document ids are positions in the slice
    pub fn new(widgets: &[Widget], options: SearchOptions) -> Self {
        let mut terms: BTreeMap<String, TermEntry> = BTreeMap::new();
        let mut field_lengths = Vec::with_capacity(widgets.len());

        for (doc, widget) in widgets.iter().enumerate() {
            let mut lengths = [0usize; 3];

            for field in Field::ALL {
                let tokens = field.tokens(widget);
                lengths[field.slot()] = tokens.len();

                let mut frequencies: BTreeMap<String, u32> = BTreeMap::new();
                for token in tokens {
                    *frequencies.entry(token).or_insert(0) += 1;
                }

                for (term, frequency) in frequencies {
                    let entry = terms.entry(term).or_default();
                    entry.document_frequency[field.slot()] += 1;
                    entry.postings.push(Posting {
                        doc,
                        field,
                        frequency,
                    });
                }
            }

            field_lengths.push(lengths);
        }

        let mut average_field_lengths = [0.0; 3];
        if !field_lengths.is_empty() {
            for field in Field::ALL {
                let total: usize = field_lengths.iter().map(|l| l[field.slot()]).sum();
                average_field_lengths[field.slot()] = total as f64 / field_lengths.len() as f64;
            }
        }

        trace!(
            "Indexed {} widgets into {} terms",
            field_lengths.len(),
            terms.len()
        );

        Self {
            options,
            terms,
            field_lengths,
            average_field_lengths,
        }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Number of distinct indexed terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// How well `term` answers `query_term`, if at all
    ///
    /// Exact matches weigh 1.0. Prefix and fuzzy matches are scaled by
    /// their configured weight and shrink as the terms diverge. When a
    /// term qualifies both ways the better weight wins.
    fn match_weight(&self, query_term: &str, term: &str) -> Option<f64> {
        if query_term == term {
            return Some(1.0);
        }

        let query_len = query_term.chars().count();
        let term_len = term.chars().count();
        let mut best: Option<f64> = None;

        if self.options.prefix && term.starts_with(query_term) {
            let extra = term_len.saturating_sub(query_len) as f64;
            let weight = self.options.prefix_weight * query_len as f64
                / (query_len as f64 + PREFIX_LENGTH_PENALTY * extra);
            best = Some(weight);
        }

        let max_distance = self.options.max_distance(query_len);
        if max_distance > 0 {
            if let Some(distance) = bounded_levenshtein(query_term, term, max_distance) {
                let weight = self.options.fuzzy_weight * query_len as f64
                    / (query_len as f64 + distance as f64);
                best = Some(best.map_or(weight, |b| b.max(weight)));
            }
        }

        best
    }

    fn field_boost(&self, field: Field) -> f64 {
        match field {
            Field::Name => self.options.boost.name,
            Field::Description => self.options.boost.description,
            Field::Tags => self.options.boost.tags,
        }
    }

    /// BM25+ relevance of one posting
    fn bm25(&self, posting: &Posting, document_frequency: usize) -> f64 {
        let doc_count = self.field_lengths.len() as f64;
        let df = document_frequency as f64;
        let idf = (1.0 + (doc_count - df + 0.5) / (df + 0.5)).ln();

        let slot = posting.field.slot();
        let field_length = self.field_lengths[posting.doc][slot] as f64;
        let average = self.average_field_lengths[slot];
        let relative_length = if average > 0.0 {
            field_length / average
        } else {
            1.0
        };

        let tf = posting.frequency as f64;
        let normalized_tf =
            BM25_D + tf * (BM25_K1 + 1.0) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * relative_length));

        idf * normalized_tf
    }
}

impl Matcher for FuzzyMatcher {
    fn rank(&self, query: &str) -> Vec<ScoredDoc> {
        let mut scores: BTreeMap<usize, f64> = BTreeMap::new();

        for query_term in tokenize(query) {
            for (term, entry) in &self.terms {
                let Some(weight) = self.match_weight(&query_term, term) else {
                    continue;
                };

                for posting in &entry.postings {
                    let df = entry.document_frequency[posting.field.slot()];
                    let score = weight * self.field_boost(posting.field) * self.bm25(posting, df);
                    *scores.entry(posting.doc).or_insert(0.0) += score;
                }
            }
        }

        // BTreeMap yields catalog order; the stable sort keeps it for ties
        let mut ranked: Vec<ScoredDoc> = scores
            .into_iter()
            .filter(|(_, score)| *score > 0.0)
            .map(|(doc, score)| ScoredDoc { doc, score })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Levenshtein distance between `a` and `b`, or `None` when it exceeds `max`
pub fn bounded_levenshtein(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len().abs_diff(b_chars.len()) > max {
        return None;
    }

    let distance = levenshtein(&a_chars, &b_chars);
    (distance <= max).then_some(distance)
}

fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            let deletion = prev[j + 1] + 1;
            let insertion = curr[j] + 1;
            let substitution = prev[j] + cost;
            curr[j + 1] = deletion.min(insertion).min(substitution);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
