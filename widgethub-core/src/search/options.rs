//! Search tuning knobs

use serde::{Deserialize, Serialize};

/// Default fuzziness: fraction of the query term length forgiven as edits
pub const DEFAULT_FUZZY: f64 = 0.2;

/// Default cap on edit distance regardless of term length
pub const DEFAULT_MAX_FUZZY: usize = 6;

/// Default weight of a prefix match relative to an exact match
pub const DEFAULT_PREFIX_WEIGHT: f64 = 0.375;

/// Default weight of a fuzzy match relative to an exact match
pub const DEFAULT_FUZZY_WEIGHT: f64 = 0.45;

/// Options for building and querying the search index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    /// Match indexed terms that start with a query term
    pub prefix: bool,

    /// Edit distance allowed per query term, as a fraction of its length
    /// (`0.2` forgives one edit in a 5-7 character term). `0` disables it.
    pub fuzzy: f64,

    /// Upper bound on the edit distance
    pub max_fuzzy: usize,

    pub prefix_weight: f64,

    pub fuzzy_weight: f64,

    /// Per-field score multipliers
    pub boost: FieldBoosts,
}

/// Score multipliers for the indexed widget fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBoosts {
    pub name: f64,
    pub description: f64,
    pub tags: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            prefix: true,
            fuzzy: DEFAULT_FUZZY,
            max_fuzzy: DEFAULT_MAX_FUZZY,
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            fuzzy_weight: DEFAULT_FUZZY_WEIGHT,
            boost: FieldBoosts::default(),
        }
    }
}

impl Default for FieldBoosts {
    fn default() -> Self {
        Self {
            name: 1.0,
            description: 1.0,
            tags: 1.0,
        }
    }
}

impl SearchOptions {
    /// Maximum edit distance for a query term of `term_len` characters
    pub fn max_distance(&self, term_len: usize) -> usize {
        if self.fuzzy <= 0.0 {
            return 0;
        }
        let distance = (term_len as f64 * self.fuzzy).round() as usize;
        distance.min(self.max_fuzzy)
    }
}
